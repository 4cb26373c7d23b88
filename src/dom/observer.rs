use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;
use crate::reveal::observer::{ObserveOptions, Observation, VisibilityObserver};

/// `IntersectionObserver` wired to a [`VisibilityObserver`].
///
/// The browser observer is disconnected from inside its own callback as soon
/// as the section arms, and again on drop.
pub struct DomObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl DomObserver {
    pub fn observe<F>(section: &str, element: &Element, options: &ObserveOptions, on_arm: F) -> Result<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut state = VisibilityObserver::observe(section, *options);
        let mut on_arm = Some(on_arm);

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if state.notify_intersecting(entry.is_intersecting()) == Observation::Armed {
                    observer.disconnect();
                    if let Some(on_arm) = on_arm.take() {
                        on_arm();
                    }
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.margin.to_string());
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);
        debug!("{}: observing with margin {}", section, options.margin);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for DomObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
