use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

/// Seconds on the same clock `requestAnimationFrame` timestamps use.
pub fn now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now() / 1000.0)
        .unwrap_or_else(|| web_sys::js_sys::Date::now() / 1000.0)
}

type Slot = RefCell<Option<AnimationFrame>>;

/// Calls `on_frame` once per animation frame with the time in seconds until
/// it returns `false`. Dropping the loop drops the pending frame, which
/// cancels it.
pub struct FrameLoop {
    frame: Rc<Slot>,
}

impl FrameLoop {
    pub fn start<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let frame = Rc::new(RefCell::new(None));
        request(Rc::downgrade(&frame), on_frame);
        Self { frame }
    }

    pub fn is_running(&self) -> bool {
        self.frame.borrow().is_some()
    }
}

fn request<F>(slot: Weak<Slot>, mut on_frame: F)
where
    F: FnMut(f64) -> bool + 'static,
{
    let Some(frame) = slot.upgrade() else {
        return;
    };
    let handle = request_animation_frame(move |timestamp| {
        let Some(frame) = slot.upgrade() else {
            return;
        };
        frame.borrow_mut().take();
        if on_frame(timestamp / 1000.0) {
            request(slot, on_frame);
        }
    });
    *frame.borrow_mut() = Some(handle);
}
