use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use web_sys::{Element, Event, HtmlElement};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom::frame::{self, FrameLoop};
use crate::dom::observer::DomObserver;
use crate::dom::scope::{element_rect, viewport, DomScope, DomTarget};
use crate::reveal::controller::{run_reveal, RevealController, SharedController};
use crate::reveal::hover::TiltHover;
use crate::reveal::observer::{ObserveOptions, VisibilityObserver};
use crate::reveal::section::SectionSpec;
use crate::reveal::style::InlineStyle;
use crate::reveal::target::StyleTarget;

type Frames = Rc<RefCell<Option<FrameLoop>>>;

fn is_running(frames: &Frames) -> bool {
    frames.borrow().as_ref().map_or(false, FrameLoop::is_running)
}

/// Flips to `true` the first time the node scrolls into the margin-adjusted
/// viewport, and stays there for the rest of the mount.
///
/// Uses `IntersectionObserver` where available and otherwise measures the
/// node on every scroll and resize.
#[hook]
pub fn use_in_view(node: NodeRef, section: String, options: ObserveOptions) -> bool {
    let armed = use_state(|| false);
    let fallback = use_mut_ref(|| None::<VisibilityObserver>);

    let measure = {
        let node = node.clone();
        let fallback = fallback.clone();
        let set_armed = armed.setter();
        move || {
            let mut fallback = fallback.borrow_mut();
            let Some(observer) = fallback.as_mut().filter(|observer| observer.is_observing()) else {
                return;
            };
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            observer.notify(element_rect(&element), viewport());
            if observer.is_armed() {
                set_armed.set(true);
            }
        }
    };

    {
        let set_armed = armed.setter();
        let measure = measure.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let observer = node.cast::<Element>().and_then(|element| {
                    match DomObserver::observe(&section, &element, options, move || set_armed.set(true)) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            warn!("{}: no IntersectionObserver, measuring on scroll: {}", section, e);
                            *fallback.borrow_mut() = Some(VisibilityObserver::observe(section.clone(), *options));
                            measure();
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            (node, options),
        );
    }

    let on_scroll = move |_: Event| measure();
    use_event_with_window("scroll", on_scroll.clone());
    use_event_with_window("resize", on_scroll);

    *armed
}

/// Starts the frame loop for a controller unless one is already running or
/// nothing is moving.
fn wake(controller: &SharedController<DomTarget>, frames: &Frames, scope: DomScope) {
    if is_running(frames) || !controller.borrow().needs_frames() {
        return;
    }

    let controller = controller.clone();
    *frames.borrow_mut() = Some(FrameLoop::start(move |now| {
        let mut controller = controller.borrow_mut();
        controller.advance(&scope, now);
        controller.needs_frames()
    }));
}

/// Plays a section's reveal once `armed` turns true, and reverts it when the
/// section unmounts.
#[hook]
pub fn use_reveal(node: NodeRef, spec: Rc<SectionSpec>, armed: bool) {
    let controller: SharedController<DomTarget> = use_mut_ref(|| RevealController::new((*spec).clone()));
    let frames: Frames = use_mut_ref(|| None);

    {
        let id = spec.id.clone();
        use_effect_with_deps(
            move |_| {
                info!("{}: mounted", id);
                || ()
            },
            (),
        );
    }

    {
        let controller = controller.clone();
        let frames = frames.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |armed| {
                let disposer = node.cast::<Element>().and_then(|root| {
                    let scope = DomScope::new(root);
                    let disposer = run_reveal(&controller, &scope, *armed, frame::now());
                    wake(&controller, &frames, scope);
                    disposer
                });
                move || {
                    // Stop driving before reverting so no frame lands after.
                    frames.borrow_mut().take();
                    drop(disposer);
                }
            },
            armed,
        );
    }

    let on_scroll = move |_: Event| {
        if !controller.borrow().awaits_trigger() {
            return;
        }
        let Some(root) = node.cast::<Element>() else {
            return;
        };
        let scope = DomScope::new(root);
        controller.borrow_mut().advance(&scope, frame::now());
        wake(&controller, &frames, scope);
    };
    use_event_with_window("scroll", on_scroll.clone());
    use_event_with_window("resize", on_scroll);
}

struct TiltState {
    tilt: TiltHover,
    rest: Option<InlineStyle>,
}

/// Mouse enter/leave callbacks that tilt `surface` towards the hover pose
/// and back. The surface's own inline style is put back once it settles.
#[hook]
pub fn use_tilt(surface: NodeRef, tilt: TiltHover) -> (Callback<MouseEvent>, Callback<MouseEvent>) {
    let state = use_mut_ref(move || TiltState { tilt, rest: None });
    let frames: Frames = use_mut_ref(|| None);

    {
        let frames = frames.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    frames.borrow_mut().take();
                }
            },
            (),
        );
    }

    let hover = |entering: bool| {
        let state = state.clone();
        let frames = frames.clone();
        let surface = surface.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(element) = surface.cast::<HtmlElement>() else {
                return;
            };
            let target = DomTarget::new(element);
            let now = frame::now();
            {
                let mut state = state.borrow_mut();
                if state.rest.is_none() {
                    state.rest = Some(target.inline_style());
                }
                if entering {
                    state.tilt.enter(now);
                } else {
                    state.tilt.leave(now);
                }
            }

            if is_running(&frames) {
                return;
            }
            let state = state.clone();
            *frames.borrow_mut() = Some(FrameLoop::start(move |now| {
                let mut state = state.borrow_mut();
                if state.tilt.is_idle(now) {
                    if let Some(rest) = state.rest.take() {
                        target.restore(&rest);
                    }
                    return false;
                }
                target.apply(&state.tilt.pose(now));
                !state.tilt.is_settled(now)
            }));
        })
    };

    (hover(true), hover(false))
}
