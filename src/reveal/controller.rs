//! Per-section lifecycle: `Unarmed -> Armed -> Played -> Disposed`.
//!
//! `Armed` means the timeline has been built and is in flight (or waiting on
//! a group trigger). `Played` means every group reached rest and the
//! timeline has been discarded. Both `Armed` and `Played` dispose through the
//! same revert path, and nothing ever returns to `Unarmed`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use super::context::RevealContext;
use super::section::SectionSpec;
use super::target::{Scope, StyleTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPhase {
    Unarmed,
    Armed,
    Played,
    Disposed,
}

pub struct RevealController<T: StyleTarget> {
    spec: SectionSpec,
    phase: SectionPhase,
    context: Option<RevealContext<T>>,
}

pub type SharedController<T> = Rc<RefCell<RevealController<T>>>;

impl<T: StyleTarget> RevealController<T> {
    pub fn new(spec: SectionSpec) -> Self {
        Self {
            spec,
            phase: SectionPhase::Unarmed,
            context: None,
        }
    }

    #[cfg(test)]
    pub fn shared(spec: SectionSpec) -> SharedController<T> {
        Rc::new(RefCell::new(Self::new(spec)))
    }

    pub fn phase(&self) -> SectionPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn context(&self) -> Option<&RevealContext<T>> {
        self.context.as_ref()
    }

    /// Builds the timeline the first time it is called while armed. Any later
    /// call is a no-op, so re-renders can never stack a second timeline.
    fn play<S>(&mut self, scope: &S, now: f64)
    where
        S: Scope<Target = T>,
    {
        match self.phase {
            SectionPhase::Unarmed => {
                debug!("{}: arming", self.spec.id);
                self.phase = SectionPhase::Armed;
            }
            SectionPhase::Armed if self.context.is_none() => {}
            _ => return,
        }

        self.context = Some(RevealContext::build(scope, &self.spec, now));
        self.settle();
    }

    /// Moves the in-flight timeline forward. Returns the phase afterwards.
    pub fn advance<S>(&mut self, scope: &S, now: f64) -> SectionPhase
    where
        S: Scope<Target = T>,
    {
        if let Some(context) = self.context.as_mut() {
            context.advance(scope, now);
            self.settle();
        }
        self.phase
    }

    fn settle(&mut self) {
        if self.phase != SectionPhase::Armed {
            return;
        }
        if self.context.as_ref().map_or(false, RevealContext::is_complete) {
            self.context = None;
            self.phase = SectionPhase::Played;
            debug!("{}: played", self.spec.id);
        }
    }

    /// Targets are still moving, so the host should keep sending frames.
    pub fn needs_frames(&self) -> bool {
        self.context.as_ref().map_or(false, RevealContext::is_animating)
    }

    /// Some group is still waiting on its scroll trigger.
    pub fn awaits_trigger(&self) -> bool {
        self.context.as_ref().map_or(false, RevealContext::awaits_trigger)
    }

    /// Reverts whatever the timeline still has applied, mid-flight or not.
    pub fn dispose(&mut self) {
        if self.phase == SectionPhase::Disposed {
            return;
        }
        if let Some(mut context) = self.context.take() {
            context.revert();
        }
        debug!("{}: disposed from {:?}", self.spec.id, self.phase);
        self.phase = SectionPhase::Disposed;
    }
}

/// Releases a section's reveal. Disposal runs on `dispose()` or on drop,
/// whichever comes first, and at most once.
#[must_use = "dropping the disposer reverts the reveal immediately"]
pub struct Disposer {
    release: Option<Box<dyn FnOnce()>>,
}

impl Disposer {
    fn new<T: StyleTarget + 'static>(controller: Weak<RefCell<RevealController<T>>>) -> Self {
        Self {
            release: Some(Box::new(move || {
                if let Some(controller) = controller.upgrade() {
                    controller.borrow_mut().dispose();
                }
            })),
        }
    }

    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.release();
    }
}

/// Plays the section's reveal once it is armed.
///
/// Returns `None` while unarmed and after disposal. Otherwise the timeline
/// is built if this is the first armed call, and a disposer for it is
/// returned. Calling again while armed never rebuilds.
pub fn run_reveal<S>(controller: &SharedController<S::Target>, scope: &S, armed: bool, now: f64) -> Option<Disposer>
where
    S: Scope,
    S::Target: 'static,
{
    if !armed {
        return None;
    }

    {
        let mut controller = controller.borrow_mut();
        if controller.phase() == SectionPhase::Disposed {
            return None;
        }
        controller.play(scope, now);
    }

    Some(Disposer::new(Rc::downgrade(controller)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::easing::{Ease, EaseMode};
    use crate::reveal::geometry::{Rect, Viewport};
    use crate::reveal::hover::TiltHover;
    use crate::reveal::observer::{ObserveOptions, Observation, VisibilityObserver};
    use crate::reveal::section::GroupSpec;
    use crate::reveal::style::Motion;
    use crate::reveal::testing::{FakeElement, FakeScope};

    const EPSILON: f64 = 1e-9;

    fn three_up() -> SectionSpec {
        SectionSpec {
            id: "demo".to_string(),
            observe: ObserveOptions::with_margin("0px 0px -100px 0px".parse().unwrap()),
            groups: vec![GroupSpec {
                selector: ".reveal".to_string(),
                from: Motion::hidden_below(100.0),
                duration: 1.0,
                stagger: 0.1,
                ease: Ease::power(3, EaseMode::Out),
                trigger: None,
            }],
        }
    }

    fn scope_with(count: usize) -> (FakeScope, Vec<FakeElement>) {
        let mut scope = FakeScope::new(Viewport::new(1200.0, 800.0));
        let elements = scope.add(".reveal", count);
        (scope, elements)
    }

    #[test]
    fn unarmed_does_nothing() {
        let (scope, elements) = scope_with(3);
        let controller = RevealController::shared(three_up());

        assert!(run_reveal(&controller, &scope, false, 0.0).is_none());
        assert_eq!(controller.borrow().phase(), SectionPhase::Unarmed);
        assert!(elements.iter().all(|element| element.applies() == 0));
    }

    #[test]
    fn scroll_into_view_plays_once_with_stagger() {
        let (scope, elements) = scope_with(3);
        let spec = three_up();
        let mut observer = VisibilityObserver::observe(spec.id.clone(), spec.observe);
        let controller = RevealController::shared(spec);
        let viewport = scope.viewport();

        // Scroll down until the root clears the margin.
        let mut disposer = None;
        for top in [1400.0, 1000.0, 750.0, 650.0, 300.0] {
            let root = Rect::new(top, 0.0, 1200.0, 600.0);
            if observer.notify(root, viewport) == Observation::Armed {
                assert_eq!(top, 650.0);
                disposer = run_reveal(&controller, &scope, observer.is_armed(), 0.0);
            }
        }
        let disposer = disposer.expect("section should arm");

        {
            let controller = controller.borrow();
            let tween = &controller.context().unwrap().timeline().tweens()[0];
            assert!((tween.start_time_of(0).unwrap() - 0.0).abs() < EPSILON);
            assert!((tween.start_time_of(1).unwrap() - 0.1).abs() < EPSILON);
            assert!((tween.start_time_of(2).unwrap() - 0.2).abs() < EPSILON);
            assert!((tween.end_time().unwrap() - 1.2).abs() < EPSILON);
        }

        let mut now = 0.0;
        while now < 1.2 {
            now += 1.0 / 60.0;
            controller.borrow_mut().advance(&scope, now);
        }
        assert_eq!(controller.borrow().phase(), SectionPhase::Played);
        assert!(elements.iter().all(FakeElement::is_at_rest));
        let writes: Vec<usize> = elements.iter().map(FakeElement::applies).collect();

        // Scroll up and down a few more times; nothing restarts.
        let mut held = Vec::new();
        for _ in 0..5 {
            for top in [2000.0, 100.0] {
                let root = Rect::new(top, 0.0, 1200.0, 600.0);
                assert_eq!(observer.notify(root, viewport), Observation::Ignored);
                held.extend(run_reveal(&controller, &scope, observer.is_armed(), now));
                controller.borrow_mut().advance(&scope, now + 0.5);
            }
        }
        assert_eq!(controller.borrow().phase(), SectionPhase::Played);
        assert_eq!(elements.iter().map(FakeElement::applies).collect::<Vec<_>>(), writes);
        assert!(elements.iter().all(FakeElement::is_at_rest));

        disposer.dispose();
        assert_eq!(controller.borrow().phase(), SectionPhase::Disposed);
    }

    #[test]
    fn rerunning_while_armed_does_not_stack_timelines() {
        let (scope, elements) = scope_with(2);
        let controller = RevealController::shared(three_up());

        let first = run_reveal(&controller, &scope, true, 0.0);
        controller.borrow_mut().advance(&scope, 0.5);
        let applies: Vec<usize> = elements.iter().map(FakeElement::applies).collect();

        let second = run_reveal(&controller, &scope, true, 0.5);
        assert!(first.is_some() && second.is_some());
        assert_eq!(elements.iter().map(FakeElement::applies).collect::<Vec<_>>(), applies);
        assert_eq!(controller.borrow().context().unwrap().timeline().tweens().len(), 1);
    }

    #[test]
    fn unmount_before_played_reverts_everything() {
        let mut scope = FakeScope::new(Viewport::new(1200.0, 800.0));
        let styled = FakeElement::with_style(Some("translateZ(0)"), Some("0.9"));
        scope.add_element(".reveal", styled.clone());
        let plain = scope.add(".reveal", 2);
        let controller = RevealController::shared(three_up());

        let disposer = run_reveal(&controller, &scope, true, 0.0).unwrap();
        controller.borrow_mut().advance(&scope, 0.35);
        assert_eq!(controller.borrow().phase(), SectionPhase::Armed);
        assert!(plain.iter().any(|element| element.motion().is_some()));

        drop(disposer);

        assert_eq!(controller.borrow().phase(), SectionPhase::Disposed);
        assert!(plain.iter().all(FakeElement::is_at_rest));
        assert_eq!(styled.style().transform.as_deref(), Some("translateZ(0)"));
        assert_eq!(styled.style().opacity.as_deref(), Some("0.9"));
        assert_eq!(styled.motion(), None);
    }

    #[test]
    fn disposed_sections_never_replay() {
        let (scope, elements) = scope_with(2);
        let controller = RevealController::shared(three_up());

        run_reveal(&controller, &scope, true, 0.0).unwrap().dispose();
        let applies: Vec<usize> = elements.iter().map(FakeElement::applies).collect();

        assert!(run_reveal(&controller, &scope, true, 1.0).is_none());
        assert_eq!(controller.borrow_mut().advance(&scope, 2.0), SectionPhase::Disposed);
        assert_eq!(elements.iter().map(FakeElement::applies).collect::<Vec<_>>(), applies);
    }

    #[test]
    fn disposer_outliving_controller_is_harmless() {
        let (scope, elements) = scope_with(1);
        let controller = RevealController::shared(three_up());
        let disposer = run_reveal(&controller, &scope, true, 0.0).unwrap();

        drop(controller);
        assert!(elements[0].is_at_rest());
        disposer.dispose();
    }

    #[test]
    fn section_without_targets_plays_immediately() {
        let scope = FakeScope::new(Viewport::new(1200.0, 800.0));
        let controller = RevealController::shared(three_up());
        let _disposer = run_reveal(&controller, &scope, true, 0.0).unwrap();
        assert_eq!(controller.borrow().phase(), SectionPhase::Played);
        assert!(!controller.borrow().needs_frames());
    }

    #[test]
    fn hover_before_reveal_leaves_the_section_alone() {
        let (scope, elements) = scope_with(3);
        let controller = RevealController::shared(three_up());
        let mut tilt = TiltHover::service_card();
        let surface = FakeElement::new();

        tilt.enter(0.0);
        surface.apply(&tilt.pose(0.15));
        tilt.leave(0.2);
        surface.apply(&tilt.pose(0.6));

        assert_eq!(controller.borrow().phase(), SectionPhase::Unarmed);
        assert!(elements.iter().all(|element| element.applies() == 0));

        let _disposer = run_reveal(&controller, &scope, true, 1.0).unwrap();
        assert_eq!(controller.borrow().phase(), SectionPhase::Armed);
        controller.borrow_mut().advance(&scope, 2.3);
        assert_eq!(controller.borrow().phase(), SectionPhase::Played);
        assert!(elements.iter().all(|element| element.applies() >= 1));
        assert!(elements.iter().all(FakeElement::is_at_rest));
    }

    #[test]
    fn frames_are_needed_only_while_moving() {
        let (scope, _) = scope_with(2);
        let controller = RevealController::shared(three_up());
        assert!(!controller.borrow().needs_frames());

        let _disposer = run_reveal(&controller, &scope, true, 0.0).unwrap();
        assert!(controller.borrow().needs_frames());
        assert!(!controller.borrow().awaits_trigger());

        controller.borrow_mut().advance(&scope, 5.0);
        assert!(!controller.borrow().needs_frames());
    }

    #[test]
    fn cards_without_their_trigger_element_still_come_to_rest() {
        let mut scope = FakeScope::new(Viewport::new(1200.0, 800.0));
        let cards = scope.add(".service-card", 3);
        let heading = scope.add(".services-heading", 1);
        let controller = RevealController::shared(SectionSpec::services());

        let _disposer = run_reveal(&controller, &scope, true, 0.0).unwrap();
        let mut now = 0.0;
        while now < 10.0 {
            now += 1.0 / 60.0;
            controller.borrow_mut().advance(&scope, now);
        }

        assert_eq!(controller.borrow().phase(), SectionPhase::Played);
        assert!(cards.iter().chain(heading.iter()).all(FakeElement::is_at_rest));
    }
}
