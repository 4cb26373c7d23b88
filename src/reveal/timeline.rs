//! One-shot "from" tweens and the timeline that sequences them.
//!
//! A tween snapshots each target's inline style, pins the target at the
//! from-pose straight away (so nothing flashes at its final position before
//! the reveal starts), then eases it back to rest. When a target finishes,
//! its snapshot is written back, leaving no inline transform or opacity
//! behind.

use log::debug;

use super::section::{Timing, TriggerSpec};
use super::style::{InlineStyle, Motion};
use super::target::StyleTarget;

struct Track<T> {
    target: T,
    original: InlineStyle,
    settled: bool,
}

pub struct Tween<T: StyleTarget> {
    label: String,
    tracks: Vec<Track<T>>,
    from: Motion,
    timing: Timing,
    trigger: Option<TriggerSpec>,
    started_at: Option<f64>,
}

impl<T: StyleTarget> Tween<T> {
    pub fn from(
        label: impl Into<String>,
        targets: Vec<T>,
        from: Motion,
        timing: Timing,
        trigger: Option<TriggerSpec>,
    ) -> Self {
        let tracks = targets
            .into_iter()
            .map(|target| {
                let original = target.inline_style();
                target.apply(&from);
                Track {
                    target,
                    original,
                    settled: false,
                }
            })
            .collect();

        Self {
            label: label.into(),
            tracks,
            from,
            timing,
            trigger,
            started_at: None,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn trigger(&self) -> Option<&TriggerSpec> {
        self.trigger.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.started_at.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.tracks.iter().all(|track| track.settled)
    }

    /// Starts the tween. Later calls are ignored.
    pub fn start(&mut self, now: f64) {
        if self.started_at.is_none() {
            debug!("{}: starting {} targets", self.label, self.tracks.len());
            self.started_at = Some(now);
        }
    }

    pub fn start_time_of(&self, index: usize) -> Option<f64> {
        if index >= self.tracks.len() {
            return None;
        }
        self.started_at
            .map(|start| start + index as f64 * self.timing.stagger)
    }

    /// When the last target reaches rest.
    #[cfg(test)]
    pub fn end_time(&self) -> Option<f64> {
        let last = self.tracks.len().checked_sub(1)?;
        self.start_time_of(last)
            .map(|start| start + self.timing.duration)
    }

    /// Writes every target's pose for time `now`. Targets whose stagger slot
    /// has not come up yet stay at the from-pose.
    pub fn render(&mut self, now: f64) {
        let Some(started_at) = self.started_at else {
            return;
        };

        for (index, track) in self.tracks.iter_mut().enumerate() {
            if track.settled {
                continue;
            }
            let local = now - (started_at + index as f64 * self.timing.stagger);
            if local < 0.0 {
                continue;
            }

            let progress = if self.timing.duration > 0.0 {
                local / self.timing.duration
            } else {
                1.0
            };

            if progress >= 1.0 {
                track.target.restore(&track.original);
                track.settled = true;
            } else {
                let eased = self.timing.ease.evaluate(progress);
                track.target.apply(&self.from.lerp(&Motion::IDENTITY, eased));
            }
        }
    }

    /// Undo every write this tween still has outstanding. Targets that already
    /// settled were restored at that point and are left alone.
    pub fn revert(&mut self) {
        for track in self.tracks.iter_mut().filter(|track| !track.settled) {
            track.target.restore(&track.original);
            track.settled = true;
        }
    }
}

pub struct Timeline<T: StyleTarget> {
    tweens: Vec<Tween<T>>,
}

impl<T: StyleTarget> Timeline<T> {
    pub fn new() -> Self {
        Self { tweens: Vec::new() }
    }

    pub fn add(&mut self, tween: Tween<T>) {
        self.tweens.push(tween);
    }

    pub fn tweens(&self) -> &[Tween<T>] {
        &self.tweens
    }

    /// Starts every pending tween whose trigger has fired (or that has none),
    /// then renders all started tweens at `now`.
    pub fn advance<F>(&mut self, now: f64, triggered: F)
    where
        F: Fn(&TriggerSpec) -> bool,
    {
        for tween in &mut self.tweens {
            if tween.is_pending() && tween.trigger().map_or(true, &triggered) {
                tween.start(now);
            }
            tween.render(now);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.tweens.iter().all(Tween::is_complete)
    }

    /// Some started tween still has targets in flight.
    pub fn is_animating(&self) -> bool {
        self.tweens
            .iter()
            .any(|tween| !tween.is_pending() && !tween.is_complete())
    }

    pub fn has_pending(&self) -> bool {
        self.tweens.iter().any(Tween::is_pending)
    }

    pub fn revert(&mut self) {
        for tween in &mut self.tweens {
            tween.revert();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::easing::{Ease, EaseMode};
    use crate::reveal::testing::FakeElement;

    const EPSILON: f64 = 1e-9;

    fn timing(duration: f64, stagger: f64) -> Timing {
        Timing {
            duration,
            stagger,
            ease: Ease::power(3, EaseMode::Out),
        }
    }

    fn elements(count: usize) -> Vec<FakeElement> {
        (0..count).map(|_| FakeElement::new()).collect()
    }

    #[test]
    fn pins_from_pose_at_build() {
        let targets = elements(2);
        let tween = Tween::from(".card", targets.clone(), Motion::hidden_below(80.0), timing(1.0, 0.1), None);

        assert!(tween.is_pending());
        for target in &targets {
            assert_eq!(target.motion(), Some(Motion::hidden_below(80.0)));
        }
    }

    #[test]
    fn stagger_offsets_are_monotonic() {
        let mut tween = Tween::from(".card", elements(5), Motion::hidden_below(80.0), timing(1.0, 0.12), None);
        assert_eq!(tween.start_time_of(0), None);

        tween.start(2.0);
        for i in 1..tween.len() {
            let previous = tween.start_time_of(i - 1).unwrap();
            let current = tween.start_time_of(i).unwrap();
            assert!(current + EPSILON >= previous + 0.12);
        }
        assert_eq!(tween.start_time_of(5), None);
        assert!((tween.end_time().unwrap() - (2.0 + 4.0 * 0.12 + 1.0)).abs() < EPSILON);
    }

    #[test]
    fn waiting_targets_hold_the_from_pose() {
        let targets = elements(3);
        let mut tween = Tween::from(".card", targets.clone(), Motion::hidden_below(100.0), timing(1.0, 0.5), None);
        tween.start(0.0);
        tween.render(0.25);

        let first = targets[0].motion().unwrap();
        assert!(first.y < 100.0 && first.y > 0.0);
        assert!(first.opacity > 0.0 && first.opacity < 1.0);
        assert_eq!(targets[1].motion(), Some(Motion::hidden_below(100.0)));
        assert_eq!(targets[2].motion(), Some(Motion::hidden_below(100.0)));
    }

    #[test]
    fn finished_targets_lose_their_overrides() {
        let styled = FakeElement::with_style(Some("translateZ(0)"), None);
        let targets = vec![FakeElement::new(), styled.clone()];
        let mut tween = Tween::from(".card", targets.clone(), Motion::hidden_below(50.0), timing(0.8, 0.0), None);
        tween.start(0.0);
        tween.render(0.8);

        assert!(tween.is_complete());
        assert!(targets[0].is_at_rest());
        assert_eq!(styled.style().transform.as_deref(), Some("translateZ(0)"));
        assert_eq!(styled.style().opacity, None);
    }

    #[test]
    fn zero_duration_snaps_to_rest() {
        let targets = elements(1);
        let mut tween = Tween::from(".x", targets.clone(), Motion::hidden_below(10.0), timing(0.0, 0.0), None);
        tween.start(0.0);
        tween.render(0.0);
        assert!(tween.is_complete());
        assert!(targets[0].is_at_rest());
    }

    #[test]
    fn revert_mid_flight_restores_everything() {
        let targets = elements(3);
        let mut tween = Tween::from(".card", targets.clone(), Motion::hidden_below(80.0), timing(1.0, 0.1), None);
        tween.start(0.0);
        tween.render(0.5);
        tween.revert();

        assert!(tween.is_complete());
        for target in &targets {
            assert!(target.is_at_rest());
        }
    }

    #[test]
    fn empty_tween_is_complete() {
        let tween: Tween<FakeElement> = Tween::from(".none", Vec::new(), Motion::IDENTITY, timing(1.0, 0.1), None);
        assert!(tween.is_complete());
        assert_eq!(tween.end_time(), None);
    }

    #[test]
    fn timeline_holds_triggered_tweens_until_fired() {
        let cards = elements(2);
        let heading = elements(1);
        let trigger = TriggerSpec {
            selector: ".grid".to_string(),
            start: "top 80%".parse().unwrap(),
        };

        let mut timeline = Timeline::new();
        timeline.add(Tween::from(".card", cards.clone(), Motion::hidden_below(80.0), timing(1.0, 0.1), Some(trigger)));
        timeline.add(Tween::from(".heading", heading.clone(), Motion::hidden_below(50.0), timing(0.8, 0.0), None));

        timeline.advance(0.0, |_| false);
        assert!(timeline.has_pending());
        assert!(timeline.is_animating());

        timeline.advance(1.0, |_| false);
        assert!(heading[0].is_at_rest());
        assert_eq!(cards[0].motion(), Some(Motion::hidden_below(80.0)));
        assert!(!timeline.is_animating());
        assert!(!timeline.is_complete());

        timeline.advance(2.0, |trigger| trigger.selector == ".grid");
        assert!(!timeline.has_pending());
        assert_eq!(timeline.tweens()[0].start_time_of(0), Some(2.0));

        timeline.advance(3.5, |_| false);
        assert!(timeline.is_complete());
        assert!(cards.iter().all(FakeElement::is_at_rest));
    }
}
