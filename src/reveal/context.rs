use log::debug;

use super::section::SectionSpec;
use super::target::{Scope, StyleTarget};
use super::timeline::{Timeline, Tween};

/// The timeline built for one section, bound to that section's subtree.
///
/// Owned by exactly one controller. Reverting is idempotent, and dropping
/// the context reverts it, so styles cannot outlive their section.
pub struct RevealContext<T: StyleTarget> {
    section: String,
    timeline: Timeline<T>,
    reverted: bool,
}

impl<T: StyleTarget> RevealContext<T> {
    /// Builds one tween per group with at least one element in scope and
    /// advances to `now`, which starts every group without a trigger.
    pub fn build<S>(scope: &S, spec: &SectionSpec, now: f64) -> Self
    where
        S: Scope<Target = T>,
    {
        let mut timeline = Timeline::new();
        for group in &spec.groups {
            let targets = scope.select_all(&group.selector);
            if targets.is_empty() {
                debug!("{}: nothing matches {}, skipping", spec.id, group.selector);
                continue;
            }
            timeline.add(Tween::from(
                format!("{} {}", spec.id, group.selector),
                targets,
                group.from,
                group.timing(),
                group.trigger.clone(),
            ));
        }
        debug!("{}: built timeline with {} groups", spec.id, timeline.tweens().len());

        let mut context = Self {
            section: spec.id.clone(),
            timeline,
            reverted: false,
        };
        context.advance(scope, now);
        context
    }

    pub fn advance<S>(&mut self, scope: &S, now: f64)
    where
        S: Scope<Target = T>,
    {
        if self.reverted {
            return;
        }
        let viewport = scope.viewport();
        let section = &self.section;
        // A trigger with nothing to measure fires at once, otherwise its
        // targets would stay pinned at the from-pose for the whole mount.
        self.timeline.advance(now, |trigger| match scope.rect_of(&trigger.selector) {
            Some(rect) => trigger.start.reached(rect, viewport),
            None => {
                debug!("{}: trigger {} is missing, starting now", section, trigger.selector);
                true
            }
        });
    }

    #[cfg(test)]
    pub fn timeline(&self) -> &Timeline<T> {
        &self.timeline
    }

    pub fn is_complete(&self) -> bool {
        self.reverted || self.timeline.is_complete()
    }

    pub fn is_animating(&self) -> bool {
        !self.reverted && self.timeline.is_animating()
    }

    pub fn awaits_trigger(&self) -> bool {
        !self.reverted && self.timeline.has_pending()
    }

    pub fn revert(&mut self) {
        if self.reverted {
            return;
        }
        self.timeline.revert();
        self.reverted = true;
        debug!("{}: reverted", self.section);
    }
}

impl<T: StyleTarget> Drop for RevealContext<T> {
    fn drop(&mut self) {
        self.revert();
    }
}
