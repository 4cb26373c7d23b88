use log::debug;
use serde::Deserialize;

use super::geometry::{Rect, RootMargin, Viewport};

/// How a section decides it has entered the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ObserveOptions {
    pub margin: RootMargin,
    /// Fraction of the target's area that has to be inside the adjusted
    /// viewport. Zero means any overlap at all.
    pub threshold: f64,
}

impl ObserveOptions {
    pub fn with_margin(margin: RootMargin) -> Self {
        Self { margin, threshold: 0.0 }
    }

    pub fn is_intersecting(&self, target: Rect, viewport: Viewport) -> bool {
        let area = self.margin.apply(viewport);
        let Some(hit) = target.intersection(&area) else {
            return false;
        };

        if target.area() <= 0.0 {
            return true;
        }
        if self.threshold <= 0.0 {
            return hit.area() > 0.0;
        }
        hit.area() / target.area() >= self.threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// The notification changed nothing.
    Ignored,
    /// This notification armed the section. Returned exactly once.
    Armed,
}

/// Owns a section's armed flag.
///
/// Starts unarmed and observing. The first intersecting notification arms it
/// and stops observation for good, so scrolling the section out and back in
/// can never produce a second arming.
#[derive(Debug)]
pub struct VisibilityObserver {
    section: String,
    options: ObserveOptions,
    armed: bool,
    observing: bool,
}

impl VisibilityObserver {
    pub fn observe(section: impl Into<String>, options: ObserveOptions) -> Self {
        Self {
            section: section.into(),
            options,
            armed: false,
            observing: true,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Feed a measured root rect, e.g. from a scroll handler.
    pub fn notify(&mut self, root: Rect, viewport: Viewport) -> Observation {
        let intersecting = self.observing && self.options.is_intersecting(root, viewport);
        self.notify_intersecting(intersecting)
    }

    /// Feed a notification where the platform already did the geometry, as
    /// `IntersectionObserver` does with its own root margin and threshold.
    pub fn notify_intersecting(&mut self, intersecting: bool) -> Observation {
        if !self.observing || !intersecting {
            return Observation::Ignored;
        }

        self.armed = true;
        self.observing = false;
        debug!("{}: armed", self.section);
        Observation::Armed
    }
}
