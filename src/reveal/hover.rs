//! Pointer-hover tilt for cards.
//!
//! Unlike the reveal this is repeatable and has no lifecycle: every enter
//! eases towards the hover pose, every leave eases back to rest, and either
//! can interrupt the other. It never looks at a section's armed state.

use super::easing::Ease;
use super::style::Motion;

#[derive(Debug, Clone, PartialEq)]
pub struct TiltHover {
    hover: Motion,
    duration: f64,
    ease: Ease,
    from: Motion,
    to: Motion,
    started_at: f64,
    hovered: bool,
}

const HOVER_SECONDS: f64 = 0.3;

impl TiltHover {
    pub fn new(hover: Motion, duration: f64, ease: Ease) -> Self {
        Self {
            hover,
            duration: duration.max(0.0),
            ease,
            from: Motion::IDENTITY,
            to: Motion::IDENTITY,
            started_at: f64::NEG_INFINITY,
            hovered: false,
        }
    }

    pub fn service_card() -> Self {
        Self::new(
            Motion {
                y: -10.0,
                rotate_x: 5.0,
                rotate_y: 5.0,
                scale: 1.02,
                ..Motion::IDENTITY
            },
            HOVER_SECONDS,
            Ease::cubic_bezier(0.25, 0.1, 0.25, 1.0),
        )
    }

    pub fn service_icon() -> Self {
        Self::new(
            Motion {
                scale: 1.1,
                rotate: 5.0,
                ..Motion::IDENTITY
            },
            HOVER_SECONDS,
            Ease::cubic_bezier(0.0, 0.0, 0.58, 1.0),
        )
    }

    pub fn testimonial_card() -> Self {
        Self::new(
            Motion {
                y: -8.0,
                rotate_x: 2.0,
                rotate_y: 2.0,
                scale: 1.02,
                ..Motion::IDENTITY
            },
            HOVER_SECONDS,
            Ease::cubic_bezier(0.0, 0.0, 0.58, 1.0),
        )
    }

    pub fn client_logo() -> Self {
        Self::new(
            Motion {
                y: -5.0,
                scale: 1.05,
                ..Motion::IDENTITY
            },
            HOVER_SECONDS,
            Ease::cubic_bezier(0.0, 0.0, 0.58, 1.0),
        )
    }

    #[cfg(test)]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn enter(&mut self, now: f64) {
        self.hovered = true;
        self.retarget(now, self.hover);
    }

    pub fn leave(&mut self, now: f64) {
        self.hovered = false;
        self.retarget(now, Motion::IDENTITY);
    }

    /// Continue from wherever the element is right now.
    fn retarget(&mut self, now: f64, to: Motion) {
        self.from = self.pose(now);
        self.to = to;
        self.started_at = now;
    }

    pub fn pose(&self, now: f64) -> Motion {
        if self.is_settled(now) {
            return self.to;
        }
        let progress = (now - self.started_at) / self.duration;
        self.from.lerp(&self.to, self.ease.evaluate(progress))
    }

    pub fn is_settled(&self, now: f64) -> bool {
        now - self.started_at >= self.duration
    }

    /// Back at rest with nothing left to animate.
    pub fn is_idle(&self, now: f64) -> bool {
        !self.hovered && self.is_settled(now)
    }
}
