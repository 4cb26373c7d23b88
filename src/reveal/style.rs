use serde::Deserialize;

/// A visual pose an element can be animated to or from.
///
/// The default value is the identity pose: no offset, fully opaque,
/// unscaled, unrotated. Reveal from-states and hover poses are both
/// expressed as deviations from it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Motion {
    /// Vertical offset in px, positive is down.
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
    /// Degrees.
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub rotate: f64,
}

impl Default for Motion {
    fn default() -> Self {
        Motion::IDENTITY
    }
}

const EPSILON: f64 = 1e-6;

impl Motion {
    pub const IDENTITY: Motion = Motion {
        y: 0.0,
        opacity: 1.0,
        scale: 1.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        rotate: 0.0,
    };

    /// Translated down by `offset` px and fully transparent.
    pub fn hidden_below(offset: f64) -> Self {
        Motion {
            y: offset,
            opacity: 0.0,
            ..Motion::IDENTITY
        }
    }

    pub fn lerp(&self, to: &Motion, t: f64) -> Motion {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Motion {
            y: mix(self.y, to.y),
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            scale: mix(self.scale, to.scale),
            rotate_x: mix(self.rotate_x, to.rotate_x),
            rotate_y: mix(self.rotate_y, to.rotate_y),
            rotate: mix(self.rotate, to.rotate),
        }
    }

    #[cfg(test)]
    pub fn is_identity(&self) -> bool {
        self.transform_is_identity() && (self.opacity - 1.0).abs() < EPSILON
    }

    fn transform_is_identity(&self) -> bool {
        self.y.abs() < EPSILON
            && (self.scale - 1.0).abs() < EPSILON
            && self.rotate_x.abs() < EPSILON
            && self.rotate_y.abs() < EPSILON
            && self.rotate.abs() < EPSILON
    }

    /// CSS `transform` value, `none` for the identity pose.
    pub fn transform_css(&self) -> String {
        if self.transform_is_identity() {
            return "none".to_string();
        }

        let mut parts = Vec::new();
        if self.y.abs() >= EPSILON {
            parts.push(format!("translateY({:.3}px)", self.y));
        }
        if self.rotate_x.abs() >= EPSILON {
            parts.push(format!("rotateX({:.3}deg)", self.rotate_x));
        }
        if self.rotate_y.abs() >= EPSILON {
            parts.push(format!("rotateY({:.3}deg)", self.rotate_y));
        }
        if self.rotate.abs() >= EPSILON {
            parts.push(format!("rotate({:.3}deg)", self.rotate));
        }
        if (self.scale - 1.0).abs() >= EPSILON {
            parts.push(format!("scale({:.4})", self.scale));
        }
        parts.join(" ")
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity)
    }
}

/// The inline `transform` and `opacity` an element carried before anything
/// animated it. `None` means the property was not set inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub transform: Option<String>,
    pub opacity: Option<String>,
}
