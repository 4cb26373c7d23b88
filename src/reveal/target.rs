use super::geometry::{Rect, Viewport};
use super::style::{InlineStyle, Motion};

/// An element whose inline style an animation may write.
///
/// Methods take `&self`; implementations write through to the element.
pub trait StyleTarget {
    fn inline_style(&self) -> InlineStyle;

    fn apply(&self, motion: &Motion);

    /// Put back exactly what `inline_style` reported, removing properties
    /// that were absent.
    fn restore(&self, style: &InlineStyle);
}

/// The subtree a section's reveal is confined to.
pub trait Scope {
    type Target: StyleTarget;

    /// Elements matching `selector`, in document order. Missing elements
    /// simply do not appear.
    fn select_all(&self, selector: &str) -> Vec<Self::Target>;

    /// Bounding rect of the first element matching `selector`, the scope root
    /// included.
    fn rect_of(&self, selector: &str) -> Option<Rect>;

    fn viewport(&self) -> Viewport;
}
