//! Viewport geometry used by the visibility observer and scroll triggers.
//!
//! All rects are in viewport coordinates, the same space
//! `getBoundingClientRect` reports in: the viewport's top-left corner is the
//! origin and y grows downwards.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::RevealError;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlapping region of two rects. Rects that only touch produce a
    /// zero-sized intersection rather than `None`.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let top = self.top.max(other.top);
        let left = self.left.max(other.left);
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().min(other.right());

        if bottom < top || right < left {
            return None;
        }

        Some(Rect::new(top, left, right - left, bottom - top))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A CSS length that is either absolute or relative to some basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Default for Length {
    fn default() -> Self {
        Length::Px(0.0)
    }
}

impl Length {
    pub fn resolve(self, basis: f64) -> f64 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => basis * pct / 100.0,
        }
    }

    fn parse(token: &str) -> Option<Length> {
        if let Some(pct) = token.strip_suffix('%') {
            return pct.parse().ok().map(Length::Percent);
        }
        token
            .strip_suffix("px")
            .unwrap_or(token)
            .parse()
            .ok()
            .map(Length::Px)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{}px", px),
            Length::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

/// Grows or shrinks the viewport before intersection testing, with the same
/// shorthand rules as CSS `rootMargin`. Negative values shrink it, so
/// `"0px 0px -100px 0px"` arms a section once it is 100px past the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    pub fn uniform(length: Length) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }

    /// The viewport rect after the margin has been applied.
    pub fn apply(&self, viewport: Viewport) -> Rect {
        let top = self.top.resolve(viewport.height);
        let bottom = self.bottom.resolve(viewport.height);
        let left = self.left.resolve(viewport.width);
        let right = self.right.resolve(viewport.width);

        Rect::new(
            -top,
            -left,
            (viewport.width + left + right).max(0.0),
            (viewport.height + top + bottom).max(0.0),
        )
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

impl FromStr for RootMargin {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RevealError::InvalidMargin(s.to_string());
        let values = s
            .split_whitespace()
            .map(Length::parse)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;

        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            _ => return Err(invalid()),
        };

        Ok(Self { top, right, bottom, left })
    }
}

impl TryFrom<String> for RootMargin {
    type Error = RevealError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Where a scroll trigger fires, written `"<element edge> <viewport line>"`.
///
/// `"top 80%"` fires once the trigger element's top edge has scrolled up to
/// 80% of the viewport height. Both halves accept `top`, `center`, `bottom`,
/// a percentage or a pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct TriggerStart {
    pub element: Length,
    pub viewport: Length,
}

impl Default for TriggerStart {
    fn default() -> Self {
        Self {
            element: Length::Percent(0.0),
            viewport: Length::Percent(100.0),
        }
    }
}

impl TriggerStart {
    /// True once the element line is at or above the viewport line. Stays true
    /// for any scroll position further down the page.
    pub fn reached(&self, element: Rect, viewport: Viewport) -> bool {
        let element_line = element.top + self.element.resolve(element.height);
        let viewport_line = self.viewport.resolve(viewport.height);
        element_line <= viewport_line
    }
}

fn edge_or_length(token: &str) -> Option<Length> {
    match token {
        "top" => Some(Length::Percent(0.0)),
        "center" => Some(Length::Percent(50.0)),
        "bottom" => Some(Length::Percent(100.0)),
        other => Length::parse(other),
    }
}

impl FromStr for TriggerStart {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => {
                match (edge_or_length(element), edge_or_length(viewport)) {
                    (Some(element), Some(viewport)) => Ok(Self { element, viewport }),
                    _ => Err(RevealError::InvalidTriggerStart(s.to_string())),
                }
            }
            _ => Err(RevealError::InvalidTriggerStart(s.to_string())),
        }
    }
}

impl TryFrom<String> for TriggerStart {
    type Error = RevealError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_value_margin() {
        let margin: RootMargin = "-100px".parse().unwrap();
        assert_eq!(margin, RootMargin::uniform(Length::Px(-100.0)));
    }

    #[test]
    fn parses_shorthand_margins() {
        let margin: RootMargin = "0px 0px -100px 0px".parse().unwrap();
        assert_eq!(margin.bottom, Length::Px(-100.0));
        assert_eq!(margin.top, Length::Px(0.0));

        let margin: RootMargin = "10% 0".parse().unwrap();
        assert_eq!(margin.top, Length::Percent(10.0));
        assert_eq!(margin.bottom, Length::Percent(10.0));
        assert_eq!(margin.left, Length::Px(0.0));

        let margin: RootMargin = "1px 2px 3px".parse().unwrap();
        assert_eq!(margin.left, Length::Px(2.0));
        assert_eq!(margin.bottom, Length::Px(3.0));
    }

    #[test]
    fn rejects_bad_margins() {
        assert!("".parse::<RootMargin>().is_err());
        assert!("1px 2px 3px 4px 5px".parse::<RootMargin>().is_err());
        assert!(matches!(
            "-100em".parse::<RootMargin>(),
            Err(RevealError::InvalidMargin(_))
        ));
    }

    #[test]
    fn margin_round_trips_through_css() {
        let margin: RootMargin = "0px 0px -100px 0px".parse().unwrap();
        assert_eq!(margin.to_string(), "0px 0px -100px 0px");
    }

    #[test]
    fn negative_margin_shrinks_viewport() {
        let margin: RootMargin = "-100px".parse().unwrap();
        let area = margin.apply(Viewport::new(1200.0, 800.0));
        assert_eq!(area, Rect::new(100.0, 100.0, 1000.0, 600.0));
    }

    #[test]
    fn percent_margin_resolves_against_viewport() {
        let margin: RootMargin = "0 0 -25% 0".parse().unwrap();
        let area = margin.apply(Viewport::new(1000.0, 800.0));
        assert_eq!(area.bottom(), 600.0);
    }

    #[test]
    fn touching_rects_intersect_with_zero_area() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let hit = a.intersection(&b).unwrap();
        assert_eq!(hit.area(), 0.0);

        let c = Rect::new(11.0, 0.0, 10.0, 10.0);
        assert!(a.intersection(&c).is_none());
    }

    #[test]
    fn trigger_start_parses_keywords_and_lengths() {
        let start: TriggerStart = "top 80%".parse().unwrap();
        assert_eq!(start.element, Length::Percent(0.0));
        assert_eq!(start.viewport, Length::Percent(80.0));

        let start: TriggerStart = "center 200px".parse().unwrap();
        assert_eq!(start.element, Length::Percent(50.0));
        assert_eq!(start.viewport, Length::Px(200.0));

        assert!("top".parse::<TriggerStart>().is_err());
        assert!("top 80% extra".parse::<TriggerStart>().is_err());
        assert!("middle 80%".parse::<TriggerStart>().is_err());
    }

    #[test]
    fn trigger_reached_at_and_past_the_line() {
        let start: TriggerStart = "top 80%".parse().unwrap();
        let viewport = Viewport::new(1000.0, 1000.0);

        assert!(!start.reached(Rect::new(801.0, 0.0, 100.0, 300.0), viewport));
        assert!(start.reached(Rect::new(800.0, 0.0, 100.0, 300.0), viewport));
        // Already scrolled far past the start line.
        assert!(start.reached(Rect::new(-2000.0, 0.0, 100.0, 300.0), viewport));
    }
}
