use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::reveal::geometry::{Rect, Viewport};
use crate::reveal::style::{InlineStyle, Motion};
use crate::reveal::target::{Scope, StyleTarget};

/// A section root in the live document.
#[derive(Clone)]
pub struct DomScope {
    root: Element,
}

impl DomScope {
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}

pub fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.top(), rect.left(), rect.width(), rect.height())
}

pub fn viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::new(0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height)
}

impl Scope for DomScope {
    type Target = DomTarget;

    fn select_all(&self, selector: &str) -> Vec<DomTarget> {
        let nodes = match self.root.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                warn!("Bad reveal selector {}: {:?}", selector, e);
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(DomTarget::new)
            .collect()
    }

    fn rect_of(&self, selector: &str) -> Option<Rect> {
        if self.root.matches(selector).unwrap_or(false) {
            return Some(element_rect(&self.root));
        }
        self.root
            .query_selector(selector)
            .ok()
            .flatten()
            .map(|element| element_rect(&element))
    }

    fn viewport(&self) -> Viewport {
        viewport()
    }
}

/// An element whose inline `transform` and `opacity` an animation drives.
#[derive(Clone)]
pub struct DomTarget {
    element: HtmlElement,
}

impl DomTarget {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    fn read(&self, property: &str) -> Option<String> {
        self.element
            .style()
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn write(&self, property: &str, value: Option<&str>) {
        let style = self.element.style();
        let result = match value {
            Some(value) => style.set_property(property, value),
            None => style.remove_property(property).map(|_| ()),
        };
        if let Err(e) = result {
            warn!("Failed to write {} on animated element: {:?}", property, e);
        }
    }
}

impl StyleTarget for DomTarget {
    fn inline_style(&self) -> InlineStyle {
        InlineStyle {
            transform: self.read("transform"),
            opacity: self.read("opacity"),
        }
    }

    fn apply(&self, motion: &Motion) {
        self.write("transform", Some(&motion.transform_css()));
        self.write("opacity", Some(&motion.opacity_css()));
    }

    fn restore(&self, style: &InlineStyle) {
        self.write("transform", style.transform.as_deref());
        self.write("opacity", style.opacity.as_deref());
    }
}
