//! In-memory stand-ins for DOM elements, used by the engine's unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::geometry::{Rect, Viewport};
use super::style::{InlineStyle, Motion};
use super::target::{Scope, StyleTarget};

#[derive(Debug, Default)]
struct ElementState {
    style: InlineStyle,
    motion: Option<Motion>,
    applies: usize,
}

/// Cheap handle to a fake element; clones share state like DOM handles do.
#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    state: Rc<RefCell<ElementState>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(transform: Option<&str>, opacity: Option<&str>) -> Self {
        let element = Self::new();
        element.state.borrow_mut().style = InlineStyle {
            transform: transform.map(str::to_string),
            opacity: opacity.map(str::to_string),
        };
        element
    }

    pub fn style(&self) -> InlineStyle {
        self.state.borrow().style.clone()
    }

    /// Last pose written by `apply`, cleared by `restore`.
    pub fn motion(&self) -> Option<Motion> {
        self.state.borrow().motion
    }

    pub fn applies(&self) -> usize {
        self.state.borrow().applies
    }

    /// No inline overrides left, so the element renders fully visible and
    /// untransformed.
    pub fn is_at_rest(&self) -> bool {
        let state = self.state.borrow();
        state.motion.is_none() && state.style == InlineStyle::default()
    }
}

impl StyleTarget for FakeElement {
    fn inline_style(&self) -> InlineStyle {
        self.state.borrow().style.clone()
    }

    fn apply(&self, motion: &Motion) {
        let mut state = self.state.borrow_mut();
        state.style = InlineStyle {
            transform: Some(motion.transform_css()),
            opacity: Some(motion.opacity_css()),
        };
        state.motion = Some(*motion);
        state.applies += 1;
    }

    fn restore(&self, style: &InlineStyle) {
        let mut state = self.state.borrow_mut();
        state.style = style.clone();
        state.motion = None;
    }
}

pub struct FakeScope {
    elements: HashMap<String, Vec<FakeElement>>,
    rects: RefCell<HashMap<String, Rect>>,
    viewport: Viewport,
}

impl FakeScope {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            elements: HashMap::new(),
            rects: RefCell::new(HashMap::new()),
            viewport,
        }
    }

    pub fn add(&mut self, selector: &str, count: usize) -> Vec<FakeElement> {
        let elements: Vec<FakeElement> = (0..count).map(|_| FakeElement::new()).collect();
        self.elements
            .entry(selector.to_string())
            .or_default()
            .extend(elements.iter().cloned());
        elements
    }

    pub fn add_element(&mut self, selector: &str, element: FakeElement) {
        self.elements.entry(selector.to_string()).or_default().push(element);
    }

    pub fn place(&self, selector: &str, rect: Rect) {
        self.rects.borrow_mut().insert(selector.to_string(), rect);
    }
}

impl Scope for FakeScope {
    type Target = FakeElement;

    fn select_all(&self, selector: &str) -> Vec<FakeElement> {
        self.elements.get(selector).cloned().unwrap_or_default()
    }

    fn rect_of(&self, selector: &str) -> Option<Rect> {
        self.rects.borrow().get(selector).copied()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
