//! In-memory [`AnimationTarget`] for host tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::split::Fragment;
use super::target::{AnimationTarget, Bounds};

#[derive(Debug, Default)]
struct Node {
    styles: BTreeMap<String, String>,
    style_attribute: Option<String>,
    text: String,
    children: Vec<MockElement>,
    bounds: Bounds,
}

/// A shared handle to a fake element. Clones point at the same node.
#[derive(Clone, Debug, Default)]
pub struct MockElement(Rc<RefCell<Node>>);

impl PartialEq for MockElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl MockElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let element = Self::new();
        element.0.borrow_mut().text = text.to_string();
        element
    }

    pub fn with_children(count: usize) -> Self {
        let element = Self::new();
        element.0.borrow_mut().children = (0..count).map(|_| Self::new()).collect();
        element
    }

    pub fn with_style_attribute(style: &str) -> Self {
        let element = Self::new();
        element.0.borrow_mut().style_attribute = Some(style.to_string());
        element
    }

    pub fn set_bounds(&self, top: f64, height: f64) {
        self.0.borrow_mut().bounds = Bounds::new(top, height);
    }

    pub fn style(&self, name: &str) -> Option<String> {
        self.0.borrow().styles.get(name).cloned()
    }

    pub fn has_styles(&self) -> bool {
        !self.0.borrow().styles.is_empty()
    }

    pub fn raw_style_attribute(&self) -> Option<String> {
        self.0.borrow().style_attribute.clone()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    /// Opacity currently applied, if any.
    pub fn opacity(&self) -> Option<f64> {
        self.style("opacity").and_then(|value| value.parse().ok())
    }
}

impl AnimationTarget for MockElement {
    fn set_style_property(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(name.to_string(), value.to_string());
    }

    fn style_attribute(&self) -> Option<String> {
        self.0.borrow().style_attribute.clone()
    }

    fn restore_style_attribute(&self, style: Option<&str>) {
        let mut node = self.0.borrow_mut();
        node.styles.clear();
        node.style_attribute = style.map(str::to_string);
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        let mut node = self.0.borrow_mut();
        node.text = text.to_string();
        node.children.clear();
    }

    fn split_into(&self, fragments: &[Fragment]) -> Vec<Self> {
        let words: Vec<Self> = fragments
            .iter()
            .filter(|fragment| fragment.is_word())
            .map(|fragment| Self::with_text(fragment.text()))
            .collect();
        self.0.borrow_mut().children = words.clone();
        words
    }

    fn children(&self) -> Vec<Self> {
        self.0.borrow().children.clone()
    }

    fn bounds(&self) -> Bounds {
        self.0.borrow().bounds
    }
}
