//! The element abstraction animations operate on.

use super::props::VisualProps;
use super::split::Fragment;

/// Viewport-relative box of an element, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Distance from the top of the viewport to the element's top edge
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Something the motion engine can style, measure and split.
///
/// The browser binding implements this for `web_sys::HtmlElement`; tests use
/// an in-memory element.
pub trait AnimationTarget: Clone + PartialEq + 'static {
    /// Write a single inline style property.
    fn set_style_property(&self, name: &str, value: &str);

    /// Current raw inline `style` attribute, if any.
    fn style_attribute(&self) -> Option<String>;

    /// Restore the inline `style` attribute captured earlier.
    fn restore_style_attribute(&self, style: Option<&str>);

    /// Rendered text of the element.
    fn text(&self) -> String;

    /// Replace the element's content with plain text.
    fn set_text(&self, text: &str);

    /// Replace the element's content with one inline element per word and a
    /// plain text node per whitespace run. Returns the word elements in order.
    fn split_into(&self, fragments: &[Fragment]) -> Vec<Self>;

    /// Direct element children.
    fn children(&self) -> Vec<Self>;

    /// Viewport-relative bounds.
    fn bounds(&self) -> Bounds;

    /// Apply every property in `props` as inline style.
    fn apply(&self, props: &VisualProps) {
        for (name, value) in props.css_declarations() {
            self.set_style_property(name, &value);
        }
    }
}
