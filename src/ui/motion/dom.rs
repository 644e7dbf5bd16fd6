use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::core::motion::{AnimationTarget, Bounds, Fragment};

impl AnimationTarget for HtmlElement {
    fn set_style_property(&self, name: &str, value: &str) {
        if let Err(err) = self.style().set_property(name, value) {
            leptos::logging::warn!("Style {} rejected: {:?}", name, err);
        }
    }

    fn style_attribute(&self) -> Option<String> {
        self.get_attribute("style")
    }

    fn restore_style_attribute(&self, style: Option<&str>) {
        let _ = match style {
            Some(style) => self.set_attribute("style", style),
            None => self.remove_attribute("style"),
        };
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn split_into(&self, fragments: &[Fragment]) -> Vec<Self> {
        let Some(document) = self.owner_document() else {
            return Vec::new();
        };

        self.set_text_content(None);
        let mut words = Vec::new();

        for fragment in fragments {
            match fragment {
                Fragment::Word(word) => {
                    let Some(span) = document
                        .create_element("span")
                        .ok()
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    else {
                        continue;
                    };
                    span.set_text_content(Some(word));
                    // Transforms are ignored on plain inline boxes
                    let _ = span.style().set_property("display", "inline-block");
                    if self.append_child(&span).is_ok() {
                        words.push(span);
                    }
                }
                Fragment::Space(space) => {
                    let _ = self.append_child(&document.create_text_node(space));
                }
            }
        }

        words
    }

    fn children(&self) -> Vec<Self> {
        let collection = Element::children(self);
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn bounds(&self) -> Bounds {
        let rect = self.get_bounding_client_rect();
        Bounds::new(rect.top(), rect.height())
    }
}
