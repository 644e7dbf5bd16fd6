use crate::core::motion::{AnimationTarget, Bounds, Fragment};

/// Stand-in element for server rendering, where there is no DOM to animate.
/// Node refs never resolve to one, so none is ever constructed by the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Detached;

impl AnimationTarget for Detached {
    fn set_style_property(&self, _name: &str, _value: &str) {}

    fn style_attribute(&self) -> Option<String> {
        None
    }

    fn restore_style_attribute(&self, _style: Option<&str>) {}

    fn text(&self) -> String {
        String::new()
    }

    fn set_text(&self, _text: &str) {}

    fn split_into(&self, _fragments: &[Fragment]) -> Vec<Self> {
        Vec::new()
    }

    fn children(&self) -> Vec<Self> {
        Vec::new()
    }

    fn bounds(&self) -> Bounds {
        Bounds::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::{AnimationScope, Engine, Stagger, WordReveal};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_detached_primitives_register_nothing_visible() {
        let engine = Rc::new(RefCell::new(Engine::new()));
        let scope = AnimationScope::new(Rc::clone(&engine));

        let words = crate::core::motion::word_by_word(
            &scope,
            Some(Detached),
            WordReveal::default(),
        );
        let stagger =
            crate::core::motion::staggered_children(&scope, Some(Detached), Stagger::default());

        assert!(words.is_none());
        assert!(stagger.is_none());
        assert_eq!(engine.borrow().trigger_count(), 0);
    }
}
