#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::core::motion::testing::MockElement;
    use crate::core::motion::{
        AnimationScope, AnimationTarget, Engine, FadeIn, FadeUp, HeroParts, Marquee, Parallax,
        ScrollEnd, ScrollPosition, Stagger, WordReveal, fade_in_from, fade_up, hero_intro,
        join_fragments, marquee, parallax, split_words, staggered_children, word_by_word,
    };
    use crate::core::{QueueCounter, SyncState, ThresholdTable};

    fn scope() -> AnimationScope<MockElement> {
        AnimationScope::new(Rc::new(RefCell::new(Engine::new())))
    }

    #[test]
    fn test_primitives_ignore_missing_elements() {
        let scope = scope();

        fade_up(&scope, None, FadeUp::default());
        word_by_word(&scope, None, WordReveal::default());
        staggered_children(&scope, None, Stagger::default());
        parallax(&scope, None, Parallax::default());
        fade_in_from(&scope, None, FadeIn::default());
        marquee(&scope, None, Marquee::default());
        hero_intro(&scope, HeroParts::default());

        // Only the empty hero timeline exists
        assert_eq!(scope.trigger_count(), 0);
        assert_eq!(scope.animation_count(), 1);
    }

    #[test]
    fn test_word_reveal_keeps_spacing() {
        let text = "Track Visits Capture Proof";
        let fragments = split_words(text);
        let words: Vec<&str> = fragments
            .iter()
            .filter(|f| f.is_word())
            .map(|f| f.text())
            .collect();
        let spaces: Vec<&str> = fragments
            .iter()
            .filter(|f| !f.is_word())
            .map(|f| f.text())
            .collect();

        assert_eq!(words, ["Track", "Visits", "Capture", "Proof"]);
        assert_eq!(spaces, [" ", " ", " "]);
        assert_eq!(join_fragments(&fragments), text);

        let scope = scope();
        let element = MockElement::with_text(text);
        word_by_word(&scope, Some(element.clone()), WordReveal::default());
        let rendered: Vec<String> = element.children().iter().map(|w| w.text()).collect();
        assert_eq!(rendered, ["Track", "Visits", "Capture", "Proof"]);
    }

    #[test]
    fn test_stagger_without_children_creates_nothing() {
        let scope = scope();

        let id = staggered_children(&scope, Some(MockElement::new()), Stagger::default());

        assert!(id.is_none());
        assert_eq!(scope.animation_count(), 0);
        assert_eq!(scope.trigger_count(), 0);
        assert_eq!(scope.engine().borrow().trigger_count(), 0);
    }

    #[test]
    fn test_threshold_bands() {
        let table = ThresholdTable::new(15.0, 90.0);
        let states: Vec<SyncState> = [0.0, 14.9, 15.0, 89.9, 90.0, 100.0]
            .into_iter()
            .map(|p| table.state_for(p))
            .collect();

        assert_eq!(
            states,
            [
                SyncState::Offline,
                SyncState::Offline,
                SyncState::Syncing,
                SyncState::Syncing,
                SyncState::Online,
                SyncState::Online,
            ]
        );
    }

    #[test]
    fn test_threshold_lookup_is_pure() {
        let table = ThresholdTable::default();
        for p in [0.0, 15.0, 42.0, 90.0, 15.0, 0.0] {
            assert_eq!(table.state_for(p), table.state_for(p));
        }
        // Scrolling back reverses the state
        assert_eq!(table.state_for(95.0), SyncState::Online);
        assert_eq!(table.state_for(20.0), SyncState::Syncing);
        assert_eq!(table.state_for(5.0), SyncState::Offline);
    }

    #[test]
    fn test_counter_fills_while_offline() {
        let mut counter = QueueCounter::new();

        for _ in 0..6 {
            counter.tick(SyncState::Offline);
        }
        assert_eq!(counter.value(), 6);

        for _ in 0..10 {
            counter.tick(SyncState::Offline);
            assert!(counter.value() <= 6);
        }
        assert_eq!(counter.value(), 6);
    }

    #[test]
    fn test_counter_drains_while_syncing() {
        let mut counter = QueueCounter::with_value(6);

        for _ in 0..6 {
            counter.tick(SyncState::Syncing);
        }
        assert_eq!(counter.value(), 0);

        counter.tick(SyncState::Syncing);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_scope_teardown_twice() {
        let scope = scope();
        let element = MockElement::with_text("Let's talk business.");
        element.set_bounds(100.0, 50.0);

        word_by_word(&scope, Some(element.clone()), WordReveal::default());
        parallax(&scope, Some(element.clone()), Parallax::default());
        scope.on_progress(
            element.clone(),
            ScrollPosition::new(0.5, 0.5),
            ScrollEnd::Offset(1500.0),
            |_| {},
        );

        scope.revert();
        scope.revert();

        assert_eq!(scope.engine().borrow().trigger_count(), 0);
        assert_eq!(scope.engine().borrow().animation_count(), 0);
        assert_eq!(element.text(), "Let's talk business.");
    }

    #[test]
    fn test_scroll_progress_drives_state() {
        let scope = scope();
        let section = MockElement::new();
        section.set_bounds(0.0, 800.0);
        let state = Rc::new(RefCell::new(SyncState::Offline));

        scope.on_progress(
            section.clone(),
            ScrollPosition::new(0.5, 0.5),
            ScrollEnd::Offset(1500.0),
            {
                let state = Rc::clone(&state);
                move |p| *state.borrow_mut() = ThresholdTable::SYNC_ENGINE.state_for(p * 100.0)
            },
        );

        // Section centre at viewport centre: start of the range
        crate::core::motion::dispatch_all(scope.engine().borrow_mut().on_scroll(800.0));
        assert_eq!(*state.borrow(), SyncState::Offline);

        // 750px further: halfway
        section.set_bounds(-750.0, 800.0);
        crate::core::motion::dispatch_all(scope.engine().borrow_mut().on_scroll(800.0));
        assert_eq!(*state.borrow(), SyncState::Syncing);

        section.set_bounds(-1500.0, 800.0);
        crate::core::motion::dispatch_all(scope.engine().borrow_mut().on_scroll(800.0));
        assert_eq!(*state.borrow(), SyncState::Online);

        section.set_bounds(-100.0, 800.0);
        crate::core::motion::dispatch_all(scope.engine().borrow_mut().on_scroll(800.0));
        assert_eq!(*state.borrow(), SyncState::Offline);
    }

    #[test]
    fn test_mock_applies_props() {
        let element = MockElement::new();
        element.apply(&crate::core::motion::VisualProps::new().opacity(0.25).blur(4.0));

        assert_eq!(element.style("opacity").as_deref(), Some("0.25"));
        assert_eq!(element.style("filter").as_deref(), Some("blur(4px)"));
    }
}
