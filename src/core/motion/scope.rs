//! Animation scopes: everything a component animates, released together.

use std::cell::RefCell;
use std::rc::Rc;

use super::engine::{AnimationId, Engine, TriggerAction, TriggerId};
use super::position::{ScrollEnd, ScrollPosition};
use super::target::AnimationTarget;
use super::timeline::Timeline;

/// Shared handle to an engine.
pub type SharedEngine<E> = Rc<RefCell<Engine<E>>>;

enum Restore<E> {
    Style(E, Option<String>),
    Text(E, String),
}

struct Owned<E> {
    animations: Vec<AnimationId>,
    triggers: Vec<TriggerId>,
    restores: Vec<Restore<E>>,
}

impl<E> Default for Owned<E> {
    fn default() -> Self {
        Self {
            animations: Vec::new(),
            triggers: Vec::new(),
            restores: Vec::new(),
        }
    }
}

/// Collects the timelines, triggers and DOM changes made on behalf of one
/// component so they can be undone in a single [`AnimationScope::revert`].
///
/// Reverting kills the scope's timelines, unregisters its triggers and
/// restores captured inline styles and split text. It is idempotent, and
/// dropping the scope reverts it.
pub struct AnimationScope<E: AnimationTarget> {
    engine: SharedEngine<E>,
    owned: RefCell<Owned<E>>,
}

impl<E: AnimationTarget> AnimationScope<E> {
    pub fn new(engine: SharedEngine<E>) -> Self {
        Self {
            engine,
            owned: RefCell::new(Owned::default()),
        }
    }

    pub fn engine(&self) -> &SharedEngine<E> {
        &self.engine
    }

    /// Remember an element's inline style so revert can put it back.
    pub fn capture_style(&self, element: &E) {
        let style = element.style_attribute();
        self.owned
            .borrow_mut()
            .restores
            .push(Restore::Style(element.clone(), style));
    }

    /// Remember an element's text before its content is replaced.
    pub fn capture_text(&self, element: &E) {
        let text = element.text();
        self.owned
            .borrow_mut()
            .restores
            .push(Restore::Text(element.clone(), text));
    }

    /// Play a timeline now.
    pub fn play(&self, timeline: Timeline<E>) -> AnimationId {
        let id = self.engine.borrow_mut().play(timeline);
        self.owned.borrow_mut().animations.push(id);
        id
    }

    /// Play a timeline once `trigger` crosses `start`.
    pub fn play_on_enter(
        &self,
        timeline: Timeline<E>,
        trigger: E,
        start: ScrollPosition,
    ) -> AnimationId {
        let mut engine = self.engine.borrow_mut();
        let id = engine.add_waiting(timeline);
        let trigger_id = engine.add_trigger(
            trigger,
            start,
            ScrollEnd::default(),
            TriggerAction::Play(id),
        );
        drop(engine);

        let mut owned = self.owned.borrow_mut();
        owned.animations.push(id);
        owned.triggers.push(trigger_id);
        id
    }

    /// Tie a timeline's position to scroll progress between `start` and `end`.
    pub fn scrub(
        &self,
        timeline: Timeline<E>,
        trigger: E,
        start: ScrollPosition,
        end: ScrollEnd,
    ) -> AnimationId {
        let mut engine = self.engine.borrow_mut();
        let id = engine.add_waiting(timeline);
        let trigger_id = engine.add_trigger(trigger, start, end, TriggerAction::Scrub(id));
        drop(engine);

        let mut owned = self.owned.borrow_mut();
        owned.animations.push(id);
        owned.triggers.push(trigger_id);
        id
    }

    /// Report scroll progress through a range to `callback`.
    pub fn on_progress(
        &self,
        trigger: E,
        start: ScrollPosition,
        end: ScrollEnd,
        callback: impl Fn(f64) + 'static,
    ) -> TriggerId {
        let id = self.engine.borrow_mut().add_trigger(
            trigger,
            start,
            end,
            TriggerAction::Progress(Rc::new(callback)),
        );
        self.owned.borrow_mut().triggers.push(id);
        id
    }

    /// Stop one of this scope's timelines early.
    pub fn kill(&self, id: AnimationId) {
        self.engine.borrow_mut().kill(id);
        self.owned.borrow_mut().animations.retain(|owned| *owned != id);
    }

    pub fn animation_count(&self) -> usize {
        self.owned.borrow().animations.len()
    }

    pub fn trigger_count(&self) -> usize {
        self.owned.borrow().triggers.len()
    }

    /// Undo everything this scope created. Safe to call any number of times.
    pub fn revert(&self) {
        let owned = std::mem::take(&mut *self.owned.borrow_mut());

        if !owned.animations.is_empty() || !owned.triggers.is_empty() {
            let mut engine = self.engine.borrow_mut();
            for id in owned.triggers {
                engine.remove_trigger(id);
            }
            for id in owned.animations {
                engine.kill(id);
            }
        }

        for restore in owned.restores.into_iter().rev() {
            match restore {
                Restore::Style(element, style) => element.restore_style_attribute(style.as_deref()),
                Restore::Text(element, text) => element.set_text(&text),
            }
        }
    }
}

impl<E: AnimationTarget> Drop for AnimationScope<E> {
    fn drop(&mut self) {
        self.revert();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::core::motion::testing::MockElement;
    use crate::core::motion::{Tween, VisualProps};

    fn shared() -> SharedEngine<MockElement> {
        Rc::new(RefCell::new(Engine::new()))
    }

    fn fade(element: &MockElement) -> Timeline<MockElement> {
        Timeline::single(Tween::new(
            vec![element.clone()],
            VisualProps::new().opacity(0.0),
            VisualProps::new().opacity(1.0),
        ))
    }

    #[test]
    fn test_revert_releases_everything() {
        let engine = shared();
        let element = MockElement::with_style_attribute("color: red");
        let scope = AnimationScope::new(Rc::clone(&engine));

        scope.capture_style(&element);
        scope.play_on_enter(fade(&element), element.clone(), ScrollPosition::default());
        scope.on_progress(
            element.clone(),
            ScrollPosition::TOP_TOP,
            ScrollEnd::Offset(500.0),
            |_| {},
        );
        assert_eq!(engine.borrow().animation_count(), 1);
        assert_eq!(engine.borrow().trigger_count(), 2);
        assert!(element.has_styles());

        scope.revert();

        assert_eq!(engine.borrow().animation_count(), 0);
        assert_eq!(engine.borrow().trigger_count(), 0);
        assert!(!element.has_styles());
        assert_eq!(element.raw_style_attribute().as_deref(), Some("color: red"));
    }

    #[test]
    fn test_revert_twice_is_noop() {
        let engine = shared();
        let element = MockElement::new();
        let scope = AnimationScope::new(Rc::clone(&engine));
        scope.play(fade(&element));

        scope.revert();
        scope.revert();

        assert_eq!(scope.animation_count(), 0);
        assert_eq!(scope.trigger_count(), 0);
    }

    #[test]
    fn test_revert_empty_scope() {
        let scope = AnimationScope::new(shared());
        scope.revert();
        assert_eq!(scope.animation_count(), 0);
    }

    #[test]
    fn test_revert_restores_split_text() {
        let element = MockElement::with_text("Track Visits");
        let scope = AnimationScope::new(shared());

        scope.capture_text(&element);
        element.split_into(&crate::core::motion::split_words("Track Visits"));
        assert_eq!(element.child_count(), 2);

        scope.revert();
        assert_eq!(element.child_count(), 0);
        assert_eq!(element.text(), "Track Visits");
    }

    #[test]
    fn test_scopes_are_independent() {
        let engine = shared();
        let element = MockElement::new();
        let first = AnimationScope::new(Rc::clone(&engine));
        let second = AnimationScope::new(Rc::clone(&engine));

        first.play(fade(&element));
        second.play(fade(&element));
        first.revert();

        assert_eq!(engine.borrow().animation_count(), 1);
        assert_eq!(second.animation_count(), 1);
    }

    #[test]
    fn test_drop_reverts() {
        let engine = shared();
        let element = MockElement::new();
        {
            let scope = AnimationScope::new(Rc::clone(&engine));
            scope.play(fade(&element));
        }
        assert_eq!(engine.borrow().animation_count(), 0);
    }

    #[test]
    fn test_removed_progress_trigger_stops_reporting() {
        let engine = shared();
        let element = MockElement::new();
        element.set_bounds(-100.0, 1000.0);
        let calls = Rc::new(Cell::new(0));
        let scope = AnimationScope::new(Rc::clone(&engine));
        scope.on_progress(element.clone(), ScrollPosition::TOP_TOP, ScrollEnd::Offset(1000.0), {
            let calls = Rc::clone(&calls);
            move |_| calls.set(calls.get() + 1)
        });

        scope.revert();
        let updates = engine.borrow_mut().on_scroll(800.0);
        crate::core::motion::dispatch_all(updates);

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_kill_forgets_animation() {
        let engine = shared();
        let element = MockElement::new();
        let scope = AnimationScope::new(Rc::clone(&engine));
        let id = scope.play(fade(&element));

        scope.kill(id);

        assert_eq!(scope.animation_count(), 0);
        assert_eq!(engine.borrow().playback(id), None);
    }
}
