//! Named entrance and scroll animations shared by every page section.
//!
//! Each primitive takes the scope that will own the animation, the element
//! to animate (possibly absent, e.g. not mounted yet) and an options record.
//! An absent element is a no-op.

use super::ease::Ease;
use super::engine::AnimationId;
use super::position::{ScrollEnd, ScrollPosition};
use super::props::VisualProps;
use super::scope::AnimationScope;
use super::split::{split_words, word_count};
use super::target::AnimationTarget;
use super::timeline::{Offset, Timeline, Tween};

/// Options for [`fade_up`].
#[derive(Clone, Debug)]
pub struct FadeUp<E> {
    pub delay: f64,
    pub duration: f64,
    /// Starting vertical offset in pixels
    pub distance: f64,
    pub start: ScrollPosition,
    /// Element whose position fires the animation instead of the animated one
    pub trigger: Option<E>,
}

impl<E> Default for FadeUp<E> {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: 1.0,
            distance: 40.0,
            start: ScrollPosition::default(),
            trigger: None,
        }
    }
}

/// Fade in while rising and un-blurring, once the trigger scrolls into view.
pub fn fade_up<E: AnimationTarget>(
    scope: &AnimationScope<E>,
    element: Option<E>,
    options: FadeUp<E>,
) -> Option<AnimationId> {
    let element = element?;
    scope.capture_style(&element);

    let tween = Tween::new(
        vec![element.clone()],
        VisualProps::new().opacity(0.0).y(options.distance).blur(20.0),
        VisualProps::new().opacity(1.0).y(0.0).blur(0.0),
    )
    .duration(options.duration)
    .delay(options.delay)
    .ease(Ease::OutQuart);

    let trigger = options.trigger.unwrap_or(element);
    Some(scope.play_on_enter(Timeline::single(tween), trigger, options.start))
}

/// Options for [`word_by_word`].
#[derive(Clone, Debug)]
pub struct WordReveal<E> {
    pub delay: f64,
    /// Seconds per word
    pub duration: f64,
    /// Seconds between consecutive words
    pub stagger: f64,
    pub start: ScrollPosition,
    pub trigger: Option<E>,
}

impl<E> Default for WordReveal<E> {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: 0.6,
            stagger: 0.015,
            start: ScrollPosition::default(),
            trigger: None,
        }
    }
}

/// Split the element's text into words and reveal them in reading order.
///
/// The original whitespace between words is kept as plain text so the line
/// breaks match the unsplit layout.
pub fn word_by_word<E: AnimationTarget>(
    scope: &AnimationScope<E>,
    element: Option<E>,
    options: WordReveal<E>,
) -> Option<AnimationId> {
    let element = element?;
    let words = split_element(scope, &element)?;

    let tween = Tween::new(words, hidden_word(), shown_word())
        .duration(options.duration)
        .stagger(options.stagger)
        .delay(options.delay)
        .ease(Ease::OutQuad);

    let trigger = options.trigger.unwrap_or(element);
    Some(scope.play_on_enter(Timeline::single(tween), trigger, options.start))
}

fn hidden_word() -> VisualProps {
    VisualProps::new().opacity(0.0).y(15.0)
}

fn shown_word() -> VisualProps {
    VisualProps::new().opacity(1.0).y(0.0)
}

/// Replace the element's text with word elements, or `None` when there are
/// no words to reveal.
fn split_element<E: AnimationTarget>(scope: &AnimationScope<E>, element: &E) -> Option<Vec<E>> {
    let fragments = split_words(&element.text());
    if word_count(&fragments) == 0 {
        return None;
    }

    scope.capture_text(element);
    Some(element.split_into(&fragments))
}

/// Options for [`staggered_children`].
#[derive(Clone, Debug)]
pub struct Stagger {
    pub delay: f64,
    /// Seconds between consecutive children
    pub stagger: f64,
    /// Starting offset in pixels
    pub distance: f64,
    /// Slide in from the left instead of from below
    pub horizontal: bool,
    pub start: ScrollPosition,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            delay: 0.0,
            stagger: 0.1,
            distance: 40.0,
            horizontal: false,
            start: ScrollPosition::default(),
        }
    }
}

/// Reveal every direct child of a container one after another, once.
pub fn staggered_children<E: AnimationTarget>(
    scope: &AnimationScope<E>,
    container: Option<E>,
    options: Stagger,
) -> Option<AnimationId> {
    let container = container?;
    let children = container.children();
    if children.is_empty() {
        return None;
    }

    for child in &children {
        scope.capture_style(child);
    }

    let from = if options.horizontal {
        VisualProps::new().opacity(0.0).x(-options.distance).blur(5.0)
    } else {
        VisualProps::new().opacity(0.0).y(options.distance).blur(5.0)
    };
    let to = if options.horizontal {
        VisualProps::new().opacity(1.0).x(0.0).blur(0.0)
    } else {
        VisualProps::new().opacity(1.0).y(0.0).blur(0.0)
    };

    let tween = Tween::new(children, from, to)
        .duration(0.8)
        .stagger(options.stagger)
        .delay(options.delay)
        .ease(Ease::OutCubic);

    Some(scope.play_on_enter(Timeline::single(tween), container, options.start))
}

/// Options for [`parallax`].
#[derive(Clone, Debug)]
pub struct Parallax<E> {
    /// Pixels travelled upward across the full transit
    pub intensity: f64,
    pub trigger: Option<E>,
}

impl<E> Default for Parallax<E> {
    fn default() -> Self {
        Self {
            intensity: 50.0,
            trigger: None,
        }
    }
}

/// Translate an element vertically in lockstep with scrolling, from the
/// moment its trigger enters the viewport until it has left through the top.
pub fn parallax<E: AnimationTarget>(
    scope: &AnimationScope<E>,
    element: Option<E>,
    options: Parallax<E>,
) -> Option<AnimationId> {
    let element = element?;
    scope.capture_style(&element);

    let tween = Tween::new(
        vec![element.clone()],
        VisualProps::new().y(0.0),
        VisualProps::new().y(-options.intensity),
    )
    .duration(1.0)
    .ease(Ease::Linear);

    let trigger = options.trigger.unwrap_or(element);
    Some(scope.scrub(
        Timeline::single(tween),
        trigger,
        ScrollPosition::TOP_BOTTOM,
        ScrollEnd::At(ScrollPosition::BOTTOM_TOP),
    ))
}

/// The parts of a hero section, any of which may be missing.
#[derive(Clone, Debug)]
pub struct HeroParts<E> {
    pub badge: Option<E>,
    pub title: Option<E>,
    pub description: Option<E>,
    pub buttons: Option<E>,
    pub visual: Option<E>,
}

impl<E> Default for HeroParts<E> {
    fn default() -> Self {
        Self {
            badge: None,
            title: None,
            description: None,
            buttons: None,
            visual: None,
        }
    }
}

/// Build the hero entrance sequence without playing it.
pub fn hero_intro_timeline<E: AnimationTarget>(
    scope: &AnimationScope<E>,
    parts: HeroParts<E>,
) -> Timeline<E> {
    let mut timeline = Timeline::new();

    if let Some(badge) = parts.badge {
        scope.capture_style(&badge);
        timeline.add(
            Tween::new(
                vec![badge],
                VisualProps::new().opacity(0.0).y(-20.0),
                VisualProps::new().opacity(1.0).y(0.0),
            )
            .duration(0.8)
            .ease(Ease::OutCubic),
            Offset::After,
        );
    }

    if let Some(title) = parts.title {
        scope.capture_style(&title);
        timeline.add(
            Tween::new(
                vec![title],
                VisualProps::new().opacity(0.0).y(40.0).blur(12.0),
                VisualProps::new().opacity(1.0).y(0.0).blur(0.0),
            )
            .duration(1.0)
            .ease(Ease::OutCubic),
            Offset::Overlap(0.6),
        );
    }

    if let Some(description) = parts.description {
        let tween = match split_element(scope, &description) {
            Some(words) => Tween::new(words, hidden_word(), shown_word())
                .duration(0.6)
                .stagger(0.01),
            None => {
                scope.capture_style(&description);
                Tween::new(
                    vec![description],
                    VisualProps::new().opacity(0.0).y(20.0),
                    VisualProps::new().opacity(1.0).y(0.0),
                )
                .duration(0.8)
            }
        };
        timeline.add(tween.ease(Ease::OutCubic), Offset::Overlap(0.8));
    }

    if let Some(buttons) = parts.buttons {
        scope.capture_style(&buttons);
        timeline.add(
            Tween::new(
                vec![buttons],
                VisualProps::new().opacity(0.0).y(20.0),
                VisualProps::new().opacity(1.0).y(0.0),
            )
            .duration(0.8)
            .ease(Ease::OutCubic),
            Offset::Overlap(0.8),
        );
    }

    if let Some(visual) = parts.visual {
        scope.capture_style(&visual);
        timeline.add(
            Tween::new(
                vec![visual],
                VisualProps::new().opacity(0.0).scale(0.95).y(40.0).rotate_x(10.0),
                VisualProps::new().opacity(1.0).scale(1.0).y(0.0).rotate_x(0.0),
            )
            .duration(1.4)
            .ease(Ease::OutQuart),
            Offset::Overlap(1.0),
        );
    }

    timeline
}

/// Play the hero entrance sequence immediately. The returned handle lets the
/// caller kill it early.
pub fn hero_intro<E: AnimationTarget>(
    scope: &AnimationScope<E>,
    parts: HeroParts<E>,
) -> AnimationId {
    let timeline = hero_intro_timeline(scope, parts);
    scope.play(timeline)
}

/// Options for [`fade_in_from`].
#[derive(Clone, Debug)]
pub struct FadeIn<E> {
    /// Starting properties; the element settles to its natural state
    pub from: VisualProps,
    pub delay: f64,
    pub duration: f64,
    pub ease: Ease,
    /// Play on scroll instead of immediately
    pub start: Option<ScrollPosition>,
    pub trigger: Option<E>,
}

impl<E> Default for FadeIn<E> {
    fn default() -> Self {
        Self {
            from: VisualProps::new().opacity(0.0).y(30.0),
            delay: 0.0,
            duration: 0.8,
            ease: Ease::OutQuad,
            start: None,
            trigger: None,
        }
    }
}

/// Animate from the given properties to the element's natural state.
pub fn fade_in_from<E: AnimationTarget>(
    scope: &AnimationScope<E>,
    element: Option<E>,
    options: FadeIn<E>,
) -> Option<AnimationId> {
    let element = element?;
    scope.capture_style(&element);

    let tween = Tween::new(vec![element.clone()], options.from, VisualProps::new())
        .duration(options.duration)
        .delay(options.delay)
        .ease(options.ease);
    let timeline = Timeline::single(tween);

    if options.start.is_none() && options.trigger.is_none() {
        return Some(scope.play(timeline));
    }

    let trigger = options.trigger.unwrap_or(element);
    Some(scope.play_on_enter(timeline, trigger, options.start.unwrap_or_default()))
}

/// Options for [`marquee`].
#[derive(Clone, Debug)]
pub struct Marquee {
    /// Seconds per loop
    pub duration: f64,
    /// Percentage of the element's width travelled per loop
    pub travel_percent: f64,
}

impl Default for Marquee {
    fn default() -> Self {
        Self {
            duration: 40.0,
            travel_percent: 50.0,
        }
    }
}

/// Slide an element left forever. The content is expected to be repeated so
/// the jump back to the start is invisible.
pub fn marquee<E: AnimationTarget>(
    scope: &AnimationScope<E>,
    element: Option<E>,
    options: Marquee,
) -> Option<AnimationId> {
    let element = element?;
    scope.capture_style(&element);

    let tween = Tween::new(
        vec![element],
        VisualProps::new().x_percent(0.0),
        VisualProps::new().x_percent(-options.travel_percent),
    )
    .duration(options.duration)
    .ease(Ease::Linear);

    Some(scope.play(Timeline::single(tween).repeat_forever()))
}

/// Options for [`float`].
#[derive(Clone, Debug)]
pub struct Float {
    /// Pixels travelled upward at the top of the bob
    pub distance: f64,
    /// Seconds for one direction of travel
    pub duration: f64,
}

impl Default for Float {
    fn default() -> Self {
        Self {
            distance: 10.0,
            duration: 3.0,
        }
    }
}

/// Bob an element up and back down forever.
pub fn float<E: AnimationTarget>(
    scope: &AnimationScope<E>,
    element: Option<E>,
    options: Float,
) -> Option<AnimationId> {
    let element = element?;
    scope.capture_style(&element);

    let rest = VisualProps::new().y(0.0);
    let raised = VisualProps::new().y(-options.distance);

    let mut timeline = Timeline::new();
    timeline.add(
        Tween::new(vec![element.clone()], rest, raised)
            .duration(options.duration)
            .ease(Ease::InOutSine),
        Offset::After,
    );
    timeline.add(
        Tween::new(vec![element], raised, rest)
            .duration(options.duration)
            .ease(Ease::InOutSine),
        Offset::After,
    );

    Some(scope.play(timeline.repeat_forever()))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::motion::engine::{Engine, Playback};
    use crate::core::motion::testing::MockElement;

    fn scope() -> AnimationScope<MockElement> {
        AnimationScope::new(Rc::new(RefCell::new(Engine::new())))
    }

    #[test]
    fn test_missing_elements_are_ignored() {
        let scope = scope();

        assert!(fade_up(&scope, None, FadeUp::default()).is_none());
        assert!(word_by_word(&scope, None, WordReveal::default()).is_none());
        assert!(staggered_children(&scope, None, Stagger::default()).is_none());
        assert!(parallax(&scope, None, Parallax::default()).is_none());
        assert!(fade_in_from(&scope, None, FadeIn::default()).is_none());
        assert!(marquee(&scope, None, Marquee::default()).is_none());

        assert_eq!(scope.animation_count(), 0);
        assert_eq!(scope.trigger_count(), 0);
        assert_eq!(scope.engine().borrow().animation_count(), 0);
    }

    #[test]
    fn test_fade_up_starts_hidden_and_waits() {
        let scope = scope();
        let element = MockElement::new();

        let id = fade_up(&scope, Some(element.clone()), FadeUp::default()).unwrap();

        assert_eq!(element.opacity(), Some(0.0));
        assert_eq!(element.style("filter").as_deref(), Some("blur(20px)"));
        assert_eq!(
            element.style("transform").as_deref(),
            Some("translate3d(0px, 40px, 0px)")
        );
        assert_eq!(scope.engine().borrow().playback(id), Some(Playback::Waiting));
        assert_eq!(scope.trigger_count(), 1);
    }

    #[test]
    fn test_fade_up_uses_alternate_trigger() {
        let scope = scope();
        let element = MockElement::new();
        let section = MockElement::new();
        element.set_bounds(2000.0, 100.0);
        section.set_bounds(100.0, 500.0);

        let id = fade_up(
            &scope,
            Some(element.clone()),
            FadeUp {
                trigger: Some(section),
                ..FadeUp::default()
            },
        )
        .unwrap();
        scope.engine().borrow_mut().on_scroll(1000.0);

        assert_eq!(scope.engine().borrow().playback(id), Some(Playback::Playing));
    }

    #[test]
    fn test_word_by_word_splits_and_reveals() {
        let scope = scope();
        let element = MockElement::with_text("Track Visits Capture Proof");

        word_by_word(&scope, Some(element.clone()), WordReveal::default()).unwrap();

        let words = element.children();
        assert_eq!(words.len(), 4);
        assert_eq!(words[0].text(), "Track");
        assert_eq!(words[3].text(), "Proof");
        assert!(words.iter().all(|word| word.opacity() == Some(0.0)));

        scope.revert();
        assert_eq!(element.child_count(), 0);
        assert_eq!(element.text(), "Track Visits Capture Proof");
    }

    #[test]
    fn test_word_by_word_whitespace_only_is_noop() {
        let scope = scope();
        let element = MockElement::with_text("   \n ");

        assert!(word_by_word(&scope, Some(element.clone()), WordReveal::default()).is_none());
        assert_eq!(element.child_count(), 0);
        assert_eq!(scope.animation_count(), 0);
    }

    #[test]
    fn test_staggered_children_without_children() {
        let scope = scope();
        let container = MockElement::new();

        assert!(staggered_children(&scope, Some(container), Stagger::default()).is_none());
        assert_eq!(scope.animation_count(), 0);
        assert_eq!(scope.trigger_count(), 0);
    }

    #[test]
    fn test_staggered_children_offsets_each_child() {
        let scope = scope();
        let container = MockElement::with_children(3);
        container.set_bounds(0.0, 300.0);

        staggered_children(&scope, Some(container.clone()), Stagger::default()).unwrap();
        let mut engine = scope.engine().borrow_mut();
        engine.on_scroll(1000.0);
        engine.tick(0.8);
        drop(engine);

        let children = container.children();
        assert_eq!(children[0].opacity(), Some(1.0));
        assert!(children[1].opacity().unwrap() < 1.0);
        assert!(children[2].opacity().unwrap() < children[1].opacity().unwrap());
    }

    #[test]
    fn test_horizontal_stagger_slides_from_left() {
        let scope = scope();
        let container = MockElement::with_children(1);

        staggered_children(
            &scope,
            Some(container.clone()),
            Stagger {
                horizontal: true,
                ..Stagger::default()
            },
        );

        assert_eq!(
            container.children()[0].style("transform").as_deref(),
            Some("translate3d(-40px, 0px, 0px)")
        );
    }

    #[test]
    fn test_parallax_scrubs_with_scroll() {
        let scope = scope();
        let element = MockElement::new();
        element.set_bounds(450.0, 100.0);

        parallax(&scope, Some(element.clone()), Parallax::default()).unwrap();
        scope.engine().borrow_mut().on_scroll(1000.0);

        assert_eq!(
            element.style("transform").as_deref(),
            Some("translate3d(0px, -25px, 0px)")
        );
    }

    #[test]
    fn test_hero_intro_sequence() {
        let scope = scope();
        let parts = HeroParts {
            badge: Some(MockElement::new()),
            title: Some(MockElement::new()),
            description: Some(MockElement::with_text("Run your field team")),
            buttons: Some(MockElement::new()),
            visual: Some(MockElement::new()),
        };

        let timeline = hero_intro_timeline(&scope, parts);
        let starts = timeline.starts();

        // Overlaps are measured from the end of the longest step so far
        assert_eq!(starts.len(), 5);
        assert_eq!(starts[0], 0.0);
        assert!((starts[1] - 0.2).abs() < 1e-9);
        assert!((starts[2] - 0.4).abs() < 1e-9);
        assert!((starts[3] - 0.4).abs() < 1e-9);
        assert!((starts[4] - 0.2).abs() < 1e-9);
        assert!((timeline.duration() - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_hero_intro_description_fallback() {
        let scope = scope();
        let description = MockElement::with_text("  ");
        let parts = HeroParts {
            description: Some(description.clone()),
            ..HeroParts::default()
        };

        let id = hero_intro(&scope, parts);

        assert_eq!(description.child_count(), 0);
        assert_eq!(description.opacity(), Some(0.0));
        assert_eq!(scope.engine().borrow().playback(id), Some(Playback::Playing));
        assert_eq!(scope.trigger_count(), 0);
    }

    #[test]
    fn test_hero_intro_can_be_killed() {
        let scope = scope();
        let id = hero_intro(&scope, HeroParts::default());

        scope.kill(id);
        assert_eq!(scope.engine().borrow().animation_count(), 0);
    }

    #[test]
    fn test_fade_in_from_without_trigger_plays_now() {
        let scope = scope();
        let element = MockElement::new();

        let id = fade_in_from(&scope, Some(element), FadeIn::default()).unwrap();

        assert_eq!(scope.engine().borrow().playback(id), Some(Playback::Playing));
        assert_eq!(scope.trigger_count(), 0);
    }

    #[test]
    fn test_marquee_loops() {
        let scope = scope();
        let element = MockElement::new();

        let id = marquee(&scope, Some(element.clone()), Marquee::default()).unwrap();
        scope.engine().borrow_mut().tick(50.0);

        assert_eq!(scope.engine().borrow().playback(id), Some(Playback::Playing));
        assert_eq!(element.style("transform").as_deref(), Some("translateX(-12.5%)"));
    }

    #[test]
    fn test_float_bobs_and_returns() {
        let scope = scope();
        let element = MockElement::new();

        let id = float(&scope, Some(element.clone()), Float::default()).unwrap();
        scope.engine().borrow_mut().tick(4.5);
        assert_eq!(
            element.style("transform").as_deref(),
            Some("translate3d(0px, -5px, 0px)")
        );

        scope.engine().borrow_mut().tick(1.5);
        assert_eq!(scope.engine().borrow().playback(id), Some(Playback::Playing));
        assert_eq!(
            element.style("transform").as_deref(),
            Some("translate3d(0px, 0px, 0px)")
        );
    }
}
