//! Animation orchestration: a frame-driven tween engine, a scroll-trigger
//! registry, scoped ownership of both, and the named primitives pages use.
//!
//! Everything here is host-independent. The browser binding lives in
//! `ui::motion` and implements [`AnimationTarget`] for DOM elements.

mod ease;
mod engine;
mod position;
mod primitives;
mod props;
mod scope;
mod split;
mod target;
mod timeline;

#[cfg(test)]
pub(crate) mod testing;

pub use ease::{Ease, lerp};
pub use engine::{
    AnimationId, Engine, Playback, ProgressCallback, ScrollUpdate, TriggerAction, TriggerId,
    dispatch_all,
};
pub use position::{ScrollEnd, ScrollPosition, scroll_progress};
pub use primitives::{
    FadeIn, FadeUp, Float, HeroParts, Marquee, Parallax, Stagger, WordReveal, fade_in_from,
    fade_up, float, hero_intro, hero_intro_timeline, marquee, parallax, staggered_children,
    word_by_word,
};
pub use props::{VisualProps, css_number};
pub use scope::{AnimationScope, SharedEngine};
pub use split::{Fragment, join_fragments, split_words, word_count};
pub use target::{AnimationTarget, Bounds};
pub use timeline::{Offset, Timeline, Tween};
