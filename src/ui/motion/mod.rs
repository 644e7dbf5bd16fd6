//! Browser binding for the animation engine
//!
//! Components open a scope with [`use_animation_scope`]. The setup closure
//! runs once after the component mounts, and every tween, trigger and style
//! change it makes is reverted when the component is cleaned up. During
//! server rendering nothing animates and setup closures never run.

#[cfg(not(feature = "hydrate"))]
mod detached;
#[cfg(feature = "hydrate")]
mod dom;
#[cfg(feature = "hydrate")]
mod driver;
mod hooks;

use crate::core::motion::AnimationScope;

#[cfg(not(feature = "hydrate"))]
pub use detached::Detached;
pub use hooks::{target, use_animation_scope};
#[cfg(feature = "hydrate")]
pub use hooks::use_window_listener;

/// Element type the engine animates in this build.
#[cfg(feature = "hydrate")]
pub type Target = web_sys::HtmlElement;

/// Element type the engine animates in this build.
#[cfg(not(feature = "hydrate"))]
pub type Target = Detached;

pub type Scope = AnimationScope<Target>;
