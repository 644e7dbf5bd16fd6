//! Host-independent site logic: the animation engine, scroll-to-state
//! mapping and marketing content

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod motion;
pub mod sync;
#[cfg(test)]
mod tests;

pub use sync::{Accent, QueueCounter, SyncState, ThresholdTable};
