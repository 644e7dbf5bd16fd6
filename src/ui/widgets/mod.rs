//! Decorative, self-animating illustrations.

mod billing;
mod feature_art;
mod globe;
mod particles;
mod phone;
mod queue;
mod sync_engine;

pub use billing::BillingCard;
pub use feature_art::FeatureArt;
pub use globe::Globe;
pub use particles::{DataStream, ParticleField};
pub use phone::PhoneMockup;
pub use queue::QueueBlocks;
pub use sync_engine::SyncEngineCard;
