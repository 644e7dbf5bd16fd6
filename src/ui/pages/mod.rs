//! Routed pages
//!
//! - Home (hero, features, testimonials)
//! - Features
//! - Pricing
//! - About
//! - Contact
//! - Not found

mod about;
mod contact;
mod features;
mod home;
mod not_found;
mod pricing;
mod seo;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use features::FeaturesPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
pub use seo::PageSeo;
