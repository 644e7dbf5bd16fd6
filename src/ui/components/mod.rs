mod cta;
mod feature_section;
mod footer;
mod hero;
mod logo;
mod navbar;
mod page_header;
mod testimonials;
mod value_strip;

pub use cta::Cta;
pub use feature_section::FeatureSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use logo::{Logo, LogoMark};
pub use navbar::Navbar;
pub use page_header::{HeaderScene, PageHeaderScene};
pub use testimonials::Testimonials;
pub use value_strip::ValueStrip;
