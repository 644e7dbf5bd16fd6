//! Home page: hero, client strip, the four headline features,
//! testimonials and the closing call to action.

use leptos::prelude::*;

use crate::core::content::{HOME_FEATURES, HOME_PAGE, SiteMeta, structured_data};
use crate::ui::components::{Cta, FeatureSection, HeroSection, Testimonials, ValueStrip};

use super::PageSeo;

#[component]
pub fn HomePage() -> impl IntoView {
    let site = use_context::<SiteMeta>().unwrap_or_default();
    let json_ld = structured_data(&site).to_string();

    view! {
        <PageSeo page=HOME_PAGE />
        <script type="application/ld+json" inner_html=json_ld></script>

        <div>
            <HeroSection />
            <ValueStrip />

            <div class="bg-neutral-depth relative">
                <div class="absolute top-0 left-0 w-full h-px bg-gradient-to-r from-transparent via-white/10 to-transparent"></div>
                {HOME_FEATURES
                    .into_iter()
                    .map(|block| view! { <FeatureSection block=block /> })
                    .collect_view()}
            </div>

            <Testimonials />
            <Cta />
        </div>
    }
}
