use leptos::html::Section;
use leptos::prelude::*;

use crate::core::content::{FEATURES_PAGE, PRODUCT_FEATURES};
use crate::core::motion::{FadeUp, fade_up};
use crate::ui::components::{Cta, FeatureSection};
use crate::ui::motion::{target, use_animation_scope};

use super::PageSeo;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    let header = NodeRef::<Section>::new();

    use_animation_scope(move |scope| {
        fade_up(
            scope,
            target(header),
            FadeUp {
                distance: 30.0,
                ..FadeUp::default()
            },
        );
    });

    view! {
        <PageSeo page=FEATURES_PAGE />

        <div class="relative">
            <section node_ref=header class="pt-36 pb-20 text-center max-w-4xl mx-auto px-6">
                <h1 class="text-5xl font-bold text-white mb-6">"The Complete Field OS"</h1>
                <p class="text-xl text-secondary">
                    "Everything you need to manage field operations, from lead capture to team payroll."
                </p>
            </section>

            {PRODUCT_FEATURES
                .into_iter()
                .map(|block| view! { <FeatureSection block=block /> })
                .collect_view()}

            <Cta />
        </div>
    }
}
