//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::ui::components::{HeaderScene, PageHeaderScene};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found - Nexus" />
        <Meta name="robots" content="noindex" />

        <section class="relative min-h-screen bg-dark flex flex-col items-center justify-center px-6 overflow-hidden">
            <div class="absolute inset-0 opacity-30 pointer-events-none">
                <PageHeaderScene scene=HeaderScene::Particles class="h-full w-full" />
            </div>

            <div class="relative z-10 text-center">
                <div class="w-20 h-20 mx-auto mb-8 rounded-2xl bg-white/5 border border-white/10 flex items-center justify-center">
                    <Icon name=icons::MAP_PIN class="w-9 h-9" />
                </div>

                <h1 class="text-7xl md:text-8xl font-bold tracking-tighter text-transparent bg-clip-text bg-primary-sweep mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-white mb-3">"Off the map"</h2>
                <p class="text-secondary font-light mb-10 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="btn-primary px-8 py-3">
                        "Back to Home"
                    </A>
                    <A href="/contact" attr:class="btn-secondary px-8 py-3">
                        "Contact Support"
                    </A>
                </div>
            </div>
        </section>
    }
}
