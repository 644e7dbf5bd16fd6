use leptos::html::Section;
use leptos::prelude::*;

use crate::core::content::{CLIENT_LOGOS, repeated};
use crate::core::motion::{Ease, FadeIn, ScrollPosition, VisualProps, fade_in_from};
use crate::ui::icon::Icon;
use crate::ui::motion::{target, use_animation_scope};

/// Infinite strip of client logos.
#[component]
pub fn ValueStrip() -> impl IntoView {
    let strip = NodeRef::<Section>::new();

    use_animation_scope(move |scope| {
        fade_in_from(
            scope,
            target(strip),
            FadeIn {
                from: VisualProps::new().opacity(0.0).y(20.0),
                duration: 1.0,
                ease: Ease::OutQuad,
                start: Some(ScrollPosition::top_at(0.95)),
                ..FadeIn::default()
            },
        );
    });

    view! {
        <section node_ref=strip class="py-10 border-y border-white/5 bg-surface/30 backdrop-blur-sm overflow-hidden relative">
            <div class="max-w-7xl mx-auto px-6 mb-8 text-center">
                <p class="text-xs font-semibold text-secondary uppercase tracking-widest opacity-80">
                    "Empowering field teams at leading organizations"
                </p>
            </div>

            <div class="absolute top-0 left-0 w-32 h-full bg-gradient-to-r from-dark to-transparent z-10 pointer-events-none"></div>
            <div class="absolute top-0 right-0 w-32 h-full bg-gradient-to-l from-dark to-transparent z-10 pointer-events-none"></div>

            <div class="flex w-max animate-scroll gap-20 items-center">
                {repeated(&CLIENT_LOGOS, 2)
                    .into_iter()
                    .map(|brand| view! {
                        <div class="flex items-center gap-3 opacity-40 hover:opacity-100 transition-opacity duration-300 group cursor-default grayscale hover:grayscale-0">
                            <div class="p-2 bg-white/5 rounded-lg group-hover:bg-accent-primary/20 transition-colors">
                                <Icon name=brand.icon class="w-5 h-5" />
                            </div>
                            <span class="text-lg font-bold text-white tracking-widest">{brand.name}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
