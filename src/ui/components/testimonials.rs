use leptos::html::Div;
use leptos::prelude::*;

use crate::core::content::{TESTIMONIALS, Testimonial, repeated};
use crate::core::motion::{FadeUp, Marquee, fade_up, marquee};
use crate::ui::motion::{target, use_animation_scope};

/// Copies of the list laid end to end so the marquee never shows a gap.
const COPIES: usize = 3;

#[component]
pub fn Testimonials() -> impl IntoView {
    let header = NodeRef::<Div>::new();
    let slider = NodeRef::<Div>::new();

    use_animation_scope(move |scope| {
        fade_up(
            scope,
            target(header),
            FadeUp {
                distance: 30.0,
                ..FadeUp::default()
            },
        );
        marquee(scope, target(slider), Marquee::default());
    });

    view! {
        <section class="py-32 bg-dark overflow-hidden relative border-t border-white/5">
            <div node_ref=header class="text-center mb-20 px-6">
                <h2 class="text-4xl md:text-5xl font-bold text-white tracking-tight mb-6">
                    "The standard for " <br />
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-accent-primary to-accent-secondary">
                        "high-performance field teams."
                    </span>
                </h2>
                <p class="text-secondary text-lg max-w-2xl mx-auto">"Join the world's best companies scaling with Nexus."</p>
            </div>

            <div class="absolute top-0 left-0 w-40 h-full bg-gradient-to-r from-dark to-transparent z-20 pointer-events-none"></div>
            <div class="absolute top-0 right-0 w-40 h-full bg-gradient-to-l from-dark to-transparent z-20 pointer-events-none"></div>

            <div class="relative w-full flex overflow-hidden">
                <div node_ref=slider class="flex gap-6 whitespace-nowrap pl-6 py-10">
                    {repeated(&TESTIMONIALS, COPIES)
                        .into_iter()
                        .map(|t| view! { <TestimonialCard testimonial=t /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="w-[360px] flex-shrink-0 bg-[#0F0F12]/80 backdrop-blur-md border border-white/5 rounded-2xl p-6 hover:border-white/10 hover:shadow-xl hover:-translate-y-1 transition-all duration-300 relative">
            <svg class="mb-4 text-white/20" width="20" height="20" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M14 21v-3a2 2 0 0 1 2-2h3a1 1 0 0 0 1-1V9a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v2a1 1 0 0 1-1 1h-1V5h10v10a6 6 0 0 1-6 6h-2zM5 21v-3a2 2 0 0 1 2-2h3a1 1 0 0 0 1-1V9a1 1 0 0 0-1-1H6a1 1 0 0 0-1 1v2a1 1 0 0 1-1 1H3V5h10v10a6 6 0 0 1-6 6H5z" />
            </svg>

            <p class="text-white/90 text-[15px] font-medium leading-relaxed whitespace-normal mb-6 min-h-[80px]">
                {format!("\u{201C}{}\u{201D}", testimonial.quote)}
            </p>

            <div class="flex items-center gap-3 mt-auto border-t border-white/5 pt-4">
                <img src=testimonial.avatar alt=testimonial.author class="w-10 h-10 rounded-full object-cover border border-white/10" loading="lazy" />
                <div class="flex-1 min-w-0">
                    <p class="text-sm font-semibold text-white truncate">{testimonial.author}</p>
                    <p class="text-xs text-secondary truncate">{testimonial.role}</p>
                </div>
                <div class="px-2 py-1 rounded bg-white/5 border border-white/5">
                    <span class="text-[10px] font-bold text-white/40 tracking-wider">{testimonial.logo}</span>
                </div>
            </div>
        </div>
    }
}
