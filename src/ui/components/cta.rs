use leptos::html::{Div, H2, P, Section};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::motion::{FadeUp, Parallax, fade_up, parallax};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{target, use_animation_scope};

/// Closing call to action shared by every page.
#[component]
pub fn Cta() -> impl IntoView {
    let title = NodeRef::<H2>::new();
    let description = NodeRef::<P>::new();
    let buttons = NodeRef::<Div>::new();
    let section = NodeRef::<Section>::new();
    let glow = NodeRef::<Div>::new();

    use_animation_scope(move |scope| {
        parallax(
            scope,
            target(glow),
            Parallax {
                intensity: 80.0,
                trigger: target(section),
            },
        );
        fade_up(scope, target(title), FadeUp::default());
        fade_up(scope, target(description), FadeUp { delay: 0.2, ..FadeUp::default() });
        fade_up(scope, target(buttons), FadeUp { delay: 0.4, ..FadeUp::default() });
    });

    view! {
        <section node_ref=section class="py-20 relative overflow-hidden bg-black border-t border-white/5">
            <div class="absolute inset-0 z-0 select-none pointer-events-none">
                <div node_ref=glow class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[600px] h-[300px] bg-indigo-500/10 rounded-full blur-[100px] opacity-30"></div>
            </div>

            <div class="max-w-4xl mx-auto px-6 relative z-10 text-center">
                <h2 node_ref=title class="text-4xl md:text-6xl font-bold text-white mb-6 tracking-tight leading-[1]">
                    "Ready to scale " <br />
                    <span class="text-transparent bg-clip-text bg-gradient-to-br from-white via-white/90 to-white/50">"your ambition?"</span>
                </h2>

                <p node_ref=description class="text-lg text-secondary mb-10 max-w-xl mx-auto font-light leading-relaxed">
                    "Join thousands of developers and businesses who rely on Nexus to power their mission-critical field operations."
                </p>

                <div node_ref=buttons class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <A href="/pricing" attr:class="group btn-primary h-12 px-8 text-base rounded-full flex items-center gap-2">
                        "View Pricing"
                        <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4 group-hover:translate-x-0.5 transition-transform" />
                    </A>
                    <A href="/contact" attr:class="btn-secondary h-12 px-8 text-base rounded-full bg-white/5 border-white/10 hover:bg-white/10">
                        "Contact Sales"
                    </A>
                </div>
            </div>
        </section>
    }
}
