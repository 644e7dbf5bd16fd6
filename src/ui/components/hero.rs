use leptos::html::{Div, Section};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::motion::{HeroParts, ScrollEnd, ScrollPosition, hero_intro};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{target, use_animation_scope};
#[cfg(feature = "hydrate")]
use crate::ui::motion::use_window_listener;
use crate::ui::sync::ScrollProgress;
use crate::ui::widgets::{Globe, PhoneMockup};

/// Scroll distance the hero stays pinned while the phone's route fills up.
pub const HERO_PIN_PX: f64 = 1000.0;

#[component]
pub fn HeroSection() -> impl IntoView {
    let pin = NodeRef::<Section>::new();
    let badge = NodeRef::<Div>::new();
    let title = NodeRef::<leptos::html::H1>::new();
    let description = NodeRef::<leptos::html::P>::new();
    let buttons = NodeRef::<Div>::new();
    let visual = NodeRef::<Div>::new();

    let route_progress = ScrollProgress::new();
    let tilt = RwSignal::new((0.0, 0.0));

    use_animation_scope(move |scope| {
        hero_intro(
            scope,
            HeroParts {
                badge: target(badge),
                title: target(title),
                description: target(description),
                buttons: target(buttons),
                visual: target(visual),
            },
        );

        route_progress.track(
            scope,
            target(pin),
            ScrollPosition::TOP_TOP,
            ScrollEnd::Offset(HERO_PIN_PX),
        );
    });

    #[cfg(feature = "hydrate")]
    {
        use_window_listener(leptos::ev::mousemove, move |ev| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(1.0);
            let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(1.0);
            tilt.set((
                f64::from(ev.client_x()) / width - 0.5,
                f64::from(ev.client_y()) / height - 0.5,
            ));
        });
    }

    let pin_height = format!("height: calc(100vh + {HERO_PIN_PX}px);");

    view! {
        <section node_ref=pin class="relative" style=pin_height>
            <div class="sticky top-0 h-screen overflow-hidden bg-[radial-gradient(circle_at_top_left,rgba(99,91,255,0.15),transparent_50%)]">
                <div class="max-w-7xl mx-auto h-full px-6 pt-24 grid lg:grid-cols-2 gap-12 lg:gap-16 items-center">
                    <div class="relative z-10 max-w-2xl">
                        <div node_ref=badge class="inline-flex items-center gap-2 px-3 py-1.5 mb-6 rounded-full border border-accent-primary/30 bg-accent-primary/10 text-xs font-medium text-white/80">
                            <span class="w-1.5 h-1.5 rounded-full bg-accent-secondary animate-pulse"></span>
                            "Now with offline sync"
                        </div>

                        <h1 node_ref=title class="text-5xl md:text-7xl lg:text-8xl font-bold tracking-tighter text-white mb-6 leading-[1.05]">
                            "Track Visits." <br />
                            "Capture Proof." <br />
                            <span class="text-transparent bg-clip-text bg-primary-sweep animate-pulse">"Close Deals."</span>
                        </h1>

                        <p node_ref=description class="text-lg md:text-xl text-secondary mb-8 max-w-lg leading-relaxed font-light">
                            "The mobile-first CRM for field sales. Log visits with photo & GPS proof, manage leads on the go, and track your team in real-time, even when offline."
                        </p>

                        <div node_ref=buttons class="flex flex-col sm:flex-row gap-4">
                            <A href="/contact" attr:class="btn-primary group px-8 py-3.5">
                                <span class="relative z-10 flex items-center gap-2">
                                    "Start Free Trial"
                                    <Icon name=icons::ARROW_RIGHT class="w-[18px] h-[18px]" />
                                </span>
                            </A>
                            <A href="/features" attr:class="btn-secondary group px-8 py-3.5">
                                "See Features"
                            </A>
                        </div>
                    </div>

                    <div node_ref=visual class="relative h-[500px] lg:h-[550px] w-full hidden lg:flex items-center justify-center perspective-1000">
                        <div class="absolute inset-0 z-0">
                            <Globe tilt=tilt />
                        </div>
                        <div class="relative z-10 [transform:rotateY(-10deg)_rotateX(5deg)] hover:[transform:none] transition-transform duration-700 ease-out">
                            <PhoneMockup progress=route_progress.percent() />
                        </div>
                        <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[500px] h-[500px] bg-accent-primary/20 rounded-full blur-[120px] -z-10"></div>
                    </div>
                </div>

                <div class="absolute top-0 right-0 w-[800px] h-[800px] bg-accent-primary/5 rounded-full blur-[100px] pointer-events-none -translate-y-1/2 translate-x-1/2"></div>
                <div class="absolute bottom-0 left-0 w-[600px] h-[600px] bg-accent-secondary/5 rounded-full blur-[120px] pointer-events-none translate-y-1/2 -translate-x-1/4"></div>
            </div>
        </section>
    }
}
