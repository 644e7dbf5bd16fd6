use leptos::html::{H1, P, Section};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{BillingCycle, PRICING_PAGE, PRICING_TIERS, PricingTier};
use crate::core::motion::{
    Ease, FadeIn, Stagger, VisualProps, WordReveal, fade_in_from, staggered_children,
    word_by_word,
};
use crate::ui::components::{Cta, HeaderScene, PageHeaderScene};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{target, use_animation_scope};

use super::PageSeo;

#[component]
pub fn PricingPage() -> impl IntoView {
    let cycle = RwSignal::new(BillingCycle::default());

    let title = NodeRef::<H1>::new();
    let description = NodeRef::<P>::new();
    let cards = NodeRef::<Section>::new();

    use_animation_scope(move |scope| {
        fade_in_from(
            scope,
            target(title),
            FadeIn {
                from: VisualProps::new().opacity(0.0).y(30.0),
                ease: Ease::OutQuad,
                ..FadeIn::default()
            },
        );
        word_by_word(
            scope,
            target(description),
            WordReveal {
                delay: 0.3,
                ..WordReveal::default()
            },
        );
        staggered_children(
            scope,
            target(cards),
            Stagger {
                stagger: 0.1,
                ..Stagger::default()
            },
        );
    });

    let toggle_class = move |option: BillingCycle| {
        if cycle.get() == option {
            "px-4 py-1.5 rounded-full text-sm font-medium transition-all cursor-pointer bg-white/10 text-white"
        } else {
            "px-4 py-1.5 rounded-full text-sm font-medium transition-all cursor-pointer text-secondary"
        }
    };

    view! {
        <PageSeo page=PRICING_PAGE />

        <div class="animate-fade-in relative">
            <div class="absolute top-0 left-0 w-full h-[600px] bg-gradient-to-b from-accent-primary/5 to-transparent -z-10"></div>

            <section class="pt-36 pb-12 text-center px-6 relative">
                <div class="absolute top-0 left-1/2 -translate-x-1/2 w-full h-full max-w-4xl opacity-50 pointer-events-none z-0">
                    <PageHeaderScene scene=HeaderScene::Diamond />
                </div>

                <div class="relative z-10">
                    <h1 node_ref=title class="text-5xl md:text-6xl font-semibold text-white mb-6 tracking-tight">
                        "Simple, transparent pricing"
                    </h1>
                    <p node_ref=description class="text-xl text-secondary mb-12 max-w-2xl mx-auto font-light">
                        "Pay per team. Scale as you grow. 14-day free trial on all plans."
                    </p>

                    <div class="inline-flex items-center gap-6 p-1.5 bg-white/5 rounded-full border border-white/10 backdrop-blur-sm mb-16" role="group" aria-label="Billing cycle">
                        <button
                            type="button"
                            class=move || toggle_class(BillingCycle::Monthly)
                            aria-pressed=move || (cycle.get() == BillingCycle::Monthly).to_string()
                            on:click=move |_| cycle.set(BillingCycle::Monthly)
                        >
                            {BillingCycle::Monthly.to_string()}
                        </button>
                        <button
                            type="button"
                            class=move || toggle_class(BillingCycle::Annual)
                            aria-pressed=move || (cycle.get() == BillingCycle::Annual).to_string()
                            on:click=move |_| cycle.set(BillingCycle::Annual)
                        >
                            {BillingCycle::Annual.to_string()}
                            <span class="text-accent-secondary text-xs ml-1">"-20%"</span>
                        </button>
                    </div>
                </div>
            </section>

            <section node_ref=cards class="max-w-7xl mx-auto px-6 grid lg:grid-cols-3 gap-6 mb-20 perspective-1000">
                {PRICING_TIERS
                    .into_iter()
                    .map(|tier| view! { <PricingCard tier=tier cycle=cycle /> })
                    .collect_view()}
            </section>

            <Cta />
        </div>
    }
}

#[component]
fn PricingCard(tier: PricingTier, #[prop(into)] cycle: Signal<BillingCycle>) -> impl IntoView {
    let card_class = if tier.highlight {
        "relative rounded-3xl p-8 border transition-all duration-500 group flex flex-col hover:-translate-y-2 hover:border-white/20 bg-card border-accent-primary/50 shadow-[0_0_40px_rgba(99,91,255,0.1)] z-10"
    } else {
        "relative rounded-3xl p-8 border transition-all duration-500 group flex flex-col hover:-translate-y-2 hover:border-white/20 bg-surface/50 border-white/5"
    };
    let button_class = if tier.highlight {
        "w-full py-3.5 mt-auto mb-8 transition-all duration-300 btn-primary shadow-lg"
    } else {
        "w-full py-3.5 mt-auto mb-8 transition-all duration-300 btn-secondary"
    };

    view! {
        <div class=card_class>
            <Show when=move || tier.highlight>
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 bg-accent-primary text-white text-[10px] font-bold px-3 py-1 rounded-full uppercase tracking-widest shadow-lg border border-white/10">
                    "Most Popular"
                </div>
            </Show>

            <div class="mb-8">
                <h3 class="text-lg font-semibold text-white mb-2">{tier.name}</h3>
                <p class="text-secondary text-sm font-light leading-relaxed">{tier.blurb}</p>
            </div>

            <div class="mb-8 flex items-baseline gap-1">
                <span class="text-4xl font-bold text-white tracking-tight">
                    {move || tier.price_label(cycle.get())}
                </span>
                <Show when=move || !tier.is_custom()>
                    <span class="text-secondary text-sm font-medium">"/mo"</span>
                </Show>
            </div>

            <A href="/contact" attr:class=button_class>{tier.cta_label()}</A>

            <ul class="space-y-4 mt-auto">
                {tier
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li class="flex gap-3 items-start">
                            <div class="w-5 h-5 rounded-full bg-white/5 flex items-center justify-center shrink-0 border border-white/5 mt-0.5">
                                <Icon name=icons::CHECK class="w-3 h-3" />
                            </div>
                            <span class="text-sm text-secondary/80 group-hover:text-secondary transition-colors leading-tight">
                                {*feature}
                            </span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
