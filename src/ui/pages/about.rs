use leptos::html::{Div, H1, P};
use leptos::prelude::*;

use crate::core::content::{ABOUT_PAGE, LEADERSHIP, STATS, VALUES};
use crate::core::motion::{FadeUp, Stagger, WordReveal, fade_up, staggered_children, word_by_word};
use crate::ui::components::{Cta, HeaderScene, PageHeaderScene};
use crate::ui::motion::{target, use_animation_scope};

use super::PageSeo;

#[component]
pub fn AboutPage() -> impl IntoView {
    let title = NodeRef::<H1>::new();
    let description = NodeRef::<P>::new();
    let stats = NodeRef::<Div>::new();
    let values = NodeRef::<Div>::new();
    let team = NodeRef::<Div>::new();

    use_animation_scope(move |scope| {
        fade_up(
            scope,
            target(title),
            FadeUp {
                distance: 30.0,
                ..FadeUp::default()
            },
        );
        word_by_word(
            scope,
            target(description),
            WordReveal {
                delay: 0.2,
                ..WordReveal::default()
            },
        );
        staggered_children(
            scope,
            target(stats),
            Stagger {
                distance: 30.0,
                ..Stagger::default()
            },
        );
        staggered_children(
            scope,
            target(values),
            Stagger {
                stagger: 0.15,
                ..Stagger::default()
            },
        );
        staggered_children(
            scope,
            target(team),
            Stagger {
                distance: 50.0,
                ..Stagger::default()
            },
        );
    });

    view! {
        <PageSeo page=ABOUT_PAGE />

        <div class="relative min-h-screen bg-dark">
            <section class="relative pt-32 pb-24 px-6 overflow-hidden">
                <div class="absolute inset-0 z-0 opacity-40 pointer-events-none">
                    <PageHeaderScene scene=HeaderScene::Particles class="h-full w-full" />
                </div>

                <div class="relative z-10 max-w-4xl mx-auto text-center">
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-white/5 border border-white/10 text-accent-secondary text-xs font-semibold uppercase tracking-wider mb-8 backdrop-blur-md">
                        "Our Mission"
                    </div>
                    <h1 node_ref=title class="text-5xl md:text-7xl font-bold text-white mb-8 tracking-tighter leading-[1.1]">
                        "Empowering the " <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-white to-white/50">"workforce on the move."</span>
                    </h1>
                    <p node_ref=description class="text-xl text-secondary leading-relaxed font-light max-w-2xl mx-auto">
                        {ABOUT_PAGE.description}
                    </p>
                </div>
            </section>

            <section class="py-12 border-y border-white/5 bg-white/[0.02]">
                <div class="max-w-7xl mx-auto px-6">
                    <div node_ref=stats class="grid grid-cols-2 md:grid-cols-4 gap-8">
                        {STATS
                            .into_iter()
                            .map(|stat| view! {
                                <div class="text-center group cursor-default">
                                    <h3 class="text-4xl md:text-5xl font-bold text-white mb-2 tracking-tight group-hover:scale-110 transition-transform duration-300 ease-out">
                                        {stat.value}
                                    </h3>
                                    <p class="text-sm font-medium text-secondary uppercase tracking-wide">{stat.label}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-32 relative">
                <div class="max-w-7xl mx-auto px-6">
                    <div class="mb-20">
                        <h2 class="text-3xl font-semibold text-white mb-6">"Our Values"</h2>
                        <div class="h-px w-24 bg-accent-primary"></div>
                    </div>

                    <div node_ref=values class="grid md:grid-cols-3 gap-12">
                        {VALUES
                            .into_iter()
                            .map(|value| view! {
                                <div class="relative p-8 rounded-2xl bg-white/[0.03] border border-white/10 hover:bg-white/[0.05] transition-colors group">
                                    <div class="absolute top-0 right-0 p-8 opacity-20 group-hover:opacity-100 transition-opacity">
                                        <div class="w-20 h-20 bg-gradient-to-br from-accent-primary/20 to-transparent rounded-full blur-2xl"></div>
                                    </div>
                                    <h3 class="text-xl font-bold text-white mb-4">{value.title}</h3>
                                    <p class="text-secondary leading-relaxed font-light">{value.description}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-24 max-w-7xl mx-auto px-6">
                <div class="flex justify-between items-end mb-16">
                    <h2 class="text-3xl font-semibold text-white tracking-tight">"Leadership"</h2>
                    <a href="/contact" class="hidden md:inline-flex items-center gap-2 text-sm font-medium text-accent-primary hover:text-white transition-colors">
                        "View all positions"
                    </a>
                </div>

                <div node_ref=team class="grid sm:grid-cols-2 md:grid-cols-4 gap-6">
                    {LEADERSHIP
                        .into_iter()
                        .map(|leader| view! {
                            <div class="group cursor-pointer">
                                <div class="w-full aspect-[3/4] bg-muted rounded-xl mb-6 overflow-hidden relative">
                                    <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-transparent to-transparent z-10"></div>
                                    <img
                                        src=leader.portrait
                                        alt=leader.name
                                        loading="lazy"
                                        class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105 grayscale group-hover:grayscale-0"
                                    />
                                </div>
                                <h4 class="text-base font-bold text-white mb-1 group-hover:text-accent-primary transition-colors">{leader.name}</h4>
                                <p class="text-xs font-medium text-secondary uppercase tracking-wider">{leader.role}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <Cta />
        </div>
    }
}
