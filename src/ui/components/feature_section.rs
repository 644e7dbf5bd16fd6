use leptos::html::{Div, H2, P, Section};
use leptos::prelude::*;

use crate::core::content::FeatureBlock;
use crate::core::motion::{
    Ease, FadeIn, FadeUp, ScrollEnd, ScrollPosition, Stagger, VisualProps, WordReveal,
    fade_in_from, fade_up, staggered_children, word_by_word,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{target, use_animation_scope};
use crate::ui::sync::ScrollProgress;
use crate::ui::widgets::FeatureArt;

/// One feature row: copy on one side, art on the other.
///
/// Art with a pin distance keeps the row on screen for that many pixels of
/// scrolling and receives the progress through it.
#[component]
pub fn FeatureSection(block: FeatureBlock) -> impl IntoView {
    let FeatureBlock {
        title,
        description,
        icon,
        bullets,
        art,
        reversed,
    } = block;
    let is_mobile = art.is_mobile();
    let pin_distance = art.pin_distance();

    let container = NodeRef::<Section>::new();
    let badge = NodeRef::<Div>::new();
    let heading = NodeRef::<H2>::new();
    let copy = NodeRef::<P>::new();
    let list = NodeRef::<Div>::new();
    let visual = NodeRef::<Div>::new();
    let progress = ScrollProgress::new();

    use_animation_scope(move |scope| {
        let start = ScrollPosition::top_at(0.8);

        fade_up(
            scope,
            target(badge),
            FadeUp {
                duration: 0.8,
                distance: 30.0,
                start,
                trigger: target(container),
                ..FadeUp::default()
            },
        );
        word_by_word(
            scope,
            target(heading),
            WordReveal {
                delay: 0.2,
                start,
                trigger: target(container),
                ..WordReveal::default()
            },
        );
        fade_up(
            scope,
            target(copy),
            FadeUp {
                delay: 0.4,
                distance: 30.0,
                start,
                trigger: target(container),
                ..FadeUp::default()
            },
        );
        staggered_children(
            scope,
            target(list),
            Stagger {
                distance: 20.0,
                horizontal: true,
                ..Stagger::default()
            },
        );
        fade_in_from(
            scope,
            target(visual),
            FadeIn {
                from: VisualProps::new()
                    .opacity(0.0)
                    .scale(0.9)
                    .y(50.0)
                    .rotate_y(if reversed { -10.0 } else { 10.0 }),
                duration: 1.4,
                ease: Ease::OutCubic,
                start: Some(ScrollPosition::top_at(0.7)),
                trigger: target(container),
                ..FadeIn::default()
            },
        );

        if let Some(distance) = pin_distance {
            progress.track(
                scope,
                target(container),
                ScrollPosition::TOP_TOP,
                ScrollEnd::Offset(distance),
            );
        }
    });

    let section_class = if is_mobile {
        "relative border-t border-white/5 bg-dark"
    } else {
        "relative border-t border-white/5 bg-transparent"
    };
    let section_style = pin_distance
        .map(|distance| format!("height: calc(100vh + {distance}px);"))
        .unwrap_or_default();
    let frame_class = if pin_distance.is_some() {
        "sticky top-0 min-h-screen flex items-center py-20 lg:py-24"
    } else {
        "py-20 lg:py-24"
    };
    let row_class = if reversed {
        "flex flex-col gap-20 lg:gap-32 lg:flex-row-reverse items-center"
    } else {
        "flex flex-col gap-20 lg:gap-32 lg:flex-row items-center"
    };
    let badge_class = if is_mobile {
        "w-12 h-12 rounded-xl flex items-center justify-center shadow-lg backdrop-blur-md border border-white/10 transition-transform duration-500 hover:scale-110 bg-white/5 shadow-[0_0_20px_rgba(255,255,255,0.05)]"
    } else {
        "w-12 h-12 rounded-xl flex items-center justify-center shadow-lg backdrop-blur-md border border-white/10 transition-transform duration-500 hover:scale-110 bg-white/[0.03]"
    };
    let bullet_class = if is_mobile {
        "flex items-center gap-5 p-4 rounded-xl border transition-all duration-300 group cursor-default bg-transparent border-white/5 hover:bg-white/[0.02] hover:border-white/10"
    } else {
        "flex items-center gap-5 p-4 rounded-xl border transition-all duration-300 group cursor-default bg-transparent border-transparent hover:bg-white/[0.02]"
    };

    view! {
        <section node_ref=container class=section_class style=section_style>
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <Show when=move || is_mobile>
                    <div class="absolute inset-0 bg-[radial-gradient(circle_at_30%_50%,rgba(99,91,255,0.05),transparent_70%)]"></div>
                </Show>
            </div>

            <div class=frame_class>
                <div class="max-w-7xl w-full mx-auto px-6 relative z-10">
                    <div class=row_class>
                        <div class="flex-1 relative">
                            <div node_ref=badge class="flex items-center gap-3 mb-8">
                                <div class=badge_class>
                                    <Icon name=icon class="w-[22px] h-[22px]" />
                                </div>
                                <span class="text-secondary font-mono text-xs uppercase tracking-widest font-semibold opacity-70">
                                    {art.ordinal()}
                                </span>
                            </div>

                            <h2 node_ref=heading class="text-4xl md:text-5xl lg:text-6xl font-bold text-white mb-8 tracking-tight leading-[1.1]">
                                {title}
                            </h2>

                            <p node_ref=copy class="text-lg md:text-xl text-secondary leading-relaxed font-light max-w-lg mb-12">
                                {description}
                            </p>

                            <div node_ref=list class="flex flex-col gap-5">
                                {bullets
                                    .iter()
                                    .map(|item| view! {
                                        <div class=bullet_class>
                                            <div class="w-8 h-8 rounded-full flex items-center justify-center shrink-0 transition-transform duration-300 group-hover:scale-110 bg-white/5">
                                                <Icon name=icons::CHECK class="w-4 h-4 opacity-80" />
                                            </div>
                                            <span class="text-base font-medium transition-colors text-secondary group-hover:text-white">
                                                {*item}
                                            </span>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="flex-1 w-full flex justify-center lg:justify-end relative">
                            <div node_ref=visual class="w-full h-[650px] relative z-10 flex items-center justify-center">
                                <FeatureArt art=art progress=progress.percent() />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
