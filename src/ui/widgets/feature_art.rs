//! Illustrations beside each feature block.

use leptos::html::{Div, Img};
use leptos::prelude::*;

use crate::core::content::ArtVariant;
use crate::core::motion::{
    AnimationScope, AnimationTarget, Ease, FadeIn, Float, Offset, ScrollPosition, Timeline, Tween,
    VisualProps, fade_in_from, float,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{target, use_animation_scope};
use crate::ui::widgets::{BillingCard, SyncEngineCard};

/// Art for one feature block. `progress` is the pinned scroll progress in
/// percent, read only by the art that reacts to it.
#[component]
pub fn FeatureArt(art: ArtVariant, #[prop(into)] progress: Signal<f64>) -> impl IntoView {
    match art {
        ArtVariant::Mobile => view! { <MobileCaptureArt /> }.into_any(),
        ArtVariant::Dashboard => view! { <DashboardArt /> }.into_any(),
        ArtVariant::Tech => view! { <SyncEngineCard progress=progress /> }.into_any(),
        ArtVariant::Billing => view! { <BillingCard /> }.into_any(),
        ArtVariant::Pricing => view! {
            <div class="w-full aspect-square rounded-3xl bg-muted/20 border border-white/5"></div>
        }
        .into_any(),
    }
}

/// Elements of the capture illustration, in sequence order.
pub struct CaptureParts<E> {
    pub ready: E,
    pub verifying: E,
    pub image: E,
    pub verified: E,
}

/// Ready badge out, verifying in, photo develops, hold, then the verified
/// badge replaces the verifying one while the photo sharpens.
pub fn capture_timeline<E: AnimationTarget>(
    scope: &AnimationScope<E>,
    parts: CaptureParts<E>,
) -> Timeline<E> {
    let CaptureParts { ready, verifying, image, verified } = parts;
    for element in [&ready, &verifying, &image, &verified] {
        scope.capture_style(element);
    }

    let mut timeline = Timeline::new();
    timeline.add(
        Tween::new(
            vec![ready],
            VisualProps::new().opacity(1.0).scale(1.0),
            VisualProps::new().opacity(0.0).scale(0.9),
        )
        .duration(0.4),
        Offset::After,
    );
    timeline.add(
        Tween::new(
            vec![verifying.clone()],
            VisualProps::new().opacity(0.0).scale(0.8),
            VisualProps::new().opacity(1.0).scale(1.0),
        )
        .duration(0.4),
        Offset::After,
    );
    timeline.add(
        Tween::new(
            vec![image.clone()],
            VisualProps::new().opacity(0.0).blur(12.0),
            VisualProps::new().opacity(1.0).blur(12.0),
        )
        .duration(0.8)
        .ease(Ease::InOutSine),
        Offset::At(0.6),
    );
    timeline.add(
        Tween::new(
            vec![verifying],
            VisualProps::new().opacity(1.0),
            VisualProps::new().opacity(0.0),
        )
        .duration(0.4),
        Offset::Gap(1.2),
    );
    timeline.add(
        Tween::new(
            vec![verified],
            VisualProps::new().opacity(0.0).scale(0.9),
            VisualProps::new().opacity(1.0).scale(1.0),
        )
        .duration(0.8)
        .ease(Ease::OutCubic),
        Offset::After,
    );
    timeline.add(
        Tween::new(
            vec![image],
            VisualProps::new().opacity(1.0).blur(12.0),
            VisualProps::new().opacity(1.0).blur(0.0),
        )
        .duration(0.8),
        Offset::WithPrevious,
    );
    timeline
}

#[component]
fn MobileCaptureArt() -> impl IntoView {
    let frame = NodeRef::<Div>::new();
    let ready = NodeRef::<Div>::new();
    let verifying = NodeRef::<Div>::new();
    let image = NodeRef::<Img>::new();
    let verified = NodeRef::<Div>::new();

    use_animation_scope(move |scope| {
        fade_in_from(
            scope,
            target(frame),
            FadeIn {
                from: VisualProps::new().opacity(0.0).y(50.0),
                duration: 1.0,
                ease: Ease::OutCubic,
                start: Some(ScrollPosition::top_at(0.8)),
                ..FadeIn::default()
            },
        );

        let (Some(trigger), Some(ready), Some(verifying), Some(image), Some(verified)) = (
            target(frame),
            target(ready),
            target(verifying),
            target(image),
            target(verified),
        ) else {
            return;
        };
        let timeline = capture_timeline(scope, CaptureParts { ready, verifying, image, verified });
        scope.play_on_enter(timeline, trigger, ScrollPosition::top_at(0.6));
    });

    view! {
        <div node_ref=frame class="relative mx-auto w-[280px] h-[560px] rounded-[44px] border-[6px] border-[#1a1a1a] bg-[#050505] shadow-2xl overflow-hidden pointer-events-none">
            <div class="absolute inset-x-0 top-0 z-20 px-5 pt-10 pb-4 bg-gradient-to-b from-black/80 to-transparent">
                <p class="text-white text-sm font-semibold">"Acme Corp HQ"</p>
                <p class="text-white/50 text-[11px] flex items-center gap-1">
                    <Icon name=icons::MAP_PIN class="w-3 h-3" />
                    "Downtown Sector"
                </p>
            </div>

            <div class="absolute inset-0 bg-surface">
                <img
                    node_ref=image
                    src="https://images.unsplash.com/photo-1684831652465-9e523949eef2?auto=format&fit=crop&w=600&q=80"
                    alt="Storefront being verified"
                    class="w-full h-full object-cover"
                    style="opacity: 0; filter: blur(12px);"
                />
                <div class="absolute inset-10 border border-white/30 rounded-2xl"></div>
            </div>

            <div class="absolute inset-x-0 bottom-24 z-20 flex justify-center">
                <div node_ref=ready class="px-4 py-2 rounded-full bg-black/60 border border-white/10 text-white text-xs font-medium flex items-center gap-2">
                    <Icon name=icons::CAMERA class="w-3.5 h-3.5" />
                    "Ready to Capture"
                </div>
            </div>
            <div class="absolute inset-x-0 bottom-24 z-20 flex justify-center">
                <div node_ref=verifying class="px-4 py-2 rounded-full bg-amber-500/20 border border-amber-500/30 text-amber-300 text-xs font-medium flex items-center gap-2" style="opacity: 0;">
                    <Icon name=icons::REFRESH class="w-3.5 h-3.5 animate-spin" />
                    "Verifying Location..."
                </div>
            </div>
            <div class="absolute inset-x-4 bottom-20 z-20">
                <div node_ref=verified class="rounded-2xl bg-emerald-500/15 border border-emerald-500/30 backdrop-blur-md p-4 flex items-center gap-3" style="opacity: 0;">
                    <div class="p-2 rounded-full bg-emerald-500/20">
                        <Icon name=icons::CHECK class="w-4 h-4" />
                    </div>
                    <div>
                        <p class="text-emerald-300 text-[10px] font-bold tracking-widest">"CONFIRMED"</p>
                        <p class="text-white text-xs font-medium">"Photo & Location Verified"</p>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-6 inset-x-0 z-20 flex justify-center">
                <span class="px-3 py-1 rounded-full bg-black/60 text-white/60 text-[10px] font-mono">"GPS: ±2m"</span>
            </div>
        </div>
    }
}

const AGENTS: [(&str, &str, &str, f64); 3] = [
    ("Agent-01", "left: 22%; top: 30%;", "bg-accent-secondary", 3.0),
    ("Agent-04", "left: 62%; top: 56%;", "bg-accent-primary", 3.6),
    ("", "left: 44%; top: 74%;", "bg-accent-magenta", 4.2),
];

#[component]
fn DashboardArt() -> impl IntoView {
    let map = NodeRef::<Div>::new();
    let hud = NodeRef::<Div>::new();
    let agents: [NodeRef<Div>; 3] = [NodeRef::new(), NodeRef::new(), NodeRef::new()];

    use_animation_scope(move |scope| {
        fade_in_from(
            scope,
            target(map),
            FadeIn {
                from: VisualProps::new().opacity(0.0).rotate_x(10.0).scale(0.9),
                duration: 1.5,
                ease: Ease::OutCubic,
                start: Some(ScrollPosition::top_at(0.8)),
                ..FadeIn::default()
            },
        );
        fade_in_from(
            scope,
            target(hud),
            FadeIn {
                from: VisualProps::new().opacity(0.0).y(30.0).x(20.0),
                delay: 0.6,
                duration: 1.0,
                ease: Ease::OutCubic,
                start: Some(ScrollPosition::top_at(0.8)),
                ..FadeIn::default()
            },
        );
        for (agent, (_, _, _, period)) in agents.iter().zip(AGENTS) {
            float(scope, target(*agent), Float { distance: 8.0, duration: period / 2.0 });
        }
    });

    view! {
        <div class="relative w-full aspect-square max-w-lg mx-auto perspective-1000">
            <div style="transform: rotateX(35deg) rotateZ(20deg); transform-style: preserve-3d;" class="absolute inset-0">
                <div node_ref=map class="absolute inset-0 rounded-3xl border border-white/10 bg-surface/80 overflow-hidden">
                    <div class="absolute inset-0 bg-grid opacity-20"></div>
                    <svg viewBox="0 0 100 100" class="absolute inset-0 w-full h-full" aria-hidden="true">
                        <path d="M10 80 Q 30 40 50 55 T 90 20" fill="none" stroke="#6E56CF" stroke-width="0.8" stroke-dasharray="2 2" />
                        <path d="M15 20 Q 40 35 60 30 T 85 75" fill="none" stroke="#00C2FF" stroke-width="0.6" stroke-opacity="0.6" />
                        <circle cx="50" cy="55" r="1.5" fill="#6E56CF" />
                        <circle cx="90" cy="20" r="1.5" fill="#00C2FF" />
                    </svg>
                    {AGENTS
                        .into_iter()
                        .zip(agents)
                        .map(|((name, position, dot, _), node)| {
                            view! {
                                <div node_ref=node class="absolute flex flex-col items-center gap-1" style=position>
                                    <span class=format!("relative flex w-3 h-3 rounded-full {dot}")>
                                        <span class=format!("absolute inset-0 rounded-full animate-ping opacity-60 {dot}")></span>
                                    </span>
                                    {(!name.is_empty()).then(|| view! {
                                        <span class="px-2 py-0.5 rounded-md bg-black/70 border border-white/10 text-[9px] font-mono text-white/80">{name}</span>
                                    })}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div node_ref=hud class="absolute bottom-4 right-0 w-48 rounded-2xl border border-white/10 bg-card/90 backdrop-blur-xl p-4 shadow-2xl">
                <div class="flex items-center gap-2 mb-3">
                    <span class="w-1.5 h-1.5 rounded-full bg-emerald-400 animate-pulse"></span>
                    <span class="text-white text-xs font-semibold">"Live Activity"</span>
                </div>
                <div class="space-y-2 text-[11px]">
                    <div class="flex justify-between">
                        <span class="text-secondary flex items-center gap-1.5">
                            <Icon name=icons::USERS class="w-3 h-3" />
                            "Agents Online"
                        </span>
                        <span class="text-white font-mono">"24"</span>
                    </div>
                    <div class="flex justify-between">
                        <span class="text-secondary flex items-center gap-1.5">
                            <Icon name=icons::ACTIVITY class="w-3 h-3" />
                            "Check-ins"
                        </span>
                        <span class="text-white font-mono">"142"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::motion::Engine;
    use crate::core::motion::testing::MockElement;

    #[test]
    fn test_capture_sequence_order() {
        let scope = AnimationScope::new(Rc::new(RefCell::new(Engine::new())));
        let parts = CaptureParts {
            ready: MockElement::new(),
            verifying: MockElement::new(),
            image: MockElement::new(),
            verified: MockElement::new(),
        };
        let (ready, verifying, image, verified) = (
            parts.ready.clone(),
            parts.verifying.clone(),
            parts.image.clone(),
            parts.verified.clone(),
        );

        let timeline = capture_timeline(&scope, parts);
        assert!((timeline.duration() - 3.8).abs() < 1e-9);

        timeline.render(0.0);
        assert_eq!(ready.opacity(), Some(1.0));
        assert_eq!(verifying.opacity(), Some(0.0));
        assert_eq!(image.opacity(), Some(0.0));
        assert_eq!(verified.opacity(), Some(0.0));

        timeline.render(2.0);
        assert_eq!(ready.opacity(), Some(0.0));
        assert_eq!(verifying.opacity(), Some(1.0));
        assert_eq!(image.opacity(), Some(1.0));
        assert_eq!(verified.opacity(), Some(0.0));

        timeline.render(3.8);
        assert_eq!(verifying.opacity(), Some(0.0));
        assert_eq!(verified.opacity(), Some(1.0));
        assert_eq!(image.style("filter").as_deref(), Some("blur(0px)"));
    }
}
