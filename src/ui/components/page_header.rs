use leptos::prelude::*;

use crate::ui::widgets::ParticleField;

/// Decorative scene behind a page title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum HeaderScene {
    #[display("diamond")]
    Diamond,
    #[display("rings")]
    Rings,
    #[display("particles")]
    Particles,
}

/// Outline of an icosahedron seen along a vertex axis: an outer hexagon,
/// an inner triangle, and the edges joining them.
const DIAMOND_OUTLINE: [(f64, f64, f64, f64); 12] = [
    (100.0, 20.0, 169.3, 60.0),
    (169.3, 60.0, 169.3, 140.0),
    (169.3, 140.0, 100.0, 180.0),
    (100.0, 180.0, 30.7, 140.0),
    (30.7, 140.0, 30.7, 60.0),
    (30.7, 60.0, 100.0, 20.0),
    (100.0, 55.0, 139.0, 122.5),
    (139.0, 122.5, 61.0, 122.5),
    (61.0, 122.5, 100.0, 55.0),
    (100.0, 20.0, 100.0, 55.0),
    (169.3, 140.0, 139.0, 122.5),
    (30.7, 140.0, 61.0, 122.5),
];

#[component]
pub fn PageHeaderScene(
    scene: HeaderScene,
    #[prop(default = "h-[400px]")] class: &'static str,
) -> impl IntoView {
    let body = match scene {
        HeaderScene::Diamond => view! {
            <div class="absolute inset-0 flex items-center justify-center animate-float">
                <svg viewBox="0 0 200 200" class="w-64 h-64 animate-spin-slow" aria-hidden="true">
                    <polygon points="100,20 169.3,60 169.3,140 100,180 30.7,140 30.7,60" fill="#000" opacity="0.6" />
                    {DIAMOND_OUTLINE
                        .into_iter()
                        .map(|(x1, y1, x2, y2)| view! {
                            <line x1=x1 y1=y1 x2=x2 y2=y2 stroke="#635BFF" stroke-width="1.2" stroke-opacity="0.8" />
                        })
                        .collect_view()}
                </svg>
            </div>
        }
        .into_any(),
        HeaderScene::Rings => view! {
            <div class="absolute inset-0 flex items-center justify-center animate-float perspective-1000">
                <div class="relative w-72 h-72 animate-spin-slow [transform-style:preserve-3d]">
                    <div class="absolute inset-[12%] rounded-full border-2 border-white/80 [transform:rotateX(60deg)] shadow-[0_0_30px_rgba(255,255,255,0.25)]"></div>
                    <div class="absolute inset-0 rounded-full border border-accent-primary/50 [transform:rotateX(75deg)]"></div>
                    <div class="absolute inset-[24%] rounded-full border border-accent-secondary/50 [transform:rotateX(45deg)]"></div>
                </div>
            </div>
        }
        .into_any(),
        HeaderScene::Particles => view! {
            <div class="absolute inset-0 rotate-45">
                <ParticleField />
            </div>
        }
        .into_any(),
    };

    view! {
        <div class=format!("w-full relative {class}") data-scene=scene.to_string() aria-hidden="true">
            {body}
        </div>
    }
}
