//! Drifting particle decorations.

use leptos::prelude::*;

/// One dot of a particle field, in percent of the field's box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Seconds of animation offset so the field does not pulse in unison
    pub delay: f64,
}

/// Small linear congruential generator; the layout only needs to look
/// random and must be identical on server and client.
struct Lcg(u64);

impl Lcg {
    fn next_unit(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// Scatter `count` particles inside a disc, densest near the centre.
pub fn scatter(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|_| {
            let radius = 48.0 * rng.next_unit().cbrt();
            let angle = rng.next_unit() * std::f64::consts::TAU;
            Particle {
                x: 50.0 + radius * angle.cos(),
                y: 50.0 + radius * angle.sin(),
                size: 1.0 + rng.next_unit() * 2.0,
                delay: rng.next_unit() * 6.0,
            }
        })
        .collect()
}

/// Seconds per loop for a stream moving at `speed` relative to normal.
pub fn loop_seconds(base: f64, speed: f64) -> f64 {
    if speed <= 0.0 { base } else { base / speed }
}

#[component]
pub fn ParticleField(
    #[prop(default = 140)] count: usize,
    #[prop(default = 7)] seed: u64,
) -> impl IntoView {
    view! {
        <div class="absolute inset-0 animate-spin-slow" aria-hidden="true">
            {scatter(count, seed)
                .into_iter()
                .map(|p| {
                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-delay: -{:.2}s;",
                        p.x, p.y, p.size, p.size, p.delay,
                    );
                    view! {
                        <span class="absolute rounded-full bg-accent-primary/70 animate-pulse-slow" style=style></span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// A lane of dots flowing left to right at a reactive speed.
#[component]
pub fn DataStream(
    /// Relative speed, 1.0 being one pass every 2.4 seconds
    #[prop(into)]
    speed: Signal<f64>,
    /// Tailwind background class of the dots
    #[prop(into)]
    dot_class: Signal<&'static str>,
) -> impl IntoView {
    const BASE_SECONDS: f64 = 2.4;
    const DOTS: u32 = 5;

    view! {
        <div class="relative h-2 w-full overflow-hidden rounded-full bg-white/[0.03]" aria-hidden="true">
            {(0..DOTS)
                .map(|i| {
                    let style = move || {
                        let seconds = loop_seconds(BASE_SECONDS, speed.get());
                        format!(
                            "animation-duration: {:.2}s; animation-delay: -{:.2}s;",
                            seconds,
                            seconds * f64::from(i) / f64::from(DOTS),
                        )
                    };
                    let class = move || {
                        format!(
                            "absolute top-0.5 left-0 w-1 h-1 rounded-full animate-stream {}",
                            dot_class.get()
                        )
                    };
                    view! { <span class=class style=style></span> }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_is_deterministic_and_bounded() {
        let first = scatter(50, 7);
        let second = scatter(50, 7);
        assert_eq!(first, second);

        for p in &first {
            let dx = p.x - 50.0;
            let dy = p.y - 50.0;
            assert!((dx * dx + dy * dy).sqrt() <= 48.0 + 1e-9);
            assert!((1.0..=3.0).contains(&p.size));
        }
        assert_ne!(scatter(50, 8), first);
    }

    #[test]
    fn test_loop_seconds_follow_speed() {
        assert_eq!(loop_seconds(2.4, 2.0), 1.2);
        assert_eq!(loop_seconds(2.4, 0.5), 4.8);
        assert_eq!(loop_seconds(2.4, 0.0), 2.4);
    }
}
