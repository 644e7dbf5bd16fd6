//! Wireframe globe with GPS pins, drawn as SVG behind the hero phone.

use std::f64::consts::PI;

use leptos::prelude::*;

const PIN_COUNT: usize = 12;
/// Pin shell radius relative to the globe radius of 1.6
const PIN_RADIUS: f64 = 1.65;
const GLOBE_RADIUS: f64 = 1.6;
/// Radians per second
#[cfg(feature = "hydrate")]
const SPIN_SPEED: f64 = 0.15;
const VIEW_SIZE: f64 = 400.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobePin {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub color: &'static str,
}

/// Pins spread evenly over a sphere along a Fibonacci-style spiral.
pub fn globe_pins(count: usize) -> Vec<GlobePin> {
    let n = count as f64;
    (0..count)
        .map(|i| {
            let phi = (-1.0 + 2.0 * i as f64 / n).acos();
            let theta = (n * PI).sqrt() * phi;
            GlobePin {
                x: PIN_RADIUS * theta.cos() * phi.sin(),
                y: PIN_RADIUS * theta.sin() * phi.sin(),
                z: PIN_RADIUS * phi.cos(),
                color: if i % 3 == 0 { "#FF7AE0" } else { "#00D4FF" },
            }
        })
        .collect()
}

impl GlobePin {
    /// Rotate around the vertical axis.
    pub fn rotated(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            z: -self.x * sin + self.z * cos,
            ..*self
        }
    }

    pub fn is_facing(&self) -> bool {
        self.z >= 0.0
    }
}

/// Map globe units to SVG coordinates, y pointing down.
fn project(value: f64) -> f64 {
    VIEW_SIZE / 2.0 + value / GLOBE_RADIUS * (VIEW_SIZE * 0.4)
}

#[component]
pub fn Globe(
    /// Pointer offset from the centre of the hero, each axis in `-0.5..=0.5`
    #[prop(into)]
    tilt: Signal<(f64, f64)>,
) -> impl IntoView {
    let pins = globe_pins(PIN_COUNT);
    let angle = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;

        const STEP_MS: u32 = 50;
        // The effect owns the interval and drops it on unmount
        Effect::new(move |_: Option<Interval>| {
            Interval::new(STEP_MS, move || {
                angle.update(|a| *a = (*a + SPIN_SPEED * f64::from(STEP_MS) / 1000.0) % (2.0 * PI));
            })
        });
    }

    let tilt_style = move || {
        let (x, y) = tilt.get();
        format!(
            "transform: rotateY({:.2}deg) rotateX({:.2}deg); transition: transform 0.6s ease-out;",
            x * 16.0,
            -y * 16.0
        )
    };

    let centre = VIEW_SIZE / 2.0;
    let radius = VIEW_SIZE * 0.4;

    view! {
        <div class="relative w-full h-full flex items-center justify-center" style=tilt_style>
            <svg viewBox="0 0 400 400" class="w-full h-full max-w-[520px]" aria-hidden="true">
                <defs>
                    <radialGradient id="globe-core" cx="50%" cy="45%" r="55%">
                        <stop offset="0%" stop-color="#15121E" />
                        <stop offset="100%" stop-color="#050509" />
                    </radialGradient>
                </defs>
                <circle cx=centre cy=centre r={radius * 1.2} fill="#6E56CF" opacity="0.05" />
                <circle cx=centre cy=centre r=radius fill="url(#globe-core)" stroke="#6E56CF" stroke-opacity="0.35" />

                // Meridians squeeze as the globe turns
                {move || {
                    let a = angle.get();
                    (0..6)
                        .map(|i| {
                            let phase = a + f64::from(i) * PI / 6.0;
                            let rx = (radius * phase.cos()).abs();
                            view! {
                                <ellipse cx=centre cy=centre rx=rx ry=radius fill="none" stroke="#6E56CF" stroke-opacity="0.18" />
                            }
                        })
                        .collect_view()
                }}
                {(1..6)
                    .map(|i| {
                        let offset = radius * (f64::from(i) / 6.0 * PI).cos();
                        let rx = (radius * radius - offset * offset).sqrt();
                        view! {
                            <ellipse cx=centre cy={centre + offset} rx=rx ry={rx * 0.18} fill="none" stroke="#6E56CF" stroke-opacity="0.14" />
                        }
                    })
                    .collect_view()}

                <ellipse
                    cx=centre
                    cy=centre
                    rx={radius * 1.06}
                    ry={radius * 0.3}
                    fill="none"
                    stroke="#6E56CF"
                    stroke-opacity="0.3"
                    transform="rotate(-18 200 200)"
                />

                {move || {
                    let a = angle.get();
                    pins.iter()
                        .map(|pin| pin.rotated(a))
                        .filter(GlobePin::is_facing)
                        .map(|pin| {
                            let depth = 0.35 + 0.65 * pin.z / PIN_RADIUS;
                            view! {
                                <g opacity=depth>
                                    <circle cx={project(pin.x)} cy={project(-pin.y)} r="9" fill=pin.color opacity="0.25" />
                                    <circle cx={project(pin.x)} cy={project(-pin.y)} r="4" fill=pin.color />
                                </g>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pins_sit_on_shell() {
        let pins = globe_pins(PIN_COUNT);
        assert_eq!(pins.len(), 12);
        for pin in &pins {
            let r = (pin.x * pin.x + pin.y * pin.y + pin.z * pin.z).sqrt();
            assert!((r - PIN_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn test_every_third_pin_is_magenta() {
        let pins = globe_pins(PIN_COUNT);
        let magenta = pins.iter().filter(|p| p.color == "#FF7AE0").count();
        assert_eq!(magenta, 4);
        assert_eq!(pins[0].color, "#FF7AE0");
        assert_eq!(pins[1].color, "#00D4FF");
    }

    #[test]
    fn test_rotation_keeps_height() {
        let pin = globe_pins(PIN_COUNT)[5];
        let turned = pin.rotated(PI);
        assert!((turned.y - pin.y).abs() < 1e-9);
        assert!((turned.x + pin.x).abs() < 1e-9);
        assert!((turned.z + pin.z).abs() < 1e-9);
    }
}
