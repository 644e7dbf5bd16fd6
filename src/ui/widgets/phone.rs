//! Field app mockup shown in the hero, with a live status-bar clock and a
//! route progress card scrubbed by the pinned hero.

use leptos::prelude::*;

use crate::core::sync::percent_label;
use crate::ui::icon::{Icon, icons};

/// Twelve-hour status-bar time, e.g. `"9:41"`.
pub fn clock_label(hours: u32, minutes: u32) -> String {
    let hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02}", hours, minutes % 60)
}

/// Current local time, refreshed every minute while mounted.
pub fn use_clock() -> Signal<String> {
    let label = RwSignal::new(clock_label(9, 41));

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;

        let refresh = move || {
            let now = js_sys::Date::new_0();
            label.set(clock_label(now.get_hours(), now.get_minutes()));
        };

        Effect::new(move |_: Option<Interval>| {
            refresh();
            Interval::new(60_000, refresh)
        });
    }

    label.into()
}

#[component]
pub fn PhoneMockup(
    /// Route progress in percent
    #[prop(into)]
    progress: Signal<f64>,
) -> impl IntoView {
    let clock = use_clock();
    let bar_width = move || format!("width: {:.1}%", progress.get().clamp(0.0, 100.0));

    view! {
        <div class="relative mx-auto h-[580px] w-[300px] rounded-[50px] border-[8px] border-[#1a1a1a] bg-[#050505] shadow-[0_0_0_1px_rgba(255,255,255,0.1),0_50px_100px_-20px_rgba(0,0,0,0.5)]">
            <div class="relative h-full w-full rounded-[42px] overflow-hidden bg-surface flex flex-col">
                // Dynamic island
                <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[100px] h-[26px] bg-black rounded-b-[18px] z-30 flex items-center justify-center gap-2">
                    <div class="w-1.5 h-1.5 rounded-full bg-[#1c1c1c]"></div>
                    <div class="w-12 h-1.5 rounded-full bg-[#1c1c1c]"></div>
                </div>

                <div class="flex items-center justify-between px-6 pt-3.5 text-[10px] text-white/40 font-medium tracking-wide">
                    <span>{clock}</span>
                    <div class="w-3 h-3 border border-white/20 rounded-sm flex items-center justify-center">
                        <div class="w-2 h-2 bg-white/80 rounded-[1px]"></div>
                    </div>
                </div>

                <div class="mt-8 px-5 flex flex-col gap-6 h-full">
                    <div class="flex justify-between items-center">
                        <div class="space-y-0.5">
                            <p class="text-[10px] uppercase tracking-wider text-secondary font-semibold">"Dashboard"</p>
                            <h3 class="text-white font-semibold text-xl tracking-tight">"Overview"</h3>
                        </div>
                        <div class="relative w-9 h-9 rounded-full bg-white/5 flex items-center justify-center border border-white/5">
                            <div class="absolute inset-0 rounded-full bg-gradient-to-tr from-accent-primary to-accent-secondary opacity-20"></div>
                            <span class="relative text-xs font-bold text-white">"AW"</span>
                        </div>
                    </div>

                    <div class="rounded-2xl bg-gradient-to-b from-white/10 to-white/5 border border-white/10 p-5 relative overflow-hidden">
                        <div class="absolute top-0 right-0 w-32 h-32 bg-accent-primary/20 rounded-full blur-[60px] translate-x-10 -translate-y-10"></div>
                        <div class="relative">
                            <div class="flex justify-between items-start mb-6">
                                <div class="flex items-center gap-2">
                                    <div class="p-1.5 rounded-md bg-white/10">
                                        <Icon name=icons::MAP_PIN class="w-3.5 h-3.5" />
                                    </div>
                                    <span class="text-white/80 text-xs font-medium">"Route Progress"</span>
                                </div>
                                <span class="text-white font-mono text-xs bg-white/10 px-2 py-1 rounded-full">
                                    {move || percent_label(progress.get())}
                                </span>
                            </div>
                            <div class="h-1.5 w-full bg-black/20 rounded-full overflow-hidden mb-2">
                                <div class="h-full bg-gradient-to-r from-accent-primary to-accent-secondary rounded-full" style=bar_width></div>
                            </div>
                            <div class="flex justify-between text-[10px] text-secondary">
                                <span>"12 Visited"</span>
                                <span>"3 Remaining"</span>
                            </div>
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-3">
                        <QuickAction icon=icons::NAVIGATION label="Map View" />
                        <QuickAction icon=icons::CAMERA label="Log Visit" />
                    </div>

                    <div class="flex-1">
                        <div class="flex justify-between items-end mb-4">
                            <h4 class="text-white text-sm font-semibold tracking-tight">"Up Next"</h4>
                            <span class="text-[10px] text-accent-primary font-medium">"View All"</span>
                        </div>
                        <div class="space-y-3">
                            <div class="bg-white/[0.03] border border-accent-primary/30 rounded-xl p-4">
                                <div class="flex justify-between items-start mb-1">
                                    <h5 class="text-white font-medium text-sm">"Starbucks HQ"</h5>
                                    <div class="w-1.5 h-1.5 rounded-full bg-accent-primary shadow-[0_0_8px_rgba(99,91,255,0.8)]"></div>
                                </div>
                                <p class="text-secondary text-[11px] flex items-center gap-1.5">
                                    <Icon name=icons::CLOCK class="w-2.5 h-2.5" />
                                    "2:30 PM • 0.8 mi"
                                </p>
                            </div>
                            <div class="border border-white/5 rounded-xl p-4 opacity-60">
                                <h5 class="text-white font-medium text-sm mb-1">"Tech Data Inc"</h5>
                                <p class="text-secondary text-[11px]">"Follow Up"</p>
                            </div>
                            <div class="border border-white/5 rounded-xl p-4 flex items-center gap-3 opacity-40">
                                <div class="p-1 rounded bg-white/10">
                                    <Icon name=icons::CHECK class="w-2.5 h-2.5" />
                                </div>
                                <h5 class="text-white font-medium text-sm line-through decoration-white/30">"Whole Foods"</h5>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="absolute bottom-2 left-1/2 -translate-x-1/2 w-28 h-1 bg-white/10 rounded-full"></div>
            </div>
        </div>
    }
}

#[component]
fn QuickAction(icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white/[0.03] border border-white/5 rounded-xl p-4 flex flex-col gap-3">
            <div class="w-8 h-8 rounded-full bg-[#1c1c1c] flex items-center justify-center border border-white/5">
                <Icon name=icon class="w-3.5 h-3.5" />
            </div>
            <span class="text-xs text-white/70 font-medium">{label}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_label() {
        assert_eq!(clock_label(0, 5), "12:05");
        assert_eq!(clock_label(9, 41), "9:41");
        assert_eq!(clock_label(12, 0), "12:00");
        assert_eq!(clock_label(23, 59), "11:59");
    }
}
