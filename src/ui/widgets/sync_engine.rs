//! Offline-first sync card. Every part of it is a pure function of the
//! scroll progress handed in by the pinned feature section.

use leptos::prelude::*;

use crate::core::sync::{Packet, percent_label};
use crate::core::{SyncState, ThresholdTable};
use crate::ui::icon::{Icon, icons};
use crate::ui::sync::use_queue_counter;
use crate::ui::widgets::{DataStream, QueueBlocks};

fn state_icon(state: SyncState) -> &'static str {
    match state {
        SyncState::Offline => icons::WIFI_OFF,
        SyncState::Syncing => icons::ZAP,
        SyncState::Online => icons::CLOUD,
    }
}

#[component]
pub fn SyncEngineCard(
    /// Scroll progress through the pinned section, in percent
    #[prop(into)]
    progress: Signal<f64>,
) -> impl IntoView {
    let state = Memo::new(move |_| ThresholdTable::SYNC_ENGINE.state_for(progress.get()));
    let queued = use_queue_counter(state);

    let packets = Memo::new(move |_| ThresholdTable::SYNC_ENGINE.pending_packets(progress.get()));
    let accent = move || state.get().accent();

    let badge_class = move || {
        format!(
            "flex items-center gap-2 px-3 py-1.5 rounded-full border text-xs font-semibold transition-colors duration-500 {}",
            accent().badge_class()
        )
    };
    let header_class = move || {
        format!(
            "p-2.5 rounded-xl border transition-colors duration-500 {}",
            accent().card_class()
        )
    };
    let bar_class = move || format!("h-full rounded-full transition-colors duration-500 {}", accent().dot_class());
    let bar_width = move || format!("width: {:.1}%", progress.get().clamp(0.0, 100.0));

    view! {
        <div class="relative w-full max-w-md mx-auto rounded-3xl border border-white/10 bg-card/80 backdrop-blur-xl p-6 shadow-2xl overflow-hidden">
            <div class="absolute inset-0 bg-grid opacity-[0.04] pointer-events-none"></div>
            <div class="absolute top-4 right-4 p-1.5 rounded-lg bg-white/5 border border-white/10" title="End-to-end encrypted">
                <Icon name=icons::LOCK class="w-3.5 h-3.5" />
            </div>

            <div class="relative flex items-center gap-3 mb-6">
                <div class=header_class>
                    {move || view! { <Icon name=state_icon(state.get()) class="w-5 h-5" /> }}
                </div>
                <div>
                    <h4 class="text-white font-semibold tracking-tight">"Sync Engine"</h4>
                    <span class=badge_class>
                        <span class=move || format!("w-1.5 h-1.5 rounded-full {}", accent().dot_class())></span>
                        {move || state.get().to_string()}
                    </span>
                </div>
            </div>

            <div class="relative mb-6">
                <DataStream
                    speed=Signal::derive(move || state.get().particle_speed())
                    dot_class=Signal::derive(move || accent().dot_class())
                />
            </div>

            <div class="relative min-h-[168px] mb-6">
                <Show
                    when=move || state.get() != SyncState::Online
                    fallback=|| view! {
                        <div class="flex flex-col items-center justify-center h-[168px] rounded-2xl border border-emerald-500/20 bg-emerald-500/5 animate-fade-in">
                            <div class="p-3 rounded-full bg-emerald-500/10 mb-3">
                                <Icon name=icons::CHECK class="w-6 h-6" />
                            </div>
                            <p class="text-white font-semibold">"Sync Complete"</p>
                            <p class="text-secondary text-xs mt-1">"All databases up to date"</p>
                        </div>
                    }
                >
                    <div class="space-y-2">
                        <Show
                            when=move || !packets.get().is_empty()
                            fallback=|| view! {
                                <p class="text-secondary/70 text-xs font-mono py-6 text-center">"Initializing..."</p>
                            }
                        >
                            <For
                                each=move || packets.get().iter().copied()
                                key=|packet: &Packet| packet.name
                                children=move |packet: Packet| view! {
                                    <div class="flex items-center justify-between px-3 py-2 rounded-xl bg-white/[0.03] border border-white/5 animate-fade-in">
                                        <div class="flex items-center gap-2 min-w-0">
                                            <Icon name=icons::FILE_TEXT class="w-3.5 h-3.5 shrink-0" />
                                            <span class="text-xs text-white/80 font-mono truncate">{packet.name}</span>
                                        </div>
                                        <div class="flex items-center gap-2 shrink-0">
                                            <span class="text-[10px] text-secondary">{format!("{} • Pending", packet.size)}</span>
                                            <span class=move || format!("w-1.5 h-1.5 rounded-full {}", accent().dot_class())></span>
                                        </div>
                                    </div>
                                }
                            />
                        </Show>
                    </div>
                </Show>
            </div>

            <div class="relative grid grid-cols-[1fr_auto] gap-6 items-end">
                <div class="space-y-2">
                    <div class="flex justify-between text-[10px] text-white/40 font-medium uppercase tracking-wider">
                        <span>"Sync Progress"</span>
                        <span class=move || format!("font-mono {}", accent().text_class())>
                            {move || percent_label(progress.get())}
                        </span>
                    </div>
                    <div class="h-1.5 w-full rounded-full bg-white/5 overflow-hidden">
                        <div class=bar_class style=bar_width></div>
                    </div>
                </div>
                <div class="w-20">
                    <QueueBlocks count=queued state=state />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QueueCounter;

    #[test]
    fn test_queue_follows_the_card_state() {
        let table = ThresholdTable::SYNC_ENGINE;

        // Past the syncing threshold the card drains its queue
        let mut queue = QueueCounter::with_value(2);
        let state = table.state_for(20.0);
        assert_eq!(state, SyncState::Syncing);
        queue.enter(state);
        queue.tick(state);
        assert_eq!(queue.value(), 1);

        // Still syncing late in the range: the queue has not been flushed
        let mut queue = QueueCounter::with_value(2);
        let state = table.state_for(70.0);
        assert_eq!(state, SyncState::Syncing);
        queue.enter(state);
        assert_eq!(queue.value(), 2);
        queue.tick(state);
        assert_eq!(queue.value(), 1);

        // Offline before the threshold: the queue fills
        let mut queue = QueueCounter::new();
        let state = table.state_for(10.0);
        queue.enter(state);
        queue.tick(state);
        assert_eq!(queue.value(), 1);
    }

    #[test]
    fn test_state_icons_are_distinct() {
        assert_eq!(state_icon(SyncState::Offline), icons::WIFI_OFF);
        assert_eq!(state_icon(SyncState::Syncing), icons::ZAP);
        assert_eq!(state_icon(SyncState::Online), icons::CLOUD);
    }
}
