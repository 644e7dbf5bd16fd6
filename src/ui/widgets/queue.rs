use leptos::prelude::*;

use crate::core::{QueueCounter, SyncState};

/// Stack of queued-work blocks; one lit block per queued item.
#[component]
pub fn QueueBlocks(
    #[prop(into)] count: Signal<u8>,
    #[prop(into)] state: Signal<SyncState>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <div class="flex justify-between text-[10px] text-white/40 font-medium uppercase tracking-wider">
                <span>"Local Queue"</span>
                <span class="font-mono text-white/70">
                    {move || format!("{}/{}", count.get(), QueueCounter::MAX)}
                </span>
            </div>
            <div class="flex flex-col-reverse gap-1">
                {(0..QueueCounter::MAX)
                    .map(|slot| {
                        let class = move || {
                            if slot < count.get() {
                                format!(
                                    "h-1.5 rounded-full transition-all duration-300 {} shadow-[0_0_8px_rgba(0,224,255,0.35)]",
                                    state.get().accent().dot_class(),
                                )
                            } else {
                                "h-1.5 rounded-full transition-all duration-300 bg-white/5".to_string()
                            }
                        };
                        view! { <div class=class></div> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
