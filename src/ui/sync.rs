//! Reactive glue between scroll progress and the sync widgets.

use leptos::prelude::*;

use crate::core::motion::{ScrollEnd, ScrollPosition};
use crate::core::{QueueCounter, SyncState};
use crate::ui::motion::{Scope, Target};

/// Progress through a scroll range in percent, written by the engine.
#[derive(Clone, Copy)]
pub struct ScrollProgress(RwSignal<f64>);

impl ScrollProgress {
    pub fn new() -> Self {
        Self(RwSignal::new(0.0))
    }

    /// Follow `trigger` through the range between `start` and `end`.
    pub fn track(&self, scope: &Scope, trigger: Option<Target>, start: ScrollPosition, end: ScrollEnd) {
        let Some(trigger) = trigger else {
            return;
        };
        let percent = self.0;
        scope.on_progress(trigger, start, end, move |fraction| percent.set(fraction * 100.0));
    }

    pub fn percent(&self) -> Signal<f64> {
        self.0.into()
    }
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// A queue counter driven by wall-clock ticks while `state` holds.
///
/// The interval is rebuilt on every state change and dropped with the
/// component.
pub fn use_queue_counter(state: Memo<SyncState>) -> Signal<u8> {
    let counter = RwSignal::new(QueueCounter::new());

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;

        Effect::new(move |previous: Option<Option<Interval>>| {
            // Cancels the interval of the previous state
            drop(previous);

            let current = state.get();
            counter.update(|counter| counter.enter(current));

            current.tick_interval().map(|period| {
                Interval::new(period.as_millis() as u32, move || {
                    counter.update(|counter| counter.tick(current));
                })
            })
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = state;

    Signal::derive(move || counter.get().value())
}
