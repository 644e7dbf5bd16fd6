//! The frame-driven tween engine and its scroll-trigger registry.
//!
//! The engine owns every running timeline and every registered trigger. A
//! host drives it with two calls: [`Engine::tick`] once per animation frame
//! and [`Engine::on_scroll`] on scroll and resize. Progress callbacks are
//! returned to the host instead of being invoked in place, so they run
//! after the engine has been released.

use std::collections::BTreeMap;
use std::rc::Rc;

use super::position::{ScrollEnd, ScrollPosition, scroll_progress};
use super::target::AnimationTarget;
use super::timeline::Timeline;

/// Handle to a timeline owned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationId(u64);

/// Handle to a scroll trigger owned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriggerId(u64);

/// Callback receiving scroll progress in `[0, 1]`.
pub type ProgressCallback = Rc<dyn Fn(f64)>;

/// Playback state of a timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// Rendered in its initial state, waiting for a trigger
    Waiting,
    /// Advancing with the frame clock
    Playing,
    /// Reached its end
    Finished,
    /// Position is owned by a scroll trigger
    Scrubbed,
}

/// What a trigger does when its element moves through the viewport.
#[derive(Clone)]
pub enum TriggerAction {
    /// Play the timeline once when the start position is crossed
    Play(AnimationId),
    /// Tie the timeline's position to scroll progress
    Scrub(AnimationId),
    /// Report scroll progress to a callback
    Progress(ProgressCallback),
}

struct Active<E> {
    timeline: Timeline<E>,
    time: f64,
    playback: Playback,
}

struct Trigger<E> {
    element: E,
    start: ScrollPosition,
    end: ScrollEnd,
    action: TriggerAction,
    fired: bool,
    last_progress: Option<f64>,
}

/// A progress callback ready to be invoked by the host.
pub struct ScrollUpdate {
    callback: ProgressCallback,
    pub progress: f64,
}

impl ScrollUpdate {
    pub fn dispatch(self) {
        (self.callback)(self.progress);
    }
}

/// Dispatch every pending update in order.
pub fn dispatch_all(updates: Vec<ScrollUpdate>) {
    for update in updates {
        update.dispatch();
    }
}

/// Owns running timelines and registered scroll triggers.
pub struct Engine<E> {
    next_id: u64,
    animations: BTreeMap<AnimationId, Active<E>>,
    triggers: BTreeMap<TriggerId, Trigger<E>>,
    viewport_height: f64,
    needs_refresh: bool,
}

impl<E> Default for Engine<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            animations: BTreeMap::new(),
            triggers: BTreeMap::new(),
            viewport_height: 0.0,
            needs_refresh: false,
        }
    }
}

impl<E: AnimationTarget> Engine<E> {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Add a timeline and start playing it immediately.
    pub fn play(&mut self, timeline: Timeline<E>) -> AnimationId {
        self.insert(timeline, Playback::Playing)
    }

    /// Add a timeline rendered at its start, waiting to be played or scrubbed.
    pub fn add_waiting(&mut self, timeline: Timeline<E>) -> AnimationId {
        self.insert(timeline, Playback::Waiting)
    }

    fn insert(&mut self, timeline: Timeline<E>, playback: Playback) -> AnimationId {
        timeline.render(0.0);
        let id = AnimationId(self.next());
        self.animations.insert(
            id,
            Active {
                timeline,
                time: 0.0,
                playback,
            },
        );
        id
    }

    /// Stop and forget a timeline, leaving its targets as they are.
    pub fn kill(&mut self, id: AnimationId) -> bool {
        self.animations.remove(&id).is_some()
    }

    /// Register a trigger bound to `element`.
    ///
    /// The trigger is evaluated on the next tick using the last known
    /// viewport height, so elements already past their threshold fire
    /// without waiting for a scroll.
    pub fn add_trigger(
        &mut self,
        element: E,
        start: ScrollPosition,
        end: ScrollEnd,
        action: TriggerAction,
    ) -> TriggerId {
        if let TriggerAction::Scrub(id) = &action {
            if let Some(active) = self.animations.get_mut(id) {
                active.playback = Playback::Scrubbed;
            }
        }

        let id = TriggerId(self.next());
        self.triggers.insert(
            id,
            Trigger {
                element,
                start,
                end,
                action,
                fired: false,
                last_progress: None,
            },
        );
        self.needs_refresh = true;
        id
    }

    pub fn remove_trigger(&mut self, id: TriggerId) -> bool {
        self.triggers.remove(&id).is_some()
    }

    pub fn playback(&self, id: AnimationId) -> Option<Playback> {
        self.animations.get(&id).map(|active| active.playback)
    }

    /// Current time of a timeline in seconds.
    pub fn time(&self, id: AnimationId) -> Option<f64> {
        self.animations.get(&id).map(|active| active.time)
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    /// Advance playing timelines by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> Vec<ScrollUpdate> {
        let updates = if self.needs_refresh {
            self.refresh()
        } else {
            Vec::new()
        };

        for active in self.animations.values_mut() {
            if active.playback != Playback::Playing {
                continue;
            }

            let duration = active.timeline.duration();
            active.time += dt.max(0.0);

            if active.timeline.repeats() && duration > 0.0 {
                active.time %= duration;
            } else if active.time >= duration {
                active.time = duration;
                active.playback = Playback::Finished;
            }

            active.timeline.render(active.time);
        }

        updates
    }

    /// Re-evaluate every trigger against a new viewport height.
    pub fn on_scroll(&mut self, viewport_height: f64) -> Vec<ScrollUpdate> {
        self.viewport_height = viewport_height;
        self.refresh()
    }

    fn refresh(&mut self) -> Vec<ScrollUpdate> {
        self.needs_refresh = false;
        let viewport_height = self.viewport_height;
        let mut updates = Vec::new();

        for trigger in self.triggers.values_mut() {
            let bounds = trigger.element.bounds();

            match &trigger.action {
                TriggerAction::Play(id) => {
                    if !trigger.fired && trigger.start.is_crossed(bounds, viewport_height) {
                        trigger.fired = true;
                        if let Some(active) = self.animations.get_mut(id) {
                            if active.playback == Playback::Waiting {
                                active.playback = Playback::Playing;
                            }
                        }
                    }
                }
                TriggerAction::Scrub(id) => {
                    let progress =
                        scroll_progress(bounds, viewport_height, trigger.start, trigger.end);
                    if trigger.last_progress != Some(progress) {
                        trigger.last_progress = Some(progress);
                        if let Some(active) = self.animations.get_mut(id) {
                            active.time = progress * active.timeline.duration();
                            active.timeline.render(active.time);
                        }
                    }
                }
                TriggerAction::Progress(callback) => {
                    let progress =
                        scroll_progress(bounds, viewport_height, trigger.start, trigger.end);
                    if trigger.last_progress != Some(progress) {
                        trigger.last_progress = Some(progress);
                        updates.push(ScrollUpdate {
                            callback: Rc::clone(callback),
                            progress,
                        });
                    }
                }
            }
        }

        updates
    }
}
