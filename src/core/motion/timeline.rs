//! Tweens and timelines.
//!
//! A [`Tween`] moves a list of targets from one [`VisualProps`] set to
//! another, optionally staggering the targets. A [`Timeline`] places tweens
//! on a shared clock using relative offsets so sequences can overlap.

use super::ease::Ease;
use super::props::VisualProps;
use super::target::AnimationTarget;

/// A single property transition over one or more targets.
#[derive(Clone, Debug)]
pub struct Tween<E> {
    pub targets: Vec<E>,
    pub from: VisualProps,
    pub to: VisualProps,
    /// Seconds per target
    pub duration: f64,
    /// Seconds before the first target starts
    pub delay: f64,
    /// Seconds between consecutive targets
    pub stagger: f64,
    pub ease: Ease,
}

impl<E> Tween<E> {
    pub fn new(targets: Vec<E>, from: VisualProps, to: VisualProps) -> Self {
        Self {
            targets,
            from,
            to,
            duration: 0.5,
            delay: 0.0,
            stagger: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Time from the tween's start until its last target settles.
    pub fn total_duration(&self) -> f64 {
        let staggered = self.targets.len().saturating_sub(1) as f64 * self.stagger;
        self.delay + staggered + self.duration
    }

    /// Eased progress of the target at `index`, `local_time` seconds in.
    pub fn progress_of(&self, index: usize, local_time: f64) -> f64 {
        let started = local_time - self.delay - index as f64 * self.stagger;
        if self.duration <= 0.0 {
            return if started >= 0.0 { 1.0 } else { 0.0 };
        }
        self.ease.apply(started / self.duration)
    }

    /// Properties of the target at `index`, `local_time` seconds in.
    pub fn sample(&self, index: usize, local_time: f64) -> VisualProps {
        VisualProps::lerp(&self.from, &self.to, self.progress_of(index, local_time))
    }
}

/// Where a tween is placed relative to what is already in the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    /// At the current end of the timeline
    After,
    /// This many seconds before the current end (`"-=0.6"`), never before 0
    Overlap(f64),
    /// This many seconds after the current end (`"+=0.5"`)
    Gap(f64),
    /// At an absolute time
    At(f64),
    /// Together with the previously added tween (`"<"`)
    WithPrevious,
}

#[derive(Clone, Debug)]
struct Step<E> {
    start: f64,
    tween: Tween<E>,
}

/// An ordered composition of tweens on a shared clock.
#[derive(Clone, Debug)]
pub struct Timeline<E> {
    steps: Vec<Step<E>>,
    repeat: bool,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            repeat: false,
        }
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A timeline holding exactly one tween at time zero.
    pub fn single(tween: Tween<E>) -> Self {
        let mut timeline = Self::new();
        timeline.add(tween, Offset::After);
        timeline
    }

    /// Loop forever once played.
    pub fn repeat_forever(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn repeats(&self) -> bool {
        self.repeat
    }

    /// Append a tween at the given offset and return its start time.
    pub fn add(&mut self, tween: Tween<E>, offset: Offset) -> f64 {
        let end = self.duration();
        let start = match offset {
            Offset::After => end,
            Offset::Overlap(seconds) => (end - seconds).max(0.0),
            Offset::Gap(seconds) => end + seconds,
            Offset::At(time) => time.max(0.0),
            Offset::WithPrevious => self.steps.last().map_or(0.0, |step| step.start),
        };
        self.steps.push(Step { start, tween });
        start
    }

    /// Time at which every step has settled.
    pub fn duration(&self) -> f64 {
        self.steps
            .iter()
            .map(|step| step.start + step.tween.total_duration())
            .fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Start time of every step, in insertion order.
    pub fn starts(&self) -> Vec<f64> {
        self.steps.iter().map(|step| step.start).collect()
    }

    pub fn tweens(&self) -> impl Iterator<Item = &Tween<E>> {
        self.steps.iter().map(|step| &step.tween)
    }
}

impl<E: AnimationTarget> Timeline<E> {
    /// Apply every step's state at `time`.
    ///
    /// The first step touching a target renders its `from` state before it
    /// starts, so a freshly created timeline hides its targets until it
    /// plays. Later steps on the same target wait for their start time and
    /// leave the earlier state in place until then.
    pub fn render(&self, time: f64) {
        let mut touched: Vec<&E> = Vec::new();

        for step in &self.steps {
            let started = time >= step.start;
            let local = (time - step.start).max(0.0);

            for (index, target) in step.tween.targets.iter().enumerate() {
                let seen = touched.contains(&target);
                if seen && !started {
                    continue;
                }
                target.apply(&step.tween.sample(index, local));
                if !seen {
                    touched.push(target);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween(duration: f64) -> Tween<()> {
        Tween::new(vec![()], VisualProps::new().opacity(0.0), VisualProps::new().opacity(1.0))
            .duration(duration)
    }

    #[test]
    fn test_stagger_extends_total_duration() {
        let t = Tween::new(vec![(), (), (), ()], VisualProps::new(), VisualProps::new())
            .duration(0.8)
            .stagger(0.1)
            .delay(0.2);

        assert!((t.total_duration() - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_staggered_progress() {
        let t = Tween::new(vec![(), ()], VisualProps::new(), VisualProps::new())
            .duration(1.0)
            .stagger(0.5)
            .ease(Ease::Linear);

        assert_eq!(t.progress_of(0, 0.5), 0.5);
        assert_eq!(t.progress_of(1, 0.5), 0.0);
        assert_eq!(t.progress_of(1, 1.0), 0.5);
        assert_eq!(t.progress_of(1, 5.0), 1.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let t = tween(0.0).delay(1.0);
        assert_eq!(t.progress_of(0, 0.5), 0.0);
        assert_eq!(t.progress_of(0, 1.0), 1.0);
    }

    #[test]
    fn test_offsets() {
        let mut timeline = Timeline::new();
        let a = timeline.add(tween(0.8), Offset::After);
        let b = timeline.add(tween(1.0), Offset::Overlap(0.6));
        let c = timeline.add(tween(0.5), Offset::WithPrevious);
        let d = timeline.add(tween(0.5), Offset::Gap(0.5));

        assert_eq!(a, 0.0);
        assert!((b - 0.2).abs() < 1e-9);
        assert!((c - 0.2).abs() < 1e-9);
        assert!((d - 1.7).abs() < 1e-9);
        assert!((timeline.duration() - 2.2).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_never_negative() {
        let mut timeline = Timeline::new();
        let start = timeline.add(tween(1.0), Offset::Overlap(0.6));
        assert_eq!(start, 0.0);
    }

    #[test]
    fn test_single_and_repeat() {
        let timeline = Timeline::single(tween(2.0)).repeat_forever();
        assert_eq!(timeline.len(), 1);
        assert!(timeline.repeats());
        assert_eq!(timeline.duration(), 2.0);
    }

    #[test]
    fn test_later_steps_wait_for_their_start() {
        use crate::core::motion::testing::MockElement;

        let badge = MockElement::new();
        let mut timeline = Timeline::new();
        timeline.add(
            Tween::new(
                vec![badge.clone()],
                VisualProps::new().opacity(0.0),
                VisualProps::new().opacity(1.0),
            )
            .duration(1.0)
            .ease(Ease::Linear),
            Offset::After,
        );
        timeline.add(
            Tween::new(
                vec![badge.clone()],
                VisualProps::new().opacity(1.0),
                VisualProps::new().opacity(0.0),
            )
            .duration(1.0)
            .ease(Ease::Linear),
            Offset::Gap(1.0),
        );

        timeline.render(0.0);
        assert_eq!(badge.opacity(), Some(0.0));

        timeline.render(1.5);
        assert_eq!(badge.opacity(), Some(1.0));

        timeline.render(2.5);
        assert_eq!(badge.opacity(), Some(0.5));
    }
}
