//! Scroll trigger positions and scroll progress math.
//!
//! A position pairs a point on the trigger element with a point on the
//! viewport: `top_at(0.85)` fires when the element's top edge reaches 85%
//! of the viewport height.

use super::target::Bounds;

/// A point on the trigger element matched against a point on the viewport.
///
/// Both anchors are fractions: 0.0 is the top edge, 1.0 the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPosition {
    pub element: f64,
    pub viewport: f64,
}

impl ScrollPosition {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Element top edge at the given viewport fraction.
    pub const fn top_at(viewport: f64) -> Self {
        Self::new(0.0, viewport)
    }

    /// `"top bottom"`: the element starts entering the viewport.
    pub const TOP_BOTTOM: Self = Self::new(0.0, 1.0);
    /// `"top top"`: the element's top reaches the viewport top.
    pub const TOP_TOP: Self = Self::new(0.0, 0.0);
    /// `"bottom top"`: the element has fully left through the top.
    pub const BOTTOM_TOP: Self = Self::new(1.0, 0.0);

    /// Pixels of further scrolling needed before this position is reached.
    /// Zero or negative means it has been crossed.
    pub fn distance(&self, bounds: Bounds, viewport_height: f64) -> f64 {
        bounds.top + self.element * bounds.height - self.viewport * viewport_height
    }

    pub fn is_crossed(&self, bounds: Bounds, viewport_height: f64) -> bool {
        self.distance(bounds, viewport_height) <= 0.0
    }
}

impl Default for ScrollPosition {
    /// `"top 85%"`, the standard entrance threshold.
    fn default() -> Self {
        Self::top_at(0.85)
    }
}

/// Where a scrubbed range ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollEnd {
    /// A second element/viewport pairing
    At(ScrollPosition),
    /// A fixed number of pixels past the start (`"+=1500"`)
    Offset(f64),
}

impl Default for ScrollEnd {
    fn default() -> Self {
        Self::At(ScrollPosition::BOTTOM_TOP)
    }
}

/// Linear progress through a scroll range, clamped to `[0, 1]`.
pub fn scroll_progress(
    bounds: Bounds,
    viewport_height: f64,
    start: ScrollPosition,
    end: ScrollEnd,
) -> f64 {
    let to_start = start.distance(bounds, viewport_height);
    let to_end = match end {
        ScrollEnd::At(position) => position.distance(bounds, viewport_height),
        ScrollEnd::Offset(pixels) => to_start + pixels,
    };

    let span = to_end - to_start;
    if span.abs() < f64::EPSILON {
        return if to_start <= 0.0 { 1.0 } else { 0.0 };
    }

    (-to_start / span).clamp(0.0, 1.0)
}
