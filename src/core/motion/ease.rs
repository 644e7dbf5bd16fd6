//! Easing curves used by tweens.

/// Easing curve applied to normalized tween progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    /// No easing; used for scrubbed and looping tweens.
    Linear,
    /// Quadratic ease-out.
    #[default]
    OutQuad,
    /// Cubic ease-out.
    OutCubic,
    /// Quartic ease-out, the snappiest entrance curve.
    OutQuart,
    /// Sine ease-in-out, for gentle floating loops.
    InOutSine,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t).powi(2),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
        }
    }
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::OutQuad,
        Ease::OutCubic,
        Ease::OutQuart,
        Ease::InOutSine,
    ];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-12);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn out_curves_lead_linear() {
        for ease in [Ease::OutQuad, Ease::OutCubic, Ease::OutQuart] {
            assert!(ease.apply(0.5) > 0.5);
        }
        assert!(Ease::OutQuart.apply(0.3) > Ease::OutCubic.apply(0.3));
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Ease::Linear.apply(-1.0), 0.0);
        assert_eq!(Ease::OutCubic.apply(3.0), 1.0);
    }

    #[test]
    fn lerp_midpoint() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(40.0, 0.0, 0.25), 30.0);
    }
}
