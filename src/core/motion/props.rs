//! Visual property sets and their CSS rendering.

use super::ease::lerp;

/// A set of animatable visual properties.
///
/// Every field is optional: a tween only touches the properties that one of
/// its endpoints sets. A property present on only one side interpolates
/// against its resting value (opacity 1, scale 1, everything else 0).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualProps {
    pub opacity: Option<f64>,
    /// Horizontal offset in pixels
    pub x: Option<f64>,
    /// Vertical offset in pixels
    pub y: Option<f64>,
    /// Horizontal offset as a percentage of the element's own width
    pub x_percent: Option<f64>,
    pub scale: Option<f64>,
    /// Rotation around the X axis in degrees
    pub rotate_x: Option<f64>,
    /// Rotation around the Y axis in degrees
    pub rotate_y: Option<f64>,
    /// Gaussian blur radius in pixels
    pub blur: Option<f64>,
    /// Width as a percentage of the parent
    pub width_percent: Option<f64>,
}

impl VisualProps {
    pub const fn new() -> Self {
        Self {
            opacity: None,
            x: None,
            y: None,
            x_percent: None,
            scale: None,
            rotate_x: None,
            rotate_y: None,
            blur: None,
            width_percent: None,
        }
    }

    pub const fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub const fn x(mut self, value: f64) -> Self {
        self.x = Some(value);
        self
    }

    pub const fn y(mut self, value: f64) -> Self {
        self.y = Some(value);
        self
    }

    pub const fn x_percent(mut self, value: f64) -> Self {
        self.x_percent = Some(value);
        self
    }

    pub const fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub const fn rotate_x(mut self, value: f64) -> Self {
        self.rotate_x = Some(value);
        self
    }

    pub const fn rotate_y(mut self, value: f64) -> Self {
        self.rotate_y = Some(value);
        self
    }

    pub const fn blur(mut self, value: f64) -> Self {
        self.blur = Some(value);
        self
    }

    pub const fn width_percent(mut self, value: f64) -> Self {
        self.width_percent = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    /// Interpolate between two property sets at eased progress `t`.
    pub fn lerp(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            opacity: mix(from.opacity, to.opacity, 1.0, t),
            x: mix(from.x, to.x, 0.0, t),
            y: mix(from.y, to.y, 0.0, t),
            x_percent: mix(from.x_percent, to.x_percent, 0.0, t),
            scale: mix(from.scale, to.scale, 1.0, t),
            rotate_x: mix(from.rotate_x, to.rotate_x, 0.0, t),
            rotate_y: mix(from.rotate_y, to.rotate_y, 0.0, t),
            blur: mix(from.blur, to.blur, 0.0, t),
            width_percent: mix(from.width_percent, to.width_percent, 0.0, t),
        }
    }

    /// CSS declarations for the properties this set carries.
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        let mut declarations = Vec::new();

        if let Some(opacity) = self.opacity {
            declarations.push(("opacity", css_number(opacity.clamp(0.0, 1.0))));
        }

        let transform = self.transform();
        if !transform.is_empty() {
            declarations.push(("transform", transform));
        }

        if let Some(blur) = self.blur {
            declarations.push(("filter", format!("blur({}px)", css_number(blur.max(0.0)))));
        }

        if let Some(width) = self.width_percent {
            declarations.push(("width", format!("{}%", css_number(width))));
        }

        declarations
    }

    fn transform(&self) -> String {
        let mut parts = Vec::new();

        if let Some(percent) = self.x_percent {
            parts.push(format!("translateX({}%)", css_number(percent)));
        }
        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate3d({}px, {}px, 0px)",
                css_number(self.x.unwrap_or(0.0)),
                css_number(self.y.unwrap_or(0.0))
            ));
        }
        if let Some(scale) = self.scale {
            parts.push(format!("scale({})", css_number(scale)));
        }
        if let Some(deg) = self.rotate_x {
            parts.push(format!("rotateX({}deg)", css_number(deg)));
        }
        if let Some(deg) = self.rotate_y {
            parts.push(format!("rotateY({}deg)", css_number(deg)));
        }

        parts.join(" ")
    }
}

fn mix(from: Option<f64>, to: Option<f64>, rest: f64, t: f64) -> Option<f64> {
    match (from, to) {
        (None, None) => None,
        (a, b) => Some(lerp(a.unwrap_or(rest), b.unwrap_or(rest), t)),
    }
}

/// Format a number for CSS with at most three decimals and no trailing zeros.
pub fn css_number(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_number_trims() {
        assert_eq!(css_number(1.0), "1");
        assert_eq!(css_number(0.5), "0.5");
        assert_eq!(css_number(-0.0001), "0");
        assert_eq!(css_number(12.34567), "12.346");
    }

    #[test]
    fn test_lerp_both_sides() {
        let from = VisualProps::new().opacity(0.0).y(40.0).blur(20.0);
        let to = VisualProps::new().opacity(1.0).y(0.0).blur(0.0);
        let mid = VisualProps::lerp(&from, &to, 0.5);

        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(mid.y, Some(20.0));
        assert_eq!(mid.blur, Some(10.0));
        assert_eq!(mid.x, None);
    }

    #[test]
    fn test_lerp_one_sided_settles_to_rest() {
        let from = VisualProps::new().opacity(0.0).x(-30.0).scale(0.9);
        let end = VisualProps::lerp(&from, &VisualProps::new(), 1.0);

        assert_eq!(end.opacity, Some(1.0));
        assert_eq!(end.x, Some(0.0));
        assert_eq!(end.scale, Some(1.0));
    }

    #[test]
    fn test_css_declarations() {
        let props = VisualProps::new()
            .opacity(0.25)
            .y(15.0)
            .scale(0.95)
            .rotate_x(10.0)
            .blur(5.0);
        let css = props.css_declarations();

        assert_eq!(css[0], ("opacity", "0.25".to_string()));
        assert_eq!(
            css[1],
            (
                "transform",
                "translate3d(0px, 15px, 0px) scale(0.95) rotateX(10deg)".to_string()
            )
        );
        assert_eq!(css[2], ("filter", "blur(5px)".to_string()));
    }

    #[test]
    fn test_empty_props_render_nothing() {
        assert!(VisualProps::new().is_empty());
        assert!(VisualProps::new().css_declarations().is_empty());
    }

    #[test]
    fn test_percent_translation_and_width() {
        let css = VisualProps::new()
            .x_percent(-50.0)
            .width_percent(42.0)
            .css_declarations();

        assert_eq!(css[0], ("transform", "translateX(-50%)".to_string()));
        assert_eq!(css[1], ("width", "42%".to_string()));
    }
}
