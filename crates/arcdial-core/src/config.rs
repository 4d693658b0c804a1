//! Slider configuration: the numeric and color surface the host passes in.
//!
//! Everything here is plain data plus pure derivation; nothing is cached
//! or reactive. Hosts recompute derived values after any change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors, caught once before any slider state is built.
/// Runtime slider operations never fail; they clamp.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("step size must be positive, got {0}")]
    NonPositiveStepSize(f64),
    #[error("max ({max}) must be greater than min ({min})")]
    EmptyRange { min: f64, max: f64 },
    #[error("range {min}..{max} with step size {step_size} yields fewer than two steps")]
    TooFewSteps { min: f64, max: f64, step_size: f64 },
    #[error("arc length must be positive, got {0} degrees")]
    NonPositiveArcLength(f64),
}

/// RGBA8 color for the presentation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse a `#rrggbb` hex string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        // The length guard counts bytes; reject non-ASCII before slicing.
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }
}

/// Default track color.
pub const TRACK_COLOR: Color = Color::rgb(0x33, 0x48, 0x60);
/// Default progress-arc and knob color.
pub const PROGRESS_COLOR: Color = Color::rgb(0x00, 0xbe, 0x7e);

/// Full configuration for one slider instance.
///
/// Stroke widths and the knob radius come in two flavors: an absolute
/// value, or a fraction of half the side length via the `_rel` divisor.
/// The absolute value wins when both are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Initial value.
    pub value: f64,
    /// Side length of the square drawing surface.
    pub side: f64,
    /// Distance between adjacent step values.
    pub step_size: f64,
    /// Smallest allowed value.
    pub min: f64,
    /// Largest allowed value.
    pub max: f64,
    /// Track color.
    pub circle_color: Color,
    /// Progress arc color.
    pub progress_color: Color,
    /// Knob color.
    pub knob_color: Color,
    /// Absolute knob radius, overriding `knob_radius_rel`.
    pub knob_radius: Option<f64>,
    /// Knob radius as `side / 2 / knob_radius_rel`.
    pub knob_radius_rel: f64,
    /// Absolute track stroke width, overriding `circle_width_rel`.
    pub circle_width: Option<f64>,
    /// Track stroke width as `side / 2 / circle_width_rel`.
    pub circle_width_rel: f64,
    /// Absolute progress stroke width, overriding `progress_width_rel`.
    pub progress_width: Option<f64>,
    /// Progress stroke width as `side / 2 / progress_width_rel`.
    pub progress_width_rel: f64,
    /// Angular span of the track in degrees; 360 is a full circle.
    pub arc_length_degrees: f64,
    /// Rotation of the whole track in degrees.
    pub arc_offset_degrees: f64,
    /// Value the progress arc is drawn from; defaults to `min`.
    pub origin: Option<f64>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            side: 100.0,
            step_size: 1.0,
            min: 0.0,
            max: 100.0,
            circle_color: TRACK_COLOR,
            progress_color: PROGRESS_COLOR,
            knob_color: PROGRESS_COLOR,
            knob_radius: None,
            knob_radius_rel: 7.0,
            circle_width: None,
            circle_width_rel: 20.0,
            progress_width: None,
            progress_width_rel: 10.0,
            arc_length_degrees: 360.0,
            arc_offset_degrees: 0.0,
            origin: None,
        }
    }
}

impl SliderConfig {
    /// Check the value range before building slider state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_size <= 0.0 {
            return Err(ConfigError::NonPositiveStepSize(self.step_size));
        }
        if self.max <= self.min {
            return Err(ConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step_count() < 2 {
            return Err(ConfigError::TooFewSteps {
                min: self.min,
                max: self.max,
                step_size: self.step_size,
            });
        }
        // A zero span would collapse the angle unit to 0 and every
        // angle computation downstream with it.
        if self.arc_length_degrees <= 0.0 {
            return Err(ConfigError::NonPositiveArcLength(self.arc_length_degrees));
        }
        Ok(())
    }

    /// Number of steps the range spans, endpoints included.
    pub fn step_count(&self) -> usize {
        (1.0 + (self.max - self.min) / self.step_size) as usize
    }

    /// The full ordered step ladder from `min` upward.
    pub fn steps(&self) -> Vec<f64> {
        (0..self.step_count())
            .map(|i| self.min + i as f64 * self.step_size)
            .collect()
    }

    /// Round a value to the nearest multiple of `step_size`.
    pub fn fit_to_step(&self, value: f64) -> f64 {
        (value / self.step_size).round() * self.step_size
    }

    /// Track span in radians.
    pub fn arc_length_radians(&self) -> f64 {
        self.arc_length_degrees.to_radians()
    }

    /// Track rotation in radians.
    pub fn arc_offset_radians(&self) -> f64 {
        self.arc_offset_degrees.to_radians()
    }

    /// Resolved track stroke width.
    pub fn circle_stroke_width(&self) -> f64 {
        self.circle_width
            .unwrap_or(self.side / 2.0 / self.circle_width_rel)
    }

    /// Resolved progress stroke width.
    pub fn progress_stroke_width(&self) -> f64 {
        self.progress_width
            .unwrap_or(self.side / 2.0 / self.progress_width_rel)
    }

    /// Resolved knob radius.
    pub fn resolved_knob_radius(&self) -> f64 {
        self.knob_radius
            .unwrap_or(self.side / 2.0 / self.knob_radius_rel)
    }

    /// Track radius: half the side, pulled in so the widest stroke and
    /// the knob both stay inside the surface.
    pub fn radius(&self) -> f64 {
        let max_curve_width = self
            .circle_stroke_width()
            .max(self.progress_stroke_width());
        self.side / 2.0 - max_curve_width.max(2.0 * self.resolved_knob_radius()) / 2.0
    }

    /// The progress arc's start value, clamped into the range.
    pub fn origin_value(&self) -> f64 {
        self.origin.unwrap_or(self.min).clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_default_steps_ladder() {
        let config = SliderConfig::default();
        let steps = config.steps();
        assert_eq!(steps.len(), 101);
        assert_eq!(steps[0], 0.0);
        assert_eq!(steps[100], 100.0);
        assert_eq!(steps[37], 37.0);
    }

    #[test]
    fn test_fractional_step_ladder() {
        let config = SliderConfig {
            min: 0.0,
            max: 1.0,
            step_size: 0.25,
            ..SliderConfig::default()
        };
        assert_eq!(config.steps(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let config = SliderConfig {
            step_size: 0.0,
            ..SliderConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveStepSize(0.0)));

        let config = SliderConfig {
            min: 10.0,
            max: 10.0,
            ..SliderConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyRange { .. })));

        // 0..1 with step 10 leaves only the single starting step.
        let config = SliderConfig {
            min: 0.0,
            max: 1.0,
            step_size: 10.0,
            ..SliderConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TooFewSteps { .. })));

        // A span of zero degrees leaves no arc to map steps onto.
        let config = SliderConfig {
            arc_length_degrees: 0.0,
            ..SliderConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveArcLength(0.0)));

        assert_eq!(SliderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_fit_to_step() {
        let config = SliderConfig {
            step_size: 10.0,
            ..SliderConfig::default()
        };
        assert_eq!(config.fit_to_step(73.0), 70.0);
        assert_eq!(config.fit_to_step(75.0), 80.0);
        assert_eq!(config.fit_to_step(-4.9), -0.0);
    }

    #[test]
    fn test_arc_radians() {
        let config = SliderConfig::default();
        assert!((config.arc_length_radians() - TAU).abs() < 1e-12);
        assert_eq!(config.arc_offset_radians(), 0.0);

        let half = SliderConfig {
            arc_length_degrees: 180.0,
            arc_offset_degrees: 90.0,
            ..SliderConfig::default()
        };
        assert!((half.arc_length_radians() - TAU / 2.0).abs() < 1e-12);
        assert!((half.arc_offset_radians() - TAU / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_relative_and_absolute_sizing() {
        let config = SliderConfig::default();
        // side 100: strokes 2.5 and 5, knob radius 50/7.
        assert!((config.circle_stroke_width() - 2.5).abs() < 1e-12);
        assert!((config.progress_stroke_width() - 5.0).abs() < 1e-12);
        assert!((config.resolved_knob_radius() - 50.0 / 7.0).abs() < 1e-12);
        // Knob diameter dominates the strokes here.
        assert!((config.radius() - (50.0 - 50.0 / 7.0)).abs() < 1e-12);

        let absolute = SliderConfig {
            circle_width: Some(8.0),
            progress_width: Some(4.0),
            knob_radius: Some(3.0),
            ..SliderConfig::default()
        };
        assert_eq!(absolute.circle_stroke_width(), 8.0);
        assert_eq!(absolute.progress_stroke_width(), 4.0);
        assert_eq!(absolute.resolved_knob_radius(), 3.0);
        assert_eq!(absolute.radius(), 50.0 - 4.0);
    }

    #[test]
    fn test_origin_value_defaults_and_clamps() {
        let config = SliderConfig::default();
        assert_eq!(config.origin_value(), 0.0);

        let with_origin = SliderConfig {
            origin: Some(40.0),
            ..SliderConfig::default()
        };
        assert_eq!(with_origin.origin_value(), 40.0);

        let out_of_range = SliderConfig {
            origin: Some(500.0),
            ..SliderConfig::default()
        };
        assert_eq!(out_of_range.origin_value(), 100.0);
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#334860"), Some(TRACK_COLOR));
        assert_eq!(Color::from_hex("#00be7e"), Some(PROGRESS_COLOR));
        assert_eq!(Color::from_hex("334860"), None);
        assert_eq!(Color::from_hex("#33486"), None);
        assert_eq!(Color::from_hex("#33486g"), None);
        // Multibyte input is six bytes long but must not be sliced.
        assert_eq!(Color::from_hex("#aé5é"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = SliderConfig {
            value: 30.0,
            min: 10.0,
            max: 90.0,
            step_size: 5.0,
            origin: Some(50.0),
            arc_length_degrees: 270.0,
            ..SliderConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SliderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SliderConfig = serde_json::from_str(r#"{"max": 10.0}"#).unwrap();
        assert_eq!(config.max, 10.0);
        assert_eq!(config.min, 0.0);
        assert_eq!(config.side, 100.0);
        assert_eq!(config.circle_color, TRACK_COLOR);
    }
}
