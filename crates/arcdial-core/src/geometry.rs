//! Drawable arc geometry for the track, the progress arc, and the knob.
//!
//! Angles follow screen convention: 0 along +x, increasing clockwise
//! (y grows downward). The track end is pulled fractionally short of the
//! full span so a 360° track does not degenerate into a zero-length arc.

use kurbo::{Arc, BezPath, Point, Shape, Vec2};

use crate::config::SliderConfig;

/// Fraction of the full span actually drawn for the track.
const TRACK_END_FACTOR: f64 = 0.99999;

/// Flattening tolerance for arc-to-bezier conversion.
const ARC_TOLERANCE: f64 = 1e-3;

/// Point on the track circle at `angle` radians.
pub fn point_on_track(center: f64, radius: f64, angle: f64) -> Point {
    Point::new(
        center + radius * angle.cos(),
        center + radius * angle.sin(),
    )
}

/// Everything needed to draw one frame of the slider, in surface-local
/// coordinates. Rebuilt on demand from the configuration and the current
/// slider angle; nothing here is cached across frames.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackArcs {
    /// Center coordinate on both axes.
    pub center: f64,
    /// Track radius.
    pub radius: f64,
    /// Start of the track arc.
    pub track_start: Point,
    /// End of the track arc, just shy of the full span.
    pub track_end: Point,
    /// Start of the progress arc, at the origin value's angle.
    pub progress_start: Point,
    /// Knob position, which is also the end of the progress arc.
    pub knob: Point,
    /// Whether the progress arc itself spans at least half the circle,
    /// measured from the origin point to the knob.
    pub large_arc: bool,
    /// Whether the progress arc runs in the positive sweep direction,
    /// i.e. the knob sits past the origin point.
    pub sweep_positive: bool,
    track_start_angle: f64,
    track_sweep: f64,
    progress_start_angle: f64,
    progress_sweep: f64,
}

impl TrackArcs {
    /// Build the frame geometry for `slider_angle` (the engine's current
    /// angle, offset not yet applied) with the progress arc anchored at
    /// the configured origin value. `angle_unit` is radians per step.
    pub fn new(config: &SliderConfig, slider_angle: f64, angle_unit: f64) -> Self {
        let offset = config.arc_offset_radians();
        let span = config.arc_length_radians();
        let center = config.side / 2.0;
        let radius = config.radius();

        let knob_angle = slider_angle + offset;
        let origin_angle = offset + angle_unit * (config.origin_value() - config.min);

        let track_start_angle = offset;
        let track_sweep = TRACK_END_FACTOR * (span + offset) - offset;
        let progress_sweep = knob_angle - origin_angle;

        Self {
            center,
            radius,
            track_start: point_on_track(center, radius, track_start_angle),
            track_end: point_on_track(center, radius, track_start_angle + track_sweep),
            progress_start: point_on_track(center, radius, origin_angle),
            knob: point_on_track(center, radius, knob_angle),
            large_arc: progress_sweep.abs() >= std::f64::consts::PI,
            sweep_positive: knob_angle >= origin_angle,
            track_start_angle,
            track_sweep,
            progress_start_angle: origin_angle,
            progress_sweep,
        }
    }

    /// Bezier path for the full track arc.
    pub fn track_path(&self) -> BezPath {
        self.arc_path(self.track_start_angle, self.track_sweep)
    }

    /// Bezier path for the progress arc, from the origin point to the
    /// knob. The sweep is negative when the knob sits before the origin.
    pub fn progress_path(&self) -> BezPath {
        self.arc_path(self.progress_start_angle, self.progress_sweep)
    }

    /// Track arc as a polyline with `samples` segments, for hosts that
    /// paint line strips instead of beziers.
    pub fn track_points(&self, samples: usize) -> Vec<Point> {
        sample_arc(
            self.center,
            self.radius,
            self.track_start_angle,
            self.track_sweep,
            samples,
        )
    }

    /// Progress arc as a polyline with `samples` segments.
    pub fn progress_points(&self, samples: usize) -> Vec<Point> {
        sample_arc(
            self.center,
            self.radius,
            self.progress_start_angle,
            self.progress_sweep,
            samples,
        )
    }

    fn arc_path(&self, start_angle: f64, sweep: f64) -> BezPath {
        Arc::new(
            Point::new(self.center, self.center),
            Vec2::new(self.radius, self.radius),
            start_angle,
            sweep,
            0.0,
        )
        .to_path(ARC_TOLERANCE)
    }
}

/// Evenly sampled points along a circular arc, endpoints included.
pub fn sample_arc(
    center: f64,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    samples: usize,
) -> Vec<Point> {
    let samples = samples.max(1);
    (0..=samples)
        .map(|i| {
            let t = i as f64 / samples as f64;
            point_on_track(center, radius, start_angle + sweep * t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    fn config() -> SliderConfig {
        SliderConfig {
            // Absolute sizing keeps the expected radius round: 50 - 5 = 45.
            circle_width: Some(10.0),
            progress_width: Some(6.0),
            knob_radius: Some(5.0),
            ..SliderConfig::default()
        }
    }

    fn assert_point_eq(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_knob_placement() {
        let config = config();
        let unit = TAU / 100.0;

        let arcs = TrackArcs::new(&config, 0.0, unit);
        assert_point_eq(arcs.knob, Point::new(95.0, 50.0));

        let arcs = TrackArcs::new(&config, PI / 2.0, unit);
        assert_point_eq(arcs.knob, Point::new(50.0, 95.0));
    }

    #[test]
    fn test_track_ends_short_of_full_circle() {
        let arcs = TrackArcs::new(&config(), 0.0, TAU / 100.0);
        assert_point_eq(arcs.track_start, Point::new(95.0, 50.0));
        // The end stops just before wrapping back onto the start.
        assert!(arcs.track_end.y < 50.0);
        assert!((arcs.track_end.distance(arcs.track_start)) < 0.01);
    }

    #[test]
    fn test_large_arc_flag_flips_at_half_circle() {
        let config = config();
        let unit = TAU / 100.0;
        assert!(!TrackArcs::new(&config, PI - 0.01, unit).large_arc);
        assert!(TrackArcs::new(&config, PI + 0.01, unit).large_arc);
    }

    #[test]
    fn test_large_arc_flag_measures_from_the_origin() {
        // With the origin halfway round, a knob just past it sweeps a
        // short arc even though its absolute angle is past π.
        let config = SliderConfig {
            origin: Some(50.0),
            ..config()
        };
        let unit = TAU / 100.0;
        assert!(!TrackArcs::new(&config, PI + 0.5, unit).large_arc);
        // A knob back at the start sweeps a full half circle backwards.
        assert!(TrackArcs::new(&config, 0.0, unit).large_arc);
    }

    #[test]
    fn test_sweep_direction_relative_to_origin() {
        let config = SliderConfig {
            origin: Some(50.0),
            ..config()
        };
        let unit = TAU / 100.0;

        let past_origin = TrackArcs::new(&config, PI + 0.5, unit);
        assert!(past_origin.sweep_positive);

        let before_origin = TrackArcs::new(&config, PI - 0.5, unit);
        assert!(!before_origin.sweep_positive);
        assert!(before_origin.progress_points(32).len() == 33);
    }

    #[test]
    fn test_arc_offset_rotates_everything() {
        let config = SliderConfig {
            arc_offset_degrees: 90.0,
            ..config()
        };
        let arcs = TrackArcs::new(&config, 0.0, TAU / 100.0);
        assert_point_eq(arcs.track_start, Point::new(50.0, 95.0));
        assert_point_eq(arcs.knob, Point::new(50.0, 95.0));
    }

    #[test]
    fn test_progress_polyline_runs_from_origin_to_knob() {
        let config = config();
        let arcs = TrackArcs::new(&config, PI / 2.0, TAU / 100.0);
        let points = arcs.progress_points(16);
        assert_point_eq(points[0], arcs.progress_start);
        assert_point_eq(*points.last().unwrap(), arcs.knob);
    }

    #[test]
    fn test_paths_are_nonempty() {
        let arcs = TrackArcs::new(&config(), PI / 3.0, TAU / 100.0);
        assert!(arcs.track_path().elements().len() > 1);
        assert!(arcs.progress_path().elements().len() > 1);
    }
}
