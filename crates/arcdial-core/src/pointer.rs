//! Pointer geometry relative to the circular track.

use kurbo::{Point, Rect};
use std::f64::consts::TAU;

/// A measurable rectangular drawing surface.
///
/// The host owns the surface; the tracker only ever needs its current
/// bounding rectangle. Implementations should measure live geometry, not
/// cache it, so scrolls and resizes are picked up on the next event.
pub trait Surface {
    /// Current bounding rectangle in absolute coordinates.
    fn bounding_rect(&self) -> Rect;
}

/// Fixed rectangles are surfaces too; tests and immediate-mode hosts use
/// the rect they were just given for the frame.
impl Surface for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }
}

/// Tracks the last observed pointer position against the slider's track:
/// its angle around the track center and whether it falls within the
/// accepted annulus.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerTracker {
    track_radius: f64,
    tolerance: f64,
    /// Half the surface side; the surface is square, so one coordinate
    /// serves both axes.
    center: f64,
    /// Last position relative to the surface's top-left origin.
    relative: Point,
}

impl PointerTracker {
    /// Create a tracker for a track of `track_radius`, accepting input
    /// within `tolerance` of it (conventionally half the radius).
    pub fn new(track_radius: f64, tolerance: f64) -> Self {
        Self {
            track_radius,
            tolerance,
            center: 0.0,
            relative: Point::ZERO,
        }
    }

    /// Record a pointer position given in absolute coordinates.
    ///
    /// Re-measures the surface on every call, so `angle` and
    /// `within_range` reflect the surface's position at this event even
    /// after a scroll or resize.
    pub fn set_position(&mut self, point: Point, surface: &dyn Surface) {
        let rect = surface.bounding_rect();
        self.center = rect.width() / 2.0;
        self.relative = Point::new(point.x - rect.x0, point.y - rect.y0);
    }

    /// Angle of the last position around the track center, in `[0, 2π)`.
    /// A position exactly at the center reads as angle 0.
    pub fn angle(&self) -> f64 {
        ((self.relative.y - self.center).atan2(self.relative.x - self.center) + TAU) % TAU
    }

    /// Whether the last position's distance from the center is within
    /// `tolerance` of the track radius.
    pub fn within_range(&self) -> bool {
        let dx = self.relative.x - self.center;
        let dy = self.relative.y - self.center;
        (dx.hypot(dy) - self.track_radius).abs() <= self.tolerance
    }
}
