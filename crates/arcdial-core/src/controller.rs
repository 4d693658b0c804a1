//! Interaction state machine driving the slider from host input events.
//!
//! The host owns the event loop and the drawing surface; it forwards
//! press/move/release/click/touch events here and calls [`SliderController::tick`]
//! once per frame while an animation is running. All mutation is
//! synchronous; there is no global state and no background work.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use crate::config::{ConfigError, SliderConfig};
use crate::geometry::TrackArcs;
use crate::pointer::{PointerTracker, Surface};
use crate::steps::StepState;

/// Move events swallowed right after a press, so jitter from the
/// initiating click cannot move the knob.
const MOVE_DEBOUNCE_TICKS: u32 = 5;

/// Step-units the click animation advances per frame.
const ANIMATION_STEP_UNITS: f64 = 2.0;

/// Notifications the controller queues for the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    /// A step change was committed; carries the new discrete value.
    ValueChanged(f64),
    /// A touch move arrived, whether or not it was usable.
    TouchMoveAttempted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { move_ticks: u32 },
}

/// An in-flight click-to-target transition, advanced one increment per
/// frame. `current` tracks the continuous animation angle; the snapped
/// display angle lives on the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    current: f64,
    target: f64,
    increment: f64,
}

/// Drives a [`StepState`] and [`PointerTracker`] pair from raw input
/// events and exposes the resulting angle, value, and frame geometry.
///
/// Recreate the controller whenever the configuration changes; mutate it
/// in place per event otherwise.
#[derive(Debug, Clone)]
pub struct SliderController {
    config: SliderConfig,
    steps: StepState,
    tracker: PointerTracker,
    /// Current display angle, offset not applied, snapped to a step.
    angle: f64,
    current_value: f64,
    drag: DragState,
    animation: Option<Animation>,
    events: Vec<SliderEvent>,
}

impl SliderController {
    /// Build a controller from a validated configuration.
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let steps = StepState::new(
            config.steps(),
            0.0,
            config.value,
            config.arc_length_radians(),
        );
        let radius = config.radius();
        let mut controller = Self {
            angle: steps.angle_value(),
            current_value: steps.current_step(),
            steps,
            tracker: PointerTracker::new(radius, radius / 2.0),
            config,
            drag: DragState::Idle,
            animation: None,
            events: Vec::new(),
        };
        let initial = controller.config.value;
        controller.set_value(initial);
        Ok(controller)
    }

    /// Current display angle in `[0, arc_length)`, offset not applied.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Current committed value.
    pub fn value(&self) -> f64 {
        self.current_value
    }

    /// Index of the current step.
    pub fn current_step_index(&self) -> usize {
        self.steps.current_step_index()
    }

    /// The configuration this controller was built from.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Whether a click animation is still running.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Geometry for drawing the current frame.
    pub fn arcs(&self) -> TrackArcs {
        TrackArcs::new(&self.config, self.angle, self.steps.angle_unit())
    }

    /// Take all notifications queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<SliderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pointer pressed on the surface; enters the dragging state.
    pub fn handle_press(&mut self) {
        self.drag = DragState::Dragging { move_ticks: 0 };
    }

    /// Pointer released anywhere; leaves the dragging state.
    pub fn handle_release(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Pointer moved while dragging. The first few moves after a press
    /// are swallowed; afterwards the tracked angle is applied, gated on
    /// the annulus test like clicks and touch moves.
    pub fn handle_move(&mut self, point: Point, surface: &dyn Surface) {
        let DragState::Dragging { move_ticks } = self.drag else {
            return;
        };
        if move_ticks < MOVE_DEBOUNCE_TICKS {
            self.drag = DragState::Dragging {
                move_ticks: move_ticks + 1,
            };
            return;
        }
        self.tracker.set_position(point, surface);
        if self.tracker.within_range() {
            self.apply_tracked_angle();
        }
    }

    /// A direct click on the track. When it lands within the annulus the
    /// knob animates to the clicked angle; otherwise nothing happens.
    pub fn handle_click(&mut self, point: Point, surface: &dyn Surface) {
        self.tracker.set_position(point, surface);
        if !self.tracker.within_range() {
            return;
        }
        let target = self
            .normalized_tracker_angle()
            .clamp(0.0, self.config.arc_length_radians());
        self.start_animation(target);
    }

    /// A touch move with `touch_count` simultaneous touch points.
    ///
    /// Always queues [`SliderEvent::TouchMoveAttempted`]. Multi-touch
    /// never mutates slider state; a single touch behaves like a drag
    /// move, gated on the annulus test.
    pub fn handle_touch_move(&mut self, touch_count: usize, point: Point, surface: &dyn Surface) {
        self.events.push(SliderEvent::TouchMoveAttempted);
        if touch_count > 1 {
            return;
        }
        self.tracker.set_position(point, surface);
        if self.tracker.within_range() {
            self.apply_tracked_angle();
        }
    }

    /// Programmatic value update from the host. Fits the value to the
    /// step grid, then rounds *up* to the first step that can hold it;
    /// the committed value is always one of the steps.
    pub fn set_value(&mut self, value: f64) {
        let fitted = self.config.fit_to_step(value);
        self.steps.update_from_value(fitted);
        self.angle = self.steps.angle_value();
        self.commit(self.steps.current_step());
    }

    /// Advance an in-flight animation by one frame.
    ///
    /// Returns true while more frames are needed, so immediate-mode
    /// hosts know to keep scheduling repaints. Within two increments of
    /// the target the angle snaps to it and the animation ends.
    pub fn tick(&mut self) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        if (animation.target - animation.current).abs() < (2.0 * animation.increment).abs() {
            self.update_angle(animation.target);
            self.animation = None;
            false
        } else {
            let next = animation.current + animation.increment;
            self.update_angle(next);
            self.animation = Some(Animation {
                current: next,
                ..animation
            });
            true
        }
    }

    /// Tracker angle rotated into the slider's own frame (offset removed)
    /// and normalized into `[0, 2π)`.
    fn normalized_tracker_angle(&self) -> f64 {
        (self.tracker.angle() - self.config.arc_offset_radians() + TAU) % TAU
    }

    fn apply_tracked_angle(&mut self) {
        let angle = self.normalized_tracker_angle();
        // A jump of half the circle or more between samples is the 0/2π
        // wraparound, not a real drag; drop the sample.
        if (self.angle - angle).abs() >= PI {
            log::debug!(
                "dropping drag sample across the wraparound ({:.3} -> {:.3})",
                self.angle,
                angle
            );
            return;
        }
        self.update_angle(angle.clamp(0.0, self.config.arc_length_radians()));
    }

    fn update_angle(&mut self, angle: f64) {
        self.steps.update_from_angle(angle);
        self.angle = self.steps.angle_value();
        self.commit(self.steps.current_step());
    }

    fn commit(&mut self, value: f64) {
        if value != self.current_value {
            self.current_value = value;
            self.events.push(SliderEvent::ValueChanged(value));
        }
    }

    /// A fresh click supersedes any animation still in flight; the old
    /// target is abandoned rather than left converging in parallel.
    fn start_animation(&mut self, target: f64) {
        let direction = if self.angle < target { 1.0 } else { -1.0 };
        self.animation = Some(Animation {
            current: self.angle,
            target,
            increment: direction * self.steps.angle_unit() * ANIMATION_STEP_UNITS,
        });
    }
}
