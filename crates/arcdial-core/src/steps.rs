//! Discretized value domain: step values, step indices, and their angles.

use serde::{Deserialize, Serialize};

/// Backs the current-step angle off the arc end so a full-circle slider
/// never lands exactly on its own start point.
const FULL_ARC_BACKOFF: f64 = 1e-5;

/// Owns the ordered set of allowed step values and the currently selected
/// step, and converts between values, indices, and arc angles.
///
/// All inputs are clamped into range; no operation here can fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepState {
    steps: Vec<f64>,
    offset: f64,
    max_arc_length: f64,
    current_step_index: usize,
}

impl StepState {
    /// Create a step state positioned at `initial_value`.
    ///
    /// The initial value is matched by exact equality against the step
    /// list; with no exact match the slider starts at the first step.
    /// `steps` must be strictly increasing with at least two entries.
    pub fn new(steps: Vec<f64>, offset: f64, initial_value: f64, max_arc_length: f64) -> Self {
        debug_assert!(steps.len() >= 2, "slider needs at least two steps");
        let current_step_index = match steps.iter().position(|&s| s == initial_value) {
            Some(index) => index,
            None => {
                log::warn!(
                    "initial value {initial_value} matches no step exactly, starting at the first step"
                );
                0
            }
        };
        Self {
            steps,
            offset,
            max_arc_length,
            current_step_index,
        }
    }

    fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Radians of arc between adjacent steps.
    pub fn angle_unit(&self) -> f64 {
        (self.max_arc_length - self.offset) / self.last_index() as f64
    }

    /// Angle of the current step, kept strictly below `max_arc_length`.
    pub fn angle_value(&self) -> f64 {
        (self.offset + self.angle_unit() * self.current_step_index as f64)
            .min(self.max_arc_length - f64::EPSILON)
            - FULL_ARC_BACKOFF
    }

    /// Value of the currently selected step.
    pub fn current_step(&self) -> f64 {
        self.steps[self.current_step_index]
    }

    /// Index of the currently selected step.
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    /// Number of steps in the domain.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; the domain never has fewer than two steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Select the first step whose value is at least `value`, clamping at
    /// the last step.
    ///
    /// This rounds *up* to the next step boundary, unlike the angle path
    /// which rounds to nearest. Discrete value input comes from the host
    /// programmatically; the asymmetry is deliberate and load-bearing.
    pub fn update_from_value(&mut self, value: f64) {
        for (index, &step) in self.steps.iter().enumerate().take(self.last_index()) {
            if value <= step {
                self.current_step_index = index;
                return;
            }
        }
        self.current_step_index = self.last_index();
    }

    /// Select the step nearest to a continuous `angle`, clamping the
    /// resulting index into range.
    pub fn update_from_angle(&mut self, angle: f64) {
        let step_index = ((angle - self.offset) / self.angle_unit()).round();
        // Float-to-int casts saturate, so negatives and NaN both land on 0.
        self.current_step_index = (step_index as usize).min(self.last_index());
    }
}
