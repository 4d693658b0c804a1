//! Arcdial Core Library
//!
//! Geometry and state engine for a circular drag/click slider: maps raw
//! pointer coordinates to a discrete step value and back to drawable arcs.
//! Hosts own the drawing surface and forward pointer/touch events; the
//! engine owns everything in between.

pub mod config;
pub mod controller;
pub mod geometry;
pub mod pointer;
pub mod steps;

pub use config::{Color, ConfigError, SliderConfig};
pub use controller::{SliderController, SliderEvent};
pub use geometry::{point_on_track, TrackArcs};
pub use pointer::{PointerTracker, Surface};
pub use steps::StepState;

// Hosts paint from kurbo types; re-export so they don't need their own pin.
pub use kurbo;
