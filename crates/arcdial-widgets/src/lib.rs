//! Circular slider widget for egui hosts.
//!
//! The geometry and interaction logic live in `arcdial-core`; this crate
//! is the hosting layer: it owns the square drawing surface, forwards
//! egui pointer/touch input into the core controller, and paints the
//! track, progress arc, and knob each frame.

mod slider;

pub use slider::CircleSlider;
