//! Widget trait implementations and supporting geometry
//!
//! Widgets here use generic Message types and do not depend on the demo
//! application directly.

pub mod halo_slider;
pub mod thumb_geometry;
pub mod thumb_sprites;

pub use halo_slider::{ControlState, HaloSlider, StateColors};
