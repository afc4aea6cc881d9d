//! A seek slider whose thumb enlarges with an animated halo while dragged
//!
//! Designed for media-player interfaces: the thumb is a small dot that grows
//! into a highlighted circle with an outer halo the moment the user grabs it,
//! and eases back once released.

pub mod ui;

pub use ui::widgets::{ControlState, HaloSlider};
