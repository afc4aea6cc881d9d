//! Animation system built on `iced_anim`
//!
//! Eased transitions with CSS-like easings; the widget ticks them once per
//! redraw frame.

mod thumb;

pub use thumb::{DEFAULT_THUMB_ANIMATION, Phase, ThumbAnimation};
