//! UI module for the halo slider
//!
//! # Architecture
//!
//! The module is organized into three layers:
//!
//! - **Primitives** (`primitives`): Low-level, app-agnostic rendering helpers
//! - **Widgets** (`widgets`): Widget trait implementations and their geometry
//! - **Animation** (`animation`): Time-eased visual state

pub mod animation;
pub mod primitives;
pub mod theme;
pub mod widgets;
