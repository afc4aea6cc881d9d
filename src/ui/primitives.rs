//! Low-level rendering primitives
//!
//! Primitives are app-agnostic: no Message types, no widget state.

pub mod circle_raster;

pub use circle_raster::{Bitmap, CircleRasterizer, SoftwareRasterizer};
