//! Procedural circle bitmaps
//!
//! The slider's thumb and halo are bitmap sprites rendered on the CPU.
//! Rasterization sits behind a trait so tests can substitute a stub and
//! assert on the requested color and sizes instead of pixels.

use iced::Color;
use iced::advanced::image::Handle;
use image::{Rgba, RgbaImage};

/// An RGBA bitmap produced by a rasterizer.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major.
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Convert into an iced image handle for drawing.
    pub fn into_handle(self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.pixels)
    }
}

/// Renders a filled circle of `circle_diameter` px centered on a square
/// `canvas` px canvas; the rest of the canvas is transparent.
pub trait CircleRasterizer: std::fmt::Debug {
    fn rasterize(&self, color: Color, circle_diameter: u32, canvas: u32) -> Bitmap;
}

/// CPU rasterizer producing a filled circle with a feathered rim.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareRasterizer;

impl CircleRasterizer for SoftwareRasterizer {
    fn rasterize(&self, color: Color, circle_diameter: u32, canvas: u32) -> Bitmap {
        let canvas = canvas.max(circle_diameter).max(1);
        let [r, g, b, a] = color.into_rgba8();
        let center = canvas as f32 / 2.0;
        let radius = circle_diameter as f32 / 2.0;

        let img = RgbaImage::from_fn(canvas, canvas, |x, y| {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let distance = (dx * dx + dy * dy).sqrt();

            // 1px feather at the rim
            let coverage = (radius - distance + 0.5).clamp(0.0, 1.0);
            let alpha = (f32::from(a) * coverage).round() as u8;

            Rgba([r, g, b, alpha])
        });

        Bitmap {
            width: canvas,
            height: canvas,
            pixels: img.into_raw(),
        }
    }
}
