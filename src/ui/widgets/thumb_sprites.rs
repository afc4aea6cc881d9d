//! Sprite cache for the thumb's three surfaces
//!
//! The thumb is drawn from three bitmaps: the idle circle, the enlarged
//! circle, and the outer halo. Each is rasterized lazily and regenerated
//! only when its color changes, so repeated frames and repeated setter calls
//! with the same color rasterize nothing.

use iced::Color;
use iced::advanced::image::Handle;

use super::thumb_geometry::{ENLARGED_THUMB_RADIUS, HALO_SIZE, NORMAL_THUMB_SIZE};
use crate::ui::primitives::CircleRasterizer;

/// Colors the slider draws its thumb with, gathered per frame from the
/// widget configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbPalette {
    pub normal: Color,
    pub highlighted: Color,
    pub halo: Color,
}

#[derive(Debug)]
struct Slot {
    color: Color,
    handle: Handle,
}

/// Cached bitmap handles for the thumb surfaces.
#[derive(Debug, Default)]
pub struct ThumbSprites {
    normal: Option<Slot>,
    highlighted: Option<Slot>,
    halo: Option<Slot>,
}

impl ThumbSprites {
    /// Rasterize any sprite whose color changed since the last call.
    pub fn ensure(&mut self, palette: &ThumbPalette, rasterizer: &dyn CircleRasterizer) {
        let normal = NORMAL_THUMB_SIZE as u32;
        let enlarged = (ENLARGED_THUMB_RADIUS * 2.0) as u32;
        let halo = HALO_SIZE as u32;

        Self::fill(&mut self.normal, palette.normal, normal, normal, rasterizer);
        // The enlarged circle sits on the full halo canvas so both surfaces
        // scale in lockstep while the container grows.
        Self::fill(
            &mut self.highlighted,
            palette.highlighted,
            enlarged,
            halo,
            rasterizer,
        );
        Self::fill(&mut self.halo, palette.halo, halo, halo, rasterizer);
    }

    fn fill(
        slot: &mut Option<Slot>,
        color: Color,
        circle_diameter: u32,
        canvas: u32,
        rasterizer: &dyn CircleRasterizer,
    ) {
        let stale = slot.as_ref().is_none_or(|s| s.color != color);
        if stale {
            let handle = rasterizer
                .rasterize(color, circle_diameter, canvas)
                .into_handle();
            *slot = Some(Slot { color, handle });
        }
    }

    pub fn normal(&self) -> Option<&Handle> {
        self.normal.as_ref().map(|s| &s.handle)
    }

    pub fn highlighted(&self) -> Option<&Handle> {
        self.highlighted.as_ref().map(|s| &s.handle)
    }

    pub fn halo(&self) -> Option<&Handle> {
        self.halo.as_ref().map(|s| &s.handle)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::ui::primitives::Bitmap;

    /// Records rasterization requests instead of producing pixels.
    #[derive(Debug, Default)]
    struct StubRasterizer {
        calls: RefCell<Vec<(Color, u32, u32)>>,
    }

    impl CircleRasterizer for StubRasterizer {
        fn rasterize(&self, color: Color, circle_diameter: u32, canvas: u32) -> Bitmap {
            self.calls.borrow_mut().push((color, circle_diameter, canvas));
            Bitmap {
                width: canvas,
                height: canvas,
                pixels: vec![0; (canvas * canvas * 4) as usize],
            }
        }
    }

    fn palette() -> ThumbPalette {
        ThumbPalette {
            normal: Color::from_rgb(0.3, 0.3, 0.3),
            highlighted: Color::from_rgb(1.0, 0.15, 0.3),
            halo: Color::WHITE,
        }
    }

    #[test]
    fn rasterizes_three_surfaces_with_expected_sizes() {
        let stub = StubRasterizer::default();
        let mut sprites = ThumbSprites::default();

        sprites.ensure(&palette(), &stub);

        let calls = stub.calls.borrow();
        assert_eq!(calls.len(), 3);
        // idle circle: 8px on an 8px canvas
        assert_eq!((calls[0].1, calls[0].2), (8, 8));
        // enlarged circle: 28px on the 32px halo canvas
        assert_eq!((calls[1].1, calls[1].2), (28, 32));
        // halo: 32px on a 32px canvas
        assert_eq!((calls[2].1, calls[2].2), (32, 32));

        assert!(sprites.normal().is_some());
        assert!(sprites.highlighted().is_some());
        assert!(sprites.halo().is_some());
    }

    #[test]
    fn same_palette_is_idempotent() {
        let stub = StubRasterizer::default();
        let mut sprites = ThumbSprites::default();

        sprites.ensure(&palette(), &stub);
        sprites.ensure(&palette(), &stub);
        sprites.ensure(&palette(), &stub);

        assert_eq!(stub.calls.borrow().len(), 3);
    }

    #[test]
    fn color_change_rasterizes_only_that_surface() {
        let stub = StubRasterizer::default();
        let mut sprites = ThumbSprites::default();

        sprites.ensure(&palette(), &stub);

        let mut changed = palette();
        changed.highlighted = Color::from_rgb(0.0, 0.5, 1.0);
        sprites.ensure(&changed, &stub);

        let calls = stub.calls.borrow();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[3].0, changed.highlighted);
    }
}
