//! Thumb placement geometry
//!
//! Pure functions mapping slider state to thumb and halo rectangles. The
//! enlarged placement is anchored proportionally to the value position so
//! the thumb's track-contact point does not jump while it grows.

use iced::Rectangle;

/// Radius of the thumb circle while the slider is idle.
pub const NORMAL_THUMB_RADIUS: f32 = 4.0;
/// Radius of the inner circle while the thumb is held.
pub const ENLARGED_THUMB_RADIUS: f32 = 14.0;
/// Radius of the outer halo shown while the thumb is held.
pub const HALO_RADIUS: f32 = 16.0;

/// Side of the idle thumb canvas.
pub const NORMAL_THUMB_SIZE: f32 = NORMAL_THUMB_RADIUS * 2.0;
/// Side of the halo canvas; the thumb container grows to this while held.
pub const HALO_SIZE: f32 = HALO_RADIUS * 2.0;

/// Fraction of the range covered by `value`, clamped to `[0, 1]`.
///
/// A degenerate range (`max <= min`) maps to 0 rather than dividing by zero.
pub fn percent(value: f32, min: f32, max: f32) -> f32 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Nominal (small) thumb frame for the given widget bounds and progress.
///
/// Horizontal travel spans `bounds.width - NORMAL_THUMB_SIZE` so the circle
/// stays inside the bounds at both extremes; vertically centered on the rail.
pub fn thumb_rect(bounds: Rectangle, percent: f32) -> Rectangle {
    let offset = (bounds.width - NORMAL_THUMB_SIZE) * percent;

    Rectangle {
        x: bounds.x + offset,
        y: bounds.y + bounds.height / 2.0 - NORMAL_THUMB_RADIUS,
        width: NORMAL_THUMB_SIZE,
        height: NORMAL_THUMB_SIZE,
    }
}

/// Halo-sized frame for the enlarged thumb.
///
/// The origin shifts left by `2 * (enlarged - normal radius) * percent` to
/// compensate for the asymmetric growth: at the track start the thumb grows
/// purely rightward, at the end purely leftward, and in between the contact
/// point stays aligned with the value position.
pub fn enlarged_rect(nominal: Rectangle, percent: f32) -> Rectangle {
    Rectangle {
        x: nominal.x - (ENLARGED_THUMB_RADIUS - NORMAL_THUMB_RADIUS) * 2.0 * percent,
        y: nominal.y + nominal.height / 2.0 - HALO_RADIUS,
        width: HALO_SIZE,
        height: HALO_SIZE,
    }
}

/// Whether `inner` lies entirely within `outer`.
///
/// Used as a guard: a track rectangle outside the widget bounds keeps the
/// nominal frame instead of producing a malformed enlarged placement.
pub fn rect_contains(outer: &Rectangle, inner: &Rectangle) -> bool {
    inner.x >= outer.x
        && inner.y >= outer.y
        && inner.x + inner.width <= outer.x + outer.width
        && inner.y + inner.height <= outer.y + outer.height
}

/// Componentwise interpolation between two rectangles.
pub fn lerp_rect(from: Rectangle, to: Rectangle, t: f32) -> Rectangle {
    let lerp = |a: f32, b: f32| a + (b - a) * t;

    Rectangle {
        x: lerp(from.x, to.x),
        y: lerp(from.y, to.y),
        width: lerp(from.width, to.width),
        height: lerp(from.height, to.height),
    }
}

/// Square of side `side` centered inside `rect`.
pub fn centered_square(rect: Rectangle, side: f32) -> Rectangle {
    Rectangle {
        x: rect.x + (rect.width - side) / 2.0,
        y: rect.y + (rect.height - side) / 2.0,
        width: side,
        height: side,
    }
}
