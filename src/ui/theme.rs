//! Demo palette
//!
//! Dark mode aesthetic with a warm accent for the active track and thumb.

use iced::widget::button;
use iced::{Background, Border, Color, Theme, color};

/// Accent for the highlighted thumb, active track, and scrubbing label.
pub const ACCENT: Color = color!(0xff274b);

pub const BACKGROUND: Color = color!(0x121212);

/// Idle thumb and filled track while not scrubbing.
pub const TRACK_REST: Color = color!(0x666666);
/// Unfilled track portion.
pub const TRACK_REMAINING: Color = color!(0x333333);

pub const TEXT_PRIMARY: Color = color!(0xffffff);
pub const TEXT_MUTED: Color = color!(0x888888);

const SURFACE: Color = color!(0x1a1a1a);

/// Transparent button that shows a surface on hover.
pub fn text_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: TEXT_MUTED,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(SURFACE)),
            text_color: TEXT_PRIMARY,
            ..base
        },
        _ => base,
    }
}
