//! Demo screen: a mini player strip driving the halo slider
//!
//! Simulates playback of a single track. The elapsed and remaining time
//! labels flank the seek row and step out of the enlarged thumb's way while
//! the user is scrubbing near either end, and the elapsed label takes the
//! accent color for the duration of the scrub.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Padding, Subscription, Task, Theme};

use halo_slider::ui::theme;
use halo_slider::{ControlState, HaloSlider};

/// Demo track length, 4:32.
const TRACK_SECS: f32 = 272.0;

/// Fraction of the track near each end where the enlarged thumb would sit
/// on top of a time label.
const LABEL_OVERLAP: f32 = 0.08;

pub struct App {
    /// Playback position in seconds.
    position: f32,
    is_playing: bool,
    is_seeking: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    SeekPreview(f32),
    SeekGrab,
    SeekRelease,
    TogglePlayback,
    PlaybackTick,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        tracing::info!("starting halo slider demo");

        (
            Self {
                position: 63.0,
                is_playing: true,
                is_seeking: false,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SeekPreview(position) => {
                self.position = position;
            }
            Message::SeekGrab => {
                tracing::debug!(position = self.position, "seek started");
                self.is_seeking = true;
            }
            Message::SeekRelease => {
                tracing::debug!(position = self.position, "seek committed");
                self.is_seeking = false;
            }
            Message::TogglePlayback => {
                self.is_playing = !self.is_playing;
            }
            Message::PlaybackTick => {
                if self.is_playing && !self.is_seeking {
                    self.position = (self.position + 1.0).min(TRACK_SECS);
                    if self.position >= TRACK_SECS {
                        self.is_playing = false;
                    }
                }
            }
        }

        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_playing {
            iced::time::every(std::time::Duration::from_secs(1)).map(|_| Message::PlaybackTick)
        } else {
            Subscription::none()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn view(&self) -> Element<'_, Message> {
        let percent = self.position / TRACK_SECS;

        let slider = HaloSlider::new(0.0..=TRACK_SECS, self.position, Message::SeekPreview)
            .on_grab(Message::SeekGrab)
            .on_release(Message::SeekRelease)
            .circle_thumb(theme::TRACK_REST, ControlState::Normal)
            .circle_thumb(theme::ACCENT, ControlState::Highlighted)
            .minimum_track_tint(theme::TRACK_REST, ControlState::Normal)
            .minimum_track_tint(theme::ACCENT, ControlState::Highlighted)
            .maximum_track_tint(theme::TRACK_REMAINING)
            .step(1.0)
            .width(Length::Fixed(400.0));

        // Drop a label down and out of the way when the enlarged thumb
        // travels over its end of the track.
        let elapsed_nudge = self.is_seeking && percent < LABEL_OVERLAP;
        let remaining_nudge = self.is_seeking && percent > 1.0 - LABEL_OVERLAP;

        let elapsed_color = if self.is_seeking {
            theme::ACCENT
        } else {
            theme::TEXT_MUTED
        };

        let elapsed = container(
            text(format_time(self.position))
                .size(12)
                .color(elapsed_color),
        )
        .padding(nudge_padding(elapsed_nudge));

        let remaining = container(
            text(format!("-{}", format_time(TRACK_SECS - self.position)))
                .size(12)
                .color(theme::TEXT_MUTED),
        )
        .padding(nudge_padding(remaining_nudge));

        let labels = row![elapsed, Space::new().width(Length::Fill), remaining].width(400);

        let toggle = button(text(if self.is_playing { "Pause" } else { "Play" }).size(14))
            .on_press(Message::TogglePlayback)
            .style(theme::text_button);

        let player = column![slider, labels, toggle]
            .spacing(8)
            .align_x(Alignment::Center);

        container(player)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(iced::Background::Color(theme::BACKGROUND)),
                ..Default::default()
            })
            .into()
    }
}

fn nudge_padding(nudged: bool) -> Padding {
    Padding {
        top: if nudged { 12.0 } else { 0.0 },
        ..Padding::ZERO
    }
}

/// Format seconds as mm:ss.
fn format_time(secs: f32) -> String {
    let mins = (secs / 60.0) as u32;
    let secs = (secs % 60.0) as u32;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_time_as_minutes_and_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(63.0), "1:03");
        assert_eq!(format_time(272.0), "4:32");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn seek_cycle_updates_position_and_flag() {
        let (mut app, _) = App::new();

        let _ = app.update(Message::SeekGrab);
        assert!(app.is_seeking);

        let _ = app.update(Message::SeekPreview(120.0));
        assert_eq!(app.position, 120.0);

        // Playback ticks are ignored while scrubbing
        let _ = app.update(Message::PlaybackTick);
        assert_eq!(app.position, 120.0);

        let _ = app.update(Message::SeekRelease);
        assert!(!app.is_seeking);

        let _ = app.update(Message::PlaybackTick);
        assert_eq!(app.position, 121.0);
    }

    #[test]
    fn playback_stops_at_track_end() {
        let (mut app, _) = App::new();
        app.position = TRACK_SECS - 1.0;

        let _ = app.update(Message::PlaybackTick);
        assert_eq!(app.position, TRACK_SECS);
        assert!(!app.is_playing);
    }
}
