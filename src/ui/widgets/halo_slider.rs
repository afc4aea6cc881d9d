//! Halo slider widget
//!
//! A seek slider whose thumb enlarges with an outer halo while the user is
//! dragging it and shrinks back on release. The thumb is drawn from
//! procedurally rasterized circle sprites; the enlarge/shrink transition is
//! a 300ms ease-out by default.
//!
//! Based on iced's slider widget with a custom thumb pipeline.

use std::sync::Arc;
use std::time::Duration;

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::keyboard;
use iced::keyboard::key::{self, Key};
use iced::mouse;
use iced::touch;
use iced::window;
use iced::{Background, Color, Element, Event, Length, Pixels, Point, Rectangle, Size, Theme};

use std::ops::RangeInclusive;

use super::thumb_geometry::{self, HALO_SIZE, NORMAL_THUMB_SIZE};
use super::thumb_sprites::{ThumbPalette, ThumbSprites};
use crate::ui::animation::ThumbAnimation;
use crate::ui::primitives::{CircleRasterizer, SoftwareRasterizer};

/// Control states a per-state color can be keyed by.
///
/// A closed set: colors can only be associated with these two states, so
/// there is no "unknown state" branch to silently ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Normal,
    Highlighted,
}

/// Two-entry color mapping keyed by [`ControlState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateColors {
    normal: Color,
    highlighted: Color,
}

impl StateColors {
    pub const fn new(normal: Color, highlighted: Color) -> Self {
        Self {
            normal,
            highlighted,
        }
    }

    pub fn get(&self, state: ControlState) -> Color {
        match state {
            ControlState::Normal => self.normal,
            ControlState::Highlighted => self.highlighted,
        }
    }

    pub fn set(&mut self, state: ControlState, color: Color) {
        match state {
            ControlState::Normal => self.normal = color,
            ControlState::Highlighted => self.highlighted = color,
        }
    }

    /// Color for the currently active state.
    pub fn active(&self, highlighted: bool) -> Color {
        if highlighted {
            self.highlighted
        } else {
            self.normal
        }
    }
}

/// Halo slider widget
pub struct HaloSlider<'a, Message> {
    range: RangeInclusive<f32>,
    step: f32,
    value: f32,
    on_change: Box<dyn Fn(f32) -> Message + 'a>,
    on_grab: Option<Message>,
    on_release: Option<Message>,
    width: Length,
    height: f32,
    thumb_colors: StateColors,
    track_tints: StateColors,
    halo_color: Color,
    maximum_track_tint: Color,
    animation_duration: Duration,
    rasterizer: Arc<dyn CircleRasterizer>,
}

impl<'a, Message> HaloSlider<'a, Message>
where
    Message: Clone,
{
    /// Tall enough for the fully enlarged thumb.
    pub const DEFAULT_HEIGHT: f32 = HALO_SIZE;

    const RAIL_WIDTH: f32 = 4.0;

    pub fn new<F>(range: RangeInclusive<f32>, value: f32, on_change: F) -> Self
    where
        F: 'a + Fn(f32) -> Message,
    {
        let value = value.clamp(*range.start(), *range.end());

        Self {
            value,
            range,
            step: 0.001,
            on_change: Box::new(on_change),
            on_grab: None,
            on_release: None,
            width: Length::Fill,
            height: Self::DEFAULT_HEIGHT,
            thumb_colors: StateColors::new(Color::WHITE, Color::WHITE),
            track_tints: StateColors::new(Color::WHITE, Color::WHITE),
            halo_color: Color::WHITE,
            maximum_track_tint: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            animation_duration: crate::ui::animation::DEFAULT_THUMB_ANIMATION,
            rasterizer: Arc::new(SoftwareRasterizer),
        }
    }

    /// Message published when the user grabs the thumb.
    pub fn on_grab(mut self, on_grab: Message) -> Self {
        self.on_grab = Some(on_grab);
        self
    }

    /// Message published when the user releases the thumb.
    pub fn on_release(mut self, on_release: Message) -> Self {
        self.on_release = Some(on_release);
        self
    }

    /// Set the inner-circle tint for one control state.
    pub fn circle_thumb(mut self, color: Color, state: ControlState) -> Self {
        self.thumb_colors.set(state, color);
        self
    }

    /// Set the filled-track tint for one control state. The tint of the
    /// currently active state is what draws on the next frame.
    pub fn minimum_track_tint(mut self, color: Color, state: ControlState) -> Self {
        self.track_tints.set(state, color);
        self
    }

    /// Tint of the unfilled track portion.
    pub fn maximum_track_tint(mut self, color: Color) -> Self {
        self.maximum_track_tint = color;
        self
    }

    /// Tint of the outer halo, visible only while the thumb is held.
    pub fn halo_color(mut self, color: Color) -> Self {
        self.halo_color = color;
        self
    }

    /// Duration of the enlarge/shrink transition (default 300ms).
    pub fn thumb_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Substitute the circle rasterizer. Intended for tests and themed
    /// hosts that want custom thumb bitmaps.
    pub fn rasterizer(mut self, rasterizer: Arc<dyn CircleRasterizer>) -> Self {
        self.rasterizer = rasterizer;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Pixels>) -> Self {
        self.height = height.into().0;
        self
    }

    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    fn palette(&self) -> ThumbPalette {
        ThumbPalette {
            normal: self.thumb_colors.get(ControlState::Normal),
            highlighted: self.thumb_colors.get(ControlState::Highlighted),
            halo: self.halo_color,
        }
    }
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for HaloSlider<'_, Message>
where
    Message: Clone,
    Renderer: iced::advanced::Renderer
        + iced::advanced::image::Renderer<Handle = iced::advanced::image::Handle>,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: Length::Shrink,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        let locate = |cursor_position: Point| -> Option<f32> {
            if cursor_position.x <= bounds.x {
                Some(*self.range.start())
            } else if cursor_position.x >= bounds.x + bounds.width {
                Some(*self.range.end())
            } else {
                let start = *self.range.start() as f64;
                let end = *self.range.end() as f64;
                let step = self.step as f64;

                let percent = f64::from(cursor_position.x - bounds.x) / f64::from(bounds.width);

                let steps = (percent * (end - start) / step).round();
                let value = steps * step + start;

                Some((value.min(end) as f32).clamp(*self.range.start(), *self.range.end()))
            }
        };

        match &event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if let Some(cursor_position) = cursor.position_over(bounds) {
                    if let Some(new_value) = locate(cursor_position) {
                        if (self.value - new_value).abs() > f32::EPSILON {
                            shell.publish((self.on_change)(new_value));
                            self.value = new_value;
                        }
                    }

                    if let Some(on_grab) = self.on_grab.clone() {
                        shell.publish(on_grab);
                    }

                    state.is_dragging = true;
                    state.animation.set_duration(self.animation_duration);
                    state.pending_commit = Some(state.animation.begin_tracking());

                    shell.capture_event();
                    shell.request_redraw();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. }) => {
                // FingerLost is the cancel path; it shrinks the thumb the
                // same way a regular release does.
                if state.is_dragging {
                    if let Some(on_release) = self.on_release.clone() {
                        shell.publish(on_release);
                    }

                    state.is_dragging = false;
                    state.pending_commit = Some(state.animation.end_tracking());

                    shell.request_redraw();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                if state.is_dragging {
                    if let Some(pos) = cursor.land().position() {
                        if let Some(new_value) = locate(pos) {
                            if (self.value - new_value).abs() > f32::EPSILON {
                                shell.publish((self.on_change)(new_value));
                                self.value = new_value;
                            }
                        }
                    }
                    shell.capture_event();
                }
            }
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                if cursor.is_over(bounds) {
                    let step = self.step;
                    let current = self.value;
                    match key {
                        Key::Named(key::Named::ArrowUp) | Key::Named(key::Named::ArrowRight) => {
                            let new_value = (current + step).min(*self.range.end());
                            if (self.value - new_value).abs() > f32::EPSILON {
                                shell.publish((self.on_change)(new_value));
                                self.value = new_value;
                            }
                            shell.capture_event();
                        }
                        Key::Named(key::Named::ArrowDown) | Key::Named(key::Named::ArrowLeft) => {
                            let new_value = (current - step).max(*self.range.start());
                            if (self.value - new_value).abs() > f32::EPSILON {
                                shell.publish((self.on_change)(new_value));
                                self.value = new_value;
                            }
                            shell.capture_event();
                        }
                        _ => (),
                    }
                }
            }
            Event::Window(window::Event::RedrawRequested(now)) => {
                state.animation.set_duration(self.animation_duration);
                state.animation.tick(*now);
                state.sprites.ensure(&self.palette(), self.rasterizer.as_ref());

                if let Some(token) = state.pending_commit {
                    state.animation.try_commit(token);
                    if !state.animation.is_animating() {
                        state.pending_commit = None;
                    }
                }

                if state.animation.is_animating() {
                    shell.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        let percent = thumb_geometry::percent(self.value, *self.range.start(), *self.range.end());
        let progress = state.animation.progress();
        let highlighted = state.animation.is_highlighted();

        let rail_y = bounds.y + bounds.height / 2.0;
        let track = Rectangle {
            x: bounds.x,
            y: rail_y - Self::RAIL_WIDTH / 2.0,
            width: bounds.width,
            height: Self::RAIL_WIDTH,
        };

        let nominal = thumb_geometry::thumb_rect(bounds, percent);

        // A track that escaped the bounds keeps the nominal placement.
        let target = if thumb_geometry::rect_contains(&bounds, &track) {
            thumb_geometry::enlarged_rect(nominal, percent)
        } else {
            nominal
        };
        let container = thumb_geometry::lerp_rect(nominal, target, progress);

        let rail_border = Border {
            radius: 2.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        };

        // Filled (minimum) track up to the thumb center
        let filled_end = nominal.x + nominal.width / 2.0;
        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: bounds.x,
                    y: track.y,
                    width: filled_end - bounds.x,
                    height: track.height,
                },
                border: rail_border,
                ..renderer::Quad::default()
            },
            Background::Color(self.track_tints.active(highlighted)),
        );

        // Remaining (maximum) track
        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: filled_end,
                    y: track.y,
                    width: bounds.x + bounds.width - filled_end,
                    height: track.height,
                },
                border: rail_border,
                ..renderer::Quad::default()
            },
            Background::Color(self.maximum_track_tint),
        );

        let sprite_side = NORMAL_THUMB_SIZE + (HALO_SIZE - NORMAL_THUMB_SIZE) * progress;

        // Outer halo beneath the inner circle, attached only while held
        if state.animation.halo_attached() {
            if let Some(halo) = state.sprites.halo() {
                draw_sprite(
                    renderer,
                    halo,
                    thumb_geometry::centered_square(container, sprite_side),
                );
            }
        }

        // Inner circle; the sprite swaps with the highlight state while the
        // frame keeps easing
        let sprite = if highlighted {
            state.sprites.highlighted()
        } else {
            state.sprites.normal()
        };
        if let Some(sprite) = sprite {
            draw_sprite(
                renderer,
                sprite,
                thumb_geometry::centered_square(container, sprite_side),
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.is_dragging {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grabbing
            }
        } else if cursor.is_over(layout.bounds()) {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grab
            }
        } else {
            mouse::Interaction::default()
        }
    }
}

fn draw_sprite<Renderer>(
    renderer: &mut Renderer,
    handle: &iced::advanced::image::Handle,
    bounds: Rectangle,
) where
    Renderer: iced::advanced::image::Renderer<Handle = iced::advanced::image::Handle>,
{
    renderer.draw_image(
        iced::advanced::image::Image::new(handle.clone())
            .filter_method(iced::advanced::image::FilterMethod::Linear),
        bounds,
        bounds,
    );
}

impl<'a, Message, Renderer> From<HaloSlider<'a, Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: iced::advanced::Renderer
        + iced::advanced::image::Renderer<Handle = iced::advanced::image::Handle>
        + 'a,
{
    fn from(slider: HaloSlider<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(slider)
    }
}

#[derive(Debug, Default)]
struct State {
    is_dragging: bool,
    animation: ThumbAnimation,
    pending_commit: Option<u64>,
    sprites: ThumbSprites,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::animation::Phase;
    use std::time::Instant;

    const BLACK: Color = Color::BLACK;
    const RED: Color = Color {
        r: 1.0,
        g: 0.15,
        b: 0.3,
        a: 1.0,
    };

    #[test]
    fn state_colors_are_a_closed_mapping() {
        let mut colors = StateColors::new(BLACK, RED);

        assert_eq!(colors.get(ControlState::Normal), BLACK);
        assert_eq!(colors.get(ControlState::Highlighted), RED);

        colors.set(ControlState::Normal, RED);
        assert_eq!(colors.get(ControlState::Normal), RED);
    }

    #[test]
    fn active_color_follows_highlight_flag() {
        let colors = StateColors::new(BLACK, RED);

        assert_eq!(colors.active(false), BLACK);
        assert_eq!(colors.active(true), RED);
    }

    /// Black normal tints, red highlighted tints: beginning tracking turns
    /// the thumb and track red immediately; ending tracking reverts both,
    /// and the phase returns to Normal once the shrink settles.
    #[test]
    fn tint_scenario_across_tracking_cycle() {
        let thumb = StateColors::new(BLACK, RED);
        let track = StateColors::new(BLACK, RED);
        let mut anim = ThumbAnimation::default();

        let token = anim.begin_tracking();
        assert_eq!(thumb.active(anim.is_highlighted()), RED);
        assert_eq!(track.active(anim.is_highlighted()), RED);

        let now = Instant::now();
        anim.tick(now);
        anim.tick(now + Duration::from_secs(1));
        anim.try_commit(token);
        assert_eq!(anim.phase(), Phase::Enlarged);

        let token = anim.end_tracking();
        // Reverts immediately, before the shrink finishes
        assert_eq!(thumb.active(anim.is_highlighted()), BLACK);
        assert_eq!(track.active(anim.is_highlighted()), BLACK);

        let now = Instant::now();
        anim.tick(now);
        anim.tick(now + Duration::from_secs(1));
        anim.try_commit(token);
        assert_eq!(anim.phase(), Phase::Normal);
        assert!(!anim.halo_attached());
    }
}
