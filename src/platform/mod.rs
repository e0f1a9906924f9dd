//! Platform abstraction layer.
//!
//! The game only ever needs to pull input events and draw filled circles, so the windowing
//! library hides behind the small [`Backend`] trait. The SDL2 implementation lives in [`sdl`].

use glam::Vec2;

use crate::direction::Direction;
use crate::error::GameResult;

mod desktop;
pub mod sdl;

pub use desktop::*;

/// Input the game understands, already translated from the windowing library's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was asked to close.
    CloseRequested,
    /// One of the directional keys was pressed.
    Move(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The window surface and its event queue.
pub trait Backend {
    /// Returns the next pending input event, or `None` once the queue is drained for this frame.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Clears the frame to the background color.
    fn clear(&mut self) -> GameResult<()>;

    /// Draws a filled circle centered on `center`.
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) -> GameResult<()>;

    /// Shows everything drawn since the last [`Backend::clear`].
    fn present(&mut self) -> GameResult<()>;
}

/// A non-send resource holding the active backend.
pub struct BackendResource(pub Box<dyn Backend>);
