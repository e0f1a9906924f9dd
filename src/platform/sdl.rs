//! SDL2 window, renderer and event pump.

use std::collections::HashMap;

use glam::Vec2;
use sdl2::event::{Event, WindowEvent};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::keyboard::Keycode;
use sdl2::pixels;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};
use tracing::{debug, info, trace};

use crate::constants::{WINDOW_SIZE, WINDOW_TITLE};
use crate::direction::Direction;
use crate::error::{GameError, GameResult};
use crate::platform::{Backend, Color, InputEvent};

/// Maps physical keys to the directions they steer Pac-Man in.
#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, Direction>,
}

impl Default for Bindings {
    fn default() -> Self {
        let key_bindings = HashMap::from([
            (Keycode::Up, Direction::Up),
            (Keycode::Down, Direction::Down),
            (Keycode::Left, Direction::Left),
            (Keycode::Right, Direction::Right),
        ]);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn direction_for(&self, key: Keycode) -> Option<Direction> {
        self.key_bindings.get(&key).copied()
    }
}

impl From<Color> for pixels::Color {
    fn from(color: Color) -> Self {
        pixels::Color::RGB(color.r, color.g, color.b)
    }
}

/// The desktop backend: one fixed-size SDL window.
pub struct SdlBackend {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    bindings: Bindings,
    // Keep SDL alive for the backend's lifetime so the video subsystem is not shut down
    _sdl_context: Sdl,
}

impl SdlBackend {
    /// Initializes SDL and opens the game window.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails.
    pub fn new() -> GameResult<Self> {
        info!("Initializing SDL2");
        let sdl_context = sdl2::init().map_err(|e| GameError::Sdl(e.to_string()))?;
        let video_subsystem = sdl_context.video().map_err(|e| GameError::Sdl(e.to_string()))?;
        let event_pump = sdl_context.event_pump().map_err(|e| GameError::Sdl(e.to_string()))?;

        trace!(width = WINDOW_SIZE.x, height = WINDOW_SIZE.y, "Creating game window");
        let window = video_subsystem
            .window(WINDOW_TITLE, WINDOW_SIZE.x, WINDOW_SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer = canvas.info().name, "Canvas renderer initialized");

        Ok(Self {
            canvas,
            event_pump,
            bindings: Bindings::default(),
            _sdl_context: sdl_context,
        })
    }
}

impl Backend for SdlBackend {
    fn poll_event(&mut self) -> Option<InputEvent> {
        while let Some(event) = self.event_pump.poll_event() {
            match event {
                Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                } => return Some(InputEvent::CloseRequested),
                Event::KeyDown { keycode: Some(key), .. } => {
                    if let Some(direction) = self.bindings.direction_for(key) {
                        return Some(InputEvent::Move(direction));
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn clear(&mut self) -> GameResult<()> {
        self.canvas.set_draw_color(pixels::Color::from(Color::BLACK));
        self.canvas.clear();
        Ok(())
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) -> GameResult<()> {
        self.canvas
            .filled_circle(
                center.x.round() as i16,
                center.y.round() as i16,
                radius.round() as i16,
                pixels::Color::from(color),
            )
            .map_err(GameError::Render)
    }

    fn present(&mut self) -> GameResult<()> {
        self.canvas.present();
        Ok(())
    }
}
