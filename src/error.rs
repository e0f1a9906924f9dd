//! Centralized error types for the game.
//!
//! The rules of the game never fail; everything here comes from the platform boundary (SDL) or
//! from the world being in a shape the systems do not expect.

use bevy_ecs::event::Event;

/// Main error type for the game.
///
/// Also used as an ECS event so systems can report per-frame failures without aborting the frame.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
