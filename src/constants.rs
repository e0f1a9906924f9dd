//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{UVec2, Vec2};

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The title of the game window.
pub const WINDOW_TITLE: &str = "Pacman";
/// The size of the window, in pixels. Fixed at startup.
pub const WINDOW_SIZE: UVec2 = UVec2::new(800, 600);

/// Points awarded for capturing a ghost while invulnerable.
pub const GHOST_CAPTURE_SCORE: u32 = 100;

/// Player parameters.
pub mod pacman {
    use super::*;

    pub const RADIUS: f32 = 20.0;
    /// Distance travelled per frame, in pixels.
    pub const SPEED: f32 = 5.0;
    pub const STARTING_LIVES: u32 = 3;
    /// Horizontally centered, one radius above the bottom edge.
    pub const START_POSITION: Vec2 = Vec2::new(WINDOW_SIZE.x as f32 / 2.0, WINDOW_SIZE.y as f32 - RADIUS);
    /// How long Pac-Man stays invulnerable after losing a life.
    pub const INVULNERABILITY: Duration = Duration::from_secs(10);
}

/// Ghost parameters.
pub mod ghost {
    use super::*;

    pub const RADIUS: f32 = 15.0;
    pub const COUNT: usize = 4;
    /// How long a captured ghost must stay down before it may come back.
    pub const RESPAWN_DELAY: Duration = Duration::from_secs(5);

    /// Spawn points, laid out in a row along the top of the window.
    pub const SPAWN_POSITIONS: [Vec2; COUNT] = [
        Vec2::new(50.0, 100.0),
        Vec2::new(150.0, 100.0),
        Vec2::new(250.0, 100.0),
        Vec2::new(350.0, 100.0),
    ];
}
