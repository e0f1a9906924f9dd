use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::constants::LOOP_TIME;
use crate::error::GameResult;
use crate::formatter;
use crate::game::Game;
use crate::platform::{self, sdl::SdlBackend};
use crate::time::SystemClock;

/// Main application wrapper that owns the game and paces the frame loop.
pub struct App {
    pub game: Game,
}

impl App {
    /// Opens the SDL window and sets up the game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails.
    pub fn new() -> GameResult<Self> {
        let backend = SdlBackend::new()?;
        let game = Game::new(Box::new(backend), SystemClock::new());

        info!("Application initialization completed successfully");
        Ok(App { game })
    }

    /// Executes a single frame of the game loop, sleeping off whatever is left of the frame budget.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` once it has closed.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        // Increment the global frame counter for tracing
        formatter::increment_frame();

        if self.game.tick() {
            return false;
        }

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(elapsed);
            if time != Duration::ZERO {
                platform::sleep(time);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", elapsed - LOOP_TIME);
        }

        true
    }
}
