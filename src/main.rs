#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use anyhow::Context;
use pacman_lite::{app::App, constants::LOOP_TIME, platform};
use tracing::info;

/// The main entry point of the application.
///
/// Opens the window and runs frames until the window is closed or Pac-Man runs out of lives.
pub fn main() -> anyhow::Result<()> {
    platform::init_logging();

    let mut app = App::new().context("Could not create app")?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run() {}

    info!(run_state = ?app.game.run_state(), "Game loop finished");
    Ok(())
}
