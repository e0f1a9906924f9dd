use bevy_ecs::{
    event::EventReader,
    system::{Res, ResMut},
};
use thousands::Separable;
use tracing::{error, info};

use crate::{
    error::GameError,
    events::GameEvent,
    systems::components::{CloseReason, RunState, ScoreResource},
};

/// Run condition: true while the loop controller has not closed.
pub fn is_running(state: Res<RunState>) -> bool {
    state.is_running()
}

/// The line printed to stdout when the game ends.
pub fn final_score_message(score: u32) -> String {
    format!("Game over! Final score: {}", score.separate_with_commas())
}

/// Ends the game once Pac-Man runs out of lives and reports the final score.
///
/// Runs after the whole update phase, so the reported score includes every capture made in the
/// final frame.
pub fn game_over_system(mut events: EventReader<GameEvent>, mut state: ResMut<RunState>, score: Res<ScoreResource>) {
    if !events.read().any(|event| matches!(event, GameEvent::GameOver)) {
        return;
    }

    if !state.is_running() {
        return;
    }

    info!(score = score.0, "Game over");
    println!("{}", final_score_message(score.0));
    *state = RunState::Closed(CloseReason::GameOver);
}

/// Logs errors reported by other systems during the frame.
pub fn error_log_system(mut errors: EventReader<GameError>) {
    for e in errors.read() {
        error!("{e}");
    }
}
