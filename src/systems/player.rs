use bevy_ecs::{
    event::{EventReader, EventWriter},
    system::{Query, Res, ResMut},
};
use tracing::{debug, info};

use crate::{
    entity::Pacman,
    error::GameError,
    events::{GameCommand, GameEvent},
    systems::components::{CloseReason, RunState},
    time::GameClock,
};

/// Applies player commands: steering Pac-Man and closing the game.
pub fn player_control_system(
    mut events: EventReader<GameEvent>,
    mut state: ResMut<RunState>,
    mut players: Query<&mut Pacman>,
    mut errors: EventWriter<GameError>,
) {
    let mut pacman = match players.single_mut() {
        Ok(pacman) => pacman,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for player system: {}",
                e
            )));
            return;
        }
    };

    for event in events.read() {
        if let GameEvent::Command(command) = event {
            match command {
                GameCommand::MovePlayer(direction) => {
                    debug!(%direction, "Pac-Man changes direction");
                    pacman.set_direction(direction.as_vec2());
                }
                GameCommand::Exit => {
                    info!("Exit requested. Exiting...");
                    *state = RunState::Closed(CloseReason::CloseRequested);
                }
            }
        }
    }
}

/// Moves Pac-Man one step along his velocity and ages his invulnerability.
pub fn player_movement_system(clock: Res<GameClock>, mut players: Query<&mut Pacman>) {
    for mut pacman in players.iter_mut() {
        pacman.advance(&*clock);
    }
}
