use bevy_ecs::prelude::*;

use crate::direction::Direction;
use crate::entity::GhostType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Exit,
    MovePlayer(Direction),
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
    /// Pac-Man ran into a ghost while vulnerable and lost a life.
    LifeLost { remaining: u32 },
    GhostCaptured(GhostType),
    GhostRespawned(GhostType),
    /// Pac-Man has no lives left.
    GameOver,
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
