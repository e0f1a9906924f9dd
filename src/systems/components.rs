use bevy_ecs::resource::Resource;

/// Points earned so far. Only ever goes up.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResource(pub u32);

/// Why the game loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The window was closed by the player.
    CloseRequested,
    /// Pac-Man ran out of lives.
    GameOver,
}

/// The loop controller's state. `Closed` is terminal.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    Closed(CloseReason),
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}

/// What happens to a ghost after it has been captured.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GhostRespawn {
    /// Captured ghosts stay down for the rest of the game.
    #[default]
    Never,
    /// Captured ghosts return to their spawn point once their respawn delay has passed.
    AtSpawn,
}

/// What happens when a vulnerable Pac-Man overlaps a ghost that has been captured.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InactiveGhostContact {
    /// The captured ghost still costs a life, even though it is not drawn.
    #[default]
    CostsLife,
    /// Captured ghosts are harmless.
    Ignored,
}

/// Gameplay rules that are not fixed by the constants.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub ghost_respawn: GhostRespawn,
    pub inactive_ghost_contact: InactiveGhostContact,
}
