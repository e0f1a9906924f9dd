use bevy_ecs::event::EventWriter;
use bevy_ecs::system::{Query, Res};
use tracing::info;

use crate::entity::Ghost;
use crate::events::GameEvent;
use crate::systems::components::{GameConfig, GhostRespawn};
use crate::time::GameClock;

/// Returns captured ghosts to their spawn point once they have been down long enough.
///
/// Does nothing under [`GhostRespawn::Never`].
pub fn ghost_respawn_system(
    clock: Res<GameClock>,
    config: Res<GameConfig>,
    mut ghosts: Query<&mut Ghost>,
    mut events: EventWriter<GameEvent>,
) {
    if config.ghost_respawn == GhostRespawn::Never {
        return;
    }

    for mut ghost in ghosts.iter_mut() {
        if ghost.can_regenerate(&*clock) {
            let spawn = ghost.spawn_position();
            ghost.regenerate(spawn);
            info!(ghost = %ghost.ghost_type(), "Ghost respawned");
            events.write(GameEvent::GhostRespawned(ghost.ghost_type()));
        }
    }
}
