use bevy_ecs::event::EventWriter;
use bevy_ecs::system::{Query, Res, ResMut};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::constants::GHOST_CAPTURE_SCORE;
use crate::entity::{Collidable, Ghost, Pacman};
use crate::error::GameError;
use crate::events::GameEvent;
use crate::systems::components::{GameConfig, InactiveGhostContact, ScoreResource};
use crate::time::{GameClock, TimeSource};

/// The result of checking Pac-Man against a single ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// The two do not overlap.
    Miss,
    /// Pac-Man was invulnerable and took the ghost out of play.
    Captured,
    /// Pac-Man was hit. `life_lost` is false when the hit was absorbed by invulnerability.
    Struck { life_lost: bool },
    /// Pac-Man overlapped a captured ghost that has been configured to be harmless.
    PassedThrough,
}

/// Applies the collision rules for one Pac-Man/ghost pair.
///
/// An invulnerable Pac-Man captures an active ghost. Any other overlap is a hit, including
/// overlapping a captured ghost unless `inactive_contact` says otherwise.
pub fn resolve_collision(
    pacman: &mut Pacman,
    ghost: &mut Ghost,
    clock: &dyn TimeSource,
    inactive_contact: InactiveGhostContact,
) -> CollisionOutcome {
    if !pacman.is_colliding_with(ghost) {
        return CollisionOutcome::Miss;
    }

    if pacman.is_invulnerable() && ghost.is_active() {
        ghost.deactivate(clock);
        return CollisionOutcome::Captured;
    }

    if !ghost.is_active() && inactive_contact == InactiveGhostContact::Ignored {
        return CollisionOutcome::PassedThrough;
    }

    CollisionOutcome::Struck {
        life_lost: pacman.lose_life(clock),
    }
}

/// Checks Pac-Man against every ghost, in ghost order, and applies the outcome.
///
/// Ghosts are resolved one after another against the same Pac-Man, so a hit from an earlier
/// ghost makes Pac-Man invulnerable in time to capture a later one within the same frame.
pub fn collision_system(
    clock: Res<GameClock>,
    config: Res<GameConfig>,
    mut score: ResMut<ScoreResource>,
    mut players: Query<&mut Pacman>,
    mut ghosts: Query<&mut Ghost>,
    mut events: EventWriter<GameEvent>,
    mut errors: EventWriter<GameError>,
) {
    let mut pacman = match players.single_mut() {
        Ok(pacman) => pacman,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for collision system: {}",
                e
            )));
            return;
        }
    };

    let mut ordered: SmallVec<[_; 4]> = ghosts.iter_mut().collect();
    ordered.sort_by_key(|ghost| ghost.ghost_type());

    let mut game_over = false;
    for ghost in ordered.iter_mut() {
        match resolve_collision(&mut pacman, ghost, &*clock, config.inactive_ghost_contact) {
            CollisionOutcome::Miss => {}
            CollisionOutcome::PassedThrough => {
                debug!(ghost = %ghost.ghost_type(), "Pac-Man passed through a captured ghost");
            }
            CollisionOutcome::Captured => {
                score.0 += GHOST_CAPTURE_SCORE;
                info!(ghost = %ghost.ghost_type(), score = score.0, "Ghost captured");
                events.write(GameEvent::GhostCaptured(ghost.ghost_type()));
            }
            CollisionOutcome::Struck { life_lost } => {
                if life_lost {
                    info!(
                        ghost = %ghost.ghost_type(),
                        active = ghost.is_active(),
                        remaining = pacman.lives(),
                        "Pac-Man lost a life"
                    );
                    events.write(GameEvent::LifeLost {
                        remaining: pacman.lives(),
                    });
                }
                if pacman.lives() == 0 && !game_over {
                    game_over = true;
                    events.write(GameEvent::GameOver);
                }
            }
        }
    }
}
