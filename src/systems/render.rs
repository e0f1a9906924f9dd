use bevy_ecs::event::EventWriter;
use bevy_ecs::system::{NonSendMut, Query};
use smallvec::SmallVec;

use crate::entity::{Ghost, Pacman};
use crate::error::{GameError, GameResult};
use crate::platform::{Backend, BackendResource, Color};

/// Draws the frame: Pac-Man first, then every ghost still in play.
pub fn render_system(
    mut backend: NonSendMut<BackendResource>,
    players: Query<&Pacman>,
    ghosts: Query<&Ghost>,
    mut errors: EventWriter<GameError>,
) {
    let mut active: SmallVec<[&Ghost; 4]> = ghosts.iter().filter(|ghost| ghost.is_active()).collect();
    active.sort_by_key(|ghost| ghost.ghost_type());

    if let Err(e) = draw_frame(backend.0.as_mut(), players.iter(), active) {
        errors.write(e);
    }
}

fn draw_frame<'a>(
    backend: &mut dyn Backend,
    players: impl Iterator<Item = &'a Pacman>,
    ghosts: impl IntoIterator<Item = &'a Ghost>,
) -> GameResult<()> {
    backend.clear()?;

    for pacman in players {
        backend.draw_circle(pacman.position(), pacman.radius(), Color::YELLOW)?;
    }

    for ghost in ghosts {
        backend.draw_circle(ghost.position(), ghost.radius(), Color::RED)?;
    }

    backend.present()
}
