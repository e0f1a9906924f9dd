use glam::Vec2;
use pacman_lite::constants::ghost::{RADIUS, SPAWN_POSITIONS};
use pacman_lite::entity::{Ghost, GhostType};
use pacman_lite::time::ManualClock;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

mod common;
use common::secs;

#[test]
fn test_ghosts_spawn_active_at_their_spawn_points() {
    let clock = ManualClock::new();

    for (ghost_type, expected) in GhostType::iter().zip(SPAWN_POSITIONS) {
        let ghost = Ghost::spawn(ghost_type, &clock);
        assert_eq!(ghost.position(), expected);
        assert_eq!(ghost.spawn_position(), expected);
        assert_eq!(ghost.slot(), ghost_type.index());
        assert_eq!(ghost.radius(), RADIUS);
        assert_that(&ghost.is_active()).is_true();
    }
}

#[test]
fn test_ghost_order_follows_spawn_order() {
    let order: Vec<GhostType> = GhostType::iter().collect();
    assert_eq!(
        order,
        vec![GhostType::Blinky, GhostType::Pinky, GhostType::Inky, GhostType::Clyde]
    );
    assert_that(&(GhostType::Blinky < GhostType::Clyde)).is_true();
}

#[test]
fn test_active_ghost_never_regenerates() {
    let clock = ManualClock::new();
    let ghost = Ghost::spawn(GhostType::Inky, &clock);

    clock.advance(secs(60.0));
    assert_that(&ghost.can_regenerate(&clock)).is_false();
}

#[test]
fn test_respawn_eligibility_after_five_seconds() {
    let clock = ManualClock::new();
    let mut ghost = Ghost::spawn(GhostType::Blinky, &clock);
    ghost.deactivate(&clock);

    clock.set(secs(4.9));
    assert_that(&ghost.can_regenerate(&clock)).is_false();

    clock.set(secs(5.0));
    assert_that(&ghost.can_regenerate(&clock)).is_false();

    clock.set(secs(5.1));
    assert_that(&ghost.can_regenerate(&clock)).is_true();
}

#[test]
fn test_deactivate_restarts_respawn_timer() {
    let clock = ManualClock::new();
    let mut ghost = Ghost::spawn(GhostType::Pinky, &clock);

    // Time spent active does not count toward the respawn delay
    clock.advance(secs(30.0));
    ghost.deactivate(&clock);
    assert_that(&ghost.is_active()).is_false();
    assert_that(&ghost.can_regenerate(&clock)).is_false();

    clock.advance(secs(5.5));
    assert_that(&ghost.can_regenerate(&clock)).is_true();
}

#[test]
fn test_regenerate_reactivates_at_position() {
    let clock = ManualClock::new();
    let mut ghost = Ghost::spawn(GhostType::Clyde, &clock);
    ghost.deactivate(&clock);

    ghost.regenerate(Vec2::new(10.0, 20.0));

    assert_that(&ghost.is_active()).is_true();
    assert_eq!(ghost.position(), Vec2::new(10.0, 20.0));
    assert_that(&ghost.can_regenerate(&clock)).is_false();
}
