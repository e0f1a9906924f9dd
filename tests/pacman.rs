use glam::Vec2;
use pacman_lite::constants::pacman::{INVULNERABILITY, RADIUS, SPEED, STARTING_LIVES, START_POSITION};
use pacman_lite::direction::Direction;
use pacman_lite::entity::{Collidable, Pacman};
use pacman_lite::time::ManualClock;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;
use common::secs;

#[test]
fn test_spawned_pacman_defaults() {
    let clock = ManualClock::new();
    let pacman = Pacman::spawn(&clock);

    assert_eq!(pacman.position(), START_POSITION);
    assert_eq!(pacman.velocity(), Vec2::ZERO);
    assert_eq!(pacman.speed(), SPEED);
    assert_eq!(pacman.lives(), STARTING_LIVES);
    assert_that(&pacman.is_invulnerable()).is_false();
}

#[test]
fn test_set_direction_scales_by_speed() {
    let clock = ManualClock::new();
    let mut pacman = Pacman::spawn(&clock);

    pacman.set_direction(Direction::Left.as_vec2());
    assert_eq!(pacman.velocity(), Vec2::new(-SPEED, 0.0));

    pacman.set_direction(Direction::Up.as_vec2());
    assert_eq!(pacman.velocity(), Vec2::new(0.0, -SPEED));
}

#[test]
fn test_set_direction_accepts_any_vector() {
    let clock = ManualClock::new();
    let mut pacman = Pacman::new(Vec2::ZERO, 2.0, 3, &clock);

    pacman.set_direction(Vec2::new(1.0, 1.0));
    assert_eq!(pacman.velocity(), Vec2::new(2.0, 2.0));

    pacman.set_direction(Vec2::ZERO);
    pacman.advance(&clock);
    assert_eq!(pacman.position(), Vec2::ZERO);
}

#[test]
fn test_motion_persists_in_last_direction() {
    let clock = ManualClock::new();
    let mut pacman = Pacman::spawn(&clock);

    // (direction set before this frame, if any)
    let script = [
        Some(Direction::Left),
        None,
        None,
        Some(Direction::Up),
        None,
        Some(Direction::Right),
        Some(Direction::Down),
        None,
    ];

    let mut expected = START_POSITION;
    let mut current = Vec2::ZERO;
    for step in script {
        if let Some(direction) = step {
            pacman.set_direction(direction.as_vec2());
            current = direction.as_vec2() * SPEED;
        }
        pacman.advance(&clock);
        expected += current;
        assert_eq!(pacman.position(), expected);
    }
}

#[test]
fn test_no_bounds_checking_at_window_edges() {
    let clock = ManualClock::new();
    let mut pacman = Pacman::spawn(&clock);
    pacman.set_direction(Direction::Down.as_vec2());

    for _ in 0..10 {
        pacman.advance(&clock);
    }

    assert_eq!(pacman.position(), START_POSITION + Vec2::new(0.0, 10.0 * SPEED));
}

#[test]
fn test_lose_life_grants_invulnerability() {
    let clock = ManualClock::new();
    let mut pacman = Pacman::spawn(&clock);

    assert_that(&pacman.lose_life(&clock)).is_true();
    assert_eq!(pacman.lives(), STARTING_LIVES - 1);
    assert_that(&pacman.is_invulnerable()).is_true();
}

#[test]
fn test_lose_life_is_suppressed_while_invulnerable() {
    let clock = ManualClock::new();
    let mut pacman = Pacman::spawn(&clock);
    pacman.lose_life(&clock);

    clock.advance(secs(3.0));
    assert_that(&pacman.lose_life(&clock)).is_false();
    assert_eq!(pacman.lives(), STARTING_LIVES - 1);

    // A suppressed hit does not extend the window
    clock.advance(secs(7.5));
    pacman.advance(&clock);
    assert_that(&pacman.is_invulnerable()).is_false();
}

#[test]
fn test_invulnerability_expires_only_after_ten_seconds() {
    let clock = ManualClock::new();
    let mut pacman = Pacman::spawn(&clock);
    pacman.lose_life(&clock);

    clock.advance(INVULNERABILITY);
    pacman.advance(&clock);
    assert_that(&pacman.is_invulnerable()).is_true();

    clock.advance(secs(0.1));
    assert_that(&pacman.is_invulnerable()).is_true(); // only cleared when advancing

    pacman.advance(&clock);
    assert_that(&pacman.is_invulnerable()).is_false();
}

#[test]
fn test_three_spaced_hits_exhaust_lives() {
    let clock = ManualClock::new();
    let mut pacman = Pacman::spawn(&clock);

    for remaining in (0..STARTING_LIVES).rev() {
        assert_that(&pacman.lose_life(&clock)).is_true();
        assert_eq!(pacman.lives(), remaining);
        clock.advance(secs(10.1));
        pacman.advance(&clock);
    }

    assert_eq!(pacman.lives(), 0);
    // Lives never go below zero
    pacman.lose_life(&clock);
    assert_eq!(pacman.lives(), 0);
}

#[test]
fn test_bounds_surround_circle() {
    let clock = ManualClock::new();
    let pacman = Pacman::spawn(&clock);
    let bounds = pacman.bounds();

    assert_eq!(bounds.min, START_POSITION - Vec2::splat(RADIUS));
    assert_eq!(bounds.max, START_POSITION + Vec2::splat(RADIUS));
}
