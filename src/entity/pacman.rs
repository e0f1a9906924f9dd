//! Pac-Man entity implementation.
//!
//! Pac-Man glides freely in whichever direction was last commanded, one velocity step per frame.
//! Losing a life grants a window of invulnerability during which further hits are ignored and
//! ghosts can be captured instead.

use bevy_ecs::component::Component;
use glam::Vec2;
use tracing::debug;

use crate::constants::pacman::{INVULNERABILITY, RADIUS, SPEED, STARTING_LIVES, START_POSITION};
use crate::entity::collision::{Bounds, Collidable};
use crate::time::{Stopwatch, TimeSource};

/// The player character.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Pacman {
    position: Vec2,
    velocity: Vec2,
    speed: f32,
    radius: f32,
    lives: u32,
    invulnerable: bool,
    invulnerability: Stopwatch,
}

impl Pacman {
    pub fn new(position: Vec2, speed: f32, lives: u32, clock: &dyn TimeSource) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            speed,
            radius: RADIUS,
            lives,
            invulnerable: false,
            invulnerability: Stopwatch::start(clock),
        }
    }

    /// Pac-Man as he appears at the start of a game.
    pub fn spawn(clock: &dyn TimeSource) -> Self {
        Self::new(START_POSITION, SPEED, STARTING_LIVES, clock)
    }

    /// Points Pac-Man along `direction`, scaled by his speed.
    ///
    /// The vector is not normalized; a zero vector brings him to a stop.
    pub fn set_direction(&mut self, direction: Vec2) {
        self.velocity = direction * self.speed;
    }

    /// Moves one frame's worth along the current velocity and expires invulnerability once its
    /// window has passed.
    pub fn advance(&mut self, clock: &dyn TimeSource) {
        self.position += self.velocity;

        if self.invulnerable && self.invulnerability.elapsed(clock) > INVULNERABILITY {
            self.invulnerable = false;
            debug!("Pac-Man is no longer invulnerable");
        }
    }

    /// Takes a life unless Pac-Man is currently invulnerable.
    ///
    /// Returns `true` if a life was actually lost.
    pub fn lose_life(&mut self, clock: &dyn TimeSource) -> bool {
        if self.invulnerable {
            return false;
        }

        self.lives = self.lives.saturating_sub(1);
        self.invulnerable = true;
        self.invulnerability.restart(clock);
        true
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Collidable for Pacman {
    fn bounds(&self) -> Bounds {
        Bounds::around_circle(self.position, self.radius)
    }
}
