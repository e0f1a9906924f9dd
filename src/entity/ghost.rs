//! Ghost entity implementation.
//!
//! Ghosts do not move. Each one is either active (drawn, dangerous, capturable) or inactive after
//! being captured, in which case it keeps track of how long it has been down.

use bevy_ecs::component::Component;
use glam::Vec2;
use strum_macros::{Display, EnumIter};

use crate::constants::ghost::{RADIUS, RESPAWN_DELAY, SPAWN_POSITIONS};
use crate::entity::collision::{Bounds, Collidable};
use crate::time::{Stopwatch, TimeSource};

/// The four ghosts, in the order they are checked against Pac-Man each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum GhostType {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostType {
    /// Position of this ghost in the processing order.
    pub fn index(self) -> usize {
        match self {
            GhostType::Blinky => 0,
            GhostType::Pinky => 1,
            GhostType::Inky => 2,
            GhostType::Clyde => 3,
        }
    }

    pub fn spawn_position(self) -> Vec2 {
        SPAWN_POSITIONS[self.index()]
    }
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Ghost {
    ghost_type: GhostType,
    position: Vec2,
    radius: f32,
    active: bool,
    down_since: Stopwatch,
}

impl Ghost {
    pub fn new(ghost_type: GhostType, position: Vec2, clock: &dyn TimeSource) -> Self {
        Self {
            ghost_type,
            position,
            radius: RADIUS,
            active: true,
            down_since: Stopwatch::start(clock),
        }
    }

    /// A ghost standing on its usual spawn point.
    pub fn spawn(ghost_type: GhostType, clock: &dyn TimeSource) -> Self {
        Self::new(ghost_type, ghost_type.spawn_position(), clock)
    }

    /// Takes the ghost out of play and starts its respawn timer.
    pub fn deactivate(&mut self, clock: &dyn TimeSource) {
        self.active = false;
        self.down_since.restart(clock);
    }

    /// Whether the ghost is down and has been for longer than the respawn delay.
    pub fn can_regenerate(&self, clock: &dyn TimeSource) -> bool {
        !self.active && self.down_since.elapsed(clock) > RESPAWN_DELAY
    }

    /// Brings the ghost back into play at `position`.
    pub fn regenerate(&mut self, position: Vec2) {
        self.position = position;
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn ghost_type(&self) -> GhostType {
        self.ghost_type
    }

    /// Index of this ghost in the collision order.
    pub fn slot(&self) -> usize {
        self.ghost_type.index()
    }

    /// Where this ghost starts and, if respawning is enabled, returns to.
    pub fn spawn_position(&self) -> Vec2 {
        self.ghost_type.spawn_position()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Collidable for Ghost {
    fn bounds(&self) -> Bounds {
        Bounds::around_circle(self.position, self.radius)
    }
}
