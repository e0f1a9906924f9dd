//! The game's two kinds of entity and the collision capability they share.

pub mod collision;
pub mod ghost;
pub mod pacman;

pub use collision::{Bounds, Collidable};
pub use ghost::{Ghost, GhostType};
pub use pacman::Pacman;
