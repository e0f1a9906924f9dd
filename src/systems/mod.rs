//! The Entity-Component-System (ECS) module.
//!
//! This module contains the systems that make up a frame and the resources they share.

pub mod collision;
pub mod components;
pub mod ghost;
pub mod input;
pub mod player;
pub mod render;
pub mod state;

pub use self::collision::*;
pub use self::components::*;
pub use self::ghost::*;
pub use self::input::*;
pub use self::player::*;
pub use self::render::*;
pub use self::state::*;
