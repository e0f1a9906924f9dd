//! A tiny Pac-Man-style arcade game library crate.

pub mod app;
pub mod constants;
pub mod direction;
pub mod entity;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod platform;
pub mod systems;
pub mod time;
