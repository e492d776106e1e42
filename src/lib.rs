//! Arcade Snake: a single-player Snake variant with enemies, power-ups,
//! a coin shop and persisted achievements.
//!
//! - `game` holds the simulation. It has no ggez dependency and is driven
//!   entirely through `Session::tick`.
//! - `save` reads and writes the persisted record.
//! - `app`, `render` and `sound` form the ggez shell around the simulation.

pub mod app;
pub mod config;
pub mod game;
pub mod render;
pub mod save;
pub mod sound;
