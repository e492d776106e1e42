//! Simulation core. Nothing in here touches ggez, the filesystem or a global
//! random source, so it can be driven directly from tests.

pub mod achievements;
pub mod effects;
pub mod enemy;
pub mod grid;
pub mod items;
pub mod session;
pub mod snake;

pub use achievements::{Achievement, Achievements};
pub use effects::{Effects, Rainbow, Shield, SpeedBoost};
pub use enemy::Enemy;
pub use grid::{Board, Direction, Position};
pub use items::{Food, SpecialEffect, SpecialFood, Tint};
pub use session::{Command, GameEvent, LifeLoss, Phase, Purchase, Session, TickInput};
pub use snake::{MoveFailure, Snake};
