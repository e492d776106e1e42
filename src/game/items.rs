use rand::Rng;

use super::grid::{Board, Position};
use super::snake::Snake;

/// Colour tag carried by pickups. The renderer maps it to an actual colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Red,
    Yellow,
    Blue,
    Purple,
    Orange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
    pub tint: Tint,
}

impl Food {
    pub fn plain(position: Position) -> Self {
        Self {
            position,
            tint: Tint::Red,
        }
    }

    pub fn spawn(board: &Board, snake: &Snake, rng: &mut impl Rng) -> Self {
        Self::plain(free_cell(board, snake, rng))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialEffect {
    SpeedBoost,
    Shrink,
    CoinBonus,
}

impl SpecialEffect {
    pub const ALL: [SpecialEffect; 3] = [
        SpecialEffect::SpeedBoost,
        SpecialEffect::Shrink,
        SpecialEffect::CoinBonus,
    ];

    pub fn tint(self) -> Tint {
        match self {
            SpecialEffect::SpeedBoost => Tint::Blue,
            SpecialEffect::Shrink => Tint::Purple,
            SpecialEffect::CoinBonus => Tint::Orange,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialFood {
    pub position: Position,
    pub effect: SpecialEffect,
}

impl SpecialFood {
    pub fn new(position: Position, effect: SpecialEffect) -> Self {
        Self { position, effect }
    }

    pub fn spawn(board: &Board, snake: &Snake, rng: &mut impl Rng) -> Self {
        let effect = SpecialEffect::ALL[rng.gen_range(0..SpecialEffect::ALL.len())];
        Self::new(free_cell(board, snake, rng), effect)
    }
}

/// Draws random cells until one is off the snake's body. Enemies and other
/// items are not avoided, so pickups may overlap.
///
/// Loops forever if the snake covers the whole board.
pub fn free_cell(board: &Board, snake: &Snake, rng: &mut impl Rng) -> Position {
    loop {
        let pos = board.random_cell(rng);
        if !snake.occupies(pos) {
            return pos;
        }
    }
}
