use rand::Rng;

use super::grid::{Board, Direction, Position};

/// A wandering enemy. `heading` is `None` once frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    position: Position,
    heading: Option<Direction>,
}

impl Enemy {
    pub fn new(position: Position, heading: Option<Direction>) -> Self {
        Self { position, heading }
    }

    /// Random cell, random heading. Enemies may spawn anywhere, even on the snake.
    pub fn spawn(board: &Board, rng: &mut impl Rng) -> Self {
        Self {
            position: board.random_cell(rng),
            heading: Some(Direction::random(rng)),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub fn is_frozen(&self) -> bool {
        self.heading.is_none()
    }

    pub fn freeze(&mut self) {
        self.heading = None;
    }

    /// Steps forward, or picks a new heading instead when the step would
    /// leave the board.
    pub fn advance(&mut self, board: &Board, rng: &mut impl Rng) {
        let Some(heading) = self.heading else {
            return;
        };
        let next = self.position.stepped(heading, board.cell_size);
        if board.contains(next) {
            self.position = next;
        } else {
            self.heading = Some(Direction::random(rng));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board() -> Board {
        Board::new(800, 600, 20)
    }

    #[test]
    fn test_moves_one_cell_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut enemy = Enemy::new(Position::new(100, 100), Some(Direction::Down));
        enemy.advance(&board(), &mut rng);
        assert_eq!(enemy.position(), Position::new(100, 120));
        assert_eq!(enemy.heading(), Some(Direction::Down));
    }

    #[test]
    fn test_wall_rerolls_heading_without_moving() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut enemy = Enemy::new(Position::new(0, 0), Some(Direction::Left));
        enemy.advance(&board(), &mut rng);
        assert_eq!(enemy.position(), Position::new(0, 0));
        assert!(enemy.heading().is_some());
    }

    #[test]
    fn test_frozen_enemy_stays_put() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut enemy = Enemy::new(Position::new(200, 200), Some(Direction::Up));
        enemy.freeze();
        for _ in 0..10 {
            enemy.advance(&board(), &mut rng);
        }
        assert_eq!(enemy.position(), Position::new(200, 200));
        assert!(enemy.is_frozen());
    }

    #[test]
    fn test_never_leaves_board() {
        let board = Board::new(100, 60, 20);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut enemies: Vec<Enemy> = (0..5).map(|_| Enemy::spawn(&board, &mut rng)).collect();
        for _ in 0..500 {
            for enemy in &mut enemies {
                enemy.advance(&board, &mut rng);
                assert!(board.contains(enemy.position()));
            }
        }
    }
}
