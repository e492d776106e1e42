use rand::Rng;

/// A cell on the playfield, in pixels. Always a multiple of the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step away in `direction`.
    pub fn stepped(self, direction: Direction, cell_size: i16) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Direction {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Playfield size in pixels plus the cell size everything snaps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i16,
    pub height: i16,
    pub cell_size: i16,
}

impl Board {
    pub const fn new(width: i16, height: i16, cell_size: i16) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn columns(&self) -> i16 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i16 {
        self.height / self.cell_size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Centre cell, snapped down to the grid.
    pub fn center(&self) -> Position {
        Position::new(
            self.columns() / 2 * self.cell_size,
            self.rows() / 2 * self.cell_size,
        )
    }

    /// A uniformly random in-bounds cell.
    pub fn random_cell(&self, rng: &mut impl Rng) -> Position {
        Position::new(
            rng.gen_range(0..self.columns()) * self.cell_size,
            rng.gen_range(0..self.rows()) * self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_opposite_directions() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_stepped_moves_one_cell() {
        let pos = Position::new(100, 100);
        assert_eq!(pos.stepped(Direction::Right, 20), Position::new(120, 100));
        assert_eq!(pos.stepped(Direction::Left, 20), Position::new(80, 100));
        assert_eq!(pos.stepped(Direction::Up, 20), Position::new(100, 80));
        assert_eq!(pos.stepped(Direction::Down, 20), Position::new(100, 120));
    }

    #[test]
    fn test_bounds() {
        let board = Board::new(800, 600, 20);
        assert!(board.contains(Position::new(0, 0)));
        assert!(board.contains(Position::new(780, 580)));
        assert!(!board.contains(Position::new(-20, 0)));
        assert!(!board.contains(Position::new(0, -20)));
        assert!(!board.contains(Position::new(800, 0)));
        assert!(!board.contains(Position::new(0, 600)));
    }

    #[test]
    fn test_center_is_grid_aligned() {
        assert_eq!(Board::new(800, 600, 20).center(), Position::new(400, 300));
        assert_eq!(Board::new(60, 60, 20).center(), Position::new(20, 20));
    }

    #[test]
    fn test_random_cells_are_in_bounds_and_aligned() {
        let board = Board::new(800, 600, 20);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let cell = board.random_cell(&mut rng);
            assert!(board.contains(cell));
            assert_eq!(cell.x % 20, 0);
            assert_eq!(cell.y % 20, 0);
        }
    }
}
