use std::collections::VecDeque;

use super::effects::Rainbow;
use super::grid::{Board, Direction, Position};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveFailure {
    SelfCollision,
    OutOfBounds,
}

/// The player's snake. Head is at the front of `body`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    pending_heading: Direction,
    growing: bool,
    /// Sprint multiplier for the current tick.
    pub speed_multiplier: f32,
    pub rainbow: Rainbow,
}

impl Snake {
    /// A one-cell snake at the centre of the board heading right.
    pub fn new(board: &Board) -> Self {
        Self::at(board.center(), Direction::Right)
    }

    pub fn at(head: Position, heading: Direction) -> Self {
        Self::from_segments(head, std::iter::empty(), heading)
    }

    /// Builds a snake from a head and the segments trailing it, nearest first.
    pub fn from_segments(
        head: Position,
        tail: impl IntoIterator<Item = Position>,
        heading: Direction,
    ) -> Self {
        let mut body = VecDeque::from([head]);
        body.extend(tail);
        Self {
            body,
            heading,
            pending_heading: heading,
            growing: false,
            speed_multiplier: 1.0,
            rainbow: Rainbow::Off,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_heading(&self) -> Direction {
        self.pending_heading
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    /// Queues a turn for the next move. Reversing onto the current heading is
    /// ignored and reported as `false`.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction == self.heading.opposite() {
            return false;
        }
        self.pending_heading = direction;
        true
    }

    /// Moves one cell along the pending heading.
    pub fn advance(&mut self, board: &Board) -> Result<(), MoveFailure> {
        self.heading = self.pending_heading;
        let new_head = self.head().stepped(self.heading, board.cell_size);

        if self.body.contains(&new_head) {
            return Err(MoveFailure::SelfCollision);
        }
        if !board.contains(new_head) {
            return Err(MoveFailure::OutOfBounds);
        }

        self.body.push_front(new_head);
        if self.growing {
            self.growing = false;
        } else {
            self.body.pop_back();
        }
        Ok(())
    }

    pub fn grow(&mut self) {
        self.growing = true;
    }

    pub fn shrink(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }

    pub fn toggle_rainbow(&mut self) {
        self.rainbow = self.rainbow.toggled();
    }

    pub fn reset(&mut self, board: &Board) {
        *self = Self::new(board);
    }
}
