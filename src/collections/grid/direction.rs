//! Unit step vectors for walking lines of cells

use std::fmt;
use std::fmt::{Debug, Display};

/// A unit step `(row, col)` applied repeatedly to read or write a word
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    row_step: isize,
    col_step: isize,
}

impl Direction {
    pub const fn new(row_step: isize, col_step: isize) -> Self {
        Self { row_step, col_step }
    }

    pub fn row_step(self) -> isize {
        self.row_step
    }

    pub fn col_step(self) -> isize {
        self.col_step
    }

    pub fn reversed(self) -> Self {
        Self::new(-self.row_step, -self.col_step)
    }
}

impl Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.row_step, self.col_step)
    }
}

/// The eight unit directions, as used by word search placement
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(0, 1),
    Direction::new(1, 0),
    Direction::new(1, 1),
    Direction::new(-1, 1),
    Direction::new(0, -1),
    Direction::new(-1, 0),
    Direction::new(-1, -1),
    Direction::new(1, -1),
];

/// The two axis directions, as used by crossword placement
pub const AXES: [Direction; 2] = [Direction::new(0, 1), Direction::new(1, 0)];

/// Orientation of a crossword word
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    Across,
    Down,
}

impl Axis {
    /// The unit direction a word reads along
    pub fn direction(self) -> Direction {
        match self {
            Axis::Across => Direction::new(0, 1),
            Axis::Down => Direction::new(1, 0),
        }
    }

    /// Classifies an axis direction, `None` for diagonals and reversals
    pub fn from_direction(direction: Direction) -> Option<Self> {
        match (direction.row_step(), direction.col_step()) {
            (0, 1) => Some(Axis::Across),
            (1, 0) => Some(Axis::Down),
            _ => None,
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Axis::Across => "across",
            Axis::Down => "down",
        };
        write!(f, "{}", label)
    }
}
