use crate::collections::grid::Direction;
use std::fmt;
use std::fmt::Debug;

/// Coordinates of a cell in a [`Grid`](super::Grid), row first
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord([usize; 2]);

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self([row, col])
    }

    pub fn row(self) -> usize {
        self.0[0]
    }

    pub fn col(self) -> usize {
        self.0[1]
    }

    /// Walks `distance` unit steps along `direction`.
    ///
    /// Returns `None` if either coordinate would become negative. Steps past
    /// the far edge of a grid are not detected here; callers check with
    /// [`Grid::get`](super::Grid::get).
    pub fn step(self, direction: Direction, distance: usize) -> Option<Coord> {
        let row = self.row() as isize + direction.row_step() * distance as isize;
        let col = self.col() as isize + direction.col_step() * distance as isize;
        if row < 0 || col < 0 {
            return None;
        }
        Some(Coord::new(row as usize, col as usize))
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl From<[usize; 2]> for Coord {
    fn from(array: [usize; 2]) -> Self {
        Self(array)
    }
}
