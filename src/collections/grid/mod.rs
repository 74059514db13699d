mod coord;
mod direction;

pub use self::coord::Coord;
pub use self::direction::{Axis, Direction, AXES, DIRECTIONS};

use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

/// A container of elements arranged in a rectangular grid
///
/// Dimensions are fixed at construction; cells may be reassigned in place but
/// the grid never grows or shrinks. Access by [`Coord`] is bounds-checked:
/// [`get`](Grid::get) returns `None` past an edge, while indexing panics,
/// since an out-of-bounds index is a defect in the caller rather than a
/// recoverable condition.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    elements: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid of the given dimensions filled with the default value
    pub fn with_size(width: usize, height: usize) -> Self
    where
        T: Clone + Default,
    {
        Self::with_size_and_value(width, height, Default::default())
    }

    /// Creates a grid of the given dimensions filled with a specified value
    pub fn with_size_and_value(width: usize, height: usize, val: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            elements: vec![val; width * height],
        }
    }

    /// Returns the number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn same_size_as<U>(&self, other: &Grid<U>) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row() < self.height && coord.col() < self.width
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.contains(coord) {
            Some(&self.elements[self.index_of(coord)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        if self.contains(coord) {
            let index = self.index_of(coord);
            Some(&mut self.elements[index])
        } else {
            None
        }
    }

    /// Returns an iterator over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.elements.chunks(self.width)
    }

    /// Returns a mutable iterator over the rows of the grid
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.elements.chunks_mut(self.width)
    }

    /// Returns an iterator over every element, paired with its `Coord`,
    /// in row-major order
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width;
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (Coord::new(i / width, i % width), e))
    }

    fn index_of(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "coordinate {:?} out of bounds for {}x{} grid",
            coord,
            self.height,
            self.width,
        );
        coord.row() * self.width + coord.col()
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.elements[self.index_of(coord)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let index = self.index_of(coord);
        &mut self.elements[index]
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, element) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", element)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(PartialEq)]
pub struct RaggedRows {
    expected: usize,
    found: usize,
}

impl Debug for RaggedRows {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Row of length {} in a grid of width {}",
            self.found, self.expected
        )
    }
}

impl<T> std::convert::TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = RaggedRows;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let mut elements = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != width {
                return Err(RaggedRows {
                    expected: width,
                    found: row.len(),
                });
            }
            elements.extend(row);
        }
        Ok(Self {
            width,
            height,
            elements,
        })
    }
}
