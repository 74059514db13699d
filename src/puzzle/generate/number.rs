//! Latin-square number puzzles

use rand::seq::SliceRandom;
use rand::Rng;

use crate::collections::grid::Coord;
use crate::collections::Grid;
use crate::puzzle::{Difficulty, Value};

/// Blank cell marker in the player-facing grid
pub const BLANK: Value = 0;

/// A number puzzle: a player grid with blanked cells and the full solution
#[derive(Clone, Debug, PartialEq)]
pub struct NumberPuzzle {
    grid: Grid<Value>,
    solution: Grid<Value>,
}

impl NumberPuzzle {
    /// The player-facing grid, with [`BLANK`] where the player must fill in
    pub fn grid(&self) -> &Grid<Value> {
        &self.grid
    }

    /// The complete solution the puzzle was derived from
    pub fn solution(&self) -> &Grid<Value> {
        &self.solution
    }

    pub fn size(&self) -> usize {
        self.grid.width()
    }
}

pub(crate) fn generate<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> NumberPuzzle {
    let size = grid_size(difficulty);
    let solution = random_latin_square(size, rng);
    let mut grid = solution.clone();
    remove_cells(&mut grid, blank_quota(size, difficulty), rng);
    NumberPuzzle { grid, solution }
}

pub(crate) fn grid_size(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 4,
        Difficulty::Medium => 6,
        Difficulty::Hard => 9,
    }
}

/// `floor(n^2 * ratio)` cells are blanked, ratio scaling with difficulty
pub(crate) fn blank_quota(size: usize, difficulty: Difficulty) -> usize {
    let ratio = match difficulty {
        Difficulty::Easy => 0.3,
        Difficulty::Medium => 0.5,
        Difficulty::Hard => 0.7,
    };
    ((size * size) as f64 * ratio) as usize
}

/// Builds a uniformly shuffled pair of seed permutations and derives every
/// cell as `(row_seed[i] + col_seed[j]) % n + 1`. Each symbol appears once
/// per row and once per column because both seeds are permutations.
fn random_latin_square<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Grid<Value> {
    let row_seed = shuffled_symbols(size, rng);
    let col_seed = shuffled_symbols(size, rng);
    let mut square = Grid::with_size_and_value(size, size, BLANK);
    for (i, row) in square.rows_mut().enumerate() {
        for (j, element) in row.iter_mut().enumerate() {
            *element = (row_seed[i] + col_seed[j]) % size as Value + 1;
        }
    }
    square
}

fn shuffled_symbols<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<Value> {
    let mut symbols: Vec<Value> = (0..size as Value).collect();
    symbols.shuffle(rng);
    symbols
}

fn remove_cells<R: Rng + ?Sized>(grid: &mut Grid<Value>, count: usize, rng: &mut R) {
    for _ in 0..count {
        loop {
            let coord = Coord::new(
                rng.gen_range(0, grid.height()),
                rng.gen_range(0, grid.width()),
            );
            if grid[coord] != BLANK {
                grid[coord] = BLANK;
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::validate::is_latin_square;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn solutions_are_latin_squares() {
        let mut rng = StdRng::seed_from_u64(11);
        for &difficulty in &Difficulty::ALL {
            for _ in 0..20 {
                let puzzle = generate(difficulty, &mut rng);
                assert!(is_latin_square(puzzle.solution()));
            }
        }
    }

    #[test]
    fn blank_count_matches_the_difficulty_quota() {
        let mut rng = StdRng::seed_from_u64(12);
        for (&difficulty, &expected) in Difficulty::ALL.iter().zip(&[4, 18, 56]) {
            let puzzle = generate(difficulty, &mut rng);
            let blanks = puzzle
                .grid()
                .iter_coord()
                .filter(|(_, &value)| value == BLANK)
                .count();
            assert_eq!(expected, blanks);
        }
    }

    #[test]
    fn filled_cells_agree_with_the_solution() {
        let mut rng = StdRng::seed_from_u64(13);
        let puzzle = generate(Difficulty::Medium, &mut rng);
        for (coord, &value) in puzzle.grid().iter_coord() {
            if value != BLANK {
                assert_eq!(puzzle.solution()[coord], value);
            }
        }
    }
}
