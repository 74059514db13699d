//! Word search letter grids

use rand::Rng;

use crate::collections::grid::DIRECTIONS;
use crate::collections::Grid;
use crate::puzzle::generate::placement::{sort_longest_first, try_place};
use crate::puzzle::Difficulty;
use crate::words;

/// A word search: a fully lettered grid and the words hidden in it
///
/// The word list is the authoritative solution; players submit found words,
/// not cell fills, so no separate solution grid exists.
#[derive(Clone, Debug, PartialEq)]
pub struct WordSearchPuzzle {
    grid: Grid<char>,
    words: Vec<String>,
}

impl WordSearchPuzzle {
    pub fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    /// The words actually placed, which may be fewer than requested
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn size(&self) -> usize {
        self.grid.width()
    }

    /// True if `word` reads contiguously from some cell in one of the eight
    /// directions
    pub fn contains(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return false;
        }
        self.grid.iter_coord().any(|(start, _)| {
            DIRECTIONS.iter().any(|&direction| {
                letters.iter().enumerate().all(|(i, &letter)| {
                    start
                        .step(direction, i)
                        .and_then(|coord| self.grid.get(coord))
                        == Some(&letter)
                })
            })
        })
    }
}

pub(crate) fn generate<R: Rng + ?Sized>(
    source: &[String],
    difficulty: Difficulty,
    rng: &mut R,
) -> WordSearchPuzzle {
    let size = grid_size(difficulty);
    let mut picked: Vec<String> =
        words::sample_indices(rng, source.len(), word_count(difficulty))
            .into_iter()
            .map(|i| source[i].clone())
            .collect();
    sort_longest_first(&mut picked);
    let mut letters: Grid<Option<char>> = Grid::with_size(size, size);
    let mut placed = Vec::with_capacity(picked.len());
    for word in &picked {
        if try_place(&mut letters, word, &DIRECTIONS, false, rng).is_some() {
            placed.push(word.clone());
        }
    }
    WordSearchPuzzle {
        grid: fill_decoys(&letters, rng),
        words: placed,
    }
}

pub(crate) fn grid_size(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 10,
        Difficulty::Medium => 15,
        Difficulty::Hard => 20,
    }
}

pub(crate) fn word_count(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 5,
        Difficulty::Medium => 8,
        Difficulty::Hard => 12,
    }
}

/// Every cell no word covers gets a uniformly random uppercase letter,
/// hiding word boundaries from the player.
fn fill_decoys<R: Rng + ?Sized>(letters: &Grid<Option<char>>, rng: &mut R) -> Grid<char> {
    let mut grid = Grid::with_size_and_value(letters.width(), letters.height(), 'A');
    for (coord, cell) in letters.iter_coord() {
        grid[coord] = match cell {
            Some(letter) => *letter,
            None => random_letter(rng),
        };
    }
    grid
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    (b'A' + rng.gen_range(0u8, 26)) as char
}
