//! Crossword grids with numbered clues

use linked_hash_map::LinkedHashMap;
use rand::Rng;
use vec_map::VecMap;

use crate::collections::grid::{Axis, Coord, AXES};
use crate::collections::Grid;
use crate::puzzle::generate::placement::{sort_longest_first, try_place};
use crate::puzzle::Difficulty;
use crate::words::{self, WordClue};

/// Player-facing rendering of a cell no word covers
pub const BLOCKED: char = '#';

/// One cell of a crossword grid
///
/// `letter` is `None` when no word covers the cell; such cells render as
/// [`BLOCKED`] and are disabled for input. `number` marks the cell where a
/// numbered clue's word starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrosswordCell {
    pub letter: Option<char>,
    pub number: Option<u32>,
}

/// A placed answer: where the word starts, how it reads, and its letters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedClue {
    pub coord: Coord,
    pub axis: Axis,
    pub word: String,
}

impl PlacedClue {
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Clue text keyed by clue number, split by axis, in placement order
///
/// Numbers are assigned per placed word, so a number appears in exactly one
/// of the two maps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Clues {
    across: LinkedHashMap<u32, String>,
    down: LinkedHashMap<u32, String>,
}

impl Clues {
    pub fn across(&self) -> impl Iterator<Item = (u32, &str)> {
        self.across.iter().map(|(&n, clue)| (n, clue.as_str()))
    }

    pub fn down(&self) -> impl Iterator<Item = (u32, &str)> {
        self.down.iter().map(|(&n, clue)| (n, clue.as_str()))
    }

    pub fn get(&self, axis: Axis, number: u32) -> Option<&str> {
        self.map(axis).get(&number).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }

    fn map(&self, axis: Axis) -> &LinkedHashMap<u32, String> {
        match axis {
            Axis::Across => &self.across,
            Axis::Down => &self.down,
        }
    }

    fn insert(&mut self, axis: Axis, number: u32, clue: String) {
        let map = match axis {
            Axis::Across => &mut self.across,
            Axis::Down => &mut self.down,
        };
        map.insert(number, clue);
    }
}

/// A crossword: cell grid, clue maps, and the placed answers
///
/// The letter content of the grid is the authoritative solution; the
/// player-facing rendering hides letters and marks uncovered cells blocked.
#[derive(Clone, Debug, PartialEq)]
pub struct CrosswordPuzzle {
    grid: Grid<CrosswordCell>,
    clues: Clues,
    placements: VecMap<PlacedClue>,
}

impl CrosswordPuzzle {
    pub fn grid(&self) -> &Grid<CrosswordCell> {
        &self.grid
    }

    pub fn clues(&self) -> &Clues {
        &self.clues
    }

    /// Placed answers keyed by clue number
    pub fn placements(&self) -> impl Iterator<Item = (u32, &PlacedClue)> {
        self.placements.iter().map(|(n, p)| (n as u32, p))
    }

    pub fn size(&self) -> usize {
        self.grid.width()
    }

    /// The letter grid consulted by validation and hinting; `None` marks
    /// cells no word covers
    pub fn solution(&self) -> Grid<Option<char>> {
        let mut letters = Grid::with_size(self.grid.width(), self.grid.height());
        for (coord, cell) in self.grid.iter_coord() {
            letters[coord] = cell.letter;
        }
        letters
    }

    /// The solved character matrix, with [`BLOCKED`] for uncovered cells
    pub fn rendered(&self) -> Grid<char> {
        self.char_grid(|cell| cell.letter)
    }

    /// The untrusted-channel rendering: open cells blanked, letters hidden
    pub fn player_grid(&self) -> Grid<char> {
        self.char_grid(|cell| cell.letter.map(|_| '.'))
    }

    fn char_grid(&self, f: impl Fn(&CrosswordCell) -> Option<char>) -> Grid<char> {
        let mut grid =
            Grid::with_size_and_value(self.grid.width(), self.grid.height(), BLOCKED);
        for (coord, cell) in self.grid.iter_coord() {
            if let Some(c) = f(cell) {
                grid[coord] = c;
            }
        }
        grid
    }
}

pub(crate) fn generate<R: Rng + ?Sized>(
    source: &[WordClue],
    difficulty: Difficulty,
    rng: &mut R,
) -> CrosswordPuzzle {
    let size = grid_size(difficulty);
    let mut picked: Vec<WordClue> =
        words::sample_indices(rng, source.len(), word_count(difficulty))
            .into_iter()
            .map(|i| source[i].clone())
            .collect();
    sort_longest_first(&mut picked);
    let mut letters: Grid<Option<char>> = Grid::with_size(size, size);
    let mut clues = Clues::default();
    let mut placements = VecMap::new();
    let mut number = 0;
    for entry in &picked {
        let placed = match try_place(&mut letters, &entry.word, &AXES, true, rng) {
            Some(placed) => placed,
            None => continue,
        };
        let axis = Axis::from_direction(placed.direction).unwrap();
        number += 1;
        clues.insert(axis, number, entry.clue.clone());
        placements.insert(
            number as usize,
            PlacedClue {
                coord: placed.start,
                axis,
                word: entry.word.clone(),
            },
        );
    }
    let mut grid: Grid<CrosswordCell> = Grid::with_size(size, size);
    for (coord, letter) in letters.iter_coord() {
        grid[coord].letter = *letter;
    }
    // one fresh number per placed word; when an across and a down answer
    // share a start cell the later number wins on that cell
    for (number, placed) in &placements {
        grid[placed.coord].number = Some(number as u32);
    }
    CrosswordPuzzle {
        grid,
        clues,
        placements,
    }
}

pub(crate) fn grid_size(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 8,
        Difficulty::Medium => 10,
        Difficulty::Hard => 12,
    }
}

pub(crate) fn word_count(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 4,
        Difficulty::Medium => 6,
        Difficulty::Hard => 8,
    }
}
