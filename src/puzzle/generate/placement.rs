//! Randomized word placement shared by word search and crossword generation

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::collections::grid::{Coord, Direction};
use crate::collections::Grid;

/// Attempts per word before the word is dropped
pub(crate) const MAX_ATTEMPTS: u32 = 100;

/// A proposed anchor and orientation for laying a word into a grid
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlacementCandidate {
    pub start: Coord,
    pub direction: Direction,
}

/// A word committed to the grid
#[derive(Clone, Debug)]
pub(crate) struct PlacedWord {
    pub word: String,
    pub start: Coord,
    pub direction: Direction,
    pub len: usize,
}

/// Repeatedly proposes a random anchor and direction for `word`, committing
/// the first legal candidate.
///
/// Returns `None` once the attempt cap is reached; callers drop the word, so
/// a crowded grid degrades to fewer placed words rather than failing.
///
/// With `end_gaps`, the cells immediately before the word's start and after
/// its end along the placement direction must be empty or off-grid. Crossword
/// placement needs this so two words cannot run together end to end.
pub(crate) fn try_place<R: Rng + ?Sized>(
    grid: &mut Grid<Option<char>>,
    word: &str,
    directions: &[Direction],
    end_gaps: bool,
    rng: &mut R,
) -> Option<PlacedWord> {
    let letters: Vec<char> = word.chars().collect();
    for _ in 0..MAX_ATTEMPTS {
        let candidate = PlacementCandidate {
            start: Coord::new(
                rng.gen_range(0, grid.height()),
                rng.gen_range(0, grid.width()),
            ),
            direction: *directions.choose(rng).unwrap(),
        };
        if can_place(grid, &letters, candidate, end_gaps) {
            commit(grid, &letters, candidate);
            return Some(PlacedWord {
                word: word.to_string(),
                start: candidate.start,
                direction: candidate.direction,
                len: letters.len(),
            });
        }
    }
    debug!(
        "dropping {:?}: no legal placement in {} attempts",
        word, MAX_ATTEMPTS
    );
    None
}

/// Longest words first; they have the fewest legal placements, so placing
/// them into an emptier grid reduces later drops.
pub(crate) fn sort_longest_first(words: &mut [impl AsRef<str>]) {
    words.sort_by(|a, b| b.as_ref().len().cmp(&a.as_ref().len()));
}

fn can_place(
    grid: &Grid<Option<char>>,
    letters: &[char],
    candidate: PlacementCandidate,
    end_gaps: bool,
) -> bool {
    for (i, &letter) in letters.iter().enumerate() {
        let coord = match candidate.start.step(candidate.direction, i) {
            Some(coord) => coord,
            None => return false,
        };
        match grid.get(coord) {
            None => return false,
            Some(&Some(existing)) if existing != letter => return false,
            _ => {}
        }
    }
    if end_gaps {
        let before = candidate.start.step(candidate.direction.reversed(), 1);
        let after = candidate.start.step(candidate.direction, letters.len());
        for coord in before.into_iter().chain(after) {
            if let Some(Some(_)) = grid.get(coord) {
                return false;
            }
        }
    }
    true
}

fn commit(grid: &mut Grid<Option<char>>, letters: &[char], candidate: PlacementCandidate) {
    for (i, &letter) in letters.iter().enumerate() {
        let coord = candidate.start.step(candidate.direction, i).unwrap();
        grid[coord] = Some(letter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::grid::{AXES, DIRECTIONS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid_of(rows: &[&str]) -> Grid<Option<char>> {
        let mut grid = Grid::with_size(rows[0].len(), rows.len());
        for (i, row) in rows.iter().enumerate() {
            for (j, c) in row.chars().enumerate() {
                if c != '.' {
                    grid[Coord::new(i, j)] = Some(c);
                }
            }
        }
        grid
    }

    fn candidate(row: usize, col: usize, direction: Direction) -> PlacementCandidate {
        PlacementCandidate {
            start: Coord::new(row, col),
            direction,
        }
    }

    #[test]
    fn placement_writes_every_letter() {
        let mut grid = Grid::with_size(5, 5);
        let mut rng = StdRng::seed_from_u64(1);
        let placed = try_place(&mut grid, "CLUE", &DIRECTIONS, false, &mut rng).unwrap();
        for (i, letter) in "CLUE".chars().enumerate() {
            let coord = placed.start.step(placed.direction, i).unwrap();
            assert_eq!(Some(letter), grid[coord]);
        }
    }

    #[test]
    fn overlap_requires_matching_letters() {
        let grid = grid_of(&["..A..", ".....", ".....", ".....", "....."]);
        // "GAME" across row 0 from col 1 puts 'A' on the existing 'A'
        assert!(can_place(
            &grid,
            &['G', 'A', 'M', 'E'],
            candidate(0, 1, Direction::new(0, 1)),
            false,
        ));
        // shifted by one, 'G' would land on the 'A'
        assert!(!can_place(
            &grid,
            &['G', 'A', 'M', 'E'],
            candidate(0, 2, Direction::new(0, 1)),
            false,
        ));
    }

    #[test]
    fn placement_stays_in_bounds() {
        let grid: Grid<Option<char>> = Grid::with_size(4, 4);
        assert!(!can_place(
            &grid,
            &['W', 'O', 'R', 'D'],
            candidate(0, 1, Direction::new(0, 1)),
            false,
        ));
        assert!(!can_place(
            &grid,
            &['W', 'O', 'R', 'D'],
            candidate(2, 0, Direction::new(-1, 0)),
            false,
        ));
    }

    #[test]
    fn end_gaps_reject_touching_words() {
        let grid = grid_of(&[".....", "..X..", ".....", ".....", "....."]);
        // down word ending directly above the 'X'
        assert!(!can_place(
            &grid,
            &['G', 'O'],
            candidate(0, 2, Direction::new(1, 0)),
            true,
        ));
        // the same word is fine one column over
        assert!(can_place(
            &grid,
            &['G', 'O'],
            candidate(0, 3, Direction::new(1, 0)),
            true,
        ));
        // without the rule, word search accepts the touching placement
        assert!(can_place(
            &grid,
            &['G', 'O'],
            candidate(0, 2, Direction::new(1, 0)),
            false,
        ));
    }

    #[test]
    fn oversized_word_is_dropped_after_the_attempt_cap() {
        let mut grid = Grid::with_size(3, 3);
        let mut rng = StdRng::seed_from_u64(2);
        assert!(try_place(&mut grid, "TOOLONGTOFIT", &AXES, true, &mut rng).is_none());
        assert!(grid.iter_coord().all(|(_, cell)| cell.is_none()));
    }

    #[test]
    fn longest_first_ordering() {
        let mut words = vec!["GO", "PUZZLE", "GAME"];
        sort_longest_first(&mut words);
        assert_eq!(vec!["PUZZLE", "GAME", "GO"], words);
    }
}
