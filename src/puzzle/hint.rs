//! Single-cell hints derived from the stored solution
//!
//! A hint is the first place (in row-major order) where the player's
//! submission diverges from the solution. Word search has no per-cell state,
//! so its hint is a two-letter prefix of a word not yet found.

use ahash::AHashSet;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::collections::grid::Coord;
use crate::collections::Grid;
use crate::puzzle::error::InvalidInput;
use crate::puzzle::validate::check_same_size;
use crate::puzzle::Value;

/// How many letters of an unfound word a word search hint reveals
const PREFIX_LEN: usize = 2;

/// A nudge toward the next correct move, never the whole solution
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hint {
    /// The correct value for the first wrong or unfilled number cell
    Cell { coord: Coord, value: Value },
    /// The correct letter for the first wrong or unfilled crossword cell
    Letter { coord: Coord, letter: char },
    /// The first letters of an unfound word, location undisclosed
    WordPrefix(String),
}

/// First divergence from the number solution, `None` when the candidate
/// already matches
pub fn number_hint(
    solution: &Grid<Value>,
    candidate: &Grid<Value>,
) -> Result<Option<Hint>, InvalidInput> {
    check_same_size(solution, candidate)?;
    for (coord, &value) in solution.iter_coord() {
        if candidate[coord] != value {
            return Ok(Some(Hint::Cell { coord, value }));
        }
    }
    Ok(None)
}

/// First divergence over the letter cells; cells no word covers are skipped
pub fn crossword_hint(
    solution: &Grid<Option<char>>,
    candidate: &Grid<Option<char>>,
) -> Result<Option<Hint>, InvalidInput> {
    check_same_size(solution, candidate)?;
    for (coord, cell) in solution.iter_coord() {
        if let Some(letter) = *cell {
            if candidate[coord] != Some(letter) {
                return Ok(Some(Hint::Letter { coord, letter }));
            }
        }
    }
    Ok(None)
}

/// Reveals the first two letters of a uniformly random word the player has
/// not found yet, `None` once every word is found
pub fn word_search_hint<R: Rng + ?Sized>(
    words: &[String],
    found: &[String],
    rng: &mut R,
) -> Option<Hint> {
    let found: AHashSet<&str> = found.iter().map(String::as_str).collect();
    let unfound: Vec<&String> = words
        .iter()
        .filter(|word| !found.contains(word.as_str()))
        .collect();
    let word = unfound.choose(rng)?;
    Some(Hint::WordPrefix(word.chars().take(PREFIX_LEN).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::convert::TryFrom;

    #[test]
    fn number_hint_reveals_the_first_divergence() {
        let solution = Grid::try_from(vec![vec![1, 2], vec![2, 1]]).unwrap();
        let mut candidate = solution.clone();
        candidate[Coord::new(0, 1)] = 0;
        candidate[Coord::new(1, 0)] = 9;
        assert_eq!(
            Some(Hint::Cell {
                coord: Coord::new(0, 1),
                value: 2
            }),
            number_hint(&solution, &candidate).unwrap()
        );
    }

    #[test]
    fn matching_candidate_has_no_hint() {
        let solution = Grid::try_from(vec![vec![1, 2], vec![2, 1]]).unwrap();
        assert_eq!(None, number_hint(&solution, &solution).unwrap());
    }

    #[test]
    fn crossword_hint_skips_blocked_cells() {
        let solution =
            Grid::try_from(vec![vec![None, Some('A')], vec![Some('B'), None]]).unwrap();
        // empty candidate: the blocked (0, 0) cell is skipped
        let candidate: Grid<Option<char>> = Grid::with_size(2, 2);
        assert_eq!(
            Some(Hint::Letter {
                coord: Coord::new(0, 1),
                letter: 'A'
            }),
            crossword_hint(&solution, &candidate).unwrap()
        );
    }

    #[test]
    fn crossword_hint_is_none_when_all_letters_match() {
        let solution =
            Grid::try_from(vec![vec![None, Some('A')], vec![Some('B'), None]]).unwrap();
        assert_eq!(None, crossword_hint(&solution, &solution).unwrap());
    }

    #[test]
    fn dimension_mismatch_is_invalid_input() {
        let solution = Grid::try_from(vec![vec![1, 2], vec![2, 1]]).unwrap();
        let candidate = Grid::try_from(vec![vec![1]]).unwrap();
        assert!(number_hint(&solution, &candidate).is_err());
    }

    #[test]
    fn word_search_hint_is_a_prefix_of_an_unfound_word() {
        let words = vec!["PUZZLE".to_string(), "GAME".to_string()];
        let found = vec!["GAME".to_string()];
        let mut rng = StdRng::seed_from_u64(41);
        assert_eq!(
            Some(Hint::WordPrefix("PU".to_string())),
            word_search_hint(&words, &found, &mut rng)
        );
    }

    #[test]
    fn word_search_hint_is_none_when_all_words_are_found() {
        let words = vec!["PUZZLE".to_string(), "GAME".to_string()];
        let mut found = words.clone();
        found.reverse();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(None, word_search_hint(&words, &found, &mut rng));
    }
}
