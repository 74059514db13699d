//! Candidate solution checks

use ahash::AHashSet;

use crate::collections::grid::Coord;
use crate::collections::Grid;
use crate::puzzle::error::InvalidInput;
use crate::puzzle::Value;

/// Compares a candidate against the stored solution cell by cell, returning
/// every coordinate where they disagree. An empty list means fully correct.
pub fn grid_errors<T: PartialEq>(
    solution: &Grid<T>,
    candidate: &Grid<T>,
) -> Result<Vec<Coord>, InvalidInput> {
    check_same_size(solution, candidate)?;
    let mut errors = Vec::new();
    for (coord, value) in solution.iter_coord() {
        if candidate[coord] != *value {
            errors.push(coord);
        }
    }
    Ok(errors)
}

/// Latin-square well-formedness of a number candidate: no blank cells and
/// every row and column a permutation of `1..=n`.
///
/// This accepts any structurally valid square, not just the stored solution;
/// an under-constrained puzzle may have alternate fills, and those count as
/// solved.
pub fn is_latin_square(candidate: &Grid<Value>) -> bool {
    let n = candidate.width();
    if candidate.height() != n {
        return false;
    }
    if candidate
        .iter_coord()
        .any(|(_, &value)| value < 1 || value > n as Value)
    {
        return false;
    }
    for i in 0..n {
        let mut row_seen: AHashSet<Value> = AHashSet::default();
        let mut col_seen: AHashSet<Value> = AHashSet::default();
        for j in 0..n {
            row_seen.insert(candidate[Coord::new(i, j)]);
            col_seen.insert(candidate[Coord::new(j, i)]);
        }
        if row_seen.len() != n || col_seen.len() != n {
            return false;
        }
    }
    true
}

/// The number puzzle validation contract: dimensions must match the stored
/// solution, then the candidate is checked for Latin-square form.
pub fn validate_number(
    solution: &Grid<Value>,
    candidate: &Grid<Value>,
) -> Result<bool, InvalidInput> {
    check_same_size(solution, candidate)?;
    Ok(is_latin_square(candidate))
}

pub(crate) fn check_same_size<T, U>(
    solution: &Grid<T>,
    candidate: &Grid<U>,
) -> Result<(), InvalidInput> {
    if solution.same_size_as(candidate) {
        Ok(())
    } else {
        Err(InvalidInput::dimension_mismatch(
            (solution.height(), solution.width()),
            (candidate.height(), candidate.width()),
        ))
    }
}
