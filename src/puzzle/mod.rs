//! Puzzle generation, validation, and hinting

pub use self::error::InvalidInput;
pub use self::generate::{
    Clues, CrosswordCell, CrosswordPuzzle, GeneratePuzzle, NumberPuzzle, PlacedClue,
    PuzzleGenerator, WordSearchPuzzle, BLANK, BLOCKED,
};
pub use self::hint::Hint;

pub mod daily;
pub mod error;
pub mod generate;
pub mod hint;
pub mod validate;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::debug;
use rand::RngCore;

use crate::collections::grid::Coord;
use crate::collections::Grid;

/// Cell value in a number puzzle
pub type Value = i32;

/// Scales grid size, word count, and blank ratio per puzzle family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Difficulty {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(InvalidInput::new(format!("unknown difficulty {:?}", s))),
        }
    }
}

/// The three puzzle families
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PuzzleKind {
    Number,
    WordSearch,
    Crossword,
}

impl Display for PuzzleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            PuzzleKind::Number => "number",
            PuzzleKind::WordSearch => "wordsearch",
            PuzzleKind::Crossword => "crossword",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PuzzleKind {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(PuzzleKind::Number),
            "wordsearch" => Ok(PuzzleKind::WordSearch),
            "crossword" => Ok(PuzzleKind::Crossword),
            _ => Err(InvalidInput::new(format!("unknown puzzle type {:?}", s))),
        }
    }
}

/// A generated puzzle: player-facing grid plus the retained solution
///
/// The engine returns `id: None`; the persistence collaborator assigns an id
/// when it stores the record, and is responsible for keeping the solution off
/// the untrusted channel.
#[derive(Debug)]
pub struct Puzzle {
    id: Option<String>,
    difficulty: Difficulty,
    data: PuzzleData,
}

impl Puzzle {
    pub fn new(difficulty: Difficulty, data: PuzzleData) -> Self {
        Self {
            id: None,
            difficulty,
            data,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn kind(&self) -> PuzzleKind {
        self.data.kind()
    }

    pub fn data(&self) -> &PuzzleData {
        &self.data
    }
}

/// Family-specific puzzle content
#[derive(Debug)]
pub enum PuzzleData {
    Number(NumberPuzzle),
    WordSearch(WordSearchPuzzle),
    Crossword(CrosswordPuzzle),
}

impl PuzzleData {
    pub fn kind(&self) -> PuzzleKind {
        match self {
            PuzzleData::Number(_) => PuzzleKind::Number,
            PuzzleData::WordSearch(_) => PuzzleKind::WordSearch,
            PuzzleData::Crossword(_) => PuzzleKind::Crossword,
        }
    }
}

/// A player's submission, shaped per puzzle family
///
/// Number and crossword players submit full grids; word search players
/// submit the set of words they found.
#[derive(Clone, Debug)]
pub enum Candidate {
    Number(Grid<Value>),
    Crossword(Grid<Option<char>>),
    FoundWords(Vec<String>),
}

/// Builds a puzzle of the given family and difficulty
pub fn generate(kind: PuzzleKind, difficulty: Difficulty, rng: &mut dyn RngCore) -> Puzzle {
    let data = PuzzleGenerator::for_kind(kind).generate(difficulty, rng);
    debug!("generated {} {} puzzle", difficulty, kind);
    Puzzle::new(difficulty, data)
}

/// Compares a grid-puzzle candidate against the stored solution, returning
/// every cell where they disagree. Word search has no cell-wise validation;
/// a mismatched candidate shape is invalid input.
pub fn validate(puzzle: &Puzzle, candidate: &Candidate) -> Result<Vec<Coord>, InvalidInput> {
    match (puzzle.data(), candidate) {
        (PuzzleData::Number(p), Candidate::Number(grid)) => {
            validate::grid_errors(p.solution(), grid)
        }
        (PuzzleData::Crossword(p), Candidate::Crossword(grid)) => {
            validate::grid_errors(&p.solution(), grid)
        }
        _ => Err(InvalidInput::new(format!(
            "candidate shape does not fit a {} puzzle",
            puzzle.kind()
        ))),
    }
}

/// The next correct cell, or a word prefix for word search; `None` when the
/// candidate already matches the solution
pub fn hint(
    puzzle: &Puzzle,
    candidate: &Candidate,
    rng: &mut dyn RngCore,
) -> Result<Option<Hint>, InvalidInput> {
    match (puzzle.data(), candidate) {
        (PuzzleData::Number(p), Candidate::Number(grid)) => hint::number_hint(p.solution(), grid),
        (PuzzleData::Crossword(p), Candidate::Crossword(grid)) => {
            hint::crossword_hint(&p.solution(), grid)
        }
        (PuzzleData::WordSearch(p), Candidate::FoundWords(found)) => {
            Ok(hint::word_search_hint(p.words(), found, rng))
        }
        _ => Err(InvalidInput::new(format!(
            "candidate shape does not fit a {} puzzle",
            puzzle.kind()
        ))),
    }
}
