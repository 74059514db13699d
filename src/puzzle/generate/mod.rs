//! Puzzle generation
//!
//! One canonical generator per puzzle family behind a common dispatch enum.
//! Every generator takes an injected RNG so concurrent calls share no state
//! and tests can replay a seed.

pub mod crossword;
pub mod number;
mod placement;
pub mod word_search;

pub use self::crossword::{Clues, CrosswordCell, CrosswordPuzzle, PlacedClue, BLOCKED};
pub use self::number::{NumberPuzzle, BLANK};
pub use self::word_search::WordSearchPuzzle;

use enum_dispatch::enum_dispatch;
use rand::RngCore;

use crate::puzzle::{Difficulty, PuzzleData, PuzzleKind};
use crate::words::{WordClue, CROSSWORD_CLUES, SEARCH_WORDS};

/// Builds one puzzle per call; implementations own their word sources
#[enum_dispatch]
pub trait GeneratePuzzle {
    fn generate(&self, difficulty: Difficulty, rng: &mut dyn RngCore) -> PuzzleData;
}

/// The three puzzle families as one dispatchable type
#[enum_dispatch(GeneratePuzzle)]
pub enum PuzzleGenerator {
    NumberGenerator,
    WordSearchGenerator,
    CrosswordGenerator,
}

impl PuzzleGenerator {
    /// The generator for a puzzle family, with its curated word source
    pub fn for_kind(kind: PuzzleKind) -> Self {
        match kind {
            PuzzleKind::Number => NumberGenerator.into(),
            PuzzleKind::WordSearch => WordSearchGenerator::new().into(),
            PuzzleKind::Crossword => CrosswordGenerator::new().into(),
        }
    }
}

pub struct NumberGenerator;

impl GeneratePuzzle for NumberGenerator {
    fn generate(&self, difficulty: Difficulty, rng: &mut dyn RngCore) -> PuzzleData {
        PuzzleData::Number(number::generate(difficulty, rng))
    }
}

pub struct WordSearchGenerator {
    words: Vec<String>,
}

impl WordSearchGenerator {
    /// Samples from the curated word list
    pub fn new() -> Self {
        Self {
            words: SEARCH_WORDS.iter().map(|&w| w.to_string()).collect(),
        }
    }

    /// Samples from a caller-provided word list
    pub fn with_words(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl Default for WordSearchGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratePuzzle for WordSearchGenerator {
    fn generate(&self, difficulty: Difficulty, rng: &mut dyn RngCore) -> PuzzleData {
        PuzzleData::WordSearch(word_search::generate(&self.words, difficulty, rng))
    }
}

pub struct CrosswordGenerator {
    clues: Vec<WordClue>,
}

impl CrosswordGenerator {
    /// Samples from the curated word and clue list
    pub fn new() -> Self {
        Self {
            clues: CROSSWORD_CLUES.clone(),
        }
    }

    /// Samples from a caller-provided word and clue list
    pub fn with_clues(clues: Vec<WordClue>) -> Self {
        Self { clues }
    }
}

impl Default for CrosswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratePuzzle for CrosswordGenerator {
    fn generate(&self, difficulty: Difficulty, rng: &mut dyn RngCore) -> PuzzleData {
        PuzzleData::Crossword(crossword::generate(&self.clues, difficulty, rng))
    }
}
