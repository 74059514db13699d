//! The daily challenge: one medium puzzle of each family, generated together
//!
//! Scheduling and storage of the bundle belong to the persistence
//! collaborator; this module only builds the three puzzles.

use rand::RngCore;

use crate::puzzle::{generate, Difficulty, Puzzle, PuzzleKind};

pub const DAILY_DIFFICULTY: Difficulty = Difficulty::Medium;

#[derive(Debug)]
pub struct DailyChallenge {
    number: Puzzle,
    word_search: Puzzle,
    crossword: Puzzle,
}

impl DailyChallenge {
    pub fn generate(rng: &mut dyn RngCore) -> Self {
        Self {
            number: generate(PuzzleKind::Number, DAILY_DIFFICULTY, rng),
            word_search: generate(PuzzleKind::WordSearch, DAILY_DIFFICULTY, rng),
            crossword: generate(PuzzleKind::Crossword, DAILY_DIFFICULTY, rng),
        }
    }

    pub fn number(&self) -> &Puzzle {
        &self.number
    }

    pub fn word_search(&self) -> &Puzzle {
        &self.word_search
    }

    pub fn crossword(&self) -> &Puzzle {
        &self.crossword
    }

    pub fn puzzles(&self) -> impl Iterator<Item = &Puzzle> {
        vec![&self.number, &self.word_search, &self.crossword].into_iter()
    }

    pub fn into_puzzles(self) -> Vec<Puzzle> {
        vec![self.number, self.word_search, self.crossword]
    }
}
