//! Curated word sources for the letter-grid puzzle families
//!
//! Both lists are fixed and uppercase; generators sample them without
//! replacement. A sampled word that cannot be placed is dropped by the
//! generator, so lists are larger than the largest per-difficulty count.

use once_cell::sync::Lazy;
use rand::Rng;

use crate::collections::LinkedAHashSet;

/// A word and its human-readable clue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordClue {
    pub word: String,
    pub clue: String,
}

impl AsRef<str> for WordClue {
    fn as_ref(&self) -> &str {
        &self.word
    }
}

/// Fixed word list for word search grids
pub static SEARCH_WORDS: &[&str] = &[
    "PUZZLE",
    "GAME",
    "CROSSWORD",
    "CHALLENGE",
    "CLUE",
    "WORD",
    "SEARCH",
    "FUN",
    "DAILY",
    "MASTER",
    "LETTER",
    "GRID",
    "SOLVE",
    "HINT",
    "SCORE",
    "BONUS",
    "TIMER",
    "STREAK",
    "BRAIN",
    "LOGIC",
    "RIDDLE",
    "ANSWER",
    "PLAYER",
    "LEVEL",
    "EXPERT",
    "NOVICE",
    "SECRET",
    "HIDDEN",
    "DIAGONAL",
    "REVERSE",
];

const RAW_CLUES: &[(&str, &str)] = &[
    ("PUZZLE", "A problem designed to test ingenuity"),
    ("GAME", "A structured form of play"),
    ("CROSSWORD", "Grid of intersecting answers"),
    ("CLUE", "What you are reading right now"),
    ("CHALLENGE", "A call to take part in a contest"),
    ("GRID", "Network of crossing lines"),
    ("LETTER", "One of twenty-six symbols"),
    ("HINT", "A small nudge toward the answer"),
    ("SCORE", "Points earned for a solve"),
    ("TIMER", "It keeps the pressure on"),
    ("BRAIN", "The organ doing the solving"),
    ("LOGIC", "Reasoning by strict rules"),
    ("RIDDLE", "A question framed to be puzzling"),
    ("ANSWER", "What every clue wants"),
    ("SOLVE", "Crack the case"),
    ("EXPERT", "Player at the hard level"),
];

/// Fixed word and clue list for crosswords
pub static CROSSWORD_CLUES: Lazy<Vec<WordClue>> = Lazy::new(|| {
    RAW_CLUES
        .iter()
        .map(|&(word, clue)| WordClue {
            word: word.into(),
            clue: clue.into(),
        })
        .collect()
});

/// Picks `count` distinct indices into a list of length `len`, in pick order
pub(crate) fn sample_indices<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    count: usize,
) -> Vec<usize> {
    let count = count.min(len);
    let mut picked = LinkedAHashSet::default();
    while picked.len() < count {
        picked.insert(rng.gen_range(0, len));
    }
    picked.into_iter().collect()
}
