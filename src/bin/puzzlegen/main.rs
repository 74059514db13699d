#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;

use puzzlegen::collections::Grid;
use puzzlegen::puzzle::daily::DailyChallenge;
use puzzlegen::puzzle::{self, Clues, Puzzle, PuzzleData, Value, BLANK};

use crate::options::{Options, Source};
use crate::puzzle_folder_builder::PuzzleFolderBuilder;

mod options;
mod puzzle_folder_builder;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let mut rng = match options.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let puzzles = match options.source() {
        &Source::Single {
            kind,
            difficulty,
            count,
        } => (0..count)
            .map(|_| puzzle::generate(kind, difficulty, &mut rng))
            .collect::<Vec<_>>(),
        Source::Daily => DailyChallenge::generate(&mut rng).into_puzzles(),
    };
    let mut next_index = 1;
    for (i, puzzle) in puzzles.iter().enumerate() {
        println!(
            "Puzzle {}/{}: {} ({})",
            i + 1,
            puzzles.len(),
            puzzle.kind(),
            puzzle.difficulty()
        );
        print!("{}", player_text(puzzle));
        if options.show_solution() {
            println!("Solution:");
            print!("{}", solution_text(puzzle));
        }
        if options.save_puzzle() {
            let output = options.output_path().unwrap();
            let path = save_puzzle(puzzle, output, &mut next_index)?;
            println!("Saved puzzle to {}", path.display());
        }
    }
    Ok(())
}

fn save_puzzle(puzzle: &Puzzle, output: &Path, next_index: &mut u32) -> Result<PathBuf> {
    fs::create_dir_all(output)?;
    let folder_builder = PuzzleFolderBuilder::new()?;
    folder_builder.write_puzzle(&player_text(puzzle))?;
    folder_builder.write_solution(&solution_text(puzzle))?;
    let path = next_puzzle_path(output, next_index);
    folder_builder.save(&path)?;
    Ok(path)
}

fn next_puzzle_path(output: &Path, next_index: &mut u32) -> PathBuf {
    loop {
        let path = output.join(format!("puzzle_{}", next_index));
        *next_index += 1;
        if !path.exists() {
            return path;
        }
    }
}

fn player_text(puzzle: &Puzzle) -> String {
    match puzzle.data() {
        PuzzleData::Number(p) => number_grid_text(p.grid()),
        PuzzleData::WordSearch(p) => format!(
            "{}find: {}\n",
            p.grid(),
            p.words().iter().join(", ")
        ),
        PuzzleData::Crossword(p) => {
            format!("{}{}", p.player_grid(), clues_text(p.clues()))
        }
    }
}

fn solution_text(puzzle: &Puzzle) -> String {
    match puzzle.data() {
        PuzzleData::Number(p) => number_grid_text(p.solution()),
        PuzzleData::WordSearch(p) => format!("{}\n", p.words().iter().join(", ")),
        PuzzleData::Crossword(p) => p.rendered().to_string(),
    }
}

fn number_grid_text(grid: &Grid<Value>) -> String {
    let mut text = String::new();
    for row in grid.rows() {
        let line = row
            .iter()
            .map(|&value| {
                if value == BLANK {
                    ".".to_string()
                } else {
                    value.to_string()
                }
            })
            .join(" ");
        text.push_str(&line);
        text.push('\n');
    }
    text
}

fn clues_text(clues: &Clues) -> String {
    let mut text = String::new();
    for (number, clue) in clues.across() {
        text.push_str(&format!("{:>2} across: {}\n", number, clue));
    }
    for (number, clue) in clues.down() {
        text.push_str(&format!("{:>2} down: {}\n", number, clue));
    }
    text
}
