use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::ArgMatches;
use puzzlegen::puzzle::{Difficulty, PuzzleKind};

const DEFAULT_PATH: &str = "output";

#[derive(Clone)]
pub(crate) struct Options {
    source: Source,
    seed: Option<u64>,
    show_solution: bool,
    save_puzzle: bool,
    output_path: Option<PathBuf>,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let source = if matches.is_present("daily") {
            Source::Daily
        } else {
            Source::Single {
                kind: matches
                    .value_of("type")
                    .expect("type is required")
                    .parse::<PuzzleKind>()
                    .expect("invalid puzzle type"),
                difficulty: matches
                    .value_of("difficulty")
                    .unwrap()
                    .parse::<Difficulty>()
                    .expect("invalid difficulty"),
                count: matches
                    .value_of("count")
                    .map_or(1, |s| s.parse::<u32>().expect("invalid count")),
            }
        };
        let mut options = Self {
            source,
            seed: matches
                .value_of("seed")
                .map(|s| s.parse::<u64>().expect("invalid seed")),
            show_solution: matches.is_present("solution"),
            save_puzzle: matches.is_present("save_puzzle"),
            output_path: None,
        };
        if options.save_puzzle {
            options.output_path = Some(matches.value_of("output_path").unwrap().into());
        } else if matches.occurrences_of("output_path") != 0 {
            return Err(anyhow!("output path specified but nothing to save"));
        }
        Ok(options)
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn show_solution(&self) -> bool {
        self.show_solution
    }

    pub fn save_puzzle(&self) -> bool {
        self.save_puzzle
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }
}

#[derive(Clone)]
pub(crate) enum Source {
    Single {
        kind: PuzzleKind,
        difficulty: Difficulty,
        count: u32,
    },
    Daily,
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg};

    App::new("Puzzlegen")
        .about("Generate number, word search, and crossword puzzles")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("type")
                .short("t")
                .long("type")
                .takes_value(true)
                .value_name("TYPE")
                .possible_values(&["number", "wordsearch", "crossword"])
                .required_unless("daily")
                .help("the puzzle family to generate")
                .display_order(1),
        )
        .arg(
            Arg::with_name("difficulty")
                .short("d")
                .long("difficulty")
                .takes_value(true)
                .value_name("LEVEL")
                .possible_values(&["easy", "medium", "hard"])
                .default_value("medium")
                .help("difficulty level")
                .display_order(2),
        )
        .arg(
            Arg::with_name("count")
                .short("c")
                .long("count")
                .takes_value(true)
                .conflicts_with("daily")
                .help("the number of puzzles to generate"),
        )
        .arg(
            Arg::with_name("daily")
                .long("daily")
                .conflicts_with("type")
                .help("generate the daily challenge bundle instead of a single type"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("seed the random generator for reproducible output"),
        )
        .arg(
            Arg::with_name("solution")
                .short("s")
                .long("solution")
                .help("print the solution with each puzzle"),
        )
        .arg(
            Arg::with_name("save_puzzle")
                .long("save-puzzle")
                .help("save each puzzle to a folder"),
        )
        .arg(
            Arg::with_name("output_path")
                .long("output-path")
                .short("o")
                .takes_value(true)
                .help("directory to save puzzles")
                .default_value(DEFAULT_PATH),
        )
}
