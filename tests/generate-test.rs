use rand::rngs::StdRng;
use rand::SeedableRng;

use puzzlegen::collections::grid::Coord;
use puzzlegen::collections::Grid;
use puzzlegen::puzzle::validate::{is_latin_square, validate_number};
use puzzlegen::puzzle::{
    self, Candidate, Difficulty, Hint, Puzzle, PuzzleData, PuzzleKind, BLANK, BLOCKED,
};
use puzzlegen::score::score;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn number_data(puzzle: &Puzzle) -> &puzzlegen::puzzle::NumberPuzzle {
    match puzzle.data() {
        PuzzleData::Number(p) => p,
        _ => panic!("expected a number puzzle"),
    }
}

#[test]
fn number_puzzles_are_latin_squares_with_exact_blank_quotas() {
    let mut rng = seeded(101);
    let expectations = [
        (Difficulty::Easy, 4, 4),
        (Difficulty::Medium, 6, 18),
        (Difficulty::Hard, 9, 56),
    ];
    for &(difficulty, size, blanks) in &expectations {
        for _ in 0..10 {
            let puzzle = puzzle::generate(PuzzleKind::Number, difficulty, &mut rng);
            let p = number_data(&puzzle);
            assert_eq!(size, p.size());
            assert!(is_latin_square(p.solution()));
            let blank_count = p
                .grid()
                .iter_coord()
                .filter(|(_, &value)| value == BLANK)
                .count();
            assert_eq!(blanks, blank_count);
        }
    }
}

#[test]
fn word_search_grids_are_full_and_contain_their_words() {
    let mut rng = seeded(102);
    let sizes = [
        (Difficulty::Easy, 10, 5),
        (Difficulty::Medium, 15, 8),
        (Difficulty::Hard, 20, 12),
    ];
    for &(difficulty, size, requested) in &sizes {
        let puzzle = puzzle::generate(PuzzleKind::WordSearch, difficulty, &mut rng);
        let p = match puzzle.data() {
            PuzzleData::WordSearch(p) => p,
            _ => panic!("expected a word search"),
        };
        assert_eq!(size, p.size());
        assert!(!p.words().is_empty());
        assert!(p.words().len() <= requested);
        for word in p.words() {
            assert!(p.contains(word), "{} missing from grid", word);
        }
        for (_, &cell) in p.grid().iter_coord() {
            assert!(cell.is_ascii_uppercase());
        }
    }
}

#[test]
fn crossword_letter_cells_are_covered_by_numbered_answers() {
    let mut rng = seeded(103);
    for &difficulty in &Difficulty::ALL {
        let puzzle = puzzle::generate(PuzzleKind::Crossword, difficulty, &mut rng);
        let p = match puzzle.data() {
            PuzzleData::Crossword(p) => p,
            _ => panic!("expected a crossword"),
        };
        assert!(!p.clues().is_empty());
        let mut covered = Grid::with_size_and_value(p.size(), p.size(), false);
        for (number, placed) in p.placements() {
            assert!(number >= 1);
            let read: String = (0..placed.len())
                .map(|i| {
                    let coord = placed.coord.step(placed.axis.direction(), i).unwrap();
                    covered[coord] = true;
                    p.grid()[coord].letter.expect("answer crosses a blocked cell")
                })
                .collect();
            assert_eq!(placed.word, read);
        }
        let rendered = p.rendered();
        for (coord, cell) in p.grid().iter_coord() {
            assert_eq!(cell.letter.is_some(), covered[coord]);
            if cell.letter.is_none() {
                assert_eq!(BLOCKED, rendered[coord]);
            }
        }
    }
}

#[test]
fn validator_accepts_the_solution_and_pinpoints_one_alteration() {
    let mut rng = seeded(104);
    let puzzle = puzzle::generate(PuzzleKind::Number, Difficulty::Medium, &mut rng);
    let solution = number_data(&puzzle).solution().clone();
    assert!(puzzle::validate(&puzzle, &Candidate::Number(solution.clone()))
        .unwrap()
        .is_empty());

    let altered_at = Coord::new(2, 3);
    let mut altered = solution.clone();
    altered[altered_at] = if altered[altered_at] == 1 { 2 } else { 1 };
    assert_eq!(
        vec![altered_at],
        puzzle::validate(&puzzle, &Candidate::Number(altered)).unwrap()
    );

    assert!(validate_number(&solution, &solution).unwrap());
}

#[test]
fn validator_rejects_mismatched_dimensions() {
    let mut rng = seeded(105);
    let puzzle = puzzle::generate(PuzzleKind::Number, Difficulty::Easy, &mut rng);
    let too_small: Grid<i32> = Grid::with_size(2, 2);
    assert!(puzzle::validate(&puzzle, &Candidate::Number(too_small)).is_err());
}

#[test]
fn hint_reveals_exactly_the_diverging_cell() {
    let mut rng = seeded(106);
    let puzzle = puzzle::generate(PuzzleKind::Number, Difficulty::Easy, &mut rng);
    let solution = number_data(&puzzle).solution().clone();

    let wrong_at = Coord::new(3, 1);
    let correct = solution[wrong_at];
    let mut candidate = solution.clone();
    candidate[wrong_at] = BLANK;
    assert_eq!(
        Some(Hint::Cell {
            coord: wrong_at,
            value: correct
        }),
        puzzle::hint(&puzzle, &Candidate::Number(candidate), &mut rng).unwrap()
    );

    assert_eq!(
        None,
        puzzle::hint(&puzzle, &Candidate::Number(solution), &mut rng).unwrap()
    );
}

#[test]
fn word_search_hint_nudges_toward_the_missing_word() {
    let mut rng = seeded(107);
    let puzzle = puzzle::generate(PuzzleKind::WordSearch, Difficulty::Easy, &mut rng);
    let words = match puzzle.data() {
        PuzzleData::WordSearch(p) => p.words().to_vec(),
        _ => panic!("expected a word search"),
    };
    let missing = words.last().unwrap().clone();
    let found = words[..words.len() - 1].to_vec();
    let hint = puzzle::hint(&puzzle, &Candidate::FoundWords(found), &mut rng)
        .unwrap()
        .expect("one word is still missing");
    match hint {
        Hint::WordPrefix(prefix) => {
            assert_eq!(2, prefix.chars().count());
            assert!(missing.starts_with(&prefix));
        }
        other => panic!("unexpected hint {:?}", other),
    }

    assert_eq!(
        None,
        puzzle::hint(&puzzle, &Candidate::FoundWords(words), &mut rng).unwrap()
    );
}

#[test]
fn crossword_hint_walks_the_letter_cells() {
    let mut rng = seeded(108);
    let puzzle = puzzle::generate(PuzzleKind::Crossword, Difficulty::Medium, &mut rng);
    let solution = match puzzle.data() {
        PuzzleData::Crossword(p) => p.solution(),
        _ => panic!("expected a crossword"),
    };
    let first_letter = solution
        .iter_coord()
        .find_map(|(coord, cell)| cell.map(|letter| (coord, letter)))
        .expect("at least one word placed");
    let empty: Grid<Option<char>> = Grid::with_size(solution.width(), solution.height());
    assert_eq!(
        Some(Hint::Letter {
            coord: first_letter.0,
            letter: first_letter.1
        }),
        puzzle::hint(&puzzle, &Candidate::Crossword(empty), &mut rng).unwrap()
    );
    assert_eq!(
        None,
        puzzle::hint(&puzzle, &Candidate::Crossword(solution), &mut rng).unwrap()
    );
}

#[test]
fn score_contract() {
    assert_eq!(1000, score(Difficulty::Easy, 0));
    assert_eq!(0, score(Difficulty::Hard, 1000));
    assert_eq!(1200, score(Difficulty::Medium, 100));
}
