//! # Boggle Solver Library
//!
//! Decides whether a word is a valid guess on a Boggle board: the word must be
//! spelled by a path of cells, each horizontally, vertically or diagonally
//! adjacent to the previous one, with no cell used twice.
//!
//! It is used by two binaries:
//! - `word_checker`: checks words against a board read from a file.
//! - `board_generator`: prints a seeded random board in the format
//!   `word_checker` reads.
//!
//! ## Modules
//! - `engine`: the immutable `Board`, its letter index, and `Position`.
//! - `solver`: the frontier search (`Board::contains`, `Board::find_path`,
//!   budgeted `Board::search`).
//! - `utils`: building boards from strings and board files.
//! - `error`: `ShapeError` and `BoardParseError`.

pub mod engine;
pub mod error;
pub mod solver;
pub mod utils;

use crate::error::ShapeError;
use crate::utils::board_from_str_array;

/// Builds a board from `rows` and checks a single `word` against it.
///
/// # Examples
/// ```
/// use boggle_solver::find_word;
/// let rows = ["ILAW", "BNGE", "IUAO", "ASRL"];
/// assert_eq!(find_word(&rows, "LINGO"), Ok(true));
/// assert_eq!(find_word(&rows, "SINUS"), Ok(false));
/// assert!(find_word(&["AB", "C"], "AB").is_err());
/// ```
pub fn find_word(rows: &[&str], word: &str) -> Result<bool, ShapeError> {
    let board = board_from_str_array(rows)?;
    Ok(board.contains(word))
}
