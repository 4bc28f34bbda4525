//! Board representation for the Boggle word checker.
//!
//! This module defines:
//! - `Position`: a `(column, row)` coordinate on the board.
//! - `Board`: an immutable rectangular grid of characters together with its
//!   letter index (character -> every position holding it).
//!
//! The word search itself lives in `solver`; it only needs the read-only
//! accessors defined here.
use crate::error::ShapeError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::fmt;

/// A cell coordinate. `col` is the horizontal axis, `row` the vertical one,
/// so the cell's letter is `grid[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub fn new(col: usize, row: usize) -> Self {
        Position { col, row }
    }

    /// Returns true if `other` is one of the (up to) eight cells surrounding `self`.
    ///
    /// A position is never adjacent to itself.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::engine::Position;
    /// let p = Position::new(1, 1);
    /// assert!(p.is_adjacent(&Position::new(2, 2)));
    /// assert!(p.is_adjacent(&Position::new(1, 0)));
    /// assert!(!p.is_adjacent(&Position::new(3, 1)));
    /// assert!(!p.is_adjacent(&p));
    /// ```
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self != other && self.col.abs_diff(other.col) <= 1 && self.row.abs_diff(other.row) <= 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

// Column/row deltas of the eight surrounding cells.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular grid of single characters with a precomputed letter index.
///
/// A `Board` cannot be modified after construction, so it can be shared freely
/// between threads and queried concurrently.
///
/// # Examples
/// ```
/// use boggle_solver::engine::{Board, Position};
/// let board = Board::new(vec![vec!['A', 'B'], vec!['C', 'D']]).unwrap();
/// assert_eq!(board.width(), 2);
/// assert_eq!(board.height(), 2);
/// assert_eq!(board.get_letter(Position::new(1, 0)), 'B');
/// assert_eq!(board.positions_of('D'), &[Position::new(1, 1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Vec<Vec<char>>,
    width: usize,
    height: usize,
    lookup: HashMap<char, Vec<Position>>,
}

impl Board {
    /// Builds a board from its rows.
    ///
    /// # Errors
    /// Returns a `ShapeError` if `rows` is empty, if any row is empty, or if the
    /// rows are not all the same length.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, ShapeError> {
        let first = rows.first().ok_or(ShapeError::NoRows)?;
        let width = first.len();

        for (row, cells) in rows.iter().enumerate() {
            if cells.is_empty() {
                return Err(ShapeError::EmptyRow { row });
            }
            if cells.len() != width {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }

        let height = rows.len();
        let lookup = build_lookup(&rows);
        Ok(Board {
            grid: rows,
            width,
            height,
            lookup,
        })
    }

    /// Creates a `width` x `height` board whose letters are drawn uniformly from
    /// `alphabet` using a generator seeded with `seed`.
    ///
    /// The same arguments always produce the same board.
    ///
    /// # Errors
    /// Returns a `ShapeError` if either dimension is zero or `alphabet` is empty.
    pub fn new_random_with_seed(
        width: usize,
        height: usize,
        alphabet: &[char],
        seed: u64,
    ) -> Result<Self, ShapeError> {
        if alphabet.is_empty() {
            return Err(ShapeError::EmptyAlphabet);
        }
        let mut rng = SmallRng::seed_from_u64(seed);
        let rows = (0..height)
            .map(|_| {
                (0..width)
                    .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                    .collect()
            })
            .collect();
        Board::new(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, `width * height`.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Returns the letter at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` lies outside the board.
    pub fn get_letter(&self, pos: Position) -> char {
        self.grid[pos.row][pos.col]
    }

    /// Returns every position holding `letter`, in row-major order.
    /// The slice is empty if the letter does not occur on the board.
    pub fn positions_of(&self, letter: char) -> &[Position] {
        self.lookup.get(&letter).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if `col`/`row` fall inside the board.
    pub fn is_valid(&self, col: isize, row: isize) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height
    }

    /// Returns the in-bounds cells adjacent to `pos` (horizontally, vertically
    /// or diagonally). Corner cells have three neighbours, edge cells five,
    /// interior cells eight.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dc, dr)| {
            let col = pos.col as isize + dc;
            let row = pos.row as isize + dr;
            self.is_valid(col, row).then(|| Position::new(col as usize, row as usize))
        })
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[Vec<char>] {
        &self.grid
    }

    /// Renders the board showing only the cells in `path`; every other cell is
    /// printed as `.`. Useful for inspecting a witness returned by
    /// `Board::find_path`.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::engine::Position;
    /// use boggle_solver::utils::board_from_str_array;
    /// let board = board_from_str_array(&["EAR", "NLE", "IAI"]).unwrap();
    /// let shown = board.to_string_with_path(&[Position::new(0, 2), Position::new(1, 1)]);
    /// assert_eq!(shown, ". . .\n. L .\nI . .");
    /// ```
    ///
    /// # Panics
    /// Panics if any position in `path` lies outside the board, like `get_letter`.
    pub fn to_string_with_path(&self, path: &[Position]) -> String {
        let mut template = vec![vec!['.'; self.width]; self.height];
        for &pos in path {
            // Reveal only the cells the path actually uses.
            template[pos.row][pos.col] = self.get_letter(pos);
        }
        format_rows(&template)
    }
}

fn build_lookup(rows: &[Vec<char>]) -> HashMap<char, Vec<Position>> {
    let mut lookup: HashMap<char, Vec<Position>> = HashMap::new();
    for (row, cells) in rows.iter().enumerate() {
        for (col, &letter) in cells.iter().enumerate() {
            lookup.entry(letter).or_default().push(Position::new(col, row));
        }
    }
    lookup
}

fn format_rows(rows: &[Vec<char>]) -> String {
    rows.iter()
        .map(|cells| {
            cells
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for Board {
    /// One line per row, cells separated by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_rows(&self.grid))
    }
}
