use crate::engine::Board;
use crate::error::{BoardParseError, ShapeError};
use std::fs;
use std::path::Path;

/// Builds a `Board` from string rows, one cell per character.
///
/// # Returns
/// * `Ok(Board)` if the rows form a non-empty rectangle.
/// * `Err(ShapeError)` if there are no rows, a row is empty, or row lengths differ.
///
/// # Examples
/// ```
/// use boggle_solver::engine::Position;
/// use boggle_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["ILAW", "BNGE"]).unwrap();
/// assert_eq!(board.get_letter(Position::new(0, 1)), 'B');
///
/// assert!(board_from_str_array(&["ILAW", "BNG"]).is_err());
/// assert!(board_from_str_array(&[]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, ShapeError> {
    Board::new(s.iter().map(|row| row.chars().collect()).collect())
}

/// Parses a textual board description.
///
/// Each non-blank line is a row; lines starting with `#` are comments. A row
/// may be written compactly (`ILAW`) or with whitespace between cells
/// (`I L A W`), in which case every token must be a single character.
/// Surrounding whitespace is ignored in both forms.
///
/// # Examples
/// ```
/// use boggle_solver::utils::parse_board;
///
/// let text = "# sample\nI L A W\nB N G E\n\nIUAO\nASRL\n";
/// let board = parse_board(text).unwrap();
/// assert_eq!(board.height(), 4);
/// assert!(board.contains("BINGO"));
/// ```
pub fn parse_board(text: &str) -> Result<Board, BoardParseError> {
    let mut rows = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        // Blank lines and comments never contribute a row.
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Any inner whitespace means the row is written cell by cell.
        let row = if line.contains(char::is_whitespace) {
            line.split_whitespace()
                .map(|token| {
                    let mut chars = token.chars();
                    match (chars.next(), chars.next()) {
                        (Some(cell), None) => Ok(cell),
                        _ => Err(BoardParseError::MultiCharCell {
                            line: idx + 1,
                            token: token.to_string(),
                        }),
                    }
                })
                .collect::<Result<Vec<char>, _>>()?
        } else {
            line.chars().collect()
        };
        rows.push(row);
    }

    Ok(Board::new(rows)?)
}

/// Checks that every letter of `alphabet` can be written to a board file and
/// read back by `parse_board`.
///
/// Whitespace separates cells and `#` starts a comment, so neither may be a
/// letter of a board that is meant to be saved.
///
/// # Examples
/// ```
/// use boggle_solver::error::ShapeError;
/// use boggle_solver::utils::check_file_alphabet;
///
/// assert!(check_file_alphabet(&['A', 'B']).is_ok());
/// assert_eq!(
///     check_file_alphabet(&['A', '#']),
///     Err(ShapeError::ReservedLetter { letter: '#' })
/// );
/// ```
pub fn check_file_alphabet(alphabet: &[char]) -> Result<(), ShapeError> {
    match alphabet.iter().find(|c| c.is_whitespace() || **c == '#') {
        Some(&letter) => Err(ShapeError::ReservedLetter { letter }),
        None => Ok(()),
    }
}

/// Writes `board` in the compact file format: one line per row, no separators.
///
/// The output reads back through `parse_board` as long as the board's letters
/// pass `check_file_alphabet`.
pub fn board_to_text(board: &Board) -> String {
    let mut text = String::new();
    for row in board.rows() {
        text.extend(row.iter());
        text.push('\n');
    }
    text
}

/// Reads and parses a board file. See `parse_board` for the format.
pub fn read_board_file(path: impl AsRef<Path>) -> Result<Board, BoardParseError> {
    let content = fs::read_to_string(path)?;
    parse_board(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Position;
    use std::io::Write;

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&["ILAW", "BNGE", "IUAO", "ASRL"]).unwrap();
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 4);
        assert_eq!(board.get_letter(Position::new(3, 3)), 'L');
    }

    #[test]
    fn test_board_from_str_array_keeps_any_character() {
        let board = board_from_str_array(&["a .", "#!?"]).unwrap();
        assert_eq!(board.get_letter(Position::new(1, 0)), ' ');
        assert_eq!(board.get_letter(Position::new(0, 1)), '#');
    }

    #[test]
    fn test_board_from_str_array_ragged() {
        let result = board_from_str_array(&["ABC", "AB"]);
        assert_eq!(
            result.unwrap_err(),
            ShapeError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_board_from_str_array_empty_row() {
        let result = board_from_str_array(&["", ""]);
        assert_eq!(result.unwrap_err(), ShapeError::EmptyRow { row: 0 });
    }

    #[test]
    fn test_parse_board_compact_and_spaced_rows_agree() {
        let compact = parse_board("ILAW\nBNGE\nIUAO\nASRL").unwrap();
        let spaced = parse_board("  I L A W\nB\tN G E\nI U A O  \nA S R L\n").unwrap();
        assert_eq!(compact, spaced);
    }

    #[test]
    fn test_parse_board_skips_comments_and_blank_lines() {
        let board = parse_board("# header\n\nAB\n   \n# middle\nCD\n").unwrap();
        assert_eq!(board.height(), 2);
        assert_eq!(board.to_string(), "A B\nC D");
    }

    #[test]
    fn test_parse_board_multi_char_cell() {
        let err = parse_board("A B\nC DE\n").unwrap_err();
        match err {
            BoardParseError::MultiCharCell { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "DE");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_parse_board_shape_errors() {
        assert!(matches!(
            parse_board("# nothing here\n"),
            Err(BoardParseError::Shape(ShapeError::NoRows))
        ));
        assert!(matches!(
            parse_board("ABC\nAB\n"),
            Err(BoardParseError::Shape(ShapeError::RaggedRow { row: 1, .. }))
        ));
    }

    #[test]
    fn test_board_to_text_reads_back() {
        let alphabet: Vec<char> = ('A'..='Z').chain('a'..='z').chain(['.', '!']).collect();
        assert!(check_file_alphabet(&alphabet).is_ok());
        for seed in 0..10 {
            let board = Board::new_random_with_seed(7, 5, &alphabet, seed).unwrap();
            let text = board_to_text(&board);
            assert_eq!(text.lines().count(), 5);
            let parsed = parse_board(&text).unwrap();
            assert_eq!(parsed, board, "seed {} did not survive:\n{}", seed, text);
        }
    }

    #[test]
    fn test_check_file_alphabet_rejects_separators_and_comments() {
        assert_eq!(
            check_file_alphabet(&['A', ' ', 'B']),
            Err(ShapeError::ReservedLetter { letter: ' ' })
        );
        assert_eq!(
            check_file_alphabet(&['\t']),
            Err(ShapeError::ReservedLetter { letter: '\t' })
        );
        assert_eq!(
            check_file_alphabet(&['#', 'A']),
            Err(ShapeError::ReservedLetter { letter: '#' })
        );

        // Boards using those letters would not read back as written.
        let commented = board_from_str_array(&["#A", "BC"]).unwrap();
        assert_eq!(parse_board(&board_to_text(&commented)).unwrap().height(), 1);
        let spaced = board_from_str_array(&["A B", "CDE"]).unwrap();
        assert!(parse_board(&board_to_text(&spaced)).is_err());
    }

    #[test]
    fn test_read_board_file() {
        let path = std::env::temp_dir().join(format!(
            "boggle_solver_read_board_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "A A").unwrap();
            writeln!(file, "A A").unwrap();
        }
        let board = read_board_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(board.contains("AAAA"));
        assert!(!board.contains("AAAAA"));
    }

    #[test]
    fn test_read_board_file_missing() {
        let result = read_board_file("/definitely/not/a/board.txt");
        assert!(matches!(result, Err(BoardParseError::Io(_))));
    }
}
