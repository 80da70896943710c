//! Plaintext pattern format.
//!
//! Each line is one row of cells. State 0 is written as `.`, state 1 as `O`,
//! states 2 through 9 as digits, and states 10 through 35 as `a` through `z`.
//! `1` and `*` are also read as state 1. Lines starting with `!` are comments.
//! Rows shorter than the longest row are padded with state 0.
//!
//! # Limitations
//!
//! States above [`MAX_SYMBOL_STATE`] have no symbol. They are written as `#`,
//! which `parse_pattern()` rejects, so patterns for automata with more than
//! 36 states don't survive a write and read.

use itertools::Itertools;

use crate::board::Board;
use crate::error::{CaError, CaResult};
use crate::State;

/// Highest state that has its own symbol.
pub const MAX_SYMBOL_STATE: State = 35;

/// Returns the symbol for a cell state.
///
/// # Limitations
///
/// States above [`MAX_SYMBOL_STATE`] are all written as `#`, which is not a
/// valid symbol when reading.
pub fn state_to_char(state: State) -> char {
    match state {
        0 => '.',
        1 => 'O',
        2..=9 => (b'0' + state) as char,
        10..=MAX_SYMBOL_STATE => (b'a' + state - 10) as char,
        _ => '#',
    }
}

/// Returns the cell state for a symbol.
pub fn char_to_state(ch: char) -> Option<State> {
    match ch {
        '.' => Some(0),
        'O' | '*' => Some(1),
        '1'..='9' => Some(ch as State - b'0'),
        'a'..='z' => Some(ch as State - b'a' + 10),
        _ => None,
    }
}

/// Parses a pattern into a board just large enough to hold it.
pub fn parse_pattern(s: &str) -> CaResult<Board> {
    let rows = s
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.starts_with('!'))
        .map(|(i, line)| {
            line.trim_end()
                .chars()
                .map(|ch| char_to_state(ch).ok_or(CaError::InvalidPattern { line: i + 1, ch }))
                .collect::<CaResult<Vec<State>>>()
        })
        .collect::<CaResult<Vec<_>>>()?;
    // Blank lines at the end of the file aren't rows.
    let row_count = rows
        .iter()
        .rposition(|row| !row.is_empty())
        .map_or(0, |i| i + 1);
    let col_count = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut board = Board::new(row_count.max(1), col_count.max(1));
    for (r, row) in rows.iter().take(row_count).enumerate() {
        for (c, &state) in row.iter().enumerate() {
            board.write(r, c, state);
        }
    }
    Ok(board)
}

/// Formats a board in the plaintext pattern format, with an optional comment
/// line.
///
/// Lossy for states above [`MAX_SYMBOL_STATE`]; see the module
/// documentation.
pub fn write_pattern(board: &Board, comment: Option<&str>) -> String {
    let body = (0..board.rows())
        .map(|r| {
            (0..board.cols())
                .map(|c| state_to_char(board[(r, c)]))
                .collect::<String>()
        })
        .join("\n");
    match comment {
        Some(comment) => format!("!{}\n{}\n", comment, body),
        None => format!("{}\n", body),
    }
}
