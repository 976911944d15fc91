//! Compact text notation for board positions.
//!
//! Seven ranks of seven cells separated by `/`, rank 0 (the top row,
//! y = 0) first: `b` for Blue, `g` for Green, `.` for empty. Used by
//! tests, the harness, and diagnostics to write positions inline.

use crate::board::board_types::{Board, Cell, BOARD_SIZE};
use crate::errors::{EngineError, EngineResult};

/// Parse `text` into a board.
pub fn parse_board(text: &str) -> EngineResult<Board> {
    let ranks: Vec<&str> = text.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(EngineError::InvalidNotationForm(text.to_owned()));
    }

    let mut board = Board::empty();
    for (y, rank) in ranks.iter().enumerate() {
        let cells: Vec<char> = rank.chars().collect();
        if cells.len() != BOARD_SIZE {
            return Err(EngineError::InvalidNotationForm(text.to_owned()));
        }
        for (x, ch) in cells.into_iter().enumerate() {
            let cell = match ch {
                'b' => Cell::Blue,
                'g' => Cell::Green,
                '.' => Cell::Empty,
                other => return Err(EngineError::InvalidNotationChar(other)),
            };
            board.set(x, y, cell);
        }
    }
    Ok(board)
}

/// Exact inverse of `parse_board`.
pub fn generate_notation(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
    for y in 0..BOARD_SIZE {
        if y > 0 {
            out.push('/');
        }
        for x in 0..BOARD_SIZE {
            out.push(match board.get(x, y) {
                Cell::Blue => 'b',
                Cell::Green => 'g',
                Cell::Empty => '.',
            });
        }
    }
    out
}
