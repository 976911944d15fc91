//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and
//! diagnostics in text environments. Not part of the engine core.

use crate::board::board_types::{Board, Cell, BOARD_SIZE};

/// Render the board to a string for terminal output.
///
/// Rows are printed top to bottom with `y = 0` first, matching the cell
/// indexing used by the move codec.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6\n");

    for y in 0..BOARD_SIZE {
        out.push(char::from(b'0' + y as u8));
        out.push(' ');

        for x in 0..BOARD_SIZE {
            out.push(match board.get(x, y) {
                Cell::Blue => '●',
                Cell::Green => '○',
                Cell::Empty => '·',
            });
            if x < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::board::board_types::Board;

    #[test]
    fn start_position_renders_with_corner_pieces() {
        let rendered = render_board(&Board::start_position());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 1 + 7);
        assert_eq!(lines[0], "  0 1 2 3 4 5 6");
        assert_eq!(lines[1], "0 ● · · · · · ○");
        assert_eq!(lines[7], "6 ○ · · · · · ●");
    }
}
