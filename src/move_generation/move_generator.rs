//! Legal move generation.
//!
//! For every cell owned by the mover, all 25 offsets in the 5x5 window are
//! probed; a move is legal iff the destination is on the board and empty.
//! Generation is total and always rescans the whole board, returning a
//! fresh stack-owned table per call.

use crate::board::board_types::{Board, Cell, Color, BOARD_SIZE};
use crate::moves::move_codec::{MoveId, OFFSET_RANGE};
use crate::moves::move_table::MoveTable;

/// Generate the legal-move table for `color` on `board`.
///
/// Never fails; an all-false table means the mover is blocked, which the
/// search and selector check explicitly via `MoveTable::any_legal`.
pub fn generate(board: &Board, color: Color) -> MoveTable {
    let mover = Cell::from(color);
    let mut table = MoveTable::new();

    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            if board.get(x, y) != mover {
                continue;
            }
            for dv in 0..OFFSET_RANGE {
                for du in 0..OFFSET_RANGE {
                    let to_x = x as i32 + du as i32 - 2;
                    let to_y = y as i32 + dv as i32 - 2;
                    if Board::in_bounds(to_x, to_y)
                        && board.get(to_x as usize, to_y as usize).is_empty()
                    {
                        table.set(MoveId::encode(x, y, du, dv));
                    }
                }
            }
        }
    }

    table
}

/// Direct legality predicate for a single move id.
///
/// Matches the generator bit-for-bit: the source must hold the mover's
/// color and the destination must be an empty on-board cell. The zero
/// offset can never pass because its destination is the occupied source.
pub fn is_move_legal(board: &Board, id: MoveId, color: Color) -> bool {
    let (from_x, from_y) = id.source();
    if board.get(from_x, from_y) != Cell::from(color) {
        return false;
    }
    let (to_x, to_y) = id.destination();
    Board::in_bounds(to_x, to_y) && board.get(to_x as usize, to_y as usize).is_empty()
}
