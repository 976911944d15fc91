//! Move application with capture propagation.
//!
//! Applying a move never mutates the input board: the caller gets back an
//! independent copy with the piece relocated or cloned and every adjacent
//! enemy cell flipped to the mover's color. Legality is not re-checked
//! here; callers must only apply moves the generator marked legal.

use crate::board::board_types::{Board, Cell, Color};
use crate::moves::move_codec::MoveId;

/// Apply `id` for `color` to `board`, returning the resulting board.
///
/// Order matters: the piece is placed (vacating the source on a jump)
/// before contamination runs, so the 3x3 sweep sees the post-placement
/// board. The destination itself is the mover's color by then and a
/// just-vacated jump source is already empty, so neither can flip.
pub fn apply(board: &Board, id: MoveId, color: Color) -> Board {
    let mut next = *board;
    let mover = Cell::from(color);
    let enemy = Cell::from(color.opposite());

    let (from_x, from_y) = id.source();
    let (to_x, to_y) = id.destination();

    if id.is_jump() {
        next.set(from_x, from_y, Cell::Empty);
    }
    next.set(to_x as usize, to_y as usize, mover);

    for dv in -1..=1 {
        for du in -1..=1 {
            let cx = to_x + du;
            let cy = to_y + dv;
            if Board::in_bounds(cx, cy) && next.get(cx as usize, cy as usize) == enemy {
                next.set(cx as usize, cy as usize, mover);
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::apply;
    use crate::board::board_types::{Board, Cell, Color, BOARD_SIZE};
    use crate::moves::move_codec::MoveId;

    #[test]
    fn clone_keeps_the_source_piece() {
        let mut board = Board::empty();
        board.set(3, 3, Cell::Green);

        let id = MoveId::from_cells(3, 3, 4, 4).expect("encodes");
        let next = apply(&board, id, Color::Green);

        assert_eq!(next.get(3, 3), Cell::Green);
        assert_eq!(next.get(4, 4), Cell::Green);
        assert_eq!(next.count(Cell::Green), 2);
    }

    #[test]
    fn jump_vacates_the_source_cell() {
        let mut board = Board::empty();
        board.set(3, 3, Cell::Blue);

        let id = MoveId::from_cells(3, 3, 5, 3).expect("encodes");
        let next = apply(&board, id, Color::Blue);

        assert_eq!(next.get(3, 3), Cell::Empty);
        assert_eq!(next.get(5, 3), Cell::Blue);
        assert_eq!(next.count(Cell::Blue), 1);
    }

    #[test]
    fn contamination_flips_every_adjacent_enemy() {
        let mut board = Board::empty();
        board.set(3, 3, Cell::Green);
        // Ring of Blue pieces around the destination (4, 4).
        board.set(3, 4, Cell::Blue);
        board.set(5, 4, Cell::Blue);
        board.set(4, 5, Cell::Blue);
        board.set(5, 5, Cell::Blue);

        let id = MoveId::from_cells(3, 3, 4, 4).expect("encodes");
        let next = apply(&board, id, Color::Green);

        for (x, y) in [(3, 4), (5, 4), (4, 5), (5, 5)] {
            assert_eq!(next.get(x, y), Cell::Green, "({x}, {y}) should flip");
        }
        assert_eq!(next.count(Cell::Blue), 0);
        assert_eq!(next.count(Cell::Green), 6);
    }

    #[test]
    fn contamination_spares_empty_cells_and_distant_enemies() {
        let mut board = Board::empty();
        board.set(0, 0, Cell::Green);
        board.set(3, 0, Cell::Blue);

        let id = MoveId::from_cells(0, 0, 1, 0).expect("encodes");
        let next = apply(&board, id, Color::Green);

        // (3, 0) is two cells from the destination: out of the 3x3 sweep.
        assert_eq!(next.get(3, 0), Cell::Blue);
        assert_eq!(next.get(2, 0), Cell::Empty);
    }

    #[test]
    fn cells_outside_the_neighborhood_are_untouched() {
        let mut board = Board::start_position();
        board.set(2, 2, Cell::Blue);

        let id = MoveId::from_cells(2, 2, 2, 3).expect("encodes");
        let next = apply(&board, id, Color::Blue);

        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let dx = x as i32 - 2;
                let dy = y as i32 - 3;
                if dx.abs() <= 1 && dy.abs() <= 1 {
                    continue;
                }
                assert_eq!(
                    next.get(x, y),
                    board.get(x, y),
                    "({x}, {y}) lies outside the capture sweep"
                );
            }
        }
    }

    #[test]
    fn jump_captures_enemies_around_the_landing_cell() {
        let mut board = Board::empty();
        board.set(3, 3, Cell::Blue);
        board.set(4, 3, Cell::Green);

        let id = MoveId::from_cells(3, 3, 5, 3).expect("encodes");
        let next = apply(&board, id, Color::Blue);

        assert_eq!(next.get(3, 3), Cell::Empty);
        assert_eq!(next.get(4, 3), Cell::Blue, "adjacent enemy flips");
        assert_eq!(next.get(5, 3), Cell::Blue);
    }

    #[test]
    fn input_board_is_left_unmodified() {
        let board = Board::start_position();
        let id = MoveId::from_cells(0, 0, 1, 1).expect("encodes");
        let _ = apply(&board, id, Color::Blue);
        assert_eq!(board, Board::start_position());
    }
}
