//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The roles are fixed: the maximizing ply always moves Green and the
//! minimizing ply always moves Blue, independent of whose turn it is at
//! the root. Pruning is a pure performance shortcut; the returned value is
//! identical to full-width minimax.

use crate::board::board_types::{Board, Color};
use crate::move_generation::{apply_move::apply, move_generator::generate};
use crate::search::board_scoring::{leaf_evaluation, stalemate_evaluation};

/// Evaluate `board` to `depth` plies within the `(alpha, beta)` window.
///
/// Root callers pass `f32::NEG_INFINITY` / `f32::INFINITY` bounds. The
/// stalemate check runs before the depth check is relevant: a blocked
/// mover ends the game even with budget remaining.
pub fn minimax(board: &Board, depth: u8, mut alpha: f32, mut beta: f32, maximizing: bool) -> f32 {
    if depth == 0 {
        return leaf_evaluation(board, maximizing);
    }

    let mover = if maximizing {
        Color::Green
    } else {
        Color::Blue
    };

    let table = generate(board, mover);
    if !table.any_legal() {
        return stalemate_evaluation(board, maximizing);
    }

    if maximizing {
        let mut value = f32::NEG_INFINITY;
        for id in table.iter_legal() {
            let child = apply(board, id, mover);
            value = value.max(minimax(&child, depth - 1, alpha, beta, false));
            if value >= beta {
                break;
            }
            alpha = alpha.max(value);
        }
        value
    } else {
        let mut value = f32::INFINITY;
        for id in table.iter_legal() {
            let child = apply(board, id, mover);
            value = value.min(minimax(&child, depth - 1, alpha, beta, true));
            if value <= alpha {
                break;
            }
            beta = beta.min(value);
        }
        value
    }
}
