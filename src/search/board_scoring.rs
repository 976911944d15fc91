//! Static and terminal position evaluation.
//!
//! Scores are raw cell-count differentials. The search always evaluates
//! from Green's perspective regardless of which side is on move at the
//! node; the maximizing/minimizing role only decides the sign of the small
//! tie-breaking bias.

use crate::board::board_types::{Board, Cell, Color};

/// Score treated as a decided win or loss.
pub const DECISIVE_SCORE: f32 = 100.0;

/// Per-ply tie-breaking nudge toward the side on move.
pub const MOVER_BIAS: f32 = 0.5;

/// Material differential for `color`: own cells minus opponent cells.
pub fn score(board: &Board, color: Color) -> i32 {
    let own = board.count(Cell::from(color)) as i32;
    let opponent = board.count(Cell::from(color.opposite())) as i32;
    own - opponent
}

/// Evaluation at the depth horizon.
///
/// Material from Green's perspective, nudged by `MOVER_BIAS` toward
/// whichever role is on move so equal-material leaves are not perfectly
/// flat for the search.
pub fn leaf_evaluation(board: &Board, maximizing: bool) -> f32 {
    score(board, Color::Green) as f32 + mover_bias(maximizing)
}

/// Evaluation when the ply's mover has no legal move before the depth
/// budget is exhausted.
///
/// On a full board the position is decided: exactly plus or minus
/// `DECISIVE_SCORE` depending on the sign of Green's material. Otherwise
/// the remaining empty territory is projected onto the mover's bias.
pub fn stalemate_evaluation(board: &Board, maximizing: bool) -> f32 {
    let material = score(board, Color::Green) as f32;
    let empties = board.empty_count();

    if empties == 0 {
        if material > 0.0 {
            DECISIVE_SCORE
        } else {
            -DECISIVE_SCORE
        }
    } else {
        material + mover_bias(maximizing) * 2.0 * empties as f32
    }
}

#[inline]
fn mover_bias(maximizing: bool) -> f32 {
    if maximizing {
        MOVER_BIAS
    } else {
        -MOVER_BIAS
    }
}
