//! Engine abstraction layer used by hosts and the match harness.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::board::board_types::{Board, Color};
use crate::moves::move_codec::MoveId;

/// Largest search depth an engine will accept. Beyond this the full-width
/// tree on a 7x7 board stops returning in reasonable time.
pub const MAX_SEARCH_DEPTH: u8 = 8;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchParams {
    /// Requested search depth; engines fall back to their own default.
    pub depth: Option<u8>,
    /// Seed for any randomized behavior, for reproducible play.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Chosen move, or `None` when the mover has no legal move.
    pub best_move: Option<MoveId>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn choose_move(
        &mut self,
        board: &Board,
        mover: Color,
        params: &SearchParams,
    ) -> Result<EngineOutput, String>;
}
