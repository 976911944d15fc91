//! Fixed-depth alpha-beta engine.
//!
//! Wraps the root move selector with depth validation, seedable move-order
//! randomization, and diagnostic info lines. This is the full-strength
//! engine a host embeds.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board_types::{Board, Color};
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams, MAX_SEARCH_DEPTH};
use crate::errors::EngineError;
use crate::move_generation::move_generator::generate;
use crate::search::move_selector::find_best_move;

pub struct MinimaxEngine {
    default_depth: u8,
}

impl MinimaxEngine {
    /// Create an engine searching `default_depth` plies unless a request
    /// overrides it.
    pub fn new(default_depth: u8) -> Self {
        Self { default_depth }
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "micro_ataxx minimax"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        mover: Color,
        params: &SearchParams,
    ) -> Result<EngineOutput, String> {
        let depth = params.depth.unwrap_or(self.default_depth);
        if depth == 0 || depth > MAX_SEARCH_DEPTH {
            return Err(EngineError::DepthOutOfRange(depth).to_string());
        }

        let legal_count = generate(board, mover).len();

        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut out = EngineOutput::default();
        out.best_move = find_best_move(board, depth, mover, &mut rng);
        out.info_lines.push(format!(
            "info string minimax_engine depth {} legal_moves {}",
            depth, legal_count
        ));
        if out.best_move.is_none() {
            out.info_lines
                .push("info string minimax_engine no legal move".to_owned());
        }
        Ok(out)
    }
}
