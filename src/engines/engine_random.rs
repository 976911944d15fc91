//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for
//! diagnostics, harness baselines, and low-strength gameplay.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board_types::{Board, Color};
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::move_generation::move_generator::generate;
use crate::moves::move_codec::MoveId;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "micro_ataxx random"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        mover: Color,
        params: &SearchParams,
    ) -> Result<EngineOutput, String> {
        let table = generate(board, mover);
        let legal: Vec<MoveId> = table.iter_legal().collect();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine legal_moves {}", legal.len()));

        if legal.is_empty() {
            out.best_move = None;
            return Ok(out);
        }

        out.best_move = match params.seed {
            Some(seed) => legal.choose(&mut StdRng::seed_from_u64(seed)).copied(),
            None => legal.choose(&mut rand::rng()).copied(),
        };
        Ok(out)
    }
}
