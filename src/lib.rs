//! Crate root module declarations for the micro_ataxx engine project.
//!
//! This file exposes all top-level subsystems (board model, move codec,
//! move generation, search, engines, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod board {
    pub mod board_types;
}

pub mod moves {
    pub mod move_codec;
    pub mod move_table;
}

pub mod move_generation {
    pub mod apply_move;
    pub mod move_generator;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod move_selector;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_notation;
    pub mod match_harness;
    pub mod render_board;
}

pub mod errors;
