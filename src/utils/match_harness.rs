//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any host
//! I/O. Blue always moves first; a mover with no legal move passes, and
//! the game ends when both sides are blocked in succession, the board
//! fills up, or the ply cap is reached. The winner is whoever holds more
//! cells at the end.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::board_types::{Board, Cell, Color};
use crate::engines::engine_trait::{Engine, SearchParams};
use crate::move_generation::apply_move::apply;
use crate::move_generation::move_generator::{generate, is_move_legal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    BlueWin,
    GreenWin,
    Draw,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Hard cap on total plies, counting passes.
    pub max_plies: u16,
    pub blue_params: SearchParams,
    pub green_params: SearchParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            blue_params: SearchParams::default(),
            green_params: SearchParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub plies: u16,
    pub blue_cells: u32,
    pub green_cells: u32,
}

/// Play one game between `blue` and `green` from the start position.
///
/// Returns an error if an engine reports a move its own position does not
/// allow; engines signalling "no move" are treated as passing.
pub fn play_match<'a>(
    blue: &'a mut dyn Engine,
    green: &'a mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let mut board = Board::start_position();
    let mut mover = Color::Blue;
    let mut plies = 0u16;
    let mut consecutive_passes = 0u8;

    while plies < config.max_plies && consecutive_passes < 2 && !board.is_full() {
        let (engine, params) = match mover {
            Color::Blue => (&mut *blue, &config.blue_params),
            Color::Green => (&mut *green, &config.green_params),
        };

        let chosen = if generate(&board, mover).any_legal() {
            engine.choose_move(&board, mover, params)?.best_move
        } else {
            None
        };

        match chosen {
            Some(id) => {
                if !is_move_legal(&board, id, mover) {
                    return Err(format!(
                        "{} returned illegal move id {} for {:?}",
                        engine.name(),
                        id.index(),
                        mover
                    ));
                }
                board = apply(&board, id, mover);
                consecutive_passes = 0;
            }
            None => consecutive_passes += 1,
        }

        plies += 1;
        mover = mover.opposite();
    }

    let blue_cells = board.count(Cell::Blue);
    let green_cells = board.count(Cell::Green);
    let outcome = match blue_cells.cmp(&green_cells) {
        std::cmp::Ordering::Greater => MatchOutcome::BlueWin,
        std::cmp::Ordering::Less => MatchOutcome::GreenWin,
        std::cmp::Ordering::Equal => MatchOutcome::Draw,
    };

    Ok(MatchResult {
        outcome,
        final_board: board,
        plies,
        blue_cells,
        green_cells,
    })
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    /// Per-game engine seeds derive from this so a series is reproducible.
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub blue_wins: u16,
    pub green_wins: u16,
    pub draws: u16,
    pub total_plies: u32,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} blue_wins={} green_wins={} draws={} avg_plies={:.1}",
            self.games,
            self.blue_wins,
            self.green_wins,
            self.draws,
            if self.games == 0 {
                0.0
            } else {
                f64::from(self.total_plies) / f64::from(self.games)
            }
        )
    }
}

/// Run a series of games, reseeding both engines per game.
pub fn play_series<'a, F>(
    blue: &'a mut dyn Engine,
    green: &'a mut dyn Engine,
    config: &MatchSeriesConfig,
    mut on_game_end: F,
) -> Result<MatchSeriesStats, String>
where
    F: FnMut(u16, &MatchResult),
{
    let mut stats = MatchSeriesStats::default();
    let mut seeder = StdRng::seed_from_u64(config.base_seed);

    for game in 0..config.games {
        let mut per_game = config.per_game.clone();
        per_game.blue_params.seed = Some(seeder.random());
        per_game.green_params.seed = Some(seeder.random());

        let result = play_match(blue, green, &per_game)?;
        match result.outcome {
            MatchOutcome::BlueWin => stats.blue_wins += 1,
            MatchOutcome::GreenWin => stats.green_wins += 1,
            MatchOutcome::Draw => stats.draws += 1,
        }
        stats.games += 1;
        stats.total_plies += u32::from(result.plies);
        on_game_end(game, &result);
    }

    Ok(stats)
}
