//! Engine-vs-engine series runner.
//!
//! Plays the depth-searching engine against the random baseline and prints
//! per-game results plus a summary line. Usage:
//!
//! ```text
//! engine_match_series [games] [depth] [base_seed]
//! ```

use std::env;
use std::process;

use chrono::Local;

use micro_ataxx::engines::engine_minimax::MinimaxEngine;
use micro_ataxx::engines::engine_random::RandomEngine;
use micro_ataxx::engines::engine_trait::SearchParams;
use micro_ataxx::utils::match_harness::{play_series, MatchConfig, MatchSeriesConfig};
use micro_ataxx::utils::render_board::render_board;

fn main() {
    let args: Vec<String> = env::args().collect();
    let games = parse_arg(&args, 1, 9);
    let depth = parse_arg(&args, 2, 3) as u8;
    let base_seed = parse_arg(&args, 3, 0) as u64;

    let mut blue = MinimaxEngine::new(depth);
    let mut green = RandomEngine::new();

    let config = MatchSeriesConfig {
        games: games as u16,
        base_seed,
        per_game: MatchConfig {
            blue_params: SearchParams {
                depth: Some(depth),
                seed: None,
            },
            ..MatchConfig::default()
        },
    };

    println!(
        "[{}] starting series: {} games, depth {}, base seed {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        games,
        depth,
        base_seed
    );

    let stats = play_series(&mut blue, &mut green, &config, |game, result| {
        println!(
            "[{}] game {}: {:?} in {} plies (blue {} / green {})",
            Local::now().format("%H:%M:%S"),
            game + 1,
            result.outcome,
            result.plies,
            result.blue_cells,
            result.green_cells
        );
        println!("{}", render_board(&result.final_board));
    })
    .unwrap_or_else(|err| {
        eprintln!("series failed: {err}");
        process::exit(1);
    });

    println!(
        "[{}] {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        stats.report()
    );
}

fn parse_arg(args: &[String], index: usize, default: u64) -> u64 {
    args.get(index)
        .map(|raw| {
            raw.parse().unwrap_or_else(|_| {
                eprintln!("invalid argument '{raw}'");
                process::exit(2);
            })
        })
        .unwrap_or(default)
}
