//! Command-line runner for the promotion puzzle search.
//!
//! Usage:
//! `cargo run --release`
//! `cargo run --release -- --layout red-squares --depth 13 --show-board`
//! `cargo run --release -- --position "N3/4/4/3P" --depth 5`
//! `cargo run --release -- --layout red-squares --quiet`

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::warn;

use promotion_puzzle::game_state::game_state::GameState;
use promotion_puzzle::game_state::puzzle_rules::{PuzzleLayout, DEFAULT_DEPTH_LIMIT};
use promotion_puzzle::search::exhaustive_search::{
    run_search_from, SearchConfig, SearchOutcome, SolutionReport,
};
use promotion_puzzle::search::search_observer::{LoggingObserver, SearchObserver};
use promotion_puzzle::utils::render_game_state::render_board;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutArg {
    /// Row 3 empty apart from the pawn.
    Open,
    /// (3,1) and (3,2) blocked.
    RedSquares,
}

impl From<LayoutArg> for PuzzleLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Open => PuzzleLayout::Open,
            LayoutArg::RedSquares => PuzzleLayout::RedSquares,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Exhaustive search for the 4x4 pawn-to-queen puzzle")]
struct Cli {
    /// Maximum number of plies explored below the starting position.
    #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth: u32,

    /// Built-in starting layout.
    #[arg(long, value_enum, default_value_t = LayoutArg::Open)]
    layout: LayoutArg,

    /// Custom starting diagram, e.g. "NNNN/BBBB/RRRR/1xxP". Overrides --layout.
    #[arg(long)]
    position: Option<String>,

    /// Print the starting board and each solution's final board.
    #[arg(long)]
    show_board: bool,

    /// Send results to the log instead of stdout.
    #[arg(long, conflicts_with = "show_board")]
    quiet: bool,
}

/// Streams each new shortest solution to stdout as soon as it is found.
struct ConsoleReporter {
    start: GameState,
    show_board: bool,
}

impl SearchObserver for ConsoleReporter {
    fn on_solution(&mut self, report: &SolutionReport) {
        println!("Moves to promote queen: {}", report.depth);
        println!("Move history: {}", report.history_string());

        if self.show_board {
            let mut replay = self.start.clone();
            let replayed = report.moves().try_for_each(|mv| replay.make_move(mv));
            match replayed {
                Ok(()) => println!("{}", render_board(&replay.board)),
                Err(err) => warn!("could not replay solution: {err}"),
            }
        }
        println!();
    }

    fn on_complete(&mut self, outcome: &SearchOutcome) {
        println!("Total possible games: {}", outcome.total_leaves);
        println!(
            "Total time for algorithm to run was: {:.3} s",
            outcome.elapsed_ms as f64 / 1000.0
        );
        if outcome.cancelled {
            println!("Search was interrupted; counts are partial.");
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let start = match cli.position.as_deref() {
        Some(diagram) => GameState::from_diagram(diagram)
            .with_context(|| format!("could not parse --position {diagram:?}"))?,
        None => GameState::from_layout(cli.layout.into()),
    };

    if cli.show_board {
        println!("{}\n", render_board(&start.board));
    }

    let stop_flag = Arc::new(AtomicBool::new(false));
    {
        let stop_flag = Arc::clone(&stop_flag);
        ctrlc::set_handler(move || stop_flag.store(true, Ordering::Relaxed))
            .context("failed to install Ctrl-C handler")?;
    }

    let config = SearchConfig {
        depth_limit: cli.depth,
        stop_flag: Some(stop_flag),
    };

    if cli.quiet {
        run_search_from(start, &config, &mut LoggingObserver)?;
    } else {
        let mut reporter = ConsoleReporter {
            start: start.clone(),
            show_board: cli.show_board,
        };
        run_search_from(start, &config, &mut reporter)?;
    }

    Ok(())
}
