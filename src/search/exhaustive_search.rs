//! Depth-bounded exhaustive backtracking search.
//!
//! Enumerates every move sequence up to `depth_limit` plies with a single
//! `GameState` mutated in place and restored on each backtrack. Every node
//! at which recursion stops (bound exceeded or puzzle solved) counts as one
//! leaf, so transpositions are counted once per path. Each terminal node
//! strictly shallower than the best so far is reported immediately.
//!
//! There is no pruning, ordering, or transposition table: traversal order is
//! exactly the generator's enumeration order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::errors::PuzzleResult;
use crate::game_state::game_state::GameState;
use crate::game_state::puzzle_rules::DEFAULT_DEPTH_LIMIT;
use crate::game_state::puzzle_types::Move;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_generator::PuzzleMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::search_observer::{NullObserver, SearchObserver};

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub depth_limit: u32,
    /// Checked at the top of every node; once set the search unwinds.
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
            stop_flag: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth_limit(depth_limit: u32) -> Self {
        Self {
            depth_limit,
            ..Self::default()
        }
    }
}

/// A new shortest solution: its depth and the moves that reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionReport {
    pub depth: u32,
    pub move_history: Vec<UndoState>,
}

impl SolutionReport {
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.move_history.iter().map(|undo| undo.mv)
    }

    pub fn history_string(&self) -> String {
        let entries: Vec<String> = self.move_history.iter().map(ToString::to_string).collect();
        format!("[{}]", entries.join(", "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub total_leaves: u64,
    /// Record solutions in discovery order; depths strictly decrease.
    pub reports: Vec<SolutionReport>,
    pub elapsed_ms: u64,
    pub cancelled: bool,
}

impl SearchOutcome {
    pub fn best_depth(&self) -> Option<u32> {
        self.reports.last().map(|report| report.depth)
    }
}

/// Running counters threaded through the recursion by value.
#[derive(Debug, Clone, Copy, Default)]
struct SearchTally {
    leaves: u64,
    best_depth: Option<u32>,
}

struct SearchContext<'a, G, O> {
    generator: &'a G,
    observer: &'a mut O,
    depth_limit: u32,
    stop_flag: Option<&'a AtomicBool>,
    // History entries below this index predate the search.
    history_base: usize,
    reports: Vec<SolutionReport>,
    cancelled: bool,
}

impl<G, O: SearchObserver> SearchContext<'_, G, O> {
    #[inline]
    fn stop_requested(&self) -> bool {
        self.stop_flag.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn record_solution(&mut self, game_state: &GameState, depth: u32) {
        let report = SolutionReport {
            depth,
            move_history: game_state.move_history[self.history_base..].to_vec(),
        };
        debug!("new shortest solution at depth {depth}: {}", report.history_string());
        self.observer.on_solution(&report);
        self.reports.push(report);
    }
}

/// Runs the full traversal from `GameState::new_game()`.
pub fn run_search(depth_limit: u32) -> PuzzleResult<SearchOutcome> {
    run_search_from(
        GameState::new_game(),
        &SearchConfig::with_depth_limit(depth_limit),
        &mut NullObserver,
    )
}

pub fn run_search_from<O: SearchObserver>(
    mut game_state: GameState,
    config: &SearchConfig,
    observer: &mut O,
) -> PuzzleResult<SearchOutcome> {
    exhaustive_search(&mut game_state, &PuzzleMoveGenerator, config, observer)
}

/// Searches from the current position of `game_state`, which is back in
/// that position when the call returns `Ok`, cancelled or not.
pub fn exhaustive_search<G: MoveGenerator, O: SearchObserver>(
    game_state: &mut GameState,
    generator: &G,
    config: &SearchConfig,
    observer: &mut O,
) -> PuzzleResult<SearchOutcome> {
    let started_at = Instant::now();
    info!(
        "search started: depth_limit={} position={}",
        config.depth_limit,
        game_state.get_diagram()
    );

    let mut ctx = SearchContext {
        generator,
        observer,
        depth_limit: config.depth_limit,
        stop_flag: config.stop_flag.as_deref(),
        history_base: game_state.depth(),
        reports: Vec::new(),
        cancelled: false,
    };

    let tally = search_node(game_state, &mut ctx, 0, SearchTally::default())?;

    let outcome = SearchOutcome {
        total_leaves: tally.leaves,
        reports: ctx.reports,
        elapsed_ms: saturating_millis(started_at.elapsed()),
        cancelled: ctx.cancelled,
    };

    if outcome.cancelled {
        warn!("search cancelled after {} leaves", outcome.total_leaves);
    }
    info!(
        "search finished: leaves={} best_depth={:?} elapsed_ms={}",
        outcome.total_leaves,
        outcome.best_depth(),
        outcome.elapsed_ms
    );

    ctx.observer.on_complete(&outcome);
    Ok(outcome)
}

#[inline]
fn saturating_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn search_node<G: MoveGenerator, O: SearchObserver>(
    game_state: &mut GameState,
    ctx: &mut SearchContext<'_, G, O>,
    depth: u32,
    mut tally: SearchTally,
) -> PuzzleResult<SearchTally> {
    if ctx.stop_requested() {
        ctx.cancelled = true;
        return Ok(tally);
    }

    let terminal = game_state.is_terminal();
    if depth > ctx.depth_limit || terminal {
        // Solutions reached one ply past the bound are reported too.
        let improves = tally.best_depth.map_or(true, |best| depth < best);
        if terminal && improves {
            ctx.record_solution(game_state, depth);
            tally.best_depth = Some(depth);
        }
        tally.leaves += 1;
        return Ok(tally);
    }

    for mv in ctx.generator.generate_moves(game_state) {
        game_state.make_move(mv)?;
        tally = search_node(game_state, ctx, depth + 1, tally)?;
        game_state.undo_move()?;

        if ctx.cancelled {
            break;
        }
    }

    Ok(tally)
}
