//! Notifications emitted while a search runs.
//!
//! A new record solution is pushed to `on_solution` the moment it is found;
//! `on_complete` fires once with the final outcome.

use log::info;

use crate::search::exhaustive_search::{SearchOutcome, SolutionReport};

pub trait SearchObserver {
    fn on_solution(&mut self, _report: &SolutionReport) {}

    fn on_complete(&mut self, _outcome: &SearchOutcome) {}
}

pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// Forwards both notifications to the `log` facade.
pub struct LoggingObserver;

impl SearchObserver for LoggingObserver {
    fn on_solution(&mut self, report: &SolutionReport) {
        info!(
            "moves to promote queen: {} history: {}",
            report.depth,
            report.history_string()
        );
    }

    fn on_complete(&mut self, outcome: &SearchOutcome) {
        info!(
            "total possible games: {} elapsed_ms={} cancelled={}",
            outcome.total_leaves, outcome.elapsed_ms, outcome.cancelled
        );
    }
}
