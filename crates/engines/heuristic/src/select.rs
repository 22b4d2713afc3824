//! Move selector: rank every legal move by weight and play the best one.

use chess_core::{Board, Move};
use tracing::debug;

use crate::config::HeuristicConfig;
use crate::error::{HeuristicError, HeuristicResult};
use crate::history::MoveHistory;
use crate::score::weight;
use crate::snapshot::Snapshot;

/// A candidate move with its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub weight: i32,
}

/// All moves in selection order: descending weight, ties kept in the order
/// they were supplied.
pub fn rank(
    board: &Board,
    legal: &[Move],
    history: &MoveHistory,
    config: &HeuristicConfig,
) -> HeuristicResult<Vec<ScoredMove>> {
    if legal.is_empty() {
        return Err(HeuristicError::NoLegalMoves);
    }

    let snap = Snapshot::new(board, config);
    let mut scored = legal
        .iter()
        .map(|&mv| {
            Ok(ScoredMove {
                mv,
                weight: weight(&snap, mv, history)?,
            })
        })
        .collect::<HeuristicResult<Vec<_>>>()?;

    // Stable sort keeps input order among equal weights.
    scored.sort_by(|a, b| b.weight.cmp(&a.weight));
    Ok(scored)
}

/// Pick the best move and record it in `history`.
pub fn choose_move(
    board: &Board,
    legal: &[Move],
    history: &mut MoveHistory,
    config: &HeuristicConfig,
) -> HeuristicResult<ScoredMove> {
    let ranked = rank(board, legal, history, config)?;
    let best = ranked[0];
    history.record(best.mv);
    debug!(
        mv = %best.mv,
        weight = best.weight,
        candidates = ranked.len(),
        "chose move"
    );
    Ok(best)
}

/// Owns the configuration and the move history of one game session.
#[derive(Debug, Clone, Default)]
pub struct MoveSelector {
    config: HeuristicConfig,
    history: MoveHistory,
}

impl MoveSelector {
    pub fn new(config: HeuristicConfig) -> Self {
        Self {
            config,
            history: MoveHistory::new(),
        }
    }

    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut HeuristicConfig {
        &mut self.config
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Rank without recording anything.
    pub fn rank(&self, board: &Board, legal: &[Move]) -> HeuristicResult<Vec<ScoredMove>> {
        rank(board, legal, &self.history, &self.config)
    }

    pub fn choose_move(&mut self, board: &Board, legal: &[Move]) -> HeuristicResult<ScoredMove> {
        choose_move(board, legal, &mut self.history, &self.config)
    }

    /// Forget the moves of the previous game.
    pub fn new_game(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
