//! Heuristic Chess Engine
//!
//! Scores every legal move with static and shallow-recursive heuristics and
//! plays the best one. There is no game-tree search:
//! - Threat classifier: is a square attacked by the opponent, covered by us?
//! - Check delta: does the move start or stop pressuring the enemy king zone?
//! - Threat propagation: can the moving piece reach an enemy piece in a few hops?
//! - Scorer and selector: combine the above, break ties by move order, and
//!   discourage replaying moves already made this game.

mod check_delta;
mod config;
mod error;
mod history;
mod propagate;
mod score;
mod select;
mod snapshot;
mod threat;

use chess_core::{legal_moves, Board, Engine, SearchLimits, SearchResult, UciOption};
use tracing::{debug, error, warn};

pub use check_delta::{check_delta, king_zone};
pub use config::{HeuristicConfig, KingZone, PieceValues, Variant, MAX_RECURSION_DEPTH};
pub use error::{ConfigError, HeuristicError, HeuristicResult};
pub use history::MoveHistory;
pub use propagate::recurse_moves;
pub use score::weight;
pub use select::{choose_move, rank, MoveSelector, ScoredMove};
pub use snapshot::Snapshot;
pub use threat::{classify, hit, Threat};


/// Engine front for the move selector.
///
/// Holds one game's move history; `new_game` clears it.
#[derive(Debug, Clone, Default)]
pub struct HeuristicEngine {
    selector: MoveSelector,
}

impl HeuristicEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HeuristicConfig) -> Self {
        Self {
            selector: MoveSelector::new(config),
        }
    }

    pub fn selector(&self) -> &MoveSelector {
        &self.selector
    }
}

impl Engine for HeuristicEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        let clock = limits.start();
        let legal = legal_moves(board);

        match self.selector.choose_move(board, &legal) {
            Ok(best) => {
                debug!(
                    elapsed_us = clock.elapsed().as_micros() as u64,
                    remaining_ms = clock.remaining().map(|d| d.as_millis() as u64),
                    "decision finished"
                );
                SearchResult {
                    best_move: Some(best.mv),
                    score: best.weight,
                    depth: self.selector.config().recursion_depth,
                    nodes: legal.len() as u64,
                }
            }
            Err(HeuristicError::NoLegalMoves) => SearchResult::no_move(),
            Err(err) => {
                error!(%err, "move list does not match the board");
                SearchResult::no_move()
            }
        }
    }

    fn name(&self) -> &str {
        "Heuristic v1.0"
    }

    fn author(&self) -> &str {
        "ML-chess"
    }

    fn new_game(&mut self) {
        self.selector.new_game();
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match self.selector.config_mut().apply_option(name, value) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "ignoring setoption");
                false
            }
        }
    }

    fn options(&self) -> Vec<UciOption> {
        self.selector.config().uci_options()
    }
}
