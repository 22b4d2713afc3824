pub mod attacks;
pub mod facts;
pub mod movegen;
pub mod time_control;
pub mod uci;

// Board representation and attack geometry come from cozy-chess.
pub use cozy_chess::{BitBoard, Board, Color, File, Move, Piece, Rank, Square};

pub use attacks::*;
pub use facts::MoveFacts;
pub use movegen::*;
pub use time_control::*;
pub use uci::*;

// =============================================================================
// Engine trait, implemented by every engine hosted behind the UCI front end
// =============================================================================

/// Result of a move decision
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None if the position has no legal moves)
    pub best_move: Option<Move>,
    /// Engine-specific score of the chosen move
    pub score: i32,
    /// Depth the engine looked ahead (recursion budget for heuristic engines)
    pub depth: u8,
    /// Number of candidate moves evaluated
    pub nodes: u64,
}

impl SearchResult {
    /// Result reported when the side to move has no legal moves.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
        }
    }
}

/// Trait that all chess engines must implement.
///
/// The host owns the board; engines only borrow it for the duration of
/// one decision and must not rely on it afterwards.
pub trait Engine: Send {
    /// Pick a move for the side to move.
    ///
    /// # Arguments
    /// * `board` - The current position, read-only for the whole call
    /// * `limits` - Time budget supplied by the host
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game (move history, counters, etc.)
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }

    /// Options advertised in response to `uci`.
    fn options(&self) -> Vec<UciOption> {
        Vec::new()
    }
}
