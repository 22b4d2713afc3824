use std::collections::HashSet;

use chess_core::Move;

/// Moves this engine has already chosen in the current game.
///
/// Compared by value (from, to, promotion), independent of position. Grows
/// for the whole game and is only cleared when a new game starts.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    played: HashSet<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.played.contains(mv)
    }

    /// Returns false if the move was already recorded.
    pub fn record(&mut self, mv: Move) -> bool {
        self.played.insert(mv)
    }

    pub fn len(&self) -> usize {
        self.played.len()
    }

    pub fn is_empty(&self) -> bool {
        self.played.is_empty()
    }

    pub fn clear(&mut self) {
        self.played.clear();
    }
}
