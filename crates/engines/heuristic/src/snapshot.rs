use chess_core::{piece_attacks, BitBoard, Board, Color, Piece, Square};

use crate::check_delta::king_zone;
use crate::config::HeuristicConfig;

/// Read-only view of one decision: the board, the side choosing a move and
/// the bitboards every heuristic needs, computed once per decision.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub config: &'a HeuristicConfig,
    pub mover: Color,
    pub occupied: BitBoard,
    /// Squares holding the mover's opponents
    pub enemy: BitBoard,
    /// Squares counted as "near" the opponent king
    pub king_zone: BitBoard,
}

impl<'a> Snapshot<'a> {
    pub fn new(board: &'a Board, config: &'a HeuristicConfig) -> Self {
        let mover = board.side_to_move();
        Self {
            board,
            config,
            mover,
            occupied: board.occupied(),
            enemy: board.colors(!mover),
            king_zone: king_zone(board.king(!mover), config.king_zone),
        }
    }

    /// Attacks of a mover's `piece` standing on `sq`, under the current
    /// occupancy. The piece is not lifted from its real square.
    #[inline]
    pub fn attacks(&self, piece: Piece, sq: Square) -> BitBoard {
        piece_attacks(piece, self.mover, sq, self.occupied)
    }
}
