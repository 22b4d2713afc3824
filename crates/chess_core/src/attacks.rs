//! Attack geometry for single pieces.
//!
//! Thin dispatch over the cozy-chess lookup tables:
//! - Knight and king attacks (fixed pattern)
//! - Pawn attacks (fixed pattern, per color)
//! - Bishop, rook and queen attacks (sliding, blocked by `occupied`)
//!
//! Sliding attacks include the first blocker in each direction regardless of
//! its color, so the same set answers both "what can this piece capture" and
//! "which friendly pieces does it defend".

use cozy_chess::{
    BitBoard, Color, Piece, Square, get_bishop_moves, get_king_moves, get_knight_moves,
    get_pawn_attacks, get_rook_moves,
};

/// Squares attacked by a `color` `piece` standing on `sq`.
#[inline]
pub fn piece_attacks(piece: Piece, color: Color, sq: Square, occupied: BitBoard) -> BitBoard {
    match piece {
        Piece::Pawn => get_pawn_attacks(sq, color),
        Piece::Knight => get_knight_moves(sq),
        Piece::Bishop => get_bishop_moves(sq, occupied),
        Piece::Rook => get_rook_moves(sq, occupied),
        Piece::Queen => get_bishop_moves(sq, occupied) | get_rook_moves(sq, occupied),
        Piece::King => get_king_moves(sq),
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
