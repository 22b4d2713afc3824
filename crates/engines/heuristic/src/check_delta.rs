//! Does a move bring a piece to bear on the squares around the enemy king?

use chess_core::{piece_attacks, BitBoard, Color, Piece, Square};

use crate::config::KingZone;
use crate::snapshot::Snapshot;

/// Squares counted as "near" a king standing on `king`.
pub fn king_zone(king: Square, shape: KingZone) -> BitBoard {
    let k = king.bitboard();
    match shape {
        KingZone::Cross => {
            let bits = k.0;
            // Unmasked shifts: ±1 wraps between the a- and h-files.
            BitBoard(bits | (bits << 1) | (bits >> 1) | (bits << 8) | (bits >> 8))
        }
        // King steps are the same for both colors.
        KingZone::Ring => k | piece_attacks(Piece::King, Color::White, king, BitBoard::EMPTY),
    }
}

/// +1 if moving `piece` from `from` to `to` starts pressuring the king zone,
/// -1 if it stops doing so, 0 otherwise.
pub fn check_delta(snap: &Snapshot<'_>, piece: Piece, from: Square, to: Square) -> i32 {
    let current = !(snap.attacks(piece, from) & snap.king_zone).is_empty();
    let future = !(snap.attacks(piece, to) & snap.king_zone).is_empty();
    match (current, future) {
        (false, true) => 1,
        (true, false) => -1,
        _ => 0,
    }
}

#[cfg(test)]
#[path = "check_delta_tests.rs"]
mod check_delta_tests;
