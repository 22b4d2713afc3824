//! Shallow threat propagation.
//!
//! Follows a piece along its own attack lines for a few hops, as if the
//! opponent never replied, and reports whether it runs into an enemy piece.
//! Blocking and legality beyond the attack pattern are ignored; the board
//! itself never changes, so the decreasing depth is the only bound needed.

use chess_core::{Piece, Square};

use crate::check_delta::check_delta;
use crate::snapshot::Snapshot;

/// Tactical potential of the mover's `piece` (really standing on `origin`)
/// if it were on `square`, looking at most `depth` hops ahead.
///
/// Returns `1 + check_delta(origin -> contact square)` at the first square
/// whose attacks touch an enemy piece, searching attack squares in ascending
/// index order, or 0 when nothing is reached. Kings are never propagated.
pub fn recurse_moves(
    snap: &Snapshot<'_>,
    piece: Piece,
    origin: Square,
    square: Square,
    depth: u8,
) -> i32 {
    if depth == 0 || piece == Piece::King {
        return 0;
    }

    let attacks = snap.attacks(piece, square);
    if !(attacks & snap.enemy).is_empty() {
        return 1 + check_delta(snap, piece, origin, square);
    }

    for next in attacks {
        let found = recurse_moves(snap, piece, origin, next, depth - 1);
        if found != 0 {
            return found;
        }
    }
    0
}

#[cfg(test)]
#[path = "propagate_tests.rs"]
mod propagate_tests;
