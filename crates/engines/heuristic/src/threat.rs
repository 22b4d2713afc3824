//! Threat classifier: who attacks a square, from the mover's point of view.

use chess_core::{piece_attacks, Square};

use crate::snapshot::Snapshot;

/// Whether a square is attacked by the opponent and/or covered by the mover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Threat {
    pub attacked: bool,
    pub defended: bool,
}

impl Threat {
    /// `attacked - 2 * defended`: positive only for squares the opponent
    /// hits and the mover does not cover.
    #[inline]
    pub fn lethality(self) -> i32 {
        i32::from(self.attacked) - 2 * i32::from(self.defended)
    }
}

/// Scan every piece on the board and record whether its attack set hits `sq`.
///
/// The moving piece itself is included, so the destination of a move usually
/// counts as defended by the piece that is about to land there.
pub fn classify(snap: &Snapshot<'_>, sq: Square) -> Threat {
    let board = snap.board;
    let mut threat = Threat::default();

    for from in snap.occupied {
        let (Some(piece), Some(color)) = (board.piece_on(from), board.color_on(from)) else {
            continue;
        };
        let is_own = color == snap.mover;
        // Both answers known; nothing left to learn from this side.
        if (is_own && threat.defended) || (!is_own && threat.attacked) {
            continue;
        }
        if piece_attacks(piece, color, from, snap.occupied).has(sq) {
            if is_own {
                threat.defended = true;
            } else {
                threat.attacked = true;
            }
        }
        if threat.attacked && threat.defended {
            break;
        }
    }

    threat
}

/// Early single-boolean form: 1 if any opponent piece attacks `sq`.
pub fn hit(snap: &Snapshot<'_>, sq: Square) -> i32 {
    i32::from(classify(snap, sq).attacked)
}

#[cfg(test)]
#[path = "threat_tests.rs"]
mod threat_tests;
