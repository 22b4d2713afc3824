use cozy_chess::{Board, Move};

/// Generate all legal moves, returning a freshly allocated vector.
///
/// The order is fixed for a given position, so callers that break ties by
/// input order stay deterministic across runs.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(board: &Board, out: &mut Vec<Move>) {
    out.clear();
    board.generate_moves(|moves| {
        out.extend(moves);
        false
    });
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
