//! Move scorer: one integer weight per candidate move, higher is better.

use chess_core::{Color, Move, MoveFacts, Piece};
use tracing::trace;

use crate::check_delta::check_delta;
use crate::config::Variant;
use crate::error::{HeuristicError, HeuristicResult};
use crate::history::MoveHistory;
use crate::propagate::recurse_moves;
use crate::snapshot::Snapshot;
use crate::threat::{classify, hit};

/// Weight of `mv` in the snapshot's position. Pure: the same board, move
/// and history always give the same weight.
pub fn weight(snap: &Snapshot<'_>, mv: Move, history: &MoveHistory) -> HeuristicResult<i32> {
    let facts = MoveFacts::of(snap.board, mv)
        .ok_or(HeuristicError::EmptyStartSquare { square: mv.from })?;

    let weight = match snap.config.variant {
        Variant::Refined => refined(snap, &facts, history),
        Variant::Classic => classic(snap, &facts),
    };
    trace!(mv = %mv, weight, "scored move");
    Ok(weight)
}

/// Penalties for moving the king or queen and for replaying a move, tactical
/// potential of the moving piece, material won, and the change in exposure
/// between start and landing square scaled by what the moving piece is worth.
fn refined(snap: &Snapshot<'_>, facts: &MoveFacts, history: &MoveHistory) -> i32 {
    let config = snap.config;
    let values = &config.piece_values;
    let from = facts.mv.from;
    let piece_value = values.of(facts.piece);

    let mut penalty = 0;
    match facts.piece {
        Piece::King => penalty += config.king_move_penalty,
        Piece::Queen => penalty += config.queen_move_penalty,
        _ => {}
    }
    if history.contains(&facts.mv) {
        penalty += config.repetition_penalty;
    }

    let potential = recurse_moves(snap, facts.piece, from, from, config.recursion_depth);
    let capture = facts.captured.map_or(0, |p| values.of(p));
    let exposure = classify(snap, from).lethality() - classify(snap, facts.landing).lethality();
    let king_pressure = check_delta(snap, facts.piece, from, facts.landing);

    -penalty
        + potential
        + capture
        + exposure * piece_value
        + config.check_weight * king_pressure
}

/// The early heuristic: push forward, capture, promote, stay off and get
/// away from attacked squares. Play style comes from `aggression` and `defense`.
fn classic(snap: &Snapshot<'_>, facts: &MoveFacts) -> i32 {
    let config = snap.config;
    let rank = facts.landing.rank() as i32;
    let progress = match facts.color {
        Color::White => rank,
        Color::Black => 8 - rank,
    };
    let advances = i32::from(facts.piece != Piece::King);
    let capture = facts.captured.map_or(0, |p| config.piece_values.of(p));
    let promotion = if facts.promotion.is_some() { config.promotion_bonus } else { 0 };

    (config.aggression - config.defense + 1) * advances * progress
        + config.aggression * capture
        + promotion
        - (config.lethal_base - config.aggression) * hit(snap, facts.landing)
        + 2 * config.defense * hit(snap, facts.mv.from)
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod score_tests;
