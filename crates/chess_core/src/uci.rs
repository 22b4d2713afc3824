use std::fmt;
use std::time::Duration;

use cozy_chess::{Board, Color, Move, Piece};
use thiserror::Error;

use crate::{facts::MoveFacts, movegen::legal_moves, time_control::SearchLimits};

/// Errors raised while applying a `position` command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UciError {
    #[error("invalid FEN {fen:?}")]
    InvalidFen { fen: String },
    #[error("illegal move {mv:?} in position command")]
    IllegalMove { mv: String },
    #[error("position command needs `startpos` or `fen`")]
    MissingPosition,
}

/// Standard UCI notation. Castling is written as the king's two-square step.
pub fn move_to_uci(board: &Board, mv: Move) -> String {
    let to = match MoveFacts::of(board, mv) {
        Some(facts) if facts.is_castle => facts.landing,
        _ => mv.to,
    };
    let mut s = format!("{}{}", mv.from, to);
    if let Some(p) = mv.promotion {
        let ch = match p {
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            _ => 'q',
        };
        s.push(ch);
    }
    s
}

pub fn parse_uci_move(board: &Board, txt: &str) -> Option<Move> {
    // Match against legal moves so castling maps onto the board's encoding.
    let txt = txt.to_ascii_lowercase();
    legal_moves(board)
        .into_iter()
        .find(|&mv| move_to_uci(board, mv) == txt)
}

/// Apply `position startpos|fen <fen> [moves ...]` (arguments after `position`).
pub fn set_position_from_uci(board: &mut Board, args: &[&str]) -> Result<(), UciError> {
    let moves_at = args.iter().position(|&x| x == "moves").unwrap_or(args.len());
    let mut next = match args.first() {
        Some(&"startpos") => Board::default(),
        Some(&"fen") => {
            let fen = args[1..moves_at].join(" ");
            Board::from_fen(&fen, false).map_err(|_| UciError::InvalidFen { fen })?
        }
        _ => return Err(UciError::MissingPosition),
    };

    for txt in args.iter().skip(moves_at + 1) {
        let mv = parse_uci_move(&next, txt).ok_or_else(|| UciError::IllegalMove {
            mv: (*txt).to_string(),
        })?;
        next.play_unchecked(mv);
    }

    *board = next;
    Ok(())
}

/// Read the time budget out of `go` arguments for the side to move.
pub fn parse_go(args: &[&str], side: Color) -> SearchLimits {
    let millis = |key: &str| -> Option<Duration> {
        let idx = args.iter().position(|&x| x == key)?;
        let ms: u64 = args.get(idx + 1)?.parse().ok()?;
        Some(Duration::from_millis(ms))
    };

    let (time_key, inc_key) = match side {
        Color::White => ("wtime", "winc"),
        Color::Black => ("btime", "binc"),
    };

    if let Some(fixed) = millis("movetime") {
        SearchLimits::move_time(fixed)
    } else if let Some(remaining) = millis(time_key) {
        SearchLimits::from_clock(remaining, millis(inc_key).unwrap_or_default())
    } else {
        SearchLimits::infinite()
    }
}

/// Split `setoption name <id> [value <x>]` arguments into name and value.
///
/// Returns None when the name is missing or empty, or when `value` comes
/// before `name`.
pub fn parse_setoption(args: &[&str]) -> Option<(String, String)> {
    let name_at = args.iter().position(|&x| x == "name")?;
    let value_at = args.iter().position(|&x| x == "value");
    let name_end = match value_at {
        Some(i) if i < name_at => return None,
        Some(i) => i,
        None => args.len(),
    };
    let name = args[name_at + 1..name_end].join(" ");
    if name.is_empty() {
        return None;
    }
    let value = value_at
        .map(|i| args[i + 1..].join(" "))
        .unwrap_or_default();
    Some((name, value))
}

/// An engine option advertised in response to `uci`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciOption {
    Spin {
        name: &'static str,
        default: i64,
        min: i64,
        max: i64,
    },
    Combo {
        name: &'static str,
        default: String,
        vars: Vec<&'static str>,
    },
}

impl fmt::Display for UciOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciOption::Spin {
                name,
                default,
                min,
                max,
            } => write!(
                f,
                "option name {name} type spin default {default} min {min} max {max}"
            ),
            UciOption::Combo {
                name,
                default,
                vars,
            } => {
                write!(f, "option name {name} type combo default {default}")?;
                for var in vars {
                    write!(f, " var {var}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
