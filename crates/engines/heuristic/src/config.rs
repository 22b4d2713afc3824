//! Tunable weights of the move heuristics.
//!
//! Every constant that shapes play style lives here so it can be changed
//! from a TOML file or a UCI `setoption` without touching the scorer.
//!
//! ```toml
//! variant = "refined"
//! recursion_depth = 4
//! king_zone = "cross"
//!
//! [piece_values]
//! queen = 9
//! ```

use std::ops::RangeInclusive;
use std::path::Path;
use std::str::FromStr;

use chess_core::{Piece, UciOption};
use serde::Deserialize;

use crate::error::ConfigError;

/// Upper bound on the propagation depth; cost grows with branching^depth.
pub const MAX_RECURSION_DEPTH: u8 = 5;

// Accepted ranges. They keep every weight well inside i32 arithmetic.
const PIECE_VALUE_RANGE: RangeInclusive<i32> = 0..=100;
const PENALTY_RANGE: RangeInclusive<i32> = 0..=1000;
const CHECK_WEIGHT_RANGE: RangeInclusive<i32> = 0..=20;
const PROMOTION_BONUS_RANGE: RangeInclusive<i32> = 0..=100;
const STYLE_RANGE: RangeInclusive<i32> = 0..=10;
const LETHAL_BASE_RANGE: RangeInclusive<i32> = 0..=100;

/// Scoring formula used by the move scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Penalties, threat propagation, lethality scaled by piece value and
    /// the king-zone delta.
    #[default]
    Refined,
    /// Forward progress, captures and lethal-square avoidance scaled by
    /// `aggression` and `defense`.
    Classic,
}

/// Shape of the squares around the enemy king that count as "near" it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KingZone {
    /// King square plus one-bit and one-rank shifts. The file shifts wrap
    /// across the board edge (an h-file king also marks the a-file square
    /// one rank up).
    #[default]
    Cross,
    /// King square plus its eight neighbours, clipped at the edges.
    Ring,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Refined => "refined",
            Variant::Classic => "classic",
        }
    }
}

impl FromStr for Variant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "refined" => Ok(Variant::Refined),
            "classic" => Ok(Variant::Classic),
            _ => Err(()),
        }
    }
}

impl KingZone {
    pub fn as_str(self) -> &'static str {
        match self {
            KingZone::Cross => "cross",
            KingZone::Ring => "ring",
        }
    }
}

impl FromStr for KingZone {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cross" => Ok(KingZone::Cross),
            "ring" => Ok(KingZone::Ring),
            _ => Err(()),
        }
    }
}

/// Material value per piece kind, used both for what a move captures and
/// for how much is at stake when the moving piece stands on a contested square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub king: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 1,
            knight: 3,
            bishop: 3,
            rook: 5,
            queen: 9,
            king: 10,
        }
    }
}

impl PieceValues {
    #[inline]
    pub fn of(&self, piece: Piece) -> i32 {
        match piece {
            Piece::Pawn => self.pawn,
            Piece::Knight => self.knight,
            Piece::Bishop => self.bishop,
            Piece::Rook => self.rook,
            Piece::Queen => self.queen,
            Piece::King => self.king,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeuristicConfig {
    pub variant: Variant,
    /// Hops the threat propagator may take from the moving piece's square.
    pub recursion_depth: u8,
    /// Subtracted from every king move.
    pub king_move_penalty: i32,
    /// Subtracted from every queen move.
    pub queen_move_penalty: i32,
    /// Subtracted from a move already played this game.
    pub repetition_penalty: i32,
    /// Multiplier on the king-zone delta of the move itself.
    pub check_weight: i32,
    /// Classic variant: added to every promotion.
    pub promotion_bonus: i32,
    /// Classic variant: appetite for captures and forward moves.
    pub aggression: i32,
    /// Classic variant: weight on leaving and avoiding attacked squares.
    pub defense: i32,
    /// Classic variant: lethal-square penalty is `lethal_base - aggression`.
    pub lethal_base: i32,
    pub king_zone: KingZone,
    pub piece_values: PieceValues,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Refined,
            recursion_depth: 4,
            king_move_penalty: 10,
            queen_move_penalty: 5,
            repetition_penalty: 50,
            check_weight: 2,
            promotion_bonus: 4,
            aggression: 2,
            defense: 3,
            lethal_base: 5,
            king_zone: KingZone::Cross,
            piece_values: PieceValues::default(),
        }
    }
}

impl HeuristicConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject values outside the ranges the scorer is built for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            return Err(invalid("recursion_depth", &self.recursion_depth.to_string()));
        }
        let weights = [
            ("king_move_penalty", self.king_move_penalty, PENALTY_RANGE),
            ("queen_move_penalty", self.queen_move_penalty, PENALTY_RANGE),
            ("repetition_penalty", self.repetition_penalty, PENALTY_RANGE),
            ("check_weight", self.check_weight, CHECK_WEIGHT_RANGE),
            ("promotion_bonus", self.promotion_bonus, PROMOTION_BONUS_RANGE),
            ("aggression", self.aggression, STYLE_RANGE),
            ("defense", self.defense, STYLE_RANGE),
            ("lethal_base", self.lethal_base, LETHAL_BASE_RANGE),
        ];
        for (name, value, range) in weights {
            if !range.contains(&value) {
                return Err(invalid(name, &value.to_string()));
            }
        }
        for piece in Piece::ALL {
            let value = self.piece_values.of(piece);
            if !PIECE_VALUE_RANGE.contains(&value) {
                let name = format!("piece_values.{piece:?}").to_ascii_lowercase();
                return Err(invalid(&name, &value.to_string()));
            }
        }
        Ok(())
    }

    /// Apply a UCI `setoption`. Option names are case-insensitive; the
    /// config is left unchanged when the value is rejected.
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let mut next = self.clone();
        match name.to_ascii_lowercase().as_str() {
            "aggression" => next.aggression = spin(name, value, STYLE_RANGE)?,
            "defense" => next.defense = spin(name, value, STYLE_RANGE)?,
            "recursiondepth" => {
                next.recursion_depth = spin(name, value, 0..=MAX_RECURSION_DEPTH as i32)? as u8
            }
            "repetitionpenalty" => next.repetition_penalty = spin(name, value, PENALTY_RANGE)?,
            "checkweight" => next.check_weight = spin(name, value, CHECK_WEIGHT_RANGE)?,
            "promotionbonus" => {
                next.promotion_bonus = spin(name, value, PROMOTION_BONUS_RANGE)?
            }
            "variant" => next.variant = value.parse().map_err(|_| invalid(name, value))?,
            "kingzone" => next.king_zone = value.parse().map_err(|_| invalid(name, value))?,
            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Options advertised over UCI, with the current values as defaults.
    pub fn uci_options(&self) -> Vec<UciOption> {
        let option = |name, default: i32, range: RangeInclusive<i32>| UciOption::Spin {
            name,
            default: default.into(),
            min: (*range.start()).into(),
            max: (*range.end()).into(),
        };
        vec![
            option("Aggression", self.aggression, STYLE_RANGE),
            option("Defense", self.defense, STYLE_RANGE),
            option(
                "RecursionDepth",
                self.recursion_depth.into(),
                0..=MAX_RECURSION_DEPTH.into(),
            ),
            option("RepetitionPenalty", self.repetition_penalty, PENALTY_RANGE),
            option("CheckWeight", self.check_weight, CHECK_WEIGHT_RANGE),
            option("PromotionBonus", self.promotion_bonus, PROMOTION_BONUS_RANGE),
            UciOption::Combo {
                name: "Variant",
                default: self.variant.as_str().to_string(),
                vars: vec!["refined", "classic"],
            },
            UciOption::Combo {
                name: "KingZone",
                default: self.king_zone.as_str().to_string(),
                vars: vec!["cross", "ring"],
            },
        ]
    }
}

fn invalid(name: &str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn spin(name: &str, value: &str, range: RangeInclusive<i32>) -> Result<i32, ConfigError> {
    match value.trim().parse::<i32>() {
        Ok(v) if range.contains(&v) => Ok(v),
        _ => Err(invalid(name, value)),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
