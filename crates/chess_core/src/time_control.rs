//! Per-move time budget supplied by the host.
//!
//! Engines receive the budget as `SearchLimits` and turn it into a `Clock`
//! when the decision starts. Heuristic engines finish well inside any
//! realistic budget, so the clock is informational: it is read for logging,
//! never used to cut a decision short.

use std::time::{Duration, Instant};

/// Moves assumed left in the game when budgeting from a side clock.
const MOVES_TO_GO: u32 = 30;

/// Time allowed for one decision, as handed over by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Fixed time for this move (UCI `movetime`)
    pub move_time: Option<Duration>,
    /// Remaining time on the mover's clock
    pub remaining: Option<Duration>,
    /// Increment added to the mover's clock after the move
    pub increment: Duration,
}

impl SearchLimits {
    /// No time constraint at all.
    pub fn infinite() -> Self {
        Self::default()
    }

    /// Fixed time per move.
    pub fn move_time(move_time: Duration) -> Self {
        Self {
            move_time: Some(move_time),
            ..Self::default()
        }
    }

    /// Budget derived from the mover's side clock.
    pub fn from_clock(remaining: Duration, increment: Duration) -> Self {
        Self {
            move_time: None,
            remaining: Some(remaining),
            increment,
        }
    }

    /// Time this move may take, or None when unconstrained.
    ///
    /// A fixed move time wins over the side clock; otherwise the budget is a
    /// fair share of the remaining time plus half the increment.
    pub fn budget(&self) -> Option<Duration> {
        if let Some(fixed) = self.move_time {
            return Some(fixed);
        }
        let remaining = self.remaining?;
        Some((remaining / MOVES_TO_GO + self.increment / 2).min(remaining))
    }

    /// Start the clock for one decision.
    pub fn start(&self) -> Clock {
        Clock {
            started: Instant::now(),
            budget: self.budget(),
        }
    }
}

/// Running clock for a single decision.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    started: Instant,
    budget: Option<Duration>,
}

impl Clock {
    /// Time spent since the decision started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Time left in the budget (None if unconstrained).
    pub fn remaining(&self) -> Option<Duration> {
        let budget = self.budget?;
        Some(budget.saturating_sub(self.elapsed()))
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
