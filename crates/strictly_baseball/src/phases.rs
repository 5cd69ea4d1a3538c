//! Outcome of a finished round.

use super::types::Secret;
use serde::{Deserialize, Serialize};

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// Solved with three strikes.
    Won {
        /// Attempts used, including the winning one.
        attempts: u32,
    },
    /// Every attempt used without a solve.
    Lost {
        /// The secret, revealed.
        secret: Secret,
    },
}

impl Outcome {
    /// Returns true if the round was won.
    pub fn is_won(&self) -> bool {
        matches!(self, Outcome::Won { .. })
    }

    /// Returns true if the round was lost.
    pub fn is_lost(&self) -> bool {
        matches!(self, Outcome::Lost { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { attempts } => write!(f, "Won in {} attempts", attempts),
            Outcome::Lost { secret } => write!(f, "Lost, the secret was {}", secret),
        }
    }
}
