//! Error types shared by the engine, the tables and the stats store.

use crate::model::{Delivery, Phase};
use thiserror::Error;

/// A call the engine refused. The match is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("the match is already over")]
    MatchOver,

    #[error("a ball is already being resolved")]
    BallInProgress,

    #[error("no ball is waiting to be settled")]
    NoBallInProgress,

    #[error("the player is not batting in phase {phase:?}")]
    NotBatting { phase: Phase },

    #[error("the player is not bowling in phase {phase:?}")]
    NotBowling { phase: Phase },

    #[error("no incoming delivery has been revealed")]
    NoIncomingDelivery,

    #[error("an incoming delivery has already been revealed")]
    DeliveryAlreadyRevealed,

    #[error("incoming deliveries only exist in full-match mode")]
    NotFullMatch,

    #[error("the shot must be played against the revealed {revealed}")]
    DeliveryMismatch { revealed: Delivery },
}

/// Unknown name at the string boundary (CLI input, rules files).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown shot '{0}'")]
    UnknownAction(String),

    #[error("unknown delivery '{0}'")]
    UnknownDelivery(String),

    #[error("unknown mode '{0}'")]
    UnknownMode(String),
}

/// Rejected weight table or rule set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("weight table is empty")]
    Empty,

    #[error("weight {weight} at index {index} is negative or not finite")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("all weights are zero")]
    AllZero,

    #[error("invalid match rules: {0}")]
    InvalidRules(&'static str),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
