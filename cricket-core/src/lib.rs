//! Ball-by-ball cricket match engine.
//!
//! The main entry point for interactive play is [`engine::MatchEngine`];
//! [`state::Match`] is the underlying immutable match value.

pub mod commentary;
pub mod engine;
pub mod error;
pub mod innings;
pub mod match_logger;
pub mod model;
pub mod mood;
pub mod rules;
pub mod sim;
pub mod source;
pub mod state;
pub mod stats;
pub mod store;
pub mod tables;
pub mod trajectory;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::engine::{Awaiting, EngineOptions, MatchEngine, StepResult};
    pub use crate::error::{EngineError, ParseError, StoreError, TableError};
    pub use crate::innings::Innings;
    pub use crate::model::{Action, Delivery, MatchResult, Mode, Mood, Outcome, Phase, RiskTier};
    pub use crate::rules::MatchRules;
    pub use crate::sim::BallInput;
    pub use crate::source::{BallSource, RngSource, ScriptedSource};
    pub use crate::state::{Match, Opening, Snapshot};
    pub use crate::stats::CareerStats;
    pub use crate::store::StatsStore;
    pub use crate::trajectory::BallTrajectory;
}
