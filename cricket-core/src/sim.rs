//! Per-ball resolution shared by every mode.
//!
//! Each mode only decides which [`BallInput`] it feeds in and whether the ball
//! belongs to a full match. The input picks the weight table, mood is modeled
//! exactly when the computer is batting, and full-match balls carry the
//! shot/delivery headline in commentary plus a trajectory.

use crate::commentary::{phrase, Subject};
use crate::innings::Innings;
use crate::model::{Action, Delivery, Mood, Outcome};
use crate::rules::MatchRules;
use crate::source::BallSource;
use crate::tables::{batting_table, delivery_table, joint_table, WeightTable};
use crate::trajectory::{trajectory, BallTrajectory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What was chosen for one ball.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BallInput {
    /// Batting-only mode: the bowler is abstracted away.
    Shot(Action),
    /// The player bowls to the computer batsman.
    Delivery(Delivery),
    /// Full-match batting: the shot is played against a revealed delivery.
    ShotAgainst { action: Action, delivery: Delivery },
}

impl BallInput {
    pub fn table(self) -> &'static WeightTable {
        match self {
            BallInput::Shot(action) => batting_table(action),
            BallInput::Delivery(delivery) => delivery_table(delivery),
            BallInput::ShotAgainst { action, delivery } => joint_table(action, delivery),
        }
    }

    /// Only the computer batsman has a mood.
    pub fn models_mood(self) -> bool {
        matches!(self, BallInput::Delivery(_))
    }

    pub fn shot(self) -> Option<Action> {
        match self {
            BallInput::Shot(action) | BallInput::ShotAgainst { action, .. } => Some(action),
            BallInput::Delivery(_) => None,
        }
    }

    pub fn delivery(self) -> Option<Delivery> {
        match self {
            BallInput::Delivery(delivery) | BallInput::ShotAgainst { delivery, .. } => {
                Some(delivery)
            }
            BallInput::Shot(_) => None,
        }
    }

    fn subject(self) -> Subject {
        match self {
            BallInput::Shot(action) | BallInput::ShotAgainst { action, .. } => {
                Subject::Shot(action)
            }
            BallInput::Delivery(delivery) => Subject::Delivery(delivery),
        }
    }
}

impl fmt::Display for BallInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BallInput::Shot(action) => write!(f, "{action}"),
            BallInput::Delivery(delivery) => write!(f, "{delivery}"),
            BallInput::ShotAgainst { action, delivery } => write!(f, "{action} vs {delivery}"),
        }
    }
}

/// Everything one resolved ball produced.
#[derive(Clone, Debug, PartialEq)]
pub struct BallReport {
    pub innings: Innings,
    pub outcome: Outcome,
    pub label: &'static str,
    /// Over.ball-prefixed commentary line.
    pub commentary: String,
    /// Batsman mood going into the next ball.
    pub mood: Mood,
    pub trajectory: Option<BallTrajectory>,
}

/// Resolve one ball against `innings`. Termination is left to the caller.
pub fn resolve_ball<S: BallSource + ?Sized>(
    innings: Innings,
    mood: Mood,
    input: BallInput,
    full_match: bool,
    rules: &MatchRules,
    source: &mut S,
) -> BallReport {
    let modeled_mood = input.models_mood().then_some(mood);
    let outcome = source.outcome(input.table(), modeled_mood);
    let innings = innings.with_ball(outcome, rules);

    let line = phrase(input.subject(), outcome, source);
    let commentary = if full_match {
        format!("{} - {}: {}", innings.overs_text(), input, line)
    } else {
        format!("{} - {}", innings.overs_text(), line)
    };

    let mood = if input.models_mood() {
        Mood::after(outcome, source)
    } else {
        mood
    };
    let trajectory = full_match.then(|| trajectory(outcome, input.shot(), source));

    BallReport {
        innings,
        outcome,
        label: outcome.label(),
        commentary,
        mood,
        trajectory,
    }
}
