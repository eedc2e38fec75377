//! Outcome weight tables and weighted selection.
//!
//! Three families of tables ship with the game:
//! - batting-only, keyed by the shot alone (the bowler is abstracted away),
//! - delivery tables, keyed by the ball bowled to the computer batsman,
//! - the joint shot × delivery matrix used when the player bats in a full match.
//!
//! Weights are relative frequencies; they are not normalized.

use crate::error::TableError;
use crate::model::{Action, Delivery, Mood, Outcome};
use crate::source::BallSource;
use std::borrow::Cow;

/// Ordered `(Outcome, weight)` pairs. An outcome may appear more than once.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightTable {
    entries: Cow<'static, [(Outcome, f64)]>,
}

impl WeightTable {
    /// Wrap a shipped table. Shipped tables are checked by the unit tests below.
    pub const fn from_static(entries: &'static [(Outcome, f64)]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    /// Build a custom table, rejecting degenerate weights up front.
    pub fn new(entries: Vec<(Outcome, f64)>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty);
        }
        for (index, &(_, weight)) in entries.iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(TableError::InvalidWeight { index, weight });
            }
        }
        if entries.iter().all(|&(_, weight)| weight == 0.0) {
            return Err(TableError::AllZero);
        }
        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    pub fn entries(&self) -> &[(Outcome, f64)] {
        &self.entries
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|&(_, weight)| weight).sum()
    }

    /// Probability of `outcome` before any mood adjustment.
    pub fn probability(&self, outcome: Outcome) -> f64 {
        let hits: f64 = self
            .entries
            .iter()
            .filter(|(candidate, _)| *candidate == outcome)
            .map(|&(_, weight)| weight)
            .sum();
        hits / self.total_weight()
    }
}

/// Pick one outcome from `table`, scaling each weight by the mood multiplier
/// when a mood is given.
///
/// Walks the adjusted weights subtracting from a uniform draw in
/// `[0, total)`. If rounding leaves a residual after the last entry the first
/// outcome is returned.
pub fn select_outcome<S>(table: &WeightTable, mood: Option<Mood>, source: &mut S) -> Outcome
where
    S: BallSource + ?Sized,
{
    let adjusted = |outcome: Outcome, weight: f64| match mood {
        Some(mood) => weight * mood.multiplier(outcome),
        None => weight,
    };
    let entries = table.entries();
    let total: f64 = entries
        .iter()
        .map(|&(outcome, weight)| adjusted(outcome, weight))
        .sum();
    debug_assert!(total > 0.0, "weight table must have a positive total");

    let mut remaining = source.unit() * total;
    for &(outcome, weight) in entries {
        remaining -= adjusted(outcome, weight);
        if remaining <= 0.0 {
            return outcome;
        }
    }
    entries[0].0
}

macro_rules! canonical {
    ($dot:expr, $one:expr, $two:expr, $four:expr, $six:expr, $out:expr) => {
        WeightTable::from_static(&[
            (Outcome::Dot, $dot as f64),
            (Outcome::Single, $one as f64),
            (Outcome::Two, $two as f64),
            (Outcome::Four, $four as f64),
            (Outcome::Six, $six as f64),
            (Outcome::Wicket, $out as f64),
        ])
    };
}

/// Batting-only mode, indexed by [`Action`].
static BATTING_ONLY: [WeightTable; 6] = [
    // Defensive
    WeightTable::from_static(&[
        (Outcome::Dot, 40.0),
        (Outcome::Single, 35.0),
        (Outcome::Two, 15.0),
        (Outcome::Three, 5.0),
        (Outcome::Four, 3.0),
        (Outcome::Wicket, 2.0),
    ]),
    // Drive
    WeightTable::from_static(&[
        (Outcome::Dot, 20.0),
        (Outcome::Single, 25.0),
        (Outcome::Two, 25.0),
        (Outcome::Four, 10.0),
        (Outcome::Four, 15.0),
        (Outcome::Wicket, 5.0),
    ]),
    // Pull
    canonical!(15, 20, 25, 15, 15, 10),
    // Cut
    WeightTable::from_static(&[
        (Outcome::Dot, 20.0),
        (Outcome::Single, 25.0),
        (Outcome::Two, 20.0),
        (Outcome::Four, 15.0),
        (Outcome::Four, 12.0),
        (Outcome::Wicket, 8.0),
    ]),
    // Sweep
    canonical!(10, 15, 20, 15, 20, 20),
    // Slog
    canonical!(5, 10, 10, 15, 30, 30),
];

/// Ball bowled at the computer batsman, indexed by [`Delivery`].
static DELIVERY: [WeightTable; 6] = [
    canonical!(25, 20, 15, 10, 10, 20), // Yorker
    canonical!(20, 15, 15, 15, 20, 15), // Bouncer
    canonical!(30, 25, 20, 10, 5, 10),  // Spin
    canonical!(25, 20, 18, 12, 7, 18),  // Outswinger
    canonical!(22, 22, 18, 15, 8, 15),  // Inswinger
    canonical!(20, 18, 15, 20, 15, 12), // Slower
];

/// Full-match batting, `[action][delivery]`.
static JOINT: [[WeightTable; 6]; 6] = [
    // Defensive
    [
        canonical!(40, 30, 15, 5, 2, 8),
        canonical!(50, 25, 15, 5, 2, 3),
        canonical!(45, 30, 15, 5, 2, 3),
        canonical!(40, 30, 15, 5, 2, 8),
        canonical!(42, 28, 15, 5, 2, 8),
        canonical!(35, 35, 18, 5, 2, 5),
    ],
    // Drive
    [
        canonical!(25, 20, 18, 15, 7, 15),
        canonical!(30, 20, 15, 10, 5, 20),
        canonical!(20, 25, 25, 18, 7, 5),
        canonical!(20, 25, 20, 20, 8, 7),
        canonical!(25, 25, 20, 15, 5, 10),
        canonical!(15, 25, 25, 18, 10, 7),
    ],
    // Pull
    [
        canonical!(35, 20, 15, 10, 5, 15),
        canonical!(10, 15, 20, 20, 25, 10),
        canonical!(25, 25, 20, 15, 8, 7),
        canonical!(20, 20, 20, 20, 12, 8),
        canonical!(15, 20, 20, 20, 15, 10),
        canonical!(20, 20, 18, 18, 15, 9),
    ],
    // Cut
    [
        canonical!(40, 20, 15, 10, 3, 12),
        canonical!(15, 20, 25, 25, 8, 7),
        canonical!(30, 25, 20, 15, 5, 5),
        canonical!(15, 20, 22, 25, 10, 8),
        canonical!(30, 25, 18, 12, 5, 10),
        canonical!(25, 25, 20, 18, 7, 5),
    ],
    // Sweep
    [
        canonical!(35, 20, 15, 10, 5, 15),
        canonical!(40, 15, 10, 10, 5, 20),
        canonical!(10, 15, 20, 25, 20, 10),
        canonical!(25, 20, 18, 18, 10, 9),
        canonical!(20, 20, 20, 20, 12, 8),
        canonical!(15, 18, 22, 22, 15, 8),
    ],
    // Slog
    [
        canonical!(15, 10, 10, 15, 20, 30),
        canonical!(10, 10, 10, 15, 30, 25),
        canonical!(8, 12, 15, 20, 30, 15),
        canonical!(10, 12, 13, 20, 25, 20),
        canonical!(10, 12, 13, 18, 22, 25),
        canonical!(5, 10, 15, 22, 28, 20),
    ],
];

pub fn batting_table(action: Action) -> &'static WeightTable {
    &BATTING_ONLY[action.index()]
}

pub fn delivery_table(delivery: Delivery) -> &'static WeightTable {
    &DELIVERY[delivery.index()]
}

pub fn joint_table(action: Action, delivery: Delivery) -> &'static WeightTable {
    &JOINT[action.index()][delivery.index()]
}
