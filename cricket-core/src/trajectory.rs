//! Where the ball went, for drawing only. Nothing in the engine reads it back.

use crate::model::{Action, Outcome};
use crate::source::BallSource;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Straight,
    Cover,
    Midwicket,
    Point,
    SquareLeg,
    LongOn,
    LongOff,
    FineLeg,
    ThirdMan,
}

impl Direction {
    pub const ALL: [Direction; 9] = [
        Direction::Straight,
        Direction::Cover,
        Direction::Midwicket,
        Direction::Point,
        Direction::SquareLeg,
        Direction::LongOn,
        Direction::LongOff,
        Direction::FineLeg,
        Direction::ThirdMan,
    ];

    /// Field position at full depth, as percentages from the pitch centre.
    /// Negative `y` is in front of the batsman.
    pub fn base_position(self) -> (f64, f64) {
        match self {
            Direction::Straight => (0.0, -45.0),
            Direction::Cover => (30.0, -35.0),
            Direction::Midwicket => (-30.0, -35.0),
            Direction::Point => (40.0, -15.0),
            Direction::SquareLeg => (-40.0, -15.0),
            Direction::LongOn => (-20.0, -45.0),
            Direction::LongOff => (20.0, -45.0),
            Direction::FineLeg => (-35.0, 30.0),
            Direction::ThirdMan => (35.0, 30.0),
        }
    }

    /// Regions a given shot can send the ball into.
    pub fn for_shot(action: Action) -> &'static [Direction] {
        match action {
            Action::Defensive => &[Direction::Straight, Direction::Cover, Direction::Midwicket],
            Action::Drive => &[Direction::Cover, Direction::LongOff, Direction::Straight],
            Action::Pull => &[Direction::Midwicket, Direction::SquareLeg, Direction::LongOn],
            Action::Cut => &[Direction::Point, Direction::ThirdMan, Direction::Cover],
            Action::Sweep => &[Direction::FineLeg, Direction::SquareLeg, Direction::Midwicket],
            Action::Slog => &[Direction::LongOn, Direction::LongOff, Direction::Midwicket],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Straight => "straight",
            Direction::Cover => "cover",
            Direction::Midwicket => "midwicket",
            Direction::Point => "point",
            Direction::SquareLeg => "square-leg",
            Direction::LongOn => "long-on",
            Direction::LongOff => "long-off",
            Direction::FineLeg => "fine-leg",
            Direction::ThirdMan => "third-man",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
    Close,
    Boundary,
    Six,
}

impl Distance {
    pub fn of(outcome: Outcome) -> Distance {
        match outcome {
            Outcome::Six => Distance::Six,
            Outcome::Four => Distance::Boundary,
            _ => Distance::Close,
        }
    }

    fn scale(self) -> f64 {
        match self {
            Distance::Six => 1.0,
            Distance::Boundary => 0.85,
            Distance::Close => 0.4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BallTrajectory {
    pub direction: Direction,
    pub distance: Distance,
    pub x: f64,
    pub y: f64,
}

/// Pick a direction for the ball (constrained by the shot when one was
/// played) and scale its position by how far the outcome carried it.
pub fn trajectory<S: BallSource + ?Sized>(
    outcome: Outcome,
    shot: Option<Action>,
    source: &mut S,
) -> BallTrajectory {
    let options = match shot {
        Some(action) => Direction::for_shot(action),
        None => &Direction::ALL[..],
    };
    let direction = options[source.pick(options.len())];
    let distance = Distance::of(outcome);
    let (x, y) = direction.base_position();
    BallTrajectory {
        direction,
        distance,
        x: x * distance.scale(),
        y: y * distance.scale(),
    }
}
