//! Closed vocabularies of the game: outcomes, shots, deliveries, moods,
//! modes, phases and results.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of a single delivery. `Wicket` is distinct from a dot ball.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Dot,
    Single,
    Two,
    Three,
    Four,
    Six,
    Wicket,
}

impl Outcome {
    /// Order used by the delivery tables and the mood multiplier vectors.
    pub const CANONICAL: [Outcome; 6] = [
        Outcome::Dot,
        Outcome::Single,
        Outcome::Two,
        Outcome::Four,
        Outcome::Six,
        Outcome::Wicket,
    ];

    /// Runs added to the total (0 for a wicket).
    pub fn runs(self) -> u32 {
        match self {
            Outcome::Dot | Outcome::Wicket => 0,
            Outcome::Single => 1,
            Outcome::Two => 2,
            Outcome::Three => 3,
            Outcome::Four => 4,
            Outcome::Six => 6,
        }
    }

    pub fn is_wicket(self) -> bool {
        matches!(self, Outcome::Wicket)
    }

    pub fn is_boundary(self) -> bool {
        matches!(self, Outcome::Four | Outcome::Six)
    }

    /// Scoreboard label shown after the ball settles.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Wicket => "WICKET!",
            Outcome::Six => "SIX!",
            Outcome::Four => "FOUR!",
            Outcome::Dot => "DOT",
            Outcome::Single => "1 RUN",
            Outcome::Two => "2 RUNS",
            Outcome::Three => "3 RUNS",
        }
    }

    /// Short code used in commentary keys and the match log.
    pub fn code(self) -> &'static str {
        match self {
            Outcome::Dot => "0",
            Outcome::Single => "1",
            Outcome::Two => "2",
            Outcome::Three => "3",
            Outcome::Four => "4",
            Outcome::Six => "6",
            Outcome::Wicket => "W",
        }
    }
}

/// UI hint attached to each shot; the engine never reads it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => write!(f, "low"),
            RiskTier::Medium => write!(f, "medium"),
            RiskTier::High => write!(f, "high"),
        }
    }
}

/// Shot chosen by the batting side.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Action {
    Defensive,
    Drive,
    Pull,
    Cut,
    Sweep,
    Slog,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Defensive,
        Action::Drive,
        Action::Pull,
        Action::Cut,
        Action::Sweep,
        Action::Slog,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Defensive => "Defensive",
            Action::Drive => "Drive",
            Action::Pull => "Pull",
            Action::Cut => "Cut",
            Action::Sweep => "Sweep",
            Action::Slog => "Slog",
        }
    }

    pub fn risk(self) -> RiskTier {
        match self {
            Action::Defensive => RiskTier::Low,
            Action::Drive | Action::Pull | Action::Cut => RiskTier::Medium,
            Action::Sweep | Action::Slog => RiskTier::High,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Action::Defensive => 0,
            Action::Drive => 1,
            Action::Pull => 2,
            Action::Cut => 3,
            Action::Sweep => 4,
            Action::Slog => 5,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Action::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseError::UnknownAction(s.to_string()))
    }
}

/// Ball type chosen by the bowling side.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Delivery {
    Yorker,
    Bouncer,
    Spin,
    Outswinger,
    Inswinger,
    Slower,
}

impl Delivery {
    pub const ALL: [Delivery; 6] = [
        Delivery::Yorker,
        Delivery::Bouncer,
        Delivery::Spin,
        Delivery::Outswinger,
        Delivery::Inswinger,
        Delivery::Slower,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Delivery::Yorker => "Yorker",
            Delivery::Bouncer => "Bouncer",
            Delivery::Spin => "Spin",
            Delivery::Outswinger => "Outswinger",
            Delivery::Inswinger => "Inswinger",
            Delivery::Slower => "Slower",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Delivery::Yorker => 0,
            Delivery::Bouncer => 1,
            Delivery::Spin => 2,
            Delivery::Outswinger => 3,
            Delivery::Inswinger => 4,
            Delivery::Slower => 5,
        }
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Delivery {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Delivery::ALL
            .into_iter()
            .find(|delivery| delivery.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseError::UnknownDelivery(s.to_string()))
    }
}

/// Disposition of the computer batsman.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Aggressive,
    Defensive,
    #[default]
    Normal,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mood::Aggressive => write!(f, "aggressive"),
            Mood::Defensive => write!(f, "defensive"),
            Mood::Normal => write!(f, "normal"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Player chases a target, computer bowls.
    Batting,
    /// Player defends a target, computer bats.
    Bowling,
    /// Two innings, one each way.
    FullMatch,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Batting => write!(f, "batting"),
            Mode::Bowling => write!(f, "bowling"),
            Mode::FullMatch => write!(f, "full-match"),
        }
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "batting" | "bat" => Ok(Mode::Batting),
            "bowling" | "bowl" => Ok(Mode::Bowling),
            "full-match" | "full_match" | "fullmatch" | "full" | "match" => Ok(Mode::FullMatch),
            _ => Err(ParseError::UnknownMode(s.to_string())),
        }
    }
}

/// Progress of a match. Single-innings modes only use the first two.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    SingleInningsActive,
    SingleInningsComplete,
    BattingFirst,
    BowlingFirst,
    BattingSecond,
    BowlingSecond,
    Complete,
}

impl Phase {
    pub fn is_complete(self) -> bool {
        matches!(self, Phase::SingleInningsComplete | Phase::Complete)
    }
}

/// Result from the human player's point of view.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::Win => write!(f, "win"),
            MatchResult::Loss => write!(f, "loss"),
            MatchResult::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_scoreboard_text() {
        assert_eq!(Outcome::Wicket.label(), "WICKET!");
        assert_eq!(Outcome::Six.label(), "SIX!");
        assert_eq!(Outcome::Four.label(), "FOUR!");
        assert_eq!(Outcome::Dot.label(), "DOT");
        assert_eq!(Outcome::Single.label(), "1 RUN");
        assert_eq!(Outcome::Two.label(), "2 RUNS");
        assert_eq!(Outcome::Three.label(), "3 RUNS");
    }

    #[test]
    fn wicket_scores_nothing() {
        assert_eq!(Outcome::Wicket.runs(), 0);
        assert!(Outcome::Wicket.is_wicket());
        assert!(!Outcome::Dot.is_wicket());
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("slog".parse::<Action>(), Ok(Action::Slog));
        assert_eq!(" YORKER ".parse::<Delivery>(), Ok(Delivery::Yorker));
        assert_eq!("full".parse::<Mode>(), Ok(Mode::FullMatch));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "reverse-sweep".parse::<Action>(),
            Err(ParseError::UnknownAction("reverse-sweep".to_string()))
        );
        assert!("doosra".parse::<Delivery>().is_err());
        assert!("test".parse::<Mode>().is_err());
    }

    #[test]
    fn risk_tiers() {
        assert_eq!(Action::Defensive.risk(), RiskTier::Low);
        assert_eq!(Action::Cut.risk(), RiskTier::Medium);
        assert_eq!(Action::Slog.risk(), RiskTier::High);
    }
}
