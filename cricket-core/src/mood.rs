//! Momentum of the computer batsman.

use crate::model::{Mood, Outcome};
use crate::source::BallSource;

impl Mood {
    /// Multipliers aligned with [`Outcome::CANONICAL`].
    pub fn multipliers(self) -> [f64; 6] {
        match self {
            Mood::Aggressive => [0.7, 0.8, 1.0, 1.3, 1.5, 1.3],
            Mood::Defensive => [1.5, 1.2, 0.9, 0.6, 0.4, 0.7],
            Mood::Normal => [1.0; 6],
        }
    }

    /// Multiplier for a single outcome. Outcomes outside the canonical set
    /// are left unscaled.
    pub fn multiplier(self, outcome: Outcome) -> f64 {
        Outcome::CANONICAL
            .iter()
            .position(|&candidate| candidate == outcome)
            .map(|idx| self.multipliers()[idx])
            .unwrap_or(1.0)
    }

    /// Mood after a ball with the given outcome.
    ///
    /// A wicket brings in a fresh batsman, so the mood resets. Sixes always
    /// fire him up; fours do half the time. Dot balls frustrate him into
    /// attacking 30% of the time and dig him in otherwise.
    pub fn after<S: BallSource + ?Sized>(outcome: Outcome, source: &mut S) -> Mood {
        match outcome {
            Outcome::Wicket => Mood::Normal,
            Outcome::Six => Mood::Aggressive,
            Outcome::Four => {
                if source.unit() < 0.5 {
                    Mood::Aggressive
                } else {
                    Mood::Normal
                }
            }
            Outcome::Dot => {
                if source.unit() < 0.3 {
                    Mood::Aggressive
                } else {
                    Mood::Defensive
                }
            }
            Outcome::Single | Outcome::Two | Outcome::Three => Mood::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RngSource;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn normal_is_identity() {
        for outcome in Outcome::CANONICAL {
            assert_eq!(Mood::Normal.multiplier(outcome), 1.0);
        }
    }

    #[test]
    fn aggressive_and_defensive_pull_opposite_ways() {
        assert!(Mood::Aggressive.multiplier(Outcome::Dot) < 1.0);
        assert!(Mood::Aggressive.multiplier(Outcome::Six) > 1.0);
        assert!(Mood::Aggressive.multiplier(Outcome::Wicket) > 1.0);
        assert!(Mood::Defensive.multiplier(Outcome::Dot) > 1.0);
        assert!(Mood::Defensive.multiplier(Outcome::Four) < 1.0);
        assert!(Mood::Defensive.multiplier(Outcome::Wicket) < 1.0);
        assert_eq!(Mood::Defensive.multiplier(Outcome::Three), 1.0);
    }

    #[test]
    fn wicket_always_resets_and_six_always_fires_up() {
        let mut source = RngSource::new(SmallRng::seed_from_u64(3));
        for _ in 0..10_000 {
            assert_eq!(Mood::after(Outcome::Wicket, &mut source), Mood::Normal);
            assert_eq!(Mood::after(Outcome::Six, &mut source), Mood::Aggressive);
        }
    }

    #[test]
    fn singles_and_twos_calm_him_down() {
        let mut source = RngSource::new(SmallRng::seed_from_u64(4));
        assert_eq!(Mood::after(Outcome::Single, &mut source), Mood::Normal);
        assert_eq!(Mood::after(Outcome::Two, &mut source), Mood::Normal);
    }

    #[test]
    fn coin_flip_transitions_have_the_right_split() {
        let mut source = RngSource::new(SmallRng::seed_from_u64(5));
        let trials = 100_000;
        let after_dot = (0..trials)
            .filter(|_| Mood::after(Outcome::Dot, &mut source) == Mood::Aggressive)
            .count() as f64
            / trials as f64;
        let after_four = (0..trials)
            .filter(|_| Mood::after(Outcome::Four, &mut source) == Mood::Aggressive)
            .count() as f64
            / trials as f64;
        assert!((after_dot - 0.3).abs() < 0.01, "dot: {after_dot}");
        assert!((after_four - 0.5).abs() < 0.01, "four: {after_four}");

        for _ in 0..1_000 {
            assert_ne!(Mood::after(Outcome::Dot, &mut source), Mood::Normal);
            assert_ne!(Mood::after(Outcome::Four, &mut source), Mood::Defensive);
        }
    }
}
