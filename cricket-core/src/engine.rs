//! High-level match engine wrapping the [`Match`] value for interactive and
//! batch callers.

use crate::error::{EngineError, TableError};
use crate::match_logger::MatchLogger;
use crate::model::{Action, Delivery, MatchResult, Mode, Outcome};
use crate::rules::MatchRules;
use crate::source::{BallSource, RngSource};
use crate::state::{Match, Opening, Snapshot};
use rand::rngs::SmallRng;

/// Options fixed at match start.
#[derive(Clone, Debug, Default)]
pub struct EngineOptions {
    pub seed: u64,
    /// Fixed single-innings target. Drawn from the rules' range when unset.
    pub target: Option<u32>,
    pub rules: MatchRules,
}

/// What the engine is waiting for next.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Awaiting {
    /// Full-match batting: reveal the next delivery first.
    Reveal,
    Shot,
    Delivery,
    /// A ball has begun and must be settled.
    Settle,
    Nothing,
}

/// Result of settling one ball.
#[derive(Clone, Debug)]
pub struct StepResult {
    /// State before the ball was resolved (still flagged as resolving).
    pub before: Match,
    pub after: Match,
    pub outcome: Outcome,
    /// Commentary lines this ball added, markers included.
    pub new_commentary: Vec<String>,
    /// Set on the ball that finished the match.
    pub completed: Option<MatchResult>,
}

/// Step-based match engine: one owned [`Match`] replaced wholesale on every
/// accepted call, plus the random source and the event log.
pub struct MatchEngine<S: BallSource = RngSource<SmallRng>> {
    state: Match,
    source: S,
    target: Option<u32>,
    logger: MatchLogger,
}

impl MatchEngine<RngSource<SmallRng>> {
    /// Start a match with the production random source seeded from
    /// `options.seed`.
    ///
    /// `player_batting_first` is only read in full-match mode.
    pub fn start_match(
        mode: Mode,
        player_batting_first: bool,
        options: EngineOptions,
    ) -> Result<Self, TableError> {
        let source = RngSource::seeded(options.seed);
        Self::with_source(mode, player_batting_first, options, source)
    }
}

impl<S: BallSource> MatchEngine<S> {
    pub fn with_source(
        mode: Mode,
        player_batting_first: bool,
        options: EngineOptions,
        mut source: S,
    ) -> Result<Self, TableError> {
        options.rules.validate()?;
        if options.target == Some(0) {
            return Err(TableError::InvalidRules("target must be > 0"));
        }
        let state = fresh_match(
            mode,
            player_batting_first,
            options.target,
            options.rules,
            Opening::Start,
            &mut source,
        );
        log::info!(
            "match start: mode={} phase={:?} target={:?}",
            mode,
            state.phase(),
            state.target()
        );
        let mut logger = MatchLogger::new();
        logger.log_start(&state);
        Ok(Self {
            state,
            source,
            target: options.target,
            logger,
        })
    }

    /// Reveal the computer's next delivery (full-match batting only).
    pub fn prepare_delivery(&mut self) -> Result<Snapshot, EngineError> {
        let next = self.state.reveal(&mut self.source)?;
        log::debug!("incoming delivery: {:?}", next.incoming_delivery());
        self.state = next;
        Ok(self.state.snapshot())
    }

    /// Begin a ball with the player's shot.
    pub fn submit_action(&mut self, action: Action) -> Result<Snapshot, EngineError> {
        let input = self.state.shot_input(action)?;
        self.state = self.state.begin(input)?;
        Ok(self.state.snapshot())
    }

    /// Begin a ball with the player's delivery.
    pub fn submit_delivery(&mut self, delivery: Delivery) -> Result<Snapshot, EngineError> {
        let input = self.state.delivery_input(delivery)?;
        self.state = self.state.begin(input)?;
        Ok(self.state.snapshot())
    }

    /// Resolve the ball that was begun.
    pub fn settle(&mut self) -> Result<StepResult, EngineError> {
        let input = self.state.pending().ok_or(EngineError::NoBallInProgress)?;
        let after = self.state.settle(&mut self.source)?;
        let before = std::mem::replace(&mut self.state, after);
        let after = &self.state;

        let outcome = after.last_outcome().ok_or(EngineError::NoBallInProgress)?;
        let innings = *after.innings(before.innings_index());
        self.logger.log_ball(&innings, input, outcome);
        log::debug!("ball {}: {} -> {:?}", innings.overs_text(), input, outcome);

        if before.phase() != after.phase() {
            log::info!("phase {:?} -> {:?}", before.phase(), after.phase());
            if !after.game_over() {
                self.logger.log_innings_break(after);
            }
        }
        let completed = if after.game_over() { after.result() } else { None };
        if let Some(result) = completed {
            log::info!("match over: {} ({})", result, after.current_innings().score_text());
            self.logger.log_result(after);
        }

        Ok(StepResult {
            new_commentary: after.new_commentary().to_vec(),
            after: after.clone(),
            before,
            outcome,
            completed,
        })
    }

    /// Begin and settle in one call, with no suspense.
    pub fn play_action(&mut self, action: Action) -> Result<StepResult, EngineError> {
        self.submit_action(action)?;
        self.settle()
    }

    /// Begin and settle in one call, with no suspense.
    pub fn play_delivery(&mut self, delivery: Delivery) -> Result<StepResult, EngineError> {
        self.submit_delivery(delivery)?;
        self.settle()
    }

    /// Fresh match in the initial phase of the current mode. Single-innings
    /// modes draw a new target unless one was fixed at start; a full match
    /// keeps the toss decision.
    pub fn reset_match(&mut self) -> Snapshot {
        let state = fresh_match(
            self.state.mode(),
            self.state.player_batting_first(),
            self.target,
            self.state.rules().clone(),
            Opening::Restart,
            &mut self.source,
        );
        log::info!("match reset: mode={} target={:?}", state.mode(), state.target());
        self.logger = MatchLogger::new();
        self.logger.log_start(&state);
        self.state = state;
        self.state.snapshot()
    }

    pub fn awaiting(&self) -> Awaiting {
        let state = &self.state;
        if state.is_resolving() {
            Awaiting::Settle
        } else if state.game_over() {
            Awaiting::Nothing
        } else if state.player_bowling() {
            Awaiting::Delivery
        } else if state.mode() == Mode::FullMatch && state.incoming_delivery().is_none() {
            Awaiting::Reveal
        } else {
            Awaiting::Shot
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state.game_over()
    }

    pub fn state(&self) -> &Match {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn logger(&self) -> &MatchLogger {
        &self.logger
    }
}

fn fresh_match<S: BallSource + ?Sized>(
    mode: Mode,
    player_batting_first: bool,
    target: Option<u32>,
    rules: MatchRules,
    opening: Opening,
    source: &mut S,
) -> Match {
    match mode {
        Mode::FullMatch => Match::full(player_batting_first, rules),
        Mode::Batting | Mode::Bowling => {
            let target =
                target.unwrap_or_else(|| rules.target_min + source.pick(rules.target_span()) as u32);
            if mode == Mode::Batting {
                Match::batting(target, rules, opening)
            } else {
                Match::bowling(target, rules, opening)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;

    #[test]
    fn random_target_stays_in_range() {
        for seed in 0..200 {
            let options = EngineOptions {
                seed,
                ..EngineOptions::default()
            };
            let engine = MatchEngine::start_match(Mode::Batting, true, options).unwrap();
            let target = engine.snapshot().target.unwrap();
            assert!((80..=150).contains(&target), "seed {seed}: {target}");
        }
    }

    #[test]
    fn invalid_rules_are_rejected_at_start() {
        let options = EngineOptions {
            rules: MatchRules {
                balls_per_over: 0,
                ..MatchRules::default()
            },
            ..EngineOptions::default()
        };
        assert!(MatchEngine::start_match(Mode::Bowling, false, options).is_err());
    }

    #[test]
    fn zero_target_is_rejected_at_start() {
        for mode in [Mode::Batting, Mode::Bowling] {
            let options = EngineOptions {
                target: Some(0),
                ..EngineOptions::default()
            };
            assert_eq!(
                MatchEngine::start_match(mode, true, options).err(),
                Some(TableError::InvalidRules("target must be > 0"))
            );
        }
        let options = EngineOptions {
            target: Some(1),
            ..EngineOptions::default()
        };
        assert!(MatchEngine::start_match(Mode::Batting, true, options).is_ok());
    }

    #[test]
    fn awaiting_follows_the_protocol() {
        let source = ScriptedSource::new([Outcome::Dot], 0);
        let mut engine =
            MatchEngine::with_source(Mode::FullMatch, true, EngineOptions::default(), source)
                .unwrap();
        assert_eq!(engine.awaiting(), Awaiting::Reveal);
        engine.prepare_delivery().unwrap();
        assert_eq!(engine.awaiting(), Awaiting::Shot);
        engine.submit_action(Action::Defensive).unwrap();
        assert_eq!(engine.awaiting(), Awaiting::Settle);
        let step = engine.settle().unwrap();
        assert_eq!(step.outcome, Outcome::Dot);
        assert!(step.before.is_resolving());
        assert!(!step.after.is_resolving());
        assert_eq!(engine.awaiting(), Awaiting::Reveal);
    }

    #[test]
    fn reset_keeps_mode_and_fixed_target() {
        let options = EngineOptions {
            target: Some(111),
            ..EngineOptions::default()
        };
        let mut engine = MatchEngine::start_match(Mode::Bowling, false, options).unwrap();
        engine.play_delivery(Delivery::Yorker).unwrap();
        let snapshot = engine.reset_match();
        assert_eq!(snapshot.mode, Mode::Bowling);
        assert_eq!(snapshot.target, Some(111));
        assert_eq!(snapshot.overs_text, "0.0");
        assert_eq!(
            engine.state().commentary(),
            ["You set a target of 111 runs. Now defend it in 10 overs!"]
        );
    }
}
