//! The match as an immutable value.
//!
//! Every transition borrows the current [`Match`] and returns a new one, so a
//! rejected call can never leave a half-applied ball behind. A ball is played
//! in two steps: [`Match::begin`] records the choice and raises the resolving
//! flag, [`Match::settle`] resolves it. The caller decides how long to wait in
//! between (see [`Match::settle_delay`]).

use crate::error::EngineError;
use crate::innings::Innings;
use crate::model::{Action, Delivery, MatchResult, Mode, Mood, Outcome, Phase};
use crate::rules::MatchRules;
use crate::sim::{resolve_ball, BallInput};
use crate::source::BallSource;
use crate::trajectory::BallTrajectory;
use serde::Serialize;
use std::time::Duration;

/// Whether a single-innings match is a fresh start or a replay from the
/// game-over screen. Only the opening commentary differs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Opening {
    #[default]
    Start,
    Restart,
}

/// How the chasing side's innings ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChaseVerdict {
    Reached,
    FellShort,
    Tied,
}

/// Result from the player's side given who chased and how the chase went.
pub fn result_for_player(player_is_chasing: bool, verdict: ChaseVerdict) -> MatchResult {
    match (verdict, player_is_chasing) {
        (ChaseVerdict::Tied, _) => MatchResult::Draw,
        (ChaseVerdict::Reached, true) | (ChaseVerdict::FellShort, false) => MatchResult::Win,
        (ChaseVerdict::Reached, false) | (ChaseVerdict::FellShort, true) => MatchResult::Loss,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    mode: Mode,
    phase: Phase,
    rules: MatchRules,
    player_batting_first: bool,
    innings: [Innings; 2],
    current: usize,
    target: Option<u32>,
    mood: Mood,
    incoming_delivery: Option<Delivery>,
    pending: Option<BallInput>,
    last_input: Option<BallInput>,
    last_outcome: Option<Outcome>,
    last_result: Option<&'static str>,
    trajectory: Option<BallTrajectory>,
    commentary: Vec<String>,
    fresh: usize,
    result: Option<MatchResult>,
}

impl Match {
    fn blank(mode: Mode, phase: Phase, rules: MatchRules, player_batting_first: bool) -> Self {
        Self {
            mode,
            phase,
            rules,
            player_batting_first,
            innings: [Innings::default(); 2],
            current: 0,
            target: None,
            mood: Mood::Normal,
            incoming_delivery: None,
            pending: None,
            last_input: None,
            last_outcome: None,
            last_result: None,
            trajectory: None,
            commentary: Vec::new(),
            fresh: 0,
            result: None,
        }
    }

    fn with_opening(mut self, lines: Vec<String>) -> Self {
        self.fresh = lines.len();
        self.commentary = lines;
        self
    }

    /// Player chases `target` against the computer's bowling.
    pub fn batting(target: u32, rules: MatchRules, opening: Opening) -> Self {
        let sign_off = match opening {
            Opening::Start => "Good luck!",
            Opening::Restart => "Let's go!",
        };
        let line = format!(
            "Target: {target} runs to win in {} overs. {sign_off}",
            rules.overs_per_innings
        );
        let mut fresh = Self::blank(Mode::Batting, Phase::SingleInningsActive, rules, true);
        fresh.target = Some(target);
        fresh.with_opening(vec![line])
    }

    /// Player defends `target` against the computer batsman.
    pub fn bowling(target: u32, rules: MatchRules, opening: Opening) -> Self {
        let line = match opening {
            Opening::Start => {
                format!("You set a target of {target} runs. Bowl them out or restrict them!")
            }
            Opening::Restart => format!(
                "You set a target of {target} runs. Now defend it in {} overs!",
                rules.overs_per_innings
            ),
        };
        let mut fresh = Self::blank(Mode::Bowling, Phase::SingleInningsActive, rules, false);
        fresh.target = Some(target);
        fresh.with_opening(vec![line])
    }

    /// Two innings; the toss decided who bats first.
    pub fn full(player_batting_first: bool, rules: MatchRules) -> Self {
        let (phase, choice) = if player_batting_first {
            (Phase::BattingFirst, "bat")
        } else {
            (Phase::BowlingFirst, "bowl")
        };
        let lines = vec![
            format!("You won the toss and chose to {choice} first!"),
            format!("{} overs per side. Let's go!", rules.overs_per_innings),
        ];
        Self::blank(Mode::FullMatch, phase, rules, player_batting_first).with_opening(lines)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    pub fn player_batting_first(&self) -> bool {
        self.player_batting_first
    }

    /// The innings in play (or the last one played once the match is over).
    pub fn current_innings(&self) -> &Innings {
        &self.innings[self.current]
    }

    pub fn first_innings(&self) -> &Innings {
        &self.innings[0]
    }

    /// Only meaningful in a full match.
    pub fn second_innings(&self) -> &Innings {
        &self.innings[1]
    }

    /// 0 for the first innings, 1 for the second.
    pub fn innings_index(&self) -> usize {
        self.current
    }

    /// Panics unless `index` is 0 or 1.
    pub fn innings(&self, index: usize) -> &Innings {
        &self.innings[index]
    }

    pub fn target(&self) -> Option<u32> {
        self.target
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn incoming_delivery(&self) -> Option<Delivery> {
        self.incoming_delivery
    }

    pub fn pending(&self) -> Option<BallInput> {
        self.pending
    }

    pub fn last_input(&self) -> Option<BallInput> {
        self.last_input
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn last_result(&self) -> Option<&'static str> {
        self.last_result
    }

    pub fn trajectory(&self) -> Option<BallTrajectory> {
        self.trajectory
    }

    pub fn commentary(&self) -> &[String] {
        &self.commentary
    }

    /// Lines appended by the most recent transition.
    pub fn new_commentary(&self) -> &[String] {
        &self.commentary[self.commentary.len() - self.fresh..]
    }

    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    pub fn is_resolving(&self) -> bool {
        self.pending.is_some()
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_complete()
    }

    pub fn player_batting(&self) -> bool {
        match self.mode {
            Mode::Batting => !self.game_over(),
            Mode::Bowling => false,
            Mode::FullMatch => matches!(self.phase, Phase::BattingFirst | Phase::BattingSecond),
        }
    }

    pub fn player_bowling(&self) -> bool {
        match self.mode {
            Mode::Batting => false,
            Mode::Bowling => !self.game_over(),
            Mode::FullMatch => matches!(self.phase, Phase::BowlingFirst | Phase::BowlingSecond),
        }
    }

    /// Whether the innings in play (or last played) is the computer's.
    pub fn computer_batting(&self) -> bool {
        match self.mode {
            Mode::Batting => false,
            Mode::Bowling => true,
            Mode::FullMatch => (self.current == 0) != self.player_batting_first,
        }
    }

    /// The innings the player batted in, if any.
    pub fn player_batting_innings(&self) -> Option<&Innings> {
        match self.mode {
            Mode::Batting => Some(&self.innings[0]),
            Mode::Bowling => None,
            Mode::FullMatch => {
                let idx = if self.player_batting_first { 0 } else { 1 };
                (idx <= self.current).then(|| &self.innings[idx])
            }
        }
    }

    /// The innings the player bowled in, if any.
    pub fn player_bowling_innings(&self) -> Option<&Innings> {
        match self.mode {
            Mode::Batting => None,
            Mode::Bowling => Some(&self.innings[0]),
            Mode::FullMatch => {
                let idx = if self.player_batting_first { 1 } else { 0 };
                (idx <= self.current).then(|| &self.innings[idx])
            }
        }
    }

    /// Suspense between [`Match::begin`] and [`Match::settle`] for the
    /// ball currently being played.
    pub fn settle_delay(&self) -> Duration {
        let millis = match self.mode {
            Mode::Batting => 800,
            Mode::Bowling => 1200,
            Mode::FullMatch if self.player_bowling() => 1000,
            Mode::FullMatch => 800,
        };
        Duration::from_millis(millis)
    }

    fn check_open(&self) -> Result<(), EngineError> {
        if self.game_over() {
            return Err(EngineError::MatchOver);
        }
        if self.is_resolving() {
            return Err(EngineError::BallInProgress);
        }
        Ok(())
    }

    /// Input for the player's shot in the current state.
    pub fn shot_input(&self, action: Action) -> Result<BallInput, EngineError> {
        self.check_open()?;
        if !self.player_batting() {
            return Err(EngineError::NotBatting { phase: self.phase });
        }
        match self.mode {
            Mode::FullMatch => {
                let delivery = self
                    .incoming_delivery
                    .ok_or(EngineError::NoIncomingDelivery)?;
                Ok(BallInput::ShotAgainst { action, delivery })
            }
            _ => Ok(BallInput::Shot(action)),
        }
    }

    /// Input for the player's delivery in the current state.
    pub fn delivery_input(&self, delivery: Delivery) -> Result<BallInput, EngineError> {
        self.check_open()?;
        if !self.player_bowling() {
            return Err(EngineError::NotBowling { phase: self.phase });
        }
        Ok(BallInput::Delivery(delivery))
    }

    /// Reveal the computer's next delivery before the player picks a shot.
    pub fn reveal<S: BallSource + ?Sized>(&self, source: &mut S) -> Result<Match, EngineError> {
        if self.mode != Mode::FullMatch {
            return Err(EngineError::NotFullMatch);
        }
        self.check_open()?;
        if !self.player_batting() {
            return Err(EngineError::NotBatting { phase: self.phase });
        }
        if self.incoming_delivery.is_some() {
            return Err(EngineError::DeliveryAlreadyRevealed);
        }
        let mut next = self.clone();
        next.incoming_delivery = Some(source.delivery());
        next.fresh = 0;
        Ok(next)
    }

    /// First half of a ball: remember the choice and clear the previous
    /// result. `input` must come from [`Match::shot_input`] or
    /// [`Match::delivery_input`] on this same state.
    pub fn begin(&self, input: BallInput) -> Result<Match, EngineError> {
        match input {
            BallInput::Delivery(delivery) => {
                self.delivery_input(delivery)?;
            }
            BallInput::Shot(action) | BallInput::ShotAgainst { action, .. } => {
                let expected = self.shot_input(action)?;
                if expected != input {
                    return Err(match expected {
                        BallInput::ShotAgainst { delivery, .. } => {
                            EngineError::DeliveryMismatch { revealed: delivery }
                        }
                        _ => EngineError::NotFullMatch,
                    });
                }
            }
        }
        let mut next = self.clone();
        next.pending = Some(input);
        next.last_input = Some(input);
        next.last_outcome = None;
        next.last_result = None;
        next.trajectory = None;
        next.fresh = 0;
        Ok(next)
    }

    /// Second half of a ball: resolve the pending choice and apply innings
    /// and match termination.
    pub fn settle<S: BallSource + ?Sized>(&self, source: &mut S) -> Result<Match, EngineError> {
        let input = self.pending.ok_or(EngineError::NoBallInProgress)?;
        let full_match = self.mode == Mode::FullMatch;
        let report = resolve_ball(
            self.innings[self.current],
            self.mood,
            input,
            full_match,
            &self.rules,
            source,
        );

        let mut next = self.clone();
        next.innings[self.current] = report.innings;
        next.pending = None;
        next.incoming_delivery = None;
        next.last_outcome = Some(report.outcome);
        next.last_result = Some(report.label);
        next.trajectory = report.trajectory;
        next.mood = report.mood;
        next.commentary.push(report.commentary);

        match self.mode {
            Mode::Batting | Mode::Bowling => next.close_single_innings(),
            Mode::FullMatch => next.close_full_match_innings(),
        }
        next.fresh = next.commentary.len() - self.commentary.len();
        Ok(next)
    }

    fn close_single_innings(&mut self) {
        let innings = self.innings[0];
        let Some(target) = self.target else {
            return;
        };
        let verdict = if innings.runs >= target {
            ChaseVerdict::Reached
        } else if innings.is_closed(&self.rules) {
            ChaseVerdict::FellShort
        } else {
            return;
        };
        self.phase = Phase::SingleInningsComplete;
        self.result = Some(result_for_player(self.mode == Mode::Batting, verdict));
    }

    fn close_full_match_innings(&mut self) {
        let innings = self.innings[self.current];
        if self.current == 0 {
            if !innings.is_closed(&self.rules) {
                return;
            }
            let target = innings.runs + 1;
            self.commentary.push(format!(
                "--- First innings ends: {} ---",
                innings.score_text()
            ));
            self.commentary.push(format!("Target: {target} runs to win!"));
            self.current = 1;
            self.target = Some(target);
            self.mood = Mood::Normal;
            self.phase = if self.player_batting_first {
                Phase::BowlingSecond
            } else {
                Phase::BattingSecond
            };
            return;
        }

        let first_total = self.innings[0].runs;
        let verdict = if innings.runs > first_total {
            ChaseVerdict::Reached
        } else if !innings.is_closed(&self.rules) {
            return;
        } else if innings.runs < first_total {
            ChaseVerdict::FellShort
        } else {
            ChaseVerdict::Tied
        };
        self.phase = Phase::Complete;
        self.result = Some(result_for_player(!self.player_batting_first, verdict));
    }

    /// The view handed to the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        let innings = self.current_innings();
        Snapshot {
            mode: self.mode,
            phase: self.phase,
            runs: innings.runs,
            wickets: innings.wickets,
            overs: innings.overs,
            balls: innings.balls,
            overs_text: innings.overs_text(),
            target: self.target,
            last_result: self.last_result.map(str::to_string),
            last_commentary: self.new_commentary().to_vec(),
            game_over: self.game_over(),
            result: self.result,
            is_resolving: self.is_resolving(),
            mood: self.computer_batting().then_some(self.mood),
            incoming_delivery: self.incoming_delivery,
            trajectory: self.trajectory,
        }
    }
}

/// Read-only scoreboard view of a [`Match`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub phase: Phase,
    pub runs: u32,
    pub wickets: u32,
    pub overs: u32,
    pub balls: u32,
    pub overs_text: String,
    pub target: Option<u32>,
    pub last_result: Option<String>,
    pub last_commentary: Vec<String>,
    pub game_over: bool,
    pub result: Option<MatchResult>,
    pub is_resolving: bool,
    /// Computer batsman's mood, when the computer is batting.
    pub mood: Option<Mood>,
    pub incoming_delivery: Option<Delivery>,
    pub trajectory: Option<BallTrajectory>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;

    #[test]
    fn chase_results_from_both_sides() {
        assert_eq!(result_for_player(true, ChaseVerdict::Reached), MatchResult::Win);
        assert_eq!(result_for_player(true, ChaseVerdict::FellShort), MatchResult::Loss);
        assert_eq!(result_for_player(false, ChaseVerdict::Reached), MatchResult::Loss);
        assert_eq!(result_for_player(false, ChaseVerdict::FellShort), MatchResult::Win);
        assert_eq!(result_for_player(true, ChaseVerdict::Tied), MatchResult::Draw);
        assert_eq!(result_for_player(false, ChaseVerdict::Tied), MatchResult::Draw);
    }

    #[test]
    fn opening_lines() {
        let rules = MatchRules::default();
        let batting = Match::batting(120, rules.clone(), Opening::Start);
        assert_eq!(
            batting.commentary(),
            ["Target: 120 runs to win in 10 overs. Good luck!"]
        );
        let replay = Match::bowling(95, rules.clone(), Opening::Restart);
        assert_eq!(
            replay.commentary(),
            ["You set a target of 95 runs. Now defend it in 10 overs!"]
        );
        let full = Match::full(false, rules);
        assert_eq!(full.phase(), Phase::BowlingFirst);
        assert_eq!(full.new_commentary().len(), 2);
        assert_eq!(full.target(), None);
    }

    #[test]
    fn begin_clears_the_previous_result() {
        let start = Match::batting(100, MatchRules::default(), Opening::Start);
        let mut source = ScriptedSource::new([Outcome::Four], 0);
        let settled = start
            .begin(BallInput::Shot(Action::Drive))
            .and_then(|m| m.settle(&mut source))
            .unwrap();
        assert_eq!(settled.last_result(), Some("FOUR!"));
        let resolving = settled.begin(BallInput::Shot(Action::Drive)).unwrap();
        assert!(resolving.is_resolving());
        assert_eq!(resolving.last_result(), None);
        assert!(resolving.new_commentary().is_empty());
        assert_eq!(resolving.snapshot().runs, 4);
    }

    #[test]
    fn wrong_input_for_mode_is_rejected() {
        let batting = Match::batting(100, MatchRules::default(), Opening::Start);
        assert_eq!(
            batting.begin(BallInput::Delivery(Delivery::Spin)),
            Err(EngineError::NotBowling {
                phase: Phase::SingleInningsActive
            })
        );
        assert_eq!(
            batting.begin(BallInput::ShotAgainst {
                action: Action::Drive,
                delivery: Delivery::Yorker,
            }),
            Err(EngineError::NotFullMatch)
        );
        let full = Match::full(true, MatchRules::default());
        assert_eq!(
            full.begin(BallInput::Shot(Action::Drive)),
            Err(EngineError::NoIncomingDelivery)
        );
    }

    #[test]
    fn shot_must_answer_the_revealed_delivery() {
        let mut source =
            ScriptedSource::new(Vec::<Outcome>::new(), 2).with_deliveries([Delivery::Bouncer]);
        let revealed = Match::full(true, MatchRules::default())
            .reveal(&mut source)
            .unwrap();
        assert_eq!(revealed.incoming_delivery(), Some(Delivery::Bouncer));
        let mismatch = Err(EngineError::DeliveryMismatch {
            revealed: Delivery::Bouncer,
        });
        assert_eq!(
            revealed.begin(BallInput::ShotAgainst {
                action: Action::Pull,
                delivery: Delivery::Spin,
            }),
            mismatch
        );
        assert_eq!(revealed.begin(BallInput::Shot(Action::Pull)), mismatch);
        assert!(revealed
            .begin(BallInput::ShotAgainst {
                action: Action::Pull,
                delivery: Delivery::Bouncer,
            })
            .unwrap()
            .is_resolving());
    }

    #[test]
    fn settle_delay_depends_on_role() {
        let rules = MatchRules::default();
        let ms = |m: &Match| m.settle_delay().as_millis();
        assert_eq!(ms(&Match::batting(90, rules.clone(), Opening::Start)), 800);
        assert_eq!(ms(&Match::bowling(90, rules.clone(), Opening::Start)), 1200);
        assert_eq!(ms(&Match::full(true, rules.clone())), 800);
        assert_eq!(ms(&Match::full(false, rules)), 1000);
    }

    #[test]
    fn mood_resets_at_the_innings_break() {
        let rules = MatchRules {
            overs_per_innings: 1,
            ..MatchRules::default()
        };
        let mut source = ScriptedSource::new([Outcome::Six; 6], 4);
        let mut state = Match::full(false, rules);
        for _ in 0..6 {
            state = state
                .begin(BallInput::Delivery(Delivery::Slower))
                .and_then(|m| m.settle(&mut source))
                .unwrap();
        }
        assert_eq!(state.phase(), Phase::BattingSecond);
        assert_eq!(state.mood(), Mood::Normal);
        assert_eq!(state.target(), Some(37));
        assert_eq!(
            state.new_commentary()[1..],
            [
                "--- First innings ends: 36/0 ---".to_string(),
                "Target: 37 runs to win!".to_string()
            ]
        );
    }
}
