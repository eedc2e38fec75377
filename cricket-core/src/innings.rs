//! One side's batting turn.

use crate::model::Outcome;
use crate::rules::MatchRules;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Innings {
    pub runs: u32,
    pub wickets: u32,
    /// Completed overs.
    pub overs: u32,
    /// Balls bowled in the current over.
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
}

impl Innings {
    /// The innings after one more ball. The receiver is left untouched.
    pub fn with_ball(self, outcome: Outcome, rules: &MatchRules) -> Innings {
        let mut next = self;
        next.runs += outcome.runs();
        match outcome {
            Outcome::Wicket => next.wickets += 1,
            Outcome::Four => next.fours += 1,
            Outcome::Six => next.sixes += 1,
            _ => {}
        }
        next.balls += 1;
        if next.balls >= rules.balls_per_over {
            next.overs += 1;
            next.balls = 0;
        }
        next
    }

    pub fn all_out(&self, rules: &MatchRules) -> bool {
        self.wickets >= rules.wickets_per_innings
    }

    /// All out or out of overs.
    pub fn is_closed(&self, rules: &MatchRules) -> bool {
        self.all_out(rules) || self.overs >= rules.overs_per_innings
    }

    pub fn balls_bowled(&self, rules: &MatchRules) -> u32 {
        self.overs * rules.balls_per_over + self.balls
    }

    /// `"overs.balls"`, e.g. `"3.2"`.
    pub fn overs_text(&self) -> String {
        format!("{}.{}", self.overs, self.balls)
    }

    /// `"runs/wickets"`, e.g. `"87/4"`.
    pub fn score_text(&self) -> String {
        format!("{}/{}", self.runs, self.wickets)
    }
}
