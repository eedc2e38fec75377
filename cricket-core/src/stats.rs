//! Lifetime career record, updated once per finished match.

use crate::model::{MatchResult, Mode};
use crate::state::Match;
use serde::{Deserialize, Serialize};

/// Best single-innings bowling figures. Ranked by wickets, then fewest runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BestBowling {
    pub wickets: u32,
    pub runs: u32,
}

impl Default for BestBowling {
    fn default() -> Self {
        // Sentinel: any real figures beat it.
        Self {
            wickets: 0,
            runs: 999,
        }
    }
}

impl BestBowling {
    pub fn is_beaten_by(&self, wickets: u32, runs: u32) -> bool {
        wickets > self.wickets || (wickets == self.wickets && runs < self.runs)
    }
}

/// Field names match the persisted record; missing fields load as defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerStats {
    pub batting_innings: u32,
    pub total_runs_scored: u32,
    pub total_balls_faced: u32,
    pub highest_score: u32,
    pub times_out: u32,
    pub fours: u32,
    pub sixes: u32,
    pub batting_wins: u32,
    pub batting_losses: u32,

    pub bowling_innings: u32,
    pub total_runs_conceded: u32,
    pub total_balls_bowled: u32,
    pub total_wickets_taken: u32,
    pub best_bowling: BestBowling,
    pub bowling_wins: u32,
    pub bowling_losses: u32,

    pub full_matches_played: u32,
    pub full_match_wins: u32,
    pub full_match_losses: u32,
}

impl CareerStats {
    /// A draw counts against the win column; the record has no draw counter.
    pub fn update_batting(
        &mut self,
        runs: u32,
        balls_faced: u32,
        is_out: bool,
        fours: u32,
        sixes: u32,
        won: bool,
    ) {
        self.batting_innings += 1;
        self.total_runs_scored += runs;
        self.total_balls_faced += balls_faced;
        self.highest_score = self.highest_score.max(runs);
        self.times_out += u32::from(is_out);
        self.fours += fours;
        self.sixes += sixes;
        if won {
            self.batting_wins += 1;
        } else {
            self.batting_losses += 1;
        }
    }

    pub fn update_bowling(&mut self, runs_conceded: u32, balls_bowled: u32, wickets: u32, won: bool) {
        self.bowling_innings += 1;
        self.total_runs_conceded += runs_conceded;
        self.total_balls_bowled += balls_bowled;
        self.total_wickets_taken += wickets;
        if self.best_bowling.is_beaten_by(wickets, runs_conceded) {
            self.best_bowling = BestBowling {
                wickets,
                runs: runs_conceded,
            };
        }
        if won {
            self.bowling_wins += 1;
        } else {
            self.bowling_losses += 1;
        }
    }

    pub fn update_full_match(&mut self, won: bool) {
        self.full_matches_played += 1;
        if won {
            self.full_match_wins += 1;
        } else {
            self.full_match_losses += 1;
        }
    }

    /// Fold a finished match into the record. Returns `false` (and changes
    /// nothing) if the match is still in progress.
    pub fn record_match(&mut self, state: &Match) -> bool {
        if !state.game_over() {
            return false;
        }
        let rules = state.rules();
        let won = state.result() == Some(MatchResult::Win);
        if let Some(innings) = state.player_batting_innings() {
            self.update_batting(
                innings.runs,
                innings.balls_bowled(rules),
                innings.all_out(rules),
                innings.fours,
                innings.sixes,
                won,
            );
        }
        if let Some(innings) = state.player_bowling_innings() {
            self.update_bowling(innings.runs, innings.balls_bowled(rules), innings.wickets, won);
        }
        if state.mode() == Mode::FullMatch {
            self.update_full_match(won);
        }
        true
    }

    /// Runs per dismissal, or total runs while never out.
    pub fn batting_average(&self) -> String {
        if self.times_out > 0 {
            format!("{:.2}", self.total_runs_scored as f64 / self.times_out as f64)
        } else {
            format!("{:.2}", self.total_runs_scored as f64)
        }
    }

    pub fn strike_rate(&self) -> String {
        if self.total_balls_faced > 0 {
            format!(
                "{:.2}",
                self.total_runs_scored as f64 / self.total_balls_faced as f64 * 100.0
            )
        } else {
            "0.00".to_string()
        }
    }

    /// Runs conceded per six balls.
    pub fn economy(&self) -> String {
        if self.total_balls_bowled > 0 {
            format!(
                "{:.2}",
                self.total_runs_conceded as f64 / self.total_balls_bowled as f64 * 6.0
            )
        } else {
            "0.00".to_string()
        }
    }

    pub fn bowling_average(&self) -> String {
        if self.total_wickets_taken > 0 {
            format!(
                "{:.2}",
                self.total_runs_conceded as f64 / self.total_wickets_taken as f64
            )
        } else {
            "-".to_string()
        }
    }

    /// `"W/R"`, or `"-"` until a wicket has been taken.
    pub fn best_bowling_text(&self) -> String {
        if self.best_bowling.wickets > 0 {
            format!("{}/{}", self.best_bowling.wickets, self.best_bowling.runs)
        } else {
            "-".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_as_empty_figures() {
        let stats = CareerStats::default();
        assert_eq!(stats.best_bowling, BestBowling { wickets: 0, runs: 999 });
        assert_eq!(stats.best_bowling_text(), "-");
        assert_eq!(stats.bowling_average(), "-");
        assert_eq!(stats.batting_average(), "0.00");
        assert_eq!(stats.strike_rate(), "0.00");
        assert_eq!(stats.economy(), "0.00");
    }

    #[test]
    fn batting_figures() {
        let mut stats = CareerStats::default();
        stats.update_batting(45, 30, true, 4, 2, false);
        stats.update_batting(80, 40, false, 6, 3, true);
        assert_eq!(stats.highest_score, 80);
        assert_eq!(stats.times_out, 1);
        assert_eq!((stats.batting_wins, stats.batting_losses), (1, 1));
        assert_eq!(stats.batting_average(), "125.00");
        assert_eq!(stats.strike_rate(), "178.57");
    }

    #[test]
    fn best_bowling_prefers_wickets_then_runs() {
        let mut stats = CareerStats::default();
        stats.update_bowling(60, 60, 2, false);
        assert_eq!(stats.best_bowling_text(), "2/60");
        stats.update_bowling(40, 60, 2, true);
        assert_eq!(stats.best_bowling_text(), "2/40");
        stats.update_bowling(20, 60, 1, true);
        assert_eq!(stats.best_bowling_text(), "2/40");
        stats.update_bowling(90, 60, 3, false);
        assert_eq!(stats.best_bowling_text(), "3/90");
        assert_eq!(stats.economy(), "5.25");
        assert_eq!(stats.bowling_average(), "26.25");
    }

    #[test]
    fn loads_camel_case_and_fills_missing_fields() {
        let stats: CareerStats =
            serde_json::from_str(r#"{"totalRunsScored": 12, "bestBowling": {"wickets": 1, "runs": 9}}"#)
                .unwrap();
        assert_eq!(stats.total_runs_scored, 12);
        assert_eq!(stats.best_bowling_text(), "1/9");
        assert_eq!(stats.full_matches_played, 0);

        let json = serde_json::to_value(CareerStats::default()).unwrap();
        assert_eq!(json["bestBowling"]["runs"], 999);
        assert_eq!(json.as_object().map(|fields| fields.len()), Some(19));
    }
}
