use crate::innings::Innings;
use crate::model::Outcome;
use crate::sim::BallInput;
use crate::state::Match;
use serde_json::json;

/// Machine-readable ball-by-ball record of one match, in a pipe-delimited
/// line protocol.
#[derive(Clone, Debug, Default)]
pub struct MatchLogger {
    mode: String,
    log: Vec<String>,
}

impl MatchLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_start(&mut self, state: &Match) {
        self.mode = state.mode().to_string();
        let target = state
            .target()
            .map(|target| target.to_string())
            .unwrap_or_default();
        self.log
            .push(format!("|start|{}|{:?}|{target}", self.mode, state.phase()));
    }

    pub fn log_ball(&mut self, innings: &Innings, input: BallInput, outcome: Outcome) {
        self.log.push(format!(
            "|ball|{}|{input}|{}|{}",
            innings.overs_text(),
            outcome.code(),
            innings.score_text()
        ));
    }

    pub fn log_innings_break(&mut self, state: &Match) {
        let target = state.target().unwrap_or_default();
        self.log.push(format!(
            "|innings|{}|{target}",
            state.first_innings().score_text()
        ));
    }

    pub fn log_result(&mut self, state: &Match) {
        match state.result() {
            Some(result) => self.log.push(format!(
                "|result|{result}|{}",
                state.current_innings().score_text()
            )),
            None => self.log.push("|result|".to_string()),
        }
    }

    pub fn log_lines(&self) -> &[String] {
        &self.log
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "mode": self.mode,
            "log": self.log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineOptions, MatchEngine};
    use crate::model::{Delivery, Mode};
    use crate::source::ScriptedSource;

    #[test]
    fn records_every_ball_and_the_result() {
        let options = EngineOptions {
            target: Some(5),
            ..EngineOptions::default()
        };
        let source = ScriptedSource::new([Outcome::Dot, Outcome::Six], 0);
        let mut engine = MatchEngine::with_source(Mode::Bowling, false, options, source).unwrap();
        engine.play_delivery(Delivery::Yorker).unwrap();
        engine.play_delivery(Delivery::Bouncer).unwrap();

        let lines = engine.logger().log_lines();
        assert_eq!(lines[0], "|start|bowling|SingleInningsActive|5");
        assert_eq!(lines[1], "|ball|0.1|Yorker|0|0/0");
        assert_eq!(lines[2], "|ball|0.2|Bouncer|6|6/0");
        assert_eq!(lines[3], "|result|loss|6/0");

        let json = engine.logger().to_json();
        assert_eq!(json["mode"], "bowling");
        assert_eq!(json["log"].as_array().map(Vec::len), Some(4));
    }
}
