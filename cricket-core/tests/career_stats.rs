use cricket_core::prelude::*;
use cricket_core::stats::BestBowling;

fn finished_full_match(player_batting_first: bool, outcomes: Vec<Outcome>) -> Match {
    let rules = MatchRules {
        overs_per_innings: 2,
        ..MatchRules::default()
    };
    let options = EngineOptions {
        rules,
        ..EngineOptions::default()
    };
    let source = ScriptedSource::new(outcomes, 5);
    let mut engine =
        MatchEngine::with_source(Mode::FullMatch, player_batting_first, options, source).unwrap();
    while !engine.is_terminal() {
        match engine.awaiting() {
            Awaiting::Delivery => {
                engine.play_delivery(Delivery::Yorker).unwrap();
            }
            _ => {
                engine.prepare_delivery().unwrap();
                engine.play_action(Action::Drive).unwrap();
            }
        }
    }
    engine.state().clone()
}

#[test]
fn saved_record_reloads_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::in_dir(dir.path());

    let mut stats = CareerStats::default();
    stats.update_batting(67, 48, true, 7, 2, true);
    stats.update_bowling(54, 60, 3, false);
    stats.update_full_match(true);
    store.save(&stats).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, stats);
    assert_eq!(loaded.best_bowling_text(), "3/54");
}

#[test]
fn reset_restores_every_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::in_dir(dir.path());
    let mut stats = CareerStats::default();
    stats.update_bowling(20, 30, 4, true);
    store.save(&stats).unwrap();

    let reset = store.reset().unwrap();
    assert_eq!(reset, CareerStats::default());
    assert!(!store.path().exists());

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded, CareerStats::default());
    assert_eq!(reloaded.best_bowling, BestBowling { wickets: 0, runs: 999 });
    assert_eq!(reloaded.best_bowling_text(), "-");
}

#[test]
fn partial_record_fills_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::in_dir(dir.path());
    std::fs::write(store.path(), r#"{"battingInnings": 3, "highestScore": 88}"#).unwrap();
    let stats = store.load().unwrap();
    assert_eq!(stats.batting_innings, 3);
    assert_eq!(stats.highest_score, 88);
    assert_eq!(stats.best_bowling, BestBowling::default());
}

#[test]
fn partial_best_bowling_keeps_the_rest_of_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::in_dir(dir.path());
    std::fs::write(
        store.path(),
        r#"{"battingInnings":40,"totalRunsScored":2000,"bestBowling":{"wickets":3}}"#,
    )
    .unwrap();
    let stats = store.load().unwrap();
    assert_eq!(stats.batting_innings, 40);
    assert_eq!(stats.total_runs_scored, 2000);
    assert_eq!(stats.best_bowling, BestBowling { wickets: 3, runs: 999 });
}

#[test]
fn unreadable_record_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::in_dir(dir.path());
    let corrupt = r#"{"battingInnings":40,"totalRunsScored":"#;
    std::fs::write(store.path(), corrupt).unwrap();

    let state = finished_full_match(true, vec![Outcome::Single; 24]);
    assert!(store.record_match(&state).is_err());
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), corrupt);
}

#[test]
fn finished_match_is_added_to_the_stored_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::in_dir(dir.path());
    let mut stats = CareerStats::default();
    stats.update_batting(30, 20, false, 2, 1, true);
    store.save(&stats).unwrap();

    let state = finished_full_match(true, vec![Outcome::Single; 24]);
    assert!(store.record_match(&state).unwrap());
    let loaded = store.load().unwrap();
    assert_eq!(loaded.batting_innings, 2);
    assert_eq!(loaded.total_runs_scored, 42);
    assert_eq!(loaded.full_matches_played, 1);
}

#[test]
fn full_match_feeds_both_records() {
    // Player bats first: 12 balls of singles, then bowls the computer out.
    let mut outcomes = vec![Outcome::Single; 12];
    outcomes.extend([Outcome::Wicket; 10]);
    let state = finished_full_match(true, outcomes);
    assert_eq!(state.result(), Some(MatchResult::Win));

    let mut stats = CareerStats::default();
    assert!(stats.record_match(&state));
    assert_eq!(stats.batting_innings, 1);
    assert_eq!(stats.total_runs_scored, 12);
    assert_eq!(stats.total_balls_faced, 12);
    assert_eq!(stats.times_out, 0);
    assert_eq!(stats.batting_wins, 1);
    assert_eq!(stats.bowling_innings, 1);
    assert_eq!(stats.total_wickets_taken, 10);
    assert_eq!(stats.total_balls_bowled, 10);
    assert_eq!(stats.best_bowling_text(), "10/0");
    assert_eq!((stats.full_matches_played, stats.full_match_wins), (1, 1));
}

#[test]
fn draw_is_booked_as_not_won() {
    // Computer makes 12, player makes exactly 12 off two overs.
    let outcomes = vec![Outcome::Single; 24];
    let state = finished_full_match(false, outcomes);
    assert_eq!(state.result(), Some(MatchResult::Draw));

    let mut stats = CareerStats::default();
    stats.record_match(&state);
    assert_eq!(stats.full_match_losses, 1);
    assert_eq!(stats.batting_losses, 1);
    assert_eq!(stats.bowling_losses, 1);
    assert_eq!(stats.highest_score, 12);
}

#[test]
fn unfinished_match_is_not_recorded() {
    let options = EngineOptions {
        target: Some(100),
        ..EngineOptions::default()
    };
    let mut engine = MatchEngine::start_match(Mode::Batting, true, options).unwrap();
    engine.play_action(Action::Defensive).unwrap();
    let mut stats = CareerStats::default();
    assert!(!stats.record_match(engine.state()));
    assert_eq!(stats, CareerStats::default());
}
