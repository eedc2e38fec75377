use cricket_core::model::{Action, Delivery, MatchResult};
use cricket_core::rules::MatchRules;
use cricket_sim::matrix::{compute_matrix, simulate_match, write_csv, MatrixReport, Strategy};

fn short_rules() -> MatchRules {
    MatchRules {
        overs_per_innings: 2,
        ..MatchRules::default()
    }
}

#[test]
fn same_seed_plays_the_same_match() {
    let strategy = Strategy {
        shot: Action::Drive,
        delivery: Delivery::Yorker,
    };
    let rules = short_rules();
    for seed in 0..20 {
        for batting_first in [true, false] {
            let a = simulate_match(strategy, batting_first, seed, &rules).unwrap();
            let b = simulate_match(strategy, batting_first, seed, &rules).unwrap();
            assert_eq!(a, b, "seed {seed}");
        }
    }
}

#[test]
fn every_simulated_match_has_a_result() {
    let rules = short_rules();
    let mut seen_win_or_loss = false;
    for (i, shot) in Action::ALL.into_iter().enumerate() {
        let strategy = Strategy {
            shot,
            delivery: Delivery::ALL[i],
        };
        for seed in 0..10 {
            let result = simulate_match(strategy, seed % 2 == 0, seed, &rules).unwrap();
            seen_win_or_loss |= result != MatchResult::Draw;
        }
    }
    assert!(seen_win_or_loss);
}

#[test]
fn matrix_is_six_by_six_and_reproducible() {
    let rules = short_rules();
    let first = compute_matrix(4, 42, &rules).unwrap();
    let second = compute_matrix(4, 42, &rules).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), Action::ALL.len());
    for row in &first {
        assert_eq!(row.len(), Delivery::ALL.len());
        for &rate in row {
            assert!((0.0..=1.0).contains(&rate), "rate {rate}");
            // Four matches per cell with draws worth half: steps of 1/8.
            assert_eq!((rate * 8.0).fract(), 0.0, "rate {rate}");
        }
    }
}

#[test]
fn csv_has_named_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matrix.csv");
    let mut matrix = vec![vec![0.0; 6]; 6];
    matrix[0][0] = 0.5;
    matrix[5][5] = 1.0;
    write_csv(&matrix, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "shot,Yorker,Bouncer,Spin,Outswinger,Inswinger,Slower");
    assert_eq!(
        lines[1],
        "Defensive,0.5000,0.0000,0.0000,0.0000,0.0000,0.0000"
    );
    assert!(lines[6].starts_with("Slog,"));
    assert!(lines[6].ends_with(",1.0000"));
}

#[test]
fn report_serializes_labels_with_rates() {
    let matrix = vec![vec![0.25; 6]; 6];
    let report = MatrixReport::new(matrix, 8, 3, &MatchRules::default());
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["shots"][0], "Defensive");
    assert_eq!(value["deliveries"][5], "Slower");
    assert_eq!(value["win_rates"][2][3], 0.25);
    assert_eq!(value["rules"]["overs_per_innings"], 10);
}
