use cricket_core::engine::{Awaiting, EngineOptions, MatchEngine};
use cricket_core::model::{Action, Delivery, MatchResult, Mode};
use cricket_core::rules::MatchRules;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

/// Fixed player strategy: the same shot to every ball, the same delivery
/// every time it bowls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Strategy {
    pub shot: Action,
    pub delivery: Delivery,
}

/// Play one full match to completion with a fixed strategy.
pub fn simulate_match(
    strategy: Strategy,
    player_batting_first: bool,
    seed: u64,
    rules: &MatchRules,
) -> anyhow::Result<MatchResult> {
    let options = EngineOptions {
        seed,
        target: None,
        rules: rules.clone(),
    };
    let mut engine = MatchEngine::start_match(Mode::FullMatch, player_batting_first, options)?;
    loop {
        match engine.awaiting() {
            Awaiting::Reveal => {
                engine.prepare_delivery()?;
            }
            Awaiting::Shot => {
                engine.play_action(strategy.shot)?;
            }
            Awaiting::Delivery => {
                engine.play_delivery(strategy.delivery)?;
            }
            Awaiting::Settle => {
                engine.settle()?;
            }
            Awaiting::Nothing => break,
        }
    }
    engine
        .state()
        .result()
        .ok_or_else(|| anyhow::anyhow!("match finished without a result"))
}

/// Player win rate (draws count half) for every shot × delivery strategy.
/// Rows follow [`Action::ALL`], columns [`Delivery::ALL`]. The toss
/// alternates between matches within a cell.
pub fn compute_matrix(
    matches_per_cell: usize,
    seed: u64,
    rules: &MatchRules,
) -> anyhow::Result<Vec<Vec<f64>>> {
    let tasks: Vec<(usize, usize)> = (0..Action::ALL.len())
        .flat_map(|a| (0..Delivery::ALL.len()).map(move |d| (a, d)))
        .collect();
    let cell_results: Vec<CellResult> = tasks
        .par_iter()
        .map(|&(a_idx, d_idx)| {
            let mut cell_rng = SmallRng::seed_from_u64(seed ^ ((a_idx as u64) << 32) ^ (d_idx as u64));
            let strategy = Strategy {
                shot: Action::ALL[a_idx],
                delivery: Delivery::ALL[d_idx],
            };
            let mut wins = 0u64;
            let mut draws = 0u64;
            for game in 0..matches_per_cell {
                let match_seed = cell_rng.gen();
                match simulate_match(strategy, game % 2 == 0, match_seed, rules)? {
                    MatchResult::Win => wins += 1,
                    MatchResult::Draw => draws += 1,
                    MatchResult::Loss => {}
                }
            }
            let total = matches_per_cell as f64;
            Ok(CellResult {
                a_idx,
                d_idx,
                win_rate: (wins as f64 + 0.5 * draws as f64) / total,
            })
        })
        .collect::<anyhow::Result<_>>()?;

    let mut matrix = vec![vec![0.0; Delivery::ALL.len()]; Action::ALL.len()];
    for cell in cell_results {
        matrix[cell.a_idx][cell.d_idx] = cell.win_rate;
    }
    Ok(matrix)
}

pub fn write_csv(matrix: &[Vec<f64>], path: &std::path::Path) -> anyhow::Result<()> {
    let mut out = String::from("shot");
    for delivery in Delivery::ALL {
        out.push(',');
        out.push_str(delivery.name());
    }
    out.push('\n');
    for (row_idx, row) in matrix.iter().enumerate() {
        out.push_str(Action::ALL[row_idx].name());
        for value in row {
            out.push_str(&format!(",{value:.4}"));
        }
        if row_idx + 1 < matrix.len() {
            out.push('\n');
        }
    }
    std::fs::write(path, out)?;
    Ok(())
}

/// JSON form of a computed matrix.
#[derive(Debug, Serialize)]
pub struct MatrixReport {
    pub matches_per_cell: usize,
    pub seed: u64,
    pub rules: MatchRules,
    pub shots: Vec<&'static str>,
    pub deliveries: Vec<&'static str>,
    pub win_rates: Vec<Vec<f64>>,
}

impl MatrixReport {
    pub fn new(matrix: Vec<Vec<f64>>, matches_per_cell: usize, seed: u64, rules: &MatchRules) -> Self {
        Self {
            matches_per_cell,
            seed,
            rules: rules.clone(),
            shots: Action::ALL.iter().map(|a| a.name()).collect(),
            deliveries: Delivery::ALL.iter().map(|d| d.name()).collect(),
            win_rates: matrix,
        }
    }
}

struct CellResult {
    a_idx: usize,
    d_idx: usize,
    win_rate: f64,
}
