pub mod matrix;

use crate::matrix::{compute_matrix, MatrixReport};
use anyhow::Context;
use cricket_core::rules::MatchRules;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub matches_per_cell: usize,
    pub seed: u64,
    pub output_path: PathBuf,
    pub rules_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

pub fn load_rules(path: &Path) -> anyhow::Result<MatchRules> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file at {}", path.display()))?;
    let parsed: MatchRules = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    parsed.validate()?;
    Ok(parsed)
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    if opts.matches_per_cell == 0 {
        anyhow::bail!("--matches-per-cell must be > 0");
    }
    let rules = match &opts.rules_path {
        Some(path) => load_rules(path)?,
        None => MatchRules::default(),
    };
    let matrix = compute_matrix(opts.matches_per_cell, opts.seed, &rules)?;
    matrix::write_csv(&matrix, &opts.output_path)?;
    println!(
        "Wrote {}x{} matrix to {}",
        matrix.len(),
        matrix.first().map(|r| r.len()).unwrap_or(0),
        opts.output_path.display()
    );
    if let Some(path) = &opts.json_path {
        let report = MatrixReport::new(matrix, opts.matches_per_cell, opts.seed, &rules);
        std::fs::write(path, serde_json::to_string_pretty(&report)? + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote report to {}", path.display());
    }
    Ok(())
}
