//! Career stats persisted as one JSON file under a fixed key.

use crate::error::StoreError;
use crate::state::Match;
use crate::stats::CareerStats;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const STORAGE_KEY: &str = "cricket-player-stats";

#[derive(Clone, Debug)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    /// Store keeping its file in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record. A missing file is an empty career.
    pub fn load(&self) -> Result<CareerStats, StoreError> {
        if !self.path.exists() {
            log::debug!("no stats at {:?}, starting fresh", self.path);
            return Ok(CareerStats::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let stats = serde_json::from_str(&data)?;
        log::debug!("loaded stats from {:?}", self.path);
        Ok(stats)
    }

    /// Like [`StatsStore::load`], but an unreadable record is logged and
    /// replaced with an empty one.
    pub fn load_or_default(&self) -> CareerStats {
        self.load().unwrap_or_else(|err| {
            log::warn!("could not read stats from {:?}: {}", self.path, err);
            CareerStats::default()
        })
    }

    /// Write the whole record: temp file first, then rename over the old one.
    pub fn save(&self, stats: &CareerStats) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_vec_pretty(stats)?;
        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &self.path)?;
        log::info!("saved stats to {:?}", self.path);
        Ok(())
    }

    /// Add a finished match to the stored record. An unreadable record is
    /// an error and is left on disk untouched. Returns whether anything
    /// was written.
    pub fn record_match(&self, state: &Match) -> Result<bool, StoreError> {
        let mut stats = self.load()?;
        if !stats.record_match(state) {
            return Ok(false);
        }
        self.save(&stats)?;
        Ok(true)
    }

    /// Forget the record. Returns the defaults it now reads as.
    pub fn reset(&self) -> Result<CareerStats, StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            log::info!("removed stats at {:?}", self.path);
        }
        Ok(CareerStats::default())
    }
}
