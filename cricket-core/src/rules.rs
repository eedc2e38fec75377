//! Match limits and single-innings target range.

use crate::error::TableError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRules {
    pub overs_per_innings: u32,
    pub wickets_per_innings: u32,
    pub balls_per_over: u32,
    /// Inclusive bounds for the randomly set target in single-innings modes.
    pub target_min: u32,
    pub target_max: u32,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            overs_per_innings: 10,
            wickets_per_innings: 10,
            balls_per_over: 6,
            target_min: 80,
            target_max: 150,
        }
    }
}

impl MatchRules {
    pub fn validate(&self) -> Result<(), TableError> {
        if self.overs_per_innings == 0 {
            return Err(TableError::InvalidRules("overs_per_innings must be > 0"));
        }
        if self.wickets_per_innings == 0 {
            return Err(TableError::InvalidRules("wickets_per_innings must be > 0"));
        }
        if self.balls_per_over == 0 {
            return Err(TableError::InvalidRules("balls_per_over must be > 0"));
        }
        if self.target_min == 0 || self.target_min > self.target_max {
            return Err(TableError::InvalidRules(
                "target range must satisfy 0 < target_min <= target_max",
            ));
        }
        Ok(())
    }

    /// Number of values in the target range.
    pub(crate) fn target_span(&self) -> usize {
        (self.target_max - self.target_min + 1) as usize
    }
}
