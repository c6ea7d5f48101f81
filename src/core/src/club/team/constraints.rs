use crate::squad::PositionCounts;
use serde::{Deserialize, Serialize};

/// Minimum number of players per group the squad should carry.
///
/// Only evaluated for display; assembly always follows the formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadConstraints {
    #[serde(rename = "minGK")]
    pub min_gk: usize,
    #[serde(rename = "minDEF")]
    pub min_def: usize,
    #[serde(rename = "minMID")]
    pub min_mid: usize,
    #[serde(rename = "minFWD")]
    pub min_fwd: usize,
}

impl SquadConstraints {
    pub fn new(min_gk: usize, min_def: usize, min_mid: usize, min_fwd: usize) -> Self {
        SquadConstraints {
            min_gk,
            min_def,
            min_mid,
            min_fwd,
        }
    }

    pub fn evaluate(&self, counts: &PositionCounts) -> PositionStatus {
        PositionStatus {
            gk: counts.gk >= self.min_gk,
            def: counts.def >= self.min_def,
            mid: counts.mid >= self.min_mid,
            fwd: counts.fwd >= self.min_fwd,
        }
    }
}

impl Default for SquadConstraints {
    fn default() -> Self {
        SquadConstraints::new(3, 4, 4, 2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionStatus {
    pub gk: bool,
    pub def: bool,
    pub mid: bool,
    pub fwd: bool,
}

impl PositionStatus {
    pub fn is_satisfied(&self) -> bool {
        self.gk && self.def && self.mid && self.fwd
    }
}
