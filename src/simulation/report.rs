//! Exportable run report.
//!
//! Flattens a run into a serde-friendly document: the configuration that
//! produced it, one row per step, and the final statistics.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Direction, Track};

use super::{RunStatistics, Simulation};

/// One exported step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    /// Step index.
    pub step: usize,
    /// Head position at this step.
    pub head_position: Track,
    /// Distance from the previous step.
    pub seek_distance: i64,
    /// Running total of head movement.
    pub total_head_movement: i64,
    /// Requests serviced so far, in service order.
    pub serviced_queue: Vec<Track>,
}

/// A complete run report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    /// Policy short name.
    pub policy: String,
    /// Policy descriptive name.
    pub policy_description: String,
    /// Direction used; omitted for direction-agnostic policies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Head position before the first seek.
    pub initial_position: Track,
    /// Highest addressable track.
    pub max_track: Track,
    /// Deduplicated requests in arrival order.
    pub requests: Vec<Track>,
    /// Full visit sequence.
    pub visit_sequence: Vec<Track>,
    /// Per-step rows.
    pub steps: Vec<ReportRow>,
    /// Statistics at the final step.
    pub statistics: RunStatistics,
}

impl SimulationReport {
    /// Builds a report from a finished run.
    pub fn from_simulation(run: &Simulation) -> Self {
        let policy = run.policy();
        let steps = run
            .timeline()
            .records()
            .iter()
            .map(|r| ReportRow {
                step: r.step,
                head_position: r.head_position,
                seek_distance: r.seek_distance,
                total_head_movement: r.total_head_movement,
                serviced_queue: r.serviced_queue.clone(),
            })
            .collect();

        Self {
            policy: policy.name().to_string(),
            policy_description: policy.description().to_string(),
            direction: policy
                .is_direction_sensitive()
                .then_some(run.direction()),
            initial_position: run.initial_position(),
            max_track: run.max_track(),
            requests: run.requests().arrival_order().to_vec(),
            visit_sequence: run.visit_sequence().positions().to_vec(),
            steps,
            statistics: run.statistics(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
