//! Side-by-side policy comparison.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{SimulationConfig, Track};
use crate::scheduling::Policy;

use super::{RunStatistics, Simulation};

/// Outcome of one policy over a shared configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySummary {
    /// The policy.
    pub policy: Policy,
    /// Its visit sequence.
    pub visit_sequence: Vec<Track>,
    /// Its final statistics.
    pub statistics: RunStatistics,
}

/// Runs every policy over `config`, ignoring its policy name.
///
/// Each run builds its own request snapshot. Results follow
/// [`Policy::ALL`] order.
///
/// # Errors
/// The first configuration error encountered; since all runs share the
/// same inputs, a failure in one means a failure in all.
pub fn compare_policies(config: &SimulationConfig) -> Result<Vec<PolicySummary>, SimulationError> {
    Policy::ALL
        .iter()
        .map(|&policy| -> Result<PolicySummary, SimulationError> {
            let run = Simulation::new(config.clone().with_policy(policy))?;
            Ok(PolicySummary {
                policy,
                visit_sequence: run.visit_sequence().positions().to_vec(),
                statistics: run.statistics(),
            })
        })
        .collect()
}

/// The summary with the least total head movement. Ties keep the earlier
/// policy in [`Policy::ALL`] order.
pub fn least_movement(summaries: &[PolicySummary]) -> Option<&PolicySummary> {
    summaries
        .iter()
        .min_by_key(|s| s.statistics.total_head_movement)
}
