//! Run statistics.
//!
//! Computes head-movement indicators from a prefix of a step timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total head movement | Sum of seek distances |
//! | Seeks | Steps after the first |
//! | Average seek | Total movement / seeks (0 with no seeks) |
//! | Max seek | Largest single seek distance |
//! | Reversals | Changes in the sign of head travel |
//! | Serviced / Pending | Request partition at the last step |

use serde::{Deserialize, Serialize};

use crate::models::StepRecord;

/// Head-movement statistics as of a given step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStatistics {
    /// Step the statistics refer to.
    pub step: usize,
    /// Sum of seek distances.
    pub total_head_movement: i64,
    /// Number of seeks performed.
    pub seeks_count: usize,
    /// Mean seek distance.
    pub average_seek_time: f64,
    /// Largest single seek distance.
    pub max_seek_distance: i64,
    /// Times the head changed travel direction. C-SCAN's wrap counts.
    pub direction_changes: usize,
    /// Requests serviced so far.
    pub serviced_count: usize,
    /// Requests still pending.
    pub pending_count: usize,
}

impl RunStatistics {
    /// Computes statistics over `records`, which must be a timeline prefix
    /// starting at step 0.
    pub fn calculate(records: &[StepRecord]) -> Self {
        let Some(last) = records.last() else {
            return Self::empty();
        };

        let max_seek_distance = records.iter().map(|r| r.seek_distance).max().unwrap_or(0);

        let mut direction_changes = 0;
        let mut heading: i64 = 0;
        for pair in records.windows(2) {
            let sign = (pair[1].head_position - pair[0].head_position).signum();
            if sign == 0 {
                continue;
            }
            if heading != 0 && sign != heading {
                direction_changes += 1;
            }
            heading = sign;
        }

        Self {
            step: last.step,
            total_head_movement: last.total_head_movement,
            seeks_count: last.seeks_count(),
            average_seek_time: last.average_seek_time(),
            max_seek_distance,
            direction_changes,
            serviced_count: last.serviced_queue.len(),
            pending_count: last.pending_queue.len(),
        }
    }

    fn empty() -> Self {
        Self {
            step: 0,
            total_head_movement: 0,
            seeks_count: 0,
            average_seek_time: 0.0,
            max_seek_distance: 0,
            direction_changes: 0,
            serviced_count: 0,
            pending_count: 0,
        }
    }

    /// Whether every request has been serviced.
    pub fn is_complete(&self) -> bool {
        self.pending_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VisitSequence;
    use crate::simulation::Timeline;

    fn timeline(positions: Vec<i64>, requests: &[i64]) -> Vec<StepRecord> {
        let initial = positions[0];
        Timeline::materialize(&VisitSequence::from_positions(positions), initial, 199, requests)
            .unwrap()
            .records()
            .to_vec()
    }

    #[test]
    fn test_basic_statistics() {
        let records = timeline(vec![53, 98, 183, 37], &[98, 183, 37]);
        let stats = RunStatistics::calculate(&records);
        assert_eq!(stats.step, 3);
        assert_eq!(stats.total_head_movement, 45 + 85 + 146);
        assert_eq!(stats.seeks_count, 3);
        assert!((stats.average_seek_time - 92.0).abs() < 1e-10);
        assert_eq!(stats.max_seek_distance, 146);
        assert_eq!(stats.direction_changes, 1);
        assert_eq!(stats.serviced_count, 3);
        assert!(stats.is_complete());
    }

    #[test]
    fn test_zero_seek_does_not_count_as_reversal() {
        let records = timeline(vec![50, 50, 60, 40], &[50, 60, 40]);
        let stats = RunStatistics::calculate(&records);
        assert_eq!(stats.direction_changes, 1);
        assert_eq!(stats.seeks_count, 3);
    }

    #[test]
    fn test_c_scan_wrap_counts_as_reversal() {
        let records = timeline(vec![53, 183, 199, 0, 37], &[183, 37]);
        let stats = RunStatistics::calculate(&records);
        assert_eq!(stats.direction_changes, 2);
        assert_eq!(stats.total_head_movement, 130 + 16 + 199 + 37);
    }

    #[test]
    fn test_initial_step_only() {
        let records = timeline(vec![53, 98], &[98]);
        let stats = RunStatistics::calculate(&records[..1]);
        assert_eq!(stats.seeks_count, 0);
        assert!((stats.average_seek_time - 0.0).abs() < 1e-10);
        assert_eq!(stats.pending_count, 1);
        assert!(!stats.is_complete());
    }

    #[test]
    fn test_empty_records() {
        let stats = RunStatistics::calculate(&[]);
        assert_eq!(stats.total_head_movement, 0);
        assert!(stats.is_complete());
    }
}
