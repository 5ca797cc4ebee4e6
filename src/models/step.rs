//! Step record model.
//!
//! One record per position in a visit sequence, including the initial one.
//! Records are produced once per run by the timeline materializer and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

use super::Track;

/// A snapshot of the simulation after the head reaches one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    /// Step index (0 = initial position).
    pub step: usize,
    /// Head position at this step.
    pub head_position: Track,
    /// Distance from the previous step's position (0 at step 0).
    pub seek_distance: i64,
    /// Running total of seek distances up to and including this step.
    pub total_head_movement: i64,
    /// Requests still pending, in arrival order.
    pub pending_queue: Vec<Track>,
    /// Requests serviced so far, in service order.
    pub serviced_queue: Vec<Track>,
    /// The request serviced on arrival at this step, if any.
    pub serviced: Option<Track>,
    /// The position of the following step, or `None` at the end.
    pub next_position: Option<Track>,
    /// Narration for display.
    pub description: String,
}

impl StepRecord {
    /// Seeks performed so far. Every step after the first is one seek.
    #[inline]
    pub fn seeks_count(&self) -> usize {
        self.step
    }

    /// Mean seek distance so far, or 0 before the first seek.
    pub fn average_seek_time(&self) -> f64 {
        if self.step == 0 {
            0.0
        } else {
            self.total_head_movement as f64 / self.step as f64
        }
    }

    /// Whether this is the last step of its timeline.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.next_position.is_none()
    }
}
