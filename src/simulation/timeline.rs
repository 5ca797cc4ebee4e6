//! Step materializer.
//!
//! Converts a visit sequence into the replayable list of [`StepRecord`]s.
//!
//! # Algorithm
//!
//! 1. Check the sequence services every request exactly once.
//! 2. Emit step 0 at the initial position: zero movement, every request
//!    pending, nothing serviced.
//! 3. For each later position, add `|current - previous|` to the running
//!    total and, if the position is still pending, move it to serviced.
//! 4. Link each record to the next record's position.
//!
//! # Complexity
//! O(n²) time in the worst case from pending-queue removal. Every record
//! carries its own copy of the pending and serviced lists, so memory is
//! O(n²) as well: about n² stored tracks for n requests (9 million for
//! 3000). Fine for queues in the low thousands; larger queues should replay
//! from the visit sequence instead.

use tracing::{debug, error};

use crate::error::SimulationError;
use crate::models::{dedup_preserving_order, StepRecord, Track, VisitSequence};
use crate::validation::check_visit_sequence;

use super::RunStatistics;

/// The immutable step-by-step history of a run.
///
/// Always holds at least one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    max_track: Track,
    records: Vec<StepRecord>,
}

impl Timeline {
    /// Materializes a visit sequence into step records.
    ///
    /// `requests` may contain duplicates; they are collapsed the same way
    /// the request set collapses them.
    ///
    /// # Errors
    /// [`SimulationError::InvariantViolation`] if the sequence is empty,
    /// does not start at `initial_position`, skips or repeats a request, or
    /// visits a non-boundary track that was never requested, or if the
    /// running movement total overflows `i64`.
    pub fn materialize(
        sequence: &VisitSequence,
        initial_position: Track,
        max_track: Track,
        requests: &[Track],
    ) -> Result<Self, SimulationError> {
        let requests = dedup_preserving_order(requests);
        if let Err(err) = check_visit_sequence(sequence, initial_position, max_track, &requests) {
            error!(error = %err, "visit sequence failed completeness check");
            return Err(err);
        }

        let mut records = Vec::with_capacity(sequence.len());
        let mut pending = requests;
        let mut serviced: Vec<Track> = Vec::with_capacity(pending.len());
        let mut total: i64 = 0;

        records.push(StepRecord {
            step: 0,
            head_position: initial_position,
            seek_distance: 0,
            total_head_movement: 0,
            description: describe_start(initial_position, pending.len()),
            pending_queue: pending.clone(),
            serviced_queue: Vec::new(),
            serviced: None,
            next_position: None,
        });

        let mut previous = initial_position;
        for (offset, &current) in sequence.visits().iter().enumerate() {
            let seek = current
                .checked_sub(previous)
                .and_then(i64::checked_abs)
                .ok_or_else(|| {
                    SimulationError::invariant(format!(
                        "seek from {previous} to {current} overflows"
                    ))
                })?;
            total = total.checked_add(seek).ok_or_else(|| {
                SimulationError::invariant(format!(
                    "total head movement overflows at step {}",
                    offset + 1
                ))
            })?;

            let hit = pending.iter().position(|&t| t == current).map(|idx| {
                let track = pending.remove(idx);
                serviced.push(track);
                track
            });

            records.push(StepRecord {
                step: offset + 1,
                head_position: current,
                seek_distance: seek,
                total_head_movement: total,
                description: describe_move(previous, current, seek, hit, pending.is_empty()),
                pending_queue: pending.clone(),
                serviced_queue: serviced.clone(),
                serviced: hit,
                next_position: None,
            });
            previous = current;
        }

        for i in 1..records.len() {
            let next = records[i].head_position;
            records[i - 1].next_position = Some(next);
        }

        debug!(
            steps = records.len(),
            total_head_movement = total,
            "materialized timeline"
        );

        Ok(Self { max_track, records })
    }

    /// All records, step 0 first.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Record at step `index`.
    pub fn get(&self, index: usize) -> Option<&StepRecord> {
        self.records.get(index)
    }

    /// Number of records (visit sequence length).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; a timeline has at least its initial record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the last record.
    pub fn last_index(&self) -> usize {
        self.records.len().saturating_sub(1)
    }

    /// The initial record.
    pub fn first(&self) -> &StepRecord {
        &self.records[0]
    }

    /// The last record.
    pub fn final_record(&self) -> &StepRecord {
        &self.records[self.last_index()]
    }

    /// Head position before the first seek.
    pub fn initial_position(&self) -> Track {
        self.first().head_position
    }

    /// Highest addressable track, for scaling renderers.
    pub fn max_track(&self) -> Track {
        self.max_track
    }

    /// Total head movement over the whole run.
    pub fn total_head_movement(&self) -> i64 {
        self.final_record().total_head_movement
    }

    /// Head positions in step order.
    pub fn positions(&self) -> impl Iterator<Item = Track> + '_ {
        self.records.iter().map(|r| r.head_position)
    }

    /// Statistics over the whole run.
    pub fn statistics(&self) -> RunStatistics {
        RunStatistics::calculate(&self.records)
    }

    /// Statistics as of step `index` (inclusive).
    pub fn statistics_at(&self, index: usize) -> Option<RunStatistics> {
        self.records
            .get(..=index)
            .map(RunStatistics::calculate)
    }
}

fn describe_start(position: Track, pending: usize) -> String {
    format!("Head starts at track {position} with {pending} pending requests.")
}

fn describe_move(
    from: Track,
    to: Track,
    seek: i64,
    serviced: Option<Track>,
    done: bool,
) -> String {
    let mut text = match serviced {
        Some(track) if seek == 0 => {
            format!("Head services request {track} at its current position.")
        }
        Some(track) => {
            format!("Head moves from {from} to {to} (seek {seek}) and services request {track}.")
        }
        None => format!("Head moves from {from} to {to} (seek {seek}) at the disk boundary."),
    };
    if done && serviced.is_some() {
        text.push_str(" All requests serviced.");
    }
    text
}
