//! Visit sequence model.

use serde::{Deserialize, Serialize};

use super::Track;

/// The ordered head positions produced by a policy.
///
/// The first entry is the initial head position; the rest are the tracks the
/// head moves to, in order. SCAN and C-SCAN may include boundary positions
/// the head passes through without servicing a request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitSequence(Vec<Track>);

impl VisitSequence {
    /// Starts a sequence at the initial head position.
    pub fn starting_at(initial_position: Track) -> Self {
        Self(vec![initial_position])
    }

    /// Wraps raw positions without any checks.
    pub fn from_positions(positions: Vec<Track>) -> Self {
        Self(positions)
    }

    pub(crate) fn push(&mut self, track: Track) {
        self.0.push(track);
    }

    pub(crate) fn extend(&mut self, tracks: impl IntoIterator<Item = Track>) {
        self.0.extend(tracks);
    }

    /// All positions, including the initial one.
    pub fn positions(&self) -> &[Track] {
        &self.0
    }

    /// The initial head position.
    pub fn initial(&self) -> Option<Track> {
        self.0.first().copied()
    }

    /// Positions after the initial one.
    pub fn visits(&self) -> &[Track] {
        self.0.get(1..).unwrap_or(&[])
    }

    /// The last position reached.
    pub fn last(&self) -> Option<Track> {
        self.0.last().copied()
    }

    /// Number of positions, including the initial one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of absolute distances between consecutive positions.
    ///
    /// Saturates at `i64::MAX`; validated runs (`max_track` at most
    /// `MAX_MAX_TRACK`) never get near it.
    pub fn total_movement(&self) -> i64 {
        self.0.windows(2).fold(0i64, |total, w| {
            total.saturating_add(w[1].saturating_sub(w[0]).saturating_abs())
        })
    }

    /// Consumes the sequence, returning the positions.
    pub fn into_positions(self) -> Vec<Track> {
        self.0
    }
}
