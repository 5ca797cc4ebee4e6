//! Request set model and directional partitioning queries.
//!
//! A `RequestSet` is an immutable snapshot of the distinct tracks a run must
//! service. It keeps both the arrival order (needed by FCFS and for SSTF
//! tie-breaking) and a sorted copy that answers "what lies below/above this
//! pivot" queries in O(log n) plus the size of the answer.

use crate::error::SimulationError;
use crate::validation::validate_requests;

use super::Track;

/// An immutable, deduplicated set of track requests.
///
/// # Invariants
/// - Non-empty.
/// - Every track lies in `[0, max_track]`.
/// - `arrival` holds each track once, in first-seen input order.
/// - `sorted` holds the same tracks ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSet {
    arrival: Vec<Track>,
    sorted: Vec<Track>,
    max_track: Track,
}

impl RequestSet {
    /// Builds a validated request set, dropping duplicates after their
    /// first occurrence.
    ///
    /// # Errors
    /// [`SimulationError::Configuration`] if the set is empty, `max_track`
    /// is below the minimum, or any request lies outside `[0, max_track]`.
    pub fn new(requests: &[Track], max_track: Track) -> Result<Self, SimulationError> {
        validate_requests(requests, max_track)?;
        Ok(Self::from_validated(requests, max_track))
    }

    /// Builds a request set from input that has already passed validation.
    pub(crate) fn from_validated(requests: &[Track], max_track: Track) -> Self {
        let arrival = dedup_preserving_order(requests);
        let mut sorted = arrival.clone();
        sorted.sort_unstable();
        Self {
            arrival,
            sorted,
            max_track,
        }
    }

    /// Requests in arrival order.
    pub fn arrival_order(&self) -> &[Track] {
        &self.arrival
    }

    /// Requests in ascending track order.
    pub fn sorted(&self) -> &[Track] {
        &self.sorted
    }

    /// Highest addressable track.
    pub fn max_track(&self) -> Track {
        self.max_track
    }

    /// Number of distinct requests.
    pub fn len(&self) -> usize {
        self.arrival.len()
    }

    /// Always `false` for a validated set.
    pub fn is_empty(&self) -> bool {
        self.arrival.is_empty()
    }

    /// Whether `track` is one of the requests.
    pub fn contains(&self, track: Track) -> bool {
        self.sorted.binary_search(&track).is_ok()
    }

    /// Requests strictly below `pivot`, nearest first (descending).
    pub fn below(&self, pivot: Track) -> Vec<Track> {
        let end = self.sorted.partition_point(|&t| t < pivot);
        self.sorted[..end].iter().rev().copied().collect()
    }

    /// Requests at or below `pivot`, nearest first (descending).
    pub fn at_or_below(&self, pivot: Track) -> Vec<Track> {
        let end = self.sorted.partition_point(|&t| t <= pivot);
        self.sorted[..end].iter().rev().copied().collect()
    }

    /// Requests strictly above `pivot`, nearest first (ascending).
    pub fn above(&self, pivot: Track) -> Vec<Track> {
        let start = self.sorted.partition_point(|&t| t <= pivot);
        self.sorted[start..].to_vec()
    }

    /// Requests at or above `pivot`, nearest first (ascending).
    pub fn at_or_above(&self, pivot: Track) -> Vec<Track> {
        let start = self.sorted.partition_point(|&t| t < pivot);
        self.sorted[start..].to_vec()
    }
}

/// Index of the candidate nearest to `pivot`.
///
/// Ties resolve to the candidate that appears first in `candidates`, not to
/// the numerically smaller track. Returns `None` for an empty slice.
pub fn nearest_index(pivot: Track, candidates: &[Track]) -> Option<usize> {
    let mut best: Option<(usize, Track)> = None;
    for (idx, &track) in candidates.iter().enumerate() {
        let distance = (track - pivot).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((idx, distance)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// The candidate nearest to `pivot`, with first-encountered tie-breaking.
pub fn nearest(pivot: Track, candidates: &[Track]) -> Option<Track> {
    nearest_index(pivot, candidates).map(|idx| candidates[idx])
}

/// Removes duplicates, keeping the first occurrence of each track.
pub(crate) fn dedup_preserving_order(tracks: &[Track]) -> Vec<Track> {
    let mut seen = std::collections::HashSet::with_capacity(tracks.len());
    tracks.iter().copied().filter(|t| seen.insert(*t)).collect()
}
