//! Input validation for simulation runs.
//!
//! Checks a configuration before any policy executes. Detects:
//! - Empty request sets
//! - Track bounds below the minimum or above the maximum
//! - Initial head positions outside `[0, max_track]`
//! - Requests outside `[0, max_track]`
//!
//! Also hosts the completeness check applied to every visit sequence
//! before it is materialized into a timeline.

use std::collections::HashMap;
use std::fmt;

use crate::error::SimulationError;
use crate::models::{Track, VisitSequence, MAX_MAX_TRACK, MIN_MAX_TRACK};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No requests were supplied.
    EmptyRequestSet,
    /// `max_track` is below [`MIN_MAX_TRACK`] or above [`MAX_MAX_TRACK`].
    InvalidMaxTrack,
    /// The initial head position lies outside the disk.
    PositionOutOfRange,
    /// A request lies outside the disk.
    RequestOutOfRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a request set against the disk bound.
///
/// Checks:
/// 1. `MIN_MAX_TRACK <= max_track <= MAX_MAX_TRACK`
/// 2. At least one request
/// 3. Every request lies in `[0, max_track]`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_requests(requests: &[Track], max_track: Track) -> ValidationResult {
    let mut errors = Vec::new();
    check_requests(requests, max_track, &mut errors);
    finish(errors)
}

/// Validates a full run configuration.
///
/// Runs [`validate_requests`] and additionally checks that the initial
/// head position lies in `[0, max_track]`.
pub fn validate_config(
    initial_position: Track,
    max_track: Track,
    requests: &[Track],
) -> ValidationResult {
    let mut errors = Vec::new();
    check_requests(requests, max_track, &mut errors);

    if !(0..=max_track).contains(&initial_position) {
        errors.push(ValidationError::new(
            ValidationErrorKind::PositionOutOfRange,
            format!("initial position {initial_position} is outside [0, {max_track}]"),
        ));
    }

    finish(errors)
}

fn check_requests(requests: &[Track], max_track: Track, errors: &mut Vec<ValidationError>) {
    if max_track < MIN_MAX_TRACK {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidMaxTrack,
            format!("max track {max_track} is below the minimum of {MIN_MAX_TRACK}"),
        ));
    } else if max_track > MAX_MAX_TRACK {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidMaxTrack,
            format!("max track {max_track} is above the maximum of {MAX_MAX_TRACK}"),
        ));
    }

    if requests.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRequestSet,
            "request set is empty",
        ));
    }

    for &track in requests {
        if !(0..=max_track).contains(&track) {
            errors.push(ValidationError::new(
                ValidationErrorKind::RequestOutOfRange,
                format!("request {track} is outside [0, {max_track}]"),
            ));
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Verifies that a visit sequence services every request exactly once.
///
/// The first entry must be `initial_position`. After it, every request must
/// appear exactly once, and any other entry must be a boundary (`0` or
/// `max_track`) the head passes through without servicing. Each such
/// boundary may appear at most once.
///
/// # Errors
/// Returns [`SimulationError::InvariantViolation`] describing the first
/// discrepancy found.
pub fn check_visit_sequence(
    sequence: &VisitSequence,
    initial_position: Track,
    max_track: Track,
    requests: &[Track],
) -> Result<(), SimulationError> {
    let Some(first) = sequence.initial() else {
        return Err(SimulationError::invariant("visit sequence is empty"));
    };
    if first != initial_position {
        return Err(SimulationError::invariant(format!(
            "visit sequence starts at {first}, expected initial position {initial_position}"
        )));
    }

    let mut seen: HashMap<Track, usize> = requests.iter().map(|&r| (r, 0)).collect();
    let mut boundaries: HashMap<Track, usize> = HashMap::new();
    for &track in sequence.visits() {
        match seen.get_mut(&track) {
            Some(count) => {
                *count += 1;
                if *count > 1 {
                    return Err(SimulationError::invariant(format!(
                        "request {track} visited more than once"
                    )));
                }
            }
            None if track == 0 || track == max_track => {
                let count = boundaries.entry(track).or_insert(0);
                *count += 1;
                if *count > 1 {
                    return Err(SimulationError::invariant(format!(
                        "boundary {track} visited more than once"
                    )));
                }
            }
            None => {
                return Err(SimulationError::invariant(format!(
                    "visit to {track} is neither a request nor a boundary"
                )));
            }
        }
    }

    let mut missing: Vec<Track> = seen
        .into_iter()
        .filter(|&(_, count)| count == 0)
        .map(|(track, _)| track)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        missing.sort_unstable();
        Err(SimulationError::invariant(format!(
            "requests never serviced: {missing:?}"
        )))
    }
}
