//! Simulation run configuration.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::input::parse_requests;
use crate::scheduling::Policy;

use super::{Direction, Track};

/// Default highest track (a 200-cylinder disk).
pub const DEFAULT_MAX_TRACK: Track = 199;

/// Smallest accepted `max_track`.
pub const MIN_MAX_TRACK: Track = 1;

/// Largest accepted `max_track`. Keeps every running movement total well
/// inside `i64`.
pub const MAX_MAX_TRACK: Track = u32::MAX as Track;

fn default_max_track() -> Track {
    DEFAULT_MAX_TRACK
}

/// Input container for a simulation run.
///
/// The policy is stored by name and resolved when the run is built, so an
/// unknown name surfaces as [`SimulationError::PolicyNotFound`] at that point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Head position before the first seek.
    pub initial_position: Track,
    /// Highest addressable track.
    #[serde(default = "default_max_track")]
    pub max_track: Track,
    /// Requested tracks. Duplicates are dropped when the run is built.
    pub requests: Vec<Track>,
    /// Policy name (see [`Policy::from_name`]).
    #[serde(rename = "policyName")]
    pub policy: String,
    /// Direction hint. `None` means [`Direction::TowardLow`].
    #[serde(
        default,
        rename = "directionHint",
        skip_serializing_if = "Option::is_none"
    )]
    pub direction: Option<Direction>,
}

impl SimulationConfig {
    /// Creates a FCFS configuration on a 200-track disk.
    pub fn new(initial_position: Track, requests: Vec<Track>) -> Self {
        Self {
            initial_position,
            max_track: DEFAULT_MAX_TRACK,
            requests,
            policy: Policy::Fcfs.name().to_string(),
            direction: None,
        }
    }

    /// Sets the highest track.
    pub fn with_max_track(mut self, max_track: Track) -> Self {
        self.max_track = max_track;
        self
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy.name().to_string();
        self
    }

    /// Sets the policy by name. Resolution is deferred to run construction.
    pub fn with_policy_name(mut self, name: impl Into<String>) -> Self {
        self.policy = name.into();
        self
    }

    /// Sets the direction hint.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Replaces the requests with those parsed from comma-separated text.
    ///
    /// Malformed and out-of-range tokens are dropped, so call this after
    /// [`with_max_track`](Self::with_max_track).
    pub fn with_requests_text(mut self, text: &str) -> Self {
        self.requests = parse_requests(text, self.max_track).tracks;
        self
    }

    /// The direction hint, defaulting to [`Direction::TowardLow`].
    pub fn direction_or_default(&self) -> Direction {
        self.direction.unwrap_or_default()
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string(self)?)
    }
}
