//! Simulation run.
//!
//! A run is a value built once from a [`SimulationConfig`]: resolve the
//! policy, validate, snapshot the requests, schedule, materialize. A new
//! configuration means a new run; nothing in a run changes after
//! construction.

use tracing::debug;

use crate::error::SimulationError;
use crate::models::{Direction, RequestSet, SimulationConfig, Track, VisitSequence};
use crate::scheduling::Policy;
use crate::validation::validate_config;

use super::{Playback, RunStatistics, SimulationReport, Timeline};

/// One complete, immutable simulation run.
///
/// # Example
///
/// ```
/// use disk_sched::models::{Direction, SimulationConfig};
/// use disk_sched::scheduling::Policy;
/// use disk_sched::simulation::Simulation;
///
/// let config = SimulationConfig::new(53, vec![98, 183, 37, 122, 14, 124, 65, 67])
///     .with_policy(Policy::CScan)
///     .with_direction(Direction::TowardHigh);
/// let run = Simulation::new(config).unwrap();
/// assert_eq!(run.timeline().total_head_movement(), 382);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    policy: Policy,
    direction: Direction,
    requests: RequestSet,
    sequence: VisitSequence,
    timeline: Timeline,
}

impl Simulation {
    /// Builds a run from a configuration.
    ///
    /// # Errors
    /// - [`SimulationError::PolicyNotFound`] if the policy name is unknown.
    /// - [`SimulationError::Configuration`] if validation fails.
    /// - [`SimulationError::InvariantViolation`] if the policy output does
    ///   not service every request exactly once.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        let policy = Policy::from_name(&config.policy)?;
        validate_config(config.initial_position, config.max_track, &config.requests)?;

        let direction = config.direction_or_default();
        let requests = RequestSet::from_validated(&config.requests, config.max_track);
        let sequence = policy.schedule_set(config.initial_position, &requests, direction);
        let timeline = Timeline::materialize(
            &sequence,
            config.initial_position,
            config.max_track,
            requests.arrival_order(),
        )?;

        debug!(
            policy = policy.name(),
            direction = %direction,
            requests = requests.len(),
            total_head_movement = timeline.total_head_movement(),
            "simulation run created"
        );

        Ok(Self {
            config,
            policy,
            direction,
            requests,
            sequence,
            timeline,
        })
    }

    /// Parses a JSON configuration and builds a run from it.
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        Self::new(SimulationConfig::from_json(json)?)
    }

    /// The configuration this run was built from.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The resolved policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The effective direction (defaulted when the hint was absent).
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Head position before the first seek.
    pub fn initial_position(&self) -> Track {
        self.config.initial_position
    }

    /// Highest addressable track.
    pub fn max_track(&self) -> Track {
        self.config.max_track
    }

    /// The deduplicated request snapshot.
    pub fn requests(&self) -> &RequestSet {
        &self.requests
    }

    /// The policy's visit sequence.
    pub fn visit_sequence(&self) -> &VisitSequence {
        &self.sequence
    }

    /// The step timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Statistics for the whole run.
    pub fn statistics(&self) -> RunStatistics {
        self.timeline.statistics()
    }

    /// A replay cursor at step 0.
    pub fn playback(&self) -> Playback<'_> {
        Playback::new(&self.timeline)
    }

    /// An exportable report of every step.
    pub fn report(&self) -> SimulationReport {
        SimulationReport::from_simulation(self)
    }
}
