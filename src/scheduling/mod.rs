//! Disk-scheduling policies.
//!
//! Six classic policies decide the order in which the head visits pending
//! requests. They form a closed set, so they are modelled as an enum whose
//! variants dispatch to pure functions sharing the partitioning queries on
//! [`RequestSet`].
//!
//! # Usage
//!
//! ```
//! use disk_sched::models::Direction;
//! use disk_sched::scheduling::Policy;
//!
//! let requests = [98, 183, 37, 122, 14, 124, 65, 67];
//! let seq = Policy::Look
//!     .schedule(53, 199, &requests, Some(Direction::TowardHigh))
//!     .unwrap();
//! assert_eq!(seq.positions(), &[53, 65, 67, 98, 122, 124, 183, 37, 14]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 5.4.3

mod policies;
#[cfg(test)]
mod proptest_policies;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;
use crate::models::{Direction, RequestSet, Track, VisitSequence};
use crate::validation::validate_config;

/// A disk-scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum Policy {
    /// First come, first served: arrival order.
    Fcfs,
    /// Shortest seek time first: greedy nearest request.
    Sstf,
    /// Elevator sweep to the disk boundary, then back.
    Scan,
    /// Sweep to the boundary, wrap to the opposite boundary, same direction.
    CScan,
    /// Sweep, reversing at the last request instead of the boundary.
    Look,
    /// Sweep, wrapping to the farthest request on the other side.
    CLook,
}

impl Policy {
    /// Every policy, in display order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sstf,
        Policy::Scan,
        Policy::CScan,
        Policy::Look,
        Policy::CLook,
    ];

    /// Short name (e.g., "SSTF").
    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sstf => "SSTF",
            Self::Scan => "SCAN",
            Self::CScan => "C-SCAN",
            Self::Look => "LOOK",
            Self::CLook => "C-LOOK",
        }
    }

    /// Descriptive name.
    pub fn description(self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Served",
            Self::Sstf => "Shortest Seek Time First",
            Self::Scan => "Elevator Sweep",
            Self::CScan => "Circular Sweep",
            Self::Look => "Look",
            Self::CLook => "Circular Look",
        }
    }

    /// Whether the direction hint changes this policy's output.
    pub fn is_direction_sensitive(self) -> bool {
        !matches!(self, Self::Fcfs | Self::Sstf)
    }

    /// Resolves a policy by name.
    ///
    /// Accepts the short names and the descriptive aliases
    /// (`arrival-order`, `nearest-first`, `sweep`, `circular-sweep`,
    /// `circular-look`), case-insensitive, with hyphens, underscores or
    /// spaces optional.
    ///
    /// # Errors
    /// [`SimulationError::PolicyNotFound`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, SimulationError> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let policy = match key.as_str() {
            "fcfs" | "fifo" | "arrivalorder" | "firstcomefirstserved" => Self::Fcfs,
            "sstf" | "nearestfirst" | "shortestseektimefirst" => Self::Sstf,
            "scan" | "sweep" | "elevator" => Self::Scan,
            "cscan" | "circularsweep" | "circularscan" => Self::CScan,
            "look" => Self::Look,
            "clook" | "circularlook" => Self::CLook,
            _ => return Err(SimulationError::policy_not_found(name)),
        };
        Ok(policy)
    }

    /// Computes the visit sequence for a configuration.
    ///
    /// Validates the inputs first; on failure no sequence is produced.
    /// `direction = None` means [`Direction::TowardLow`].
    ///
    /// # Errors
    /// [`SimulationError::Configuration`] if the request set is empty, the
    /// bound is too small, or any position lies outside `[0, max_track]`.
    pub fn schedule(
        self,
        initial_position: Track,
        max_track: Track,
        requests: &[Track],
        direction: Option<Direction>,
    ) -> Result<VisitSequence, SimulationError> {
        validate_config(initial_position, max_track, requests)?;
        let set = RequestSet::from_validated(requests, max_track);
        Ok(self.schedule_set(initial_position, &set, direction.unwrap_or_default()))
    }

    /// Computes the visit sequence over an already validated request set.
    ///
    /// `initial_position` must lie in `[0, set.max_track()]`.
    pub fn schedule_set(
        self,
        initial_position: Track,
        set: &RequestSet,
        direction: Direction,
    ) -> VisitSequence {
        match self {
            Self::Fcfs => policies::fcfs(initial_position, set),
            Self::Sstf => policies::sstf(initial_position, set),
            Self::Scan => policies::scan(initial_position, set, direction),
            Self::CScan => policies::c_scan(initial_position, set, direction),
            Self::Look => policies::look(initial_position, set, direction),
            Self::CLook => policies::c_look(initial_position, set, direction),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_short_names() {
        for policy in Policy::ALL {
            assert_eq!(Policy::from_name(policy.name()).unwrap(), policy);
        }
    }

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(Policy::from_name("cscan").unwrap(), Policy::CScan);
        assert_eq!(Policy::from_name("Circular-Sweep").unwrap(), Policy::CScan);
        assert_eq!(Policy::from_name("nearest_first").unwrap(), Policy::Sstf);
        assert_eq!(Policy::from_name("arrival order").unwrap(), Policy::Fcfs);
        assert_eq!("c-look".parse::<Policy>().unwrap(), Policy::CLook);
    }

    #[test]
    fn test_from_name_unknown() {
        let err = Policy::from_name("deadline").unwrap_err();
        assert!(matches!(err, SimulationError::PolicyNotFound { ref name } if name == "deadline"));
    }

    #[test]
    fn test_direction_sensitivity() {
        assert!(!Policy::Fcfs.is_direction_sensitive());
        assert!(!Policy::Sstf.is_direction_sensitive());
        assert!(Policy::Scan.is_direction_sensitive());
        assert!(Policy::CLook.is_direction_sensitive());
    }

    #[test]
    fn test_serde_names_match_display() {
        for policy in Policy::ALL {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy.name()));
        }
    }

    #[test]
    fn test_schedule_validates_first() {
        let err = Policy::Scan.schedule(53, 199, &[], None).unwrap_err();
        assert!(matches!(err, SimulationError::Configuration { .. }));

        let err = Policy::Fcfs.schedule(250, 199, &[10], None).unwrap_err();
        assert!(matches!(err, SimulationError::Configuration { .. }));
    }

    #[test]
    fn test_schedule_absent_direction_is_toward_low() {
        let requests = [98, 183, 37, 122, 14, 124, 65, 67];
        for policy in [Policy::Scan, Policy::CScan, Policy::Look, Policy::CLook] {
            let absent = policy.schedule(53, 199, &requests, None).unwrap();
            let low = policy
                .schedule(53, 199, &requests, Some(Direction::TowardLow))
                .unwrap();
            let high = policy
                .schedule(53, 199, &requests, Some(Direction::TowardHigh))
                .unwrap();
            assert_eq!(absent, low, "{policy}");
            assert_ne!(absent, high, "{policy}");
        }
    }

    #[test]
    fn test_direction_ignored_by_agnostic_policies() {
        let requests = [98, 183, 37, 122, 14, 124, 65, 67];
        for policy in [Policy::Fcfs, Policy::Sstf] {
            let low = policy
                .schedule(53, 199, &requests, Some(Direction::TowardLow))
                .unwrap();
            let high = policy
                .schedule(53, 199, &requests, Some(Direction::TowardHigh))
                .unwrap();
            assert_eq!(low, high);
        }
    }
}
