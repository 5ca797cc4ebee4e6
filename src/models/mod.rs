//! Disk-scheduling domain models.
//!
//! Provides the data types shared by every policy and by the step
//! materializer. All of them are plain values: a run owns its own copies
//! and nothing is shared or mutated after construction.
//!
//! | Type | Role |
//! |------|------|
//! | `Track` | A position on the simulated disk, `0..=max_track` |
//! | `RequestSet` | Deduplicated pending requests with directional queries |
//! | `Direction` | Sweep direction hint |
//! | `VisitSequence` | Head positions in service order |
//! | `StepRecord` | One replayable snapshot of the run |
//! | `SimulationConfig` | Everything needed to build a run |

mod config;
mod direction;
mod request;
mod step;
mod visit;

pub use config::{SimulationConfig, DEFAULT_MAX_TRACK, MAX_MAX_TRACK, MIN_MAX_TRACK};
pub use direction::Direction;
pub(crate) use request::dedup_preserving_order;
pub use request::{nearest, nearest_index, RequestSet};
pub use step::StepRecord;
pub use visit::VisitSequence;

/// A track (cylinder) address.
pub type Track = i64;
