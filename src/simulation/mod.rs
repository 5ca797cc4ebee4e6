//! Simulation runs, step timelines and run statistics.
//!
//! A [`Simulation`] couples one configuration with its computed output: the
//! visit sequence and the [`Timeline`] of step records derived from it.
//! Everything downstream (playback, statistics display, graphing, report
//! export) reads that output without changing it.
//!
//! # Timeline
//!
//! `Timeline::materialize` walks a visit sequence once, accumulating seek
//! distances and moving requests from pending to serviced. It refuses any
//! sequence that skips or repeats a request.
//!
//! # Statistics
//!
//! `RunStatistics` reports total movement, seek count, average and maximum
//! seek, and head reversals as of any step.

mod compare;
mod playback;
mod report;
mod run;
mod stats;
mod timeline;

pub use compare::{compare_policies, least_movement, PolicySummary};
pub use playback::Playback;
pub use report::{ReportRow, SimulationReport};
pub use run::Simulation;
pub use stats::RunStatistics;
pub use timeline::Timeline;

#[cfg(test)]
mod proptest_timeline;
