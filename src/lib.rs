//! Disk-scheduling core for teaching and visualization.
//!
//! Computes the order in which a simulated disk head services a queue of
//! track requests under six classic policies, and turns that order into a
//! replayable timeline of steps with running statistics. Rendering, playback
//! timing and document export live outside this crate and consume its
//! output read-only.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Track`, `RequestSet`, `Direction`,
//!   `VisitSequence`, `StepRecord`, `SimulationConfig`
//! - **`scheduling`**: The `Policy` enum (FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK)
//! - **`simulation`**: Runs, timelines, statistics, playback, reports
//! - **`validation`**: Configuration checks and the visit-completeness check
//! - **`input`**: Text parsing and random request generation
//!
//! # Example
//!
//! ```
//! use disk_sched::models::{Direction, SimulationConfig};
//! use disk_sched::scheduling::Policy;
//! use disk_sched::simulation::Simulation;
//!
//! let config = SimulationConfig::new(53, vec![98, 183, 37, 122, 14, 124, 65, 67])
//!     .with_policy(Policy::Sstf);
//! let run = Simulation::new(config).unwrap();
//!
//! let mut playback = run.playback();
//! playback.step_forward();
//! assert_eq!(playback.current().head_position, 65);
//! assert_eq!(run.timeline().total_head_movement(), 236);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 5.4

pub mod error;
pub mod input;
pub mod models;
pub mod scheduling;
pub mod simulation;
pub mod validation;

pub use error::SimulationError;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;
