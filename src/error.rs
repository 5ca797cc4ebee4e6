//! Error types for simulation runs.
//!
//! Every failure is synchronous and surfaces at run construction; nothing
//! here is transient or retryable.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while building or exporting a simulation run.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The configuration failed validation. Carries every detected problem.
    #[error("invalid configuration: {}", summarize(.errors))]
    Configuration {
        /// The individual validation failures.
        errors: Vec<ValidationError>,
    },

    /// No policy is registered under the requested name.
    #[error("no scheduling policy named '{name}'")]
    PolicyNotFound {
        /// The name that failed to resolve.
        name: String,
    },

    /// A policy produced a visit sequence that does not service every
    /// request exactly once.
    #[error("internal invariant violated: {reason}")]
    InvariantViolation {
        /// What the completeness check found.
        reason: String,
    },

    /// Configuration parsing or report serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimulationError {
    /// Creates a policy-not-found error.
    #[must_use]
    pub fn policy_not_found(name: impl Into<String>) -> Self {
        Self::PolicyNotFound { name: name.into() }
    }

    /// Creates an invariant violation error.
    #[must_use]
    pub fn invariant(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }

    /// Validation failures carried by a configuration error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Configuration { errors } => errors.as_slice(),
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Configuration { errors }
    }
}

/// Error returned when a direction hint cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown direction '{value}', expected 'toward-low' or 'toward-high'")]
pub struct ParseDirectionError {
    /// The rejected input.
    pub value: String,
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
