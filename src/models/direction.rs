//! Direction hint for the sweep-family policies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseDirectionError;

use super::Track;

/// Which way a direction-sensitive policy starts sweeping.
///
/// Defaults to [`Direction::TowardLow`] when a configuration omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Toward track 0.
    #[default]
    TowardLow,
    /// Toward `max_track`.
    TowardHigh,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::TowardLow => Self::TowardHigh,
            Self::TowardHigh => Self::TowardLow,
        }
    }

    /// The disk boundary this direction travels toward.
    pub fn boundary(self, max_track: Track) -> Track {
        match self {
            Self::TowardLow => 0,
            Self::TowardHigh => max_track,
        }
    }

    /// Canonical hyphenated name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TowardLow => "toward-low",
            Self::TowardHigh => "toward-high",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts the canonical names plus `low`/`left`/`down` and
    /// `high`/`right`/`up`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "toward-low" | "towardlow" | "low" | "left" | "down" => Ok(Self::TowardLow),
            "toward-high" | "towardhigh" | "high" | "right" | "up" => Ok(Self::TowardHigh),
            _ => Err(ParseDirectionError {
                value: s.to_string(),
            }),
        }
    }
}
