// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout ros-ign-convert.
//!
//! This module provides the foundational types for the library:
//! - [`BridgeError`] - Errors for the surfaces around conversion
//! - [`Conversion`] / [`Diagnostic`] - Outcome of a single conversion
//! - [`ConvertOptions`] - Policies shared by all converters
//! - [`Direction`] - Which schema family is the source

pub mod diagnostics;
pub mod error;
pub mod options;

pub use diagnostics::{Conversion, Diagnostic, DiagnosticKind};
pub use error::{BridgeError, Result};
pub use options::{ConvertOptions, StampPolicy};

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// ROS 2 message in, Ignition message out
    RosToIgn,
    /// Ignition message in, ROS 2 message out
    IgnToRos,
}

/// Error returned when parsing a `Direction` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDirectionError {
    _private: (),
}

impl std::fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid direction, expected 'ros-to-ign' or 'ign-to-ros'"
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl std::str::FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "ros-to-ign" | "ros2ign" | "ros" => Ok(Direction::RosToIgn),
            "ign-to-ros" | "ign2ros" | "ign" => Ok(Direction::IgnToRos),
            _ => Err(ParseDirectionError { _private: () }),
        }
    }
}

impl Direction {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::RosToIgn => "ros-to-ign",
            Direction::IgnToRos => "ign-to-ros",
        }
    }

    /// The opposite direction.
    pub fn reverse(&self) -> Self {
        match self {
            Direction::RosToIgn => Direction::IgnToRos,
            Direction::IgnToRos => Direction::RosToIgn,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str() {
        assert_eq!("ros-to-ign".parse::<Direction>(), Ok(Direction::RosToIgn));
        assert_eq!("ROS_TO_IGN".parse::<Direction>(), Ok(Direction::RosToIgn));
        assert_eq!("ign-to-ros".parse::<Direction>(), Ok(Direction::IgnToRos));
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_reverse() {
        assert_eq!(Direction::RosToIgn.reverse(), Direction::IgnToRos);
        assert_eq!(Direction::IgnToRos.reverse().as_str(), "ros-to-ign");
    }
}
