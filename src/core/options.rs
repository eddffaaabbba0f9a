// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conversion options.
//!
//! Two behaviours of the header adapter are product decisions rather than
//! structural facts, so they are explicit here instead of hard-coded:
//!
//! - where the ROS header stamp comes from when decoding an Ignition header
//! - whether ROS frame names are rewritten to Ignition scoping on the way out
//!
//! Options can be loaded from TOML:
//!
//! ```toml
//! stamp_policy = "wall_clock"
//! encode_frame_delimiters = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{BridgeError, Result};

/// Source of the ROS header stamp when converting an Ignition header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StampPolicy {
    /// Copy the stamp carried by the Ignition header.
    #[default]
    Source,
    /// Stamp with the current wall-clock time, ignoring the source stamp.
    WallClock,
}

impl std::str::FromStr for StampPolicy {
    type Err = BridgeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "source" => Ok(StampPolicy::Source),
            "wall_clock" | "now" => Ok(StampPolicy::WallClock),
            other => Err(BridgeError::config(
                "stamp_policy",
                format!("expected 'source' or 'wall_clock', got '{other}'"),
            )),
        }
    }
}

/// Options shared by every converter in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Where decoded ROS header stamps come from
    pub stamp_policy: StampPolicy,
    /// Rewrite `/` to `::` in frame names written into Ignition headers.
    ///
    /// Off by default: only the Ignition to ROS direction translates.
    pub encode_frame_delimiters: bool,
}

impl ConvertOptions {
    /// Create options with the default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stamp policy.
    pub fn with_stamp_policy(mut self, policy: StampPolicy) -> Self {
        self.stamp_policy = policy;
        self
    }

    /// Enable or disable delimiter translation for outgoing frame names.
    pub fn with_encode_frame_delimiters(mut self, enabled: bool) -> Self {
        self.encode_frame_delimiters = enabled;
        self
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| BridgeError::config("<toml>", e.to_string()))
    }

    /// Load options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| BridgeError::config(path.display().to_string(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::default();
        assert_eq!(options.stamp_policy, StampPolicy::Source);
        assert!(!options.encode_frame_delimiters);
    }

    #[test]
    fn test_from_toml() {
        let options = ConvertOptions::from_toml_str(
            "stamp_policy = \"wall_clock\"\nencode_frame_delimiters = true\n",
        )
        .unwrap();
        assert_eq!(options.stamp_policy, StampPolicy::WallClock);
        assert!(options.encode_frame_delimiters);
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let options = ConvertOptions::from_toml_str("encode_frame_delimiters = true").unwrap();
        assert_eq!(options.stamp_policy, StampPolicy::Source);
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let err = ConvertOptions::from_toml_str("frame_prefix = \"world\"").unwrap_err();
        assert!(matches!(err, BridgeError::Config { .. }));
    }

    #[test]
    fn test_stamp_policy_from_str() {
        assert_eq!("source".parse::<StampPolicy>().unwrap(), StampPolicy::Source);
        assert_eq!("wall-clock".parse::<StampPolicy>().unwrap(), StampPolicy::WallClock);
        assert_eq!("NOW".parse::<StampPolicy>().unwrap(), StampPolicy::WallClock);
        assert!("sim".parse::<StampPolicy>().is_err());
    }

    #[test]
    fn test_from_missing_file() {
        let err = ConvertOptions::from_file("/nonexistent/ros-ign-convert.toml").unwrap_err();
        assert!(matches!(err, BridgeError::Io(_)));
    }
}
