// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Frame name delimiter translation.
//!
//! Ignition scopes names with `::` (`model::link::sensor`), ROS frame ids
//! with `/` (`model/link/sensor`). Names read from Ignition are always
//! translated. Names written to Ignition are passed through unchanged
//! unless [`ConvertOptions::encode_frame_delimiters`] is set.
//!
//! [`ConvertOptions::encode_frame_delimiters`]: crate::core::ConvertOptions::encode_frame_delimiters

use crate::core::ConvertOptions;

/// Ignition scope delimiter.
pub const IGN_DELIMITER: &str = "::";

/// ROS frame delimiter.
pub const ROS_DELIMITER: &str = "/";

/// Replace every non-overlapping occurrence of `from` with `to`, scanning
/// left to right.
///
/// An input without `from` comes back unchanged, as does any input when
/// `from` is empty.
pub fn translate(input: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return input.to_string();
    }
    input.replace(from, to)
}

/// Translate an Ignition scoped name into a ROS frame id.
pub fn ign_to_ros(name: &str) -> String {
    translate(name, IGN_DELIMITER, ROS_DELIMITER)
}

/// Translate a ROS frame id into an Ignition scoped name.
pub fn ros_to_ign(frame_id: &str) -> String {
    translate(frame_id, ROS_DELIMITER, IGN_DELIMITER)
}

/// Frame id as it should be written into an Ignition message.
pub(crate) fn encode(frame_id: &str, options: &ConvertOptions) -> String {
    if options.encode_frame_delimiters {
        ros_to_ign(frame_id)
    } else {
        frame_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ign_to_ros_nested() {
        assert_eq!(ign_to_ros("a::b::c"), "a/b/c");
    }

    #[test]
    fn test_no_delimiter_unchanged() {
        assert_eq!(ign_to_ros("base_link"), "base_link");
        assert_eq!(ros_to_ign("base_link"), "base_link");
        assert_eq!(ign_to_ros(""), "");
    }

    #[test]
    fn test_non_overlapping_scan() {
        assert_eq!(ign_to_ros(":::"), "/:");
        assert_eq!(ign_to_ros("::a::"), "/a/");
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(translate("abc", "", "/"), "abc");
    }

    #[test]
    fn test_ros_to_ign() {
        assert_eq!(ros_to_ign("robot/base_link"), "robot::base_link");
    }

    #[test]
    fn test_encode_respects_option() {
        let passthrough = ConvertOptions::default();
        assert_eq!(encode("robot/base", &passthrough), "robot/base");

        let scoped = ConvertOptions::default().with_encode_frame_delimiters(true);
        assert_eq!(encode("robot/base", &scoped), "robot::base");
    }
}
