// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Header conversion and the Ignition header side-channel.
//!
//! An Ignition header has a stamp and a list of key/value-list pairs. ROS
//! header fields other than the stamp travel in that list under reserved
//! keys, one pair per field with a single value.

use chrono::Utc;

use super::{frame, Context, Convert};
use crate::core::StampPolicy;
use crate::msgs::{ign, ros};

/// Side-channel key for the header frame id.
pub const FRAME_ID_KEY: &str = "frame_id";

/// Side-channel key for the child frame id of transforms and odometry.
pub const CHILD_FRAME_ID_KEY: &str = "child_frame_id";

/// First value of the first pair named `key`.
///
/// Pairs with the right key but no values are skipped.
pub fn metadata_value<'a>(header: &'a ign::Header, key: &str) -> Option<&'a str> {
    header
        .data
        .iter()
        .filter(|pair| pair.key == key)
        .find_map(|pair| pair.value.first())
        .map(String::as_str)
}

/// Append a pair carrying a single value.
pub fn push_metadata(header: &mut ign::Header, key: &str, value: impl Into<String>) {
    header.data.push(ign::header::Map {
        key: key.to_string(),
        value: vec![value.into()],
    });
}

/// Write a frame name into the side-channel of an optional header.
pub(crate) fn encode_frame(
    header: &mut Option<ign::Header>,
    key: &str,
    frame_id: &str,
    cx: &Context,
) {
    let header = header.get_or_insert_with(ign::Header::default);
    push_metadata(header, key, frame::encode(frame_id, cx.options()));
}

/// Read a frame name from the side-channel of an optional header.
///
/// A missing key leaves `frame_id` empty.
pub(crate) fn decode_frame(header: Option<&ign::Header>, key: &str, frame_id: &mut String) {
    match header.and_then(|h| metadata_value(h, key)) {
        Some(value) => *frame_id = frame::ign_to_ros(value),
        None => {
            tracing::trace!(key, "metadata key absent");
            frame_id.clear();
        }
    }
}

// ============================================================================
// Time
// ============================================================================

impl Convert<ign::Time> for ros::Time {
    fn convert(&self, dst: &mut ign::Time, _cx: &mut Context) {
        dst.sec = i64::from(self.sec);
        dst.nsec = self.nanosec as i32;
    }
}

impl Convert<ros::Time> for ign::Time {
    fn convert(&self, dst: &mut ros::Time, _cx: &mut Context) {
        (dst.sec, dst.nanosec) = normalize(self.sec, self.nsec);
    }
}

impl Convert<ign::Duration> for ros::Duration {
    fn convert(&self, dst: &mut ign::Duration, _cx: &mut Context) {
        dst.sec = i64::from(self.sec);
        dst.nsec = self.nanosec as i32;
    }
}

impl Convert<ros::Duration> for ign::Duration {
    fn convert(&self, dst: &mut ros::Duration, _cx: &mut Context) {
        (dst.sec, dst.nanosec) = normalize(self.sec, self.nsec);
    }
}

const NSEC_PER_SEC: i64 = 1_000_000_000;

/// Fold a signed nanosecond part into `[0, 1e9)`, carrying into seconds.
fn normalize(sec: i64, nsec: i32) -> (i32, u32) {
    let nsec = i64::from(nsec);
    let sec = sec.saturating_add(nsec.div_euclid(NSEC_PER_SEC));
    (sec as i32, nsec.rem_euclid(NSEC_PER_SEC) as u32)
}

/// Current wall-clock time.
fn wall_clock() -> ros::Time {
    let now = Utc::now();
    ros::Time::new(now.timestamp() as i32, now.timestamp_subsec_nanos())
}

// ============================================================================
// Header
// ============================================================================

impl Convert<ign::Header> for ros::Header {
    fn convert(&self, dst: &mut ign::Header, cx: &mut Context) {
        let mut stamp = ign::Time::default();
        self.stamp.convert(&mut stamp, cx);
        dst.stamp = Some(stamp);

        dst.data.clear();
        push_metadata(dst, FRAME_ID_KEY, frame::encode(&self.frame_id, cx.options()));
    }
}

impl Convert<ros::Header> for ign::Header {
    fn convert(&self, dst: &mut ros::Header, cx: &mut Context) {
        match cx.options().stamp_policy {
            StampPolicy::Source => super::convert_from(&self.stamp, &mut dst.stamp, cx),
            StampPolicy::WallClock => dst.stamp = wall_clock(),
        }
        decode_frame(Some(self), FRAME_ID_KEY, &mut dst.frame_id);
    }
}

/// ROS header into the optional header every Ignition message carries.
impl Convert<Option<ign::Header>> for ros::Header {
    fn convert(&self, dst: &mut Option<ign::Header>, cx: &mut Context) {
        super::convert_into(self, dst, cx);
    }
}

/// Optional Ignition header into a ROS header; absent reads as default.
impl Convert<ros::Header> for Option<ign::Header> {
    fn convert(&self, dst: &mut ros::Header, cx: &mut Context) {
        super::convert_from(self, dst, cx);
    }
}
