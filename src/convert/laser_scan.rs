// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Laser scans.
//!
//! ROS scans have a single horizontal layer. Ignition scans may stack
//! `vertical_count` layers of `count` readings each; converting to ROS
//! keeps only the middle layer.

use super::{frame, Context, Convert};
use crate::msgs::{ign, ros};

/// Number of readings implied by the scan angles.
///
/// Truncating; a zero increment or non-finite angles saturate rather than
/// panic.
pub fn reading_count(angle_min: f32, angle_max: f32, angle_increment: f32) -> u32 {
    ((angle_max - angle_min) / angle_increment) as u32
}

/// `len` readings starting at `start`, clipped to what `src` holds.
fn window<T>(src: &[T], start: usize, len: usize) -> &[T] {
    let start = start.min(src.len());
    let end = start.saturating_add(len).min(src.len());
    &src[start..end]
}

/// Vertical fields are zeroed; ROS has no notion of them.
impl Convert<ign::LaserScan> for ros::LaserScan {
    fn convert(&self, dst: &mut ign::LaserScan, cx: &mut Context) {
        let count = reading_count(self.angle_min, self.angle_max, self.angle_increment);

        self.header.convert(&mut dst.header, cx);
        dst.frame = frame::encode(&self.header.frame_id, cx.options());
        dst.angle_min = f64::from(self.angle_min);
        dst.angle_max = f64::from(self.angle_max);
        dst.angle_step = f64::from(self.angle_increment);
        dst.range_min = f64::from(self.range_min);
        dst.range_max = f64::from(self.range_max);
        dst.count = count;

        dst.vertical_angle_min = 0.0;
        dst.vertical_angle_max = 0.0;
        dst.vertical_angle_step = 0.0;
        dst.vertical_count = 0;

        let count = count as usize;
        dst.ranges.clear();
        dst.ranges
            .extend(window(&self.ranges, 0, count).iter().map(|&r| f64::from(r)));
        dst.intensities.clear();
        dst.intensities
            .extend(window(&self.intensities, 0, count).iter().map(|&i| f64::from(i)));
    }
}

/// The scan's own `frame` wins over the header side-channel. Timing fields
/// Ignition does not carry are zeroed.
impl Convert<ros::LaserScan> for ign::LaserScan {
    fn convert(&self, dst: &mut ros::LaserScan, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.header.frame_id = frame::ign_to_ros(&self.frame);

        dst.angle_min = self.angle_min as f32;
        dst.angle_max = self.angle_max as f32;
        dst.angle_increment = self.angle_step as f32;
        dst.time_increment = 0.0;
        dst.scan_time = 0.0;
        dst.range_min = self.range_min as f32;
        dst.range_max = self.range_max as f32;

        let count = self.count as usize;
        let start = (self.vertical_count as usize / 2).saturating_mul(count);

        dst.ranges.clear();
        dst.ranges
            .extend(window(&self.ranges, start, count).iter().map(|&r| r as f32));
        dst.intensities.clear();
        dst.intensities
            .extend(window(&self.intensities, start, count).iter().map(|&i| i as f32));
    }
}
