// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `trajectory_msgs` messages.

use serde::{Deserialize, Serialize};

use super::builtin::Duration;
use super::std_msgs::Header;

/// `trajectory_msgs/JointTrajectoryPoint`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JointTrajectoryPoint {
    pub positions: Vec<f64>,
    pub velocities: Vec<f64>,
    pub accelerations: Vec<f64>,
    pub effort: Vec<f64>,
    pub time_from_start: Duration,
}

/// `trajectory_msgs/JointTrajectory`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JointTrajectory {
    pub header: Header,
    pub joint_names: Vec<String>,
    pub points: Vec<JointTrajectoryPoint>,
}

ros_message! {
    JointTrajectoryPoint => "trajectory_msgs/msg/JointTrajectoryPoint",
    JointTrajectory => "trajectory_msgs/msg/JointTrajectory",
}
