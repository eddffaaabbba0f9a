// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Ignition joint trajectory messages.

use serde::{Deserialize, Serialize};

use super::header::{Duration, Header};

/// `ignition.msgs.JointTrajectoryPoint`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct JointTrajectoryPoint {
    #[prost(double, repeated, tag = "1")]
    pub positions: Vec<f64>,
    #[prost(double, repeated, tag = "2")]
    pub velocities: Vec<f64>,
    #[prost(double, repeated, tag = "3")]
    pub accelerations: Vec<f64>,
    #[prost(double, repeated, tag = "4")]
    pub effort: Vec<f64>,
    #[prost(message, optional, tag = "5")]
    pub time_from_start: Option<Duration>,
}

/// `ignition.msgs.JointTrajectory`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct JointTrajectory {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(string, repeated, tag = "2")]
    pub joint_names: Vec<String>,
    #[prost(message, repeated, tag = "3")]
    pub points: Vec<JointTrajectoryPoint>,
}

ign_message! {
    JointTrajectoryPoint => "ignition.msgs.JointTrajectoryPoint",
    JointTrajectory => "ignition.msgs.JointTrajectory",
}
