// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Ignition geometry messages.

use serde::{Deserialize, Serialize};

use super::header::Header;

/// `ignition.msgs.Vector3d`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector3d {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(double, tag = "2")]
    pub x: f64,
    #[prost(double, tag = "3")]
    pub y: f64,
    #[prost(double, tag = "4")]
    pub z: f64,
}

impl Vector3d {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            header: None,
            x,
            y,
            z,
        }
    }
}

/// `ignition.msgs.Quaternion`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Quaternion {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(double, tag = "2")]
    pub x: f64,
    #[prost(double, tag = "3")]
    pub y: f64,
    #[prost(double, tag = "4")]
    pub z: f64,
    #[prost(double, tag = "5")]
    pub w: f64,
}

impl Quaternion {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self {
            header: None,
            x,
            y,
            z,
            w,
        }
    }
}

/// `ignition.msgs.Pose`
///
/// Carries poses, stamped poses and transforms alike; a transform's child
/// frame rides in the header side-channel.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(uint32, tag = "3")]
    pub id: u32,
    #[prost(message, optional, tag = "4")]
    pub position: Option<Vector3d>,
    #[prost(message, optional, tag = "5")]
    pub orientation: Option<Quaternion>,
}

/// `ignition.msgs.Pose_V`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseV {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, repeated, tag = "2")]
    pub pose: Vec<Pose>,
}

/// `ignition.msgs.Twist`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Twist {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, optional, tag = "2")]
    pub linear: Option<Vector3d>,
    #[prost(message, optional, tag = "3")]
    pub angular: Option<Vector3d>,
}

/// `ignition.msgs.Wrench`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Wrench {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, optional, tag = "2")]
    pub force: Option<Vector3d>,
    #[prost(message, optional, tag = "3")]
    pub torque: Option<Vector3d>,
    #[prost(message, optional, tag = "4")]
    pub force_offset: Option<Vector3d>,
}

ign_message! {
    Vector3d => "ignition.msgs.Vector3d",
    Quaternion => "ignition.msgs.Quaternion",
    Pose => "ignition.msgs.Pose",
    PoseV => "ignition.msgs.Pose_V",
    Twist => "ignition.msgs.Twist",
    Wrench => "ignition.msgs.Wrench",
}
