// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `std_msgs` messages.

use serde::{Deserialize, Serialize};

use super::builtin::Time;

/// `std_msgs/Header`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub stamp: Time,
    /// Frame this data is associated with, `/`-scoped (e.g., "robot/base_link")
    pub frame_id: String,
}

impl Header {
    pub fn new(stamp: Time, frame_id: impl Into<String>) -> Self {
        Self {
            stamp,
            frame_id: frame_id.into(),
        }
    }
}

/// `std_msgs/Bool`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bool {
    pub data: bool,
}

/// `std_msgs/Empty`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

/// `std_msgs/UInt32`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UInt32 {
    pub data: u32,
}

/// `std_msgs/Int32`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Int32 {
    pub data: i32,
}

/// `std_msgs/Float32`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Float32 {
    pub data: f32,
}

/// `std_msgs/Float64`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Float64 {
    pub data: f64,
}

/// `std_msgs/String`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringMsg {
    pub data: String,
}

impl From<&str> for StringMsg {
    fn from(data: &str) -> Self {
        Self {
            data: data.to_string(),
        }
    }
}

ros_message! {
    Header => "std_msgs/msg/Header",
    Bool => "std_msgs/msg/Bool",
    Empty => "std_msgs/msg/Empty",
    UInt32 => "std_msgs/msg/UInt32",
    Int32 => "std_msgs/msg/Int32",
    Float32 => "std_msgs/msg/Float32",
    Float64 => "std_msgs/msg/Float64",
    StringMsg => "std_msgs/msg/String",
}
