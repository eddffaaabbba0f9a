// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Ignition scalar wrapper messages and the simulation clock.

use serde::{Deserialize, Serialize};

use super::header::{Header, Time};

/// `ignition.msgs.Boolean`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Boolean {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(bool, tag = "2")]
    pub data: bool,
}

/// `ignition.msgs.Empty`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Empty {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(bool, tag = "2")]
    pub unused: bool,
}

/// `ignition.msgs.UInt32`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct UInt32 {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(uint32, tag = "2")]
    pub data: u32,
}

/// `ignition.msgs.Int32`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Int32 {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(int32, tag = "2")]
    pub data: i32,
}

/// `ignition.msgs.Float`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Float {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(float, tag = "2")]
    pub data: f32,
}

/// `ignition.msgs.Double`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Double {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(double, tag = "2")]
    pub data: f64,
}

/// `ignition.msgs.StringMsg`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct StringMsg {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(string, tag = "2")]
    pub data: String,
}

/// `ignition.msgs.Clock`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Clock {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, optional, tag = "2")]
    pub system: Option<Time>,
    #[prost(message, optional, tag = "3")]
    pub real: Option<Time>,
    #[prost(message, optional, tag = "4")]
    pub sim: Option<Time>,
}

ign_message! {
    Boolean => "ignition.msgs.Boolean",
    Empty => "ignition.msgs.Empty",
    UInt32 => "ignition.msgs.UInt32",
    Int32 => "ignition.msgs.Int32",
    Float => "ignition.msgs.Float",
    Double => "ignition.msgs.Double",
    StringMsg => "ignition.msgs.StringMsg",
    Clock => "ignition.msgs.Clock",
}
