// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `ignition.msgs.Header` and time types.

use serde::{Deserialize, Serialize};

pub use self::header::Map;

/// `ignition.msgs.Time`
#[derive(Clone, Copy, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Time {
    #[prost(int64, tag = "1")]
    pub sec: i64,
    #[prost(int32, tag = "2")]
    pub nsec: i32,
}

/// `ignition.msgs.Duration`
#[derive(Clone, Copy, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Duration {
    #[prost(int64, tag = "1")]
    pub sec: i64,
    #[prost(int32, tag = "2")]
    pub nsec: i32,
}

/// `ignition.msgs.Header`
///
/// Anything beyond the stamp travels in `data` as key/value-list pairs.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    #[prost(message, optional, tag = "1")]
    pub stamp: Option<Time>,
    #[prost(message, repeated, tag = "2")]
    pub data: Vec<header::Map>,
}

/// Nested message and enum types in `Header`.
pub mod header {
    use serde::{Deserialize, Serialize};

    /// One side-channel entry: a key and its ordered values.
    #[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Map {
        #[prost(string, tag = "1")]
        pub key: String,
        #[prost(string, repeated, tag = "2")]
        pub value: Vec<String>,
    }
}

ign_message! {
    Time => "ignition.msgs.Time",
    Duration => "ignition.msgs.Duration",
    Header => "ignition.msgs.Header",
}
