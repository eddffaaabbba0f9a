// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `rosgraph_msgs` messages.

use serde::{Deserialize, Serialize};

use super::builtin::Time;

/// `rosgraph_msgs/Clock`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clock {
    pub clock: Time,
}

ros_message! {
    Clock => "rosgraph_msgs/msg/Clock",
}
