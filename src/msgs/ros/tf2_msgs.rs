// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `tf2_msgs` messages.

use serde::{Deserialize, Serialize};

use super::geometry_msgs::TransformStamped;

/// `tf2_msgs/TFMessage`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TFMessage {
    pub transforms: Vec<TransformStamped>,
}

ros_message! {
    TFMessage => "tf2_msgs/msg/TFMessage",
}
