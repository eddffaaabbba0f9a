// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `ros_ign_interfaces` messages: simulation entities and contacts.

use serde::{Deserialize, Serialize};

use super::geometry_msgs::{Vector3, Wrench};
use super::std_msgs::{Header, StringMsg, UInt32};

/// `ros_ign_interfaces/Entity`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    pub id: u64,
    pub name: String,
    /// One of the `Entity::*` kind constants
    pub r#type: u8,
}

impl Entity {
    pub const NONE: u8 = 0;
    pub const LIGHT: u8 = 1;
    pub const MODEL: u8 = 2;
    pub const LINK: u8 = 3;
    pub const VISUAL: u8 = 4;
    pub const COLLISION: u8 = 5;
    pub const SENSOR: u8 = 6;
    pub const JOINT: u8 = 7;

    pub fn new(id: u64, name: impl Into<String>, kind: u8) -> Self {
        Self {
            id,
            name: name.into(),
            r#type: kind,
        }
    }
}

/// `ros_ign_interfaces/JointWrench`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JointWrench {
    pub header: Header,
    pub body_1_name: StringMsg,
    pub body_1_id: UInt32,
    pub body_2_name: StringMsg,
    pub body_2_id: UInt32,
    pub body_1_wrench: Wrench,
    pub body_2_wrench: Wrench,
}

/// `ros_ign_interfaces/Contact`
///
/// `positions`, `normals`, `depths` and `wrenches` describe the same contact
/// points index by index, but nothing enforces equal lengths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub collision1: Entity,
    pub collision2: Entity,
    pub positions: Vec<Vector3>,
    pub normals: Vec<Vector3>,
    pub depths: Vec<f64>,
    pub wrenches: Vec<JointWrench>,
}

/// `ros_ign_interfaces/Contacts`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contacts {
    pub header: Header,
    pub contacts: Vec<Contact>,
}

ros_message! {
    Entity => "ros_ign_interfaces/msg/Entity",
    JointWrench => "ros_ign_interfaces/msg/JointWrench",
    Contact => "ros_ign_interfaces/msg/Contact",
    Contacts => "ros_ign_interfaces/msg/Contacts",
}
