// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Ignition simulation entity, contact and model messages.

use serde::{Deserialize, Serialize};

use super::geometry::{Pose, Vector3d, Wrench};
use super::header::Header;

/// `ignition.msgs.Entity`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(uint64, tag = "2")]
    pub id: u64,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(enumeration = "entity::Type", tag = "4")]
    pub r#type: i32,
}

/// Nested message and enum types in `Entity`.
pub mod entity {
    /// Kind of simulation entity.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        None = 0,
        Light = 1,
        Model = 2,
        Link = 3,
        Visual = 4,
        Collision = 5,
        Sensor = 6,
        Joint = 7,
    }
}

/// `ignition.msgs.JointWrench`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct JointWrench {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(string, tag = "2")]
    pub body_1_name: String,
    #[prost(uint32, tag = "3")]
    pub body_1_id: u32,
    #[prost(string, tag = "4")]
    pub body_2_name: String,
    #[prost(uint32, tag = "5")]
    pub body_2_id: u32,
    #[prost(message, optional, tag = "6")]
    pub body_1_wrench: Option<Wrench>,
    #[prost(message, optional, tag = "7")]
    pub body_2_wrench: Option<Wrench>,
}

/// `ignition.msgs.Contact`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, optional, tag = "2")]
    pub collision1: Option<Entity>,
    #[prost(message, optional, tag = "3")]
    pub collision2: Option<Entity>,
    #[prost(message, repeated, tag = "4")]
    pub position: Vec<Vector3d>,
    #[prost(message, repeated, tag = "5")]
    pub normal: Vec<Vector3d>,
    #[prost(double, repeated, tag = "6")]
    pub depth: Vec<f64>,
    #[prost(message, repeated, tag = "7")]
    pub wrench: Vec<JointWrench>,
    #[prost(message, optional, tag = "8")]
    pub world: Option<Entity>,
}

/// `ignition.msgs.Contacts`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Contacts {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, repeated, tag = "2")]
    pub contact: Vec<Contact>,
}

/// `ignition.msgs.Axis`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Axis {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, optional, tag = "2")]
    pub xyz: Option<Vector3d>,
    #[prost(double, tag = "3")]
    pub limit_lower: f64,
    #[prost(double, tag = "4")]
    pub limit_upper: f64,
    #[prost(double, tag = "5")]
    pub limit_effort: f64,
    #[prost(double, tag = "6")]
    pub limit_velocity: f64,
    #[prost(double, tag = "7")]
    pub damping: f64,
    #[prost(double, tag = "8")]
    pub friction: f64,
    #[prost(bool, tag = "10")]
    pub use_parent_model_frame: bool,
    #[prost(double, tag = "11")]
    pub position: f64,
    #[prost(double, tag = "12")]
    pub velocity: f64,
    #[prost(double, tag = "13")]
    pub force: f64,
    #[prost(double, tag = "14")]
    pub acceleration: f64,
}

/// `ignition.msgs.Joint`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Joint {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(uint32, tag = "3")]
    pub id: u32,
    #[prost(double, repeated, tag = "4")]
    pub angle: Vec<f64>,
    #[prost(string, tag = "6")]
    pub parent: String,
    #[prost(uint32, tag = "7")]
    pub parent_id: u32,
    #[prost(string, tag = "8")]
    pub child: String,
    #[prost(uint32, tag = "9")]
    pub child_id: u32,
    #[prost(message, optional, tag = "10")]
    pub pose: Option<Pose>,
    #[prost(message, optional, tag = "11")]
    pub axis1: Option<Axis>,
    #[prost(message, optional, tag = "12")]
    pub axis2: Option<Axis>,
}

/// `ignition.msgs.Model`
///
/// Only the joint list is bridged; links and visuals are not modelled.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(uint32, tag = "3")]
    pub id: u32,
    #[prost(bool, tag = "4")]
    pub is_static: bool,
    #[prost(message, optional, tag = "5")]
    pub pose: Option<Pose>,
    #[prost(message, repeated, tag = "6")]
    pub joint: Vec<Joint>,
    #[prost(bool, tag = "8")]
    pub deleted: bool,
    #[prost(message, optional, tag = "10")]
    pub scale: Option<Vector3d>,
    #[prost(bool, tag = "11")]
    pub self_collide: bool,
}

ign_message! {
    Entity => "ignition.msgs.Entity",
    JointWrench => "ignition.msgs.JointWrench",
    Contact => "ignition.msgs.Contact",
    Contacts => "ignition.msgs.Contacts",
    Axis => "ignition.msgs.Axis",
    Joint => "ignition.msgs.Joint",
    Model => "ignition.msgs.Model",
}
