// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Message definitions for both schema families.
//!
//! - [`ros`] - ROS 2 messages: rich field names, `std_msgs/Header` with a
//!   `/`-scoped frame id, enum concepts as integer constants or strings
//! - [`ign`] - Ignition messages: protobuf encoded, flatter, with a
//!   key/value side-channel in the header instead of typed frame fields
//!
//! The converters only read and write these types. They carry no behaviour
//! beyond defaults, serde and (for Ignition) the protobuf wire codec.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A message of the ROS 2 schema family.
pub trait RosMessage: Serialize + DeserializeOwned + Default + Clone + 'static {
    /// Fully qualified ROS 2 type name (e.g., "std_msgs/msg/Bool").
    const TYPE_NAME: &'static str;
}

/// A message of the Ignition schema family.
pub trait IgnMessage:
    prost::Message + Serialize + DeserializeOwned + Default + Clone + 'static
{
    /// Fully qualified Ignition type name (e.g., "ignition.msgs.Boolean").
    const TYPE_NAME: &'static str;
}

/// Implement [`RosMessage`] for a list of types.
///
/// Defined ahead of the `mod` declarations so the submodules see it in
/// textual scope.
macro_rules! ros_message {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl $crate::msgs::RosMessage for $ty {
                const TYPE_NAME: &'static str = $name;
            }
        )*
    };
}

/// Implement [`IgnMessage`] for a list of types.
macro_rules! ign_message {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl $crate::msgs::IgnMessage for $ty {
                const TYPE_NAME: &'static str = $name;
            }
        )*
    };
}

pub mod ign;
mod nan;
pub mod ros;
