// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Ignition message definitions.
//!
//! These mirror the `ignition.msgs` protobuf schema, laid out the way
//! prost generates code: optional sub-messages are `Option<T>`, enum fields
//! are raw `i32` paired with a `prost::Enumeration` type, and nested types
//! live in a snake_case module named after their parent message. Field tags
//! match the `.proto` files, so [`prost::Message::encode_to_vec`] produces
//! the Ignition wire format.

pub mod geometry;
pub mod header;
pub mod physics;
pub mod primitives;
pub mod sensors;
pub mod trajectory;

pub use geometry::{Pose, PoseV, Quaternion, Twist, Vector3d, Wrench};
pub use header::{Duration, Header, Time};
pub use physics::{entity, Axis, Contact, Contacts, Entity, Joint, JointWrench, Model};
pub use primitives::{Boolean, Clock, Double, Empty, Float, Int32, StringMsg, UInt32};
pub use sensors::{
    battery_state, camera_info, point_cloud_packed, BatteryState, CameraInfo, FluidPressure,
    Image, Imu, LaserScan, Magnetometer, Odometry, PixelFormatType, PointCloudPacked,
};
pub use trajectory::{JointTrajectory, JointTrajectoryPoint};
