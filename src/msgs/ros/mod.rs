// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ROS 2 message definitions.
//!
//! Field names and types follow the `.msg` files of each package. Integer
//! enum concepts keep their ROS constants as associated consts.

pub mod builtin;
pub mod geometry_msgs;
pub mod interfaces;
pub mod nav_msgs;
pub mod rosgraph_msgs;
pub mod sensor_msgs;
pub mod std_msgs;
pub mod tf2_msgs;
pub mod trajectory_msgs;

pub use builtin::{Duration, Time};
pub use geometry_msgs::{
    Point, Pose, PoseStamped, PoseWithCovariance, Quaternion, Transform, TransformStamped, Twist,
    TwistWithCovariance, Vector3, Wrench,
};
pub use interfaces::{Contact, Contacts, Entity, JointWrench};
pub use nav_msgs::Odometry;
pub use rosgraph_msgs::Clock;
pub use sensor_msgs::{
    BatteryState, CameraInfo, FluidPressure, Image, Imu, JointState, LaserScan, MagneticField,
    PointCloud2, PointField, RegionOfInterest,
};
pub use std_msgs::{Bool, Empty, Float32, Float64, Header, Int32, StringMsg, UInt32};
pub use tf2_msgs::TFMessage;
pub use trajectory_msgs::{JointTrajectory, JointTrajectoryPoint};
