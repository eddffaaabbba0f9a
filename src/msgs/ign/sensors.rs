// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Ignition sensor messages.

use serde::{Deserialize, Serialize};

use crate::msgs::nan::nullable_f64;

use super::geometry::{Pose, Quaternion, Twist, Vector3d};
use super::header::Header;

/// `ignition.msgs.FluidPressure`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidPressure {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(double, tag = "2")]
    pub pressure: f64,
    #[prost(double, tag = "3")]
    pub variance: f64,
}

/// Pixel layouts understood by Ignition image consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum PixelFormatType {
    UnknownPixelFormat = 0,
    LInt8 = 1,
    LInt16 = 2,
    RgbInt8 = 3,
    RgbaInt8 = 4,
    BgraInt8 = 5,
    RgbInt16 = 6,
    RgbInt32 = 7,
    BgrInt8 = 8,
    BgrInt16 = 9,
    BgrInt32 = 10,
    RFloat16 = 11,
    RgbFloat16 = 12,
    RFloat32 = 13,
    RgbFloat32 = 14,
    BayerRggb8 = 15,
    BayerBggr8 = 16,
    BayerGbrg8 = 17,
    BayerGrbg8 = 18,
}

/// `ignition.msgs.Image`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(uint32, tag = "2")]
    pub width: u32,
    #[prost(uint32, tag = "3")]
    pub height: u32,
    /// Row stride in bytes
    #[prost(uint32, tag = "4")]
    pub step: u32,
    #[prost(bytes = "vec", tag = "5")]
    pub data: Vec<u8>,
    #[prost(enumeration = "PixelFormatType", tag = "7")]
    pub pixel_format_type: i32,
}

/// `ignition.msgs.CameraInfo`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraInfo {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(uint32, tag = "2")]
    pub width: u32,
    #[prost(uint32, tag = "3")]
    pub height: u32,
    #[prost(message, optional, tag = "4")]
    pub distortion: Option<camera_info::Distortion>,
    #[prost(message, optional, tag = "5")]
    pub intrinsics: Option<camera_info::Intrinsics>,
    #[prost(message, optional, tag = "6")]
    pub projection: Option<camera_info::Projection>,
    /// Row-major 3x3 rectification matrix
    #[prost(double, repeated, tag = "7")]
    pub rectification_matrix: Vec<f64>,
}

/// Nested message and enum types in `CameraInfo`.
pub mod camera_info {
    use serde::{Deserialize, Serialize};

    /// Lens distortion model and coefficients.
    #[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Distortion {
        #[prost(enumeration = "distortion::DistortionModelType", tag = "1")]
        pub model: i32,
        #[prost(double, repeated, tag = "2")]
        pub k: Vec<f64>,
    }

    /// Nested message and enum types in `Distortion`.
    pub mod distortion {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum DistortionModelType {
            PlumbBob = 0,
            RationalPolynomial = 1,
            Equidistant = 2,
        }
    }

    /// Row-major 3x3 camera matrix.
    #[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Intrinsics {
        #[prost(double, repeated, tag = "1")]
        pub k: Vec<f64>,
    }

    /// Row-major 3x4 projection matrix.
    #[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Projection {
        #[prost(double, repeated, tag = "1")]
        pub p: Vec<f64>,
    }
}

/// `ignition.msgs.IMU`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Imu {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(string, tag = "2")]
    pub entity_name: String,
    #[prost(message, optional, tag = "3")]
    pub orientation: Option<Quaternion>,
    #[prost(message, optional, tag = "4")]
    pub angular_velocity: Option<Vector3d>,
    #[prost(message, optional, tag = "5")]
    pub linear_acceleration: Option<Vector3d>,
}

/// `ignition.msgs.LaserScan`
///
/// A multi-layer scan: `ranges` holds `vertical_count` rows of `count`
/// readings each.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserScan {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(string, tag = "2")]
    pub frame: String,
    #[prost(message, optional, tag = "3")]
    pub world_pose: Option<Pose>,
    #[prost(double, tag = "4")]
    pub angle_min: f64,
    #[prost(double, tag = "5")]
    pub angle_max: f64,
    #[prost(double, tag = "6")]
    pub angle_step: f64,
    #[prost(double, tag = "7")]
    pub range_min: f64,
    #[prost(double, tag = "8")]
    pub range_max: f64,
    #[prost(uint32, tag = "9")]
    pub count: u32,
    #[prost(double, tag = "10")]
    pub vertical_angle_min: f64,
    #[prost(double, tag = "11")]
    pub vertical_angle_max: f64,
    #[prost(double, tag = "12")]
    pub vertical_angle_step: f64,
    #[prost(uint32, tag = "13")]
    pub vertical_count: u32,
    #[prost(double, repeated, tag = "14")]
    pub ranges: Vec<f64>,
    #[prost(double, repeated, tag = "15")]
    pub intensities: Vec<f64>,
}

/// `ignition.msgs.Magnetometer`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Magnetometer {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, optional, tag = "2")]
    pub field_tesla: Option<Vector3d>,
}

/// `ignition.msgs.PointCloudPacked`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PointCloudPacked {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, repeated, tag = "2")]
    pub field: Vec<point_cloud_packed::Field>,
    #[prost(uint32, tag = "3")]
    pub height: u32,
    #[prost(uint32, tag = "4")]
    pub width: u32,
    #[prost(bool, tag = "5")]
    pub is_bigendian: bool,
    #[prost(uint32, tag = "6")]
    pub point_step: u32,
    #[prost(uint32, tag = "7")]
    pub row_step: u32,
    #[prost(bytes = "vec", tag = "8")]
    pub data: Vec<u8>,
    #[prost(bool, tag = "9")]
    pub is_dense: bool,
}

/// Nested message and enum types in `PointCloudPacked`.
pub mod point_cloud_packed {
    use serde::{Deserialize, Serialize};

    /// Layout of one named channel within a packed point.
    #[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Field {
        #[prost(string, tag = "1")]
        pub name: String,
        #[prost(uint32, tag = "2")]
        pub offset: u32,
        #[prost(enumeration = "field::DataType", tag = "3")]
        pub datatype: i32,
        #[prost(uint32, tag = "4")]
        pub count: u32,
    }

    /// Nested message and enum types in `Field`.
    pub mod field {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum DataType {
            Int8 = 0,
            Uint8 = 1,
            Int16 = 2,
            Uint16 = 3,
            Int32 = 4,
            Uint32 = 5,
            Float32 = 6,
            Float64 = 7,
        }
    }
}

/// `ignition.msgs.BatteryState`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryState {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(double, tag = "2")]
    #[serde(with = "nullable_f64")]
    pub voltage: f64,
    #[prost(double, tag = "3")]
    #[serde(with = "nullable_f64")]
    pub current: f64,
    #[prost(double, tag = "4")]
    #[serde(with = "nullable_f64")]
    pub charge: f64,
    #[prost(double, tag = "5")]
    #[serde(with = "nullable_f64")]
    pub capacity: f64,
    #[prost(double, tag = "6")]
    #[serde(with = "nullable_f64")]
    pub percentage: f64,
    #[prost(enumeration = "battery_state::PowerSupplyStatus", tag = "7")]
    pub power_supply_status: i32,
}

/// Nested message and enum types in `BatteryState`.
pub mod battery_state {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
    #[repr(i32)]
    pub enum PowerSupplyStatus {
        Unknown = 0,
        Charging = 1,
        Discharging = 2,
        NotCharging = 3,
        Full = 4,
    }
}

/// `ignition.msgs.Odometry`
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Odometry {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, optional, tag = "2")]
    pub pose: Option<Pose>,
    #[prost(message, optional, tag = "3")]
    pub twist: Option<Twist>,
}

ign_message! {
    FluidPressure => "ignition.msgs.FluidPressure",
    Image => "ignition.msgs.Image",
    CameraInfo => "ignition.msgs.CameraInfo",
    Imu => "ignition.msgs.IMU",
    LaserScan => "ignition.msgs.LaserScan",
    Magnetometer => "ignition.msgs.Magnetometer",
    PointCloudPacked => "ignition.msgs.PointCloudPacked",
    BatteryState => "ignition.msgs.BatteryState",
    Odometry => "ignition.msgs.Odometry",
}
