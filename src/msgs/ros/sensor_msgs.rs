// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `sensor_msgs` messages.

use serde::{Deserialize, Serialize};

use crate::msgs::nan::{nullable_f32, nullable_f32_seq};

use super::geometry_msgs::{Quaternion, Vector3};
use super::std_msgs::Header;

/// `sensor_msgs/FluidPressure`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidPressure {
    pub header: Header,
    /// Absolute pressure in Pascals
    pub fluid_pressure: f64,
    pub variance: f64,
}

/// `sensor_msgs/Image`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub header: Header,
    pub height: u32,
    pub width: u32,
    /// Pixel encoding name (e.g., "rgb8", "32FC1")
    pub encoding: String,
    pub is_bigendian: u8,
    /// Row length in bytes
    pub step: u32,
    /// `step * height` bytes
    pub data: Vec<u8>,
}

/// `sensor_msgs/RegionOfInterest`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionOfInterest {
    pub x_offset: u32,
    pub y_offset: u32,
    pub height: u32,
    pub width: u32,
    pub do_rectify: bool,
}

/// `sensor_msgs/CameraInfo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraInfo {
    pub header: Header,
    pub height: u32,
    pub width: u32,
    /// "plumb_bob", "rational_polynomial" or "equidistant"
    pub distortion_model: String,
    /// Distortion parameters, size depends on the model
    pub d: Vec<f64>,
    /// Intrinsic camera matrix, row-major 3x3
    pub k: [f64; 9],
    /// Rectification matrix, row-major 3x3
    pub r: [f64; 9],
    /// Projection matrix, row-major 3x4
    pub p: [f64; 12],
    pub binning_x: u32,
    pub binning_y: u32,
    pub roi: RegionOfInterest,
}

/// `sensor_msgs/Imu`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Imu {
    pub header: Header,
    pub orientation: Quaternion,
    pub orientation_covariance: [f64; 9],
    pub angular_velocity: Vector3,
    pub angular_velocity_covariance: [f64; 9],
    pub linear_acceleration: Vector3,
    pub linear_acceleration_covariance: [f64; 9],
}

/// `sensor_msgs/JointState`
///
/// `name`, `position`, `velocity` and `effort` are parallel arrays; the
/// last three may be empty when a quantity is not reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JointState {
    pub header: Header,
    pub name: Vec<String>,
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub effort: Vec<f64>,
}

/// `sensor_msgs/LaserScan`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserScan {
    pub header: Header,
    pub angle_min: f32,
    pub angle_max: f32,
    pub angle_increment: f32,
    /// Time between measurements in seconds
    pub time_increment: f32,
    /// Time between scans in seconds
    pub scan_time: f32,
    pub range_min: f32,
    pub range_max: f32,
    pub ranges: Vec<f32>,
    pub intensities: Vec<f32>,
}

/// `sensor_msgs/MagneticField`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagneticField {
    pub header: Header,
    /// Field vector in Tesla
    pub magnetic_field: Vector3,
    pub magnetic_field_covariance: [f64; 9],
}

/// `sensor_msgs/PointField`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointField {
    pub name: String,
    pub offset: u32,
    /// One of the `PointField::*` datatype constants
    pub datatype: u8,
    pub count: u32,
}

impl PointField {
    pub const INT8: u8 = 1;
    pub const UINT8: u8 = 2;
    pub const INT16: u8 = 3;
    pub const UINT16: u8 = 4;
    pub const INT32: u8 = 5;
    pub const UINT32: u8 = 6;
    pub const FLOAT32: u8 = 7;
    pub const FLOAT64: u8 = 8;

    pub fn new(name: impl Into<String>, offset: u32, datatype: u8, count: u32) -> Self {
        Self {
            name: name.into(),
            offset,
            datatype,
            count,
        }
    }
}

/// `sensor_msgs/PointCloud2`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointCloud2 {
    pub header: Header,
    pub height: u32,
    pub width: u32,
    pub fields: Vec<PointField>,
    pub is_bigendian: bool,
    /// Length of a point in bytes
    pub point_step: u32,
    /// Length of a row in bytes
    pub row_step: u32,
    /// `row_step * height` bytes
    pub data: Vec<u8>,
    pub is_dense: bool,
}

/// `sensor_msgs/BatteryState`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryState {
    pub header: Header,
    #[serde(with = "nullable_f32")]
    pub voltage: f32,
    #[serde(with = "nullable_f32")]
    pub temperature: f32,
    #[serde(with = "nullable_f32")]
    pub current: f32,
    #[serde(with = "nullable_f32")]
    pub charge: f32,
    #[serde(with = "nullable_f32")]
    pub capacity: f32,
    #[serde(with = "nullable_f32")]
    pub design_capacity: f32,
    #[serde(with = "nullable_f32")]
    pub percentage: f32,
    pub power_supply_status: u8,
    pub power_supply_health: u8,
    pub power_supply_technology: u8,
    pub present: bool,
    #[serde(with = "nullable_f32_seq")]
    pub cell_voltage: Vec<f32>,
    #[serde(with = "nullable_f32_seq")]
    pub cell_temperature: Vec<f32>,
    pub location: String,
    pub serial_number: String,
}

impl BatteryState {
    pub const POWER_SUPPLY_STATUS_UNKNOWN: u8 = 0;
    pub const POWER_SUPPLY_STATUS_CHARGING: u8 = 1;
    pub const POWER_SUPPLY_STATUS_DISCHARGING: u8 = 2;
    pub const POWER_SUPPLY_STATUS_NOT_CHARGING: u8 = 3;
    pub const POWER_SUPPLY_STATUS_FULL: u8 = 4;

    pub const POWER_SUPPLY_HEALTH_UNKNOWN: u8 = 0;
    pub const POWER_SUPPLY_HEALTH_GOOD: u8 = 1;
    pub const POWER_SUPPLY_HEALTH_OVERHEAT: u8 = 2;
    pub const POWER_SUPPLY_HEALTH_DEAD: u8 = 3;
    pub const POWER_SUPPLY_HEALTH_OVERVOLTAGE: u8 = 4;
    pub const POWER_SUPPLY_HEALTH_UNSPEC_FAILURE: u8 = 5;
    pub const POWER_SUPPLY_HEALTH_COLD: u8 = 6;
    pub const POWER_SUPPLY_HEALTH_WATCHDOG_TIMER_EXPIRE: u8 = 7;
    pub const POWER_SUPPLY_HEALTH_SAFETY_TIMER_EXPIRE: u8 = 8;

    pub const POWER_SUPPLY_TECHNOLOGY_UNKNOWN: u8 = 0;
    pub const POWER_SUPPLY_TECHNOLOGY_NIMH: u8 = 1;
    pub const POWER_SUPPLY_TECHNOLOGY_LION: u8 = 2;
    pub const POWER_SUPPLY_TECHNOLOGY_LIPO: u8 = 3;
    pub const POWER_SUPPLY_TECHNOLOGY_LIFE: u8 = 4;
    pub const POWER_SUPPLY_TECHNOLOGY_NICD: u8 = 5;
    pub const POWER_SUPPLY_TECHNOLOGY_LIMN: u8 = 6;
}

ros_message! {
    FluidPressure => "sensor_msgs/msg/FluidPressure",
    Image => "sensor_msgs/msg/Image",
    CameraInfo => "sensor_msgs/msg/CameraInfo",
    Imu => "sensor_msgs/msg/Imu",
    JointState => "sensor_msgs/msg/JointState",
    LaserScan => "sensor_msgs/msg/LaserScan",
    MagneticField => "sensor_msgs/msg/MagneticField",
    PointField => "sensor_msgs/msg/PointField",
    PointCloud2 => "sensor_msgs/msg/PointCloud2",
    BatteryState => "sensor_msgs/msg/BatteryState",
}
