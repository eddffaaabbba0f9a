// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Enum correspondence tables.
//!
//! Each concept has a pair of functions. The direction whose source is an
//! Ignition enum matches exhaustively on the typed enum, so a new variant
//! fails to compile until it is mapped. The direction whose source is a
//! ROS integer or string returns `None` for values with no counterpart.

use crate::msgs::ign::battery_state::PowerSupplyStatus;
use crate::msgs::ign::camera_info::distortion::DistortionModelType;
use crate::msgs::ign::entity;
use crate::msgs::ign::point_cloud_packed::field::DataType;
use crate::msgs::ign::PixelFormatType;
use crate::msgs::ros;

// ============================================================================
// Entity kind
// ============================================================================

/// ROS entity type constant to Ignition entity type.
pub fn entity_type_to_ign(value: u8) -> Option<entity::Type> {
    match value {
        ros::Entity::NONE => Some(entity::Type::None),
        ros::Entity::LIGHT => Some(entity::Type::Light),
        ros::Entity::MODEL => Some(entity::Type::Model),
        ros::Entity::LINK => Some(entity::Type::Link),
        ros::Entity::VISUAL => Some(entity::Type::Visual),
        ros::Entity::COLLISION => Some(entity::Type::Collision),
        ros::Entity::SENSOR => Some(entity::Type::Sensor),
        ros::Entity::JOINT => Some(entity::Type::Joint),
        _ => None,
    }
}

/// Ignition entity type to ROS entity type constant.
pub fn entity_type_to_ros(value: entity::Type) -> u8 {
    match value {
        entity::Type::None => ros::Entity::NONE,
        entity::Type::Light => ros::Entity::LIGHT,
        entity::Type::Model => ros::Entity::MODEL,
        entity::Type::Link => ros::Entity::LINK,
        entity::Type::Visual => ros::Entity::VISUAL,
        entity::Type::Collision => ros::Entity::COLLISION,
        entity::Type::Sensor => ros::Entity::SENSOR,
        entity::Type::Joint => ros::Entity::JOINT,
    }
}

// ============================================================================
// Pixel format
// ============================================================================

/// A pixel layout known to both sides, with the geometry needed for stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelEncoding {
    /// `sensor_msgs/Image.encoding` string
    pub ros: &'static str,
    /// Ignition pixel format
    pub ign: PixelFormatType,
    /// Channels per pixel
    pub channels: u32,
    /// Bytes per channel
    pub bytes_per_channel: u32,
}

impl PixelEncoding {
    /// Bytes per pixel.
    pub fn pixel_size(&self) -> u32 {
        self.channels * self.bytes_per_channel
    }

    /// Bytes per row for an image `width` pixels wide.
    pub fn stride(&self, width: u32) -> u32 {
        width.saturating_mul(self.pixel_size())
    }
}

const fn pixel(ros: &'static str, ign: PixelFormatType, channels: u32, bytes: u32) -> PixelEncoding {
    PixelEncoding {
        ros,
        ign,
        channels,
        bytes_per_channel: bytes,
    }
}

const MONO8: PixelEncoding = pixel("mono8", PixelFormatType::LInt8, 1, 1);
const MONO16: PixelEncoding = pixel("mono16", PixelFormatType::LInt16, 1, 2);
const RGB8: PixelEncoding = pixel("rgb8", PixelFormatType::RgbInt8, 3, 1);
const RGBA8: PixelEncoding = pixel("rgba8", PixelFormatType::RgbaInt8, 4, 1);
const BGRA8: PixelEncoding = pixel("bgra8", PixelFormatType::BgraInt8, 4, 1);
const RGB16: PixelEncoding = pixel("rgb16", PixelFormatType::RgbInt16, 3, 2);
const BGR8: PixelEncoding = pixel("bgr8", PixelFormatType::BgrInt8, 3, 1);
const BGR16: PixelEncoding = pixel("bgr16", PixelFormatType::BgrInt16, 3, 2);
const R32F: PixelEncoding = pixel("32FC1", PixelFormatType::RFloat32, 1, 4);

/// Every pixel layout both sides understand.
pub static PIXEL_ENCODINGS: &[PixelEncoding] =
    &[MONO8, MONO16, RGB8, RGBA8, BGRA8, RGB16, BGR8, BGR16, R32F];

/// Look up a pixel layout by its ROS encoding string.
pub fn pixel_encoding_by_ros(encoding: &str) -> Option<&'static PixelEncoding> {
    PIXEL_ENCODINGS.iter().find(|p| p.ros == encoding)
}

/// Look up a pixel layout by its Ignition pixel format.
pub fn pixel_encoding_by_ign(format: PixelFormatType) -> Option<&'static PixelEncoding> {
    match format {
        PixelFormatType::LInt8 => Some(&MONO8),
        PixelFormatType::LInt16 => Some(&MONO16),
        PixelFormatType::RgbInt8 => Some(&RGB8),
        PixelFormatType::RgbaInt8 => Some(&RGBA8),
        PixelFormatType::BgraInt8 => Some(&BGRA8),
        PixelFormatType::RgbInt16 => Some(&RGB16),
        PixelFormatType::BgrInt8 => Some(&BGR8),
        PixelFormatType::BgrInt16 => Some(&BGR16),
        PixelFormatType::RFloat32 => Some(&R32F),
        PixelFormatType::UnknownPixelFormat
        | PixelFormatType::RgbInt32
        | PixelFormatType::BgrInt32
        | PixelFormatType::RFloat16
        | PixelFormatType::RgbFloat16
        | PixelFormatType::RgbFloat32
        | PixelFormatType::BayerRggb8
        | PixelFormatType::BayerBggr8
        | PixelFormatType::BayerGbrg8
        | PixelFormatType::BayerGrbg8 => None,
    }
}

// ============================================================================
// Camera distortion model
// ============================================================================

/// ROS distortion model name to Ignition distortion model.
pub fn distortion_model_to_ign(model: &str) -> Option<DistortionModelType> {
    match model {
        "plumb_bob" => Some(DistortionModelType::PlumbBob),
        "rational_polynomial" => Some(DistortionModelType::RationalPolynomial),
        "equidistant" => Some(DistortionModelType::Equidistant),
        _ => None,
    }
}

/// Ignition distortion model to ROS distortion model name.
pub fn distortion_model_to_ros(model: DistortionModelType) -> &'static str {
    match model {
        DistortionModelType::PlumbBob => "plumb_bob",
        DistortionModelType::RationalPolynomial => "rational_polynomial",
        DistortionModelType::Equidistant => "equidistant",
    }
}

// ============================================================================
// Point field datatype
// ============================================================================

/// ROS point field datatype constant to Ignition datatype.
pub fn point_datatype_to_ign(value: u8) -> Option<DataType> {
    match value {
        ros::PointField::INT8 => Some(DataType::Int8),
        ros::PointField::UINT8 => Some(DataType::Uint8),
        ros::PointField::INT16 => Some(DataType::Int16),
        ros::PointField::UINT16 => Some(DataType::Uint16),
        ros::PointField::INT32 => Some(DataType::Int32),
        ros::PointField::UINT32 => Some(DataType::Uint32),
        ros::PointField::FLOAT32 => Some(DataType::Float32),
        ros::PointField::FLOAT64 => Some(DataType::Float64),
        _ => None,
    }
}

/// Ignition datatype to ROS point field datatype constant.
pub fn point_datatype_to_ros(value: DataType) -> u8 {
    match value {
        DataType::Int8 => ros::PointField::INT8,
        DataType::Uint8 => ros::PointField::UINT8,
        DataType::Int16 => ros::PointField::INT16,
        DataType::Uint16 => ros::PointField::UINT16,
        DataType::Int32 => ros::PointField::INT32,
        DataType::Uint32 => ros::PointField::UINT32,
        DataType::Float32 => ros::PointField::FLOAT32,
        DataType::Float64 => ros::PointField::FLOAT64,
    }
}

// ============================================================================
// Battery power supply status
// ============================================================================

/// ROS power supply status constant to Ignition status.
pub fn power_supply_status_to_ign(value: u8) -> Option<PowerSupplyStatus> {
    match value {
        ros::BatteryState::POWER_SUPPLY_STATUS_UNKNOWN => Some(PowerSupplyStatus::Unknown),
        ros::BatteryState::POWER_SUPPLY_STATUS_CHARGING => Some(PowerSupplyStatus::Charging),
        ros::BatteryState::POWER_SUPPLY_STATUS_DISCHARGING => Some(PowerSupplyStatus::Discharging),
        ros::BatteryState::POWER_SUPPLY_STATUS_NOT_CHARGING => Some(PowerSupplyStatus::NotCharging),
        ros::BatteryState::POWER_SUPPLY_STATUS_FULL => Some(PowerSupplyStatus::Full),
        _ => None,
    }
}

/// Ignition power supply status to ROS status constant.
pub fn power_supply_status_to_ros(value: PowerSupplyStatus) -> u8 {
    match value {
        PowerSupplyStatus::Unknown => ros::BatteryState::POWER_SUPPLY_STATUS_UNKNOWN,
        PowerSupplyStatus::Charging => ros::BatteryState::POWER_SUPPLY_STATUS_CHARGING,
        PowerSupplyStatus::Discharging => ros::BatteryState::POWER_SUPPLY_STATUS_DISCHARGING,
        PowerSupplyStatus::NotCharging => ros::BatteryState::POWER_SUPPLY_STATUS_NOT_CHARGING,
        PowerSupplyStatus::Full => ros::BatteryState::POWER_SUPPLY_STATUS_FULL,
    }
}
