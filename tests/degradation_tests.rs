// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Degraded conversion tests.
//!
//! Values without a counterpart never fail a conversion. They leave the
//! destination field at its default and are reported as diagnostics.

mod common;

use common::*;
use ros_ign_convert::convert::tables;
use ros_ign_convert::msgs::ign::{battery_state, camera_info, entity, point_cloud_packed};
use ros_ign_convert::msgs::{ign, ros};
use ros_ign_convert::{ign_to_ros, ros_to_ign, DiagnosticKind};

// ============================================================================
// Enum Tables
// ============================================================================

#[test]
fn test_entity_table_is_total_both_ways() {
    for value in ros::Entity::NONE..=ros::Entity::JOINT {
        let kind = tables::entity_type_to_ign(value).expect("every ROS entity type maps");
        assert_eq!(tables::entity_type_to_ros(kind), value);
    }
    assert!(tables::entity_type_to_ign(ros::Entity::JOINT + 1).is_none());
}

#[test]
fn test_point_datatype_table_is_total_both_ways() {
    for value in ros::PointField::INT8..=ros::PointField::FLOAT64 {
        let datatype = tables::point_datatype_to_ign(value).expect("every ROS datatype maps");
        assert_eq!(tables::point_datatype_to_ros(datatype), value);
    }
    assert!(tables::point_datatype_to_ign(0).is_none());
    assert!(tables::point_datatype_to_ign(9).is_none());
}

#[test]
fn test_power_supply_status_table_is_total_both_ways() {
    for value in ros::BatteryState::POWER_SUPPLY_STATUS_UNKNOWN
        ..=ros::BatteryState::POWER_SUPPLY_STATUS_FULL
    {
        let status = tables::power_supply_status_to_ign(value).expect("every status maps");
        assert_eq!(tables::power_supply_status_to_ros(status), value);
    }
}

#[test]
fn test_distortion_model_table_is_total_both_ways() {
    for model in ["plumb_bob", "rational_polynomial", "equidistant"] {
        let ign_model = tables::distortion_model_to_ign(model).expect("known model maps");
        assert_eq!(tables::distortion_model_to_ros(ign_model), model);
    }
    assert!(tables::distortion_model_to_ign("fisheye").is_none());
}

#[test]
fn test_pixel_table_agrees_both_ways() {
    for encoding in tables::PIXEL_ENCODINGS {
        let by_ign = tables::pixel_encoding_by_ign(encoding.ign).expect("shared format");
        assert_eq!(by_ign.ros, encoding.ros);
        let by_ros = tables::pixel_encoding_by_ros(encoding.ros).expect("shared encoding");
        assert_eq!(by_ros.ign, encoding.ign);
    }
    assert!(tables::pixel_encoding_by_ros("yuv422").is_none());
    assert!(tables::pixel_encoding_by_ign(ign::PixelFormatType::BayerRggb8).is_none());
}

// ============================================================================
// Unsupported Enum Values
// ============================================================================

#[test]
fn test_unknown_entity_type_reported() {
    let src = ros::Entity::new(1, "thing", 200);
    let mut dst = ign::Entity {
        r#type: entity::Type::Model as i32,
        ..Default::default()
    };
    let outcome = ros_to_ign(&src, &mut dst);

    assert!(!outcome.is_complete());
    let diag = &outcome.diagnostics()[0];
    assert_eq!(diag.kind, DiagnosticKind::UnsupportedEnumValue);
    assert_eq!(diag.value, "200");
    assert_eq!(dst.r#type, entity::Type::None as i32);
    assert_eq!(dst.name, "thing");
}

#[test]
fn test_out_of_range_ign_entity_type_reported() {
    let src = ign::Entity {
        id: 3,
        r#type: 99,
        ..Default::default()
    };
    let mut dst = ros::Entity::default();
    let outcome = ign_to_ros(&src, &mut dst);
    assert!(outcome.has(DiagnosticKind::UnsupportedEnumValue));
    assert_eq!(dst.r#type, ros::Entity::NONE);
    assert_eq!(dst.id, 3);
}

#[test]
fn test_unknown_battery_status_reported() {
    let src = sample_battery(17);
    let mut dst = ign::BatteryState::default();
    let outcome = ros_to_ign(&src, &mut dst);
    assert_eq!(outcome.diagnostics().len(), 1);
    assert_eq!(
        dst.power_supply_status,
        battery_state::PowerSupplyStatus::Unknown as i32
    );
    assert_eq!(dst.voltage, 12.5);
}

#[test]
fn test_unknown_distortion_model_reported() {
    let src = ros::CameraInfo {
        distortion_model: "fisheye".to_string(),
        d: vec![0.1, 0.2, 0.3, 0.4],
        ..Default::default()
    };
    let mut dst = ign::CameraInfo::default();
    let outcome = ros_to_ign(&src, &mut dst);

    assert!(outcome.has(DiagnosticKind::UnsupportedEnumValue));
    let distortion = dst.distortion.expect("distortion written");
    assert_eq!(
        distortion.model,
        camera_info::distortion::DistortionModelType::PlumbBob as i32
    );
    assert_eq!(distortion.k, vec![0.1, 0.2, 0.3, 0.4]);
}

#[test]
fn test_unknown_point_datatype_falls_back_to_int8() {
    let mut cloud = sample_cloud(2);
    cloud.fields[2].datatype = 42;
    let mut dst = ign::PointCloudPacked::default();
    let outcome = ros_to_ign(&cloud, &mut dst);

    assert_eq!(outcome.diagnostics().len(), 1);
    assert_eq!(outcome.diagnostics()[0].value, "42");
    assert_eq!(
        dst.field[2].datatype,
        point_cloud_packed::field::DataType::Int8 as i32
    );
    assert_eq!(dst.data, cloud.data);
}

// ============================================================================
// Unsupported Formats
// ============================================================================

#[test]
fn test_unknown_image_encoding_stops_at_buffer() {
    let image = sample_image("yuv422", 4, 2, 2);
    let mut dst = ign::Image {
        step: 99,
        data: vec![1, 2, 3],
        ..Default::default()
    };
    let outcome = ros_to_ign(&image, &mut dst);

    assert!(outcome.has(DiagnosticKind::UnsupportedFormat));
    let diag = &outcome.diagnostics()[0];
    assert_eq!(diag.value, "yuv422");
    assert_eq!(diag.left_default, &["step", "data"]);

    assert_eq!(dst.width, 4);
    assert_eq!(dst.height, 2);
    assert_eq!(dst.step, 0);
    assert!(dst.data.is_empty());
    assert!(dst.header.is_some());
}

#[test]
fn test_ign_only_pixel_format_reported() {
    let src = ign::Image {
        width: 2,
        height: 2,
        step: 2,
        data: vec![0; 4],
        pixel_format_type: ign::PixelFormatType::BayerGrbg8 as i32,
        ..Default::default()
    };
    let mut dst = sample_image("rgb8", 2, 2, 3);
    let outcome = ign_to_ros(&src, &mut dst);

    assert!(outcome.has(DiagnosticKind::UnsupportedFormat));
    assert_eq!(dst.encoding, "");
    assert_eq!(dst.step, 0);
    assert!(dst.data.is_empty());
}

#[test]
fn test_diagnostics_accumulate_across_nested_messages() {
    let contact = ros::Contact {
        collision1: ros::Entity::new(1, "a", 50),
        collision2: ros::Entity::new(2, "b", 60),
        ..Default::default()
    };
    let contacts = ros::Contacts {
        header: ros_header(0, 0, "world"),
        contacts: vec![contact],
    };
    let mut dst = ign::Contacts::default();
    let outcome = ros_to_ign(&contacts, &mut dst);

    let values: Vec<&str> = outcome.diagnostics().iter().map(|d| d.value.as_str()).collect();
    assert_eq!(values, vec!["50", "60"]);
    let contact = &dst.contact[0];
    assert_eq!(contact.collision1.as_ref().map(|e| e.id), Some(1));
    assert_eq!(contact.collision2.as_ref().map(|e| e.id), Some(2));
}
