// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common builders for integration tests.

#![allow(dead_code)]

use ros_ign_convert::msgs::{ign, ros};

// ============================================================================
// Headers
// ============================================================================

/// ROS header with the given stamp and frame.
pub fn ros_header(sec: i32, nanosec: u32, frame_id: &str) -> ros::Header {
    ros::Header::new(ros::Time::new(sec, nanosec), frame_id)
}

/// Ignition header carrying the given side-channel pairs.
pub fn ign_header(sec: i64, nsec: i32, pairs: &[(&str, &[&str])]) -> ign::Header {
    ign::Header {
        stamp: Some(ign::Time { sec, nsec }),
        data: pairs
            .iter()
            .map(|(key, values)| ign::header::Map {
                key: key.to_string(),
                value: values.iter().map(|v| v.to_string()).collect(),
            })
            .collect(),
    }
}

// ============================================================================
// Geometry
// ============================================================================

pub fn sample_pose() -> ros::Pose {
    ros::Pose {
        position: ros::Point::new(1.5, -2.0, 0.25),
        orientation: ros::Quaternion::new(0.0, 0.0, 0.5, 0.5),
    }
}

pub fn sample_transform(frame_id: &str, child_frame_id: &str) -> ros::TransformStamped {
    ros::TransformStamped {
        header: ros_header(10, 20, frame_id),
        child_frame_id: child_frame_id.to_string(),
        transform: ros::Transform {
            translation: ros::Vector3::new(0.1, 0.2, 0.3),
            rotation: ros::Quaternion::new(1.0, 0.0, 0.0, 0.0),
        },
    }
}

// ============================================================================
// Sensors
// ============================================================================

/// Image whose buffer holds `width * height * pixel_size` bytes.
pub fn sample_image(encoding: &str, width: u32, height: u32, pixel_size: u32) -> ros::Image {
    let len = (width * height * pixel_size) as usize;
    ros::Image {
        header: ros_header(3, 4, "camera"),
        height,
        width,
        encoding: encoding.to_string(),
        is_bigendian: 0,
        step: width * pixel_size,
        data: (0..len).map(|i| (i % 251) as u8).collect(),
    }
}

/// Point cloud with x/y/z float fields and `width` points in one row.
pub fn sample_cloud(width: u32) -> ros::PointCloud2 {
    let point_step = 12;
    ros::PointCloud2 {
        header: ros_header(5, 0, "lidar"),
        height: 1,
        width,
        fields: vec![
            ros::PointField::new("x", 0, ros::PointField::FLOAT32, 1),
            ros::PointField::new("y", 4, ros::PointField::FLOAT32, 1),
            ros::PointField::new("z", 8, ros::PointField::FLOAT32, 1),
        ],
        is_bigendian: false,
        point_step,
        row_step: point_step * width,
        data: vec![7u8; (point_step * width) as usize],
        is_dense: true,
    }
}

/// Single-layer scan whose reading count matches its angles.
pub fn sample_scan() -> ros::LaserScan {
    ros::LaserScan {
        header: ros_header(6, 0, "laser"),
        angle_min: -1.0,
        angle_max: 1.0,
        angle_increment: 0.5,
        time_increment: 0.0,
        scan_time: 0.0,
        range_min: 0.1,
        range_max: 30.0,
        ranges: vec![1.0, 2.0, 3.0, 4.0],
        intensities: vec![10.0, 20.0, 30.0, 40.0],
    }
}

pub fn sample_joint_state() -> ros::JointState {
    ros::JointState {
        header: ros_header(8, 0, "base_link"),
        name: vec!["hip".into(), "knee".into(), "ankle".into()],
        position: vec![0.1, 0.2, 0.3],
        velocity: vec![1.0, 2.0, 3.0],
        effort: vec![-1.0, -2.0, -3.0],
    }
}

pub fn sample_trajectory(points: usize) -> ros::JointTrajectory {
    ros::JointTrajectory {
        header: ros_header(9, 0, "arm_base"),
        joint_names: vec!["j1".into(), "j2".into()],
        points: (0..points)
            .map(|i| ros::JointTrajectoryPoint {
                positions: vec![i as f64, -(i as f64)],
                velocities: vec![0.5, 0.5],
                accelerations: vec![],
                effort: vec![1.0, 1.0],
                time_from_start: ros::Duration::new(i as i32, 250_000_000),
            })
            .collect(),
    }
}

pub fn sample_battery(status: u8) -> ros::BatteryState {
    ros::BatteryState {
        header: ros_header(11, 0, "battery"),
        voltage: 12.5,
        current: -1.25,
        charge: 2.0,
        capacity: 4.0,
        percentage: 0.5,
        power_supply_status: status,
        ..Default::default()
    }
}
