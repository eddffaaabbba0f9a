// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Fixed-size sensor messages, odometry and camera calibration.

use super::header::{decode_frame, encode_frame, CHILD_FRAME_ID_KEY};
use super::tables::{
    distortion_model_to_ign, distortion_model_to_ros, power_supply_status_to_ign,
    power_supply_status_to_ros,
};
use super::{convert_from, convert_into, Context, Convert};
use crate::core::Diagnostic;
use crate::msgs::ign::battery_state::PowerSupplyStatus;
use crate::msgs::ign::camera_info::distortion::DistortionModelType;
use crate::msgs::ign::camera_info::{Distortion, Intrinsics, Projection};
use crate::msgs::{ign, ros};

impl Convert<ign::FluidPressure> for ros::FluidPressure {
    fn convert(&self, dst: &mut ign::FluidPressure, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.pressure = self.fluid_pressure;
        dst.variance = self.variance;
    }
}

impl Convert<ros::FluidPressure> for ign::FluidPressure {
    fn convert(&self, dst: &mut ros::FluidPressure, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.fluid_pressure = self.pressure;
        dst.variance = self.variance;
    }
}

/// The IMU is named after the ROS frame it reports in.
impl Convert<ign::Imu> for ros::Imu {
    fn convert(&self, dst: &mut ign::Imu, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.entity_name = self.header.frame_id.clone();
        convert_into(&self.orientation, &mut dst.orientation, cx);
        convert_into(&self.angular_velocity, &mut dst.angular_velocity, cx);
        convert_into(&self.linear_acceleration, &mut dst.linear_acceleration, cx);
    }
}

/// Covariances are not carried by Ignition and are left untouched.
impl Convert<ros::Imu> for ign::Imu {
    fn convert(&self, dst: &mut ros::Imu, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        convert_from(&self.orientation, &mut dst.orientation, cx);
        convert_from(&self.angular_velocity, &mut dst.angular_velocity, cx);
        convert_from(&self.linear_acceleration, &mut dst.linear_acceleration, cx);
    }
}

impl Convert<ign::Magnetometer> for ros::MagneticField {
    fn convert(&self, dst: &mut ign::Magnetometer, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        convert_into(&self.magnetic_field, &mut dst.field_tesla, cx);
    }
}

impl Convert<ros::MagneticField> for ign::Magnetometer {
    fn convert(&self, dst: &mut ros::MagneticField, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        convert_from(&self.field_tesla, &mut dst.magnetic_field, cx);
    }
}

/// Covariances are dropped; the child frame rides in the header.
impl Convert<ign::Odometry> for ros::Odometry {
    fn convert(&self, dst: &mut ign::Odometry, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        convert_into(&self.pose.pose, &mut dst.pose, cx);
        convert_into(&self.twist.twist, &mut dst.twist, cx);
        encode_frame(&mut dst.header, CHILD_FRAME_ID_KEY, &self.child_frame_id, cx);
    }
}

impl Convert<ros::Odometry> for ign::Odometry {
    fn convert(&self, dst: &mut ros::Odometry, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        convert_from(&self.pose, &mut dst.pose.pose, cx);
        convert_from(&self.twist, &mut dst.twist.twist, cx);
        decode_frame(self.header.as_ref(), CHILD_FRAME_ID_KEY, &mut dst.child_frame_id);
    }
}

// ============================================================================
// Battery
// ============================================================================

impl Convert<ign::BatteryState> for ros::BatteryState {
    fn convert(&self, dst: &mut ign::BatteryState, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.voltage = f64::from(self.voltage);
        dst.current = f64::from(self.current);
        dst.charge = f64::from(self.charge);
        dst.capacity = f64::from(self.capacity);
        dst.percentage = f64::from(self.percentage);
        match power_supply_status_to_ign(self.power_supply_status) {
            Some(status) => dst.power_supply_status = status as i32,
            None => {
                dst.power_supply_status = PowerSupplyStatus::default() as i32;
                cx.report(Diagnostic::unsupported_enum(
                    "battery_state.power_supply_status",
                    self.power_supply_status,
                    &["power_supply_status"],
                ));
            }
        }
    }
}

/// Fields Ignition does not track get ROS "unknown" values: NaN design
/// capacity, unknown health and technology. The battery is reported present.
impl Convert<ros::BatteryState> for ign::BatteryState {
    fn convert(&self, dst: &mut ros::BatteryState, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.voltage = self.voltage as f32;
        dst.current = self.current as f32;
        dst.charge = self.charge as f32;
        dst.capacity = self.capacity as f32;
        dst.design_capacity = f32::NAN;
        dst.percentage = self.percentage as f32;
        match PowerSupplyStatus::try_from(self.power_supply_status) {
            Ok(status) => dst.power_supply_status = power_supply_status_to_ros(status),
            Err(_) => {
                dst.power_supply_status = ros::BatteryState::POWER_SUPPLY_STATUS_UNKNOWN;
                cx.report(Diagnostic::unsupported_enum(
                    "battery_state.power_supply_status",
                    self.power_supply_status,
                    &["power_supply_status"],
                ));
            }
        }
        dst.power_supply_health = ros::BatteryState::POWER_SUPPLY_HEALTH_UNKNOWN;
        dst.power_supply_technology = ros::BatteryState::POWER_SUPPLY_TECHNOLOGY_UNKNOWN;
        dst.present = true;
    }
}

// ============================================================================
// Camera calibration
// ============================================================================

impl Convert<ign::CameraInfo> for ros::CameraInfo {
    fn convert(&self, dst: &mut ign::CameraInfo, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.width = self.width;
        dst.height = self.height;

        let model = match distortion_model_to_ign(&self.distortion_model) {
            Some(model) => model,
            None => {
                cx.report(Diagnostic::unsupported_enum(
                    "camera_info.distortion_model",
                    &self.distortion_model,
                    &["distortion.model"],
                ));
                DistortionModelType::default()
            }
        };
        dst.distortion = Some(Distortion {
            model: model as i32,
            k: self.d.clone(),
        });
        dst.intrinsics = Some(Intrinsics { k: self.k.to_vec() });
        dst.projection = Some(Projection { p: self.p.to_vec() });
        dst.rectification_matrix = self.r.to_vec();
    }
}

/// Fixed-size matrices are filled index-wise up to the shorter length.
/// Absent sub-messages leave the corresponding ROS fields untouched.
impl Convert<ros::CameraInfo> for ign::CameraInfo {
    fn convert(&self, dst: &mut ros::CameraInfo, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.height = self.height;
        dst.width = self.width;

        if let Some(distortion) = &self.distortion {
            match DistortionModelType::try_from(distortion.model) {
                Ok(model) => dst.distortion_model = distortion_model_to_ros(model).to_string(),
                Err(_) => {
                    dst.distortion_model.clear();
                    cx.report(Diagnostic::unsupported_enum(
                        "camera_info.distortion.model",
                        distortion.model,
                        &["distortion_model"],
                    ));
                }
            }
            dst.d.clone_from(&distortion.k);
        }
        if let Some(intrinsics) = &self.intrinsics {
            fill(&mut dst.k, &intrinsics.k);
        }
        if let Some(projection) = &self.projection {
            fill(&mut dst.p, &projection.p);
        }
        fill(&mut dst.r, &self.rectification_matrix);
    }
}

fn fill(dst: &mut [f64], src: &[f64]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = *s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::header::metadata_value;
    use crate::core::DiagnosticKind;

    fn camera_info() -> ros::CameraInfo {
        let mut k = [0.0; 9];
        k[0] = 525.0;
        k[2] = 319.5;
        k[4] = 525.0;
        k[5] = 239.5;
        k[8] = 1.0;
        let mut p = [0.0; 12];
        p[0] = 525.0;
        p[10] = 1.0;
        let mut r = [0.0; 9];
        r[0] = 1.0;
        r[4] = 1.0;
        r[8] = 1.0;
        ros::CameraInfo {
            header: ros::Header::new(ros::Time::new(9, 0), "camera"),
            height: 480,
            width: 640,
            distortion_model: "plumb_bob".to_string(),
            d: vec![0.1, -0.2, 0.0, 0.0, 0.05],
            k,
            r,
            p,
            ..Default::default()
        }
    }

    #[test]
    fn test_fluid_pressure_round_trip() {
        let src = ros::FluidPressure {
            header: ros::Header::new(ros::Time::new(1, 2), "baro"),
            fluid_pressure: 101_325.0,
            variance: 0.5,
        };
        let mut ign_msg = ign::FluidPressure::default();
        let mut cx = Context::default();
        src.convert(&mut ign_msg, &mut cx);
        assert_eq!(ign_msg.pressure, 101_325.0);
        let mut back = ros::FluidPressure::default();
        ign_msg.convert(&mut back, &mut cx);
        assert_eq!(back, src);
    }

    #[test]
    fn test_imu_entity_name_and_covariance() {
        let src = ros::Imu {
            header: ros::Header::new(ros::Time::new(1, 0), "imu_link"),
            orientation: ros::Quaternion::identity(),
            orientation_covariance: [0.1; 9],
            angular_velocity: ros::Vector3::new(0.0, 0.0, 0.3),
            linear_acceleration: ros::Vector3::new(0.0, 0.0, 9.81),
            ..Default::default()
        };
        let mut ign_imu = ign::Imu::default();
        let mut cx = Context::default();
        src.convert(&mut ign_imu, &mut cx);
        assert_eq!(ign_imu.entity_name, "imu_link");

        let mut back = ros::Imu {
            orientation_covariance: [0.7; 9],
            ..Default::default()
        };
        ign_imu.convert(&mut back, &mut cx);
        assert_eq!(back.linear_acceleration, src.linear_acceleration);
        assert_eq!(back.orientation_covariance, [0.7; 9]);
    }

    #[test]
    fn test_magnetometer_round_trip() {
        let src = ros::MagneticField {
            header: ros::Header::new(ros::Time::new(4, 4), "mag"),
            magnetic_field: ros::Vector3::new(2e-5, 0.0, -4e-5),
            ..Default::default()
        };
        let mut ign_msg = ign::Magnetometer::default();
        let mut cx = Context::default();
        src.convert(&mut ign_msg, &mut cx);
        let mut back = ros::MagneticField::default();
        ign_msg.convert(&mut back, &mut cx);
        assert_eq!(back, src);
    }

    #[test]
    fn test_odometry_child_frame() {
        let src = ros::Odometry {
            header: ros::Header::new(ros::Time::new(10, 0), "odom"),
            child_frame_id: "base_link".to_string(),
            ..Default::default()
        };
        let mut ign_odom = ign::Odometry::default();
        let mut cx = Context::default();
        src.convert(&mut ign_odom, &mut cx);
        let header = ign_odom.header.as_ref().unwrap();
        assert_eq!(metadata_value(header, CHILD_FRAME_ID_KEY), Some("base_link"));

        let mut back = ros::Odometry::default();
        ign_odom.convert(&mut back, &mut cx);
        assert_eq!(back.child_frame_id, "base_link");
        assert_eq!(back.header.frame_id, "odom");
    }

    #[test]
    fn test_battery_state_to_ign() {
        let src = ros::BatteryState {
            voltage: 12.5,
            percentage: 0.75,
            power_supply_status: ros::BatteryState::POWER_SUPPLY_STATUS_DISCHARGING,
            ..Default::default()
        };
        let mut ign_battery = ign::BatteryState::default();
        let mut cx = Context::default();
        src.convert(&mut ign_battery, &mut cx);
        assert_eq!(ign_battery.voltage, 12.5);
        assert_eq!(ign_battery.power_supply_status, PowerSupplyStatus::Discharging as i32);
        assert!(cx.finish().is_complete());
    }

    #[test]
    fn test_battery_state_to_ros_fills_unknowns() {
        let src = ign::BatteryState {
            charge: 2.0,
            power_supply_status: PowerSupplyStatus::Full as i32,
            ..Default::default()
        };
        let mut dst = ros::BatteryState {
            power_supply_health: ros::BatteryState::POWER_SUPPLY_HEALTH_GOOD,
            ..Default::default()
        };
        src.convert(&mut dst, &mut Context::default());
        assert!(dst.design_capacity.is_nan());
        assert_eq!(dst.power_supply_status, ros::BatteryState::POWER_SUPPLY_STATUS_FULL);
        assert_eq!(dst.power_supply_health, ros::BatteryState::POWER_SUPPLY_HEALTH_UNKNOWN);
        assert_eq!(
            dst.power_supply_technology,
            ros::BatteryState::POWER_SUPPLY_TECHNOLOGY_UNKNOWN
        );
        assert!(dst.present);
        assert_eq!(dst.charge, 2.0);
    }

    #[test]
    fn test_battery_state_unknown_status() {
        let src = ros::BatteryState {
            power_supply_status: 17,
            ..Default::default()
        };
        let mut ign_battery = ign::BatteryState {
            power_supply_status: PowerSupplyStatus::Charging as i32,
            ..Default::default()
        };
        let mut cx = Context::default();
        src.convert(&mut ign_battery, &mut cx);
        assert_eq!(ign_battery.power_supply_status, PowerSupplyStatus::Unknown as i32);
        let outcome = cx.finish();
        assert_eq!(outcome.diagnostics().len(), 1);
        assert_eq!(outcome.diagnostics()[0].field, "battery_state.power_supply_status");
    }

    #[test]
    fn test_camera_info_round_trip() {
        let src = camera_info();
        let mut ign_info = ign::CameraInfo::default();
        let mut cx = Context::default();
        src.convert(&mut ign_info, &mut cx);

        let distortion = ign_info.distortion.as_ref().unwrap();
        assert_eq!(distortion.model, DistortionModelType::PlumbBob as i32);
        assert_eq!(distortion.k, src.d);
        assert_eq!(ign_info.intrinsics.as_ref().unwrap().k.len(), 9);
        assert_eq!(ign_info.projection.as_ref().unwrap().p.len(), 12);
        assert_eq!(ign_info.rectification_matrix.len(), 9);

        let mut back = ros::CameraInfo::default();
        ign_info.convert(&mut back, &mut cx);
        assert_eq!(back, src);
        assert!(cx.finish().is_complete());
    }

    #[test]
    fn test_camera_info_unknown_distortion_model() {
        let src = ros::CameraInfo {
            distortion_model: "kannala_brandt".to_string(),
            d: vec![0.1, 0.2, 0.3, 0.4],
            ..Default::default()
        };
        let mut ign_info = ign::CameraInfo::default();
        let mut cx = Context::default();
        src.convert(&mut ign_info, &mut cx);
        assert_eq!(ign_info.distortion.as_ref().unwrap().k.len(), 4);
        let outcome = cx.finish();
        assert!(outcome.has(DiagnosticKind::UnsupportedEnumValue));
        assert_eq!(outcome.diagnostics()[0].value, "kannala_brandt");
    }

    #[test]
    fn test_camera_info_short_matrices_do_not_overrun() {
        let src = ign::CameraInfo {
            intrinsics: Some(Intrinsics { k: vec![1.0, 2.0] }),
            projection: Some(Projection { p: vec![3.0; 20] }),
            rectification_matrix: vec![4.0],
            ..Default::default()
        };
        let mut dst = ros::CameraInfo::default();
        src.convert(&mut dst, &mut Context::default());
        assert_eq!(&dst.k[..3], &[1.0, 2.0, 0.0]);
        assert_eq!(dst.p, [3.0; 12]);
        assert_eq!(dst.r[0], 4.0);
        assert_eq!(dst.r[1], 0.0);
        assert_eq!(dst.distortion_model, "");
    }
}
