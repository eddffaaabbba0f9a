// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Joint states and joint trajectories.
//!
//! A ROS joint state is a set of parallel arrays; Ignition models it as one
//! joint per entry with the values on the first axis. Callers are expected
//! to supply parallel arrays of equal length. When they do not, missing
//! names and values read as defaults rather than panicking.

use super::{convert_from, convert_into, convert_seq, Context, Convert};
use crate::msgs::{ign, ros};

/// Joints are driven by `position`; one Ignition joint per position entry.
impl Convert<ign::Model> for ros::JointState {
    fn convert(&self, dst: &mut ign::Model, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);

        dst.joint.clear();
        dst.joint.extend(self.position.iter().enumerate().map(|(i, &position)| {
            ign::Joint {
                name: self.name.get(i).cloned().unwrap_or_default(),
                axis1: Some(ign::Axis {
                    position,
                    velocity: self.velocity.get(i).copied().unwrap_or_default(),
                    force: self.effort.get(i).copied().unwrap_or_default(),
                    ..Default::default()
                }),
                ..Default::default()
            }
        }));
    }
}

impl Convert<ros::JointState> for ign::Model {
    fn convert(&self, dst: &mut ros::JointState, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);

        dst.name.clear();
        dst.position.clear();
        dst.velocity.clear();
        dst.effort.clear();
        for joint in &self.joint {
            let axis = joint.axis1.clone().unwrap_or_default();
            dst.name.push(joint.name.clone());
            dst.position.push(axis.position);
            dst.velocity.push(axis.velocity);
            dst.effort.push(axis.force);
        }
    }
}

impl Convert<ign::JointTrajectoryPoint> for ros::JointTrajectoryPoint {
    fn convert(&self, dst: &mut ign::JointTrajectoryPoint, cx: &mut Context) {
        dst.positions.clone_from(&self.positions);
        dst.velocities.clone_from(&self.velocities);
        dst.accelerations.clone_from(&self.accelerations);
        dst.effort.clone_from(&self.effort);
        convert_into(&self.time_from_start, &mut dst.time_from_start, cx);
    }
}

impl Convert<ros::JointTrajectoryPoint> for ign::JointTrajectoryPoint {
    fn convert(&self, dst: &mut ros::JointTrajectoryPoint, cx: &mut Context) {
        dst.positions.clone_from(&self.positions);
        dst.velocities.clone_from(&self.velocities);
        dst.accelerations.clone_from(&self.accelerations);
        dst.effort.clone_from(&self.effort);
        convert_from(&self.time_from_start, &mut dst.time_from_start, cx);
    }
}

impl Convert<ign::JointTrajectory> for ros::JointTrajectory {
    fn convert(&self, dst: &mut ign::JointTrajectory, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.joint_names.clone_from(&self.joint_names);
        convert_seq(&self.points, &mut dst.points, cx);
    }
}

impl Convert<ros::JointTrajectory> for ign::JointTrajectory {
    fn convert(&self, dst: &mut ros::JointTrajectory, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.joint_names.clone_from(&self.joint_names);
        convert_seq(&self.points, &mut dst.points, cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joint_state() -> ros::JointState {
        ros::JointState {
            header: ros::Header::new(ros::Time::new(5, 0), "base"),
            name: vec!["shoulder".into(), "elbow".into()],
            position: vec![0.5, -1.0],
            velocity: vec![0.1, 0.2],
            effort: vec![3.0, 4.0],
        }
    }

    #[test]
    fn test_joint_state_to_model() {
        let mut model = ign::Model::default();
        joint_state().convert(&mut model, &mut Context::default());

        assert_eq!(model.joint.len(), 2);
        assert_eq!(model.joint[1].name, "elbow");
        let axis = model.joint[1].axis1.as_ref().unwrap();
        assert_eq!(axis.position, -1.0);
        assert_eq!(axis.velocity, 0.2);
        assert_eq!(axis.force, 4.0);
    }

    #[test]
    fn test_joint_state_round_trip() {
        let src = joint_state();
        let mut model = ign::Model::default();
        let mut cx = Context::default();
        src.convert(&mut model, &mut cx);
        let mut back = ros::JointState::default();
        model.convert(&mut back, &mut cx);
        assert_eq!(back, src);
    }

    #[test]
    fn test_joint_state_short_arrays_default() {
        let src = ros::JointState {
            name: vec!["only".into()],
            position: vec![1.0, 2.0, 3.0],
            velocity: Vec::new(),
            effort: vec![9.0],
            ..Default::default()
        };
        let mut model = ign::Model::default();
        src.convert(&mut model, &mut Context::default());
        assert_eq!(model.joint.len(), 3);
        assert_eq!(model.joint[2].name, "");
        assert_eq!(model.joint[2].axis1.as_ref().unwrap().velocity, 0.0);
        assert_eq!(model.joint[0].axis1.as_ref().unwrap().force, 9.0);
    }

    #[test]
    fn test_model_to_joint_state_clears_stale_entries() {
        let mut model = ign::Model::default();
        joint_state().convert(&mut model, &mut Context::default());
        model.joint.truncate(1);

        let mut dst = joint_state();
        dst.name.push("wrist".into());
        model.convert(&mut dst, &mut Context::default());
        assert_eq!(dst.name, vec!["shoulder".to_string()]);
        assert_eq!(dst.effort, vec![3.0]);
    }

    #[test]
    fn test_trajectory_round_trip() {
        let src = ros::JointTrajectory {
            header: ros::Header::new(ros::Time::new(1, 0), "arm"),
            joint_names: vec!["j1".into(), "j2".into()],
            points: vec![
                ros::JointTrajectoryPoint {
                    positions: vec![0.0, 0.0],
                    velocities: vec![0.1, 0.1],
                    accelerations: Vec::new(),
                    effort: Vec::new(),
                    time_from_start: ros::Duration::new(0, 500_000_000),
                },
                ros::JointTrajectoryPoint {
                    positions: vec![1.0, 0.5],
                    time_from_start: ros::Duration::new(2, 0),
                    ..Default::default()
                },
            ],
        };
        let mut ign_traj = ign::JointTrajectory::default();
        let mut cx = Context::default();
        src.convert(&mut ign_traj, &mut cx);
        assert_eq!(ign_traj.points.len(), 2);
        assert_eq!(
            ign_traj.points[0].time_from_start,
            Some(ign::Duration { sec: 0, nsec: 500_000_000 })
        );

        let mut back = ros::JointTrajectory::default();
        ign_traj.convert(&mut back, &mut cx);
        assert_eq!(back, src);
    }

    #[test]
    fn test_trajectory_points_are_rebuilt() {
        let src = ros::JointTrajectory {
            points: vec![ros::JointTrajectoryPoint::default()],
            ..Default::default()
        };
        let mut ign_traj = ign::JointTrajectory {
            points: vec![ign::JointTrajectoryPoint::default(); 3],
            ..Default::default()
        };
        src.convert(&mut ign_traj, &mut Context::default());
        assert_eq!(ign_traj.points.len(), 1);
    }
}
