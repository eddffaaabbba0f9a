// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Geometry: vectors, rotations, poses, transforms, twists and wrenches.
//!
//! Ignition has a single `Pose` message for what ROS splits into poses,
//! stamped poses and (stamped) transforms, so several ROS types convert to
//! and from it.

use super::header::{decode_frame, encode_frame, CHILD_FRAME_ID_KEY};
use super::{convert_from, convert_into, convert_seq, Context, Convert};
use crate::msgs::{ign, ros};

impl Convert<ign::Quaternion> for ros::Quaternion {
    fn convert(&self, dst: &mut ign::Quaternion, _cx: &mut Context) {
        dst.x = self.x;
        dst.y = self.y;
        dst.z = self.z;
        dst.w = self.w;
    }
}

impl Convert<ros::Quaternion> for ign::Quaternion {
    fn convert(&self, dst: &mut ros::Quaternion, _cx: &mut Context) {
        dst.x = self.x;
        dst.y = self.y;
        dst.z = self.z;
        dst.w = self.w;
    }
}

/// `x`/`y`/`z` triples that all map onto `Vector3d`.
macro_rules! vector3_pair {
    ($($ros:ty),*) => {
        $(
            impl Convert<ign::Vector3d> for $ros {
                fn convert(&self, dst: &mut ign::Vector3d, _cx: &mut Context) {
                    dst.x = self.x;
                    dst.y = self.y;
                    dst.z = self.z;
                }
            }

            impl Convert<$ros> for ign::Vector3d {
                fn convert(&self, dst: &mut $ros, _cx: &mut Context) {
                    dst.x = self.x;
                    dst.y = self.y;
                    dst.z = self.z;
                }
            }
        )*
    };
}

vector3_pair!(ros::Vector3, ros::Point);

impl Convert<ign::Pose> for ros::Pose {
    fn convert(&self, dst: &mut ign::Pose, cx: &mut Context) {
        convert_into(&self.position, &mut dst.position, cx);
        convert_into(&self.orientation, &mut dst.orientation, cx);
    }
}

impl Convert<ros::Pose> for ign::Pose {
    fn convert(&self, dst: &mut ros::Pose, cx: &mut Context) {
        convert_from(&self.position, &mut dst.position, cx);
        convert_from(&self.orientation, &mut dst.orientation, cx);
    }
}

impl Convert<ign::Pose> for ros::PoseStamped {
    fn convert(&self, dst: &mut ign::Pose, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        self.pose.convert(dst, cx);
    }
}

impl Convert<ros::PoseStamped> for ign::Pose {
    fn convert(&self, dst: &mut ros::PoseStamped, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        self.convert(&mut dst.pose, cx);
    }
}

impl Convert<ign::Pose> for ros::Transform {
    fn convert(&self, dst: &mut ign::Pose, cx: &mut Context) {
        convert_into(&self.translation, &mut dst.position, cx);
        convert_into(&self.rotation, &mut dst.orientation, cx);
    }
}

impl Convert<ros::Transform> for ign::Pose {
    fn convert(&self, dst: &mut ros::Transform, cx: &mut Context) {
        convert_from(&self.position, &mut dst.translation, cx);
        convert_from(&self.orientation, &mut dst.rotation, cx);
    }
}

/// The child frame travels in the pose header side-channel.
impl Convert<ign::Pose> for ros::TransformStamped {
    fn convert(&self, dst: &mut ign::Pose, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        self.transform.convert(dst, cx);
        encode_frame(&mut dst.header, CHILD_FRAME_ID_KEY, &self.child_frame_id, cx);
    }
}

impl Convert<ros::TransformStamped> for ign::Pose {
    fn convert(&self, dst: &mut ros::TransformStamped, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        self.convert(&mut dst.transform, cx);
        decode_frame(self.header.as_ref(), CHILD_FRAME_ID_KEY, &mut dst.child_frame_id);
    }
}

/// The first transform's header doubles as the header of the pose list.
impl Convert<ign::PoseV> for ros::TFMessage {
    fn convert(&self, dst: &mut ign::PoseV, cx: &mut Context) {
        convert_seq(&self.transforms, &mut dst.pose, cx);
        match self.transforms.first() {
            Some(first) => first.header.convert(&mut dst.header, cx),
            None => dst.header = None,
        }
    }
}

impl Convert<ros::TFMessage> for ign::PoseV {
    fn convert(&self, dst: &mut ros::TFMessage, cx: &mut Context) {
        convert_seq(&self.pose, &mut dst.transforms, cx);
    }
}

impl Convert<ign::Twist> for ros::Twist {
    fn convert(&self, dst: &mut ign::Twist, cx: &mut Context) {
        convert_into(&self.linear, &mut dst.linear, cx);
        convert_into(&self.angular, &mut dst.angular, cx);
    }
}

impl Convert<ros::Twist> for ign::Twist {
    fn convert(&self, dst: &mut ros::Twist, cx: &mut Context) {
        convert_from(&self.linear, &mut dst.linear, cx);
        convert_from(&self.angular, &mut dst.angular, cx);
    }
}

/// `force_offset` has no ROS counterpart and is left untouched.
impl Convert<ign::Wrench> for ros::Wrench {
    fn convert(&self, dst: &mut ign::Wrench, cx: &mut Context) {
        convert_into(&self.force, &mut dst.force, cx);
        convert_into(&self.torque, &mut dst.torque, cx);
    }
}

impl Convert<ros::Wrench> for ign::Wrench {
    fn convert(&self, dst: &mut ros::Wrench, cx: &mut Context) {
        convert_from(&self.force, &mut dst.force, cx);
        convert_from(&self.torque, &mut dst.torque, cx);
    }
}
