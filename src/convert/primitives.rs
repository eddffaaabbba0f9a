// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Scalar wrappers and the simulation clock.

use super::{convert_from, convert_into, Context, Convert};
use crate::msgs::{ign, ros};

/// Both directions of a `data`-only wrapper pair.
macro_rules! data_pair {
    ($($ros:ty => $ign:ty),* $(,)?) => {
        $(
            impl Convert<$ign> for $ros {
                fn convert(&self, dst: &mut $ign, _cx: &mut Context) {
                    dst.data = self.data.clone();
                }
            }

            impl Convert<$ros> for $ign {
                fn convert(&self, dst: &mut $ros, _cx: &mut Context) {
                    dst.data = self.data.clone();
                }
            }
        )*
    };
}

data_pair! {
    ros::Bool => ign::Boolean,
    ros::UInt32 => ign::UInt32,
    ros::Int32 => ign::Int32,
    ros::Float32 => ign::Float,
    ros::Float64 => ign::Double,
    ros::StringMsg => ign::StringMsg,
}

impl Convert<ign::Empty> for ros::Empty {
    fn convert(&self, _dst: &mut ign::Empty, _cx: &mut Context) {}
}

impl Convert<ros::Empty> for ign::Empty {
    fn convert(&self, _dst: &mut ros::Empty, _cx: &mut Context) {}
}

/// Only simulation time is bridged; system and real time stay unset.
impl Convert<ign::Clock> for ros::Clock {
    fn convert(&self, dst: &mut ign::Clock, cx: &mut Context) {
        convert_into(&self.clock, &mut dst.sim, cx);
    }
}

impl Convert<ros::Clock> for ign::Clock {
    fn convert(&self, dst: &mut ros::Clock, cx: &mut Context) {
        convert_from(&self.sim, &mut dst.clock, cx);
    }
}
