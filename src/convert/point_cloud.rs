// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Packed point clouds.
//!
//! The byte buffer is copied as-is, sized by the source buffer. Field
//! descriptors are copied one to one; a datatype with no counterpart falls
//! back to `INT8`, the first numeric type in both schemas.

use super::tables::{point_datatype_to_ign, point_datatype_to_ros};
use super::{convert_seq, Context, Convert};
use crate::core::Diagnostic;
use crate::msgs::ign::point_cloud_packed::field::DataType;
use crate::msgs::ign::point_cloud_packed::Field;
use crate::msgs::{ign, ros};

impl Convert<Field> for ros::PointField {
    fn convert(&self, dst: &mut Field, cx: &mut Context) {
        dst.name = self.name.clone();
        dst.count = self.count;
        dst.offset = self.offset;
        let datatype = point_datatype_to_ign(self.datatype).unwrap_or_else(|| {
            cx.report(Diagnostic::unsupported_enum(
                "point_field.datatype",
                self.datatype,
                &["datatype"],
            ));
            DataType::Int8
        });
        dst.datatype = datatype as i32;
    }
}

impl Convert<ros::PointField> for Field {
    fn convert(&self, dst: &mut ros::PointField, cx: &mut Context) {
        dst.name = self.name.clone();
        dst.count = self.count;
        dst.offset = self.offset;
        let datatype = DataType::try_from(self.datatype).unwrap_or_else(|_| {
            cx.report(Diagnostic::unsupported_enum(
                "point_cloud_packed.field.datatype",
                self.datatype,
                &["datatype"],
            ));
            DataType::Int8
        });
        dst.datatype = point_datatype_to_ros(datatype);
    }
}

impl Convert<ign::PointCloudPacked> for ros::PointCloud2 {
    fn convert(&self, dst: &mut ign::PointCloudPacked, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.height = self.height;
        dst.width = self.width;
        dst.is_bigendian = self.is_bigendian;
        dst.point_step = self.point_step;
        dst.row_step = self.row_step;
        dst.is_dense = self.is_dense;
        dst.data.clone_from(&self.data);
        convert_seq(&self.fields, &mut dst.field, cx);
    }
}

impl Convert<ros::PointCloud2> for ign::PointCloudPacked {
    fn convert(&self, dst: &mut ros::PointCloud2, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.height = self.height;
        dst.width = self.width;
        dst.is_bigendian = self.is_bigendian;
        dst.point_step = self.point_step;
        dst.row_step = self.row_step;
        dst.is_dense = self.is_dense;
        dst.data.clone_from(&self.data);
        convert_seq(&self.field, &mut dst.fields, cx);
    }
}
