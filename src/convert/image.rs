// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Image pixel buffers.
//!
//! The row stride is recomputed from the pixel layout table rather than
//! copied, and exactly `stride * height` bytes are carried over (fewer if
//! the source buffer is shorter). An image whose pixel layout has no
//! counterpart stops converting at that point: step and data are reset and
//! an [`UnsupportedFormat`](crate::core::DiagnosticKind::UnsupportedFormat)
//! diagnostic is recorded.

use super::tables::{pixel_encoding_by_ign, pixel_encoding_by_ros, PixelEncoding};
use super::{Context, Convert};
use crate::core::Diagnostic;
use crate::msgs::ign::PixelFormatType;
use crate::msgs::{ign, ros};

/// Copy the first `stride * height` bytes of `src`, or all of it if shorter.
fn copy_rows(src: &[u8], stride: u32, height: u32, dst: &mut Vec<u8>) {
    let wanted = (stride as usize).saturating_mul(height as usize);
    let available = wanted.min(src.len());
    if available < wanted {
        tracing::debug!(wanted, available, "image buffer shorter than declared size");
    }
    dst.clear();
    dst.extend_from_slice(&src[..available]);
}

impl Convert<ign::Image> for ros::Image {
    fn convert(&self, dst: &mut ign::Image, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.width = self.width;
        dst.height = self.height;

        let Some(encoding) = pixel_encoding_by_ros(&self.encoding) else {
            dst.pixel_format_type = PixelFormatType::UnknownPixelFormat as i32;
            dst.step = 0;
            dst.data.clear();
            cx.report(Diagnostic::unsupported_format(
                "image.encoding",
                &self.encoding,
                &["step", "data"],
            ));
            return;
        };

        dst.pixel_format_type = encoding.ign as i32;
        dst.step = encoding.stride(dst.width);
        copy_rows(&self.data, dst.step, dst.height, &mut dst.data);
    }
}

impl Convert<ros::Image> for ign::Image {
    fn convert(&self, dst: &mut ros::Image, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.height = self.height;
        dst.width = self.width;

        let encoding: Option<&PixelEncoding> = PixelFormatType::try_from(self.pixel_format_type)
            .ok()
            .and_then(pixel_encoding_by_ign);
        let Some(encoding) = encoding else {
            dst.encoding.clear();
            dst.is_bigendian = 0;
            dst.step = 0;
            dst.data.clear();
            cx.report(Diagnostic::unsupported_format(
                "image.pixel_format_type",
                self.pixel_format_type,
                &["encoding", "is_bigendian", "step", "data"],
            ));
            return;
        };

        dst.encoding = encoding.ros.to_string();
        dst.is_bigendian = 0;
        dst.step = encoding.stride(dst.width);
        copy_rows(&self.data, dst.step, dst.height, &mut dst.data);
    }
}
