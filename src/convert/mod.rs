// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Structural conversion between ROS 2 and Ignition messages.
//!
//! Every supported message pair has two [`Convert`] impls, one on each
//! source type. A converter reads the source, writes into a destination
//! supplied by the caller and reports anything it could not carry over to
//! the [`Context`]. Converters for composite messages call the converters
//! of their parts; there is no shared base and no intermediate value.
//!
//! # Example
//!
//! ```
//! use ros_ign_convert::convert::{ign_to_ros, ros_to_ign};
//! use ros_ign_convert::msgs::{ign, ros};
//!
//! let pose = ros::Pose {
//!     position: ros::Point::new(1.0, 2.0, 3.0),
//!     orientation: ros::Quaternion::identity(),
//! };
//! let mut ign_pose = ign::Pose::default();
//! assert!(ros_to_ign(&pose, &mut ign_pose).is_complete());
//!
//! let mut back = ros::Pose::default();
//! assert!(ign_to_ros(&ign_pose, &mut back).is_complete());
//! assert_eq!(back, pose);
//! ```

pub mod frame;
pub mod header;
pub mod tables;

mod geometry;
mod image;
mod interfaces;
mod joints;
mod laser_scan;
mod point_cloud;
mod primitives;
mod sensors;

use crate::core::{Conversion, ConvertOptions, Diagnostic};
use crate::msgs::{IgnMessage, RosMessage};

/// One-directional structural conversion from `Self` into `Dst`.
///
/// Implementations never fail and never panic. Fields that cannot be
/// represented in `Dst` are left at their defaults and reported through
/// [`Context::report`].
pub trait Convert<Dst> {
    /// Write `self` into `dst`, overwriting every field the pair maps.
    fn convert(&self, dst: &mut Dst, cx: &mut Context);
}

/// State threaded through one top-level conversion call.
#[derive(Debug, Default)]
pub struct Context {
    options: ConvertOptions,
    diagnostics: Vec<Diagnostic>,
}

impl Context {
    /// Create a context with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Options in effect for this conversion.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Record a field that could not be converted.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            kind = diagnostic.kind.as_str(),
            field = diagnostic.field,
            value = %diagnostic.value,
            "{}",
            diagnostic
        );
        self.diagnostics.push(diagnostic);
    }

    /// Finish the conversion and summarize what was recorded.
    pub fn finish(self) -> Conversion {
        Conversion::from_diagnostics(self.diagnostics)
    }
}

/// Convert a ROS 2 message into its Ignition counterpart with default options.
pub fn ros_to_ign<R, I>(ros: &R, ign: &mut I) -> Conversion
where
    R: RosMessage + Convert<I>,
    I: IgnMessage,
{
    ros_to_ign_with(ros, ign, ConvertOptions::default())
}

/// Convert a ROS 2 message into its Ignition counterpart.
pub fn ros_to_ign_with<R, I>(ros: &R, ign: &mut I, options: ConvertOptions) -> Conversion
where
    R: RosMessage + Convert<I>,
    I: IgnMessage,
{
    tracing::trace!(from = R::TYPE_NAME, to = I::TYPE_NAME, "converting");
    let mut cx = Context::new(options);
    ros.convert(ign, &mut cx);
    cx.finish()
}

/// Convert an Ignition message into its ROS 2 counterpart with default options.
pub fn ign_to_ros<I, R>(ign: &I, ros: &mut R) -> Conversion
where
    I: IgnMessage + Convert<R>,
    R: RosMessage,
{
    ign_to_ros_with(ign, ros, ConvertOptions::default())
}

/// Convert an Ignition message into its ROS 2 counterpart.
pub fn ign_to_ros_with<I, R>(ign: &I, ros: &mut R, options: ConvertOptions) -> Conversion
where
    I: IgnMessage + Convert<R>,
    R: RosMessage,
{
    tracing::trace!(from = I::TYPE_NAME, to = R::TYPE_NAME, "converting");
    let mut cx = Context::new(options);
    ign.convert(ros, &mut cx);
    cx.finish()
}

/// Convert into an optional Ignition sub-message, creating it if absent.
pub(crate) fn convert_into<S, D>(src: &S, dst: &mut Option<D>, cx: &mut Context)
where
    S: Convert<D>,
    D: Default,
{
    src.convert(dst.get_or_insert_with(D::default), cx);
}

/// Convert from an optional Ignition sub-message.
///
/// An absent sub-message reads as its default, as protobuf accessors do.
pub(crate) fn convert_from<S, D>(src: &Option<S>, dst: &mut D, cx: &mut Context)
where
    S: Convert<D> + Default,
{
    match src {
        Some(src) => src.convert(dst, cx),
        None => S::default().convert(dst, cx),
    }
}

/// Rebuild `dst` element-wise from `src`, preserving order.
pub(crate) fn convert_seq<S, D>(src: &[S], dst: &mut Vec<D>, cx: &mut Context)
where
    S: Convert<D>,
    D: Default,
{
    dst.clear();
    dst.extend(src.iter().map(|item| {
        let mut out = D::default();
        item.convert(&mut out, cx);
        out
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DiagnosticKind;
    use crate::msgs::{ign, ros};

    #[test]
    fn test_context_collects_in_order() {
        let mut cx = Context::default();
        cx.report(Diagnostic::unsupported_enum("entity.type", 9, &["type"]));
        cx.report(Diagnostic::unsupported_format("image.encoding", "yuv422", &["step", "data"]));
        let outcome = cx.finish();
        assert_eq!(outcome.diagnostics().len(), 2);
        assert_eq!(outcome.diagnostics()[0].kind, DiagnosticKind::UnsupportedEnumValue);
    }

    #[test]
    fn test_convert_seq_clears_stale_elements() {
        let src = vec![ros::Vector3::new(1.0, 2.0, 3.0)];
        let mut dst = vec![ign::Vector3d::default(); 3];
        let mut cx = Context::default();
        convert_seq(&src, &mut dst, &mut cx);
        assert_eq!(dst.len(), 1);
        assert_eq!(dst[0].x, 1.0);
    }

    #[test]
    fn test_convert_from_absent_reads_default() {
        let mut dst = ros::Vector3::new(7.0, 7.0, 7.0);
        let mut cx = Context::default();
        convert_from(&None::<ign::Vector3d>, &mut dst, &mut cx);
        assert_eq!(dst, ros::Vector3::default());
    }
}
