// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # ros-ign-convert
//!
//! Bidirectional structural conversion between ROS 2 messages and Ignition
//! protobuf messages, for bridging a ROS 2 graph and an Ignition simulation.
//!
//! The library is organized as:
//! - [`msgs`] - Message definitions for both schema families
//! - [`convert`] - The conversion engine: one pair of converters per message type
//! - [`registry`] - Type-erased converters selected by type name, with JSON and
//!   protobuf encodings
//! - [`core`] - Errors, diagnostics and options
//!
//! ## Architecture
//!
//! A conversion is a single synchronous call. The caller owns both the source
//! and the destination; the converter reads one and writes the other in place.
//! Fields that have no counterpart in the destination schema do not fail the
//! call. They are left at their defaults and reported in the returned
//! [`Conversion`].
//!
//! ## Example: Typed conversion
//!
//! ```
//! use ros_ign_convert::msgs::{ign, ros};
//! use ros_ign_convert::{ign_to_ros, ros_to_ign};
//!
//! let header = ros::Header::new(ros::Time::new(12, 500), "base_link");
//!
//! let mut ign_header = ign::Header::default();
//! assert!(ros_to_ign(&header, &mut ign_header).is_complete());
//!
//! let mut back = ros::Header::default();
//! assert!(ign_to_ros(&ign_header, &mut back).is_complete());
//! assert_eq!(back, header);
//! ```
//!
//! ## Example: Conversion by type name
//!
//! ```
//! use ros_ign_convert::{global_registry, Direction};
//!
//! let converted = global_registry().convert_json(
//!     "std_msgs/msg/Float64",
//!     "ignition.msgs.Double",
//!     Direction::RosToIgn,
//!     &serde_json::json!({ "data": 2.5 }),
//!     Default::default(),
//! )?;
//! assert_eq!(converted.type_name, "ignition.msgs.Double");
//! assert_eq!(converted.message["data"], 2.5);
//! # Ok::<(), ros_ign_convert::BridgeError>(())
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{
    BridgeError, Conversion, ConvertOptions, Diagnostic, DiagnosticKind, Direction, Result,
    StampPolicy,
};

// Message definitions
pub mod msgs;

// Conversion engine
pub mod convert;

pub use convert::{ign_to_ros, ign_to_ros_with, ros_to_ign, ros_to_ign_with, Context, Convert};

// Converter lookup by type name
pub mod registry;

pub use registry::{global_registry, ConvertedMessage, ConverterRegistry, PairConverter};
