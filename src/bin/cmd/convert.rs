// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Convert command - convert one message between ROS 2 and Ignition.

use std::path::PathBuf;

use anyhow::{bail, Context as _};
use clap::{Args, ValueEnum};
use serde_json::Value;

use crate::common::{read_input, Result};
use ros_ign_convert::registry::global_registry;
use ros_ign_convert::{ConvertOptions, Direction};

/// Message encodings accepted on input and produced on output.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageFormat {
    /// JSON object with the message's field names
    Json,
    /// Hex-encoded protobuf bytes (Ignition side only)
    ProtobufHex,
}

/// Returned by `convert --strict` when the result is degraded.
#[derive(Debug, thiserror::Error)]
#[error("conversion degraded with {count} diagnostic(s)")]
pub struct DegradedError {
    pub count: usize,
}

/// Convert one message read from a file or stdin.
#[derive(Args, Clone, Debug)]
pub struct ConvertCmd {
    /// ROS 2 type name (e.g., sensor_msgs/msg/Image)
    #[arg(long, value_name = "TYPE")]
    ros_type: String,

    /// Ignition type name (e.g., ignition.msgs.Image)
    #[arg(long, value_name = "TYPE")]
    ign_type: String,

    /// Conversion direction: ros-to-ign or ign-to-ros
    #[arg(short, long, value_name = "DIRECTION")]
    direction: Direction,

    /// Input file (reads stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// TOML file with conversion options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Input encoding
    #[arg(long, value_enum, default_value = "json")]
    input_format: MessageFormat,

    /// Output encoding
    #[arg(short, long, value_enum, default_value = "json")]
    format: MessageFormat,

    /// Exit with status 2 when any field could not be converted
    #[arg(long)]
    strict: bool,
}

impl ConvertCmd {
    pub fn run(self) -> Result<()> {
        let converter = global_registry().get(&self.ros_type, &self.ign_type)?;

        let options = match &self.config {
            Some(path) => ConvertOptions::from_file(path)?,
            None => ConvertOptions::default(),
        };

        let text = read_input(self.input.as_deref())?;
        let source: Value = match self.input_format {
            MessageFormat::Json => serde_json::from_str(&text)
                .with_context(|| format!("input is not valid JSON for {}", self.source_type()))?,
            MessageFormat::ProtobufHex => {
                if self.direction != Direction::IgnToRos {
                    bail!("protobuf input is only available for ign-to-ros conversions");
                }
                let bytes = hex::decode(text.trim()).context("input is not valid hex")?;
                converter.decode_ign(&bytes)?
            }
        };

        let converted = converter.convert_json(self.direction, &source, options)?;
        tracing::debug!(
            from = self.source_type(),
            to = converted.type_name,
            complete = converted.conversion.is_complete(),
            "Converted message"
        );

        match self.format {
            MessageFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&converted.message)?);
            }
            MessageFormat::ProtobufHex => {
                if self.direction != Direction::RosToIgn {
                    bail!("protobuf output is only available for ros-to-ign conversions");
                }
                let bytes = converter.encode_ign(&converted.message)?;
                println!("{}", hex::encode(bytes));
            }
        }

        let diagnostics = converted.conversion.diagnostics();
        for diagnostic in diagnostics {
            eprintln!("warning: {diagnostic}");
        }

        if self.strict && !diagnostics.is_empty() {
            return Err(DegradedError {
                count: diagnostics.len(),
            }
            .into());
        }
        Ok(())
    }

    fn source_type(&self) -> &str {
        match self.direction {
            Direction::RosToIgn => &self.ros_type,
            Direction::IgnToRos => &self.ign_type,
        }
    }
}
