// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Error types for the surfaces around the conversion engine.
//!
//! Conversions themselves never fail: they degrade and report through
//! [`Conversion`](crate::core::Conversion). The errors here cover:
//! - Registry lookups for unknown message pairs
//! - Decoding source messages from JSON or protobuf bytes
//! - Loading conversion options
//! - I/O in the command-line tool

use thiserror::Error;

/// Errors that can occur outside a single structural conversion.
#[derive(Debug, Clone, Error)]
pub enum BridgeError {
    /// No converter is registered for this pair of message types
    #[error("Unsupported message pair: '{ros_type}' <-> '{ign_type}'")]
    UnsupportedPair {
        /// ROS 2 type name (e.g., "std_msgs/msg/Bool")
        ros_type: String,
        /// Ignition type name (e.g., "ignition.msgs.Boolean")
        ign_type: String,
    },

    /// A type name is not known to either schema family
    #[error("Unknown message type: '{type_name}'")]
    UnknownType {
        /// Type name that was not recognized
        type_name: String,
    },

    /// A source message could not be read from, or written to, JSON
    #[error("JSON error for '{type_name}': {message}")]
    Json {
        /// Message type being processed
        type_name: String,
        /// Error message
        message: String,
    },

    /// A protobuf payload could not be decoded
    #[error("Protobuf decode error for '{type_name}': {message}")]
    ProtobufDecode {
        /// Message type being decoded
        type_name: String,
        /// Error message
        message: String,
    },

    /// Invalid or unreadable configuration
    #[error("Invalid configuration in {source_name}: {message}")]
    Config {
        /// File name or other origin of the configuration
        source_name: String,
        /// Error message
        message: String,
    },

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(String),
}

impl BridgeError {
    /// Create an "unsupported pair" error.
    pub fn unsupported_pair(ros_type: impl Into<String>, ign_type: impl Into<String>) -> Self {
        BridgeError::UnsupportedPair {
            ros_type: ros_type.into(),
            ign_type: ign_type.into(),
        }
    }

    /// Create an "unknown type" error.
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        BridgeError::UnknownType {
            type_name: type_name.into(),
        }
    }

    /// Create a JSON error.
    pub fn json(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        BridgeError::Json {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create a protobuf decode error.
    pub fn protobuf(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        BridgeError::ProtobufDecode {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        BridgeError::Config {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            BridgeError::UnsupportedPair { ros_type, ign_type } => {
                vec![("ros_type", ros_type.clone()), ("ign_type", ign_type.clone())]
            }
            BridgeError::UnknownType { type_name } => vec![("type", type_name.clone())],
            BridgeError::Json { type_name, message }
            | BridgeError::ProtobufDecode { type_name, message } => {
                vec![("type", type_name.clone()), ("message", message.clone())]
            }
            BridgeError::Config {
                source_name,
                message,
            } => vec![("source", source_name.clone()), ("message", message.clone())],
            BridgeError::Io(msg) => vec![("message", msg.clone())],
        }
    }
}

impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        BridgeError::Io(err.to_string())
    }
}

/// Result type for ros-ign-convert operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
