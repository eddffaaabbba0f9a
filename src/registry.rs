// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Converter registry for selecting a message pair by type name.
//!
//! The typed API in [`convert`](crate::convert) needs the concrete message
//! types at compile time. This registry erases them so callers that only
//! know type names (a bridge driven by configuration, the command-line
//! tool) can convert JSON-encoded messages, and encode or decode the
//! Ignition side as protobuf.
//!
//! # Example
//!
//! ```
//! use ros_ign_convert::core::Direction;
//! use ros_ign_convert::registry::global_registry;
//!
//! let converted = global_registry().convert_json(
//!     "std_msgs/msg/Bool",
//!     "ignition.msgs.Boolean",
//!     Direction::RosToIgn,
//!     &serde_json::json!({ "data": true }),
//!     Default::default(),
//! )?;
//! assert_eq!(converted.message["data"], true);
//! # Ok::<(), ros_ign_convert::BridgeError>(())
//! ```

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use serde::Serialize;
use serde_json::Value;

use crate::convert::{ign_to_ros_with, ros_to_ign_with, Convert};
use crate::core::{BridgeError, Conversion, ConvertOptions, Direction, Result};
use crate::msgs::{ign, ros, IgnMessage, RosMessage};

/// Result of converting one JSON-encoded message.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedMessage {
    /// Type name of the produced message
    pub type_name: &'static str,
    /// The produced message
    pub message: Value,
    /// Whether every field was converted
    pub conversion: Conversion,
}

/// Type-erased converter for one ROS/Ignition pair, both directions.
pub trait PairConverter: Send + Sync {
    /// ROS 2 type name (e.g., "std_msgs/msg/Bool").
    fn ros_type(&self) -> &'static str;

    /// Ignition type name (e.g., "ignition.msgs.Boolean").
    fn ign_type(&self) -> &'static str;

    /// Convert a JSON-encoded message in the given direction.
    fn convert_json(
        &self,
        direction: Direction,
        input: &Value,
        options: ConvertOptions,
    ) -> Result<ConvertedMessage>;

    /// Encode a JSON-encoded Ignition message as protobuf.
    fn encode_ign(&self, message: &Value) -> Result<Vec<u8>>;

    /// Decode a protobuf Ignition message into JSON.
    fn decode_ign(&self, bytes: &[u8]) -> Result<Value>;
}

/// [`PairConverter`] backed by the typed [`Convert`] impls of `R` and `I`.
pub struct TypedPair<R, I> {
    _types: PhantomData<fn() -> (R, I)>,
}

impl<R, I> TypedPair<R, I> {
    /// Create a converter for the pair.
    pub fn new() -> Self {
        Self {
            _types: PhantomData,
        }
    }
}

impl<R, I> Default for TypedPair<R, I> {
    fn default() -> Self {
        Self::new()
    }
}

fn from_json<T: serde::de::DeserializeOwned>(type_name: &str, value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|e| BridgeError::json(type_name, e.to_string()))
}

fn to_json<T: Serialize>(type_name: &str, value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| BridgeError::json(type_name, e.to_string()))
}

impl<R, I> PairConverter for TypedPair<R, I>
where
    R: RosMessage + Convert<I>,
    I: IgnMessage + Convert<R>,
{
    fn ros_type(&self) -> &'static str {
        R::TYPE_NAME
    }

    fn ign_type(&self) -> &'static str {
        I::TYPE_NAME
    }

    fn convert_json(
        &self,
        direction: Direction,
        input: &Value,
        options: ConvertOptions,
    ) -> Result<ConvertedMessage> {
        match direction {
            Direction::RosToIgn => {
                let src: R = from_json(R::TYPE_NAME, input)?;
                let mut dst = I::default();
                let conversion = ros_to_ign_with(&src, &mut dst, options);
                Ok(ConvertedMessage {
                    type_name: I::TYPE_NAME,
                    message: to_json(I::TYPE_NAME, &dst)?,
                    conversion,
                })
            }
            Direction::IgnToRos => {
                let src: I = from_json(I::TYPE_NAME, input)?;
                let mut dst = R::default();
                let conversion = ign_to_ros_with(&src, &mut dst, options);
                Ok(ConvertedMessage {
                    type_name: R::TYPE_NAME,
                    message: to_json(R::TYPE_NAME, &dst)?,
                    conversion,
                })
            }
        }
    }

    fn encode_ign(&self, message: &Value) -> Result<Vec<u8>> {
        let message: I = from_json(I::TYPE_NAME, message)?;
        Ok(message.encode_to_vec())
    }

    fn decode_ign(&self, bytes: &[u8]) -> Result<Value> {
        let message =
            I::decode(bytes).map_err(|e| BridgeError::protobuf(I::TYPE_NAME, e.to_string()))?;
        to_json(I::TYPE_NAME, &message)
    }
}

type PairKey = (String, String);

/// Registry of converters keyed by `(ros_type, ign_type)`.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: RwLock<HashMap<PairKey, Arc<dyn PairConverter>>>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in pair.
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        register_builtin(&registry);
        registry
    }

    /// Register the typed converter for `R` and `I`.
    pub fn register<R, I>(&self)
    where
        R: RosMessage + Convert<I>,
        I: IgnMessage + Convert<R>,
    {
        self.register_converter(Arc::new(TypedPair::<R, I>::new()));
    }

    /// Register a converter under its own type names, replacing any previous one.
    pub fn register_converter(&self, converter: Arc<dyn PairConverter>) {
        let key = (converter.ros_type().to_string(), converter.ign_type().to_string());
        let mut converters = self.converters.write().unwrap_or_else(PoisonError::into_inner);
        if converters.insert(key, converter).is_some() {
            tracing::debug!("replaced existing converter");
        }
    }

    /// Unregister a pair.
    ///
    /// # Returns
    ///
    /// `true` if a converter was removed, `false` if not found
    pub fn unregister(&self, ros_type: &str, ign_type: &str) -> bool {
        let mut converters = self.converters.write().unwrap_or_else(PoisonError::into_inner);
        converters
            .remove(&(ros_type.to_string(), ign_type.to_string()))
            .is_some()
    }

    /// Check if a pair is registered.
    pub fn has_pair(&self, ros_type: &str, ign_type: &str) -> bool {
        let converters = self.converters.read().unwrap_or_else(PoisonError::into_inner);
        converters.contains_key(&(ros_type.to_string(), ign_type.to_string()))
    }

    /// Get the converter for a pair.
    ///
    /// # Errors
    ///
    /// Returns `BridgeError::UnknownType` if either type name appears in no
    /// registered pair, and `BridgeError::UnsupportedPair` if both are known
    /// but not paired with each other
    pub fn get(&self, ros_type: &str, ign_type: &str) -> Result<Arc<dyn PairConverter>> {
        let converters = self.converters.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(converter) = converters.get(&(ros_type.to_string(), ign_type.to_string())) {
            return Ok(Arc::clone(converter));
        }

        let err = if !converters.keys().any(|(ros, _)| ros == ros_type) {
            BridgeError::unknown_type(ros_type)
        } else if !converters.keys().any(|(_, ign)| ign == ign_type) {
            BridgeError::unknown_type(ign_type)
        } else {
            BridgeError::unsupported_pair(ros_type, ign_type)
        };
        tracing::debug!(fields = ?err.log_fields(), "converter lookup failed");
        Err(err)
    }

    /// Ignition types registered for a ROS type, sorted.
    pub fn ign_types_for(&self, ros_type: &str) -> Vec<String> {
        let converters = self.converters.read().unwrap_or_else(PoisonError::into_inner);
        let mut types: Vec<String> = converters
            .keys()
            .filter(|(ros, _)| ros == ros_type)
            .map(|(_, ign)| ign.clone())
            .collect();
        types.sort();
        types
    }

    /// All registered pairs as `(ros_type, ign_type)`, sorted.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let converters = self.converters.read().unwrap_or_else(PoisonError::into_inner);
        let mut pairs: Vec<PairKey> = converters.keys().cloned().collect();
        pairs.sort();
        pairs
    }

    /// Get the number of registered pairs.
    pub fn count(&self) -> usize {
        let converters = self.converters.read().unwrap_or_else(PoisonError::into_inner);
        converters.len()
    }

    /// Convert a JSON-encoded message between a registered pair.
    pub fn convert_json(
        &self,
        ros_type: &str,
        ign_type: &str,
        direction: Direction,
        input: &Value,
        options: ConvertOptions,
    ) -> Result<ConvertedMessage> {
        self.get(ros_type, ign_type)?
            .convert_json(direction, input, options)
    }
}

fn register_builtin(registry: &ConverterRegistry) {
    registry.register::<ros::Bool, ign::Boolean>();
    registry.register::<ros::Empty, ign::Empty>();
    registry.register::<ros::UInt32, ign::UInt32>();
    registry.register::<ros::Int32, ign::Int32>();
    registry.register::<ros::Float32, ign::Float>();
    registry.register::<ros::Float64, ign::Double>();
    registry.register::<ros::StringMsg, ign::StringMsg>();
    registry.register::<ros::Header, ign::Header>();
    registry.register::<ros::Clock, ign::Clock>();

    registry.register::<ros::Quaternion, ign::Quaternion>();
    registry.register::<ros::Vector3, ign::Vector3d>();
    registry.register::<ros::Point, ign::Vector3d>();
    registry.register::<ros::Pose, ign::Pose>();
    registry.register::<ros::PoseStamped, ign::Pose>();
    registry.register::<ros::Transform, ign::Pose>();
    registry.register::<ros::TransformStamped, ign::Pose>();
    registry.register::<ros::TFMessage, ign::PoseV>();
    registry.register::<ros::Twist, ign::Twist>();
    registry.register::<ros::Wrench, ign::Wrench>();

    registry.register::<ros::JointWrench, ign::JointWrench>();
    registry.register::<ros::Entity, ign::Entity>();
    registry.register::<ros::Contact, ign::Contact>();
    registry.register::<ros::Contacts, ign::Contacts>();

    registry.register::<ros::Odometry, ign::Odometry>();
    registry.register::<ros::FluidPressure, ign::FluidPressure>();
    registry.register::<ros::Image, ign::Image>();
    registry.register::<ros::CameraInfo, ign::CameraInfo>();
    registry.register::<ros::Imu, ign::Imu>();
    registry.register::<ros::JointState, ign::Model>();
    registry.register::<ros::LaserScan, ign::LaserScan>();
    registry.register::<ros::MagneticField, ign::Magnetometer>();
    registry.register::<ros::PointCloud2, ign::PointCloudPacked>();
    registry.register::<ros::BatteryState, ign::BatteryState>();

    registry.register::<ros::JointTrajectoryPoint, ign::JointTrajectoryPoint>();
    registry.register::<ros::JointTrajectory, ign::JointTrajectory>();
}

/// Global converter registry with every built-in pair.
///
/// Built once on first use and never modified afterwards by this crate.
/// For custom pairs, create a `ConverterRegistry` instance directly.
static GLOBAL_REGISTRY: OnceLock<ConverterRegistry> = OnceLock::new();

/// Get the global converter registry.
pub fn global_registry() -> &'static ConverterRegistry {
    GLOBAL_REGISTRY.get_or_init(ConverterRegistry::with_builtin)
}
