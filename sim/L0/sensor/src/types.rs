//! Core sensor types and identifiers.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a sensor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorId(pub u64);

impl SensorId {
    /// Create a new sensor ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for SensorId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SensorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sensor({})", self.0)
    }
}

/// Type of sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorType {
    /// Inertial measurement unit (accelerometer + gyroscope + compass).
    Imu,
}

impl SensorType {
    /// Type tag used in sensor definitions.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Imu => "imu",
        }
    }

    /// Look up a sensor type by its definition tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "imu" => Some(Self::Imu),
            _ => None,
        }
    }
}

impl std::fmt::Display for SensorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Data carried by one sensor measurement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorData {
    /// IMU measurement.
    Imu {
        /// Linear acceleration (m/s^2).
        accelerometer: Vector3<f64>,
        /// Angular velocity (degrees/s).
        gyroscope: Vector3<f64>,
        /// Heading relative to north, degrees in `[0, 360)`.
        compass: f64,
    },
}

impl SensorData {
    /// The sensor type that produces this data.
    #[must_use]
    pub const fn sensor_type(&self) -> SensorType {
        match self {
            Self::Imu { .. } => SensorType::Imu,
        }
    }

    /// Check if this is an IMU measurement.
    #[must_use]
    pub fn is_imu(&self) -> bool {
        matches!(self, Self::Imu { .. })
    }

    /// Convert to a flat f64 vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Self::Imu {
                accelerometer,
                gyroscope,
                compass,
            } => vec![
                accelerometer.x,
                accelerometer.y,
                accelerometer.z,
                gyroscope.x,
                gyroscope.y,
                gyroscope.z,
                *compass,
            ],
        }
    }
}

/// A measurement as recorded by a stream, tagged with its origin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorReading {
    /// ID of the sensor that produced this reading.
    pub sensor_id: SensorId,
    /// Type of sensor.
    pub sensor_type: SensorType,
    /// Role name of the sensor, if it has one.
    pub name: Option<String>,
    /// Host frame number at which the reading was taken.
    pub frame: u64,
    /// Simulation time at which the reading was taken (seconds).
    pub timestamp: f64,
    /// The sensor data.
    pub data: SensorData,
}

impl SensorReading {
    /// Create a new sensor reading.
    #[must_use]
    pub fn new(
        sensor_id: SensorId,
        sensor_type: SensorType,
        frame: u64,
        timestamp: f64,
        data: SensorData,
    ) -> Self {
        Self {
            sensor_id,
            sensor_type,
            name: None,
            frame,
            timestamp,
            data,
        }
    }

    /// Set the role name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
