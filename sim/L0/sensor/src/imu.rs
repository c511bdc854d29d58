//! Inertial Measurement Unit (IMU) sensor.
//!
//! Once per host tick the IMU samples the owning actor and emits three
//! channels:
//! - Linear acceleration (accelerometer)
//! - Angular velocity of the root physics body (gyroscope)
//! - Heading relative to map north (compass)
//!
//! The accelerometer currently reports a constant `(1, 1, 1)`; no
//! acceleration is derived from body motion.

use nalgebra::Vector3;
use sim_types::RigidBodyState;
use tracing::{debug, trace};

use crate::compass::{heading_degrees, safe_normalize_2d, NORTH};
use crate::stream::{SensorOrigin, SensorSink};
use crate::tick::{SensorOwner, SensorTick, TickClock};
use crate::{SensorData, SensorDefinition, SensorDescription, SensorError, SensorId, SensorType};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Catalog category of the IMU.
pub const IMU_CATEGORY: &str = "other";

/// Value reported by the accelerometer channel.
const PLACEHOLDER_ACCELERATION: Vector3<f64> = Vector3::new(1.0, 1.0, 1.0);

/// Configuration for an IMU sensor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImuConfig {
    /// Reference north in world coordinates. Horizontal, unit length.
    pub north: Vector3<f64>,
}

impl Default for ImuConfig {
    fn default() -> Self {
        Self { north: NORTH }
    }
}

impl ImuConfig {
    /// Create a new IMU config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reference north vector.
    #[must_use]
    pub fn with_north(mut self, north: Vector3<f64>) -> Self {
        self.north = north;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> crate::Result<()> {
        let north = &self.north;
        if !north.iter().all(|c| c.is_finite()) {
            return Err(SensorError::invalid_config("north vector is not finite"));
        }
        if north.z.abs() > 1e-9 {
            return Err(SensorError::invalid_config(format!(
                "north vector must be horizontal, got z = {}",
                north.z
            )));
        }
        if (north.norm() - 1.0).abs() > 1e-6 {
            return Err(SensorError::invalid_config(format!(
                "north vector must be unit length, got {}",
                north.norm()
            )));
        }
        Ok(())
    }
}

/// IMU reading.
///
/// Built fresh on every sample and handed to the sink by value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImuReading {
    /// Linear acceleration (m/s^2).
    pub accelerometer: Vector3<f64>,
    /// Angular velocity (degrees/s).
    pub gyroscope: Vector3<f64>,
    /// Heading relative to north, degrees in `[0, 360)`.
    pub compass: f64,
}

impl ImuReading {
    /// Create a new IMU reading.
    #[must_use]
    pub fn new(accelerometer: Vector3<f64>, gyroscope: Vector3<f64>, compass: f64) -> Self {
        Self {
            accelerometer,
            gyroscope,
            compass,
        }
    }

    /// Create a zero reading.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            accelerometer: Vector3::zeros(),
            gyroscope: Vector3::zeros(),
            compass: 0.0,
        }
    }

    /// Get the acceleration magnitude.
    #[must_use]
    pub fn acceleration_magnitude(&self) -> f64 {
        self.accelerometer.norm()
    }

    /// Get the angular velocity magnitude.
    #[must_use]
    pub fn angular_velocity_magnitude(&self) -> f64 {
        self.gyroscope.norm()
    }

    /// Convert to `SensorData` for generic handling.
    #[must_use]
    pub fn to_sensor_data(self) -> SensorData {
        SensorData::Imu {
            accelerometer: self.accelerometer,
            gyroscope: self.gyroscope,
            compass: self.compass,
        }
    }

    /// Flatten to `[ax, ay, az, gx, gy, gz, compass]`.
    #[must_use]
    pub fn to_vec(self) -> Vec<f64> {
        self.to_sensor_data().to_vec()
    }
}

impl Default for ImuReading {
    fn default() -> Self {
        Self::zero()
    }
}

/// Inertial Measurement Unit sensor.
///
/// # Example
///
/// ```
/// use sim_sensor::{Imu, ImuConfig};
/// use sim_types::{BodyId, Pose, RigidBody, Twist};
/// use nalgebra::Vector3;
///
/// let imu = Imu::new(ImuConfig::default());
/// let body = RigidBody::new(
///     BodyId::new(1),
///     Pose::identity(),
///     Twist::angular(Vector3::new(1.0, 2.0, 3.0)),
/// );
///
/// // Facing north (world -Y)
/// let reading = imu.sample(Some(&body), Vector3::new(0.0, -1.0, 0.0));
///
/// assert_eq!(reading.gyroscope, Vector3::new(1.0, 2.0, 3.0));
/// assert_eq!(reading.compass, 0.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Imu {
    /// Unique sensor ID.
    id: SensorId,
    /// Optional role name.
    name: Option<String>,
    /// Sensor configuration.
    config: ImuConfig,
    /// Frame/time stamping for outgoing measurements.
    #[cfg_attr(feature = "serde", serde(skip))]
    clock: TickClock,
}

impl Imu {
    /// Create a new IMU sensor.
    #[must_use]
    pub fn new(config: ImuConfig) -> Self {
        Self {
            id: SensorId::new(0), // Assigned by the catalog on spawn
            name: None,
            config,
            clock: TickClock::new(),
        }
    }

    /// Static descriptor for the host sensor catalog.
    #[must_use]
    pub fn definition() -> SensorDefinition {
        SensorDefinition::generic(IMU_CATEGORY, SensorType::Imu.tag())
    }

    /// Create an IMU with a specific ID.
    #[must_use]
    pub fn with_id(mut self, id: SensorId) -> Self {
        self.id = id;
        self
    }

    /// Set the sensor name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the sensor ID.
    #[must_use]
    pub fn id(&self) -> SensorId {
        self.id
    }

    /// Get the sensor name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the sensor configuration.
    #[must_use]
    pub fn config(&self) -> &ImuConfig {
        &self.config
    }

    /// Get a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut ImuConfig {
        &mut self.config
    }

    /// Set the sensor ID.
    pub fn set_id(&mut self, id: SensorId) {
        self.id = id;
    }

    /// Frames ticked so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    /// Simulation time accumulated over ticks (seconds).
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Apply a spawn-time description.
    ///
    /// The IMU has no description-driven parameters; every attribute is
    /// ignored.
    pub fn configure(&mut self, description: &SensorDescription) {
        debug!(
            "{} configured from '{}', ignoring attributes {:?}",
            self.id,
            description.id,
            description.attribute_names().collect::<Vec<_>>()
        );
    }

    /// Sample the IMU.
    ///
    /// # Arguments
    ///
    /// * `body` - Root physics body of the owner, `None` if not attached
    /// * `forward` - Owner's forward direction; projected to the horizontal
    ///   plane and normalized here
    ///
    /// Never fails. A missing body reads zero angular velocity; a vertical
    /// or zero forward direction reads a 90 degree heading.
    #[must_use]
    pub fn sample(&self, body: Option<&dyn RigidBodyState>, forward: Vector3<f64>) -> ImuReading {
        let gyroscope = body.map_or_else(Vector3::zeros, |b| b.angular_velocity());

        let forward = safe_normalize_2d(forward);
        let compass = heading_degrees(&self.config.north, &forward);

        trace!(
            "{} sample: gyro {:?}, compass {:.3}",
            self.id, gyroscope, compass
        );

        ImuReading::new(PLACEHOLDER_ACCELERATION, gyroscope, compass)
    }

    /// Sample the IMU from its owner.
    #[must_use]
    pub fn read_from_owner(&self, owner: &dyn SensorOwner) -> ImuReading {
        self.sample(owner.physics_body(), owner.forward_vector())
    }

    fn origin(&self) -> SensorOrigin<'_> {
        SensorOrigin {
            sensor_id: self.id,
            sensor_type: SensorType::Imu,
            name: self.name.as_deref(),
            frame: self.clock.frame(),
            timestamp: self.clock.elapsed(),
        }
    }
}

impl SensorTick for Imu {
    fn tick(&mut self, delta_time: f64, owner: &dyn SensorOwner, sink: &mut dyn SensorSink) {
        self.clock.advance(delta_time);
        let reading = self.read_from_owner(owner);
        sink.send(&self.origin(), reading.to_sensor_data());
    }
}
