//! Simulated inertial measurement unit for the vehicle host.
//!
//! This crate provides a per-frame IMU sampler and the small contracts it
//! needs from its host:
//!
//! - [`Imu`] - Accelerometer, gyroscope and compass sampled once per tick
//! - [`SensorTick`] / [`SensorOwner`] - The host's per-frame callback and the
//!   actor state a sensor may read
//! - [`SensorSink`] - Entry point of the host's data stream
//! - [`SensorCatalog`] - Registry of [`SensorDefinition`]s used to list and
//!   spawn sensors
//!
//! # Design Philosophy
//!
//! Sensors are attached to actors and read host state that the physics step
//! has already published. Sampling is synchronous and cannot fail: a missing
//! physics body reads as zero angular velocity and a degenerate heading reads
//! as a defined (if meaningless) angle.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**.
//!
//! # Example
//!
//! ```
//! use sim_sensor::{BufferedSink, SensorCatalog, SensorDescription, SensorId, SensorTick};
//! use sim_types::{Actor, BodyId, Pose, RigidBody, Twist};
//! use nalgebra::Vector3;
//!
//! let catalog = SensorCatalog::with_builtin();
//! let mut imu = catalog
//!     .spawn_imu(&SensorDescription::new("sensor.other.imu"), SensorId::new(1))
//!     .unwrap();
//!
//! let vehicle = Actor::new(Pose::identity()).with_body(RigidBody::new(
//!     BodyId::new(1),
//!     Pose::identity(),
//!     Twist::angular(Vector3::new(0.0, 0.0, 15.0)),
//! ));
//!
//! let mut stream = BufferedSink::new();
//! imu.tick(1.0 / 20.0, &vehicle, &mut stream);
//!
//! assert_eq!(stream.len(), 1);
//! ```

#![doc(html_root_url = "https://docs.rs/sim-sensor/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::missing_const_for_fn, clippy::cast_precision_loss)]

pub mod compass;

mod catalog;
mod definition;
mod error;
mod imu;
mod stream;
mod tick;
mod types;

pub use catalog::SensorCatalog;
pub use compass::NORTH;
pub use definition::{SensorDefinition, SensorDescription, ROLE_NAME_ATTRIBUTE};
pub use error::SensorError;
pub use imu::{Imu, ImuConfig, ImuReading, IMU_CATEGORY};
pub use stream::{sink_fn, BufferedSink, FnSink, SensorOrigin, SensorSink};
pub use tick::{SensorOwner, SensorTick, TickClock};
pub use types::{SensorData, SensorId, SensorReading, SensorType};

/// Result type for sensor operations.
pub type Result<T> = std::result::Result<T, SensorError>;
