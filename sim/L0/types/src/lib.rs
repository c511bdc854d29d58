//! Core types for the simulation host.
//!
//! This crate provides the data a sensor reads from the host each frame:
//!
//! - [`RigidBody`] - Pose and velocity of a physically simulated body
//! - [`Actor`] - An entity in the world whose root may or may not be a physics body
//! - [`RigidBodyState`] - Read-only capability exposed by a physics body
//! - [`Pose`], [`Twist`] - Position/orientation and velocity
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They have no physics and no integration.
//! The host's physics step owns and mutates them; sensors only read.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**.
//!
//! # Coordinate System
//!
//! Follows the vehicle host's world axes:
//!
//! - X: forward
//! - Y: right
//! - Z: up
//!
//! Angular velocities are reported in **degrees per second**, as the host
//! physics supplies them.
//!
//! # Example
//!
//! ```
//! use sim_types::{Actor, BodyId, Pose, RigidBody, RigidBodyState, Twist};
//! use nalgebra::Vector3;
//!
//! let body = RigidBody::new(
//!     BodyId::new(1),
//!     Pose::identity(),
//!     Twist::angular(Vector3::new(0.0, 0.0, 45.0)),
//! );
//! let actor = Actor::new(Pose::identity()).with_body(body);
//!
//! assert_eq!(actor.body().map(|b| b.angular_velocity().z), Some(45.0));
//! ```

#![doc(html_root_url = "https://docs.rs/sim-types/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to nalgebra
    clippy::suboptimal_flops,
)]

mod actor;
mod body;
mod error;

pub use actor::Actor;
pub use body::{BodyId, Pose, RigidBody, RigidBodyState, Twist};
pub use error::SimError;

// Re-export math types for convenience
pub use nalgebra::{Point3, UnitQuaternion, Vector3};

/// Result type for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;
