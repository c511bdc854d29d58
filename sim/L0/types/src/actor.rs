//! Actors: entities placed in the world by the host.

use nalgebra::Vector3;

use crate::{Pose, RigidBody, RigidBodyState};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An entity in the host world.
///
/// Its root component may be a physics body (vehicles, props) or a plain
/// transform (spectators, static markers). Sensors are attached to actors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Actor {
    /// Actor transform in world coordinates.
    pub pose: Pose,
    /// Physics body at the root, if any.
    pub body: Option<RigidBody>,
}

impl Actor {
    /// Create an actor without a physics body.
    #[must_use]
    pub const fn new(pose: Pose) -> Self {
        Self { pose, body: None }
    }

    /// Attach a physics body as the actor's root.
    #[must_use]
    pub fn with_body(mut self, body: RigidBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Physics body at the root, if any.
    #[must_use]
    pub fn body(&self) -> Option<&RigidBody> {
        self.body.as_ref()
    }

    /// Physics body as a read-only capability.
    #[must_use]
    pub fn body_state(&self) -> Option<&dyn RigidBodyState> {
        self.body.as_ref().map(|b| b as &dyn RigidBodyState)
    }

    /// Forward direction of the actor in world coordinates.
    #[must_use]
    pub fn forward(&self) -> Vector3<f64> {
        self.pose.forward()
    }
}
