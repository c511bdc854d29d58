//! Rigid body state types.
//!
//! This module provides types for representing the kinematic state of a
//! physically simulated body: position, orientation, linear velocity, and
//! angular velocity.

use nalgebra::{Point3, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a rigid body in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyId(pub u64);

impl BodyId {
    /// Create a new body ID.
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

impl From<u64> for BodyId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Body({})", self.0)
    }
}

/// Read-only kinematic capability of a physics body.
///
/// Sensors receive this as `Option<&dyn RigidBodyState>`: `None` when the
/// owning actor has no physical root attached.
pub trait RigidBodyState {
    /// Current angular velocity in world coordinates (degrees/second).
    fn angular_velocity(&self) -> Vector3<f64>;
}

/// Position and orientation of a body or actor.
///
/// # Example
///
/// ```
/// use sim_types::Pose;
/// use nalgebra::Point3;
///
/// let pose = Pose::from_position(Point3::new(1.0, 2.0, 3.0));
/// assert_eq!(pose.forward().x, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    /// Position in world coordinates.
    pub position: Point3<f64>,
    /// Orientation as a unit quaternion.
    pub rotation: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// Create an identity pose (origin, no rotation).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Create a pose from position only (identity rotation).
    #[must_use]
    pub fn from_position(position: Point3<f64>) -> Self {
        Self {
            position,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Create a pose from position and rotation.
    #[must_use]
    pub const fn from_position_rotation(
        position: Point3<f64>,
        rotation: UnitQuaternion<f64>,
    ) -> Self {
        Self { position, rotation }
    }

    /// Create a pose rotated about the world Z axis by `yaw` degrees.
    #[must_use]
    pub fn from_yaw_degrees(position: Point3<f64>, yaw: f64) -> Self {
        Self {
            position,
            rotation: UnitQuaternion::from_euler_angles(0.0, 0.0, yaw.to_radians()),
        }
    }

    /// Transform a vector from local to world coordinates (rotation only).
    #[must_use]
    pub fn transform_vector(&self, local: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * local
    }

    /// Get the forward direction (local +X in world coordinates).
    #[must_use]
    pub fn forward(&self) -> Vector3<f64> {
        self.transform_vector(&Vector3::x())
    }

    /// Get the right direction (local +Y in world coordinates).
    #[must_use]
    pub fn right(&self) -> Vector3<f64> {
        self.transform_vector(&Vector3::y())
    }

    /// Get the up direction (local +Z in world coordinates).
    #[must_use]
    pub fn up(&self) -> Vector3<f64> {
        self.transform_vector(&Vector3::z())
    }

    /// Check if the pose contains `NaN` or `Inf` values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|x| x.is_finite())
            && self.rotation.coords.iter().all(|x| x.is_finite())
    }
}

/// Linear and angular velocity of a rigid body.
///
/// # Example
///
/// ```
/// use sim_types::Twist;
/// use nalgebra::Vector3;
///
/// let twist = Twist::angular(Vector3::new(0.0, 0.0, 90.0));
/// assert_eq!(twist.angular.z, 90.0);
/// assert_eq!(twist.linear.norm(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Twist {
    /// Linear velocity in world coordinates (m/s).
    pub linear: Vector3<f64>,
    /// Angular velocity in world coordinates (degrees/s).
    pub angular: Vector3<f64>,
}

impl Default for Twist {
    fn default() -> Self {
        Self::zero()
    }
}

impl Twist {
    /// Create a twist with specified linear and angular velocity.
    #[must_use]
    pub const fn new(linear: Vector3<f64>, angular: Vector3<f64>) -> Self {
        Self { linear, angular }
    }

    /// Create a zero twist (at rest).
    #[must_use]
    pub fn zero() -> Self {
        Self {
            linear: Vector3::zeros(),
            angular: Vector3::zeros(),
        }
    }

    /// Create a twist with linear velocity only.
    #[must_use]
    pub fn linear(v: Vector3<f64>) -> Self {
        Self {
            linear: v,
            angular: Vector3::zeros(),
        }
    }

    /// Create a twist with angular velocity only.
    #[must_use]
    pub fn angular(omega: Vector3<f64>) -> Self {
        Self {
            linear: Vector3::zeros(),
            angular: omega,
        }
    }

    /// Check if the twist contains `NaN` or `Inf` values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.linear.iter().all(|x| x.is_finite()) && self.angular.iter().all(|x| x.is_finite())
    }

    /// Angular speed (degrees/s).
    #[must_use]
    pub fn angular_speed(&self) -> f64 {
        self.angular.norm()
    }
}

/// A physically simulated body as published by the host physics step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RigidBody {
    /// Body identifier.
    pub id: BodyId,
    /// Current pose.
    pub pose: Pose,
    /// Current velocity.
    pub twist: Twist,
}

impl RigidBody {
    /// Create a body with the given pose and velocity.
    #[must_use]
    pub const fn new(id: BodyId, pose: Pose, twist: Twist) -> Self {
        Self { id, pose, twist }
    }

    /// Create a body at rest.
    #[must_use]
    pub fn at_rest(id: BodyId, pose: Pose) -> Self {
        Self {
            id,
            pose,
            twist: Twist::zero(),
        }
    }

    /// Check that pose and velocity are finite.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NonFiniteState`](crate::SimError::NonFiniteState)
    /// naming the first non-finite field.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.pose.is_finite() {
            return Err(crate::SimError::non_finite(self.id, "pose"));
        }
        if !self.twist.is_finite() {
            return Err(crate::SimError::non_finite(self.id, "twist"));
        }
        Ok(())
    }
}

impl RigidBodyState for RigidBody {
    fn angular_velocity(&self) -> Vector3<f64> {
        self.twist.angular
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_body_id() {
        let id = BodyId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id.to_string(), "Body(42)");

        let id2: BodyId = 42.into();
        assert_eq!(id, id2);
    }

    #[test]
    fn test_pose_identity_axes() {
        let pose = Pose::identity();
        assert_eq!(pose.forward(), Vector3::x());
        assert_eq!(pose.right(), Vector3::y());
        assert_eq!(pose.up(), Vector3::z());
    }

    #[test]
    fn test_pose_yaw() {
        let pose = Pose::from_yaw_degrees(Point3::origin(), 180.0);
        let forward = pose.forward();
        assert_relative_eq!(forward.x, -1.0, epsilon = 1e-10);
        assert_relative_eq!(forward.y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(pose.up().z, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_pose_pitched_straight_up() {
        // Pitch of -90 degrees about Y points local +X at world +Z
        let rotation = UnitQuaternion::from_euler_angles(0.0, -std::f64::consts::FRAC_PI_2, 0.0);
        let pose = Pose::from_position_rotation(Point3::origin(), rotation);
        let forward = pose.forward();
        assert_relative_eq!(forward.z, 1.0, epsilon = 1e-10);
        assert_relative_eq!(forward.x.hypot(forward.y), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_twist_angular_speed() {
        let twist = Twist::angular(Vector3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(twist.angular_speed(), 5.0);
        assert!(twist.is_finite());
    }

    #[test]
    fn test_rigid_body_state_passthrough() {
        let body = RigidBody::new(
            BodyId::new(1),
            Pose::identity(),
            Twist::new(Vector3::new(10.0, 0.0, 0.0), Vector3::new(1.0, 2.0, 3.0)),
        );
        assert_eq!(body.angular_velocity(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_rigid_body_validate() {
        let body = RigidBody::at_rest(BodyId::new(1), Pose::identity());
        assert!(body.validate().is_ok());

        let bad = RigidBody::new(
            BodyId::new(2),
            Pose::identity(),
            Twist::angular(Vector3::new(f64::NAN, 0.0, 0.0)),
        );
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("twist"));
        assert!(err.to_string().contains("Body(2)"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_rigid_body_serialization() {
        let body = RigidBody::at_rest(BodyId::new(3), Pose::identity());
        let json = serde_json::to_string(&body).unwrap();
        let parsed: RigidBody = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, body);
    }
}
