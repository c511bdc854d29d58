//! Per-frame scheduling contract between the host and its sensors.
//!
//! The host calls [`SensorTick::tick`] once per simulation frame, after its
//! physics step. The sensor reads what it needs from its [`SensorOwner`] and
//! hands the result to a [`SensorSink`](crate::SensorSink) before returning.

use nalgebra::Vector3;
use sim_types::{Actor, RigidBodyState};
use tracing::warn;

use crate::SensorSink;

/// What a sensor may read from the actor it is attached to.
pub trait SensorOwner {
    /// Physics body at the actor's root, if one is attached.
    fn physics_body(&self) -> Option<&dyn RigidBodyState>;

    /// Actor's current forward direction in world coordinates.
    fn forward_vector(&self) -> Vector3<f64>;
}

impl SensorOwner for Actor {
    fn physics_body(&self) -> Option<&dyn RigidBodyState> {
        self.body_state()
    }

    fn forward_vector(&self) -> Vector3<f64> {
        self.forward()
    }
}

/// A sensor driven by the host's per-frame callback.
///
/// Implementations must return synchronously and emit at most one
/// measurement per call.
pub trait SensorTick {
    /// Advance one host frame. `delta_time` is the elapsed time (seconds).
    fn tick(&mut self, delta_time: f64, owner: &dyn SensorOwner, sink: &mut dyn SensorSink);
}

/// Frame counter and simulation clock for a ticked sensor.
///
/// Only used to stamp outgoing measurements.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickClock {
    frame: u64,
    elapsed: f64,
}

impl TickClock {
    /// Create a clock at frame 0, time 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frame: 0,
            elapsed: 0.0,
        }
    }

    /// Frames advanced so far.
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulation time accumulated so far (seconds).
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance by one frame of `delta_time` seconds.
    ///
    /// The host guarantees `delta_time >= 0`. A negative or non-finite value
    /// still counts as a frame but does not move the clock.
    pub fn advance(&mut self, delta_time: f64) {
        self.frame += 1;
        if delta_time.is_finite() && delta_time >= 0.0 {
            self.elapsed += delta_time;
        } else {
            warn!(
                "Ignoring invalid tick delta {} at frame {}",
                delta_time, self.frame
            );
        }
    }
}
