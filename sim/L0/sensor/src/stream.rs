//! Output side of a sensor: the data stream sink.
//!
//! The transport that carries readings to a client is owned by the host. A
//! sensor only sees the [`SensorSink`] entry point, which takes the data plus
//! a [`SensorOrigin`] identifying who sent it.

use crate::{SensorData, SensorId, SensorReading, SensorType};

/// Identity of the sensor emitting a measurement, for downstream addressing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorOrigin<'a> {
    /// Emitting sensor.
    pub sensor_id: SensorId,
    /// Emitting sensor type.
    pub sensor_type: SensorType,
    /// Optional role name of the emitting sensor.
    pub name: Option<&'a str>,
    /// Host frame number of the tick that produced the data.
    pub frame: u64,
    /// Simulation time of the tick (seconds).
    pub timestamp: f64,
}

/// Generic "send sensor data" entry point supplied by the host.
pub trait SensorSink {
    /// Hand one measurement to the stream. Called once per sensor tick.
    fn send(&mut self, origin: &SensorOrigin<'_>, data: SensorData);
}

/// Sink backed by a closure. Built with [`sink_fn`].
#[derive(Debug, Clone)]
pub struct FnSink<F>(F);

/// Wrap a closure as a [`SensorSink`].
///
/// # Example
///
/// ```
/// use sim_sensor::{sink_fn, SensorData, SensorId, SensorOrigin, SensorSink, SensorType};
/// use nalgebra::Vector3;
///
/// let mut count = 0;
/// {
///     let mut sink = sink_fn(|_origin: &SensorOrigin<'_>, _data: SensorData| count += 1);
///     let origin = SensorOrigin {
///         sensor_id: SensorId::new(1),
///         sensor_type: SensorType::Imu,
///         name: None,
///         frame: 0,
///         timestamp: 0.0,
///     };
///     let data = SensorData::Imu {
///         accelerometer: Vector3::zeros(),
///         gyroscope: Vector3::zeros(),
///         compass: 0.0,
///     };
///     sink.send(&origin, data);
/// }
/// assert_eq!(count, 1);
/// ```
pub fn sink_fn<F>(f: F) -> FnSink<F>
where
    F: FnMut(&SensorOrigin<'_>, SensorData),
{
    FnSink(f)
}

impl<F> SensorSink for FnSink<F>
where
    F: FnMut(&SensorOrigin<'_>, SensorData),
{
    fn send(&mut self, origin: &SensorOrigin<'_>, data: SensorData) {
        (self.0)(origin, data);
    }
}

/// In-memory sink that records every reading it receives.
#[derive(Debug, Clone, Default)]
pub struct BufferedSink {
    readings: Vec<SensorReading>,
}

impl BufferedSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All readings received so far, oldest first.
    #[must_use]
    pub fn readings(&self) -> &[SensorReading] {
        &self.readings
    }

    /// Most recent reading.
    #[must_use]
    pub fn latest(&self) -> Option<&SensorReading> {
        self.readings.last()
    }

    /// Number of buffered readings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether no readings are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Take every buffered reading, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<SensorReading> {
        std::mem::take(&mut self.readings)
    }
}

impl SensorSink for BufferedSink {
    fn send(&mut self, origin: &SensorOrigin<'_>, data: SensorData) {
        let mut reading = SensorReading::new(
            origin.sensor_id,
            origin.sensor_type,
            origin.frame,
            origin.timestamp,
            data,
        );
        if let Some(name) = origin.name {
            reading = reading.with_name(name);
        }
        self.readings.push(reading);
    }
}
