//! Host-loop tests for the IMU.
//!
//! Drives the sensor the way the host does: spawn from the catalog, publish
//! actor state, tick, and inspect what reached the data stream.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]

use approx::assert_relative_eq;
use nalgebra::Vector3;
use sim_sensor::{
    sink_fn, BufferedSink, Imu, ImuConfig, SensorCatalog, SensorData, SensorDescription,
    SensorId, SensorOrigin, SensorOwner, SensorTick, SensorType,
};
use sim_types::{Actor, BodyId, Point3, Pose, RigidBody, RigidBodyState, Twist};

const DT: f64 = 1.0 / 20.0;

fn spawn(id: u64, role: &str) -> Imu {
    SensorCatalog::with_builtin()
        .spawn_imu(
            &SensorDescription::new("sensor.other.imu").with_attribute("role_name", role),
            SensorId::new(id),
        )
        .unwrap()
}

fn vehicle(yaw_degrees: f64, omega: Vector3<f64>) -> Actor {
    let pose = Pose::from_yaw_degrees(Point3::new(10.0, -4.0, 0.3), yaw_degrees);
    let body = RigidBody::new(BodyId::new(1), pose, Twist::angular(omega));
    body.validate().expect("published body state is finite");
    Actor::new(pose).with_body(body)
}

fn imu_data(data: &SensorData) -> (Vector3<f64>, Vector3<f64>, f64) {
    match data {
        SensorData::Imu {
            accelerometer,
            gyroscope,
            compass,
        } => (*accelerometer, *gyroscope, *compass),
    }
}

#[test]
fn one_send_per_tick_with_increasing_frames() {
    let mut imu = spawn(5, "imu_front");
    let actor = vehicle(0.0, Vector3::new(0.0, 0.0, 10.0));
    let mut stream = BufferedSink::new();

    for _ in 0..10 {
        imu.tick(DT, &actor, &mut stream);
    }

    assert_eq!(stream.len(), 10);
    for (i, reading) in stream.readings().iter().enumerate() {
        assert_eq!(reading.sensor_id, SensorId::new(5));
        assert_eq!(reading.sensor_type, SensorType::Imu);
        assert_eq!(reading.name.as_deref(), Some("imu_front"));
        assert_eq!(reading.frame, i as u64 + 1);
        assert_relative_eq!(reading.timestamp, (i + 1) as f64 * DT, epsilon = 1e-12);
    }
    assert_eq!(imu.frame(), 10);
    assert_relative_eq!(imu.elapsed(), 0.5, epsilon = 1e-12);
}

#[test]
fn vehicle_turning_reports_rate_and_heading() {
    let mut imu = spawn(1, "imu");
    let mut stream = BufferedSink::new();
    let omega = Vector3::new(0.0, 0.0, 90.0);

    // Host publishes a new pose every frame before ticking sensors
    let yaws = [-90.0, 0.0, 90.0, 180.0];
    for yaw in yaws {
        let actor = vehicle(yaw, omega);
        imu.tick(DT, &actor, &mut stream);
    }

    let headings: Vec<f64> = stream
        .readings()
        .iter()
        .map(|r| imu_data(&r.data).2)
        .collect();

    let expected = [0.0, 270.0, 180.0, 90.0];
    for (heading, want) in headings.iter().zip(expected) {
        let diff = (heading - want).abs();
        assert!(diff < 1e-6 || (360.0 - diff) < 1e-6, "{heading} vs {want}");
    }

    for reading in stream.readings() {
        let (accel, gyro, _) = imu_data(&reading.data);
        assert_eq!(accel, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(gyro, omega);
    }
}

#[test]
fn actor_without_body_reads_zero_gyro() {
    let mut imu = spawn(2, "imu");
    let actor = Actor::new(Pose::identity());
    let mut stream = BufferedSink::new();

    imu.tick(DT, &actor, &mut stream);

    let (_, gyro, compass) = imu_data(&stream.latest().unwrap().data);
    assert_eq!(gyro, Vector3::zeros());
    assert_relative_eq!(compass, 270.0, epsilon = 1e-9);
}

#[test]
fn non_finite_body_is_detached_before_tick() {
    let mut imu = spawn(4, "imu");
    let pose = Pose::from_yaw_degrees(Point3::origin(), -90.0);
    let body = RigidBody::new(
        BodyId::new(6),
        pose,
        Twist::angular(Vector3::new(0.0, f64::NAN, 0.0)),
    );
    let err = body.validate().unwrap_err();
    assert!(err.is_non_finite());

    // Host keeps ticking the actor, but without its broken physics root
    let actor = match body.validate() {
        Ok(()) => Actor::new(pose).with_body(body),
        Err(_) => Actor::new(pose),
    };
    let mut stream = BufferedSink::new();
    imu.tick(DT, &actor, &mut stream);

    let (_, gyro, compass) = imu_data(&stream.latest().unwrap().data);
    assert_eq!(gyro, Vector3::zeros());
    assert!(compass < 1e-6 || compass > 360.0 - 1e-6);
}

#[test]
fn heading_just_west_of_north_reads_zero() {
    // Facing north with a tiny westward drift in the published forward vector
    struct Drifted(Actor);

    impl SensorOwner for Drifted {
        fn physics_body(&self) -> Option<&dyn RigidBodyState> {
            self.0.physics_body()
        }

        fn forward_vector(&self) -> Vector3<f64> {
            Vector3::new(1e-9, -1.0, 0.0)
        }
    }

    let mut imu = spawn(7, "imu");
    let mut stream = BufferedSink::new();
    imu.tick(DT, &Drifted(Actor::new(Pose::identity())), &mut stream);
    let (_, _, compass) = imu_data(&stream.latest().unwrap().data);
    assert_eq!(compass, 0.0);
}

#[test]
fn negative_delta_still_emits() {
    let mut imu = spawn(3, "imu");
    let actor = vehicle(0.0, Vector3::zeros());
    let mut stream = BufferedSink::new();

    imu.tick(DT, &actor, &mut stream);
    imu.tick(-DT, &actor, &mut stream);

    assert_eq!(stream.len(), 2);
    assert_eq!(stream.readings()[1].frame, 2);
    assert_eq!(stream.readings()[1].timestamp, DT);
}

#[test]
fn sink_sees_sensor_identity() {
    let mut imu = spawn(9, "imu_roof");
    let actor = vehicle(45.0, Vector3::zeros());
    let mut seen = Vec::new();

    {
        let mut sink = sink_fn(|origin: &SensorOrigin<'_>, data: SensorData| {
            seen.push((origin.sensor_id, origin.name.map(str::to_owned), data));
        });
        imu.tick(DT, &actor, &mut sink);
    }

    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, SensorId::new(9));
    assert_eq!(seen[0].1.as_deref(), Some("imu_roof"));
    assert!(seen[0].2.is_imu());
}

#[test]
fn pitched_straight_up_has_defined_heading() {
    let imu = Imu::new(ImuConfig::default());
    let rotation =
        nalgebra::UnitQuaternion::from_euler_angles(0.0, -std::f64::consts::FRAC_PI_2, 0.0);
    let actor = Actor::new(Pose::from_position_rotation(Point3::origin(), rotation));

    let reading = imu.read_from_owner(&actor);
    assert!(reading.compass.is_finite());
    assert!((0.0..360.0).contains(&reading.compass));
}

#[test]
fn custom_owner_capability() {
    struct Spinner;

    impl RigidBodyState for Spinner {
        fn angular_velocity(&self) -> Vector3<f64> {
            Vector3::new(1.0, 2.0, 3.0)
        }
    }

    struct Rig {
        body: Spinner,
    }

    impl SensorOwner for Rig {
        fn physics_body(&self) -> Option<&dyn RigidBodyState> {
            Some(&self.body)
        }

        fn forward_vector(&self) -> Vector3<f64> {
            Vector3::new(0.0, 1.0, 0.0)
        }
    }

    let imu = Imu::new(ImuConfig::default());
    let reading = imu.read_from_owner(&Rig { body: Spinner });

    assert_eq!(reading.gyroscope, Vector3::new(1.0, 2.0, 3.0));
    assert_relative_eq!(reading.compass, 180.0, epsilon = 1e-9);
}

#[test]
fn compass_stays_in_range_for_all_yaws() {
    let imu = Imu::new(ImuConfig::default());
    for step in 0..3600 {
        let yaw = f64::from(step) * 0.1;
        let actor = Actor::new(Pose::from_yaw_degrees(Point3::origin(), yaw));
        let compass = imu.read_from_owner(&actor).compass;
        assert!((0.0..360.0).contains(&compass), "yaw {yaw} -> {compass}");
    }
}
