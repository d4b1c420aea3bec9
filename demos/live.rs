use nalgebra::Vector3;
use tilt_fusion::{OrientationEstimator, RawSample};

const SAMPLE_PERIOD_NANOS: i64 = 20_000_000; // 50 Hz

fn main() {
    let mut estimator = OrientationEstimator::new();
    let mut timestamp_nanos = 1_000_000_000;

    for i in 0..20 {
        // this loop should repeat each time a new sensor event is delivered
        let accelerometer = Vector3::new(0.0, 0.0, 9.81); // replace this with actual accelerometer data in m/s^2
        let gyroscope = Vector3::new(0.0, 0.0, 0.35); // replace this with actual gyroscope data in rad/s

        let sample = if i % 2 == 0 {
            RawSample::accelerometer(accelerometer, timestamp_nanos)
        } else {
            RawSample::gyroscope(gyroscope, timestamp_nanos)
        };

        let orientation = estimator.update(&sample).expect("finite sensor sample");

        println!(
            "Roll: {:.2}, Pitch: {:.2}, Yaw: {:.2}",
            orientation.roll, orientation.pitch, orientation.yaw
        );

        timestamp_nanos += SAMPLE_PERIOD_NANOS;
    }
}
