//! Core sample types for the tilt-fusion library

use nalgebra::Vector3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InvalidSample;

/// Kind of sensor that produced a raw sample.
///
/// The filter consumes exactly these two sources: the accelerometer drives
/// the tilt path (roll/pitch) and the gyroscope drives the yaw-integration
/// path. The two paths are orthogonal and never blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorKind {
    /// Accelerometer reading in m/s^2 (includes gravity)
    Accelerometer,
    /// Gyroscope reading in rad/s
    Gyroscope,
}

/// A raw sensor event as delivered by the platform sensor source.
///
/// # Units
///
/// - Accelerometer: meters per second squared (m/s^2)
/// - Gyroscope: radians per second (rad/s)
/// - `timestamp_nanos`: monotonically increasing sensor clock in nanoseconds.
///   This is not wall-clock time; the two clocks must not be conflated.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use tilt_fusion::{RawSample, SensorKind};
///
/// let sample = RawSample::accelerometer(Vector3::new(0.0, 0.0, 9.81), 1_000_000);
/// assert_eq!(sample.kind, SensorKind::Accelerometer);
/// assert!(sample.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawSample {
    /// Which sensor produced this sample
    pub kind: SensorKind,
    /// 3-component reading: `[x, y, z]`
    pub values: Vector3<f32>,
    /// Sensor clock capture time in nanoseconds
    pub timestamp_nanos: i64,
}

impl RawSample {
    /// Creates a raw sample of the given kind.
    pub fn new(kind: SensorKind, values: Vector3<f32>, timestamp_nanos: i64) -> Self {
        Self {
            kind,
            values,
            timestamp_nanos,
        }
    }

    /// Creates an accelerometer sample (m/s^2).
    pub fn accelerometer(values: Vector3<f32>, timestamp_nanos: i64) -> Self {
        Self::new(SensorKind::Accelerometer, values, timestamp_nanos)
    }

    /// Creates a gyroscope sample (rad/s).
    pub fn gyroscope(values: Vector3<f32>, timestamp_nanos: i64) -> Self {
        Self::new(SensorKind::Gyroscope, values, timestamp_nanos)
    }

    /// Checks that every component is finite.
    ///
    /// A sample carrying `NaN` or an infinity is rejected here, before the
    /// filter touches any state, so a malformed input can never leave the
    /// estimator partially updated.
    pub fn validate(&self) -> Result<(), InvalidSample> {
        if self.values.iter().all(|component| component.is_finite()) {
            Ok(())
        } else {
            Err(InvalidSample {
                kind: self.kind,
                values: [self.values.x, self.values.y, self.values.z],
                timestamp_nanos: self.timestamp_nanos,
            })
        }
    }
}

/// An immutable orientation snapshot emitted by one `update()` call.
///
/// Carries the post-update roll/pitch/yaw in degrees, stamped with the
/// wall-clock time of the call. For an accelerometer event roll/pitch are
/// fresh and yaw is carried over; for a gyroscope event yaw is fresh and
/// roll/pitch are carried over. Ownership transfers to the caller; the
/// estimator keeps no reference back to emitted samples.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientationSample {
    /// Wall-clock capture time at emission, in milliseconds since the epoch
    pub timestamp_millis: i64,
    /// Rotation about the longitudinal axis, degrees
    pub roll: f32,
    /// Rotation about the lateral axis, degrees
    pub pitch: f32,
    /// Rotation about the vertical axis, degrees, always in `[0, 360)`
    pub yaw: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_finite_samples() {
        let sample = RawSample::gyroscope(Vector3::new(0.1, -0.2, 0.3), 42);
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_non_finite_component() {
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            for axis in 0..3 {
                let mut values = Vector3::new(0.0, 0.0, 9.81);
                values[axis] = bad;
                let sample = RawSample::accelerometer(values, 7);
                let err = sample.validate().unwrap_err();
                assert_eq!(err.kind, SensorKind::Accelerometer);
                assert_eq!(err.timestamp_nanos, 7);
            }
        }
    }
}
