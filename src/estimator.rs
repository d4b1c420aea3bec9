//! Streaming orientation estimator for the tilt-fusion library

use std::time::{SystemTime, UNIX_EPOCH};

use nalgebra::Vector3;

use crate::error::InvalidSample;
use crate::math::{NANOS_TO_SECONDS, RAD_TO_DEG, normalize_yaw};
use crate::types::{OrientationSample, RawSample, SensorKind};

/// Filter memory: the current orientation angles plus the gyroscope
/// integration anchor.
///
/// `last_gyro_timestamp_nanos == 0` means no gyroscope sample has been seen
/// since construction (or since a reset); the next gyroscope sample seeds the
/// anchor without integrating, because no valid time delta exists yet.
///
/// The state is a plain `Copy` value and [`step`](OrientationState::step) is
/// a pure transition function, so sequences of updates can be tested without
/// an estimator instance or a clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationState {
    roll: f32,
    pitch: f32,
    yaw: f32,
    last_gyro_timestamp_nanos: i64,
}

impl OrientationState {
    /// Creates a fresh, unseeded state with all angles at zero.
    pub const fn new() -> Self {
        Self {
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            last_gyro_timestamp_nanos: 0,
        }
    }

    /// Rotation about the longitudinal axis, degrees.
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Rotation about the lateral axis, degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Rotation about the vertical axis, degrees, always in `[0, 360)`.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Whether a gyroscope sample has established the integration anchor.
    pub fn is_seeded(&self) -> bool {
        self.last_gyro_timestamp_nanos != 0
    }

    /// Applies one raw sample and returns the successor state.
    ///
    /// This is the whole filter as a pure function: validation first, then
    /// either the tilt path (accelerometer) or the yaw-integration path
    /// (gyroscope). A rejected sample yields an error and no successor, so
    /// the caller's state is untouched.
    pub fn step(mut self, sample: &RawSample) -> Result<Self, InvalidSample> {
        sample.validate()?;
        match sample.kind {
            SensorKind::Accelerometer => self.apply_tilt(sample.values),
            SensorKind::Gyroscope => self.integrate_yaw(sample.values, sample.timestamp_nanos),
        }
        Ok(self)
    }

    /// Replaces roll and pitch with the instantaneous tilt estimate derived
    /// from the gravity direction. No smoothing, no memory: delivering the
    /// same reading twice yields the same angles twice. Yaw is untouched.
    fn apply_tilt(&mut self, values: Vector3<f32>) {
        let (x, y, z) = (values.x, values.y, values.z);
        self.pitch = y.atan2(z).to_degrees();
        self.roll = (-x).atan2((y * y + z * z).sqrt()).to_degrees();
    }

    /// Integrates the Z-axis angular velocity into yaw over the elapsed
    /// sensor time. X/Y angular velocities are deliberately not fused into
    /// roll/pitch; the tilt path alone owns those angles.
    fn integrate_yaw(&mut self, values: Vector3<f32>, timestamp_nanos: i64) {
        if self.last_gyro_timestamp_nanos == 0 {
            // Seed step: establish the anchor, emit zero rotation. Without
            // this guard the first dt would span from the epoch.
            self.last_gyro_timestamp_nanos = timestamp_nanos;
            tracing::debug!(timestamp_nanos, "gyroscope integration seeded");
            return;
        }

        let elapsed_nanos = timestamp_nanos - self.last_gyro_timestamp_nanos;
        self.last_gyro_timestamp_nanos = timestamp_nanos;

        if elapsed_nanos < 0 {
            // Out-of-order sensor timestamp: contribute zero rotation and
            // re-anchor so the next in-order sample integrates normally.
            tracing::warn!(
                elapsed_nanos,
                "out-of-order gyroscope timestamp, skipping integration"
            );
            return;
        }

        let dt_seconds = elapsed_nanos as f32 * NANOS_TO_SECONDS;
        let angular_velocity_z = values.z * RAD_TO_DEG;
        self.yaw = normalize_yaw(self.yaw + angular_velocity_z * dt_seconds);
    }
}

/// Streaming orientation estimator.
///
/// Owns one [`OrientationState`] and advances it one raw sample at a time.
/// Every update emits a fresh [`OrientationSample`] built from the
/// post-update state and stamped with the wall-clock time of the call -
/// deliberately distinct from the sensor clock carried by the input.
///
/// The estimator is single-writer: `update` is a synchronous, bounded-time
/// computation with no I/O, and concurrent callers must serialize access
/// externally. Dropping the estimator (or calling [`reset`](Self::reset))
/// discards all filter memory.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use tilt_fusion::{OrientationEstimator, RawSample};
///
/// let mut estimator = OrientationEstimator::new();
/// let level = RawSample::accelerometer(Vector3::new(0.0, 0.0, 9.81), 0);
/// let orientation = estimator.update(&level).unwrap();
/// assert!(orientation.pitch.abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrientationEstimator {
    state: OrientationState,
}

impl OrientationEstimator {
    /// Creates an estimator in the Uninitialized state.
    pub fn new() -> Self {
        Self {
            state: OrientationState::new(),
        }
    }

    /// Applies one raw sample and returns the post-update snapshot, stamped
    /// with the current wall-clock time.
    ///
    /// Unrecognized readings never reach this far by construction; a sample
    /// with non-finite components is rejected with [`InvalidSample`] and the
    /// state is left exactly as it was.
    pub fn update(&mut self, sample: &RawSample) -> Result<OrientationSample, InvalidSample> {
        self.update_at(sample, wall_clock_millis())
    }

    /// Applies one raw sample, stamping the snapshot with a caller-supplied
    /// wall-clock time.
    ///
    /// Useful for deterministic tests and for replaying recorded sensor logs
    /// where the original capture time is known.
    pub fn update_at(
        &mut self,
        sample: &RawSample,
        wall_clock_millis: i64,
    ) -> Result<OrientationSample, InvalidSample> {
        self.state = self.state.step(sample)?;
        Ok(OrientationSample {
            timestamp_millis: wall_clock_millis,
            roll: self.state.roll,
            pitch: self.state.pitch,
            yaw: self.state.yaw,
        })
    }

    /// Current filter state.
    pub fn state(&self) -> OrientationState {
        self.state
    }

    /// Current roll in degrees.
    pub fn roll(&self) -> f32 {
        self.state.roll
    }

    /// Current pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.state.pitch
    }

    /// Current yaw in degrees, in `[0, 360)`.
    pub fn yaw(&self) -> f32 {
        self.state.yaw
    }

    /// Discards all filter memory and re-enters the Uninitialized state.
    ///
    /// The next gyroscope sample after a reset is a seed sample again.
    pub fn reset(&mut self) {
        self.state = OrientationState::new();
    }
}

fn wall_clock_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
