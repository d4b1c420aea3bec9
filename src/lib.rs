//! tilt-fusion - a streaming orientation filter for phone-class IMUs
//!
//! This library maintains a running roll/pitch/yaw estimate from a stream of
//! heterogeneous sensor samples: accelerometer samples replace roll and pitch
//! with an instantaneous tilt estimate derived from the gravity vector, and
//! gyroscope samples integrate the Z-axis angular velocity into yaw over the
//! elapsed sensor time. Each update emits an immutable [`OrientationSample`]
//! snapshot suitable for both live display and durable history storage.
//!
//! # Features
//!
//! - Tilt estimation from the gravity direction, recomputed per sample
//! - Yaw tracking by gyroscope integration over variable sample intervals
//! - Yaw always normalized into `[0, 360)` with floored modulo semantics
//! - Validation that rejects non-finite samples before any state mutation
//! - [`HistoryStore`] boundary with an in-memory implementation and a
//!   recorder that derives display and history from the same update
//! - Optional `serde` support for all public data types
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use tilt_fusion::{OrientationEstimator, RawSample};
//!
//! let mut estimator = OrientationEstimator::new();
//!
//! // Sensor readings (accelerometer in m/s^2, gyroscope in rad/s)
//! let accelerometer = RawSample::accelerometer(Vector3::new(0.0, 0.0, 9.81), 1_000_000_000);
//! let gyroscope = RawSample::gyroscope(Vector3::new(0.0, 0.0, 0.1), 1_000_000_000);
//!
//! // Update the filter; each call returns a fresh orientation snapshot
//! let orientation = estimator.update(&accelerometer).unwrap();
//! assert!(orientation.roll.abs() < 1e-4);
//! assert!(orientation.pitch.abs() < 1e-4);
//!
//! // The first gyroscope sample only seeds the integration timestamp
//! let orientation = estimator.update(&gyroscope).unwrap();
//! assert_eq!(orientation.yaw, 0.0);
//! ```

mod error;
mod estimator;
pub mod history;
mod math;
mod recorder;
mod types;

// Re-export all public types and functions
pub use error::InvalidSample;
pub use estimator::{OrientationEstimator, OrientationState};
pub use history::{HistoryStore, MemoryHistoryStore, OrientationRecord, RECENT_HISTORY_LIMIT};
pub use math::{DEG_TO_RAD, NANOS_TO_SECONDS, RAD_TO_DEG, normalize_yaw};
pub use recorder::OrientationRecorder;
pub use types::{OrientationSample, RawSample, SensorKind};
