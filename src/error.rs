//! Error types for the tilt-fusion library

use thiserror::Error;

use crate::types::SensorKind;

/// A raw sample the filter refuses to apply.
///
/// Returned when a sample carries a non-finite vector component. The
/// estimator rejects the call without mutating state, so the caller can
/// decide whether to drop the sample, log it, or treat it as fatal; the
/// filter itself is never left `NaN`-poisoned.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{kind:?} sample at {timestamp_nanos}ns has non-finite components {values:?}")]
pub struct InvalidSample {
    /// Which sensor produced the rejected sample
    pub kind: SensorKind,
    /// The offending components as delivered
    pub values: [f32; 3],
    /// Sensor clock capture time of the rejected sample
    pub timestamp_nanos: i64,
}
