//! Couples the estimator with a history store
//!
//! Display and persistence consume the same snapshot: each processed sample
//! updates the filter once, and the record appended to the store is exactly
//! the [`OrientationSample`](crate::OrientationSample) returned to the
//! caller. Keeping both outputs behind one entry point makes it impossible
//! for the live view and the history to disagree about what was estimated.

use crate::error::InvalidSample;
use crate::estimator::OrientationEstimator;
use crate::history::{HistoryStore, MemoryHistoryStore};
use crate::types::{OrientationSample, RawSample};

/// Drives one estimator and appends every emitted snapshot to a store.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use tilt_fusion::{HistoryStore, OrientationRecorder, RawSample};
///
/// let mut recorder = OrientationRecorder::new();
/// let level = RawSample::accelerometer(Vector3::new(0.0, 0.0, 9.81), 0);
///
/// let orientation = recorder.process(&level).unwrap();
/// let history = recorder.store().all();
/// assert_eq!(history[0].roll, orientation.roll);
/// ```
#[derive(Debug, Default)]
pub struct OrientationRecorder<S: HistoryStore = MemoryHistoryStore> {
    estimator: OrientationEstimator,
    store: S,
}

impl OrientationRecorder<MemoryHistoryStore> {
    /// Creates a recorder backed by an unbounded in-memory store.
    pub fn new() -> Self {
        Self::with_store(MemoryHistoryStore::new())
    }
}

impl<S: HistoryStore> OrientationRecorder<S> {
    /// Creates a recorder over a caller-supplied store.
    pub fn with_store(store: S) -> Self {
        Self {
            estimator: OrientationEstimator::new(),
            store,
        }
    }

    /// Processes one raw sample: updates the filter, appends the resulting
    /// snapshot to the store, and returns the same snapshot for display.
    ///
    /// A rejected sample neither mutates the filter nor appends a record.
    pub fn process(&mut self, sample: &RawSample) -> Result<OrientationSample, InvalidSample> {
        let orientation = self.estimator.update(sample)?;
        self.store.insert(&orientation);
        Ok(orientation)
    }

    /// Like [`process`](Self::process), with a caller-supplied wall-clock
    /// stamp for deterministic tests and log replay.
    pub fn process_at(
        &mut self,
        sample: &RawSample,
        wall_clock_millis: i64,
    ) -> Result<OrientationSample, InvalidSample> {
        let orientation = self.estimator.update_at(sample, wall_clock_millis)?;
        self.store.insert(&orientation);
        Ok(orientation)
    }

    /// The underlying estimator.
    pub fn estimator(&self) -> &OrientationEstimator {
        &self.estimator
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the recorder, handing the store back to the caller.
    pub fn into_store(self) -> S {
        self.store
    }
}
