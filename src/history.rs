//! Append-only history of orientation estimates
//!
//! The estimator itself performs no I/O; persistence is a collaborator
//! behind the [`HistoryStore`] trait. The contract is minimal: insert one
//! record per update, retrieve either the full history or the N most recent
//! records, both ordered by capture time descending. [`MemoryHistoryStore`]
//! is the in-process implementation; applications with durable storage
//! implement the trait over their own backend.

use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::OrientationSample;

/// Default bound for the recent-history view.
///
/// Covers a few minutes of samples at typical phone sensor rates, enough for
/// a trend chart without dragging the full history around.
pub const RECENT_HISTORY_LIMIT: usize = 500;

/// One durable orientation record.
///
/// Built from the fused [`OrientationSample`] emitted by the update that
/// produced it, never from raw sensor components, so history and live
/// display can never diverge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientationRecord {
    /// Store-assigned sequential identifier, starting at 1
    pub id: u64,
    /// Wall-clock capture time in milliseconds
    pub timestamp_millis: i64,
    /// Roll in degrees
    pub roll: f32,
    /// Pitch in degrees
    pub pitch: f32,
    /// Yaw in degrees
    pub yaw: f32,
}

/// Boundary contract toward the persistence collaborator.
pub trait HistoryStore {
    /// Appends one record built from the given snapshot.
    fn insert(&mut self, sample: &OrientationSample);

    /// Returns the full history, newest first.
    fn all(&self) -> Vec<OrientationRecord>;

    /// Returns at most `limit` of the most recent records, newest first.
    fn recent(&self, limit: usize) -> Vec<OrientationRecord>;

    /// Number of records currently held.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory history store.
///
/// Records arrive in capture order and are held in a deque; an optional
/// capacity bound evicts the oldest record on overflow, which keeps
/// long-running sessions from growing without limit.
///
/// # Example
/// ```
/// use tilt_fusion::{HistoryStore, MemoryHistoryStore, OrientationSample};
///
/// let mut store = MemoryHistoryStore::new();
/// store.insert(&OrientationSample { timestamp_millis: 100, roll: 1.0, pitch: 2.0, yaw: 3.0 });
/// store.insert(&OrientationSample { timestamp_millis: 200, roll: 4.0, pitch: 5.0, yaw: 6.0 });
///
/// let records = store.all();
/// assert_eq!(records[0].timestamp_millis, 200); // newest first
/// assert_eq!(records[1].timestamp_millis, 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    records: VecDeque<OrientationRecord>,
    capacity: Option<usize>,
    next_id: u64,
}

impl MemoryHistoryStore {
    /// Creates an unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that retains at most `capacity` records, evicting the
    /// oldest on overflow.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
            next_id: 0,
        }
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn insert(&mut self, sample: &OrientationSample) {
        self.next_id += 1;
        self.records.push_back(OrientationRecord {
            id: self.next_id,
            timestamp_millis: sample.timestamp_millis,
            roll: sample.roll,
            pitch: sample.pitch,
            yaw: sample.yaw,
        });
        if let Some(capacity) = self.capacity {
            while self.records.len() > capacity {
                self.records.pop_front();
            }
        }
    }

    fn all(&self) -> Vec<OrientationRecord> {
        self.records.iter().rev().copied().collect()
    }

    fn recent(&self, limit: usize) -> Vec<OrientationRecord> {
        self.records.iter().rev().take(limit).copied().collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
