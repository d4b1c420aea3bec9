use std::f32::consts::PI;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use nalgebra::Vector3;
use rand::prelude::*;
use rand_pcg::Pcg64;
use tilt_fusion::{HistoryStore, MemoryHistoryStore, OrientationEstimator, OrientationRecorder, RawSample};

// Pre-generated sensor stream to eliminate RNG overhead during benchmarks
struct PreGeneratedData {
    samples: Vec<RawSample>,
    index: usize,
}

impl PreGeneratedData {
    fn new(count: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut samples = Vec::with_capacity(count);

        for i in 0..count {
            let time = i as f32 * 0.02; // 50Hz sample rate
            let timestamp_nanos = 1_000_000_000 + (i as i64) * 20_000_000;
            let motion_phase = time * 0.5 * 2.0 * PI;

            // Alternate accelerometer and gyroscope events the way a phone
            // delivers them
            let sample = if i % 2 == 0 {
                RawSample::accelerometer(
                    Vector3::new(
                        1.5 * motion_phase.sin() + rng.random_range(-0.05..0.05),
                        1.5 * motion_phase.cos() + rng.random_range(-0.05..0.05),
                        9.81 + rng.random_range(-0.05..0.05),
                    ),
                    timestamp_nanos,
                )
            } else {
                RawSample::gyroscope(
                    Vector3::new(
                        0.2 * motion_phase.sin() + rng.random_range(-0.01..0.01),
                        0.2 * (motion_phase * 1.3).cos() + rng.random_range(-0.01..0.01),
                        0.5 * (motion_phase * 0.7).sin() + rng.random_range(-0.01..0.01),
                    ),
                    timestamp_nanos,
                )
            };

            samples.push(sample);
        }

        Self { samples, index: 0 }
    }

    fn next(&mut self) -> RawSample {
        let sample = self.samples[self.index];
        self.index = (self.index + 1) % self.samples.len();
        sample
    }
}

fn benchmark_update(c: &mut Criterion) {
    let mut data = PreGeneratedData::new(10_000, 42);
    let mut estimator = OrientationEstimator::new();

    c.bench_function("estimator_update", |b| {
        b.iter(|| {
            let sample = data.next();
            black_box(estimator.update_at(black_box(&sample), 0).unwrap())
        })
    });
}

fn benchmark_tilt_path(c: &mut Criterion) {
    let mut estimator = OrientationEstimator::new();
    let sample = RawSample::accelerometer(Vector3::new(1.2, -0.8, 9.6), 1_000_000_000);

    c.bench_function("estimator_tilt_path", |b| {
        b.iter(|| black_box(estimator.update_at(black_box(&sample), 0).unwrap()))
    });
}

fn benchmark_yaw_path(c: &mut Criterion) {
    let mut estimator = OrientationEstimator::new();
    let mut timestamp_nanos = 1_000_000_000i64;

    c.bench_function("estimator_yaw_path", |b| {
        b.iter(|| {
            timestamp_nanos += 20_000_000;
            let sample = RawSample::gyroscope(Vector3::new(0.1, -0.1, 0.8), timestamp_nanos);
            black_box(estimator.update_at(black_box(&sample), 0).unwrap())
        })
    });
}

fn benchmark_recorder(c: &mut Criterion) {
    let mut data = PreGeneratedData::new(10_000, 7);

    c.bench_function("recorder_bounded_store", |b| {
        let mut recorder = OrientationRecorder::with_store(MemoryHistoryStore::bounded(500));
        b.iter(|| {
            let sample = data.next();
            black_box(recorder.process_at(black_box(&sample), 0).unwrap());
            black_box(recorder.store().len())
        })
    });
}

criterion_group!(
    benches,
    benchmark_update,
    benchmark_tilt_path,
    benchmark_yaw_path,
    benchmark_recorder
);
criterion_main!(benches);
