//! History recording demonstration
//!
//! Runs a synthetic motion profile through the recorder, exports the recent
//! history to CSV, and renders the historical trend of each angle as a line
//! chart, one panel per angle.
//!
//! Run with: `cargo run --example history_charts`

use std::error::Error;
use std::f32::consts::PI;

use nalgebra::Vector3;
use plotters::prelude::*;
use tilt_fusion::{
    HistoryStore, OrientationRecord, OrientationRecorder, RECENT_HISTORY_LIMIT, RawSample,
};

const SAMPLE_PERIOD_NANOS: i64 = 20_000_000; // 50 Hz
const SAMPLE_COUNT: usize = 1_200;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let mut recorder = OrientationRecorder::new();
    let mut sensor_clock = 1_000_000_000i64;
    let mut wall_clock = 1_700_000_000_000i64;

    println!("Processing {SAMPLE_COUNT} synthetic sensor samples...");

    for i in 0..SAMPLE_COUNT {
        let time = i as f32 * 0.02;
        let sway = time * 0.4 * 2.0 * PI;

        // Alternate tilt and rotation events the way a phone delivers them
        let sample = if i % 2 == 0 {
            RawSample::accelerometer(
                Vector3::new(2.0 * sway.sin(), 1.5 * (sway * 0.7).cos(), 9.5),
                sensor_clock,
            )
        } else {
            RawSample::gyroscope(
                Vector3::new(0.0, 0.0, 0.6 * (time * 0.25 * 2.0 * PI).sin()),
                sensor_clock,
            )
        };

        recorder
            .process_at(&sample, wall_clock)
            .expect("finite synthetic sample");
        wall_clock += 20;
        sensor_clock += SAMPLE_PERIOD_NANOS;
    }

    let final_orientation = recorder.estimator().state();
    println!(
        "Final orientation: roll={:.2}, pitch={:.2}, yaw={:.2}",
        final_orientation.roll(),
        final_orientation.pitch(),
        final_orientation.yaw()
    );

    // Chronological order for export and plotting
    let mut records = recorder.store().recent(RECENT_HISTORY_LIMIT);
    records.reverse();

    export_csv(&records)?;
    println!("✓ Recent history exported to orientation_history.csv");

    create_history_charts(&records)?;
    println!("✓ History charts saved to history_charts.png");

    Ok(())
}

/// Writes the history to CSV with one row per record.
fn export_csv(records: &[OrientationRecord]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path("orientation_history.csv")?;
    writer.write_record(["timestamp", "roll", "pitch", "yaw"])?;

    for record in records {
        writer.write_record([
            record.timestamp_millis.to_string(),
            record.roll.to_string(),
            record.pitch.to_string(),
            record.yaw.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders one line-chart panel per angle, stacked vertically.
fn create_history_charts(records: &[OrientationRecord]) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new("history_charts.png", (1000, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((3, 1));

    draw_angle_panel(&panels[0], records, "Roll", |r| r.roll, -180.0..180.0, RED)?;
    draw_angle_panel(&panels[1], records, "Pitch", |r| r.pitch, -180.0..180.0, GREEN)?;
    draw_angle_panel(&panels[2], records, "Yaw", |r| r.yaw, 0.0..360.0, BLUE)?;

    root.present()?;
    Ok(())
}

/// Draws a single angle series against sample index.
fn draw_angle_panel(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    records: &[OrientationRecord],
    label: &str,
    value: fn(&OrientationRecord) -> f32,
    y_range: std::ops::Range<f32>,
    color: RGBColor,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(label, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0f32..records.len() as f32, y_range)?;

    chart.configure_mesh().y_desc("Degrees").draw()?;

    chart
        .draw_series(LineSeries::new(
            records
                .iter()
                .enumerate()
                .map(|(index, record)| (index as f32, value(record))),
            &color,
        ))?
        .label(label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], color));

    chart.configure_series_labels().draw()?;
    Ok(())
}
