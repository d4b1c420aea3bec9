//! Angle constants and helpers shared by the tilt and yaw-integration paths

/// Mathematical constants
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Sensor clock tick to seconds conversion factor
pub const NANOS_TO_SECONDS: f32 = 1.0 / 1_000_000_000.0;

/// Wraps a yaw angle into `[0, 360)`.
///
/// Uses floored-modulo semantics, so negative inputs wrap upward:
/// `-10` becomes `350`, not `-10`.
///
/// # Example
/// ```
/// use tilt_fusion::normalize_yaw;
///
/// assert_eq!(normalize_yaw(370.0), 10.0);
/// assert_eq!(normalize_yaw(-10.0), 350.0);
/// assert_eq!(normalize_yaw(0.0), 0.0);
/// ```
pub fn normalize_yaw(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the modulus itself for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
