use nalgebra::Vector3;

use crate::{config::SensorWeights, weighting::weighted_avg};

/// Merges the dead-reckoned position with the GPS and altimeter readings.
///
/// Dead reckoning is second order, `p + v*dt + a*dt^2/2`. The sensor estimate
/// takes GPS x/y as is and blends GPS z with the altimeter. The two estimates
/// are then averaged 50/50.
pub fn merge_position(
    prev_position: &Vector3<f64>,
    prev_velocity: &Vector3<f64>,
    dt: f64,
    accel_merged: &Vector3<f64>,
    gps: &Vector3<f64>,
    altitude: f64,
    weights: &SensorWeights,
) -> Vector3<f64> {
    let dead_reckoned = prev_position + prev_velocity * dt + 0.5 * accel_merged * (dt * dt);

    let vertical = weighted_avg(
        &[altitude, gps.z],
        &[weights.altimeter, weights.gps_vertical],
    )
    .unwrap_or_else(|| {
        log_warn!("vertical sensor weights sum to zero, using gps altitude");
        gps.z
    });
    let sensed = Vector3::new(gps.x, gps.y, vertical);

    0.5 * (dead_reckoned + sensed)
}
