use nalgebra::{Quaternion, Vector3};

use crate::quaternion::{compose, normalize};

/// Propagates the previous attitude by the gyro delta-angle and averages the
/// result with the IMU's own attitude estimate.
///
/// The delta quaternion `[1, delta_theta / 2]` is a first order small angle
/// approximation, only valid while `|delta_theta|` per step stays small.
pub fn merge_attitude(
    prev_attitude: &Quaternion<f64>,
    current_attitude: &Quaternion<f64>,
    delta_theta: &Vector3<f64>,
) -> Quaternion<f64> {
    let delta_q = normalize(&Quaternion::from_parts(1.0, 0.5 * delta_theta));
    let propagated = compose(&delta_q, prev_attitude);

    // componentwise mean, assumes both sit in the same hemisphere
    normalize(&((current_attitude + propagated) * 0.5))
}
