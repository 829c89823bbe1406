use nalgebra::{Quaternion, Vector3};

use crate::{
    constants::PhysicalConstants,
    quaternion::{ConjugateConvention, transform_vector_with},
};

/// Inverse-square gravity toward the origin, `-G_E * r / |r|^3`.
/// `None` at or near the origin where the model is singular, i.e. whenever
/// `|r|^3` or the result is not a usable finite number.
pub fn gravity_acceleration(
    constants: &PhysicalConstants,
    position: &Vector3<f64>,
) -> Option<Vector3<f64>> {
    let r = position.norm();
    let r3 = r * r * r;
    if r3 == 0.0 || !r3.is_finite() {
        return None;
    }

    let gravity = position * (-constants.g_e) / r3;
    if gravity.iter().all(|a| a.is_finite()) {
        Some(gravity)
    } else {
        None
    }
}

/// Merges the IMU's conservative acceleration (includes gravity) with one
/// calculated from the non-conservative reading plus the gravity model at
/// the previous position. Result is in the inertial frame.
///
/// Both readings are rotated body -> inertial by `q_body_to_inert`. At the
/// origin the gravity model is undefined and `accel_c` is returned as given.
pub fn merge_accel(
    constants: &PhysicalConstants,
    convention: ConjugateConvention,
    prev_position: &Vector3<f64>,
    accel_nc: &Vector3<f64>,
    accel_c: &Vector3<f64>,
    q_body_to_inert: &Quaternion<f64>,
) -> Vector3<f64> {
    let Some(gravity) = gravity_acceleration(constants, prev_position) else {
        log_warn!("previous position at or near origin, using measured conservative acceleration");
        return *accel_c;
    };

    let accel_nc_inertial = transform_vector_with(convention, q_body_to_inert, accel_nc);
    let accel_c_inertial = transform_vector_with(convention, q_body_to_inert, accel_c);

    let calculated = accel_nc_inertial + gravity;
    0.5 * (accel_c_inertial + calculated)
}
