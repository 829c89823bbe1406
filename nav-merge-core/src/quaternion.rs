//! Scalar-first, transform-style, right-handed quaternions following
//! Malcolm Shuster's conventions.
//!
//! nalgebra's [`Quaternion`] stores its coordinates as `[i, j, k, w]`, so
//! everything that cares about component order goes through
//! [`to_scalar_first`] / [`from_scalar_first`]. The product here is *not*
//! nalgebra's `*` (Hamilton): `compose(q1, q2)` equals Hamilton `q2 * q1`,
//! meaning "apply `q2`, then `q1`".

use nalgebra::{Quaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Which conjugate the vector transform and the merge engine use.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConjugateConvention {
    /// `[s, -v1, -v2, -v3]`, the inverse of a unit quaternion.
    #[default]
    ScalarFirst,
    /// `[q3, -q0, -q1, -q2]` of the scalar-first array, see [`conjugate_legacy`].
    Legacy,
}

/// `[s, v1, v2, v3]`
pub fn to_scalar_first(q: &Quaternion<f64>) -> [f64; 4] {
    [q.w, q.i, q.j, q.k]
}

/// builds a quaternion from `[s, v1, v2, v3]`
pub fn from_scalar_first(q: [f64; 4]) -> Quaternion<f64> {
    Quaternion::new(q[0], q[1], q[2], q[3])
}

/// Compose two quaternions, `q1 ∘ q2` is the rotation `q2` followed by `q1`.
///
/// The dot and cross operand order is part of the convention, keep it.
pub fn compose(q1: &Quaternion<f64>, q2: &Quaternion<f64>) -> Quaternion<f64> {
    let q1s = q1.scalar();
    let q1v = q1.imag();
    let q2s = q2.scalar();
    let q2v = q2.imag();

    let s = q1s * q2s - q2v.dot(&q1v);
    let v = q2v * q1s + q1v * q2s - q1v.cross(&q2v);

    Quaternion::from_parts(s, v)
}

/// Divide by the 4-norm. A zero quaternion stays zero instead of turning
/// into NaN; callers downstream have to tolerate it.
pub fn normalize(q: &Quaternion<f64>) -> Quaternion<f64> {
    let norm = q.norm();
    if norm != 0.0 {
        *q / norm
    } else {
        log_debug!("normalizing a zero quaternion, returning zero");
        Quaternion::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Scalar-first conjugate, equal to the inverse for unit quaternions.
pub fn conjugate(q: &Quaternion<f64>) -> Quaternion<f64> {
    Quaternion::from_parts(q.scalar(), -q.imag())
}

/// Conjugate with the inherited index layout: the scalar is read from index
/// 3 and the vector from indices 0..3, as if the input were `[v1, v2, v3, s]`.
///
/// WARNING: this does NOT agree with the scalar-first layout used by every
/// other function in this module. For a scalar-first unit quaternion it is
/// not an inverse (the identity maps to `[0, -1, 0, 0]`). It is kept bit for
/// bit so logs produced by pipelines built on it can be reproduced; select it
/// through [`ConjugateConvention::Legacy`].
pub fn conjugate_legacy(q: &Quaternion<f64>) -> Quaternion<f64> {
    let a = to_scalar_first(q);
    from_scalar_first([a[3], -a[0], -a[1], -a[2]])
}

pub fn conjugate_with(convention: ConjugateConvention, q: &Quaternion<f64>) -> Quaternion<f64> {
    match convention {
        ConjugateConvention::ScalarFirst => conjugate(q),
        ConjugateConvention::Legacy => conjugate_legacy(q),
    }
}

/// Transform a vector's frame: `q ∘ [0, v] ∘ q*`, vector part.
pub fn transform_vector(q: &Quaternion<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    transform_vector_with(ConjugateConvention::ScalarFirst, q, v)
}

pub fn transform_vector_with(
    convention: ConjugateConvention,
    q: &Quaternion<f64>,
    v: &Vector3<f64>,
) -> Vector3<f64> {
    let v_quat = Quaternion::from_parts(0.0, *v);
    let transformed = compose(q, &compose(&v_quat, &conjugate_with(convention, q)));
    transformed.imag()
}
