use core::ops::{Add, Div, Mul};

/// Weighted average `Σ vᵢ·wᵢ / Σ wᵢ` of same-shaped values (scalars,
/// vectors, quaternions).
///
/// Returns `None` instead of a NaN when there is nothing to average or the
/// weights sum to zero.
pub fn weighted_avg<T, const N: usize>(values: &[T; N], weights: &[f64; N]) -> Option<T>
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T> + Div<f64, Output = T>,
{
    let total_weight: f64 = weights.iter().sum();
    if total_weight == 0.0 || !total_weight.is_finite() {
        log_debug!("weighted average with total weight {}", total_weight);
        return None;
    }

    values
        .iter()
        .zip(weights.iter())
        .map(|(value, weight)| *value * *weight)
        .reduce(|acc, weighted| acc + weighted)
        .map(|sum| sum / total_weight)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Quaternion, Vector3};

    #[test]
    fn equal_weights_scalar() {
        assert_eq!(weighted_avg(&[2.0, 4.0], &[1.0, 1.0]), Some(3.0));
        assert_eq!(weighted_avg(&[6378137.0, 6378137.0], &[1.0, 1.0]), Some(6378137.0));
    }

    #[test]
    fn unequal_weights_scalar() {
        let avg = weighted_avg(&[10.0, 20.0, 40.0], &[1.0, 2.0, 1.0]).unwrap();
        assert_relative_eq!(avg, 22.5, epsilon = 1e-12);
    }

    #[test]
    fn vectors() {
        let avg = weighted_avg(
            &[Vector3::new(1.0, 0.0, -2.0), Vector3::new(3.0, 4.0, 2.0)],
            &[1.0, 1.0],
        )
        .unwrap();
        assert_relative_eq!(avg, Vector3::new(2.0, 2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn quaternions() {
        let avg = weighted_avg(
            &[Quaternion::new(1.0, 0.0, 0.0, 0.0), Quaternion::new(0.0, 1.0, 0.0, 0.0)],
            &[3.0, 1.0],
        )
        .unwrap();
        assert_relative_eq!(avg, Quaternion::new(0.75, 0.25, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn single_value() {
        assert_eq!(weighted_avg(&[-7.5], &[2.0]), Some(-7.5));
    }

    #[test]
    fn zero_total_weight() {
        assert_eq!(weighted_avg(&[1.0, 2.0], &[0.0, 0.0]), None);
        assert_eq!(weighted_avg(&[1.0, 2.0], &[1.0, -1.0]), None);
    }

    #[test]
    fn empty() {
        let values: [f64; 0] = [];
        assert_eq!(weighted_avg(&values, &[]), None);
    }

    #[test]
    fn non_finite_weight() {
        assert_eq!(weighted_avg(&[1.0, 2.0], &[f64::INFINITY, 1.0]), None);
    }
}
