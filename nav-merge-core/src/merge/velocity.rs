use nalgebra::Vector3;

/// Integrates the merged acceleration over `dt`.
///
/// There is no independent velocity sensor yet. Once an airspeed reading is
/// part of [`Measurement`](crate::Measurement) it gets blended into the
/// magnitude of `v_new` here, keeping its direction.
pub fn merge_velocity(
    prev_velocity: &Vector3<f64>,
    dt: f64,
    accel_merged: &Vector3<f64>,
) -> Vector3<f64> {
    prev_velocity + accel_merged * dt
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::tests::{random_vector, test_rng};

    #[test]
    fn zero_dt_is_identity() {
        let mut rng = test_rng();
        for _ in 0..50 {
            let v = random_vector(&mut rng, 300.0);
            let a = random_vector(&mut rng, 100.0);
            assert_eq!(merge_velocity(&v, 0.0, &a), v);
        }
    }

    #[test]
    fn integrates_acceleration() {
        let v = Vector3::new(1.0, 0.0, 0.0);
        let a = Vector3::new(0.0, 0.0, -9.81);
        assert_relative_eq!(
            merge_velocity(&v, 0.5, &a),
            Vector3::new(1.0, 0.0, -4.905),
            epsilon = 1e-12
        );
    }

    #[test]
    fn negative_dt_integrates_backwards() {
        let v = Vector3::new(0.0, 0.0, -9.81);
        let a = Vector3::new(0.0, 0.0, -9.81);
        assert_relative_eq!(merge_velocity(&v, -1.0, &a), Vector3::zeros(), epsilon = 1e-12);
    }
}
