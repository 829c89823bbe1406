#[cfg(feature = "log")]
use log::LevelFilter;
use nalgebra::{Quaternion, Vector3};
use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

use crate::quaternion::normalize;


pub fn init_logger() {
    #[cfg(feature = "log")]
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .filter(Some("nav_merge_core"), LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// deterministic source of test inputs, same sequence on every run
pub fn test_rng() -> StdRng {
    StdRng::seed_from_u64(0x6e61_765f_6d65_7267)
}

pub fn random_unit_quaternion(rng: &mut StdRng) -> Quaternion<f64> {
    loop {
        let q = Quaternion::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        // reject near-zero draws, normalizing them amplifies rounding
        if q.norm() > 0.1 {
            return normalize(&q);
        }
    }
}

pub fn random_vector(rng: &mut StdRng, scale: f64) -> Vector3<f64> {
    Vector3::new(
        rng.random_range(-scale..scale),
        rng.random_range(-scale..scale),
        rng.random_range(-scale..scale),
    )
}
