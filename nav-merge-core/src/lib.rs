// only use std when feature = "std" is enabled or during testing
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod fmt;

pub mod config;
pub mod constants;
pub mod merge;
pub mod quaternion;
pub mod state;
pub mod weighting;

pub use config::{ConfigError, MergeConfig, NegativeDtPolicy, SensorWeights};
pub use constants::PhysicalConstants;
pub use merge::{
    NavMerger, merge_accel, merge_attitude, merge_main, merge_position, merge_velocity,
};
pub use quaternion::ConjugateConvention;
pub use state::{Measurement, State};
pub use weighting::weighted_avg;

#[cfg(test)]
mod tests;
