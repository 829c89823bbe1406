mod accel;
mod attitude;
mod position;
mod velocity;

pub use accel::{gravity_acceleration, merge_accel};
pub use attitude::merge_attitude;
pub use position::merge_position;
pub use velocity::merge_velocity;

use crate::{
    config::{ConfigError, MergeConfig, NegativeDtPolicy},
    quaternion::conjugate_with,
    state::{Measurement, State},
};

/// Seconds between the previous state and the measurement, after applying
/// the configured policy for stale or duplicate timestamps.
pub fn time_step(policy: NegativeDtPolicy, prev_time: f64, measurement_time: f64) -> f64 {
    let dt = measurement_time - prev_time;
    if dt >= 0.0 {
        return dt;
    }

    match policy {
        NegativeDtPolicy::Propagate if !dt.is_nan() => {
            log_debug!("propagating backwards, dt = {}", dt);
            dt
        }
        _ => {
            log_warn!(
                "measurement at {} is older than state at {}, not propagating",
                measurement_time,
                prev_time
            );
            0.0
        }
    }
}

/// Propagates `prev_state` to the time of `measurement`.
///
/// Acceleration is merged first since position and velocity integrate it;
/// attitude only depends on the gyro and the IMU attitude.
pub fn merge_main(config: &MergeConfig, prev_state: &State, measurement: &Measurement) -> State {
    let dt = time_step(config.negative_dt_policy, prev_state.time, measurement.time);
    let delta_theta = measurement.delta_theta(dt);

    // the IMU reports inertial -> body, the accelerometer readings need body -> inertial
    let q_body_to_inert = conjugate_with(config.conjugate_convention, &measurement.q_inert_to_body);
    let accel_merged = merge_accel(
        &config.constants,
        config.conjugate_convention,
        &prev_state.position,
        &measurement.accel_nc,
        &measurement.accel_c,
        &q_body_to_inert,
    );

    let new_state = State {
        time: prev_state.time + dt,
        position: merge_position(
            &prev_state.position,
            &prev_state.velocity,
            dt,
            &accel_merged,
            &measurement.gps,
            measurement.altitude,
            &config.weights,
        ),
        velocity: merge_velocity(&prev_state.velocity, dt, &accel_merged),
        attitude: merge_attitude(
            &prev_state.attitude,
            &measurement.q_inert_to_body,
            &delta_theta,
        ),
    };

    log_trace!(
        "[{}] dt = {}, |a| = {}, |v| = {}",
        new_state.time,
        dt,
        accel_merged.norm(),
        new_state.velocity.norm()
    );

    new_state
}

/// Chains merge steps: each update consumes one measurement and replaces the
/// held state with the merged one.
#[derive(Debug, Clone)]
pub struct NavMerger {
    config: MergeConfig,
    state: State,
}

impl NavMerger {
    pub fn new(config: MergeConfig, initial_state: State) -> Result<Self, ConfigError> {
        config.validate()?;
        log_info!("nav merger starting at t = {}", initial_state.time);
        Ok(Self {
            config,
            state: initial_state,
        })
    }

    pub fn update(&mut self, measurement: &Measurement) -> &State {
        self.state = merge_main(&self.config, &self.state, measurement);
        &self.state
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Replace the held state, e.g. after an external fix.
    pub fn reset(&mut self, state: State) {
        self.state = state;
    }
}
