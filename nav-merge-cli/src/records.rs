use nalgebra::Vector3;
use nav_merge_core::{
    Measurement, State,
    quaternion::{from_scalar_first, to_scalar_first},
};
use serde::{Deserialize, Serialize};

/// JSON form of [`State`], quaternion as `[s, v1, v2, v3]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    pub time: f64,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    pub attitude: [f64; 4],
}

/// JSON form of [`Measurement`], quaternion as `[s, v1, v2, v3]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub time: f64,
    pub altitude: f64,
    pub gps: [f64; 3],
    pub angular_velocity: [f64; 3],
    pub accel_nc: [f64; 3],
    pub accel_c: [f64; 3],
    pub q_inert_to_body: [f64; 4],
}

fn to_array(v: &Vector3<f64>) -> [f64; 3] {
    [v.x, v.y, v.z]
}

impl From<&State> for StateRecord {
    fn from(state: &State) -> Self {
        Self {
            time: state.time,
            position: to_array(&state.position),
            velocity: to_array(&state.velocity),
            attitude: to_scalar_first(&state.attitude),
        }
    }
}

impl From<StateRecord> for State {
    fn from(record: StateRecord) -> Self {
        State::new(
            record.time,
            Vector3::from(record.position),
            Vector3::from(record.velocity),
            from_scalar_first(record.attitude),
        )
    }
}

impl From<MeasurementRecord> for Measurement {
    fn from(record: MeasurementRecord) -> Self {
        Measurement {
            time: record.time,
            altitude: record.altitude,
            gps: Vector3::from(record.gps),
            angular_velocity: Vector3::from(record.angular_velocity),
            accel_nc: Vector3::from(record.accel_nc),
            accel_c: Vector3::from(record.accel_c),
            q_inert_to_body: from_scalar_first(record.q_inert_to_body),
        }
    }
}
