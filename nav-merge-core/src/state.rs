use nalgebra::{Quaternion, Vector3};

/// Estimated kinematic state of the vehicle at one instant, inertial frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// s
    pub time: f64,
    /// m
    pub position: Vector3<f64>,
    /// m/s
    pub velocity: Vector3<f64>,
    /// inertial to body, scalar first
    pub attitude: Quaternion<f64>,
}

impl State {
    pub fn new(
        time: f64,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: Quaternion<f64>,
    ) -> Self {
        Self {
            time,
            position,
            velocity,
            attitude,
        }
    }

    /// At rest at `position`, body frame aligned with the inertial frame.
    pub fn at_rest(time: f64, position: Vector3<f64>) -> Self {
        Self::new(
            time,
            position,
            Vector3::zeros(),
            Quaternion::new(1.0, 0.0, 0.0, 0.0),
        )
    }
}

/// One batch of raw sensor readings, consumed by exactly one merge step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// s
    pub time: f64,
    /// barometric altitude, m
    pub altitude: f64,
    /// GPS position, m
    pub gps: Vector3<f64>,
    /// gyro, rad/s, body frame
    pub angular_velocity: Vector3<f64>,
    /// specific force (excludes gravity), m/s^2, body frame
    pub accel_nc: Vector3<f64>,
    /// gravity inclusive acceleration, m/s^2, body frame
    pub accel_c: Vector3<f64>,
    /// attitude reported by the IMU, scalar first
    pub q_inert_to_body: Quaternion<f64>,
}

impl Measurement {
    /// rotation increment over `dt` seconds, rad
    pub fn delta_theta(&self, dt: f64) -> Vector3<f64> {
        self.angular_velocity * dt
    }
}
