//! # Point-Mass Integration
//!
//! Semi-implicit Euler for a damped, actuated particle moving on two slide
//! joints.

use crate::types::Vec2;

/// Actuation and material constants of the particle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointMassParams {
    /// Integration step of a single physics sub-step, in seconds.
    pub dt: f32,
    /// Force produced per unit of control.
    pub gear: f32,
    pub mass: f32,
    /// Linear velocity damping coefficient.
    pub damping: f32,
    /// Collision radius of the particle.
    pub radius: f32,
    /// Control values are clamped into this range before actuation.
    pub ctrl_range: (f32, f32),
}

impl Default for PointMassParams {
    fn default() -> Self {
        Self {
            dt: 0.01,
            gear: 1.0,
            mass: 1.0,
            damping: 1.0,
            radius: 0.02,
            ctrl_range: (-1.0, 1.0),
        }
    }
}

/// Clamp a raw control vector into the actuator range.
#[must_use]
pub fn clamp_ctrl(ctrl: Vec2, range: (f32, f32)) -> Vec2 {
    Vec2::new(ctrl.x.clamp(range.0, range.1), ctrl.y.clamp(range.0, range.1))
}

/// Advance position and velocity by one sub-step under the given control.
pub fn integrate_point_mass(pos: &mut Vec2, vel: &mut Vec2, ctrl: Vec2, params: &PointMassParams) {
    let force = clamp_ctrl(ctrl, params.ctrl_range) * params.gear;
    let acceleration = force / params.mass - *vel * params.damping;

    *vel += acceleration * params.dt;
    *pos += *vel * params.dt;
}
