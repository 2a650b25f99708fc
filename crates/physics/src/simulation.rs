//! # Physics Simulation Core
//!
//! This module provides the [`PhysicsBackend`] contract consumed by the task
//! layer and [`PointMassSim`], the particle simulator that implements it.

use crate::collision::{detect_bounds_contacts, detect_wall_contact, resolve_contact};
use crate::error::PhysicsError;
use crate::integrator::{integrate_point_mass, PointMassParams};
use crate::types::{Aabb, Vec2};

/// Number of generalized coordinates of the particle (x and y slide joints).
pub const NQ: usize = 2;

/// State owner and integrator driven by a task.
///
/// Joint positions are relative to [`origin`](PhysicsBackend::origin): the
/// body centre of mass is always `origin + qpos[..2]`.
pub trait PhysicsBackend: Send {
    /// Apply `action` and run `n_substeps` integration steps.
    ///
    /// # Errors
    ///
    /// Fails without mutating state when the action has the wrong size or
    /// contains non-finite values.
    fn advance(&mut self, action: &[f32], n_substeps: usize) -> Result<(), PhysicsError>;

    /// Centre of mass of the actuated body, projected onto the floor plane.
    fn com(&self) -> Vec2;

    fn qpos(&self) -> &[f32];

    fn qvel(&self) -> &[f32];

    /// Overwrite joint positions and velocities.
    ///
    /// # Errors
    ///
    /// Fails without mutating state on size mismatch or non-finite input.
    fn set_state(&mut self, qpos: &[f32], qvel: &[f32]) -> Result<(), PhysicsError>;

    fn init_qpos(&self) -> &[f32];

    fn init_qvel(&self) -> &[f32];

    /// Restore the initial pose with zero control.
    fn reset(&mut self);

    /// World position corresponding to `qpos == 0`.
    fn origin(&self) -> Vec2;

    /// Duration of one sub-step.
    fn timestep(&self) -> f32;

    fn action_size(&self) -> usize;
}

/// A single actuated particle confined to a rectangular room with walls.
#[derive(Clone, Debug)]
pub struct PointMassSim {
    pub params: PointMassParams,
    origin: Vec2,
    bounds: Aabb,
    walls: Vec<Aabb>,
    qpos: Vec<f32>,
    qvel: Vec<f32>,
    init_qpos: Vec<f32>,
    init_qvel: Vec<f32>,
    ctrl: Vec2,
}

impl PointMassSim {
    /// Create a simulator whose particle starts at `origin` with zero velocity.
    #[must_use]
    pub fn new(origin: Vec2, bounds: Aabb, walls: Vec<Aabb>) -> Self {
        Self::with_params(origin, bounds, walls, PointMassParams::default())
    }

    #[must_use]
    pub fn with_params(origin: Vec2, bounds: Aabb, walls: Vec<Aabb>, params: PointMassParams) -> Self {
        let init_qpos = vec![0.0; NQ];
        let init_qvel = vec![0.0; NQ];
        Self {
            params,
            origin,
            bounds,
            walls,
            qpos: init_qpos.clone(),
            qvel: init_qvel.clone(),
            init_qpos,
            init_qvel,
            ctrl: Vec2::ZERO,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    #[must_use]
    pub fn walls(&self) -> &[Aabb] {
        &self.walls
    }

    /// Last control applied by [`advance`](PhysicsBackend::advance).
    #[must_use]
    pub fn ctrl(&self) -> Vec2 {
        self.ctrl
    }

    fn position(&self) -> Vec2 {
        self.origin + Vec2::new(self.qpos[0], self.qpos[1])
    }

    fn velocity(&self) -> Vec2 {
        Vec2::new(self.qvel[0], self.qvel[1])
    }

    fn step_cpu(&mut self) {
        let mut pos = self.position();
        let mut vel = self.velocity();

        integrate_point_mass(&mut pos, &mut vel, self.ctrl, &self.params);

        let radius = self.params.radius;
        for wall in &self.walls {
            if let Some(contact) = detect_wall_contact(pos, radius, wall, &self.bounds) {
                resolve_contact(&mut pos, &mut vel, &contact);
            }
        }
        // the boundary goes last so no push-out can leave the room
        for contact in detect_bounds_contacts(pos, radius, &self.bounds) {
            resolve_contact(&mut pos, &mut vel, &contact);
        }

        let rel = pos - self.origin;
        self.qpos[0] = rel.x;
        self.qpos[1] = rel.y;
        self.qvel[0] = vel.x;
        self.qvel[1] = vel.y;
    }
}

impl PhysicsBackend for PointMassSim {
    fn advance(&mut self, action: &[f32], n_substeps: usize) -> Result<(), PhysicsError> {
        if action.len() != NQ {
            return Err(PhysicsError::ActionSize { expected: NQ, got: action.len() });
        }
        if action.iter().any(|a| !a.is_finite()) {
            return Err(PhysicsError::NonFinite("action"));
        }

        self.ctrl = Vec2::new(action[0], action[1]);
        for _ in 0..n_substeps {
            self.step_cpu();
        }
        tracing::trace!(n_substeps, com = ?self.com(), "advanced point mass");
        Ok(())
    }

    fn com(&self) -> Vec2 {
        self.position()
    }

    fn qpos(&self) -> &[f32] {
        &self.qpos
    }

    fn qvel(&self) -> &[f32] {
        &self.qvel
    }

    fn set_state(&mut self, qpos: &[f32], qvel: &[f32]) -> Result<(), PhysicsError> {
        if qpos.len() != NQ {
            return Err(PhysicsError::StateSize { expected: NQ, got: qpos.len() });
        }
        if qvel.len() != NQ {
            return Err(PhysicsError::StateSize { expected: NQ, got: qvel.len() });
        }
        if qpos.iter().chain(qvel).any(|v| !v.is_finite()) {
            return Err(PhysicsError::NonFinite("state"));
        }
        self.qpos.copy_from_slice(qpos);
        self.qvel.copy_from_slice(qvel);
        Ok(())
    }

    fn init_qpos(&self) -> &[f32] {
        &self.init_qpos
    }

    fn init_qvel(&self) -> &[f32] {
        &self.init_qvel
    }

    fn reset(&mut self) {
        self.qpos.copy_from_slice(&self.init_qpos);
        self.qvel.copy_from_slice(&self.init_qvel);
        self.ctrl = Vec2::ZERO;
    }

    fn origin(&self) -> Vec2 {
        self.origin
    }

    fn timestep(&self) -> f32 {
        self.params.dt
    }

    fn action_size(&self) -> usize {
        NQ
    }
}
