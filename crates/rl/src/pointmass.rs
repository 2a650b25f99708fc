//! # Point-Mass Goal Reaching
//!
//! [`PointMassTask`] wires a [`PhysicsBackend`] and a [`Room`] around one
//! decision step:
//!
//! 1.  scale the action by the frame-skip modifier,
//! 2.  advance the physics by the speed-adjusted number of sub-steps,
//! 3.  read the particle's centre of mass as the achieved goal,
//! 4.  score it against the episode goal,
//! 5.  assemble a fresh [`StepInfo`].
//!
//! The episode goal is drawn at [`reset`](Env::reset) and stays fixed until
//! the next reset.

use physics::{PhysicsBackend, PointMassSim, Vec2};
use rooms::{Room, RoomGeometry};
use serde::Serialize;

use crate::config::{FrameSkip, TaskConfig};
use crate::env::{Env, Transition};
use crate::error::TaskError;
use crate::goal::GoalSampler;
use crate::reward::{Reward, RewardEngine};
use crate::success::SuccessEvaluator;

/// Goal-conditioned observation. For the point mass the observation, the
/// achieved goal and the state are all the particle position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalObservation {
    pub observation: [f32; 2],
    pub achieved_goal: [f32; 2],
    pub desired_goal: [f32; 2],
}

impl GoalObservation {
    fn new(position: Vec2, goal: Vec2) -> Self {
        Self {
            observation: position.to_array(),
            achieved_goal: position.to_array(),
            desired_goal: goal.to_array(),
        }
    }
}

/// Per-step diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepInfo {
    pub euclidean_distance: f32,
    pub shaped_distance: f32,
    pub position: [f32; 2],
    pub is_success: bool,
}

pub struct PointMassTask {
    config: TaskConfig,
    room: Room,
    sim: Box<dyn PhysicsBackend>,
    frame_skip: FrameSkip,
    rewards: RewardEngine,
    success: SuccessEvaluator,
    sampler: GoalSampler,
    /// `None` until the first reset.
    goal: Option<Vec2>,
    steps: usize,
}

impl PointMassTask {
    /// Build the stock room for `config.room_type` with a [`PointMassSim`]
    /// resting at the room's start position.
    ///
    /// # Errors
    ///
    /// [`TaskError::UnsupportedConfiguration`] when the config is invalid.
    pub fn new(config: TaskConfig) -> Result<Self, TaskError> {
        config.validate()?;
        let room = Room::default_for(config.room_type);
        let sim = PointMassSim::new(room.start_position(), *room.bounds(), room.walls().to_vec());
        Self::with_backend(config, room, Box::new(sim))
    }

    /// Use a caller-supplied room and physics backend.
    ///
    /// # Errors
    ///
    /// [`TaskError::UnsupportedConfiguration`] when the config is invalid.
    pub fn with_backend(
        config: TaskConfig,
        room: Room,
        sim: Box<dyn PhysicsBackend>,
    ) -> Result<Self, TaskError> {
        config.validate()?;
        let frame_skip = FrameSkip::new(config.frame_skip, config.speed)?;
        tracing::debug!(
            room = %room.room_type(),
            substeps = frame_skip.substeps,
            modifier = frame_skip.modifier,
            reward_type = %config.reward_type,
            potential_type = %config.potential_type,
            "point mass task created"
        );
        Ok(Self {
            rewards: RewardEngine::from_config(&config),
            success: SuccessEvaluator::new(config.indicator_threshold),
            sampler: GoalSampler::new(config.seed),
            frame_skip,
            config,
            room,
            sim,
            goal: None,
            steps: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    #[must_use]
    pub fn frame_skip(&self) -> FrameSkip {
        self.frame_skip
    }

    #[must_use]
    pub fn reward_engine(&self) -> &RewardEngine {
        &self.rewards
    }

    #[must_use]
    pub fn success_evaluator(&self) -> &SuccessEvaluator {
        &self.success
    }

    #[must_use]
    pub fn physics(&self) -> &dyn PhysicsBackend {
        self.sim.as_ref()
    }

    /// The goal of the running episode, `None` before the first reset.
    #[must_use]
    pub fn goal(&self) -> Option<Vec2> {
        self.goal
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.goal.is_some()
    }

    /// Decision steps taken since the last reset.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Current achieved goal: the particle's planar centre of mass.
    #[must_use]
    pub fn achieved_goal(&self) -> Vec2 {
        self.sim.com()
    }

    /// Scale an action so the rounded-up sub-step count still produces the
    /// requested speed.
    #[must_use]
    pub fn preprocess(&self, action: &[f32]) -> Vec<f32> {
        action.iter().map(|a| a * self.frame_skip.modifier).collect()
    }

    /// Draw a goal without changing the episode goal.
    ///
    /// # Errors
    ///
    /// [`TaskError::NoReachablePositions`] for a room without goals.
    pub fn sample_goal(&mut self) -> Result<Vec2, TaskError> {
        self.sampler.sample(&self.room)
    }

    /// Teleport the particle onto `goal` with zero velocity. Evaluation
    /// tooling only; the episode goal and step counter are untouched.
    ///
    /// # Errors
    ///
    /// [`GeometryError::OutOfBounds`](rooms::GeometryError::OutOfBounds)
    /// when `goal` is outside the room,
    /// [`GeometryError::InsideWall`](rooms::GeometryError::InsideWall) when
    /// it lies in a wall; physics errors from the state injection.
    pub fn set_to_goal(&mut self, goal: Vec2) -> Result<(), TaskError> {
        if !self.room.contains(goal) {
            return Err(rooms::GeometryError::OutOfBounds(goal).into());
        }
        if self.room.walls().iter().any(|wall| wall.contains(goal)) {
            return Err(rooms::GeometryError::InsideWall(goal).into());
        }
        let offset = goal - self.sim.origin();
        let mut qpos = self.sim.init_qpos().to_vec();
        let mut qvel = self.sim.init_qvel().to_vec();
        if qpos.len() < 2 || qvel.len() < 2 {
            return Err(physics::PhysicsError::StateSize { expected: 2, got: qpos.len().min(qvel.len()) }.into());
        }
        qpos[..2].copy_from_slice(&offset.to_array());
        qvel[..2].fill(0.0);
        self.sim.set_state(&qpos, &qvel)?;
        tracing::debug!(?goal, "particle moved onto goal");
        Ok(())
    }

    /// Reward and info for the post-step `position`. Runs after physics
    /// has advanced, so the caller rolls the state back on error.
    fn score(
        &self,
        position: Vec2,
        goal: Vec2,
        potential_before: Option<f32>,
    ) -> Result<(Reward, StepInfo), TaskError> {
        let mut reward = self.rewards.reward(position, goal);
        if let Some(before) = potential_before {
            let after = self.rewards.potential(&self.room, position, goal)?;
            if let Reward::Scalar(r) = &mut reward {
                *r += after - before;
            }
        }
        Ok((reward, self.info(position, goal)?))
    }

    fn info(&self, position: Vec2, goal: Vec2) -> Result<StepInfo, TaskError> {
        let eval = self.success.evaluate(&self.room, position, goal)?;
        Ok(StepInfo {
            euclidean_distance: eval.euclidean_distance,
            shaped_distance: eval.shaped_distance,
            position: position.to_array(),
            is_success: eval.is_success,
        })
    }
}

impl Env for PointMassTask {
    type Observation = GoalObservation;
    type Info = StepInfo;

    fn step(&mut self, action: &[f32]) -> Result<Transition<GoalObservation, StepInfo>, TaskError> {
        let goal = self.goal.ok_or(TaskError::NotRunning)?;
        let action = self.preprocess(action);

        let potential_before = if self.config.shaped {
            Some(self.rewards.potential(&self.room, self.sim.com(), goal)?)
        } else {
            None
        };

        let (qpos, qvel) = (self.sim.qpos().to_vec(), self.sim.qvel().to_vec());
        self.sim.advance(&action, self.frame_skip.substeps)?;

        let position = self.sim.com();
        let (reward, info) = match self.score(position, goal, potential_before) {
            Ok(scored) => scored,
            Err(err) => {
                tracing::warn!(error = %err, ?position, "step rolled back");
                self.sim.set_state(&qpos, &qvel)?;
                return Err(err);
            }
        };
        self.steps += 1;

        tracing::trace!(
            step = self.steps,
            ?position,
            reward = reward.total(),
            success = info.is_success,
            "point mass step"
        );

        Ok(Transition {
            observation: GoalObservation::new(position, goal),
            reward,
            done: false,
            info,
        })
    }

    fn reset(&mut self) -> Result<GoalObservation, TaskError> {
        let goal = self.sampler.sample(&self.room)?;
        self.sim.reset();
        self.goal = Some(goal);
        self.steps = 0;

        let position = self.sim.com();
        tracing::debug!(?goal, start = ?position, "episode reset");
        Ok(GoalObservation::new(position, goal))
    }

    fn obs_size(&self) -> usize {
        2
    }

    fn action_size(&self) -> usize {
        self.sim.action_size()
    }
}
