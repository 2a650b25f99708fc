//! Goal sampling.

use physics::Vec2;
use rooms::RoomGeometry;

use crate::error::TaskError;

/// Draws episode goals uniformly, with replacement, from a room's reachable
/// positions.
#[derive(Debug, Clone)]
pub struct GoalSampler {
    rng: fastrand::Rng,
}

impl GoalSampler {
    /// A sampler with its own generator; `None` seeds from entropy.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self { rng }
    }

    /// # Errors
    ///
    /// [`TaskError::NoReachablePositions`] when the room offers nothing to
    /// sample from.
    pub fn sample(&mut self, room: &dyn RoomGeometry) -> Result<Vec2, TaskError> {
        let positions = room.reachable_positions();
        if positions.is_empty() {
            return Err(TaskError::NoReachablePositions);
        }
        let state_goal = positions[self.rng.usize(..positions.len())];
        Ok(Self::goal_observation(state_goal))
    }

    /// Map a state-space goal into the goal representation seen by the
    /// agent. Both are raw planar coordinates for the point mass.
    #[must_use]
    pub fn goal_observation(state_goal: Vec2) -> Vec2 {
        state_goal
    }
}
