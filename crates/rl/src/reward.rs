//! # Rewards
//!
//! Three independent notions of reward for an (achieved, desired) goal pair:
//!
//! -   [`RewardEngine::potential`]: shaping potential, selected by
//!     [`PotentialType`].
//! -   [`RewardEngine::base_reward`]: binary proximity reward, selected by
//!     [`BaseRewardSign`].
//! -   [`RewardEngine::batch_reward`]: the trained-on signal over whole
//!     batches, selected by [`RewardType`].

use physics::Vec2;
use rooms::RoomGeometry;
use serde::Serialize;

use crate::config::{BaseRewardSign, PotentialType, RewardType, TaskConfig};
use crate::error::TaskError;

/// Proximity radius of the base reward. Kept separate from the configurable
/// `indicator_threshold`.
pub const BASE_REWARD_RADIUS: f32 = 0.05;

/// Reward for a single goal pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reward {
    Scalar(f32),
    /// Per-axis reward, produced by [`RewardType::VectorizedDense`].
    PerAxis([f32; 2]),
}

impl Reward {
    /// Scalar value, summing per-axis components.
    #[must_use]
    pub fn total(self) -> f32 {
        match self {
            Self::Scalar(r) => r,
            Self::PerAxis([x, y]) => x + y,
        }
    }

    #[must_use]
    pub fn as_scalar(self) -> Option<f32> {
        match self {
            Self::Scalar(r) => Some(r),
            Self::PerAxis(_) => None,
        }
    }
}

/// Rewards for a batch of goal pairs, one entry per pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RewardBatch {
    Scalar(Vec<f32>),
    PerAxis(Vec<[f32; 2]>),
}

impl RewardBatch {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(v) => v.len(),
            Self::PerAxis(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Reward> {
        match self {
            Self::Scalar(v) => v.get(index).copied().map(Reward::Scalar),
            Self::PerAxis(v) => v.get(index).copied().map(Reward::PerAxis),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardEngine {
    potential_type: PotentialType,
    base_reward: BaseRewardSign,
    reward_type: RewardType,
    indicator_threshold: f32,
}

impl RewardEngine {
    #[must_use]
    pub fn new(
        potential_type: PotentialType,
        base_reward: BaseRewardSign,
        reward_type: RewardType,
        indicator_threshold: f32,
    ) -> Self {
        Self { potential_type, base_reward, reward_type, indicator_threshold }
    }

    #[must_use]
    pub fn from_config(config: &TaskConfig) -> Self {
        Self::new(
            config.potential_type,
            config.base_reward,
            config.reward_type,
            config.indicator_threshold,
        )
    }

    #[must_use]
    pub fn potential_type(&self) -> PotentialType {
        self.potential_type
    }

    #[must_use]
    pub fn reward_type(&self) -> RewardType {
        self.reward_type
    }

    #[must_use]
    pub fn indicator_threshold(&self) -> f32 {
        self.indicator_threshold
    }

    /// Shaping potential: higher is closer to the goal.
    ///
    /// # Errors
    ///
    /// Propagates [`GeometryError`](rooms::GeometryError) from the shaped
    /// distance query.
    pub fn potential(
        &self,
        room: &dyn RoomGeometry,
        achieved: Vec2,
        desired: Vec2,
    ) -> Result<f32, TaskError> {
        Ok(match self.potential_type {
            PotentialType::Shaped => -room.shaped_distance(achieved, desired)?,
            PotentialType::Euclidean => -achieved.distance(desired),
            PotentialType::None => 0.0,
        })
    }

    /// `0` near the goal and `-1` elsewhere, shifted up by one for
    /// [`BaseRewardSign::Positive`].
    #[must_use]
    pub fn base_reward(&self, achieved: Vec2, desired: Vec2) -> f32 {
        let shift = match self.base_reward {
            BaseRewardSign::Positive => 1.0,
            BaseRewardSign::Negative => 0.0,
        };
        if achieved.distance(desired) < BASE_REWARD_RADIUS {
            shift
        } else {
            -1.0 + shift
        }
    }

    /// Reward for a single pair.
    #[must_use]
    pub fn reward(&self, achieved: Vec2, desired: Vec2) -> Reward {
        match self.reward_type {
            RewardType::Sparse => {
                let reward = if achieved.distance(desired) > self.indicator_threshold { -1.0 } else { 0.0 };
                Reward::Scalar(reward)
            }
            RewardType::Dense => Reward::Scalar(-achieved.distance(desired)),
            RewardType::VectorizedDense => Reward::PerAxis((-(achieved - desired).abs()).to_array()),
        }
    }

    /// Rewards over a batch of pairs. Leading dimensions are flattened by the
    /// caller; a side of length one is broadcast against the other.
    ///
    /// # Errors
    ///
    /// [`TaskError::BatchShape`] when the lengths differ and neither is one.
    pub fn batch_reward(&self, achieved: &[Vec2], desired: &[Vec2]) -> Result<RewardBatch, TaskError> {
        let n = match (achieved.len(), desired.len()) {
            (a, d) if a == d => a,
            (1, d) => d,
            (a, 1) => a,
            (a, d) => return Err(TaskError::BatchShape { achieved: a, desired: d }),
        };
        let pairs = (0..n).map(|i| {
            let a = achieved[if achieved.len() == 1 { 0 } else { i }];
            let d = desired[if desired.len() == 1 { 0 } else { i }];
            (a, d)
        });

        Ok(match self.reward_type {
            RewardType::VectorizedDense => {
                RewardBatch::PerAxis(pairs.map(|(a, d)| (-(a - d).abs()).to_array()).collect())
            }
            RewardType::Sparse | RewardType::Dense => {
                RewardBatch::Scalar(pairs.map(|(a, d)| self.reward(a, d).total()).collect())
            }
        })
    }
}
