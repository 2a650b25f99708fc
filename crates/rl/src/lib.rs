#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Goal-Conditioned Point-Mass Task
//!
//! A particle in a room must reach a goal drawn at the start of each episode.
//! This crate layers the goal-conditioned logic on top of [`physics`] and
//! [`rooms`]:
//!
//! -   [`GoalSampler`] draws goals from the room's reachable positions.
//! -   [`RewardEngine`] scores (achieved, desired) pairs: shaping potential,
//!     binary base reward, and the batched trained-on reward.
//! -   [`SuccessEvaluator`] thresholds the distance and reports diagnostics.
//! -   [`PointMassTask`] orchestrates one decision step and implements [`Env`].
//! -   [`TimeLimit`] caps episode length; [`diagnostics()`] aggregates paths.
//!
//! ```rust
//! use rl::{Env, PointMassTask, TaskConfig};
//!
//! let config = TaskConfig { seed: Some(0), ..TaskConfig::default() };
//! let mut task = PointMassTask::new(config)?;
//! let obs = task.reset()?;
//! let step = task.step(&[0.5, -0.5])?;
//! assert!(!step.done);
//! assert_eq!(obs.desired_goal, step.observation.desired_goal);
//! # Ok::<(), rl::TaskError>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod env;
pub mod error;
pub mod goal;
pub mod pointmass;
pub mod reward;
pub mod success;
pub mod time_limit;

pub use config::{parse_room_type, BaseRewardSign, FrameSkip, PotentialType, RewardType, TaskConfig};
pub use diagnostics::{diagnostics, final_success_rate, Diagnostics};
pub use env::{Env, Transition};
pub use error::TaskError;
pub use goal::GoalSampler;
pub use pointmass::{GoalObservation, PointMassTask, StepInfo};
pub use reward::{Reward, RewardBatch, RewardEngine, BASE_REWARD_RADIUS};
pub use success::{Evaluation, SuccessEvaluator};
pub use time_limit::TimeLimit;
