use crate::error::TaskError;
use crate::reward::Reward;

/// Result of a single [`Env::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<O, I> {
    pub observation: O,
    pub reward: Reward,
    /// Episode termination. Goal-reaching tasks leave this to wrappers such
    /// as [`TimeLimit`](crate::TimeLimit).
    pub done: bool,
    pub info: I,
}

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one action and returns the new observation, a reward signal,
/// whether the episode has terminated, and per-step diagnostics.
///
/// [`step`]: Env::step
pub trait Env {
    type Observation;
    type Info;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Implementation specific; no state is changed when an error is
    /// returned before the simulation advances.
    fn step(&mut self, action: &[f32]) -> Result<Transition<Self::Observation, Self::Info>, TaskError>;

    /// Reset the environment to its starting state and return the initial
    /// observation.
    ///
    /// # Errors
    ///
    /// Implementation specific.
    fn reset(&mut self) -> Result<Self::Observation, TaskError>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action space.
    fn action_size(&self) -> usize;
}
