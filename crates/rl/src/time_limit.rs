use crate::env::{Env, Transition};
use crate::error::TaskError;

/// Ends episodes after a fixed number of steps.
pub struct TimeLimit<E> {
    env: E,
    max_steps: usize,
    elapsed: usize,
}

impl<E: Env> TimeLimit<E> {
    #[must_use]
    pub fn new(env: E, max_steps: usize) -> Self {
        Self { env, max_steps, elapsed: 0 }
    }

    #[must_use]
    pub fn elapsed(&self) -> usize {
        self.elapsed
    }

    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    #[must_use]
    pub fn inner(&self) -> &E {
        &self.env
    }

    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    #[must_use]
    pub fn into_inner(self) -> E {
        self.env
    }
}

impl<E: Env> Env for TimeLimit<E> {
    type Observation = E::Observation;
    type Info = E::Info;

    fn step(&mut self, action: &[f32]) -> Result<Transition<Self::Observation, Self::Info>, TaskError> {
        let mut transition = self.env.step(action)?;
        self.elapsed += 1;
        if self.elapsed >= self.max_steps {
            transition.done = true;
        }
        Ok(transition)
    }

    fn reset(&mut self) -> Result<Self::Observation, TaskError> {
        self.elapsed = 0;
        self.env.reset()
    }

    fn obs_size(&self) -> usize {
        self.env.obs_size()
    }

    fn action_size(&self) -> usize {
        self.env.action_size()
    }
}
