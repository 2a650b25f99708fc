use std::path::PathBuf;

use clap::Parser;
use rl::{parse_room_type, TaskConfig, TaskError};

/// Run random-action rollouts of the point-mass goal-reaching task and print
/// distance diagnostics as JSON.
#[derive(Parser, Debug, Clone)]
#[command(name = "pointmass", version, about)]
pub struct Args {
    /// JSON task config; flags below override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// empty, wall or rooms
    #[arg(long)]
    pub room_type: Option<String>,
    /// sparse, dense or vectorized_dense
    #[arg(long)]
    pub reward_type: Option<String>,
    /// none, shaped or euclidean
    #[arg(long)]
    pub potential_type: Option<String>,
    /// positive or negative
    #[arg(long)]
    pub base_reward: Option<String>,
    #[arg(long)]
    pub indicator_threshold: Option<f32>,
    #[arg(long)]
    pub speed: Option<f32>,
    /// Add potential-based shaping to the step reward.
    #[arg(long)]
    pub shaped: bool,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, default_value_t = 10)]
    pub episodes: usize,
    /// Steps per episode; defaults to the config's max_path_length.
    #[arg(long)]
    pub steps: Option<usize>,
    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolve the effective task config: defaults, then the JSON file, then
    /// flags.
    ///
    /// # Errors
    ///
    /// Any [`TaskError`] from reading the file, parsing option names, or
    /// validation.
    pub fn task_config(&self) -> Result<TaskConfig, TaskError> {
        let mut config = match &self.config {
            Some(path) => TaskConfig::from_path(path)?,
            None => TaskConfig::default(),
        };

        if let Some(room_type) = &self.room_type {
            config.room_type = parse_room_type(room_type)?;
        }
        if let Some(reward_type) = &self.reward_type {
            config.reward_type = reward_type.parse()?;
        }
        if let Some(potential_type) = &self.potential_type {
            config.potential_type = potential_type.parse()?;
        }
        if let Some(base_reward) = &self.base_reward {
            config.base_reward = base_reward.parse()?;
        }
        if let Some(threshold) = self.indicator_threshold {
            config.indicator_threshold = threshold;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(steps) = self.steps {
            config.max_path_length = steps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.shaped |= self.shaped;

        config.validate()?;
        Ok(config)
    }
}
