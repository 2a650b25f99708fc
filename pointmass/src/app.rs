//! # Rollout Driver
//!
//! [`run`] builds a [`PointMassTask`] from the resolved config, wraps it in a
//! [`TimeLimit`], drives it with uniformly random actions and summarises the
//! collected paths.

use anyhow::{Context, Result};
use rl::{diagnostics, final_success_rate, Diagnostics, Env, PointMassTask, StepInfo, TaskConfig, TimeLimit};
use serde::Serialize;

use crate::cli::Args;

#[derive(Debug, Clone, Serialize)]
pub struct EpisodeSummary {
    pub goal: [f32; 2],
    pub steps: usize,
    #[serde(rename = "return")]
    pub return_: f32,
    pub final_distance: f32,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub config: TaskConfig,
    pub substeps: usize,
    pub action_modifier: f32,
    pub episodes: Vec<EpisodeSummary>,
    pub success_rate: f32,
    pub diagnostics: Diagnostics,
}

/// Collect `args.episodes` random rollouts.
///
/// # Errors
///
/// Returns configuration errors and any error raised while stepping the task.
pub fn run(args: &Args) -> Result<Report> {
    let config = args.task_config().context("invalid task configuration")?;
    let max_steps = config.max_path_length;
    let mut actions = match config.seed {
        Some(seed) => fastrand::Rng::with_seed(seed.wrapping_add(1)),
        None => fastrand::Rng::new(),
    };

    let task = PointMassTask::new(config.clone()).context("failed to build task")?;
    let frame_skip = task.frame_skip();
    let mut env = TimeLimit::new(task, max_steps);

    tracing::info!(
        room = %config.room_type,
        reward_type = %config.reward_type,
        episodes = args.episodes,
        max_steps,
        "starting rollouts"
    );

    let mut paths: Vec<Vec<StepInfo>> = Vec::with_capacity(args.episodes);
    let mut episodes = Vec::with_capacity(args.episodes);
    for episode in 0..args.episodes {
        let obs = env.reset().with_context(|| format!("reset failed in episode {episode}"))?;
        let mut path = Vec::with_capacity(max_steps);
        let mut return_ = 0.0;

        loop {
            let action = [actions.f32() * 2.0 - 1.0, actions.f32() * 2.0 - 1.0];
            let step = env
                .step(&action)
                .with_context(|| format!("step {} failed in episode {episode}", path.len()))?;
            return_ += step.reward.total();
            path.push(step.info);
            if step.done {
                break;
            }
        }

        let last = path.last().copied();
        let summary = EpisodeSummary {
            goal: obs.desired_goal,
            steps: path.len(),
            return_,
            final_distance: last.map_or(f32::NAN, |i| i.euclidean_distance),
            success: last.is_some_and(|i| i.is_success),
        };
        tracing::info!(
            episode,
            final_distance = summary.final_distance,
            success = summary.success,
            "episode finished"
        );
        episodes.push(summary);
        paths.push(path);
    }

    Ok(Report {
        config,
        substeps: frame_skip.substeps,
        action_modifier: frame_skip.modifier,
        success_rate: final_success_rate(&paths),
        diagnostics: diagnostics(&paths, ""),
        episodes,
    })
}
