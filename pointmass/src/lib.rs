//! # Point-Mass Goal Reaching
//!
//! Entry point for the documentation and the `pointmass` executable.
//!
//! ## Overview
//!
//! A particle moves inside a bounded room (open, split by a wall, or divided
//! into four chambers) and must reach a goal sampled at the start of every
//! episode. The workspace is split by concern:
//!
//! -   **[`physics`]:** the point-mass simulator and the [`PhysicsBackend`]
//!     contract the task drives.
//! -   **[`rooms`]:** room layouts, the reachable-position grid, and the
//!     obstacle-aware shaped distance.
//! -   **[`rl`]:** goal sampling, rewards, success detection and the
//!     [`PointMassTask`] orchestrator behind the [`Env`] trait.
//!
//! This crate adds the command line: [`cli::Args`] turns flags and an optional
//! JSON file into a [`TaskConfig`], and [`app::run`] collects random-action
//! rollouts and summarises them.
//!
//! [`PhysicsBackend`]: physics::PhysicsBackend
//! [`PointMassTask`]: rl::PointMassTask
//! [`Env`]: rl::Env
//! [`TaskConfig`]: rl::TaskConfig

pub mod app;
pub mod cli;

pub use physics;
pub use rl;
pub use rooms;
