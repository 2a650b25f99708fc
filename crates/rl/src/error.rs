use std::path::PathBuf;

use physics::PhysicsError;
use rooms::GeometryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    #[error("batch shapes differ: {achieved} achieved vs {desired} desired goals")]
    BatchShape { achieved: usize, desired: usize },
    #[error("room has no reachable positions to sample goals from")]
    NoReachablePositions,
    #[error("task must be reset before stepping")]
    NotRunning,
    #[error("failed to read config {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config")]
    ConfigParse(#[source] serde_json::Error),
}
