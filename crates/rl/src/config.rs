//! # Task Configuration
//!
//! Every option is a closed enum or a validated number. Names are parsed
//! once, at construction, so an unknown `reward_type` fails before the first
//! step rather than in the middle of an episode.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use rooms::RoomType;
use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// Physics sub-steps per decision step before speed scaling.
pub const DEFAULT_FRAME_SKIP: u32 = 5;
pub const DEFAULT_MAX_PATH_LENGTH: usize = 200;

/// Shaping potential used by [`RewardEngine::potential`](crate::RewardEngine::potential).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PotentialType {
    /// No shaping; the potential is identically zero.
    None,
    /// Negative obstacle-aware path length.
    Shaped,
    /// Negative straight-line distance.
    Euclidean,
}

/// Whether the base reward lives in `{0, 1}` or `{-1, 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseRewardSign {
    Positive,
    Negative,
}

/// Formula of the trained-on reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardType {
    Sparse,
    Dense,
    VectorizedDense,
}

macro_rules! named_enum {
    ($ty:ident, $option:literal, { $($name:literal => $variant:ident),+ $(,)? }) => {
        impl $ty {
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = TaskError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    other => Err(TaskError::UnsupportedConfiguration(format!(
                        concat!($option, " `{}`"),
                        other
                    ))),
                }
            }
        }
    };
}

named_enum!(PotentialType, "potential_type", {
    "none" => None,
    "shaped" => Shaped,
    "euclidean" => Euclidean,
});

named_enum!(BaseRewardSign, "base_reward", {
    "positive" => Positive,
    "negative" => Negative,
});

named_enum!(RewardType, "reward_type", {
    "sparse" => Sparse,
    "dense" => Dense,
    "vectorized_dense" => VectorizedDense,
});

/// Parse a room layout name, reporting unknown names as a configuration error.
///
/// # Errors
///
/// [`TaskError::UnsupportedConfiguration`] for an unknown name.
pub fn parse_room_type(s: &str) -> Result<RoomType, TaskError> {
    s.parse()
        .map_err(|_| TaskError::UnsupportedConfiguration(format!("room_type `{s}`")))
}

/// Construction-time options of a [`PointMassTask`](crate::PointMassTask).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskConfig {
    pub room_type: RoomType,
    pub potential_type: PotentialType,
    pub base_reward: BaseRewardSign,
    pub reward_type: RewardType,
    /// Success radius, also the sparse-reward radius.
    pub indicator_threshold: f32,
    /// Scales the effective frame skip.
    pub speed: f32,
    pub frame_skip: u32,
    /// Add potential-based shaping to the step reward.
    pub shaped: bool,
    /// Episode cap enforced by [`TimeLimit`](crate::TimeLimit).
    pub max_path_length: usize,
    /// Seed for goal sampling. Drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            room_type: RoomType::Empty,
            potential_type: PotentialType::Euclidean,
            base_reward: BaseRewardSign::Positive,
            reward_type: RewardType::Sparse,
            indicator_threshold: 0.05,
            speed: 1.0,
            frame_skip: DEFAULT_FRAME_SKIP,
            shaped: false,
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            seed: None,
        }
    }
}

impl TaskConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`TaskError::UnsupportedConfiguration`] for unknown option names or
    /// out-of-range values, [`TaskError::ConfigParse`] for malformed JSON.
    pub fn from_json_str(json: &str) -> Result<Self, TaskError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            if e.is_data() {
                TaskError::UnsupportedConfiguration(e.to_string())
            } else {
                TaskError::ConfigParse(e)
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// [`TaskError::ConfigIo`] when the file cannot be read, otherwise as
    /// [`TaskConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TaskError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TaskError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// # Errors
    ///
    /// [`TaskError::UnsupportedConfiguration`] naming the first offending
    /// option.
    pub fn validate(&self) -> Result<(), TaskError> {
        if !(self.indicator_threshold.is_finite() && self.indicator_threshold > 0.0) {
            return Err(TaskError::UnsupportedConfiguration(format!(
                "indicator_threshold must be positive, got {}",
                self.indicator_threshold
            )));
        }
        if self.max_path_length == 0 {
            return Err(TaskError::UnsupportedConfiguration(
                "max_path_length must be at least 1".into(),
            ));
        }
        if self.shaped && self.reward_type == RewardType::VectorizedDense {
            return Err(TaskError::UnsupportedConfiguration(
                "shaping requires a scalar reward_type, not vectorized_dense".into(),
            ));
        }
        FrameSkip::new(self.frame_skip, self.speed)?;
        Ok(())
    }
}

/// Speed-adjusted sub-step count and the action scale that compensates for
/// rounding it up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSkip {
    /// `ceil(frame_skip * speed)`, always at least one.
    pub substeps: usize,
    /// `frame_skip * speed / substeps`, in `(0, 1]`.
    pub modifier: f32,
}

impl FrameSkip {
    /// # Errors
    ///
    /// [`TaskError::UnsupportedConfiguration`] when `frame_skip` is zero or
    /// `speed` is not a positive finite number.
    pub fn new(frame_skip: u32, speed: f32) -> Result<Self, TaskError> {
        if frame_skip == 0 {
            return Err(TaskError::UnsupportedConfiguration("frame_skip must be at least 1".into()));
        }
        if !(speed.is_finite() && speed > 0.0) {
            return Err(TaskError::UnsupportedConfiguration(format!(
                "speed must be positive, got {speed}"
            )));
        }

        #[allow(clippy::cast_precision_loss)]
        let scaled = frame_skip as f32 * speed;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let substeps = (scaled.ceil() as usize).max(1);
        #[allow(clippy::cast_precision_loss)]
        let modifier = scaled / substeps as f32;
        Ok(Self { substeps, modifier })
    }
}
