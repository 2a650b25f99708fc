use physics::Vec2;
use rooms::RoomGeometry;

use crate::error::TaskError;

/// Outcome of comparing an achieved goal with the desired one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub is_success: bool,
    pub euclidean_distance: f32,
    pub shaped_distance: f32,
}

/// Thresholds the achieved-to-desired distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuccessEvaluator {
    indicator_threshold: f32,
}

impl SuccessEvaluator {
    #[must_use]
    pub fn new(indicator_threshold: f32) -> Self {
        Self { indicator_threshold }
    }

    #[must_use]
    pub fn indicator_threshold(&self) -> f32 {
        self.indicator_threshold
    }

    /// Both distances are always computed; success is strictly inside the
    /// threshold.
    ///
    /// # Errors
    ///
    /// Propagates geometry errors from the shaped distance query.
    pub fn evaluate(
        &self,
        room: &dyn RoomGeometry,
        achieved: Vec2,
        desired: Vec2,
    ) -> Result<Evaluation, TaskError> {
        let euclidean_distance = achieved.distance(desired);
        let shaped_distance = room.shaped_distance(achieved, desired)?;
        Ok(Evaluation {
            is_success: euclidean_distance < self.indicator_threshold,
            euclidean_distance,
            shaped_distance,
        })
    }
}
