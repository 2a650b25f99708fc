#![allow(dead_code)]

use physics::Vec2;
use rl::{PointMassTask, RewardType, TaskConfig};
use rooms::{Room, RoomType};

pub fn config(room_type: RoomType, reward_type: RewardType) -> TaskConfig {
    TaskConfig {
        room_type,
        reward_type,
        indicator_threshold: 0.05,
        seed: Some(42),
        ..TaskConfig::default()
    }
}

pub fn task(room_type: RoomType, reward_type: RewardType) -> PointMassTask {
    PointMassTask::new(config(room_type, reward_type)).unwrap()
}

/// A free position exactly `distance` away from `from`.
pub fn free_point_at(room: &Room, from: Vec2, distance: f32) -> Vec2 {
    (0..360)
        .map(|deg| (deg as f32).to_radians())
        .map(|a| from + Vec2::new(a.cos(), a.sin()) * distance)
        .find(|p| room.is_free(*p))
        .expect("no free point at the requested distance")
}
