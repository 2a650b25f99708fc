use physics::Vec2;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("unsupported room type: {0}")]
    UnsupportedRoomType(String),
    #[error("point ({}, {}) lies outside the room", .0.x, .0.y)]
    OutOfBounds(Vec2),
    #[error("point ({}, {}) lies inside a wall", .0.x, .0.y)]
    InsideWall(Vec2),
    #[error("no obstacle-free path from ({}, {}) to ({}, {})", .from.x, .from.y, .to.x, .to.y)]
    Unreachable { from: Vec2, to: Vec2 },
    #[error("invalid room extents {half_width} x {half_height}")]
    InvalidExtents { half_width: f32, half_height: f32 },
}
