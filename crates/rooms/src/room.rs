//! # Room Layouts
//!
//! A room is a rectangle `[-hw, hw] x [-hh, hh]` optionally split by thin
//! axis-aligned walls. Each layout precomputes the grid of positions a goal
//! may be drawn from.

use std::fmt;
use std::str::FromStr;

use physics::{Aabb, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::path::{shortest_path_length, waypoints};

pub const DEFAULT_HALF_EXTENT: f32 = 1.2;
pub const WALL_HALF_THICKNESS: f32 = 0.05;
pub const DOOR_WIDTH: f32 = 0.3;
/// Spacing of the reachable-position grid.
pub const GRID_SPACING: f32 = 0.05;
/// Minimum distance between a reachable position and any wall or boundary.
pub const CLEARANCE: f32 = 0.05;
/// Slack on the domain test so points resting on the boundary are accepted.
const DOMAIN_TOLERANCE: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Empty,
    Wall,
    #[serde(alias = "four_room", alias = "four-room")]
    Rooms,
}

impl RoomType {
    pub const ALL: [Self; 3] = [Self::Empty, Self::Wall, Self::Rooms];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Wall => "wall",
            Self::Rooms => "rooms",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(Self::Empty),
            "wall" => Ok(Self::Wall),
            "rooms" | "four_room" | "four-room" => Ok(Self::Rooms),
            other => Err(GeometryError::UnsupportedRoomType(other.to_owned())),
        }
    }
}

/// Obstacle layout the goal-reaching task is played in.
pub trait RoomGeometry {
    /// Length of the shortest obstacle-avoiding path between two points.
    ///
    /// # Errors
    ///
    /// [`GeometryError::OutOfBounds`] when either point lies outside the
    /// room, [`GeometryError::Unreachable`] when no path exists.
    fn shaped_distance(&self, p: Vec2, q: Vec2) -> Result<f32, GeometryError>;

    /// Finite, non-empty set of legal goal positions.
    fn reachable_positions(&self) -> &[Vec2];

    /// Whether `p` lies inside the room's coordinate domain.
    fn contains(&self, p: Vec2) -> bool;
}

#[derive(Debug, Clone)]
pub struct Room {
    room_type: RoomType,
    bounds: Aabb,
    walls: Vec<Aabb>,
    start: Vec2,
    waypoints: Vec<Vec2>,
    positions: Vec<Vec2>,
}

impl Room {
    /// Build a room of the given layout and half-extents.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidExtents`] when the extents are not
    /// finite or too small to leave any reachable position.
    pub fn new(room_type: RoomType, half_width: f32, half_height: f32) -> Result<Self, GeometryError> {
        let min_extent = DOOR_WIDTH + 2.0 * CLEARANCE;
        if !(half_width.is_finite() && half_height.is_finite())
            || half_width <= min_extent
            || half_height <= min_extent
        {
            return Err(GeometryError::InvalidExtents { half_width, half_height });
        }

        Ok(Self::build(room_type, half_width, half_height))
    }

    /// The standard `1.2 x 1.2` half-extent room for a layout.
    #[must_use]
    pub fn default_for(room_type: RoomType) -> Self {
        Self::build(room_type, DEFAULT_HALF_EXTENT, DEFAULT_HALF_EXTENT)
    }

    fn build(room_type: RoomType, half_width: f32, half_height: f32) -> Self {
        let bounds = Aabb::new(
            Vec2::new(-half_width, -half_height),
            Vec2::new(half_width, half_height),
        );
        let (walls, start) = layout(room_type, half_width, half_height);
        let waypoints = waypoints(&walls, &bounds);

        let mut room = Self { room_type, bounds, walls, start, waypoints, positions: Vec::new() };
        room.positions = room.enumerate_positions();
        tracing::debug!(
            room = %room_type,
            walls = room.walls.len(),
            positions = room.positions.len(),
            "room constructed"
        );
        room
    }

    #[must_use]
    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    #[must_use]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    #[must_use]
    pub fn walls(&self) -> &[Aabb] {
        &self.walls
    }

    /// Where the particle rests after a reset.
    #[must_use]
    pub fn start_position(&self) -> Vec2 {
        self.start
    }

    /// Inside the domain and at least [`CLEARANCE`] away from every wall and
    /// from the boundary.
    #[must_use]
    pub fn is_free(&self, p: Vec2) -> bool {
        self.bounds.inflate(-CLEARANCE).contains(p)
            && self.walls.iter().all(|w| w.distance_to(p) >= CLEARANCE)
    }

    fn enumerate_positions(&self) -> Vec<Vec2> {
        let inner = self.bounds.inflate(-CLEARANCE);
        let count = |span: f32| {
            // usable span is small and positive, so the cast is lossless
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let n = (span / GRID_SPACING + 1e-3).floor() as usize;
            n + 1
        };
        let nx = count(inner.max.x - inner.min.x);
        let ny = count(inner.max.y - inner.min.y);

        let mut positions = Vec::with_capacity(nx * ny);
        for j in 0..ny {
            for i in 0..nx {
                #[allow(clippy::cast_precision_loss)]
                let p = Vec2::new(
                    inner.min.x + i as f32 * GRID_SPACING,
                    inner.min.y + j as f32 * GRID_SPACING,
                );
                if self.is_free(p) {
                    positions.push(p);
                }
            }
        }
        positions
    }
}

impl RoomGeometry for Room {
    fn shaped_distance(&self, p: Vec2, q: Vec2) -> Result<f32, GeometryError> {
        for point in [p, q] {
            if !self.contains(point) {
                return Err(GeometryError::OutOfBounds(point));
            }
        }
        if p == q {
            return Ok(0.0);
        }
        shortest_path_length(p, q, &self.walls, &self.waypoints)
            .ok_or(GeometryError::Unreachable { from: p, to: q })
    }

    fn reachable_positions(&self) -> &[Vec2] {
        &self.positions
    }

    fn contains(&self, p: Vec2) -> bool {
        p.is_finite() && self.bounds.inflate(DOMAIN_TOLERANCE).contains(p)
    }
}

/// Wall boxes and start position for a layout.
fn layout(room_type: RoomType, hw: f32, hh: f32) -> (Vec<Aabb>, Vec2) {
    let t = WALL_HALF_THICKNESS;
    match room_type {
        RoomType::Empty => (Vec::new(), Vec2::ZERO),
        RoomType::Wall => {
            // passage left open on the right-hand side
            let wall = Aabb::new(Vec2::new(-hw, -t), Vec2::new(hw * 0.5, t));
            (vec![wall], Vec2::new(0.0, -hh * 0.5))
        }
        RoomType::Rooms => {
            let mut walls = Vec::with_capacity(6);
            let door = DOOR_WIDTH * 0.5;
            // horizontal divider with doors at x = -hw/2 and x = hw/2
            let (dl, dr) = (hw * 0.5, hw * 0.5);
            walls.push(Aabb::new(Vec2::new(-hw, -t), Vec2::new(-dl - door, t)));
            walls.push(Aabb::new(Vec2::new(-dl + door, -t), Vec2::new(dr - door, t)));
            walls.push(Aabb::new(Vec2::new(dr + door, -t), Vec2::new(hw, t)));
            // vertical divider with doors at y = -hh/2 and y = hh/2
            let (db, dt) = (hh * 0.5, hh * 0.5);
            walls.push(Aabb::new(Vec2::new(-t, -hh), Vec2::new(t, -db - door)));
            walls.push(Aabb::new(Vec2::new(-t, -db + door), Vec2::new(t, dt - door)));
            walls.push(Aabb::new(Vec2::new(-t, dt + door), Vec2::new(t, hh)));
            (walls, Vec2::new(-hw * 0.5, -hh * 0.5))
        }
    }
}
