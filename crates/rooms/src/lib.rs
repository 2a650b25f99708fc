#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Rooms
//!
//! Room layouts for the point-mass goal-reaching task: the rectangle the
//! particle lives in, its walls, the positions goals may be drawn from, and
//! the obstacle-aware *shaped distance* between two points.
//!
//! [`Room::default_for`] is the factory for the three stock layouts:
//!
//! -   `empty`: an open square.
//! -   `wall`: a single divider with a passage on one side.
//! -   `rooms`: four chambers joined by doorways.

pub mod error;
pub mod path;
pub mod room;

pub use error::GeometryError;
pub use room::{Room, RoomGeometry, RoomType, CLEARANCE, DEFAULT_HALF_EXTENT, GRID_SPACING};
