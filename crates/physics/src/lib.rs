#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Point-Mass Physics
//!
//! A minimal planar physics layer: one actuated particle on two slide joints,
//! confined to a rectangular room and kept out of axis-aligned walls.
//!
//! ## Key Components
//!
//! -   **Primitives:** [`Vec2`] and [`Aabb`] in the [`types`] module.
//! -   **Backend contract:** [`PhysicsBackend`] is what a task drives: apply an
//!     action for `n` sub-steps, read the centre of mass, inject state.
//! -   **Simulation:** [`PointMassSim`] implements the contract with
//!     semi-implicit Euler and inelastic wall contacts.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{Aabb, PhysicsBackend, PointMassSim, Vec2};
//!
//! let bounds = Aabb::new(Vec2::new(-1.2, -1.2), Vec2::new(1.2, 1.2));
//! let mut sim = PointMassSim::new(Vec2::ZERO, bounds, Vec::new());
//! sim.advance(&[1.0, 0.0], 5)?;
//! assert!(sim.com().x > 0.0);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod collision;
pub mod error;
pub mod integrator;
pub mod simulation;
pub mod types;

pub use error::PhysicsError;
pub use integrator::PointMassParams;
pub use simulation::{PhysicsBackend, PointMassSim, NQ};
pub use types::{Aabb, Vec2};
