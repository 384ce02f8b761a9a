//! Physics module for the character rig
//!
//! Minimal static-world collision: enough to probe for ground and to move a
//! character box through axis-aligned level geometry. No rigid bodies.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//!
//! # Submodules
//!
//! - [`collision`] - AABB overlap, sphere and ray tests
//! - [`world`] - Static collider set, implements [`GroundSensor`](crate::player::GroundSensor)
//! - [`mover`] - [`CharacterMover`] trait and the [`KinematicMover`] resolver

pub mod collision;
pub mod mover;
pub mod world;

pub use collision::{Aabb, CONTACT_EPSILON, ray_aabb_intersect};
pub use mover::{CharacterMover, KinematicMover};
pub use world::{Collider, StaticWorld};
