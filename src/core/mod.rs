//! Core module - pure game logic with no external dependencies
//!
//! This module contains the entity model, world update rules, and the
//! geometry/RNG helpers. It has zero dependencies on UI or I/O.

pub mod entity;
pub mod geom;
pub mod rng;
pub mod world;

// Re-export commonly used types
pub use entity::{Player, Projectile, Sprite};
pub use rng::SimpleRng;
pub use world::World;
