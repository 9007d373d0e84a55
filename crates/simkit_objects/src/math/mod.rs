//! Math utilities for render geometry

mod bounds;

pub use bounds::BoundingBox;

// Re-export common math types from simkit_core
pub use simkit_core::{Mat4, Vec2, Vec3};
