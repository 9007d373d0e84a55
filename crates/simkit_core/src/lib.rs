//! Simkit Core
//!
//! Value types shared by every simulated object:
//!
//! - **Vectors**: `Vec2` for the physics plane, `Vec3` for render space
//! - **Matrices**: `Mat4` for visual transforms
//! - **Colors**: `Color` with packed `0xRRGGBB` conversion
//!
//! The physics world is two-dimensional. Its `(x, y)` plane maps onto the
//! renderer's horizontal `(x, z)` plane, with the render `y` axis pointing up.

pub mod color;
pub mod math;

pub use color::Color;
pub use math::{Mat4, Vec2, Vec3};
