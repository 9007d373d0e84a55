//! Render geometry

mod primitives;
mod vertex;

pub use primitives::PyramidGeometry;
pub use vertex::{Geometry, Vertex};
