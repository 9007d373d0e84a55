//! Geometry primitive generators

use super::{Geometry, Vertex};

/// Triangle list for the pyramid: two base triangles then four sides
const PYRAMID_INDICES: [u32; 18] = [
    0, 2, 1, //
    0, 3, 2, //
    1, 4, 0, //
    2, 4, 1, //
    3, 4, 2, //
    0, 4, 3, //
];

/// Square-based pyramid generator
///
/// The base lies in the `y = 0` plane, axis-aligned and centered on the local
/// origin. The apex sits at `(0, height, 0)`. Base dimensions map onto the
/// render `x` (width) and `z` (depth) axes.
pub struct PyramidGeometry;

impl PyramidGeometry {
    /// Create a pyramid with the given base and height
    ///
    /// Non-positive dimensions yield degenerate or inverted geometry; callers
    /// validate input upstream.
    pub fn new(width: f32, depth: f32, height: f32) -> Geometry {
        let hx = width / 2.0;
        let hz = depth / 2.0;

        let vertices = vec![
            Vertex::at([-hx, 0.0, -hz]),
            Vertex::at([-hx, 0.0, hz]),
            Vertex::at([hx, 0.0, hz]),
            Vertex::at([hx, 0.0, -hz]),
            Vertex::at([0.0, height, 0.0]),
        ];

        let mut geometry = Geometry::from_data(vertices, PYRAMID_INDICES.to_vec());
        geometry.compute_vertex_normals();
        geometry
    }

    /// Index of the apex vertex
    pub const APEX: usize = 4;
}
