//! Vertex format and geometry structures

use crate::math::BoundingBox;
use simkit_core::Vec3;

/// Vertex data for render geometry
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vertex {
    /// Position in local space
    pub position: [f32; 3],
    /// Normal vector
    pub normal: [f32; 3],
}

impl Vertex {
    /// Create a vertex with a zero normal; normals are derived afterwards
    pub fn at(position: [f32; 3]) -> Self {
        Self {
            position,
            normal: [0.0; 3],
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// Indexed triangle geometry
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    /// Vertex data
    pub vertices: Vec<Vertex>,
    /// Index data (triangles, counter-clockwise front faces)
    pub indices: Vec<u32>,
    /// Axis-aligned bounding box
    pub bounding_box: BoundingBox,
}

impl Geometry {
    /// Create from vertices and indices
    pub fn from_data(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        let mut geometry = Self {
            vertices,
            indices,
            bounding_box: BoundingBox::empty(),
        };
        geometry.compute_bounds();
        geometry
    }

    /// Compute bounding volume from vertex data
    pub fn compute_bounds(&mut self) {
        self.bounding_box = BoundingBox::from_points(self.vertices.iter().map(Vertex::position));
    }

    /// Unnormalized face normal; its length is twice the triangle area
    fn face_cross(&self, tri: &[u32]) -> Vec3 {
        let p0 = self.vertices[tri[0] as usize].position();
        let p1 = self.vertices[tri[1] as usize].position();
        let p2 = self.vertices[tri[2] as usize].position();
        (p1 - p0).cross(p2 - p0)
    }

    /// Compute smooth vertex normals
    ///
    /// Face normals are accumulated per vertex weighted by triangle area, then
    /// normalized. Vertices not referenced by any face keep a zero normal.
    pub fn compute_vertex_normals(&mut self) {
        let mut sums = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let n = self.face_cross(tri);
            for &i in tri {
                sums[i as usize] = sums[i as usize] + n;
            }
        }
        for (vertex, sum) in self.vertices.iter_mut().zip(sums) {
            vertex.normal = sum.normalize().to_array();
        }
    }

    /// Unit normal of every triangle, in index order
    pub fn face_normals(&self) -> Vec<Vec3> {
        self.indices
            .chunks_exact(3)
            .map(|tri| self.face_cross(tri).normalize())
            .collect()
    }

    /// Centroid of every triangle, in index order
    pub fn face_centroids(&self) -> Vec<Vec3> {
        self.indices
            .chunks_exact(3)
            .map(|tri| {
                let sum = tri
                    .iter()
                    .fold(Vec3::ZERO, |acc, &i| acc + self.vertices[i as usize].position());
                sum * (1.0 / 3.0)
            })
            .collect()
    }

    /// Average of all vertex positions
    pub fn centroid(&self) -> Vec3 {
        if self.vertices.is_empty() {
            return Vec3::ZERO;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vec3::ZERO, |acc, v| acc + v.position());
        sum * (1.0 / self.vertices.len() as f32)
    }

    /// Vertex buffer as raw bytes for GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes for GPU upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
