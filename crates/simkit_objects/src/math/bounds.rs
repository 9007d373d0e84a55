//! Axis-aligned bounds for culling

use simkit_core::Vec3;

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    /// Create an empty bounding box
    pub fn empty() -> Self {
        Self {
            min: Vec3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vec3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Fit a box around a set of points
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut bounds = Self::empty();
        for p in points {
            bounds.expand_to_include(p);
        }
        bounds
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Size along each axis (width, height, depth)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn expand_to_include(&mut self, point: Vec3) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_box() {
        assert!(BoundingBox::empty().is_empty());
        assert!(BoundingBox::from_points(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_from_points() {
        let b = BoundingBox::from_points([Vec3::new(-1.0, 0.0, -2.0), Vec3::new(1.0, 3.0, 2.0)]);
        assert_eq!(b.size(), Vec3::new(2.0, 3.0, 4.0));
        assert!((b.center().y - 1.5).abs() < 0.001);
    }
}
