//! Visual transform mirrored from the solver

use simkit_core::{Mat4, Vec2, Vec3};

/// Position and heading of an object's mesh in render space
///
/// Written by the owning object once per tick, read by the renderer. Physics
/// never reads it back.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualTransform {
    /// Position (render y is up)
    pub position: Vec3,
    /// Rotation about the up axis in radians
    pub rotation_y: f32,
}

impl VisualTransform {
    /// Place on the physics plane at the given height
    pub fn on_plane(position: Vec2, height: f32) -> Self {
        Self {
            position: Vec3::from_plane(position, height),
            rotation_y: 0.0,
        }
    }

    /// Overwrite the horizontal position and heading from a physics pose
    ///
    /// The physics plane's `y` maps onto render `z`. A counter-clockwise
    /// physics angle viewed from above is a negative rotation about render `y`.
    /// Height is left as is.
    pub fn mirror_pose(&mut self, center: Vec2, angle: f32) {
        self.position.x = center.x;
        self.position.z = center.y;
        self.rotation_y = -angle;
    }

    /// Horizontal position as a physics-plane point
    pub fn plane_position(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }

    /// Local transformation matrix (translate after rotate)
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::translation(self.position.x, self.position.y, self.position.z)
            .mul(&Mat4::rotation_y(self.rotation_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_pose() {
        let mut t = VisualTransform::on_plane(Vec2::ZERO, 1.5);
        t.mirror_pose(Vec2::new(3.0, 4.0), 1.0);
        assert_eq!(t.position, Vec3::new(3.0, 1.5, 4.0));
        assert!((t.rotation_y + 1.0).abs() < 0.001);
        assert_eq!(t.plane_position(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_local_matrix_translation() {
        let t = VisualTransform::on_plane(Vec2::new(2.0, -1.0), 0.0);
        let m = t.local_matrix();
        assert_eq!(m.cols[3], [2.0, 0.0, -1.0, 1.0]);
    }
}
