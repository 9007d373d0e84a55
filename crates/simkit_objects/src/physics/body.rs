//! Body descriptors for solver registration

use serde::{Deserialize, Serialize};
use simkit_core::Vec2;

/// Kinematic type of a body
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// Moves according to solver forces
    #[default]
    Dynamic,
    /// Never moves, infinite mass
    Static,
}

/// Body descriptor
///
/// Static configuration of a rigid body. The solver copies it at registration
/// and owns the live state afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Kinematic type
    pub kind: BodyKind,
    /// Initial position in the physics plane
    pub position: Vec2,
    /// Initial orientation in radians
    pub angle: f32,
    /// Linear damping
    pub linear_damping: f32,
    /// Angular damping
    pub angular_damping: f32,
    /// Fast-moving body; enables continuous collision against other dynamics
    pub bullet: bool,
}

impl Default for BodyDescriptor {
    fn default() -> Self {
        Self::dynamic()
    }
}

impl BodyDescriptor {
    /// Create a dynamic body at the origin
    pub fn dynamic() -> Self {
        Self {
            kind: BodyKind::Dynamic,
            position: Vec2::ZERO,
            angle: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
            bullet: false,
        }
    }

    /// Create a static body at the origin
    pub fn static_body() -> Self {
        Self {
            kind: BodyKind::Static,
            ..Self::dynamic()
        }
    }

    /// Create a body of the given kind
    pub fn of_kind(kind: BodyKind) -> Self {
        match kind {
            BodyKind::Dynamic => Self::dynamic(),
            BodyKind::Static => Self::static_body(),
        }
    }

    /// Set position
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Set linear damping
    pub fn with_linear_damping(mut self, damping: f32) -> Self {
        self.linear_damping = damping.max(0.0);
        self
    }

    /// Set angular damping
    pub fn with_angular_damping(mut self, damping: f32) -> Self {
        self.angular_damping = damping.max(0.0);
        self
    }

    /// Mark as a fast-moving body
    pub fn with_bullet(mut self, bullet: bool) -> Self {
        self.bullet = bullet;
        self
    }

    pub fn is_static(&self) -> bool {
        self.kind == BodyKind::Static
    }

    pub fn is_dynamic(&self) -> bool {
        self.kind == BodyKind::Dynamic
    }
}
