//! Fixture descriptors: collision shape and material response

use super::collision::CollisionFilter;
use serde::{Deserialize, Serialize};
use simkit_core::Vec2;

/// Fixture shape in the physics plane
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FixtureShape {
    /// Axis-aligned rectangle centered on the body
    Box {
        /// Half width and half depth
        half_extents: Vec2,
    },
}

impl FixtureShape {
    /// Rectangle from half-extents
    pub fn rect(half_x: f32, half_y: f32) -> Self {
        Self::Box {
            half_extents: Vec2::new(half_x, half_y),
        }
    }

    /// Rectangle covering a full footprint
    pub fn footprint(size: Vec2) -> Self {
        Self::Box {
            half_extents: size.scale(0.5),
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        match self {
            Self::Box { half_extents } => *half_extents,
        }
    }
}

/// Fixture descriptor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixtureDescriptor {
    /// Collision shape
    pub shape: FixtureShape,
    /// Density for mass calculation
    pub density: f32,
    /// Whether this fixture only reports overlaps
    pub is_sensor: bool,
    /// Friction coefficient
    pub friction: f32,
    /// Restitution (bounciness)
    pub restitution: f32,
    /// Category and mask bits
    pub filter: CollisionFilter,
}

impl FixtureDescriptor {
    /// Solid fixture with the given shape
    pub fn from_shape(shape: FixtureShape) -> Self {
        Self {
            shape,
            density: 1.0,
            is_sensor: false,
            friction: 0.2,
            restitution: 0.0,
            filter: CollisionFilter::default(),
        }
    }

    /// Solid rectangular fixture
    pub fn rect(half_x: f32, half_y: f32) -> Self {
        Self::from_shape(FixtureShape::rect(half_x, half_y))
    }

    /// Set density
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density.max(0.0);
        self
    }

    /// Set friction
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction.max(0.0);
        self
    }

    /// Set restitution
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    /// Set collision filter
    pub fn with_filter(mut self, filter: CollisionFilter) -> Self {
        self.filter = filter;
        self
    }
}
