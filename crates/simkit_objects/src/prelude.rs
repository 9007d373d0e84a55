//! Prelude for common imports

pub use crate::config::{MeshElevation, ObjectTuning};
pub use crate::error::{Result, SimError};
pub use crate::geometry::{Geometry, PyramidGeometry, Vertex};
pub use crate::objects::{make_sim_pyramid, ObjectKind, SimObject, SimPyramid};
pub use crate::physics::{
    BodyDescriptor, BodyId, BodyKind, CollisionFilter, FixtureDescriptor, FixtureShape,
    FrictionContract, ObjectClass, SolverBackend, SolverBody,
};
pub use crate::scene::{Appearance, VisualTransform};
pub use crate::spec::PyramidSpec;
pub use crate::world::{ObjectKey, SimWorld};

pub use simkit_core::{Color, Mat4, Vec2, Vec3};
