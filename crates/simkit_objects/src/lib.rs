//! # Simkit Objects
//!
//! Simulated objects for a robotics simulator that couples a 2D rigid-body
//! solver to a 3D scene graph.
//!
//! Every object owns two representations of itself:
//! - **Physics descriptors** (`BodyDescriptor`, `FixtureDescriptor`) handed to
//!   the solver once at registration
//! - **Render state** (`Geometry`, `Appearance`, `VisualTransform`) read by the
//!   renderer every frame
//!
//! Each tick, `SimObject::update` mirrors the solver's pose into the visual
//! transform.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use simkit_objects::prelude::*;
//!
//! let spec = PyramidSpec::from_json(r#"{
//!     "baseDimensions": { "x": 2.0, "y": 2.0 },
//!     "height": 3.0,
//!     "initialPosition": { "x": 1.0, "y": 1.0 }
//! }"#)?;
//!
//! let mut world = SimWorld::new(my_solver);
//! let key = world.add_object(make_sim_pyramid(&spec));
//! world.tick(16.0);
//! ```

// Error types
pub mod error;

// Bounding volumes
pub mod math;

// Render geometry
pub mod geometry;

// Physics descriptors and solver seams
pub mod physics;

// Visual transform and appearance
pub mod scene;

// Tuning defaults
pub mod config;

// Declarative object specs
pub mod spec;

// Simulated object types
pub mod objects;

// Tick driver
pub mod world;

// Prelude for common imports
pub mod prelude;

pub use config::{MeshElevation, ObjectTuning};
pub use error::{Result, SimError};
pub use geometry::{Geometry, PyramidGeometry, Vertex};
pub use objects::{make_sim_pyramid, ObjectKind, SimObject, SimPyramid};
pub use physics::{
    BodyDescriptor, BodyId, BodyKind, CollisionFilter, FixtureDescriptor, FixtureShape,
    FrictionContract, ObjectClass, SolverBackend, SolverBody,
};
pub use scene::{Appearance, VisualTransform};
pub use spec::PyramidSpec;
pub use world::{ObjectKey, SimWorld};
