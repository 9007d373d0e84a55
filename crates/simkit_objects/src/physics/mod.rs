//! Physics descriptors and solver seams
//!
//! Objects never integrate or resolve contacts themselves. They describe a
//! body and its fixture for a 2D rigid-body solver, and read the solver's pose
//! back once per tick.
//!
//! # Example
//!
//! ```ignore
//! use simkit_objects::physics::*;
//!
//! let body = BodyDescriptor::dynamic()
//!     .with_position(Vec2::new(1.0, 1.0))
//!     .with_linear_damping(0.5);
//!
//! let fixture = FixtureDescriptor::rect(1.0, 1.0)
//!     .with_filter(CollisionFilter::for_class(ObjectClass::Objects));
//! ```

mod body;
pub mod collision;
mod fixture;
mod friction;

pub use body::*;
pub use collision::{CollisionFilter, ObjectClass};
pub use fixture::*;
pub use friction::*;

use simkit_core::Vec2;

/// Live body state owned by the solver
///
/// Objects hold no body of their own; the driver passes the solver's body in
/// on every update.
pub trait SolverBody {
    /// World-space center of mass in the physics plane
    fn world_center(&self) -> Vec2;

    /// Orientation in radians, counter-clockwise in the physics plane
    fn angle(&self) -> f32;
}

/// Handle to a body registered with a solver backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub u64);

/// 2D rigid-body solver backend
///
/// Implement this trait to plug a solver into `SimWorld`.
pub trait SolverBackend {
    /// Create a body with a single fixture and return its handle
    fn create_body(&mut self, body: &BodyDescriptor, fixture: &FixtureDescriptor) -> BodyId;

    /// Pin a body to the ground through a friction joint with the given limits
    fn attach_ground_friction(&mut self, body: BodyId, contract: &FrictionContract);

    /// Destroy a body and everything attached to it
    fn remove_body(&mut self, body: BodyId);

    /// Advance the simulation
    fn step(&mut self, dt_ms: f32);

    /// Look up a live body
    fn body(&self, body: BodyId) -> Option<&dyn SolverBody>;

    /// Backend name
    fn name(&self) -> &'static str;
}
