//! Simulated object types
//!
//! A simulated object carries two views of the same thing: descriptors for the
//! 2D solver and geometry plus a transform for the renderer. `SimObject` is the
//! capability set the world driver and the renderer rely on; each concrete
//! shape implements it on its own struct.

mod pyramid;

pub use pyramid::{make_sim_pyramid, pyramid_descriptors, SimPyramid};

use crate::geometry::Geometry;
use crate::physics::{BodyDescriptor, FixtureDescriptor, FrictionContract, SolverBody};
use crate::scene::{Appearance, VisualTransform};

/// Concrete object type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Pyramid,
}

impl ObjectKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pyramid => "SimPyramid",
        }
    }
}

/// Trait for all simulated objects
///
/// Descriptors are computed once at construction and returned unchanged on
/// every call. Only the visual transform and the appearance change over an
/// object's lifetime.
pub trait SimObject {
    /// Concrete type of this object
    fn kind(&self) -> ObjectKind;

    /// Render geometry in local space
    fn geometry(&self) -> &Geometry;

    /// Body descriptor for solver registration
    fn body_descriptor(&self) -> &BodyDescriptor;

    /// Fixture descriptor for solver registration
    fn fixture_descriptor(&self) -> &FixtureDescriptor;

    /// Ground friction limits, if this object type uses them
    fn friction_contract(&self) -> Option<FrictionContract> {
        None
    }

    /// Current visual transform
    fn transform(&self) -> &VisualTransform;

    /// Rendered appearance
    fn appearance(&self) -> &Appearance;

    /// Overwrite the rendered color (`0xRRGGBB`); physics is unaffected
    fn set_base_color(&mut self, color: u32);

    /// Mirror the solver's pose into the visual transform
    ///
    /// Called once per tick after the physics step. `dt_ms` is part of the
    /// shared signature; objects that do not animate on their own ignore it.
    fn update(&mut self, dt_ms: f32, body: &dyn SolverBody);
}
