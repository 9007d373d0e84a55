//! Tuning defaults for simulated objects
//!
//! Every constant an object used to hard-code lives here with a named default.
//! Tuning can be loaded from TOML or embedded per object in a JSON spec;
//! missing fields fall back to the defaults. Keys are camelCase to match the
//! JSON specs, snake_case spellings are accepted as aliases, and unknown keys
//! are rejected.
//!
//! ```toml
//! linear_damping = 0.8
//! mesh_elevation = "centered"
//!
//! [friction_contract]
//! max_force = 0.2
//! max_torque = 0.002
//! ```

use crate::error::Result;
use crate::physics::FrictionContract;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default linear damping for small/medium bodies
pub const DEFAULT_LINEAR_DAMPING: f32 = 0.5;
/// Default angular damping for small/medium bodies
pub const DEFAULT_ANGULAR_DAMPING: f32 = 0.3;
/// Objects default to continuous collision so robots cannot tunnel through them
pub const DEFAULT_BULLET: bool = true;
/// Default fixture density
pub const DEFAULT_DENSITY: f32 = 1.0;
/// Default fixture friction
pub const DEFAULT_FRICTION: f32 = 1.0;
/// Default fixture restitution
pub const DEFAULT_RESTITUTION: f32 = 0.0;
/// Default ground friction joint limits
pub const DEFAULT_FRICTION_CONTRACT: FrictionContract = FrictionContract::new(0.1, 0.001);

/// Vertical placement of an object's mesh relative to the ground plane
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeshElevation {
    /// Mesh origin on the ground plane
    #[default]
    Ground,
    /// Mesh origin lifted by half the object's height
    Centered,
}

impl MeshElevation {
    /// Render height of the mesh origin for an object of the given height
    pub fn offset(&self, height: f32) -> f32 {
        match self {
            Self::Ground => 0.0,
            Self::Centered => height / 2.0,
        }
    }
}

/// Physics and placement tuning for one object
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ObjectTuning {
    #[serde(alias = "linear_damping")]
    pub linear_damping: f32,
    #[serde(alias = "angular_damping")]
    pub angular_damping: f32,
    pub bullet: bool,
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
    /// `None` disables the ground friction joint
    #[serde(alias = "friction_contract")]
    pub friction_contract: Option<FrictionContract>,
    #[serde(alias = "mesh_elevation")]
    pub mesh_elevation: MeshElevation,
}

impl Default for ObjectTuning {
    fn default() -> Self {
        Self {
            linear_damping: DEFAULT_LINEAR_DAMPING,
            angular_damping: DEFAULT_ANGULAR_DAMPING,
            bullet: DEFAULT_BULLET,
            density: DEFAULT_DENSITY,
            friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
            friction_contract: Some(DEFAULT_FRICTION_CONTRACT),
            mesh_elevation: MeshElevation::Ground,
        }
    }
}

impl ObjectTuning {
    /// Parse tuning from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load tuning from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let tuning = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded object tuning");
        Ok(tuning)
    }

    /// Set damping
    pub fn with_damping(mut self, linear: f32, angular: f32) -> Self {
        self.linear_damping = linear;
        self.angular_damping = angular;
        self
    }

    /// Set or clear the ground friction contract
    pub fn with_friction_contract(mut self, contract: Option<FrictionContract>) -> Self {
        self.friction_contract = contract;
        self
    }

    /// Set mesh elevation
    pub fn with_mesh_elevation(mut self, elevation: MeshElevation) -> Self {
        self.mesh_elevation = elevation;
        self
    }
}
