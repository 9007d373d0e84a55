//! Ground friction limits

use serde::{Deserialize, Serialize};

/// Limits for the friction joint that pins an object to the ground plane
///
/// A top-down 2D world has no gravity to produce floor friction, so the
/// solver approximates it with a joint capped by these values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FrictionContract {
    /// Maximum friction force
    #[serde(alias = "max_force")]
    pub max_force: f32,
    /// Maximum friction torque
    #[serde(alias = "max_torque")]
    pub max_torque: f32,
}

impl FrictionContract {
    pub const fn new(max_force: f32, max_torque: f32) -> Self {
        Self {
            max_force,
            max_torque,
        }
    }
}
