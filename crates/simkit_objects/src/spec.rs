//! Declarative object specs
//!
//! Specs arrive pre-validated from the asset layer; parsing checks shape only.

use crate::config::ObjectTuning;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use simkit_core::Vec2;

/// Base color used when a pyramid spec omits one
pub const DEFAULT_PYRAMID_COLOR: u32 = 0x0000ff;

/// Pyramid spec
///
/// ```json
/// {
///   "baseDimensions": { "x": 2.0, "y": 2.0 },
///   "height": 3.0,
///   "baseColor": 16711680,
///   "initialPosition": { "x": 1.0, "y": 1.0 },
///   "isStatic": false
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyramidSpec {
    /// Base width (`x`) and depth (`y`) in the physics plane
    pub base_dimensions: Vec2,
    /// Apex height above the base
    pub height: f32,
    /// Packed `0xRRGGBB` color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_position: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,
    /// Accepted for schema compatibility; bodies always start at angle 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_orientation: Option<f32>,
    /// Per-object override of the default tuning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuning: Option<ObjectTuning>,
}

impl PyramidSpec {
    /// Create a spec with only the required fields
    pub fn new(base_dimensions: Vec2, height: f32) -> Self {
        Self {
            base_dimensions,
            height,
            base_color: None,
            initial_position: None,
            is_static: None,
            initial_orientation: None,
            tuning: None,
        }
    }

    /// Parse a spec from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the spec to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Set initial position
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.initial_position = Some(Vec2::new(x, y));
        self
    }

    /// Set base color
    pub fn with_color(mut self, color: u32) -> Self {
        self.base_color = Some(color);
        self
    }

    /// Mark as static
    pub fn fixed(mut self) -> Self {
        self.is_static = Some(true);
        self
    }

    /// Set per-object tuning
    pub fn with_tuning(mut self, tuning: ObjectTuning) -> Self {
        self.tuning = Some(tuning);
        self
    }

    pub fn color_or_default(&self) -> u32 {
        self.base_color.unwrap_or(DEFAULT_PYRAMID_COLOR)
    }

    pub fn position_or_origin(&self) -> Vec2 {
        self.initial_position.unwrap_or(Vec2::ZERO)
    }

    pub fn is_static(&self) -> bool {
        self.is_static.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeshElevation;
    use crate::error::SimError;

    #[test]
    fn test_minimal_json() {
        let spec = PyramidSpec::from_json(r#"{"baseDimensions": {"x": 2, "y": 1}, "height": 3}"#)
            .unwrap();
        assert_eq!(spec.base_dimensions, Vec2::new(2.0, 1.0));
        assert_eq!(spec.color_or_default(), DEFAULT_PYRAMID_COLOR);
        assert_eq!(spec.position_or_origin(), Vec2::ZERO);
        assert!(!spec.is_static());
        assert!(spec.tuning.is_none());
    }

    #[test]
    fn test_full_json() {
        let spec = PyramidSpec::from_json(
            r#"{
                "baseDimensions": {"x": 2, "y": 2},
                "height": 3,
                "baseColor": 16711680,
                "initialPosition": {"x": 1, "y": -1},
                "isStatic": true,
                "initialOrientation": 0.5,
                "tuning": {"bullet": false, "mesh_elevation": "centered"}
            }"#,
        )
        .unwrap();
        assert_eq!(spec.color_or_default(), 0xff0000);
        assert_eq!(spec.position_or_origin(), Vec2::new(1.0, -1.0));
        assert!(spec.is_static());
        let tuning = spec.tuning.unwrap();
        assert!(!tuning.bullet);
        assert_eq!(tuning.mesh_elevation, MeshElevation::Centered);
        assert!((tuning.linear_damping - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_camel_case_tuning_honored() {
        let spec = PyramidSpec::from_json(
            r#"{
                "baseDimensions": {"x": 2, "y": 2},
                "height": 3,
                "tuning": {"linearDamping": 0.9, "meshElevation": "centered"}
            }"#,
        )
        .unwrap();
        let tuning = spec.tuning.unwrap();
        assert!((tuning.linear_damping - 0.9).abs() < 0.001);
        assert_eq!(tuning.mesh_elevation, MeshElevation::Centered);
    }

    #[test]
    fn test_misspelled_tuning_rejected() {
        let err = PyramidSpec::from_json(
            r#"{
                "baseDimensions": {"x": 2, "y": 2},
                "height": 3,
                "tuning": {"linearDampening": 0.9}
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Json(_)));
    }

    #[test]
    fn test_missing_height() {
        let err = PyramidSpec::from_json(r#"{"baseDimensions": {"x": 2, "y": 1}}"#).unwrap_err();
        assert!(matches!(err, SimError::Json(_)));
    }

    #[test]
    fn test_builder_round_trip() {
        let spec = PyramidSpec::new(Vec2::new(1.0, 1.0), 2.0).at(3.0, 4.0).fixed();
        let json = spec.to_json().unwrap();
        assert_eq!(PyramidSpec::from_json(&json).unwrap(), spec);
    }
}
