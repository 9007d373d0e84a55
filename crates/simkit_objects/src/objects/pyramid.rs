//! Pyramid-shaped field object

use super::{ObjectKind, SimObject};
use crate::config::ObjectTuning;
use crate::geometry::{Geometry, PyramidGeometry};
use crate::physics::{
    BodyDescriptor, BodyKind, CollisionFilter, FixtureDescriptor, FixtureShape, FrictionContract,
    ObjectClass, SolverBody,
};
use crate::scene::{Appearance, VisualTransform};
use crate::spec::PyramidSpec;

/// Create a boxed pyramid from a spec
pub fn make_sim_pyramid(spec: &PyramidSpec) -> Box<dyn SimObject> {
    Box::new(SimPyramid::new(spec))
}

/// Square-based pyramid resting on the field
///
/// The solver sees only the base footprint as a rectangle; height is purely
/// visual.
#[derive(Clone, Debug)]
pub struct SimPyramid {
    geometry: Geometry,
    appearance: Appearance,
    transform: VisualTransform,
    body: BodyDescriptor,
    fixture: FixtureDescriptor,
    friction: Option<FrictionContract>,
}

impl SimPyramid {
    /// Build from a spec, using its embedded tuning or the defaults
    pub fn new(spec: &PyramidSpec) -> Self {
        let tuning = spec.tuning.clone().unwrap_or_default();
        Self::with_tuning(spec, &tuning)
    }

    /// Build from a spec with explicit tuning, ignoring any embedded tuning
    pub fn with_tuning(spec: &PyramidSpec, tuning: &ObjectTuning) -> Self {
        let base = spec.base_dimensions;
        let position = spec.position_or_origin();

        let geometry = PyramidGeometry::new(base.x, base.y, spec.height);
        let (body, fixture) = pyramid_descriptors(spec, tuning);
        let transform =
            VisualTransform::on_plane(position, tuning.mesh_elevation.offset(spec.height));

        if let Some(orientation) = spec.initial_orientation {
            tracing::debug!(
                orientation,
                "pyramid initial orientation ignored; bodies start at angle 0"
            );
        }
        tracing::debug!(
            width = base.x,
            depth = base.y,
            height = spec.height,
            x = position.x,
            y = position.y,
            kind = ?body.kind,
            "constructed SimPyramid"
        );

        Self {
            geometry,
            appearance: Appearance::from_hex(spec.color_or_default()),
            transform,
            body,
            fixture,
            friction: tuning.friction_contract,
        }
    }
}

/// Body and fixture for a pyramid spec
///
/// The fixture is a rectangle over the base footprint regardless of height.
pub fn pyramid_descriptors(
    spec: &PyramidSpec,
    tuning: &ObjectTuning,
) -> (BodyDescriptor, FixtureDescriptor) {
    let kind = if spec.is_static() {
        BodyKind::Static
    } else {
        BodyKind::Dynamic
    };

    let body = BodyDescriptor::of_kind(kind)
        .with_position(spec.position_or_origin())
        .with_linear_damping(tuning.linear_damping)
        .with_angular_damping(tuning.angular_damping)
        .with_bullet(tuning.bullet);

    let fixture = FixtureDescriptor::from_shape(FixtureShape::footprint(spec.base_dimensions))
        .with_density(tuning.density)
        .with_friction(tuning.friction)
        .with_restitution(tuning.restitution)
        .with_filter(CollisionFilter::for_class(ObjectClass::Objects));

    (body, fixture)
}

impl SimObject for SimPyramid {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Pyramid
    }

    fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    fn body_descriptor(&self) -> &BodyDescriptor {
        &self.body
    }

    fn fixture_descriptor(&self) -> &FixtureDescriptor {
        &self.fixture
    }

    fn friction_contract(&self) -> Option<FrictionContract> {
        self.friction
    }

    fn transform(&self) -> &VisualTransform {
        &self.transform
    }

    fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    fn set_base_color(&mut self, color: u32) {
        self.appearance.set_color_hex(color);
    }

    fn update(&mut self, _dt_ms: f32, body: &dyn SolverBody) {
        let center = body.world_center();
        let angle = body.angle();
        self.transform.mirror_pose(center, angle);
        tracing::trace!(x = center.x, y = center.y, angle, "pyramid pose mirrored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeshElevation;
    use crate::physics::collision;
    use simkit_core::{Vec2, Vec3};

    struct FixedBody {
        center: Vec2,
        angle: f32,
    }

    impl SolverBody for FixedBody {
        fn world_center(&self) -> Vec2 {
            self.center
        }

        fn angle(&self) -> f32 {
            self.angle
        }
    }

    fn spec() -> PyramidSpec {
        PyramidSpec::new(Vec2::new(2.0, 2.0), 3.0).at(1.0, 1.0)
    }

    #[test]
    fn test_end_to_end_construction() {
        let mut s = spec();
        s.is_static = Some(false);
        let pyramid = SimPyramid::new(&s);

        let body = pyramid.body_descriptor();
        assert_eq!(body.position, Vec2::new(1.0, 1.0));
        assert_eq!(body.kind, BodyKind::Dynamic);
        assert_eq!(body.angle, 0.0);
        assert_eq!(pyramid.fixture_descriptor().shape.half_extents(), Vec2::new(1.0, 1.0));
        assert_eq!(pyramid.geometry().vertices[PyramidGeometry::APEX].position, [0.0, 3.0, 0.0]);
        assert_eq!(pyramid.transform().position, Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_static_flag() {
        assert!(SimPyramid::new(&spec().fixed()).body_descriptor().is_static());
        assert!(SimPyramid::new(&spec()).body_descriptor().is_dynamic());
    }

    #[test]
    fn test_fixture_ignores_height() {
        for height in [0.1, 1.0, 50.0] {
            let s = PyramidSpec::new(Vec2::new(3.0, 5.0), height);
            let half = SimPyramid::new(&s).fixture_descriptor().shape.half_extents();
            assert_eq!(half, Vec2::new(1.5, 2.5));
        }
    }

    #[test]
    fn test_default_material() {
        let pyramid = SimPyramid::new(&spec());
        let body = pyramid.body_descriptor();
        assert!((body.linear_damping - 0.5).abs() < 0.001);
        assert!((body.angular_damping - 0.3).abs() < 0.001);
        assert!(body.bullet);

        let fixture = pyramid.fixture_descriptor();
        assert!(!fixture.is_sensor);
        assert!((fixture.density - 1.0).abs() < 0.001);
        assert!((fixture.friction - 1.0).abs() < 0.001);
        assert_eq!(fixture.restitution, 0.0);
        assert_eq!(fixture.filter.category, collision::OBJECTS);
        assert_eq!(fixture.filter, CollisionFilter::for_class(ObjectClass::Objects));
        assert_eq!(pyramid.appearance().color_hex(), 0x0000ff);
    }

    #[test]
    fn test_descriptors_stable() {
        let pyramid = SimPyramid::new(&spec());
        let body = pyramid.body_descriptor().clone();
        let fixture = pyramid.fixture_descriptor().clone();
        assert_eq!(pyramid.body_descriptor(), &body);
        assert_eq!(pyramid.fixture_descriptor(), &fixture);
    }

    #[test]
    fn test_update_mirrors_pose() {
        let mut pyramid = SimPyramid::new(&spec());
        let body = FixedBody {
            center: Vec2::new(3.0, 4.0),
            angle: 1.0,
        };
        pyramid.update(16.0, &body);

        let t = pyramid.transform();
        assert_eq!(t.position.x, 3.0);
        assert_eq!(t.position.z, 4.0);
        assert_eq!(t.rotation_y, -1.0);
        // descriptors keep their construction values
        assert_eq!(pyramid.body_descriptor().position, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_update_ignores_dt() {
        let body = FixedBody {
            center: Vec2::new(-2.0, 0.5),
            angle: 0.25,
        };
        let mut a = SimPyramid::new(&spec());
        let mut b = SimPyramid::new(&spec());
        a.update(0.0, &body);
        b.update(1000.0, &body);
        assert_eq!(a.transform(), b.transform());
    }

    #[test]
    fn test_color_change_leaves_physics() {
        let mut pyramid = SimPyramid::new(&spec());
        let body = pyramid.body_descriptor().clone();
        let fixture = pyramid.fixture_descriptor().clone();

        pyramid.set_base_color(0xff0000);
        assert_eq!(pyramid.appearance().color_hex(), 0xff0000);
        assert_eq!(pyramid.body_descriptor(), &body);
        assert_eq!(pyramid.fixture_descriptor(), &fixture);
    }

    #[test]
    fn test_friction_contract() {
        let pyramid = SimPyramid::new(&spec());
        assert_eq!(pyramid.friction_contract(), Some(FrictionContract::new(0.1, 0.001)));

        let tuning = ObjectTuning::default().with_friction_contract(None);
        assert!(SimPyramid::with_tuning(&spec(), &tuning).friction_contract().is_none());
    }

    #[test]
    fn test_centered_elevation_survives_update() {
        let tuning = ObjectTuning::default().with_mesh_elevation(MeshElevation::Centered);
        let mut pyramid = SimPyramid::with_tuning(&spec(), &tuning);
        assert!((pyramid.transform().position.y - 1.5).abs() < 0.001);

        let body = FixedBody {
            center: Vec2::new(0.0, 0.0),
            angle: 0.0,
        };
        pyramid.update(16.0, &body);
        assert!((pyramid.transform().position.y - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_spec_tuning_override() {
        let s = spec().with_tuning(ObjectTuning::default().with_damping(0.9, 0.1));
        let body = SimPyramid::new(&s).body_descriptor().clone();
        assert!((body.linear_damping - 0.9).abs() < 0.001);
        assert!((body.angular_damping - 0.1).abs() < 0.001);
    }
}
