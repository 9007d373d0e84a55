//! Tick driver coupling simulated objects to a solver backend
//!
//! Each tick runs in a fixed order: the backend steps, then every registered
//! object mirrors its body's pose. Renderers read `render_items` afterwards.

use crate::geometry::Geometry;
use crate::objects::SimObject;
use crate::physics::{BodyId, SolverBackend};
use crate::scene::{Appearance, VisualTransform};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key of an object registered with a `SimWorld`
    pub struct ObjectKey;
}

struct ObjectSlot {
    object: Box<dyn SimObject>,
    body: BodyId,
}

/// Registered objects and the solver they live in
pub struct SimWorld<B: SolverBackend> {
    backend: B,
    objects: SlotMap<ObjectKey, ObjectSlot>,
}

impl<B: SolverBackend> SimWorld<B> {
    /// Create an empty world over a backend
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            objects: SlotMap::with_key(),
        }
    }

    /// Register an object with the solver
    ///
    /// The object's descriptors are handed to the backend, and a ground
    /// friction joint is attached when the object reports a contract. From
    /// here on the object is updated every tick.
    pub fn add_object(&mut self, object: Box<dyn SimObject>) -> ObjectKey {
        let body = self
            .backend
            .create_body(object.body_descriptor(), object.fixture_descriptor());
        if let Some(contract) = object.friction_contract() {
            self.backend.attach_ground_friction(body, &contract);
        }
        tracing::debug!(
            kind = object.kind().name(),
            body = body.0,
            backend = self.backend.name(),
            "registered object"
        );
        self.objects.insert(ObjectSlot { object, body })
    }

    /// Remove an object and destroy its body
    pub fn remove_object(&mut self, key: ObjectKey) -> Option<Box<dyn SimObject>> {
        let slot = self.objects.remove(key)?;
        self.backend.remove_body(slot.body);
        Some(slot.object)
    }

    /// Step the solver, then mirror every object's pose
    pub fn tick(&mut self, dt_ms: f32) {
        self.backend.step(dt_ms);
        for (key, slot) in &mut self.objects {
            match self.backend.body(slot.body) {
                Some(body) => slot.object.update(dt_ms, body),
                None => {
                    tracing::warn!(?key, body = slot.body.0, "solver body missing; skipping update")
                }
            }
        }
    }

    pub fn get(&self, key: ObjectKey) -> Option<&dyn SimObject> {
        self.objects.get(key).map(|slot| slot.object.as_ref())
    }

    /// Mutable access for appearance changes
    pub fn get_mut(&mut self, key: ObjectKey) -> Option<&mut (dyn SimObject + 'static)> {
        self.objects.get_mut(key).map(|slot| slot.object.as_mut())
    }

    /// Solver handle of a registered object
    pub fn body_id(&self, key: ObjectKey) -> Option<BodyId> {
        self.objects.get(key).map(|slot| slot.body)
    }

    /// Everything a renderer needs to draw the registered objects
    pub fn render_items(
        &self,
    ) -> impl Iterator<Item = (&Geometry, &Appearance, &VisualTransform)> + '_ {
        self.objects.values().map(|slot| {
            let object = slot.object.as_ref();
            (object.geometry(), object.appearance(), object.transform())
        })
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
