//! Collision category registry
//!
//! Categories are a fixed enumeration shared by every object type; objects pick
//! a class and never define bits of their own.

use serde::{Deserialize, Serialize};

/// Robot chassis and attached parts
pub const ROBOT: u16 = 0x0001;
/// Arena walls
pub const WALL: u16 = 0x0002;
/// Regular field objects (boxes, balls, pyramids)
pub const OBJECTS: u16 = 0x0004;
/// Sensor probes
pub const SENSOR: u16 = 0x0008;
/// Every category
pub const ALL: u16 = 0xFFFF;

/// Object classes known to the registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectClass {
    Robot,
    Wall,
    Objects,
    Sensor,
}

/// Category and mask bits for a fixture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionFilter {
    /// Bits identifying what this fixture is
    pub category: u16,
    /// Bits of categories this fixture collides with
    pub mask: u16,
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self::for_class(ObjectClass::Objects)
    }
}

impl CollisionFilter {
    /// Resolve the registry entry for a class
    pub const fn for_class(class: ObjectClass) -> Self {
        match class {
            ObjectClass::Robot => Self {
                category: ROBOT,
                mask: ROBOT | WALL | OBJECTS,
            },
            ObjectClass::Wall => Self {
                category: WALL,
                mask: ROBOT | OBJECTS | SENSOR,
            },
            ObjectClass::Objects => Self {
                category: OBJECTS,
                mask: ROBOT | WALL | OBJECTS | SENSOR,
            },
            ObjectClass::Sensor => Self {
                category: SENSOR,
                mask: WALL | OBJECTS,
            },
        }
    }

    /// Whether two filters allow a contact
    pub fn collides_with(&self, other: &CollisionFilter) -> bool {
        (self.mask & other.category) != 0 && (other.mask & self.category) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objects_collide_with_robots_and_walls() {
        let objects = CollisionFilter::for_class(ObjectClass::Objects);
        assert!(objects.collides_with(&CollisionFilter::for_class(ObjectClass::Robot)));
        assert!(objects.collides_with(&CollisionFilter::for_class(ObjectClass::Wall)));
        assert!(objects.collides_with(&objects));
    }

    #[test]
    fn test_default_is_regular_object() {
        let filter = CollisionFilter::default();
        assert_eq!(filter, CollisionFilter::for_class(ObjectClass::Objects));
        assert_ne!(filter.category & ROBOT, ROBOT);
    }

    #[test]
    fn test_sensors_skip_robots() {
        let sensor = CollisionFilter::for_class(ObjectClass::Sensor);
        assert!(!sensor.collides_with(&CollisionFilter::for_class(ObjectClass::Robot)));
    }
}
