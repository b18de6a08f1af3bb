//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives and HitRecord for
//! storing intersection data.

use glam::Vec3A;
use crate::interval::Interval;
use crate::material::MaterialType;
use crate::ray::Ray;

/// Ray-object intersection information.
///
/// The normal is the outward unit normal of the surface regardless of
/// which side the ray arrived from; materials that care about orientation
/// (the dielectric) derive it from the dot product with the incident
/// direction.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Vec3A,
    /// Outward surface normal at the intersection point (unit vector)
    pub normal: Vec3A,
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// Material of the object at the hit point
    pub material: MaterialType,
}

/// Trait for objects that can be intersected by rays.
pub trait Hittable {
    /// Test for ray intersection with t inside the open interval `ray_t`.
    ///
    /// Returns the record of the nearest intersection, if any.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing. Supports polymorphic
/// objects through Box<dyn Hittable>.
pub struct HittableList {
    /// Vector of boxed hittable objects
    pub objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_so_far = ray_t.max;
        let mut hit_anything = None;

        // Test each object, narrowing the interval to the nearest hit so far
        for object in &self.objects {
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                hit_anything = Some(rec);
            }
        }

        hit_anything
    }
}
