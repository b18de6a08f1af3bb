//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection using the half-b quadratic formula.

use glam::Vec3A;
use crate::ray::Ray;
use crate::hittable::{Hittable, HitRecord};
use crate::interval::Interval;
use crate::material::MaterialType;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,
    /// Radius of the sphere. Clamped to be non-negative.
    pub radius: f32,
    /// Material of the sphere.
    pub material: MaterialType,
}

impl Sphere {
    /// Create a new sphere with the given center, radius and material.
    ///
    /// Negative radii are clamped to zero.
    pub fn new(center: Vec3A, radius: f32, material: MaterialType) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = r.origin - self.center;
        let a = r.direction.length_squared();
        let b = oc.dot(r.direction);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = b * b - a * c;

        // Tangent rays (discriminant of zero) count as misses
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root inside the acceptable range
        let mut root = (-b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = r.at(root);
        Some(HitRecord {
            p,
            normal: (p - self.center) / self.radius,
            t: root,
            material: self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glass() -> MaterialType {
        MaterialType::Dielectric {
            refraction_index: 1.5,
        }
    }

    #[test]
    fn head_on_hit_reports_point_and_normal() {
        let s = Sphere::new(Vec3A::new(0.0, 0.0, -5.0), 1.0, glass());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = s.hit(&r, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert_eq!(rec.t, 4.0);
        assert_eq!(rec.p, Vec3A::new(0.0, 0.0, -4.0));
        assert_eq!(rec.normal, Vec3A::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn ray_from_the_center_hits_the_far_root() {
        let s = Sphere::new(Vec3A::new(2.0, 1.0, 0.0), 2.0, glass());
        let r = Ray::new(Vec3A::new(2.0, 1.0, 0.0), Vec3A::new(0.0, 1.0, 0.0));
        let rec = s.hit(&r, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert_eq!(rec.t, 2.0);
        assert_eq!(rec.normal, Vec3A::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn back_face_normal_still_points_outward() {
        // Skip the near root so the ray exits through the far side
        let s = Sphere::new(Vec3A::new(0.0, 0.0, -3.0), 1.0, glass());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = s.hit(&r, Interval::new(2.5, f32::INFINITY)).unwrap();
        assert_eq!(rec.t, 4.0);
        assert_eq!(rec.normal, Vec3A::new(0.0, 0.0, -1.0));
        assert!(rec.normal.dot(r.direction) > 0.0);
    }

    #[test]
    fn tangent_rays_miss() {
        let s = Sphere::new(Vec3A::new(0.0, 1.0, -5.0), 1.0, glass());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(s.hit(&r, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn spheres_behind_the_origin_miss() {
        let s = Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0, glass());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(s.hit(&r, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn non_unit_directions_scale_t() {
        let s = Sphere::new(Vec3A::new(0.0, 0.0, -5.0), 1.0, glass());
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -2.0));
        let rec = s.hit(&r, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert_eq!(rec.t, 2.0);
        assert_eq!(rec.p, Vec3A::new(0.0, 0.0, -4.0));
    }
}
