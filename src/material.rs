//! Material system for ray tracing.
//!
//! Implements three material types: Lambertian (diffuse), Metal (specular),
//! and Dielectric (transparent).

use glam::Vec3A;
use crate::hittable::HitRecord;
use crate::random::{self, Pcg32};
use crate::ray::Ray;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Result of a material scattering a ray.
#[derive(Debug, Clone, Copy)]
pub struct Scatter {
    /// Color filter applied to light carried along the scattered ray.
    pub attenuation: Color,
    /// The scattered ray leaving the hit point.
    pub scattered: Ray,
}

/// Material types for ray tracing.
///
/// Enum representing different surface materials. Supports diffuse,
/// metallic, and transparent materials.
#[derive(Debug, Clone, Copy)]
pub enum MaterialType {
    /// Diffuse material with uniform light scattering.
    Lambertian {
        /// Surface color (albedo).
        albedo: Color,
    },
    /// Metallic material with specular reflection.
    Metal {
        /// Surface color (albedo).
        albedo: Color,
        /// Surface roughness. Values above 1.0 are treated as 1.0.
        fuzz: f32,
    },
    /// Transparent material with refraction.
    Dielectric {
        /// Index of refraction relative to the surrounding medium.
        refraction_index: f32,
    },
}

impl MaterialType {
    /// Scatter an incoming ray at a hit point.
    ///
    /// Returns the attenuated scattered ray, or None when the surface
    /// absorbs the ray.
    pub fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut Pcg32) -> Option<Scatter> {
        match *self {
            MaterialType::Lambertian { albedo } => scatter_lambertian(albedo, rec, rng),
            MaterialType::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, r_in, rec, rng),
            MaterialType::Dielectric { refraction_index } => {
                scatter_dielectric(refraction_index, r_in, rec, rng)
            }
        }
    }
}

fn scatter_lambertian(albedo: Color, rec: &HitRecord, rng: &mut Pcg32) -> Option<Scatter> {
    let direction = rec.normal + random::random_in_unit_sphere(rng);
    Some(Scatter {
        attenuation: albedo,
        scattered: Ray::new(rec.p, direction),
    })
}

fn scatter_metal(
    albedo: Color,
    fuzz: f32,
    r_in: &Ray,
    rec: &HitRecord,
    rng: &mut Pcg32,
) -> Option<Scatter> {
    let reflected = reflect(r_in.direction.normalize(), rec.normal);
    // The sphere sample is drawn even at zero fuzz to keep the stream stable
    let direction = reflected + fuzz.min(1.0) * random::random_in_unit_sphere(rng);
    if direction.dot(rec.normal) > 0.0 {
        Some(Scatter {
            attenuation: albedo,
            scattered: Ray::new(rec.p, direction),
        })
    } else {
        None
    }
}

fn scatter_dielectric(
    refraction_index: f32,
    r_in: &Ray,
    rec: &HitRecord,
    rng: &mut Pcg32,
) -> Option<Scatter> {
    // Orientation comes from the unflipped outward normal
    let (outward_normal, ni_over_nt, cosine) = if r_in.direction.dot(rec.normal) > 0.0 {
        (
            -rec.normal,
            refraction_index,
            refraction_index * r_in.direction.dot(rec.normal) / r_in.direction.length(),
        )
    } else {
        (
            rec.normal,
            1.0 / refraction_index,
            -r_in.direction.dot(rec.normal) / r_in.direction.length(),
        )
    };

    let reflected = reflect(r_in.direction, rec.normal);
    let refracted = refract(r_in.direction, outward_normal, ni_over_nt);
    let reflect_prob = if refracted.is_some() {
        reflectance(cosine, refraction_index)
    } else {
        1.0
    };

    // Exactly one draw decides the branch, total internal reflection included
    let direction = if rng.next_f32() < reflect_prob {
        reflected
    } else {
        refracted.unwrap_or(reflected)
    };

    Some(Scatter {
        attenuation: Color::ONE,
        scattered: Ray::new(rec.p, direction),
    })
}

/// Reflect a vector about a surface normal.
fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through a surface, or None on total internal reflection.
fn refract(v: Vec3A, n: Vec3A, ni_over_nt: f32) -> Option<Vec3A> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick approximation for the Fresnel reflectance.
fn reflectance(cosine: f32, refraction_index: f32) -> f32 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
