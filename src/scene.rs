//! Stock scene and camera builders.
//!
//! The cover scene draws its sphere placement and materials from the
//! caller's random engine in a fixed order, so a given seed always
//! produces the same world.

use glam::Vec3A;

use crate::camera::CameraConfig;
use crate::hittable::HittableList;
use crate::material::{Color, MaterialType};
use crate::random::Pcg32;
use crate::sphere::Sphere;

/// Create the cover scene with a grid of random small spheres.
pub fn cover_scene(rng: &mut Pcg32) -> HittableList {
    let mut world = HittableList::new();

    // Ground sphere
    let ground_material = MaterialType::Lambertian {
        albedo: Color::new(0.5, 0.5, 0.5),
    };
    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, -1000.0, 0.0),
        1000.0,
        ground_material,
    )));

    // Generate 22x22 grid of small spheres
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = rng.next_f32();
            let center = Vec3A::new(
                a as f32 + 0.9 * rng.next_f32(),
                0.2,
                b as f32 + 0.9 * rng.next_f32(),
            );

            // Don't place spheres too close to the large feature spheres
            if (center - Vec3A::new(4.0, 0.2, 0.0)).length() > 0.9 {
                let sphere_material = if choose_mat < 0.8 {
                    // Diffuse material
                    let albedo = Color::new(
                        rng.next_f32() * rng.next_f32(),
                        rng.next_f32() * rng.next_f32(),
                        rng.next_f32() * rng.next_f32(),
                    );
                    MaterialType::Lambertian { albedo }
                } else if choose_mat < 0.95 {
                    // Metal material
                    let albedo = Color::new(
                        0.5 * (1.0 + rng.next_f32()),
                        0.5 * (1.0 + rng.next_f32()),
                        0.5 * (1.0 + rng.next_f32()),
                    );
                    let fuzz = 0.5 * rng.next_f32();
                    MaterialType::Metal { albedo, fuzz }
                } else {
                    // Glass material
                    MaterialType::Dielectric {
                        refraction_index: 1.5,
                    }
                };

                world.add(Box::new(Sphere::new(center, 0.2, sphere_material)));
            }
        }
    }

    // Three large feature spheres
    let material1 = MaterialType::Dielectric {
        refraction_index: 1.5,
    };
    world.add(Box::new(Sphere::new(Vec3A::new(0.0, 1.0, 0.0), 1.0, material1)));

    let material2 = MaterialType::Lambertian {
        albedo: Color::new(0.4, 0.2, 0.1),
    };
    world.add(Box::new(Sphere::new(Vec3A::new(-4.0, 1.0, 0.0), 1.0, material2)));

    let material3 = MaterialType::Metal {
        albedo: Color::new(0.7, 0.6, 0.5),
        fuzz: 0.0,
    };
    world.add(Box::new(Sphere::new(Vec3A::new(4.0, 1.0, 0.0), 1.0, material3)));

    world
}

/// Camera for the cover scene, focused on the look target.
pub fn cover_camera(aspect_ratio: f32) -> CameraConfig {
    let lookfrom = Vec3A::new(9.0, 2.0, 2.6);
    let lookat = Vec3A::new(3.0, 0.8, 1.0);
    CameraConfig {
        lookfrom,
        lookat,
        vup: Vec3A::new(0.0, 1.0, 0.0),
        vfov: 30.0,
        aspect_ratio,
        aperture: 0.0,
        focus_dist: (lookfrom - lookat).length(),
    }
}

/// Create the fixed three-sphere scene: a diffuse sphere flanked by a
/// fuzzy metal one and a glass one, resting on a large ground sphere.
pub fn three_spheres_scene() -> HittableList {
    let mut world = HittableList::new();

    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, 0.0, -1.0),
        0.5,
        MaterialType::Lambertian {
            albedo: Color::new(0.1, 0.2, 0.5),
        },
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(0.0, -100.5, -1.0),
        100.0,
        MaterialType::Lambertian {
            albedo: Color::new(0.8, 0.8, 0.0),
        },
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(1.0, 0.0, -1.0),
        0.5,
        MaterialType::Metal {
            albedo: Color::new(0.8, 0.6, 0.2),
            fuzz: 0.3,
        },
    )));
    world.add(Box::new(Sphere::new(
        Vec3A::new(-1.0, 0.0, -1.0),
        0.5,
        MaterialType::Dielectric {
            refraction_index: 1.5,
        },
    )));

    world
}

/// Camera for the three-sphere scene, with a wide aperture focused on
/// the diffuse sphere.
pub fn three_spheres_camera(aspect_ratio: f32) -> CameraConfig {
    let lookfrom = Vec3A::new(3.0, 3.0, 2.0);
    let lookat = Vec3A::new(0.0, 0.0, -1.0);
    CameraConfig {
        lookfrom,
        lookat,
        vup: Vec3A::new(0.0, 1.0, 0.0),
        vfov: 20.0,
        aspect_ratio,
        aperture: 2.0,
        focus_dist: (lookfrom - lookat).length(),
    }
}
