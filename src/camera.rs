//! Camera system and rendering loop.
//!
//! Generates primary rays through a thin lens and accumulates Monte Carlo
//! samples into an 8-bit RGB image with gamma 2 encoding.

use std::time::Instant;

use glam::Vec3A;
use image::{Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::material::Color;
use crate::random::{self, Pcg32};
use crate::ray::Ray;

/// Camera placement and lens parameters.
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    /// Eye position.
    pub lookfrom: Vec3A,
    /// Point the camera looks at.
    pub lookat: Vec3A,
    /// View-up vector fixing the camera roll.
    pub vup: Vec3A,
    /// Vertical field of view in degrees.
    pub vfov: f32,
    /// Image width divided by height.
    pub aspect_ratio: f32,
    /// Lens diameter. Zero gives a pinhole camera.
    pub aperture: f32,
    /// Distance from the eye to the plane of perfect focus.
    pub focus_dist: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            lookfrom: Vec3A::ZERO,
            lookat: Vec3A::new(0.0, 0.0, -1.0),
            vup: Vec3A::new(0.0, 1.0, 0.0),
            vfov: 90.0,
            aspect_ratio: 2.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }
}

/// Image dimensions and sampling parameters for a render.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
    /// Number of jittered samples per pixel.
    pub samples_per_pixel: u32,
    /// Maximum number of scattering events per sample.
    pub max_depth: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
            samples_per_pixel: 1,
            max_depth: 50,
        }
    }
}

/// Thin-lens camera mapping viewport coordinates to world-space rays.
pub struct Camera {
    origin: Vec3A,
    lower_left_corner: Vec3A,
    horizontal: Vec3A,
    vertical: Vec3A,
    u: Vec3A,
    v: Vec3A,
    lens_radius: f32,
}

impl Camera {
    /// Build a camera from its configuration.
    pub fn new(config: &CameraConfig) -> Self {
        let lens_radius = config.aperture / 2.0;
        let theta = config.vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = config.aspect_ratio * half_height;

        let w = (config.lookfrom - config.lookat).normalize();
        let u = config.vup.cross(w).normalize();
        let v = w.cross(u);

        Self {
            origin: config.lookfrom,
            lower_left_corner: config.lookfrom
                - config.focus_dist * (half_width * u + half_height * v + w),
            horizontal: 2.0 * half_width * config.focus_dist * u,
            vertical: 2.0 * half_height * config.focus_dist * v,
            u,
            v,
            lens_radius,
        }
    }

    /// Generate a ray through viewport coordinates (s, t).
    ///
    /// The lens disk is sampled even for a closed aperture so the number
    /// of draws per ray does not depend on the camera.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut Pcg32) -> Ray {
        let rd = self.lens_radius * random::random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;
        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
        )
    }

    /// Render the world into an RGB image.
    ///
    /// Pixels are traced in scanline order from the top row down, taking
    /// every sample draw from `rng`, so a given seed always produces the
    /// same image.
    pub fn render(&self, world: &dyn Hittable, options: &RenderOptions, rng: &mut Pcg32) -> RgbImage {
        let mut image = RgbImage::new(options.width, options.height);
        let progress_bar = ProgressBar::new((options.width * options.height) as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        info!("Generating image...");
        let start = Instant::now();

        for j in (0..options.height).rev() {
            for i in 0..options.width {
                let mut color = Color::ZERO;
                for _ in 0..options.samples_per_pixel {
                    let u = (i as f32 + rng.next_f32()) / options.width as f32;
                    let v = (j as f32 + rng.next_f32()) / options.height as f32;
                    let r = self.get_ray(u, v, rng);
                    color += ray_color(&r, world, 0, options.max_depth, rng);
                }
                color /= options.samples_per_pixel as f32;

                // Gamma 2 encoding
                let pixel = Rgb([
                    (255.99 * color.x.sqrt()) as u8,
                    (255.99 * color.y.sqrt()) as u8,
                    (255.99 * color.z.sqrt()) as u8,
                ]);
                image.put_pixel(i, options.height - 1 - j, pixel);
                progress_bar.inc(1);
            }
        }

        progress_bar.finish();
        info!("Image generated in {:.2?}", start.elapsed());
        image
    }
}

/// Trace a ray through the world, returning the light it carries.
fn ray_color(
    r: &Ray,
    world: &dyn Hittable,
    depth: u32,
    max_depth: u32,
    rng: &mut Pcg32,
) -> Color {
    // The bounce limit cuts off before any intersection work
    if depth >= max_depth {
        return Color::ZERO;
    }

    if let Some(rec) = world.hit(r, Interval::new(0.001, f32::INFINITY)) {
        return match rec.material.scatter(r, &rec, rng) {
            Some(scatter) => {
                scatter.attenuation * ray_color(&scatter.scattered, world, depth + 1, max_depth, rng)
            }
            None => Color::ZERO,
        };
    }

    let unit_direction = r.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}
