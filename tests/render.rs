use glam::Vec3A;
use lumapath::camera::{Camera, CameraConfig, RenderOptions};
use lumapath::hittable::HittableList;
use lumapath::random::Pcg32;
use lumapath::scene;

/// Same seed, same scene, same options: byte-identical images.
#[test]
fn identical_seeds_render_identical_images() {
    let options = RenderOptions {
        width: 40,
        height: 20,
        samples_per_pixel: 2,
        ..RenderOptions::default()
    };
    let world = scene::three_spheres_scene();
    let camera = Camera::new(&scene::three_spheres_camera(2.0));

    let mut first_rng = Pcg32::new(7);
    let first = camera.render(&world, &options, &mut first_rng);

    let mut second_rng = Pcg32::new(7);
    let second = camera.render(&world, &options, &mut second_rng);

    assert_eq!(first.as_raw(), second.as_raw());
}

/// Changing only the seed moves the defocus and jitter draws, so the
/// wide-aperture scene cannot come out identical.
#[test]
fn different_seeds_render_different_images() {
    let options = RenderOptions {
        width: 40,
        height: 20,
        samples_per_pixel: 2,
        ..RenderOptions::default()
    };
    let world = scene::three_spheres_scene();
    let camera = Camera::new(&scene::three_spheres_camera(2.0));

    let mut first_rng = Pcg32::new(7);
    let first = camera.render(&world, &options, &mut first_rng);

    let mut second_rng = Pcg32::new(8);
    let second = camera.render(&world, &options, &mut second_rng);

    assert_ne!(first.as_raw(), second.as_raw());
}

/// A two-pixel sky-only render consumes draws in the documented order:
/// u jitter, v jitter, then the lens disk, per pixel.
#[test]
fn two_pixel_sky_render_replays_the_draw_sequence() {
    let config = CameraConfig::default();
    let camera = Camera::new(&config);
    let world = HittableList::new();
    let options = RenderOptions {
        width: 2,
        height: 1,
        samples_per_pixel: 1,
        ..RenderOptions::default()
    };

    let mut rng = Pcg32::new(42);
    let image = camera.render(&world, &options, &mut rng);

    let replica = Camera::new(&config);
    let mut replay = Pcg32::new(42);
    for i in 0..2u32 {
        let u = (i as f32 + replay.next_f32()) / 2.0;
        let v = replay.next_f32() / 1.0;
        let r = replica.get_ray(u, v, &mut replay);

        let unit_direction = r.direction.normalize();
        let a = 0.5 * (unit_direction.y + 1.0);
        let color = (1.0 - a) * Vec3A::new(1.0, 1.0, 1.0) + a * Vec3A::new(0.5, 0.7, 1.0);

        let expected = [
            (255.99 * color.x.sqrt()) as u8,
            (255.99 * color.y.sqrt()) as u8,
            (255.99 * color.z.sqrt()) as u8,
        ];
        assert_eq!(image.get_pixel(i, 0).0, expected);
    }
}

/// Scene construction and rendering share one stream; running the whole
/// pipeline twice from the same seed reproduces the image.
#[test]
fn cover_render_is_reproducible_end_to_end() {
    let run = || {
        let mut rng = Pcg32::new(0);
        let world = scene::cover_scene(&mut rng);
        let camera = Camera::new(&scene::cover_camera(2.0));
        let options = RenderOptions {
            width: 20,
            height: 10,
            samples_per_pixel: 1,
            ..RenderOptions::default()
        };
        camera.render(&world, &options, &mut rng)
    };

    assert_eq!(run().as_raw(), run().as_raw());
}
