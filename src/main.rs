use clap::Parser;
use log::{error, info};

mod cli;
mod logger;
mod output;

use cli::{Args, SceneKind};
use logger::init_logger;
use lumapath::camera::{Camera, RenderOptions};
use lumapath::random::Pcg32;
use lumapath::scene;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("Lumapath - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!(
        "Image resolution: {}x{}, samples per pixel: {}",
        args.width, args.height, args.samples_per_pixel
    );

    // Scene construction draws precede all render draws
    let mut rng = Pcg32::new(args.seed);
    let aspect_ratio = args.width as f32 / args.height as f32;

    let (world, camera_config) = match args.scene {
        SceneKind::Cover => (
            scene::cover_scene(&mut rng),
            scene::cover_camera(aspect_ratio),
        ),
        SceneKind::ThreeSpheres => (
            scene::three_spheres_scene(),
            scene::three_spheres_camera(aspect_ratio),
        ),
    };
    let camera = Camera::new(&camera_config);

    let options = RenderOptions {
        width: args.width,
        height: args.height,
        samples_per_pixel: args.samples_per_pixel,
        ..RenderOptions::default()
    };
    let image = camera.render(&world, &options, &mut rng);

    if let Err(e) = output::save_image(&image, args.output.as_deref(), args.format) {
        error!("Failed to write image: {}", e);
        std::process::exit(1);
    }
}
