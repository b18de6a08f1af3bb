use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Scene selection for the renderer
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneKind {
    /// Cover scene with a grid of random small spheres
    Cover,
    /// Fixed three-sphere scene with a wide aperture
    ThreeSpheres,
}

/// PPM output flavor
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PpmFormat {
    /// Plain text PPM (P3)
    Ascii,
    /// Binary PPM (P6)
    Binary,
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "lumapath")]
#[command(about = "A deterministic sphere path tracer in Rust")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "200", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "100", help = "Image height in pixels")]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "1", help = "Number of samples per pixel")]
    pub samples_per_pixel: u32,

    /// Seed for the random engine (same seed, same image)
    #[arg(long, default_value = "0", help = "Seed for the random engine (same seed, same image)")]
    pub seed: u32,

    /// Scene to render
    #[arg(long, default_value = "cover", help = "Scene to render")]
    pub scene: SceneKind,

    /// Output file path (omit to write to standard output)
    #[arg(short, long, help = "Output file path (omit to write to standard output)")]
    pub output: Option<String>,

    /// PPM flavor (defaults to binary for files, text for standard output)
    #[arg(long, help = "PPM flavor (defaults to binary for files, text for standard output)")]
    pub format: Option<PpmFormat>,
}
