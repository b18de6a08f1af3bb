//! Lumapath path tracer
//!
//! A deterministic, single-threaded Monte Carlo path tracer for sphere
//! scenes. Every random decision comes from one explicitly threaded PCG32
//! stream, so a seed pins down the output image byte for byte.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ray;
pub mod sphere;
pub mod hittable;
pub mod interval;
pub mod camera;
pub mod random;
pub mod material;
pub mod scene;
