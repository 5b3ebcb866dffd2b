//! Lumen renderer - CPU recursive ray tracing
//!
//! Shoots jittered camera rays through every pixel, finds the nearest
//! surface, follows reflected and refracted rays for a bounded number of
//! bounces and scales the result by point-light visibility. Rows render in
//! parallel on a rayon pool into an 8-bit RGB [`Image`].

mod camera;
mod error;
mod image;
mod intersect;
mod material;
mod renderer;
mod sampler;
mod scheduler;
mod shadow;
mod sphere;
mod trace;
mod triangle;

pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use image::{Image, PpmError};
pub use intersect::{Intersect, SurfaceHit};
pub use material::{respond, Response};
pub use renderer::{color_to_rgb, render_pixel, sample_color, RenderConfig};
pub use sampler::{average, grid_side, jitter_offsets};
pub use scheduler::{render, row_seed, worker_count};
pub use shadow::{mean_occlusion, occlusion};
pub use sphere::{hit_sphere, sphere_normal};
pub use trace::{trace, trace_shape, Hit};
pub use triangle::{hit_mesh, hit_triangle};

/// Re-export scene types from lumen_core
pub use lumen_core::{Color, Material, PointLight, Scene, Shape};
/// Re-export math types from lumen_math
pub use lumen_math::{DVec3, Interval, Ray};
