//! Per-sample and per-pixel rendering.
//!
//! Each sub-sample builds its own camera ray, runs it through the
//! intersection engine, scales the hit color by light visibility and falls
//! back to the sky color on a miss. A pixel is the mean of its sub-samples.

use lumen_core::{Color, Scene};
use lumen_math::{Interval, Ray};
use rand::RngCore;

use crate::error::{RenderError, RenderResult};
use crate::sampler::{average, grid_side};
use crate::shadow::mean_occlusion;
use crate::trace::trace;
use crate::Camera;

/// Render configuration.
///
/// Defaults reproduce the reference renders: 480×340, 0.01 pixel size,
/// 4 samples, one bounce.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// World-space size of one pixel on the image plane
    pub pixel_size: f64,
    /// Sub-samples per pixel; must be a perfect square
    pub samples_per_pixel: u32,
    /// Worker threads; `None` uses every available core
    pub workers: Option<usize>,
    /// Self-intersection and degeneracy epsilon
    pub near: f64,
    /// Farthest ray parameter that still counts as a hit
    pub vision_range: f64,
    /// Secondary rays allowed per primary ray
    pub max_bounces: u32,
    /// Color of rays that hit nothing
    pub sky: Color,
    /// Base seed for the per-row random generators
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 340,
            pixel_size: 0.01,
            samples_per_pixel: 4,
            workers: None,
            near: 0.0005,
            vision_range: 9.223_372_036_854_776e18,
            max_bounces: 1,
            sky: Color::new(150.0, 150.0, 255.0),
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Range of ray parameters accepted as hits: `(near, vision_range)`.
    #[inline]
    pub fn ray_interval(&self) -> Interval {
        Interval::new(self.near, self.vision_range)
    }

    /// Reject configurations that cannot produce an image.
    pub fn validate(&self) -> RenderResult<()> {
        let invalid = |msg: String| Err(RenderError::InvalidConfig(msg));

        if self.width == 0 || self.height == 0 {
            return invalid(format!("image size {}x{} is empty", self.width, self.height));
        }
        if grid_side(self.samples_per_pixel).is_none() {
            return invalid(format!(
                "samples per pixel must be a non-zero perfect square, got {}",
                self.samples_per_pixel
            ));
        }
        if self.workers == Some(0) {
            return invalid("worker count must be at least 1".to_string());
        }
        if !(self.pixel_size > 0.0) {
            return invalid(format!("pixel size must be positive, got {}", self.pixel_size));
        }
        if !(self.near >= 0.0 && self.near < self.vision_range) {
            return invalid(format!(
                "near epsilon {} must be non-negative and below vision range {}",
                self.near, self.vision_range
            ));
        }
        Ok(())
    }
}

/// Color of a single camera ray, lit and shadowed.
pub fn sample_color(scene: &Scene, ray: &Ray, config: &RenderConfig, rng: &mut dyn RngCore) -> Color {
    match trace(scene, ray, config, rng) {
        Some(hit) => hit.color * mean_occlusion(scene, ray, hit.t, config),
        None => config.sky,
    }
}

/// Render a single pixel: mean color over the sub-sample `offsets`.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    row: u32,
    col: u32,
    offsets: &[(f64, f64)],
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let size = (config.width, config.height);
    average(offsets.iter().map(|&offset| {
        let ray = camera.get_ray(row, col, offset, size, config.pixel_size);
        sample_color(scene, &ray, config, rng)
    }))
}

/// Floor each channel to an integer and clamp it to [0, 255].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let channel = |c: f64| c.floor().clamp(0.0, 255.0) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}
