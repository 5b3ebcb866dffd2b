//! Row-parallel rendering.
//!
//! Rows are independent units of work. A dedicated rayon pool splits the
//! image buffer into one disjoint slice per row and work-steals over them,
//! so workers never share mutable state. Each row draws its randomness from
//! its own generator seeded from `(seed, row)`, which makes the output a
//! function of the seed alone, whatever the worker count.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use lumen_core::Scene;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::error::{RenderError, RenderResult};
use crate::image::Image;
use crate::renderer::{color_to_rgb, render_pixel};
use crate::sampler::jitter_offsets;
use crate::{Camera, RenderConfig};

/// Seed for the generator of a single row.
pub fn row_seed(seed: u64, row: u32) -> u64 {
    seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Number of worker threads `config` asks for.
pub fn worker_count(config: &RenderConfig) -> usize {
    config
        .workers
        .unwrap_or_else(|| std::thread::available_parallelism().map_or(1, |n| n.get()))
}

/// Render `scene` through `camera` into a `width × height` image.
///
/// Fails before any work starts if `config` is invalid, and fails as a
/// whole if any row panics.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> RenderResult<Image> {
    config.validate()?;

    log::info!(
        "Rendering {}x{} @ {} spp, {} shapes ({} triangles), {} lights",
        config.width,
        config.height,
        config.samples_per_pixel,
        scene.shapes().len(),
        scene.triangle_count(),
        scene.lights().len()
    );
    let start = Instant::now();

    let offsets = jitter_offsets(config.samples_per_pixel);
    let image = render_rows(config, |row, pixels| {
        let mut rng = StdRng::seed_from_u64(row_seed(config.seed, row));
        for (col, rgb) in pixels.chunks_exact_mut(3).enumerate() {
            let color = render_pixel(scene, camera, row, col as u32, &offsets, config, &mut rng);
            rgb.copy_from_slice(&color_to_rgb(color));
        }
    })?;

    log::info!("Rendered in {:.2?}", start.elapsed());
    Ok(image)
}

/// Run `render_row` over every row of a fresh image on a pool of
/// [`worker_count`] threads.
fn render_rows<F>(config: &RenderConfig, render_row: F) -> RenderResult<Image>
where
    F: Fn(u32, &mut [u8]) + Sync,
{
    let workers = worker_count(config);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("lumen-worker-{i}"))
        .build()?;

    let mut image = Image::new(config.width, config.height);
    let stride = image.row_stride();
    let total = config.height as usize;
    let step = (total / 10).max(1);
    let done = AtomicUsize::new(0);

    log::debug!("Starting {} rows on {} workers", total, workers);

    pool.install(|| {
        image
            .data_mut()
            .par_chunks_mut(stride)
            .enumerate()
            .try_for_each(|(row, pixels)| -> RenderResult<()> {
                panic::catch_unwind(AssertUnwindSafe(|| render_row(row as u32, pixels)))
                    .map_err(|_| RenderError::RowFailed { row })?;

                let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
                if finished % step == 0 || finished == total {
                    log::debug!("{}/{} rows done", finished, total);
                }
                Ok(())
            })
    })?;

    Ok(image)
}
