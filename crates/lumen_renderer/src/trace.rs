//! Intersection engine: nearest hit plus recursive secondary rays.
//!
//! Secondary rays spawned at a shape are traced against every shape that
//! has not already been bounced off along the current path. Together with the
//! bounce budget in [`RenderConfig::max_bounces`] this keeps recursion finite.

use lumen_core::{Color, Scene};
use lumen_math::Ray;
use rand::RngCore;

use crate::intersect::{Intersect, SurfaceHit};
use crate::material::{respond, Response};
use crate::RenderConfig;

/// A shaded hit: where along the ray, and the color seen there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub t: f64,
    pub color: Color,
}

/// Trace a ray from the camera: nearest hit over the whole scene, shaded,
/// with the full bounce budget. `None` means the ray sees the sky.
pub fn trace(scene: &Scene, ray: &Ray, config: &RenderConfig, rng: &mut dyn RngCore) -> Option<Hit> {
    trace_excluding(scene, ray, &[], config.max_bounces, config, rng)
}

/// Hit `ray` against a single shape, shading it as if the shapes listed in
/// `excluded` were absent from the scene for any secondary rays.
pub fn trace_shape(
    scene: &Scene,
    index: usize,
    ray: &Ray,
    excluded: &[usize],
    bounces_left: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Option<Hit> {
    let surface = scene.shapes()[index].intersect(ray, config.ray_interval(), config.near)?;
    Some(shade(scene, index, ray, &surface, excluded, bounces_left, config, rng))
}

/// Nearest shaded hit over every shape not in `excluded`.
fn trace_excluding(
    scene: &Scene,
    ray: &Ray,
    excluded: &[usize],
    bounces_left: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Option<Hit> {
    let (index, surface) = nearest_surface(scene, ray, excluded, config)?;
    Some(shade(scene, index, ray, &surface, excluded, bounces_left, config, rng))
}

/// Geometric nearest hit, without shading.
fn nearest_surface(
    scene: &Scene,
    ray: &Ray,
    excluded: &[usize],
    config: &RenderConfig,
) -> Option<(usize, SurfaceHit)> {
    let mut ray_t = config.ray_interval();
    let mut nearest = None;

    for (index, shape) in scene.shapes().iter().enumerate() {
        if excluded.contains(&index) {
            continue;
        }
        if let Some(surface) = shape.intersect(ray, ray_t, config.near) {
            ray_t = ray_t.with_max(surface.t);
            nearest = Some((index, surface));
        }
    }

    nearest
}

#[allow(clippy::too_many_arguments)]
fn shade(
    scene: &Scene,
    index: usize,
    ray: &Ray,
    surface: &SurfaceHit,
    excluded: &[usize],
    bounces_left: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Hit {
    let material = scene.shapes()[index].material();
    let color = match respond(material, ray, surface, rng) {
        Response::Diffuse(color) => color,
        // Out of bounces: the surface shows only its own color
        Response::Scatter { .. } if bounces_left == 0 => material.albedo(),
        response @ Response::Scatter { ray: bounced, .. } => {
            let mut path = Vec::with_capacity(excluded.len() + 1);
            path.extend_from_slice(excluded);
            path.push(index);

            let seen = trace_excluding(scene, &bounced, &path, bounces_left - 1, config, rng)
                .map_or(config.sky, |hit| hit.color);
            response.resolve(seen)
        }
    };

    Hit {
        t: surface.t,
        color,
    }
}
