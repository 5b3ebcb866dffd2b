//! Ray-triangle intersection.
//!
//! Intersects the triangle's supporting plane first, then runs the three
//! inside-outside edge tests against the face normal.

use lumen_core::Mesh;
use lumen_math::{DVec3, Interval, Ray};

/// Intersection parameter of `ray` with triangle `[p0, p1, p2]`.
///
/// Rays closer to parallel with the plane than `parallel_eps` (measured as
/// `|n·d|` with a unit normal) miss, as do degenerate zero-area triangles.
pub fn hit_triangle(
    [p0, p1, p2]: [DVec3; 3],
    ray: &Ray,
    ray_t: Interval,
    parallel_eps: f64,
) -> Option<f64> {
    let normal = (p1 - p0).cross(p2 - p0);
    let unit_normal = normal.normalize_or_zero();

    let n_dot_dir = unit_normal.dot(ray.direction());
    if n_dot_dir.abs() < parallel_eps {
        return None;
    }

    let t = unit_normal.dot(p0 - ray.origin()) / n_dot_dir;
    if t < 0.0 || !ray_t.surrounds(t) {
        return None;
    }

    let p = ray.at(t);
    let inside = [(p0, p1), (p1, p2), (p2, p0)]
        .into_iter()
        .all(|(a, b)| normal.dot((b - a).cross(p - a)) >= 0.0);

    inside.then_some(t)
}

/// Nearest triangle of `mesh` hit by `ray`, as `(t, triangle index)`.
pub fn hit_mesh(mesh: &Mesh, ray: &Ray, ray_t: Interval, parallel_eps: f64) -> Option<(f64, usize)> {
    if !mesh.bounds().hit(ray, ray_t) {
        return None;
    }

    let mut closest: Option<(f64, usize)> = None;
    for tri in 0..mesh.triangle_count() {
        let window = closest.map_or(ray_t, |(t, _)| ray_t.with_max(t));
        if let Some(t) = hit_triangle(mesh.triangle(tri), ray, window, parallel_eps) {
            closest = Some((t, tri));
        }
    }
    closest
}
