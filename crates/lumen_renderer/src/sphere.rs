//! Analytic ray-sphere intersection.

use lumen_math::{DVec3, Interval, Ray};

/// Nearest intersection parameter of `ray` with a sphere.
///
/// Solves `|O + tD - C|² = r²`. A discriminant at or below `near` counts as a
/// miss, which also absorbs tangent rays. Only the smaller root is considered:
/// when it falls outside `ray_t` the sphere is missed, so a ray leaving a
/// sphere's own surface never hits that sphere again.
pub fn hit_sphere(center: DVec3, radius: f64, ray: &Ray, ray_t: Interval, near: f64) -> Option<f64> {
    let oc = ray.origin() - center;
    let a = ray.direction().length_squared();
    let b = 2.0 * oc.dot(ray.direction());
    let c = oc.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= near {
        return None;
    }

    let root = (-b - discriminant.sqrt()) / (2.0 * a);
    ray_t.surrounds(root).then_some(root)
}

/// Outward unit normal at `point` on the sphere surface.
#[inline]
pub fn sphere_normal(center: DVec3, point: DVec3) -> DVec3 {
    (point - center).normalize_or_zero()
}
