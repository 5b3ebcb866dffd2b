//! Lumen math types.
//!
//! Everything is double precision: scenes mix a radius-100 ground sphere with
//! a 0.0005 self-intersection epsilon, which is too tight for f32.

// Re-export glam's double precision vector for convenience
pub use glam::{dvec3, DVec3};

mod aabb;
mod interval;
mod ray;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;

/// Reflect `v` about the normal `n`.
#[inline]
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - n * 2.0 * v.dot(n)
}

/// Refract `v` through a surface with normal `n` using Snell's law.
///
/// Returns `None` on total internal reflection (the discriminant is not
/// positive), leaving the fallback to the caller.
#[inline]
pub fn refract(v: DVec3, n: DVec3, ni_over_nt: f64) -> Option<DVec3> {
    let unit_v = v.normalize_or_zero();
    let cosine = unit_v.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - cosine * cosine);
    if discriminant > 0.0 {
        Some((unit_v - n * cosine) * ni_over_nt - n * discriminant.sqrt())
    } else {
        None
    }
}
