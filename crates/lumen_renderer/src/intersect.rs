//! The single geometric intersection contract shared by every shape.
//!
//! Primary rays, secondary (reflected/refracted) rays and shadow rays all go
//! through [`Intersect::intersect`].

use lumen_core::Shape;
use lumen_math::{DVec3, Interval, Ray};

use crate::sphere::{hit_sphere, sphere_normal};
use crate::triangle::hit_mesh;

/// Where a ray meets a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Ray parameter of the hit
    pub t: f64,
    /// Hit point, `ray.at(t)`
    pub point: DVec3,
    /// Outward unit shading normal
    pub normal: DVec3,
}

/// Trait for geometry that can be hit by rays.
pub trait Intersect {
    /// Nearest hit with `t` strictly inside `ray_t`.
    ///
    /// `near` doubles as the degeneracy epsilon: sphere discriminants and
    /// triangle `|n·d|` at or below it count as misses.
    fn intersect(&self, ray: &Ray, ray_t: Interval, near: f64) -> Option<SurfaceHit>;
}

impl Intersect for Shape {
    fn intersect(&self, ray: &Ray, ray_t: Interval, near: f64) -> Option<SurfaceHit> {
        match self {
            Shape::Sphere { center, radius, .. } => {
                let t = hit_sphere(*center, *radius, ray, ray_t, near)?;
                let point = ray.at(t);
                Some(SurfaceHit {
                    t,
                    point,
                    normal: sphere_normal(*center, point),
                })
            }
            Shape::Mesh { mesh, .. } => {
                let (t, tri) = hit_mesh(mesh, ray, ray_t, near)?;
                Some(SurfaceHit {
                    t,
                    point: ray.at(t),
                    normal: mesh.triangle_normal(tri),
                })
            }
        }
    }
}
