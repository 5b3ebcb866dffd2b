//! Per-material response at a hit.

use lumen_core::{Color, Material};
use lumen_math::{reflect, refract, DVec3, Ray};
use rand::{Rng, RngCore};

use crate::intersect::SurfaceHit;

/// What a material does with an incoming ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// Final color, no further rays.
    Diffuse(Color),
    /// Follow `ray` and mix what it sees with `albedo`:
    /// `seen * weight + albedo * (1 - weight)`.
    Scatter { ray: Ray, weight: f64, albedo: Color },
}

impl Response {
    /// Mix the color seen along a scattered ray with the surface albedo.
    ///
    /// For `Diffuse` the seen color is ignored.
    pub fn resolve(&self, seen: Color) -> Color {
        match *self {
            Response::Diffuse(color) => color,
            Response::Scatter { weight, albedo, .. } => seen * weight + albedo * (1.0 - weight),
        }
    }
}

/// Evaluate `material` for `ray_in` hitting `hit`.
///
/// Only a fuzzy reflective material draws from `rng`.
pub fn respond(material: &Material, ray_in: &Ray, hit: &SurfaceHit, rng: &mut dyn RngCore) -> Response {
    match *material {
        Material::Lambert { albedo, k_diffuse } => Response::Diffuse(albedo * k_diffuse),
        Material::Reflective {
            albedo,
            k_reflectance,
            fuzz,
        } => {
            let mut direction = reflect(ray_in.direction(), hit.normal);
            if fuzz > 0.0 {
                direction += random_offset(rng) * fuzz;
            }
            Response::Scatter {
                ray: Ray::new(hit.point, direction),
                weight: k_reflectance,
                albedo,
            }
        }
        Material::Dielectric {
            albedo,
            k_refraction,
            k_attenuation,
        } => {
            // Total internal reflection falls back to a mirror bounce
            let direction = refract(ray_in.direction(), hit.normal, 1.0 / k_refraction)
                .unwrap_or_else(|| reflect(ray_in.direction(), hit.normal));
            Response::Scatter {
                ray: Ray::new(hit.point, direction),
                weight: k_attenuation,
                albedo,
            }
        }
    }
}

/// Offset in the unit cube `[0, 1)³`.
///
/// Not centred: fuzz skews reflections toward +x+y+z, which is what the
/// reference renders show.
fn random_offset(rng: &mut dyn RngCore) -> DVec3 {
    DVec3::new(rng.gen(), rng.gen(), rng.gen())
}
