//! Light visibility.
//!
//! The softening term `1 + dot(shadow_dir, view_dir)` is not physically
//! derived; it dims points whose light arrives from the viewer's side and is
//! kept because existing renders depend on it.

use lumen_core::{PointLight, Scene};
use lumen_math::Ray;

use crate::intersect::Intersect;
use crate::RenderConfig;

/// Visibility of `light` from the point `primary.at(t)`, in `[0, 1]`.
///
/// Any shape between the point and the light gives full shadow (0).
pub fn occlusion(scene: &Scene, primary: &Ray, t: f64, light: &PointLight, config: &RenderConfig) -> f64 {
    let point = primary.at(t);
    let to_light = light.position - point;
    let shadow_ray = Ray::new(point, to_light);
    let ray_t = config.ray_interval();
    let ray_t = ray_t.with_max(ray_t.max.min(to_light.length()));

    let blocked = scene
        .shapes()
        .iter()
        .any(|shape| shape.intersect(&shadow_ray, ray_t, config.near).is_some());
    if blocked {
        return 0.0;
    }

    (1.0 + shadow_ray.direction().dot(primary.direction())).clamp(0.0, 1.0)
}

/// Mean visibility over every light in the scene. An unlit scene is fully
/// visible.
pub fn mean_occlusion(scene: &Scene, primary: &Ray, t: f64, config: &RenderConfig) -> f64 {
    let lights = scene.lights();
    if lights.is_empty() {
        return 1.0;
    }
    let total: f64 = lights
        .iter()
        .map(|light| occlusion(scene, primary, t, light, config))
        .sum();
    total / lights.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Color, Material, Shape};
    use lumen_math::DVec3;

    fn white_light(position: DVec3) -> PointLight {
        PointLight::new(position, Color::splat(255.0))
    }

    fn occluder() -> Shape {
        Shape::sphere(
            DVec3::new(0.0, 0.0, 5.0),
            1.0,
            Material::lambert(Color::splat(100.0), 1.0),
        )
    }

    /// Primary ray looking straight down onto the origin.
    fn looking_down() -> (Ray, f64) {
        (Ray::new(DVec3::new(0.0, 10.0, 0.0), -DVec3::Y), 10.0)
    }

    #[test]
    fn test_light_behind_occluder_is_full_shadow() {
        let scene = Scene::new().with_shape(occluder());
        let (primary, t) = looking_down();
        let light = white_light(DVec3::new(0.0, 0.0, 10.0));

        assert_eq!(occlusion(&scene, &primary, t, &light, &RenderConfig::default()), 0.0);
    }

    #[test]
    fn test_unobstructed_light_is_visible() {
        let scene = Scene::new().with_shape(occluder());
        let (primary, t) = looking_down();
        let light = white_light(DVec3::new(0.0, 0.0, -10.0));

        let factor = occlusion(&scene, &primary, t, &light, &RenderConfig::default());
        // Shadow ray is perpendicular to the view ray
        assert!((factor - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_occluder_past_light_does_not_shadow() {
        let scene = Scene::new().with_shape(occluder());
        let (primary, t) = looking_down();
        let light = white_light(DVec3::new(0.0, 0.0, 2.0));

        assert!(occlusion(&scene, &primary, t, &light, &RenderConfig::default()) > 0.0);
    }

    #[test]
    fn test_softening_dims_light_from_viewer_side() {
        let scene = Scene::new();
        let (primary, t) = looking_down();
        let overhead = white_light(DVec3::new(0.0, 5.0, 0.0));
        let oblique = white_light(DVec3::new(5.0, 5.0, 0.0));
        let config = RenderConfig::default();

        // Light straight back toward the viewer: 1 + (-1)
        assert!(occlusion(&scene, &primary, t, &overhead, &config).abs() < 1e-12);
        let expected = 1.0 - std::f64::consts::FRAC_1_SQRT_2;
        assert!((occlusion(&scene, &primary, t, &oblique, &config) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_factor_is_capped_at_one() {
        let scene = Scene::new();
        let (primary, t) = looking_down();
        // Light beyond the point along the view direction
        let below = white_light(DVec3::new(0.0, -5.0, 0.0));

        assert_eq!(occlusion(&scene, &primary, t, &below, &RenderConfig::default()), 1.0);
    }

    #[test]
    fn test_mesh_between_point_and_light_shadows() {
        let triangle = lumen_core::Mesh::new(
            vec![
                DVec3::new(-5.0, -5.0, 5.0),
                DVec3::new(5.0, -5.0, 5.0),
                DVec3::new(0.0, 5.0, 5.0),
            ],
            vec![0, 1, 2],
            vec![],
            vec![],
        )
        .unwrap();
        let scene = Scene::new().with_shape(Shape::mesh(
            triangle,
            Material::lambert(Color::splat(100.0), 1.0),
        ));
        let (primary, t) = looking_down();
        let config = RenderConfig::default();

        let behind = white_light(DVec3::new(0.0, 0.0, 10.0));
        assert_eq!(occlusion(&scene, &primary, t, &behind, &config), 0.0);

        let in_front = white_light(DVec3::new(0.0, 0.0, -10.0));
        assert!(occlusion(&scene, &primary, t, &in_front, &config) > 0.0);
    }

    #[test]
    fn test_mean_over_lights() {
        let scene = Scene::new()
            .with_shape(occluder())
            .with_light(white_light(DVec3::new(0.0, 0.0, 10.0)))
            .with_light(white_light(DVec3::new(0.0, 0.0, -10.0)));
        let (primary, t) = looking_down();

        let mean = mean_occlusion(&scene, &primary, t, &RenderConfig::default());
        assert!((mean - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_no_lights_is_fully_visible() {
        let (primary, t) = looking_down();
        assert_eq!(mean_occlusion(&Scene::new(), &primary, t, &RenderConfig::default()), 1.0);
    }
}
