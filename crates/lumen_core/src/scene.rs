//! Scene description: materials, shapes and lights.
//!
//! A scene is built once before rendering and then only read. Every worker
//! thread borrows the same `&Scene`.

use lumen_math::DVec3;

use crate::mesh::Mesh;

/// RGB color on the 0-255 scale.
pub type Color = DVec3;

/// Surface material.
///
/// Each variant carries exactly the parameters it needs; shading matches on
/// the variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// Diffuse only. Shades to `albedo * k_diffuse`.
    Lambert { albedo: Color, k_diffuse: f64 },

    /// Mirror-like metal. Spawns one reflected ray, jittered by `fuzz`, and
    /// mixes what it sees with `albedo` by `k_reflectance`.
    Reflective {
        albedo: Color,
        k_reflectance: f64,
        fuzz: f64,
    },

    /// Glass. Spawns one refracted ray (reflected on total internal
    /// reflection) and mixes what it sees with `albedo` by `k_attenuation`.
    Dielectric {
        albedo: Color,
        k_refraction: f64,
        k_attenuation: f64,
    },
}

impl Material {
    /// Create a diffuse material.
    pub fn lambert(albedo: Color, k_diffuse: f64) -> Self {
        Self::Lambert { albedo, k_diffuse }
    }

    /// Create a reflective material.
    ///
    /// - `k_reflectance`: share of the reflected color, 1.0 = perfect mirror
    /// - `fuzz`: magnitude of the random offset added to the reflected direction
    pub fn reflective(albedo: Color, k_reflectance: f64, fuzz: f64) -> Self {
        Self::Reflective {
            albedo,
            k_reflectance,
            fuzz: fuzz.max(0.0),
        }
    }

    /// Create a dielectric material.
    ///
    /// - `k_refraction`: index of refraction (1.0 = air, 1.5 = glass)
    /// - `k_attenuation`: share of the refracted color
    pub fn dielectric(albedo: Color, k_refraction: f64, k_attenuation: f64) -> Self {
        Self::Dielectric {
            albedo,
            k_refraction,
            k_attenuation,
        }
    }

    /// Base color before lighting.
    pub fn albedo(&self) -> Color {
        match *self {
            Self::Lambert { albedo, .. }
            | Self::Reflective { albedo, .. }
            | Self::Dielectric { albedo, .. } => albedo,
        }
    }
}

/// Renderable geometry.
#[derive(Clone, Debug)]
pub enum Shape {
    Sphere {
        center: DVec3,
        radius: f64,
        material: Material,
    },
    Mesh {
        mesh: Mesh,
        material: Material,
    },
}

impl Shape {
    /// Create a sphere. Negative radii are clamped to zero.
    pub fn sphere(center: DVec3, radius: f64, material: Material) -> Self {
        Self::Sphere {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Wrap a mesh with a material.
    pub fn mesh(mesh: Mesh, material: Material) -> Self {
        Self::Mesh { mesh, material }
    }

    /// Material shared by the whole shape.
    pub fn material(&self) -> &Material {
        match self {
            Self::Sphere { material, .. } | Self::Mesh { material, .. } => material,
        }
    }

    /// Short human readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Mesh { .. } => "mesh",
        }
    }
}

/// A point light. Intensity does not fall off with distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: DVec3,
    pub color: Color,
}

impl PointLight {
    pub fn new(position: DVec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// Ordered shapes and lights.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    lights: Vec<PointLight>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape (builder style).
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Add a light (builder style).
    pub fn with_light(mut self, light: PointLight) -> Self {
        self.lights.push(light);
        self
    }

    /// Add a shape.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Add a light.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Total triangles across all meshes.
    pub fn triangle_count(&self) -> usize {
        self.shapes
            .iter()
            .map(|shape| match shape {
                Shape::Mesh { mesh, .. } => mesh.triangle_count(),
                Shape::Sphere { .. } => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_albedo() {
        let albedo = Color::new(200.0, 200.0, 0.0);
        assert_eq!(Material::lambert(albedo, 0.8).albedo(), albedo);
        assert_eq!(Material::reflective(albedo, 0.4, 0.7).albedo(), albedo);
        assert_eq!(Material::dielectric(albedo, 1.7, 0.5).albedo(), albedo);
    }

    #[test]
    fn test_negative_fuzz_is_clamped() {
        let m = Material::reflective(Color::ONE, 0.5, -1.0);
        assert!(matches!(m, Material::Reflective { fuzz, .. } if fuzz == 0.0));
    }

    #[test]
    fn test_scene_builder() {
        let mesh = Mesh::new(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![0, 1, 2],
            vec![],
            vec![],
        )
        .unwrap();
        let scene = Scene::new()
            .with_shape(Shape::sphere(
                DVec3::new(0.0, -100.0, 20.0),
                100.0,
                Material::lambert(Color::new(80.0, 80.0, 30.0), 0.8),
            ))
            .with_shape(Shape::mesh(mesh, Material::lambert(Color::ONE, 1.0)))
            .with_light(PointLight::new(DVec3::splat(3.0), Color::splat(255.0)));

        assert_eq!(scene.shapes().len(), 2);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.triangle_count(), 1);
        assert_eq!(scene.shapes()[0].kind(), "sphere");
        assert_eq!(scene.shapes()[1].kind(), "mesh");
    }

    #[test]
    fn test_sphere_radius_clamped() {
        let s = Shape::sphere(DVec3::ZERO, -2.0, Material::lambert(Color::ONE, 1.0));
        assert!(matches!(s, Shape::Sphere { radius, .. } if radius == 0.0));
    }
}
