//! Built-in demo scenes.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use lumen_core::{load_obj, parse_obj, Color, Material, Mesh, Placement, PointLight, Scene, Shape};
use lumen_math::DVec3;

/// Unit cube used by the mesh scene when no OBJ file is given.
const CUBE_OBJ: &str = "\
v -0.5 -0.5 -0.5
v  0.5 -0.5 -0.5
v  0.5  0.5 -0.5
v -0.5  0.5 -0.5
v -0.5 -0.5  0.5
v  0.5 -0.5  0.5
v  0.5  0.5  0.5
v -0.5  0.5  0.5
f 1 4 3 2
f 5 6 7 8
f 1 2 6 5
f 4 8 7 3
f 1 5 8 4
f 2 3 7 6
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Ground sphere only
    Ground,
    /// Ground plus red, glass and gold spheres
    Spheres,
    /// Ground plus a triangle mesh
    Mesh,
}

/// Build the scene for `kind`. `mesh_path` replaces the built-in cube in the
/// mesh scene.
pub fn build(kind: SceneKind, mesh_path: Option<&Path>) -> Result<Scene> {
    let mut scene = Scene::new();
    scene.add_shape(ground());
    scene.add_light(light());

    match kind {
        SceneKind::Ground => {}
        SceneKind::Spheres => {
            scene.add_shape(Shape::sphere(
                DVec3::new(0.0, 0.0, 5.0),
                1.0,
                Material::lambert(Color::new(255.0, 0.0, 0.0), 0.9),
            ));
            scene.add_shape(Shape::sphere(
                DVec3::new(-2.5, 0.0, 4.5),
                1.0,
                Material::dielectric(Color::new(150.0, 150.0, 150.0), 1.7, 0.5),
            ));
            scene.add_shape(Shape::sphere(
                DVec3::new(2.5, 0.0, 4.5),
                1.0,
                Material::reflective(Color::new(200.0, 200.0, 0.0), 0.4, 0.7),
            ));
        }
        SceneKind::Mesh => {
            let mesh = load_mesh(mesh_path)?;
            scene.add_shape(Shape::mesh(
                mesh,
                Material::lambert(Color::new(220.0, 120.0, 220.0), 0.9),
            ));
        }
    }

    Ok(scene)
}

fn ground() -> Shape {
    Shape::sphere(
        DVec3::new(0.0, -100.0, 20.0),
        100.0,
        Material::lambert(Color::new(80.0, 80.0, 30.0), 0.8),
    )
}

fn light() -> PointLight {
    PointLight::new(DVec3::new(3.0, 3.0, 3.0), Color::splat(255.0))
}

fn load_mesh(path: Option<&Path>) -> Result<Mesh> {
    let placement = Placement {
        position: DVec3::new(0.0, 0.0, 3.0),
        scale: 1.0,
    };
    match path {
        Some(path) => load_obj(path, placement)
            .with_context(|| format!("failed to load mesh {}", path.display())),
        None => parse_obj(CUBE_OBJ, placement).context("built-in cube is malformed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_scene() {
        let scene = build(SceneKind::Ground, None).unwrap();
        assert_eq!(scene.shapes().len(), 1);
        assert_eq!(scene.lights().len(), 1);
    }

    #[test]
    fn test_spheres_scene() {
        let scene = build(SceneKind::Spheres, None).unwrap();
        let kinds: Vec<_> = scene.shapes().iter().map(Shape::kind).collect();
        assert_eq!(kinds, ["sphere"; 4]);
    }

    #[test]
    fn test_mesh_scene_uses_cube() {
        let scene = build(SceneKind::Mesh, None).unwrap();
        assert_eq!(scene.shapes().len(), 2);
        // Six quads, fan-triangulated
        assert_eq!(scene.triangle_count(), 12);

        let Shape::Mesh { mesh, .. } = &scene.shapes()[1] else {
            panic!("expected a mesh");
        };
        let bounds = mesh.bounds();
        assert!(bounds.z.contains(3.0));
        assert!(bounds.z.min < 2.6 && bounds.z.max > 3.4);
    }

    #[test]
    fn test_missing_mesh_file_is_an_error() {
        let result = build(SceneKind::Mesh, Some(Path::new("/nonexistent/lumen.obj")));
        assert!(result.is_err());
    }
}
