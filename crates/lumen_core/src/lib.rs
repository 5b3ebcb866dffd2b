//! Lumen Core - scene description for the ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Shape`, `Material`, `PointLight`
//! - **Meshes**: `Mesh` with flat triangle index arrays, plus OBJ loading
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{load_obj, Material, Placement, Scene, Shape};
//!
//! let cube = load_obj("meshes/cube.obj", Placement::default())?;
//! let scene = Scene::new().with_shape(Shape::mesh(cube, Material::lambert(albedo, 0.9)));
//! ```

pub mod mesh;
pub mod obj;
pub mod scene;

// Re-export commonly used types
pub use mesh::{Mesh, MeshError};
pub use obj::{load_obj, parse_obj, ObjError, Placement};
pub use scene::{Color, Material, PointLight, Scene, Shape};
