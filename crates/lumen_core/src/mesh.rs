//! Indexed triangle mesh.
//!
//! Triangles are not stored as structs: `faces` is a flat array where every
//! three indices form a triangle, and `normal_indices` runs parallel to it,
//! one normal index per triangle corner.

use lumen_math::{Aabb, DVec3};
use thiserror::Error;

/// Errors raised while assembling a mesh.
#[derive(Error, Debug, PartialEq)]
pub enum MeshError {
    #[error("face index count {0} is not a multiple of 3")]
    RaggedFaces(usize),

    #[error("vertex index {index} out of range (mesh has {count} vertices)")]
    VertexOutOfRange { index: u32, count: usize },

    #[error("normal index {index} out of range (mesh has {count} normals)")]
    NormalOutOfRange { index: u32, count: usize },

    #[error("{normal_indices} normal indices do not match {faces} face indices")]
    NormalIndexMismatch { faces: usize, normal_indices: usize },
}

/// An immutable triangle mesh.
#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    faces: Vec<u32>,
    normals: Vec<DVec3>,
    normal_indices: Vec<u32>,
    bounds: Aabb,
}

impl Mesh {
    /// Build a mesh, validating every index up front.
    ///
    /// `normal_indices` must either be empty (the mesh is flat shaded from its
    /// face normals) or have exactly one entry per entry of `faces`.
    pub fn new(
        vertices: Vec<DVec3>,
        faces: Vec<u32>,
        normals: Vec<DVec3>,
        normal_indices: Vec<u32>,
    ) -> Result<Self, MeshError> {
        if faces.len() % 3 != 0 {
            return Err(MeshError::RaggedFaces(faces.len()));
        }
        if !normal_indices.is_empty() && normal_indices.len() != faces.len() {
            return Err(MeshError::NormalIndexMismatch {
                faces: faces.len(),
                normal_indices: normal_indices.len(),
            });
        }
        if let Some(&index) = faces.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(MeshError::VertexOutOfRange {
                index,
                count: vertices.len(),
            });
        }
        if let Some(&index) = normal_indices.iter().find(|&&i| i as usize >= normals.len()) {
            return Err(MeshError::NormalOutOfRange {
                index,
                count: normals.len(),
            });
        }

        let bounds = Aabb::enclosing(&vertices);
        Ok(Self {
            vertices,
            faces,
            normals,
            normal_indices,
            bounds,
        })
    }

    /// Vertex positions.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Flat vertex index triples.
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Bounding box of all vertices.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Check if the mesh carries per-corner normals.
    pub fn has_normals(&self) -> bool {
        !self.normal_indices.is_empty()
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.faces.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Corner positions of triangle `tri`.
    #[inline]
    pub fn triangle(&self, tri: usize) -> [DVec3; 3] {
        let base = tri * 3;
        [
            self.vertices[self.faces[base] as usize],
            self.vertices[self.faces[base + 1] as usize],
            self.vertices[self.faces[base + 2] as usize],
        ]
    }

    /// Shading normal for triangle `tri`: the normalized mean of its three
    /// corner normals, or the face normal when the mesh has none.
    pub fn triangle_normal(&self, tri: usize) -> DVec3 {
        if !self.has_normals() {
            let [p0, p1, p2] = self.triangle(tri);
            return (p1 - p0).cross(p2 - p0).normalize_or_zero();
        }
        let base = tri * 3;
        let sum: DVec3 = self.normal_indices[base..base + 3]
            .iter()
            .map(|&n| self.normals[n as usize])
            .sum();
        (sum / 3.0).normalize_or_zero()
    }
}
