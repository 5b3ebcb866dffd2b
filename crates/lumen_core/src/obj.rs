//! Wavefront OBJ loading.
//!
//! Only geometry is read: `v`, `vn` and `f` records. Texture coordinates,
//! groups, materials and smoothing directives are skipped. Polygons with
//! more than three corners are fan-triangulated.

use std::path::Path;

use lumen_math::DVec3;
use thiserror::Error;

use crate::mesh::{Mesh, MeshError};

/// Errors that can occur while loading an OBJ file.
#[derive(Error, Debug)]
pub enum ObjError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("faces mix corners with and without normals (line {0})")]
    InconsistentNormals(usize),

    #[error("invalid mesh: {0}")]
    Mesh(#[from] MeshError),
}

/// Result type for OBJ operations.
pub type ObjResult<T> = Result<T, ObjError>;

/// Where and how large to place the loaded geometry.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub position: DVec3,
    pub scale: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            scale: 1.0,
        }
    }
}

/// Load a mesh from an OBJ file, scaling then translating every vertex.
pub fn load_obj<P: AsRef<Path>>(path: P, placement: Placement) -> ObjResult<Mesh> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let mesh = parse_obj(&content, placement)?;
    log::debug!(
        "Loaded {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Parse OBJ text into a mesh.
pub fn parse_obj(content: &str, placement: Placement) -> ObjResult<Mesh> {
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut faces = Vec::new();
    let mut normal_indices = Vec::new();
    // Set by the first face; every later face must agree
    let mut faces_have_normals: Option<bool> = None;

    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        let mut tokens = raw.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        match keyword {
            "v" => {
                let v = parse_vec3(&mut tokens, line)?;
                vertices.push(v * placement.scale + placement.position);
            }
            "vn" => normals.push(parse_vec3(&mut tokens, line)?),
            "f" => {
                let corners = tokens
                    .map(|token| parse_corner(token, vertices.len(), normals.len(), line))
                    .collect::<ObjResult<Vec<_>>>()?;
                if corners.len() < 3 {
                    return Err(parse_error(line, format!("face has {} corners", corners.len())));
                }

                let with_normals = corners[0].1.is_some();
                if corners.iter().any(|c| c.1.is_some() != with_normals)
                    || *faces_have_normals.get_or_insert(with_normals) != with_normals
                {
                    return Err(ObjError::InconsistentNormals(line));
                }

                for k in 1..corners.len() - 1 {
                    for corner in [corners[0], corners[k], corners[k + 1]] {
                        faces.push(corner.0);
                        if let Some(n) = corner.1 {
                            normal_indices.push(n);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    if faces.is_empty() {
        log::warn!("OBJ data contains no faces");
    }

    Ok(Mesh::new(vertices, faces, normals, normal_indices)?)
}

fn parse_error(line: usize, message: impl Into<String>) -> ObjError {
    ObjError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_vec3<'a>(tokens: &mut impl Iterator<Item = &'a str>, line: usize) -> ObjResult<DVec3> {
    let mut component = || -> ObjResult<f64> {
        let token = tokens
            .next()
            .ok_or_else(|| parse_error(line, "truncated vector record"))?;
        token
            .parse()
            .map_err(|_| parse_error(line, format!("invalid number '{token}'")))
    };
    Ok(DVec3::new(component()?, component()?, component()?))
}

/// Parse one `v`, `v/t`, `v//n` or `v/t/n` corner into zero-based indices.
fn parse_corner(
    token: &str,
    vertex_count: usize,
    normal_count: usize,
    line: usize,
) -> ObjResult<(u32, Option<u32>)> {
    let mut parts = token.split('/');
    let vertex = parts
        .next()
        .ok_or_else(|| parse_error(line, "empty face corner"))?;
    let vertex = resolve_index(vertex, vertex_count, line)?;
    let _texcoord = parts.next();
    let normal = match parts.next() {
        Some(n) if !n.is_empty() => Some(resolve_index(n, normal_count, line)?),
        _ => None,
    };
    Ok((vertex, normal))
}

/// OBJ indices are 1-based; negative values count back from the latest element.
fn resolve_index(token: &str, count: usize, line: usize) -> ObjResult<u32> {
    let raw: i64 = token
        .parse()
        .map_err(|_| parse_error(line, format!("invalid index '{token}'")))?;
    let resolved = match raw {
        0 => None,
        r if r > 0 => Some(r - 1),
        r => Some(count as i64 + r),
    };
    resolved
        .filter(|&i| i >= 0 && (i as usize) < count)
        .map(|i| i as u32)
        .ok_or_else(|| parse_error(line, format!("index {raw} out of range")))
}
