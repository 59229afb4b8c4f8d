//! Triangle mesh storage and wireframe edge extraction.
//!
//! A [`Mesh`] owns homogeneous vertex positions and a triangle index list,
//! validated once at construction. The unique edge list used by wireframe
//! rendering is derived data, rebuilt whenever a mesh is constructed, and
//! immutable afterwards.

use std::path::Path;

use crate::math::vec4::Vec4;

/// An undirected edge between two vertex indices, stored canonically with
/// `a < b` so that (a, b) and (b, a) collapse to one entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: u32,
    pub b: u32,
}

impl Edge {
    fn canonical(v0: u32, v1: u32) -> Self {
        Self {
            a: v0.min(v1),
            b: v0.max(v1),
        }
    }
}

/// Mesh construction and loading errors.
///
/// Meshes are validated once here so the per-draw hot path can index
/// vertices without bounds checks on every access.
#[derive(thiserror::Error, Debug)]
pub enum MeshError {
    /// The index list does not form whole triangles.
    #[error("index count {0} is not a multiple of 3")]
    IndexCountNotTriangles(usize),

    /// An index refers past the end of the vertex list.
    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },

    /// The OBJ file could not be loaded.
    #[error("failed to load OBJ: {0}")]
    Load(#[from] tobj::LoadError),
}

/// A triangle mesh with a derived unique-edge list.
#[derive(Debug)]
pub struct Mesh {
    vertices: Vec<Vec4>,
    indices: Vec<u32>,
    edges: Vec<Edge>,
}

impl Mesh {
    /// Builds a mesh from homogeneous vertex positions (w = 1) and a
    /// triangle index list.
    ///
    /// Validates that the indices form whole triangles and stay in range,
    /// then derives the unique edge list for wireframe rendering.
    pub fn new(vertices: Vec<Vec4>, indices: Vec<u32>) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::IndexCountNotTriangles(indices.len()));
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(MeshError::IndexOutOfBounds {
                index,
                vertex_count: vertices.len(),
            });
        }

        let edges = build_unique_edges(&indices);
        Ok(Self {
            vertices,
            indices,
            edges,
        })
    }

    /// Loads a mesh from an OBJ file, merging all models in the file.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self, MeshError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        for model in &models {
            let base = vertices.len() as u32;
            for position in model.mesh.positions.chunks_exact(3) {
                vertices.push(Vec4::point(position[0], position[1], position[2]));
            }
            indices.extend(model.mesh.indices.iter().map(|&i| base + i));
        }

        let mesh = Self::new(vertices, indices)?;
        log::info!(
            "loaded {}: {} vertices, {} triangles, {} unique edges",
            path.display(),
            mesh.vertices.len(),
            mesh.triangle_count(),
            mesh.edge_count()
        );
        Ok(mesh)
    }

    /// The canonical unit cube: 8 vertices, 12 triangles, 18 unique edges.
    ///
    /// Faces are wound so that outward-facing triangles survive the
    /// pipeline's back-face cull.
    pub fn cube() -> Self {
        let indices = CUBE_INDICES.to_vec();
        let edges = build_unique_edges(&indices);
        Self {
            vertices: CUBE_VERTICES.to_vec(),
            indices,
            edges,
        }
    }

    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Unique undirected edges in first-discovery order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Derives the unique undirected edge list of a triangle index list.
///
/// Edges appear in first-discovery order, scanning triangles front to back
/// and each triangle's edges in (v0,v1), (v1,v2), (v2,v0) order. Dedup is a
/// linear scan of the accumulated list: O(E^2) in the number of unique
/// edges, acceptable for the small meshes this renderer targets.
fn build_unique_edges(indices: &[u32]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = Vec::new();

    for triangle in indices.chunks_exact(3) {
        let candidates = [
            Edge::canonical(triangle[0], triangle[1]),
            Edge::canonical(triangle[1], triangle[2]),
            Edge::canonical(triangle[2], triangle[0]),
        ];
        for edge in candidates {
            if !edges.contains(&edge) {
                edges.push(edge);
            }
        }
    }

    edges
}

const CUBE_VERTICES: [Vec4; 8] = [
    Vec4::point(-1.0, -1.0, -1.0),
    Vec4::point(1.0, -1.0, -1.0),
    Vec4::point(1.0, 1.0, -1.0),
    Vec4::point(-1.0, 1.0, -1.0),
    Vec4::point(-1.0, -1.0, 1.0),
    Vec4::point(1.0, -1.0, 1.0),
    Vec4::point(1.0, 1.0, 1.0),
    Vec4::point(-1.0, 1.0, 1.0),
];

const CUBE_INDICES: [u32; 36] = [
    // +Z face
    4, 6, 5, 4, 7, 6, //
    // -Z face
    1, 3, 0, 1, 2, 3, //
    // -X face
    0, 7, 4, 0, 3, 7, //
    // +X face
    5, 2, 1, 5, 6, 2, //
    // +Y face
    3, 6, 7, 3, 2, 6, //
    // -Y face
    0, 5, 1, 0, 4, 5,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_edge_is_deduplicated_in_discovery_order() {
        let vertices = vec![
            Vec4::point(0.0, 0.0, 0.0),
            Vec4::point(1.0, 0.0, 0.0),
            Vec4::point(0.0, 1.0, 0.0),
            Vec4::point(1.0, 1.0, 0.0),
        ];
        let mesh = Mesh::new(vertices, vec![0, 1, 2, 1, 2, 3]).unwrap();

        // Edge (1,2) is shared by both triangles and appears once
        assert_eq!(
            mesh.edges(),
            &[
                Edge { a: 0, b: 1 },
                Edge { a: 1, b: 2 },
                Edge { a: 0, b: 2 },
                Edge { a: 2, b: 3 },
                Edge { a: 1, b: 3 },
            ]
        );
    }

    #[test]
    fn reversed_edges_collapse_to_canonical_form() {
        let vertices = vec![
            Vec4::point(0.0, 0.0, 0.0),
            Vec4::point(1.0, 0.0, 0.0),
            Vec4::point(0.0, 1.0, 0.0),
        ];
        let mesh = Mesh::new(vertices, vec![2, 1, 0]).unwrap();

        assert_eq!(
            mesh.edges(),
            &[
                Edge { a: 1, b: 2 },
                Edge { a: 0, b: 1 },
                Edge { a: 0, b: 2 },
            ]
        );
    }

    #[test]
    fn cube_has_twelve_triangles_and_eighteen_edges() {
        let cube = Mesh::cube();
        assert_eq!(cube.triangle_count(), 12);
        // 12 cube edges plus 6 face diagonals
        assert_eq!(cube.edge_count(), 18);
    }

    #[test]
    fn rejects_partial_triangles() {
        let vertices = vec![Vec4::point(0.0, 0.0, 0.0); 3];
        let err = Mesh::new(vertices, vec![0, 1]).unwrap_err();
        assert!(matches!(err, MeshError::IndexCountNotTriangles(2)));
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let vertices = vec![Vec4::point(0.0, 0.0, 0.0); 3];
        let err = Mesh::new(vertices, vec![0, 1, 3]).unwrap_err();
        assert!(matches!(
            err,
            MeshError::IndexOutOfBounds {
                index: 3,
                vertex_count: 3
            }
        ));
    }
}
