//! # Mesh Module
//!
//! Triangle mesh representation for export.
//!
//! ## Memory Layout
//!
//! - `vertices`: [x0, y0, z0, x1, y1, z1, ...] - 3 floats per vertex
//! - `indices`: [i0, i1, i2, ...] - 3 indices per triangle
//!
//! ## Example
//!
//! ```rust
//! use grille_solid::Mesh;
//!
//! let mut mesh = Mesh::new();
//! let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
//! let v1 = mesh.add_vertex(1.0, 0.0, 0.0);
//! let v2 = mesh.add_vertex(0.0, 1.0, 0.0);
//! mesh.add_triangle(v0, v1, v2);
//!
//! // A lone triangle is not watertight.
//! assert_eq!(mesh.edge_report().boundary_edges, 3);
//! ```

use std::collections::HashMap;

use glam::Vec3;

// =============================================================================
// MESH STRUCT
// =============================================================================

/// Indexed triangle mesh with `f32` positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions: [x0, y0, z0, x1, y1, z1, ...]
    pub vertices: Vec<f32>,

    /// Triangle indices: [i0, i1, i2, ...]
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // BUILDING
    // =========================================================================

    /// Add a vertex and return its index.
    pub fn add_vertex(&mut self, x: f32, y: f32, z: f32) -> u32 {
        let index = self.vertex_count() as u32;
        self.vertices.extend_from_slice(&[x, y, z]);
        index
    }

    /// Add a triangle by vertex indices (counter-clockwise seen from outside).
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Position of vertex `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn vertex(&self, index: u32) -> Vec3 {
        let i = index as usize * 3;
        Vec3::new(self.vertices[i], self.vertices[i + 1], self.vertices[i + 2])
    }

    /// Corner positions of every triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [self.vertex(tri[0]), self.vertex(tri[1]), self.vertex(tri[2])])
    }

    /// Volume enclosed by the surface (divergence theorem).
    ///
    /// Positive for a closed mesh with outward-facing triangles.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| f64::from(a.dot(b.cross(c))) / 6.0)
            .sum()
    }

    // =========================================================================
    // TOPOLOGY
    // =========================================================================

    /// Classify every edge of the mesh.
    ///
    /// A watertight, consistently oriented surface uses each edge exactly
    /// twice, once in each direction.
    #[must_use]
    pub fn edge_report(&self) -> EdgeReport {
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                *directed.entry((a, b)).or_insert(0) += 1;
            }
        }

        let mut report = EdgeReport::default();
        for (&(a, b), &forward) in &directed {
            let backward = directed.get(&(b, a)).copied().unwrap_or(0);
            // Count each undirected edge once, from its smaller endpoint or
            // from the only direction present.
            if backward > 0 && a > b {
                continue;
            }
            match (forward, backward) {
                (1, 1) => {}
                (1, 0) => report.boundary_edges += 1,
                _ => report.non_manifold_edges += 1,
            }
        }
        report
    }

    /// True when every edge is shared by exactly two opposite triangles.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.edge_report().is_closed()
    }
}

/// Edge classification produced by [`Mesh::edge_report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeReport {
    /// Edges used by a single triangle.
    pub boundary_edges: usize,
    /// Edges used more than twice, or twice in the same direction.
    pub non_manifold_edges: usize,
}

impl EdgeReport {
    /// No open and no over-shared edges.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.boundary_edges == 0 && self.non_manifold_edges == 0
    }
}
