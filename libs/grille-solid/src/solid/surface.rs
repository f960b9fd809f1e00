//! Boundary extraction.
//!
//! Every face between a filled cell and an empty one (or the outside) becomes
//! a quad of two triangles, wound counter-clockwise when seen from outside.
//! Vertices are welded by grid node, so neighbouring quads share their edges
//! exactly.

use tracing::debug;

use super::{positions, Solid};
use crate::error::{SolidError, SolidResult};
use crate::mesh::Mesh;

const UNSET: u32 = u32::MAX;

impl Solid {
    /// Triangulate the boundary of the solid.
    ///
    /// Fails with [`SolidError::NonManifold`] if the surface has open or
    /// over-shared edges. This happens when two parts touch along a single
    /// edge. The empty solid yields an empty mesh.
    pub fn to_mesh(&self) -> SolidResult<Mesh> {
        let dims = self.dims();
        let nodes = dims.map(|n| n + 1);
        let mut node_vertex = vec![UNSET; nodes.iter().product()];
        let mut mesh = Mesh::new();

        for pos in positions(dims).filter(|&pos| self.cell(pos)) {
            for axis in 0..3 {
                for upper in [false, true] {
                    if self.neighbour_filled(pos, axis, upper) {
                        continue;
                    }
                    let quad = face_nodes(pos, axis, upper)
                        .map(|node| self.vertex_for(&mut mesh, &mut node_vertex, nodes, node));
                    mesh.add_triangle(quad[0], quad[1], quad[2]);
                    mesh.add_triangle(quad[0], quad[2], quad[3]);
                }
            }
        }

        let report = mesh.edge_report();
        debug!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            boundary_edges = report.boundary_edges,
            non_manifold_edges = report.non_manifold_edges,
            "surface extracted"
        );
        if !report.is_closed() {
            return Err(SolidError::NonManifold {
                boundary_edges: report.boundary_edges,
                non_manifold_edges: report.non_manifold_edges,
            });
        }
        Ok(mesh)
    }

    fn neighbour_filled(&self, pos: [usize; 3], axis: usize, upper: bool) -> bool {
        let mut next = pos;
        if upper {
            if pos[axis] + 1 >= self.dims()[axis] {
                return false;
            }
            next[axis] += 1;
        } else {
            if pos[axis] == 0 {
                return false;
            }
            next[axis] -= 1;
        }
        self.cell(next)
    }

    fn vertex_for(
        &self,
        mesh: &mut Mesh,
        node_vertex: &mut [u32],
        nodes: [usize; 3],
        node: [usize; 3],
    ) -> u32 {
        let slot = node[0] + nodes[0] * (node[1] + nodes[1] * node[2]);
        if node_vertex[slot] == UNSET {
            node_vertex[slot] = mesh.add_vertex(
                self.axes[0][node[0]] as f32,
                self.axes[1][node[1]] as f32,
                self.axes[2][node[2]] as f32,
            );
        }
        node_vertex[slot]
    }
}

/// Grid nodes of one cell face, ordered so the normal points away from the cell.
///
/// With `(b, c)` the two axes following `axis` cyclically, the face on the
/// upper side runs `(b0,c0) → (b1,c0) → (b1,c1) → (b0,c1)`. The cross product
/// of its edges is `b × c = axis`. The lower face uses the reverse order.
fn face_nodes(pos: [usize; 3], axis: usize, upper: bool) -> [[usize; 3]; 4] {
    let b = (axis + 1) % 3;
    let c = (axis + 2) % 3;
    let corner = |db: usize, dc: usize| {
        let mut node = pos;
        node[axis] += usize::from(upper);
        node[b] += db;
        node[c] += dc;
        node
    };

    let quad = [corner(0, 0), corner(1, 0), corner(1, 1), corner(0, 1)];
    if upper {
        quad
    } else {
        [quad[3], quad[2], quad[1], quad[0]]
    }
}
