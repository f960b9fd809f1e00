//! Binary STL export.
//!
//! Binary STL format:
//! - 80-byte header (arbitrary text)
//! - u32 triangle count (little-endian)
//! - For each triangle: 3×f32 normal + 3×(3×f32 vertex) + u16 attribute = 50 bytes

use grille_config::constants::STL_FILE_PREFIX;
use tracing::info;

use crate::error::{SolidError, SolidResult};
use crate::mesh::Mesh;
use crate::solid::Solid;

const HEADER_LEN: usize = 80;
const TRIANGLE_LEN: usize = 50;

/// Turns a finished solid into file bytes.
pub trait MeshExporter {
    /// Serialize `solid`. The solid is consumed.
    fn export(&self, solid: Solid) -> SolidResult<Vec<u8>>;
}

/// [`MeshExporter`] producing binary STL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryStlExporter {
    name: String,
}

impl BinaryStlExporter {
    /// Exporter writing `name` into the STL header.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MeshExporter for BinaryStlExporter {
    fn export(&self, solid: Solid) -> SolidResult<Vec<u8>> {
        let mesh = solid.to_mesh()?;
        let bytes = to_binary_stl(&mesh, &self.name)?;
        info!(
            triangles = mesh.triangle_count(),
            bytes = bytes.len(),
            "exported binary STL"
        );
        Ok(bytes)
    }
}

/// File name for the grille generated from `seed`.
///
/// ```rust
/// assert_eq!(grille_solid::stl_file_name(1971), "cardano_seed_1971.stl");
/// ```
#[must_use]
pub fn stl_file_name(seed: u64) -> String {
    format!("{STL_FILE_PREFIX}{seed}.stl")
}

/// Triangle count stored in a binary STL buffer.
///
/// Fails if the buffer is shorter than the header or its length does not
/// match the stored count.
pub fn stl_triangle_count(bytes: &[u8]) -> SolidResult<usize> {
    let count_bytes: [u8; 4] = bytes
        .get(HEADER_LEN..HEADER_LEN + 4)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| SolidError::Stl(format!("{} bytes is too short", bytes.len())))?;
    let count = u32::from_le_bytes(count_bytes) as usize;

    let expected = HEADER_LEN + 4 + count * TRIANGLE_LEN;
    if bytes.len() != expected {
        return Err(SolidError::Stl(format!(
            "{count} triangles need {expected} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(count)
}

/// Encode `mesh` as binary STL with `name` in the header.
pub fn to_binary_stl(mesh: &Mesh, name: &str) -> SolidResult<Vec<u8>> {
    let tri_count = mesh.triangle_count();
    if tri_count == 0 {
        return Err(SolidError::Stl("mesh has no triangles".to_string()));
    }
    let count = u32::try_from(tri_count)
        .map_err(|_| SolidError::Stl(format!("{tri_count} triangles exceed the STL limit")))?;

    let vertex_count = mesh.vertex_count();
    if let Some(&idx) = mesh.indices.iter().find(|&&idx| idx as usize >= vertex_count) {
        return Err(SolidError::Stl(format!(
            "index {idx} out of range (vertex count = {vertex_count})"
        )));
    }

    let mut buf = Vec::with_capacity(HEADER_LEN + 4 + tri_count * TRIANGLE_LEN);

    let header = format!("binary STL: {name}");
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(HEADER_LEN)]);
    buf.resize(HEADER_LEN, 0u8);

    buf.extend_from_slice(&count.to_le_bytes());

    for [a, b, c] in mesh.triangles() {
        let normal = (b - a).cross(c - a).normalize_or_zero();
        for v in [normal, a, b, c] {
            for component in v.to_array() {
                buf.extend_from_slice(&component.to_le_bytes());
            }
        }
        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}
