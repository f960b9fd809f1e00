//! Solid geometry for Cardano grilles.
//!
//! This crate turns a [`grille_gen::HoleMask`] into a watertight solid and
//! serializes it as binary STL. The kernel is exact for axis-aligned
//! cuboids, the only primitive a grille card needs. Every boolean result is
//! a rectilinear cell complex, so extracted meshes share vertices along
//! every edge and close without repair.
//!
//! ## Example
//!
//! ```rust
//! use grille_config::GrilleParams;
//! use grille_gen::GrilleGenerator;
//! use grille_solid::{BinaryStlExporter, MeshExporter, SolidBuilder};
//!
//! let params = GrilleParams::default();
//! let grille = GrilleGenerator::new(&params).unwrap().generate(1971);
//! let solid = SolidBuilder::new(&params).unwrap().build(&grille.holes).unwrap();
//!
//! let bytes = BinaryStlExporter::new("seed 1971").export(solid).unwrap();
//! assert_eq!(&bytes[..10], b"binary STL");
//! ```

pub mod builder;
pub mod cuboid;
pub mod error;
pub mod export;
pub mod mesh;
pub mod solid;

pub use builder::{CsgPlan, SolidBuilder};
pub use cuboid::Cuboid;
pub use error::{SolidError, SolidResult};
pub use export::{
    stl_file_name, stl_triangle_count, to_binary_stl, BinaryStlExporter, MeshExporter,
};
pub use mesh::{EdgeReport, Mesh};
pub use solid::{BooleanOp, Solid};
