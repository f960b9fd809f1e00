//! One generation run, from seed to file.

use std::path::PathBuf;

use grille_config::GrilleParams;
use grille_gen::{GrilleGenerator, HoleMask};
use grille_solid::{
    stl_file_name, stl_triangle_count, BinaryStlExporter, MeshExporter, SolidBuilder,
};
use tracing::info;

use crate::args::RunOptions;
use crate::error::{CliError, CliResult};
use crate::seed::resolve_seed;

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Seed actually used (after fallback).
    pub seed: u64,
    /// Written STL file.
    pub path: PathBuf,
    /// Generated hole pattern.
    pub holes: HoleMask,
    /// Open cells in the pattern.
    pub open_cells: usize,
    /// Triangles in the exported mesh.
    pub triangles: usize,
}

/// Run the full pipeline and write `cardano_seed_<seed>.stl` into `out_dir`.
pub fn run(options: &RunOptions) -> CliResult<RunReport> {
    let seed = resolve_seed(options.seed.as_deref());

    let params = match &options.config {
        Some(path) => GrilleParams::from_file(path)?,
        None => GrilleParams::default(),
    };

    let generator = GrilleGenerator::new(&params)?;
    let builder = SolidBuilder::new(&params)?;

    let grille = generator.generate(seed);
    let solid = builder.build(&grille.holes)?;
    let bytes = BinaryStlExporter::new(format!("cardano grille seed {seed}")).export(solid)?;
    let triangles = stl_triangle_count(&bytes)?;

    let path = options.out_dir.join(stl_file_name(seed));
    std::fs::write(&path, &bytes).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    info!(seed, path = %path.display(), bytes = bytes.len(), "wrote grille");

    Ok(RunReport {
        seed,
        path,
        open_cells: grille.holes.open_count(),
        holes: grille.holes,
        triangles,
    })
}
