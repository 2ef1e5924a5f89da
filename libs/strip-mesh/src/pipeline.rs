//! # Generation Pipeline
//!
//! One run: validate parameters, assemble the top shell, scale the bottom
//! enclosure and write both artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use config::constants::{OUTPUT_BOTTOM_FILE, OUTPUT_TOP_FILE};
use log::info;

use crate::assembly::{StripAssembler, StripParams};
use crate::enclosure::scale_template_for;
use crate::error::{MeshError, MeshResult};
use crate::io;
use crate::mesh::Mesh;
use crate::parts::{FileSystem, PartLibrary};

/// Both outputs of one run.
#[derive(Debug, Clone)]
pub struct StripArtifacts {
    /// Channel and parts.
    pub top: Mesh,
    /// Scaled enclosure template text.
    pub bottom: String,
}

/// Runs assembly and enclosure scaling for `params`.
///
/// Nothing is produced unless both stages succeed.
pub fn generate<F: FileSystem>(
    library: &PartLibrary<F>,
    template: &str,
    params: &StripParams,
) -> MeshResult<StripArtifacts> {
    let top = StripAssembler::new(library).assemble(params)?;
    let bottom = scale_template_for(template, params);
    Ok(StripArtifacts { top, bottom })
}

impl StripArtifacts {
    /// Writes both artifacts into `out_dir`, creating it if needed, and
    /// returns the written paths (top first).
    pub fn write_to(&self, out_dir: impl AsRef<Path>) -> MeshResult<[PathBuf; 2]> {
        let out_dir = out_dir.as_ref();
        if !out_dir.as_os_str().is_empty() {
            fs::create_dir_all(out_dir).map_err(|err| MeshError::io(out_dir, err))?;
        }

        let top_path = out_dir.join(OUTPUT_TOP_FILE);
        io::write_obj(&self.top, &top_path)?;
        info!("wrote {}", top_path.display());

        let bottom_path = out_dir.join(OUTPUT_BOTTOM_FILE);
        fs::write(&bottom_path, &self.bottom).map_err(|err| MeshError::io(&bottom_path, err))?;
        info!("wrote {}", bottom_path.display());

        Ok([top_path, bottom_path])
    }
}

/// Writes `artifacts` into `out_dir`.
pub fn write_artifacts(
    artifacts: &StripArtifacts,
    out_dir: impl AsRef<Path>,
) -> MeshResult<[PathBuf; 2]> {
    artifacts.write_to(out_dir)
}
