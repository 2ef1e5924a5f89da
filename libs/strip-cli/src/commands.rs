//! Subcommand implementations.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use config::constants::{PipelineConfig, DEFAULT_PARTS_DIR, DEFAULT_TEMPLATE_FILE};
use glam::DVec3;
use log::info;
use strip_mesh::io::{read_obj, write_obj};
use strip_mesh::parts::{OsFilesystem, PartLibrary};
use strip_mesh::pipeline::{generate, write_artifacts};
use strip_mesh::{generate_prism, MeshReport, RigidTransform, StripParams};

use super::{PrismArgs, StripArgs};

/// Runs the full pipeline for one parameter set.
pub fn strip(args: StripArgs) -> Result<()> {
    let params = match &args.params {
        Some(path) => load_params(path)?,
        None => StripParams {
            num_parts: args.parts,
            kind: args.kind,
            pitch: args.pitch,
            lateral_gap: args.lateral_gap,
            vertical_gap: args.vertical_gap,
        },
    };

    let config = pipeline_config(&args)?;
    let template = fs::read_to_string(&config.template_path)
        .with_context(|| format!("reading template {}", config.template_path.display()))?;

    let library = PartLibrary::new(OsFilesystem::new(&config.parts_dir));
    let artifacts = generate(&library, &template, &params).context("generating strip")?;
    write_artifacts(&artifacts, &config.output_dir).context("writing artifacts")?;
    Ok(())
}

fn load_params(path: &Path) -> Result<StripParams> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading parameters {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing parameters {}", path.display()))
}

fn pipeline_config(args: &StripArgs) -> Result<PipelineConfig> {
    let parts_dir = args
        .parts_dir
        .clone()
        .unwrap_or_else(|| DEFAULT_PARTS_DIR.into());
    let template = args
        .template
        .clone()
        .unwrap_or_else(|| parts_dir.join(DEFAULT_TEMPLATE_FILE));
    Ok(PipelineConfig::new(parts_dir, template, args.out.clone())?)
}

/// Writes one prism mesh.
pub fn prism(args: PrismArgs) -> Result<()> {
    let transform = RigidTransform::new(
        vector(args.rotate.as_deref(), "--rotate")?,
        vector(args.translate.as_deref(), "--translate")?,
    );
    let prism = generate_prism(args.radius, args.height, args.sides, transform)?;
    write_obj(&prism.solid, &args.out)?;
    info!(
        "wrote {}-sided prism ({} vertices, {} edges in outline) to {}",
        args.sides,
        prism.wireframe.vertices.len(),
        prism.wireframe.edges.len(),
        args.out.display()
    );
    Ok(())
}

fn vector(values: Option<&[f64]>, flag: &str) -> Result<DVec3> {
    match values {
        None => Ok(DVec3::ZERO),
        Some(&[x, y, z]) => Ok(DVec3::new(x, y, z)),
        Some(other) => bail!("{flag} takes 3 values, got {}", other.len()),
    }
}

/// Prints the closure report of a mesh file.
pub fn check(file: &Path) -> Result<()> {
    let mesh = read_obj(file)?;
    let report = MeshReport::analyze(&mesh);
    print!("{report}");
    if !report.is_closed() {
        bail!("{} is not a closed mesh", file.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_defaults_to_zero() {
        assert_eq!(vector(None, "--rotate").unwrap(), DVec3::ZERO);
        assert_eq!(
            vector(Some(&[1.0, -2.0, 3.0]), "--rotate").unwrap(),
            DVec3::new(1.0, -2.0, 3.0)
        );
        assert!(vector(Some(&[1.0]), "--translate").is_err());
    }

    #[test]
    fn params_file_overrides_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(
            &path,
            r#"{"num_parts": 6, "kind": "american", "pitch": 10, "lateral_gap": 5, "vertical_gap": 5}"#,
        )
        .unwrap();
        let params = load_params(&path).unwrap();
        assert_eq!(params.num_parts, 6);
        assert_eq!(params.kind, strip_mesh::PartKind::American);
    }

    #[test]
    fn check_flags_open_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("open.obj");
        fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        assert!(check(&path).is_err());
    }

    #[test]
    fn prism_writes_closed_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("prism.obj");
        prism(PrismArgs {
            radius: 2.5,
            height: 1.0,
            sides: 5,
            rotate: Some(vec![0.0, 0.0, 36.0]),
            translate: None,
            out: out.clone(),
        })
        .unwrap();
        assert!(check(&out).is_ok());
    }
}
