//! # Strip Mesh
//!
//! Procedural mesh assembly for modular power-strip enclosures.
//!
//! ## Architecture
//!
//! ```text
//! StripParams → PartLibrary (part mesh + sockets)
//!             → StripAssembler (channel + parts) → io::serialize → output_top.obj
//!             → enclosure::scale_template        →               output_bottom.obj
//! ```
//!
//! ## Components
//!
//! - **io**: indexed mesh text codec (OBJ subset)
//! - **primitives**: regular polygon prisms
//! - **parts**: part descriptors, socket tables and the filesystem seam
//! - **assembly**: frame stitching, end caps and lateral walls
//! - **enclosure**: template rescaling for the bottom shell
//! - **validate**: edge-usage closure report
//! - **pipeline**: one end-to-end run
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strip_mesh::{pipeline, StripParams, PartLibrary, OsFilesystem};
//!
//! let library = PartLibrary::new(OsFilesystem::new("Plug models"));
//! let artifacts = pipeline::generate(&library, &template, &StripParams::default())?;
//! artifacts.write_to("out")?;
//! ```

pub mod assembly;
pub mod builder;
pub mod enclosure;
pub mod error;
pub mod io;
pub mod mesh;
pub mod parts;
pub mod pipeline;
pub mod primitives;
pub mod validate;

#[cfg(test)]
mod test_support;

pub use assembly::{AssembledStrip, StripAssembler, StripParams};
pub use builder::MeshBuilder;
pub use enclosure::{scale_template, EnclosureDimensions};
pub use error::{MeshError, MeshResult};
pub use mesh::{Face, Mesh};
pub use parts::{InMemoryFilesystem, OsFilesystem, PartKind, PartLibrary};
pub use primitives::{generate_prism, RigidTransform};
pub use validate::MeshReport;
