//! # Strip Assembly
//!
//! Places `num_parts` copies of a part along +Z and stitches them into one
//! shell with a connective channel:
//!
//! ```text
//!  z = 0        seam 0        seam 1              closing
//!    |  part 0   |   part 1    |   ...   part n-1  |
//!    +-----------+-------------+-------------------+
//!  static frame   frames roll forward one part at a time
//! ```
//!
//! Each part step consumes the frame left by the previous step and returns
//! the frame the next one starts from. End caps and lateral walls then close
//! the channel.

pub mod frame;
pub mod params;
pub mod walls;


use log::{debug, info, warn};

use crate::builder::MeshBuilder;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::parts::{FileSystem, PartLibrary};
use crate::validate::MeshReport;

pub use frame::{stitch_part, Frame, FrameState, WallLists};
pub use params::{StripLayout, StripParams};

/// An assembled strip plus the wall lists it was closed with.
#[derive(Debug, Clone)]
pub struct AssembledStrip {
    pub mesh: Mesh,
    /// Ascending top frame vertices, before the end-wall pruning.
    pub top_frame: Vec<u32>,
    /// Ascending bottom frame vertices, before the end-wall pruning.
    pub bottom_frame: Vec<u32>,
}

/// Builds strip meshes from parts in a [`PartLibrary`].
///
/// # Example
///
/// ```rust,no_run
/// use strip_mesh::assembly::{StripAssembler, StripParams};
/// use strip_mesh::parts::{OsFilesystem, PartLibrary};
///
/// let library = PartLibrary::new(OsFilesystem::new("Plug models"));
/// let mesh = StripAssembler::new(&library)
///     .assemble(&StripParams::default())
///     .unwrap();
/// println!("{} faces", mesh.face_count());
/// ```
#[derive(Debug)]
pub struct StripAssembler<'a, F> {
    library: &'a PartLibrary<F>,
}

impl<'a, F: FileSystem> StripAssembler<'a, F> {
    pub fn new(library: &'a PartLibrary<F>) -> Self {
        Self { library }
    }

    /// Assembles the strip and returns its mesh.
    pub fn assemble(&self, params: &StripParams) -> MeshResult<Mesh> {
        self.assemble_detailed(params).map(|strip| strip.mesh)
    }

    /// Assembles the strip, keeping the wall lists for inspection.
    ///
    /// Parameters are validated before the part is loaded; no partial mesh is
    /// ever returned.
    pub fn assemble_detailed(&self, params: &StripParams) -> MeshResult<AssembledStrip> {
        params.validate()?;
        info!(
            "assembling {} {} parts (pitch {}, lateral gap {}, vertical gap {})",
            params.num_parts, params.kind, params.pitch, params.lateral_gap, params.vertical_gap
        );

        let part = self.library.load_part(params.kind)?;
        let layout = StripLayout::new(params);
        let n = params.num_parts;

        let mut builder = MeshBuilder::new();
        let mut walls = WallLists::default();
        let mut opening = None;
        let mut frame = None;

        for k in 0..n {
            let state = stitch_part(&mut builder, frame, &part, k, &layout, &mut walls)?;
            opening.get_or_insert(state.current_frame);
            frame = Some(state.pending_next_frame);
        }

        let (Some(opening), Some(last)) = (opening, frame) else {
            return Err(MeshError::invalid_topology("no parts were placed"));
        };

        walls::close_ends(&mut builder, last, &layout, n, &mut walls)?;

        let top_frame: Vec<u32> = walls.top.iter().copied().collect();
        let bottom_frame: Vec<u32> = walls.bottom.iter().copied().collect();
        walls::build_walls(&mut builder, &top_frame, &bottom_frame, opening)?;

        let mesh = builder.finish();
        let report = MeshReport::analyze(&mesh);
        debug!(
            "closure: watertight={} manifold={} oriented={} volume={:.3}",
            report.is_watertight,
            report.is_manifold,
            report.is_consistently_oriented,
            report.signed_volume
        );
        if !report.is_closed() {
            warn!(
                "assembled strip is not closed: {} boundary, {} non-manifold, {} misoriented edges",
                report.boundary_edge_count,
                report.non_manifold_edge_count,
                report.misoriented_edge_count
            );
        }
        info!(
            "assembled strip: {} vertices, {} faces",
            mesh.vertex_count(),
            mesh.face_count()
        );

        Ok(AssembledStrip {
            mesh,
            top_frame,
            bottom_frame,
        })
    }
}
