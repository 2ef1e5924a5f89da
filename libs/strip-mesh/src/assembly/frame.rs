//! Rolling frame state and the per-part stitching step.

use std::collections::BTreeSet;

use config::constants::CHANNEL_DEPTH_MM;
use log::debug;

use super::params::StripLayout;
use crate::builder::MeshBuilder;
use crate::error::MeshResult;
use crate::parts::Part;

/// Channel cross-section corners at one longitudinal position.
///
/// Each row is ordered outer-left, inner-left, inner-right, outer-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub top: [u32; 4],
    pub bottom: [u32; 4],
}

/// Result of one stitching step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameState {
    /// Frame the step stitched from.
    pub current_frame: Frame,
    /// Frame the next step must stitch from.
    pub pending_next_frame: Frame,
}

/// Outer frame vertices of the top and bottom sides, kept sorted and unique.
#[derive(Debug, Clone, Default)]
pub struct WallLists {
    pub top: BTreeSet<u32>,
    pub bottom: BTreeSet<u32>,
}

impl WallLists {
    fn record_top(&mut self, indices: &[u32]) {
        self.top.extend(indices.iter().copied());
    }

    fn record_bottom(&mut self, indices: &[u32]) {
        self.bottom.extend(indices.iter().copied());
    }

    pub(crate) fn record_pairs(&mut self, top: [u32; 2], bottom: [u32; 2]) {
        self.record_top(&top);
        self.record_bottom(&bottom);
    }
}

/// Emits the z = 0 frame that opens the channel.
fn emit_static_frame(
    builder: &mut MeshBuilder,
    layout: &StripLayout,
    walls: &mut WallLists,
) -> Frame {
    let top = layout.static_row(0.0).map(|p| builder.append_vertex(p));
    let bottom = layout
        .static_row(CHANNEL_DEPTH_MM)
        .map(|p| builder.append_vertex(p));
    walls.record_top(&top);
    walls.record_bottom(&bottom);
    Frame { top, bottom }
}

/// Places part `k` and joins it to `frame`.
///
/// With no incoming frame the static opening frame is emitted first. Vertex
/// emission order is: static frame (first part only), top seam pair, bottom
/// seam pair, then the translated part.
pub fn stitch_part(
    builder: &mut MeshBuilder,
    frame: Option<Frame>,
    part: &Part,
    k: u32,
    layout: &StripLayout,
    walls: &mut WallLists,
) -> MeshResult<FrameState> {
    let placed = part
        .mesh
        .translated(layout.part_offset(k, part.lateral_offset));

    let current = match frame {
        Some(frame) => frame,
        None => emit_static_frame(builder, layout, walls),
    };

    let z = layout.seam_z(k);
    let (left, right) = layout.top_pair(z);
    let seam_top = builder.append_pair(left, right);
    let (left, right) = layout.bottom_pair(z);
    let seam_bottom = builder.append_pair(left, right);
    walls.record_pairs(seam_top, seam_bottom);

    let offset = builder.merge(&placed);
    let [s0, s1, s2, s3, s4, s5, s6, s7] = part.sockets.offset(offset);

    let [k0, k1, k2, k3] = current.top;
    let [k4, k5] = seam_top;
    builder.triangles(&[
        [k0, s0, k4],
        [k0, k1, s0],
        [s0, s1, k4],
        [k1, s2, s0],
        [k2, s2, k1],
        [k3, s2, k2],
        [k3, k5, s2],
        [k5, s3, s2],
    ])?;

    let [k6, k7, k8, k9] = current.bottom;
    let [k10, k11] = seam_bottom;
    builder.triangles(&[
        [k6, k10, s4],
        [k6, s4, k7],
        [k10, s5, s4],
        [k7, s4, s6],
        [k7, s6, k8],
        [k8, s6, k9],
        [k9, s6, k11],
        [s6, s7, k11],
    ])?;

    debug!("placed part {k} at z = {z} (vertex offset {offset})");

    Ok(FrameState {
        current_frame: current,
        pending_next_frame: Frame {
            top: [seam_top[0], s1, s3, seam_top[1]],
            bottom: [seam_bottom[0], s5, s7, seam_bottom[1]],
        },
    })
}
