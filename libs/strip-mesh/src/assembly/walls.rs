//! End caps and lateral walls that close the channel.

use super::frame::{Frame, WallLists};
use super::params::StripLayout;
use crate::builder::MeshBuilder;
use crate::error::{MeshError, MeshResult};

/// Emits the closing pairs after the last part and caps both sides.
pub fn close_ends(
    builder: &mut MeshBuilder,
    last: Frame,
    layout: &StripLayout,
    num_parts: u32,
    walls: &mut WallLists,
) -> MeshResult<()> {
    let z = layout.closing_z(num_parts);
    let (left, right) = layout.top_pair(z);
    let [c0, c1] = builder.append_pair(left, right);
    let (left, right) = layout.bottom_pair(z);
    let [d0, d1] = builder.append_pair(left, right);
    walls.record_pairs([c0, c1], [d0, d1]);

    let [f0, f1, f2, f3] = last.top;
    builder.triangles(&[[f0, f1, c0], [f1, f2, c0], [f2, c1, c0], [f2, f3, c1]])?;

    let [g0, g1, g2, g3] = last.bottom;
    builder.triangles(&[[g0, d0, g1], [g1, d0, g2], [g2, d0, d1], [g2, d1, g3]])
}

/// Builds the near and far end walls and both long side walls.
///
/// `top` and `bottom` are the ascending wall lists; `opening` is the static
/// frame, whose inner corners only belong to the near wall.
pub fn build_walls(
    builder: &mut MeshBuilder,
    top: &[u32],
    bottom: &[u32],
    opening: Frame,
) -> MeshResult<()> {
    if top.len() != bottom.len() {
        return Err(MeshError::invalid_topology(format!(
            "top wall has {} vertices, bottom wall has {}",
            top.len(),
            bottom.len()
        )));
    }
    if top.len() < 6 || top.len() % 2 != 0 {
        return Err(MeshError::invalid_topology(format!(
            "wall lists need an even count of at least 6 vertices, got {}",
            top.len()
        )));
    }

    let (t, b) = (top, bottom);
    builder.triangles(&[
        [t[0], b[0], t[1]],
        [t[1], b[0], b[1]],
        [t[1], b[1], t[2]],
        [t[2], b[1], b[2]],
        [t[2], b[2], t[3]],
        [t[3], b[2], b[3]],
    ])?;

    let last = t.len() - 1;
    builder.triangles(&[
        [t[last - 1], t[last], b[last]],
        [b[last - 1], t[last - 1], b[last]],
    ])?;

    let inner_top = [opening.top[1], opening.top[2]];
    let inner_bottom = [opening.bottom[1], opening.bottom[2]];
    let t: Vec<u32> = top.iter().copied().filter(|i| !inner_top.contains(i)).collect();
    let b: Vec<u32> = bottom
        .iter()
        .copied()
        .filter(|i| !inner_bottom.contains(i))
        .collect();
    if t.len() + 2 != top.len() || b.len() + 2 != bottom.len() {
        return Err(MeshError::invalid_topology(
            "static inner corners missing from the wall lists",
        ));
    }

    // left side runs through even positions, right side through odd ones
    for i in (0..t.len() - 2).step_by(2) {
        builder.triangles(&[[t[i], t[i + 2], b[i]], [b[i + 2], b[i], t[i + 2]]])?;
    }
    for i in (1..t.len() - 1).step_by(2) {
        builder.triangles(&[[t[i], b[i], t[i + 2]], [b[i], b[i + 2], t[i + 2]]])?;
    }

    Ok(())
}
