//! Strip parameters and the placement layout derived from them.

use config::constants::{
    ParameterRange, CHANNEL_DEPTH_MM, END_CAP_INSET_MM, LATERAL_GAP_RANGE, LEADING_MARGIN_MM,
    NUM_PARTS_RANGE, PART_FOOTPRINT_MM, PART_WIDTH_MM, PITCH_RANGE, VERTICAL_GAP_RANGE,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::parts::PartKind;

/// User-facing parameters of one strip.
///
/// # Example
///
/// ```rust
/// use strip_mesh::assembly::StripParams;
/// use strip_mesh::parts::PartKind;
///
/// let params: StripParams = serde_json::from_str(
///     r#"{"num_parts": 3, "kind": "american", "pitch": 20.0,
///         "lateral_gap": 10.0, "vertical_gap": 15.0}"#,
/// ).unwrap();
/// assert_eq!(params.kind, PartKind::American);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripParams {
    /// Number of parts placed along the strip.
    pub num_parts: u32,
    pub kind: PartKind,
    /// Free distance between consecutive parts.
    pub pitch: f64,
    /// Margin between the channel sides and the parts.
    pub lateral_gap: f64,
    /// Margin before the first and after the last part.
    pub vertical_gap: f64,
}

impl Default for StripParams {
    fn default() -> Self {
        Self {
            num_parts: 4,
            kind: PartKind::European,
            pitch: 25.0,
            lateral_gap: 15.0,
            vertical_gap: 25.0,
        }
    }
}

impl StripParams {
    /// Checks every parameter against its range, in declaration order.
    pub fn validate(&self) -> MeshResult<()> {
        check(NUM_PARTS_RANGE, f64::from(self.num_parts))?;
        check(PITCH_RANGE, self.pitch)?;
        check(LATERAL_GAP_RANGE, self.lateral_gap)?;
        check(VERTICAL_GAP_RANGE, self.vertical_gap)?;
        Ok(())
    }
}

fn check(range: ParameterRange, value: f64) -> MeshResult<()> {
    match range.violated_bound(value) {
        Some(bound) => Err(MeshError::invalid_parameter(range.name, value, bound)),
        None => Ok(()),
    }
}

/// Positions derived from validated parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    pub lateral_gap: f64,
    pub vertical_gap: f64,
    /// Distance between consecutive seams.
    pub spacing: f64,
    /// Channel width across X.
    pub width: f64,
}

impl StripLayout {
    pub fn new(params: &StripParams) -> Self {
        Self {
            lateral_gap: params.lateral_gap,
            vertical_gap: params.vertical_gap,
            spacing: params.pitch + PART_FOOTPRINT_MM,
            width: 2.0 * params.lateral_gap + PART_WIDTH_MM,
        }
    }

    /// Z of the seam closing part `k`.
    pub fn seam_z(&self, k: u32) -> f64 {
        LEADING_MARGIN_MM + self.vertical_gap + self.spacing * f64::from(k)
    }

    /// Z of the end cap after `num_parts` parts.
    pub fn closing_z(&self, num_parts: u32) -> f64 {
        self.spacing * f64::from(num_parts) + 2.0 * self.vertical_gap - END_CAP_INSET_MM
    }

    /// Translation applied to the copy of part `k`.
    pub fn part_offset(&self, k: u32, lateral_offset: f64) -> DVec3 {
        DVec3::new(self.lateral_gap, lateral_offset, self.seam_z(k))
    }

    /// Outer-left and outer-right corners at `z` on the top side.
    pub fn top_pair(&self, z: f64) -> (DVec3, DVec3) {
        (DVec3::new(0.0, 0.0, z), DVec3::new(self.width, 0.0, z))
    }

    /// Outer-left and outer-right corners at `z` on the bottom side.
    pub fn bottom_pair(&self, z: f64) -> (DVec3, DVec3) {
        (
            DVec3::new(0.0, CHANNEL_DEPTH_MM, z),
            DVec3::new(self.width, CHANNEL_DEPTH_MM, z),
        )
    }

    /// The four frame corners at z = 0 for side `y`: outer-left, inner-left,
    /// inner-right, outer-right.
    pub fn static_row(&self, y: f64) -> [DVec3; 4] {
        let l = self.lateral_gap;
        [
            DVec3::new(0.0, y, 0.0),
            DVec3::new(l, y, 0.0),
            DVec3::new(l + PART_WIDTH_MM, y, 0.0),
            DVec3::new(self.width, y, 0.0),
        ]
    }
}
