//! Centralized configuration values shared across the power-strip pipeline.
//!
//! Each public item in this module documents its purpose and, where useful,
//! provides a minimal usage example so that downstream crates can remain
//! declarative and avoid scattering literals.

use std::fmt;
use std::path::PathBuf;

// =============================================================================
// PRECISION
// =============================================================================

/// Numerical tolerance used when comparing generated coordinates.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// PARAMETER RANGES
// =============================================================================

/// Which side of a [`ParameterRange`] a value fell outside of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// The value is below (or not comparable to) the inclusive minimum.
    Min(f64),
    /// The value is above the inclusive maximum.
    Max(f64),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min(min) => write!(f, "must be >= {min}"),
            Bound::Max(max) => write!(f, "must be <= {max}"),
        }
    }
}

/// Inclusive range accepted for a named assembly parameter.
///
/// # Examples
/// ```
/// use config::constants::{Bound, ParameterRange};
///
/// const GAP: ParameterRange = ParameterRange::new("gap", 5.0, 25.0);
/// assert_eq!(GAP.violated_bound(5.0), None);
/// assert_eq!(GAP.violated_bound(26.0), Some(Bound::Max(25.0)));
/// assert_eq!(GAP.violated_bound(f64::NAN), Some(Bound::Min(5.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    /// Parameter name reported in validation errors.
    pub name: &'static str,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl ParameterRange {
    /// Creates a named inclusive range.
    pub const fn new(name: &'static str, min: f64, max: f64) -> Self {
        Self { name, min, max }
    }

    /// Returns the bound `value` violates, or `None` when it is in range.
    ///
    /// NaN never satisfies the lower bound.
    pub fn violated_bound(&self, value: f64) -> Option<Bound> {
        if !(value >= self.min) {
            Some(Bound::Min(self.min))
        } else if value > self.max {
            Some(Bound::Max(self.max))
        } else {
            None
        }
    }
}

/// Accepted number of parts placed along the strip.
///
/// # Examples
/// ```
/// use config::constants::NUM_PARTS_RANGE;
/// assert!(NUM_PARTS_RANGE.violated_bound(1.0).is_some());
/// assert!(NUM_PARTS_RANGE.violated_bound(8.0).is_none());
/// ```
pub const NUM_PARTS_RANGE: ParameterRange = ParameterRange::new("num_parts", 2.0, 8.0);

/// Accepted free distance between consecutive parts, in millimetres.
pub const PITCH_RANGE: ParameterRange = ParameterRange::new("pitch", 5.0, 60.0);

/// Accepted side margin between the channel wall and the parts.
pub const LATERAL_GAP_RANGE: ParameterRange = ParameterRange::new("lateral_gap", 5.0, 25.0);

/// Accepted end margin before the first and after the last part.
pub const VERTICAL_GAP_RANGE: ParameterRange = ParameterRange::new("vertical_gap", 5.0, 25.0);

/// Smallest polygon a prism can be built on.
pub const MIN_PRISM_SIDES: u32 = 3;

// =============================================================================
// MECHANICAL CONSTANTS
// =============================================================================

/// Lateral width of a part model (X extent of its socket rectangle).
///
/// # Examples
/// ```
/// use config::constants::PART_WIDTH_MM;
/// let lateral_gap = 15.0;
/// let channel_width = 2.0 * lateral_gap + PART_WIDTH_MM;
/// assert_eq!(channel_width, 75.0);
/// ```
pub const PART_WIDTH_MM: f64 = 45.0;

/// Longitudinal footprint of a part, added to the user pitch to obtain the
/// placement spacing.
pub const PART_FOOTPRINT_MM: f64 = 39.5;

/// Distance from the channel start to the first seam, before the vertical gap
/// is added.
///
/// # Examples
/// ```
/// use config::constants::LEADING_MARGIN_MM;
/// let vertical_gap = 25.0;
/// assert_eq!(LEADING_MARGIN_MM + vertical_gap, 70.0);
/// ```
pub const LEADING_MARGIN_MM: f64 = 45.0;

/// Thickness of the connective channel. The top side sits at `y = 0` and the
/// bottom side at `y = CHANNEL_DEPTH_MM`.
pub const CHANNEL_DEPTH_MM: f64 = 5.0;

/// Distance pulled back from the nominal far end when placing the closing
/// frame vertices.
pub const END_CAP_INSET_MM: f64 = 15.0;

/// Longitudinal slot reserved per part when sizing the bottom enclosure.
pub const ENCLOSURE_SLOT_MM: f64 = 45.0;

/// Wall thickness of the bottom enclosure template (outer minus inner).
pub const ENCLOSURE_WALL_MM: f64 = 3.0;

// =============================================================================
// PART LIBRARY
// =============================================================================

/// Directory holding the part models and the enclosure template.
pub const DEFAULT_PARTS_DIR: &str = "Plug models";

/// Mesh file of the European receptacle part.
pub const EUROPEAN_PART_FILE: &str = "European modified.obj";

/// Mesh file of the American receptacle part.
pub const AMERICAN_PART_FILE: &str = "American modified.obj";

/// Socket anchors of the European part (1-based vertex indices), ordered
/// top near-left, top far-left, top near-right, top far-right, then the same
/// four on the bottom side.
///
/// Authored against `EUROPEAN_PART_FILE`; the part loader re-checks every
/// entry against the loaded vertex count.
pub const EUROPEAN_SOCKET_ANCHORS: [u32; 8] = [528, 527, 532, 530, 526, 525, 531, 529];

/// Socket anchors of the American part, same ordering as the European table.
pub const AMERICAN_SOCKET_ANCHORS: [u32; 8] = [48, 50, 45, 46, 47, 49, 43, 44];

/// Y shift applied to European parts so their socket face meets the channel.
pub const EUROPEAN_LATERAL_OFFSET_MM: f64 = -2.5;

/// Y shift applied to American parts.
pub const AMERICAN_LATERAL_OFFSET_MM: f64 = 0.0;

// =============================================================================
// ENCLOSURE TEMPLATE
// =============================================================================

/// Bottom enclosure template file, inside [`DEFAULT_PARTS_DIR`].
pub const DEFAULT_TEMPLATE_FILE: &str = "Bottom_enclosure.obj";

/// Placeholder literal standing for the outer enclosure length.
///
/// # Examples
/// ```
/// use config::constants::LENGTH_PLACEHOLDER;
/// assert!("20.000000".starts_with(LENGTH_PLACEHOLDER));
/// ```
pub const LENGTH_PLACEHOLDER: &str = "20.";

/// Placeholder literal standing for the inner enclosure length.
pub const INNER_LENGTH_PLACEHOLDER: &str = "17.";

/// Placeholder literal standing for the (negated) outer enclosure width.
pub const WIDTH_PLACEHOLDER: &str = "-10.";

/// Placeholder literal standing for the (negated) inner enclosure width.
pub const INNER_WIDTH_PLACEHOLDER: &str = "-7.";

/// Decimal places written for substituted template coordinates.
pub const TEMPLATE_DECIMALS: usize = 6;

// =============================================================================
// OUTPUT
// =============================================================================

/// File name of the assembled channel + parts mesh.
pub const OUTPUT_TOP_FILE: &str = "output_top.obj";

/// File name of the scaled bottom enclosure.
pub const OUTPUT_BOTTOM_FILE: &str = "output_bottom.obj";

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Filesystem locations used by one pipeline run.
///
/// # Examples
/// ```
/// use config::constants::PipelineConfig;
/// let config = PipelineConfig::default();
/// assert!(config.template_path.ends_with("Bottom_enclosure.obj"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Directory the part models are read from.
    pub parts_dir: PathBuf,
    /// Enclosure template file.
    pub template_path: PathBuf,
    /// Directory both artifacts are written to.
    pub output_dir: PathBuf,
}

impl PipelineConfig {
    /// Builds a configuration, rejecting empty paths.
    ///
    /// # Examples
    /// ```
    /// use config::constants::PipelineConfig;
    /// let cfg = PipelineConfig::new("parts", "parts/box.obj", "out").expect("valid config");
    /// assert_eq!(cfg.output_dir.to_str(), Some("out"));
    /// assert!(PipelineConfig::new("", "box.obj", "out").is_err());
    /// ```
    pub fn new(
        parts_dir: impl Into<PathBuf>,
        template_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let parts_dir = parts_dir.into();
        let template_path = template_path.into();
        let output_dir = output_dir.into();
        if parts_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("parts_dir"));
        }
        if template_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("template_path"));
        }
        Ok(Self {
            parts_dir,
            template_path,
            output_dir,
        })
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parts_dir: PathBuf::from(DEFAULT_PARTS_DIR),
            template_path: PathBuf::from(DEFAULT_PARTS_DIR).join(DEFAULT_TEMPLATE_FILE),
            output_dir: PathBuf::new(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a required path is empty.
    EmptyPath(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPath(field) => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
