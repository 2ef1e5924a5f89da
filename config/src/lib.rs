//! # Config Crate
//!
//! Centralized configuration for the power-strip mesh pipeline.
//! All magic numbers (parameter ranges, mechanical dimensions of the part
//! models, template placeholders, file names) are defined here so that the
//! assembler, the enclosure scaler and the command-line front end agree.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{PITCH_RANGE, PART_FOOTPRINT_MM};
//!
//! // Reject a pitch before building anything
//! assert!(PITCH_RANGE.violated_bound(4.0).is_some());
//!
//! // The true placement spacing adds the part's own footprint
//! let spacing = 25.0 + PART_FOOTPRINT_MM;
//! assert_eq!(spacing, 64.5);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure data, usable from every crate in the workspace
//! - **Authored Data Lives Here**: Socket tables and placeholders are values
//!   taken from the external model files and must be kept in sync with them

pub mod constants;

#[cfg(test)]
mod tests;
