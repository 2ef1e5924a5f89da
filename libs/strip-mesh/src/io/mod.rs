//! # Mesh I/O
//!
//! Line-oriented indexed mesh text format (a Wavefront OBJ subset):
//!
//! ```text
//! v x y z          position
//! vn nx ny nz      normal
//! f 1//1 2//1 3//1 face, 1-based vertex//normal references
//! ```
//!
//! Unknown record prefixes and comments are ignored on input.

pub mod obj;

#[cfg(test)]
mod tests;

pub use obj::{parse, read_obj, serialize, write_obj};
