//! # Primitives
//!
//! Parametric solids generated from scratch.

pub mod prism;


pub use prism::{generate_prism, Prism, RigidTransform, Wireframe};
