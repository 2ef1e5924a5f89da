//! Mesh validation and closure reporting.
//!
//! Counts how often every edge is used to decide whether an assembled shell
//! is closed, manifold and consistently wound.

use std::collections::HashMap;
use std::fmt;

use crate::mesh::Mesh;

/// Report of mesh validation results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshReport {
    /// Total number of vertices.
    pub vertex_count: usize,
    /// Total number of faces.
    pub face_count: usize,
    /// Number of distinct undirected edges.
    pub edge_count: usize,

    /// Edges used by exactly one face.
    pub boundary_edge_count: usize,
    /// Edges used by more than two faces.
    pub non_manifold_edge_count: usize,
    /// Directed edges traversed by more than one face.
    pub misoriented_edge_count: usize,
    /// Face corners pointing past the vertex list.
    pub out_of_range_index_count: usize,

    /// Enclosed volume; positive when faces wind outward.
    pub signed_volume: f64,

    /// No boundary edges.
    pub is_watertight: bool,
    /// No non-manifold edges.
    pub is_manifold: bool,
    /// No directed edge repeats.
    pub is_consistently_oriented: bool,
}

impl MeshReport {
    /// Analyzes `mesh`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strip_mesh::primitives::{generate_prism, RigidTransform};
    /// use strip_mesh::validate::MeshReport;
    ///
    /// let prism = generate_prism(1.0, 1.0, 4, RigidTransform::IDENTITY).unwrap();
    /// assert!(MeshReport::analyze(&prism.solid).is_closed());
    /// ```
    pub fn analyze(mesh: &Mesh) -> Self {
        let vertex_count = mesh.vertex_count();
        let mut undirected: HashMap<(u32, u32), usize> = HashMap::new();
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        let mut out_of_range_index_count = 0;
        let mut signed_volume = 0.0;

        for face in mesh.faces() {
            let dangling = face
                .vertices
                .iter()
                .filter(|&&i| i as usize >= vertex_count)
                .count();
            out_of_range_index_count += dangling;

            for (a, b) in face.edges() {
                *undirected.entry((a.min(b), a.max(b))).or_default() += 1;
                *directed.entry((a, b)).or_default() += 1;
            }

            if dangling == 0 {
                // fan triangulation around the first corner
                let origin = mesh.vertex(face.vertices[0]);
                for pair in face.vertices[1..].windows(2) {
                    let b = mesh.vertex(pair[0]);
                    let c = mesh.vertex(pair[1]);
                    signed_volume += origin.dot(b.cross(c)) / 6.0;
                }
            }
        }

        let boundary_edge_count = undirected.values().filter(|&&n| n == 1).count();
        let non_manifold_edge_count = undirected.values().filter(|&&n| n > 2).count();
        let misoriented_edge_count = directed.values().filter(|&&n| n > 1).count();

        Self {
            vertex_count,
            face_count: mesh.face_count(),
            edge_count: undirected.len(),
            boundary_edge_count,
            non_manifold_edge_count,
            misoriented_edge_count,
            out_of_range_index_count,
            signed_volume,
            is_watertight: boundary_edge_count == 0,
            is_manifold: non_manifold_edge_count == 0,
            is_consistently_oriented: misoriented_edge_count == 0,
        }
    }

    /// Watertight, manifold, consistently oriented and free of bad indices.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.is_watertight
            && self.is_manifold
            && self.is_consistently_oriented
            && self.out_of_range_index_count == 0
    }
}

impl fmt::Display for MeshReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |b: bool| if b { "Yes" } else { "No" };
        writeln!(f, "Mesh Report:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Faces: {}", self.face_count)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(f, "  Signed volume: {:.3}", self.signed_volume)?;
        writeln!(f, "  Watertight: {}", yes_no(self.is_watertight))?;
        writeln!(f, "  Manifold: {}", yes_no(self.is_manifold))?;
        writeln!(f, "  Oriented: {}", yes_no(self.is_consistently_oriented))?;

        if self.boundary_edge_count > 0 {
            writeln!(f, "  Boundary edges: {}", self.boundary_edge_count)?;
        }
        if self.non_manifold_edge_count > 0 {
            writeln!(f, "  Non-manifold edges: {}", self.non_manifold_edge_count)?;
        }
        if self.misoriented_edge_count > 0 {
            writeln!(f, "  Misoriented edges: {}", self.misoriented_edge_count)?;
        }
        if self.out_of_range_index_count > 0 {
            writeln!(f, "  Out-of-range indices: {}", self.out_of_range_index_count)?;
        }
        Ok(())
    }
}
