//! # Mesh Builder
//!
//! Accumulates a mesh from loose vertices, whole sub-meshes and stitching
//! triangles. All index offset arithmetic for merges happens here.

use glam::DVec3;

use crate::error::MeshResult;
use crate::mesh::{Face, Mesh};

/// Incremental, append-only mesh construction.
///
/// # Example
///
/// ```rust
/// use strip_mesh::{Mesh, MeshBuilder};
/// use glam::DVec3;
///
/// let mut builder = MeshBuilder::new();
/// let a = builder.append_vertex(DVec3::ZERO);
/// let offset = builder.merge(&Mesh::new());
/// assert_eq!(a, 0);
/// assert_eq!(offset, 1);
/// ```
#[derive(Debug, Default)]
pub struct MeshBuilder {
    mesh: Mesh,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices appended so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Number of faces appended so far.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.mesh.face_count()
    }

    /// Appends a vertex and returns its index.
    pub fn append_vertex(&mut self, position: DVec3) -> u32 {
        self.mesh.add_vertex(position)
    }

    /// Appends two vertices and returns their indices in order.
    pub fn append_pair(&mut self, first: DVec3, second: DVec3) -> [u32; 2] {
        [self.append_vertex(first), self.append_vertex(second)]
    }

    /// Appends a normal and returns its index.
    pub fn append_normal(&mut self, normal: DVec3) -> u32 {
        self.mesh.add_normal(normal)
    }

    /// Merges `other` and returns the index at which its vertices begin.
    pub fn merge(&mut self, other: &Mesh) -> u32 {
        self.mesh.append(other)
    }

    /// Appends a checked triangle.
    pub fn triangle(&mut self, a: u32, b: u32, c: u32) -> MeshResult<()> {
        self.mesh.add_face(Face::triangle(a, b, c))
    }

    /// Appends a batch of checked triangles.
    pub fn triangles(&mut self, triangles: &[[u32; 3]]) -> MeshResult<()> {
        for &[a, b, c] in triangles {
            self.triangle(a, b, c)?;
        }
        Ok(())
    }

    /// Consumes the builder and returns the finished mesh.
    pub fn finish(self) -> Mesh {
        self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;

    fn triangle_mesh(z: f64) -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, z));
        mesh.add_vertex(DVec3::new(1.0, 0.0, z));
        mesh.add_vertex(DVec3::new(0.0, 1.0, z));
        mesh.add_face(Face::triangle(0, 1, 2)).unwrap();
        mesh
    }

    #[test]
    fn test_merge_returns_insertion_offset() {
        let mut builder = MeshBuilder::new();
        builder.append_pair(DVec3::ZERO, DVec3::X);

        let first = builder.merge(&triangle_mesh(1.0));
        let second = builder.merge(&triangle_mesh(2.0));

        assert_eq!(first, 2);
        assert_eq!(second, 5);
        let mesh = builder.finish();
        assert_eq!(mesh.faces()[0].vertices, vec![2, 3, 4]);
        assert_eq!(mesh.faces()[1].vertices, vec![5, 6, 7]);
    }

    #[test]
    fn test_triangle_links_loose_and_merged_vertices() {
        let mut builder = MeshBuilder::new();
        let loose = builder.append_vertex(DVec3::new(5.0, 5.0, 5.0));
        let offset = builder.merge(&triangle_mesh(0.0));
        builder.triangle(loose, offset, offset + 1).unwrap();
        assert_eq!(builder.face_count(), 2);
    }

    #[test]
    fn test_merge_offsets_normals_past_appended_ones() {
        let mut builder = MeshBuilder::new();
        assert_eq!(builder.append_normal(DVec3::X), 0);

        let mut flat = triangle_mesh(0.0);
        flat.add_normal(DVec3::Z);
        flat.add_face(Face::with_normal(vec![0, 1, 2], 0)).unwrap();
        builder.merge(&flat);

        let mesh = builder.finish();
        assert_eq!(mesh.normal_count(), 2);
        assert_eq!(mesh.faces()[1].normals, Some(vec![1, 1, 1]));
    }

    #[test]
    fn test_triangle_rejects_unknown_vertex() {
        let mut builder = MeshBuilder::new();
        builder.append_pair(DVec3::ZERO, DVec3::X);
        let err = builder.triangles(&[[0, 1, 7]]).unwrap_err();
        assert!(matches!(err, MeshError::DanglingIndex { index: 7, .. }));
    }
}
