//! # Mesh Data Structure
//!
//! Indexed polygon mesh with optional per-corner normal references.

use glam::DVec3;

use crate::error::{MeshError, MeshResult};

/// One polygon of a mesh.
///
/// Vertex indices are 0-based and wind counter-clockwise seen from outside.
/// When present, `normals` holds one normal index per corner; a flat face
/// repeats the same index on every corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    /// Vertex indices, at least three.
    pub vertices: Vec<u32>,
    /// Normal indices parallel to `vertices`.
    pub normals: Option<Vec<u32>>,
}

impl Face {
    /// Creates a triangle without normals.
    pub fn triangle(a: u32, b: u32, c: u32) -> Self {
        Self {
            vertices: vec![a, b, c],
            normals: None,
        }
    }

    /// Creates a flat face whose corners all share one normal.
    pub fn with_normal(vertices: Vec<u32>, normal: u32) -> Self {
        let normals = vec![normal; vertices.len()];
        Self {
            vertices,
            normals: Some(normals),
        }
    }

    /// Number of corners.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the face has no corners.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates the face's edges as `(from, to)` pairs, closing the loop.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    fn offset(&self, vertex_offset: u32, normal_offset: u32) -> Self {
        Self {
            vertices: self.vertices.iter().map(|i| i + vertex_offset).collect(),
            normals: self
                .normals
                .as_ref()
                .map(|normals| normals.iter().map(|n| n + normal_offset).collect()),
        }
    }
}

/// An indexed polygon mesh.
///
/// Growth is append-only: vertices keep their index for the lifetime of the
/// mesh and faces may only reference vertices that already exist.
///
/// # Example
///
/// ```rust
/// use strip_mesh::{Face, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(Face::triangle(0, 1, 2)).unwrap();
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    faces: Vec<Face>,
    normals: Vec<DVec3>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            normals: Vec::new(),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of normals.
    #[inline]
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a normal and returns its index.
    pub fn add_normal(&mut self, normal: DVec3) -> u32 {
        let index = self.normals.len() as u32;
        self.normals.push(normal);
        index
    }

    /// Adds a face after checking every reference against the current counts.
    pub fn add_face(&mut self, face: Face) -> MeshResult<()> {
        if face.len() < 3 {
            return Err(MeshError::invalid_topology(format!(
                "face needs at least 3 corners, got {}",
                face.len()
            )));
        }
        let vertex_count = self.vertices.len();
        if let Some(&index) = face.vertices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::DanglingIndex { index, vertex_count });
        }
        if let Some(normals) = &face.normals {
            if normals.len() != face.len() {
                return Err(MeshError::invalid_topology(
                    "normal references must parallel vertex references",
                ));
            }
            if let Some(&index) = normals.iter().find(|&&n| n as usize >= self.normals.len()) {
                return Err(MeshError::invalid_topology(format!(
                    "normal index {index} out of range ({} normals)",
                    self.normals.len()
                )));
            }
        }
        self.faces.push(face);
        Ok(())
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Translates every vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Returns a translated copy, leaving `self` untouched.
    pub fn translated(&self, offset: DVec3) -> Mesh {
        let mut copy = self.clone();
        copy.translate(offset);
        copy
    }

    /// Rotates vertices and normals by `rotation`, then translates vertices.
    pub fn transform(&mut self, rotation: &glam::DMat3, translation: DVec3) {
        for v in &mut self.vertices {
            *v = *rotation * *v + translation;
        }
        for n in &mut self.normals {
            *n = *rotation * *n;
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Appends `other`, offsetting its references, and returns the vertex
    /// offset at which `other`'s vertices now begin.
    pub(crate) fn append(&mut self, other: &Mesh) -> u32 {
        let vertex_offset = self.vertices.len() as u32;
        let normal_offset = self.normals.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|face| face.offset(vertex_offset, normal_offset)),
        );

        vertex_offset
    }
}
