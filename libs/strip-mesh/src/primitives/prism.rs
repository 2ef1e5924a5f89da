//! # Regular Prism Primitive
//!
//! Generates a convex regular-polygon prism as a wireframe and as a solid
//! triangle mesh with flat per-face normals.

use std::f64::consts::TAU;

use config::constants::{Bound, MIN_PRISM_SIDES};
use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Face, Mesh};

/// Rotation about X, then Y, then Z (degrees), followed by a translation.
///
/// # Example
///
/// ```rust
/// use strip_mesh::primitives::RigidTransform;
/// use glam::DVec3;
///
/// let t = RigidTransform::new(DVec3::new(0.0, 0.0, 90.0), DVec3::new(0.0, 0.0, 5.0));
/// let p = t.apply(DVec3::X);
/// assert!((p - DVec3::new(0.0, 1.0, 5.0)).length() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    /// Rotation angles about the X, Y and Z axes, in degrees.
    pub rotation_deg: DVec3,
    /// Translation applied after the rotation.
    pub translation: DVec3,
}

impl RigidTransform {
    /// No rotation, no translation.
    pub const IDENTITY: Self = Self {
        rotation_deg: DVec3::ZERO,
        translation: DVec3::ZERO,
    };

    /// Creates a transform from Euler angles in degrees and a translation.
    pub fn new(rotation_deg: DVec3, translation: DVec3) -> Self {
        Self {
            rotation_deg,
            translation,
        }
    }

    /// Rotation matrix `Rz * Ry * Rx`, so X is applied first.
    pub fn rotation(&self) -> DMat3 {
        let r = self.rotation_deg;
        DMat3::from_rotation_z(r.z.to_radians())
            * DMat3::from_rotation_y(r.y.to_radians())
            * DMat3::from_rotation_x(r.x.to_radians())
    }

    /// Transforms a point.
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.rotation() * point + self.translation
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Vertices and edges of the prism outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe {
    /// Bottom/top vertex pairs: index `2i` at z = 0, `2i + 1` at z = height.
    pub vertices: Vec<DVec3>,
    /// Vertex index pairs.
    pub edges: Vec<[u32; 2]>,
}

/// A generated prism in both representations.
#[derive(Debug, Clone)]
pub struct Prism {
    /// Outline: `2 * sides` vertices and `3 * sides` edges.
    pub wireframe: Wireframe,
    /// Closed triangle mesh: the wireframe vertices plus two cap centres,
    /// `4 * sides` faces, one normal per face.
    pub solid: Mesh,
}

/// Creates a regular prism.
///
/// # Arguments
///
/// * `radius` - Circumradius of the polygon
/// * `height` - Extent along Z before the transform
/// * `sides` - Polygon side count, at least 3
/// * `transform` - Rigid transform applied once topology is fixed
///
/// # Example
///
/// ```rust
/// use strip_mesh::primitives::{generate_prism, RigidTransform};
///
/// let prism = generate_prism(2.5, 1.0, 5, RigidTransform::IDENTITY).unwrap();
/// assert_eq!(prism.wireframe.vertices.len(), 10);
/// assert_eq!(prism.wireframe.edges.len(), 15);
/// assert_eq!(prism.solid.face_count(), 20);
/// ```
pub fn generate_prism(
    radius: f64,
    height: f64,
    sides: u32,
    transform: RigidTransform,
) -> MeshResult<Prism> {
    if !(radius > 0.0) || !radius.is_finite() {
        return Err(MeshError::invalid_parameter("radius", radius, Bound::Min(0.0)));
    }
    if !(height > 0.0) || !height.is_finite() {
        return Err(MeshError::invalid_parameter("height", height, Bound::Min(0.0)));
    }
    if sides < MIN_PRISM_SIDES {
        return Err(MeshError::invalid_parameter(
            "sides",
            f64::from(sides),
            Bound::Min(f64::from(MIN_PRISM_SIDES)),
        ));
    }

    let mut wireframe = build_wireframe(radius, height, sides);
    let mut solid = build_solid(&wireframe, height, sides)?;

    let rotation = transform.rotation();
    for v in &mut wireframe.vertices {
        *v = rotation * *v + transform.translation;
    }
    solid.transform(&rotation, transform.translation);

    Ok(Prism { wireframe, solid })
}

fn polygon_angle(i: u32, sides: u32) -> f64 {
    TAU * f64::from(i) / f64::from(sides)
}

fn build_wireframe(radius: f64, height: f64, sides: u32) -> Wireframe {
    let mut vertices = Vec::with_capacity(2 * sides as usize);
    let mut edges = Vec::with_capacity(3 * sides as usize);

    for i in 0..sides {
        let theta = polygon_angle(i, sides);
        let (sin, cos) = theta.sin_cos();
        vertices.push(DVec3::new(radius * cos, radius * sin, 0.0));
        vertices.push(DVec3::new(radius * cos, radius * sin, height));

        if i > 0 {
            let (prev_bottom, prev_top) = (2 * (i - 1), 2 * (i - 1) + 1);
            edges.push([prev_bottom, prev_top]);
            edges.push([prev_bottom, 2 * i]);
            edges.push([prev_top, 2 * i + 1]);
        }
    }

    let (last_bottom, last_top) = (2 * (sides - 1), 2 * (sides - 1) + 1);
    edges.push([last_bottom, last_top]);
    edges.push([last_top, 1]);
    edges.push([last_bottom, 0]);

    Wireframe { vertices, edges }
}

fn build_solid(wireframe: &Wireframe, height: f64, sides: u32) -> MeshResult<Mesh> {
    let ring = 2 * sides;
    let mut mesh = Mesh::with_capacity(ring as usize + 2, 4 * sides as usize);
    for &v in &wireframe.vertices {
        mesh.add_vertex(v);
    }
    let bottom_centre = mesh.add_vertex(DVec3::ZERO);
    let top_centre = mesh.add_vertex(DVec3::new(0.0, 0.0, height));

    let bottom = |i: u32| (2 * i) % ring;
    let top = |i: u32| (2 * i + 1) % ring;

    for i in 0..sides {
        let n = mesh.add_normal(DVec3::NEG_Z);
        mesh.add_face(Face::with_normal(vec![bottom(i), bottom_centre, bottom(i + 1)], n))?;
    }
    for i in 0..sides {
        let n = mesh.add_normal(DVec3::Z);
        mesh.add_face(Face::with_normal(vec![top(i), top(i + 1), top_centre], n))?;
    }
    for i in 0..sides {
        let mid = polygon_angle(i, sides) + TAU / (2.0 * f64::from(sides));
        let radial = DVec3::new(mid.cos(), mid.sin(), 0.0);
        for corners in [
            vec![bottom(i), top(i + 1), top(i)],
            vec![bottom(i), bottom(i + 1), top(i + 1)],
        ] {
            let n = mesh.add_normal(radial);
            mesh.add_face(Face::with_normal(corners, n))?;
        }
    }

    Ok(mesh)
}
