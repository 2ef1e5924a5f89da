//! OBJ reader and writer.

use std::fs;
use std::path::Path;

use glam::DVec3;
use log::debug;

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Face, Mesh};

/// A face as read from text, before its references are checked.
struct RawFace {
    line: usize,
    vertices: Vec<u32>,
    normals: Option<Vec<u32>>,
}

/// Parses mesh text into a [`Mesh`].
///
/// References are 1-based on input and 0-based in the returned mesh. A face
/// may reference vertices declared later in the file; every reference must
/// resolve once the whole text has been read.
///
/// # Example
///
/// ```rust
/// let mesh = strip_mesh::io::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.faces()[0].vertices, vec![0, 1, 2]);
/// ```
pub fn parse(text: &str) -> MeshResult<Mesh> {
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut faces = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("v") => vertices.push(parse_triple(fields, line_no, "vertex")?),
            Some("vn") => normals.push(parse_triple(fields, line_no, "normal")?),
            Some("f") => faces.push(parse_face(fields, line_no)?),
            // comments, texture coordinates, groups, materials...
            _ => {}
        }
    }

    let mut mesh = Mesh::with_capacity(vertices.len(), faces.len());
    for v in vertices {
        mesh.add_vertex(v);
    }
    for n in normals {
        mesh.add_normal(n);
    }
    for raw in faces {
        let line = raw.line;
        let face = Face {
            vertices: raw.vertices,
            normals: raw.normals,
        };
        mesh.add_face(face)
            .map_err(|err| MeshError::malformed(line, err.to_string()))?;
    }

    debug!(
        "parsed mesh: {} vertices, {} normals, {} faces",
        mesh.vertex_count(),
        mesh.normal_count(),
        mesh.face_count()
    );
    Ok(mesh)
}

fn parse_triple<'a>(
    mut fields: impl Iterator<Item = &'a str>,
    line: usize,
    what: &str,
) -> MeshResult<DVec3> {
    let mut coords = [0.0; 3];
    for coord in &mut coords {
        let field = fields
            .next()
            .ok_or_else(|| MeshError::malformed(line, format!("{what} needs 3 coordinates")))?;
        *coord = field
            .parse()
            .map_err(|_| MeshError::malformed(line, format!("invalid {what} coordinate '{field}'")))?;
    }
    Ok(DVec3::from_array(coords))
}

fn parse_face<'a>(fields: impl Iterator<Item = &'a str>, line: usize) -> MeshResult<RawFace> {
    let mut vertices = Vec::new();
    let mut normals = Vec::new();

    for reference in fields {
        let mut parts = reference.split('/');
        let vertex = parts.next().unwrap_or_default();
        vertices.push(parse_index(vertex, line)?);
        // `i/t/n` or `i//n`; a bare texture reference carries no normal
        if let Some(normal) = parts.nth(1).filter(|n| !n.is_empty()) {
            normals.push(parse_index(normal, line)?);
        }
    }

    if vertices.len() < 3 {
        return Err(MeshError::malformed(
            line,
            format!("face needs at least 3 references, got {}", vertices.len()),
        ));
    }
    let normals = match normals.len() {
        0 => None,
        n if n == vertices.len() => Some(normals),
        _ => {
            return Err(MeshError::malformed(
                line,
                "face mixes references with and without normals",
            ))
        }
    };

    Ok(RawFace {
        line,
        vertices,
        normals,
    })
}

fn parse_index(field: &str, line: usize) -> MeshResult<u32> {
    match field.parse::<u32>() {
        Ok(index) if index >= 1 => Ok(index - 1),
        _ => Err(MeshError::malformed(
            line,
            format!("invalid 1-based index '{field}'"),
        )),
    }
}

/// Serializes a mesh: positions, then normals, then faces.
///
/// Coordinates use the shortest representation that parses back to the same
/// `f64`, so [`parse`] reproduces positions and index tuples exactly.
pub fn serialize(mesh: &Mesh) -> String {
    let mut out = String::with_capacity(
        mesh.vertex_count() * 32 + mesh.normal_count() * 32 + mesh.face_count() * 24,
    );

    for v in mesh.vertices() {
        out.push_str(&format!("v {} {} {}\n", v.x, v.y, v.z));
    }
    for n in mesh.normals() {
        out.push_str(&format!("vn {} {} {}\n", n.x, n.y, n.z));
    }
    for face in mesh.faces() {
        out.push('f');
        match &face.normals {
            Some(normals) => {
                for (v, n) in face.vertices.iter().zip(normals) {
                    out.push_str(&format!(" {}//{}", v + 1, n + 1));
                }
            }
            None => {
                for v in &face.vertices {
                    out.push_str(&format!(" {}", v + 1));
                }
            }
        }
        out.push('\n');
    }

    out
}

/// Reads and parses a mesh file.
pub fn read_obj(path: impl AsRef<Path>) -> MeshResult<Mesh> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| MeshError::io(path, err))?;
    parse(&text)
}

/// Serializes a mesh into a file, replacing any existing content.
pub fn write_obj(mesh: &Mesh, path: impl AsRef<Path>) -> MeshResult<()> {
    let path = path.as_ref();
    fs::write(path, serialize(mesh)).map_err(|err| MeshError::io(path, err))
}
