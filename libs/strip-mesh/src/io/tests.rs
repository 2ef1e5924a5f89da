//! # Mesh I/O Tests

use super::*;
use crate::error::MeshError;
use crate::mesh::{Face, Mesh};
use glam::DVec3;

fn sample_mesh() -> Mesh {
    let mut mesh = Mesh::new();
    mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
    mesh.add_vertex(DVec3::new(1.5, -2.25, 0.1));
    mesh.add_vertex(DVec3::new(1.0 / 3.0, 1e-7, 12345.678));
    mesh.add_vertex(DVec3::new(-0.5, 8.0, -3.75));
    mesh.add_normal(DVec3::Z);
    mesh.add_face(Face::with_normal(vec![0, 1, 2], 0)).unwrap();
    mesh.add_face(Face::triangle(0, 2, 3)).unwrap();
    mesh.add_face(Face {
        vertices: vec![0, 1, 2, 3],
        normals: None,
    })
    .unwrap();
    mesh
}

#[test]
fn test_roundtrip_preserves_positions_and_faces() {
    let mesh = sample_mesh();
    let parsed = parse(&serialize(&mesh)).unwrap();
    assert_eq!(parsed.vertices(), mesh.vertices());
    assert_eq!(parsed.normals(), mesh.normals());
    let tuples: Vec<_> = parsed.faces().iter().map(|f| f.vertices.clone()).collect();
    let expected: Vec<_> = mesh.faces().iter().map(|f| f.vertices.clone()).collect();
    assert_eq!(tuples, expected);
}

#[test]
fn test_serialize_layout() {
    let text = serialize(&sample_mesh());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "v 0 0 0");
    assert_eq!(lines[4], "vn 0 0 1");
    assert_eq!(lines[5], "f 1//1 2//1 3//1");
    assert_eq!(lines[6], "f 1 3 4");
    assert_eq!(lines[7], "f 1 2 3 4");
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_serialize_is_deterministic() {
    let mesh = sample_mesh();
    assert_eq!(serialize(&mesh), serialize(&mesh.clone()));
}

#[test]
fn test_parse_reference_forms() {
    let text = "\
# comment
o part
v 0 0 0
v 1 0 0
v 0 1 0 1.0
vt 0.5 0.5
vn 0 0 1
f 1 2 3
f 1//1 2//1 3//1
f 1/1/1 2/1/1 3/1/1
f 1/1 2/1 3/1
usemtl none
";
    let mesh = parse(text).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.normal_count(), 1);
    assert_eq!(mesh.face_count(), 4);
    assert_eq!(mesh.faces()[0].normals, None);
    assert_eq!(mesh.faces()[1].normals, Some(vec![0, 0, 0]));
    assert_eq!(mesh.faces()[2].normals, Some(vec![0, 0, 0]));
    assert_eq!(mesh.faces()[3].normals, None);
}

#[test]
fn test_parse_allows_late_vertices() {
    let mesh = parse("f 1 2 3\nv 0 0 0\nv 1 0 0\nv 0 1 0\n").unwrap();
    assert_eq!(mesh.face_count(), 1);
}

#[test]
fn test_parse_rejects_out_of_range_face() {
    let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n").unwrap_err();
    assert!(matches!(err, MeshError::MalformedMeshFile { line: 4, .. }));
}

#[test]
fn test_parse_rejects_zero_index() {
    let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n").unwrap_err();
    assert!(matches!(err, MeshError::MalformedMeshFile { line: 4, .. }));
}

#[test]
fn test_parse_rejects_bad_coordinate() {
    let err = parse("v 0 zero 0\n").unwrap_err();
    assert!(matches!(err, MeshError::MalformedMeshFile { line: 1, .. }));
    let err = parse("v 0 0\n").unwrap_err();
    assert!(matches!(err, MeshError::MalformedMeshFile { line: 1, .. }));
}

#[test]
fn test_parse_rejects_short_face() {
    let err = parse("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
    assert!(matches!(err, MeshError::MalformedMeshFile { line: 3, .. }));
}

#[test]
fn test_parse_rejects_mixed_normals() {
    let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2 3\n").unwrap_err();
    assert!(matches!(err, MeshError::MalformedMeshFile { line: 5, .. }));
}

#[test]
fn test_parse_rejects_missing_normal() {
    let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1//1 2//1 3//1\n").unwrap_err();
    assert!(matches!(err, MeshError::MalformedMeshFile { line: 4, .. }));
}

#[test]
fn test_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.obj");
    let mesh = sample_mesh();
    write_obj(&mesh, &path).unwrap();
    let read = read_obj(&path).unwrap();
    assert_eq!(read.vertices(), mesh.vertices());
    assert_eq!(read.face_count(), mesh.face_count());
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_obj(dir.path().join("missing.obj")).unwrap_err();
    assert!(matches!(err, MeshError::IoFailure { .. }));
}
