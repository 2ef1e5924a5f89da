use strip_mesh::io::{parse, serialize};
use strip_mesh::parts::{PartDescriptor, SocketTable};
use strip_mesh::pipeline::{generate, write_artifacts};
use strip_mesh::{InMemoryFilesystem, MeshError, MeshReport, PartKind, PartLibrary, StripParams};

const TUBE: &str = "\
v 0 0 -39.5
v 0 0 0
v 45 0 -39.5
v 45 0 0
v 0 5 -39.5
v 0 5 0
v 45 5 -39.5
v 45 5 0
f 5 6 2
f 5 2 1
f 3 4 8
f 3 8 7
f 1 3 7
f 1 7 5
f 6 8 4
f 6 4 2
";

const TEMPLATE: &str = "\
# enclosure
v 0.000000 0.000000 0.000000
v 20.000000 0.000000 -10.000000
v 17.000000 0.000000 -7.000000
f 1 2 3
";

/// Builtin file names, tube contents.
fn library() -> PartLibrary<InMemoryFilesystem> {
    let mut fs = InMemoryFilesystem::default();
    fs.insert("European modified.obj", TUBE);
    fs.insert("tube.obj", TUBE);
    let mut library = PartLibrary::new(fs);
    library.register(PartDescriptor {
        kind: PartKind::American,
        source: "tube.obj".into(),
        sockets: SocketTable([1, 2, 3, 4, 5, 6, 7, 8]),
        lateral_offset: 0.0,
    });
    library
}

fn params(kind: PartKind, num_parts: u32) -> StripParams {
    StripParams {
        num_parts,
        kind,
        pitch: 25.0,
        lateral_gap: 15.0,
        vertical_gap: 25.0,
    }
}

#[test]
fn builtin_european_table_rejects_small_mesh() {
    // the builtin anchors point far past the 8 tube vertices
    let err = generate(&library(), TEMPLATE, &params(PartKind::European, 2)).unwrap_err();
    assert!(matches!(
        err,
        MeshError::InvalidSocketTable {
            kind: PartKind::European,
            index: 528,
            vertex_count: 8,
            ..
        }
    ));
}

#[test]
fn end_to_end_strip_is_closed() {
    let artifacts = generate(&library(), TEMPLATE, &params(PartKind::American, 4)).unwrap();
    let report = MeshReport::analyze(&artifacts.top);
    assert!(report.is_closed(), "{report}");
    assert_eq!(artifacts.top.vertex_count(), 60);
    assert!(artifacts.bottom.contains("v 305.000000 0.000000 -75.000000\n"));
    assert!(artifacts.bottom.contains("v 302.000000 0.000000 -72.000000\n"));
}

#[test]
fn serialized_strip_parses_back() {
    let artifacts = generate(&library(), TEMPLATE, &params(PartKind::American, 3)).unwrap();
    let text = serialize(&artifacts.top);
    let parsed = parse(&text).unwrap();
    assert_eq!(parsed.vertices(), artifacts.top.vertices());
    assert_eq!(parsed.faces(), artifacts.top.faces());
    assert_eq!(serialize(&parsed), text);
}

#[test]
fn artifacts_land_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = generate(&library(), TEMPLATE, &params(PartKind::American, 2)).unwrap();
    let [top, bottom] = write_artifacts(&artifacts, dir.path()).unwrap();
    assert_eq!(top.file_name().unwrap(), "output_top.obj");
    assert_eq!(bottom.file_name().unwrap(), "output_bottom.obj");
    let top_text = std::fs::read_to_string(top).unwrap();
    assert_eq!(top_text.lines().filter(|l| l.starts_with("f ")).count(), 76);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let p = params(PartKind::American, 5);
    let a = serialize(&generate(&library(), TEMPLATE, &p).unwrap().top);
    let b = serialize(&generate(&library(), TEMPLATE, &p).unwrap().top);
    assert_eq!(a, b);
}
