//! Shared fixtures for unit tests.

use crate::parts::{InMemoryFilesystem, PartDescriptor, PartKind, PartLibrary, SocketTable};

/// Rectangular sleeve through the channel thickness: four walls around one
/// part footprint, open at y = 0 and y = 5 where the channel's socket holes
/// meet it.
pub const TUBE_OBJ: &str = "\
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

pub const TUBE_FILE: &str = "tube.obj";

/// Descriptor pointing `kind` at the tube with anchors 1..=8.
pub fn tube_descriptor(kind: PartKind) -> PartDescriptor {
    PartDescriptor {
        kind,
        source: TUBE_FILE.to_string(),
        sockets: SocketTable([1, 2, 3, 4, 5, 6, 7, 8]),
        lateral_offset: 0.0,
    }
}

/// Library whose every kind resolves to the tube.
pub fn tube_library() -> PartLibrary<InMemoryFilesystem> {
    let mut fs = InMemoryFilesystem::default();
    fs.insert(TUBE_FILE, TUBE_OBJ);
    let mut library = PartLibrary::new(fs);
    for kind in PartKind::ALL {
        library.register(tube_descriptor(kind));
    }
    library
}
