//! # Part Library
//!
//! Prefabricated receptacle parts: a mesh file plus a table of eight named
//! socket anchors where the channel attaches. Descriptors live in a registry
//! keyed by [`PartKind`], so the assembler never branches on the kind.

pub mod filesystem;


use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use config::constants::{
    AMERICAN_LATERAL_OFFSET_MM, AMERICAN_PART_FILE, AMERICAN_SOCKET_ANCHORS,
    EUROPEAN_LATERAL_OFFSET_MM, EUROPEAN_PART_FILE, EUROPEAN_SOCKET_ANCHORS,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::io;
use crate::mesh::Mesh;

pub use filesystem::{FileSystem, FileSystemError, InMemoryFilesystem, OsFilesystem};

// =============================================================================
// PART KIND
// =============================================================================

/// Receptacle standard of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    #[serde(alias = "European")]
    European,
    #[serde(alias = "American")]
    American,
}

impl PartKind {
    /// Every known kind.
    pub const ALL: [PartKind; 2] = [PartKind::European, PartKind::American];
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartKind::European => f.write_str("European"),
            PartKind::American => f.write_str("American"),
        }
    }
}

impl FromStr for PartKind {
    type Err = MeshError;

    /// Parses a kind name, ignoring case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strip_mesh::parts::PartKind;
    /// assert_eq!("EUROPEAN".parse::<PartKind>().unwrap(), PartKind::European);
    /// assert!("British".parse::<PartKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartKind::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MeshError::UnknownPartKind(s.to_string()))
    }
}

// =============================================================================
// SOCKET TABLE
// =============================================================================

/// Names of the eight socket anchors, in table order.
pub const ANCHOR_NAMES: [&str; 8] = [
    "top near-left",
    "top far-left",
    "top near-right",
    "top far-right",
    "bottom near-left",
    "bottom far-left",
    "bottom near-right",
    "bottom far-right",
];

/// Socket anchors as authored: 1-based vertex indices in [`ANCHOR_NAMES`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketTable(pub [u32; 8]);

impl SocketTable {
    /// Checks every anchor against `vertex_count` and converts to 0-based.
    pub fn resolve(&self, kind: PartKind, vertex_count: usize) -> MeshResult<Sockets> {
        let mut resolved = [0u32; 8];
        for (slot, (&index, anchor)) in resolved.iter_mut().zip(self.0.iter().zip(ANCHOR_NAMES)) {
            if index == 0 || index as usize > vertex_count {
                return Err(MeshError::InvalidSocketTable {
                    kind,
                    anchor,
                    index,
                    vertex_count,
                });
            }
            *slot = index - 1;
        }
        Ok(Sockets(resolved))
    }
}

/// Validated 0-based socket anchors of a loaded part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sockets([u32; 8]);

impl Sockets {
    /// Top-side anchors: near-left, far-left, near-right, far-right.
    pub fn top(&self) -> [u32; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }

    /// Bottom-side anchors, same order as [`Sockets::top`].
    pub fn bottom(&self) -> [u32; 4] {
        [self.0[4], self.0[5], self.0[6], self.0[7]]
    }

    /// All eight anchors shifted by a merge offset.
    pub fn offset(&self, by: u32) -> [u32; 8] {
        self.0.map(|i| i + by)
    }
}

// =============================================================================
// DESCRIPTORS & PARTS
// =============================================================================

/// Where a part's mesh lives and how it attaches to the channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDescriptor {
    pub kind: PartKind,
    /// File name inside the library root.
    pub source: String,
    pub sockets: SocketTable,
    /// Y shift applied when the part is placed.
    pub lateral_offset: f64,
}

impl PartDescriptor {
    /// Built-in descriptor for `kind`.
    pub fn builtin(kind: PartKind) -> Self {
        match kind {
            PartKind::European => Self {
                kind,
                source: EUROPEAN_PART_FILE.to_string(),
                sockets: SocketTable(EUROPEAN_SOCKET_ANCHORS),
                lateral_offset: EUROPEAN_LATERAL_OFFSET_MM,
            },
            PartKind::American => Self {
                kind,
                source: AMERICAN_PART_FILE.to_string(),
                sockets: SocketTable(AMERICAN_SOCKET_ANCHORS),
                lateral_offset: AMERICAN_LATERAL_OFFSET_MM,
            },
        }
    }
}

/// A loaded part. Immutable; the assembler places translated copies.
#[derive(Debug, Clone)]
pub struct Part {
    pub kind: PartKind,
    pub mesh: Mesh,
    pub sockets: Sockets,
    pub lateral_offset: f64,
}

// =============================================================================
// LIBRARY
// =============================================================================

/// Registry of part descriptors backed by a [`FileSystem`].
///
/// # Example
///
/// ```rust
/// use strip_mesh::parts::{InMemoryFilesystem, PartKind, PartLibrary};
///
/// let library = PartLibrary::new(InMemoryFilesystem::default());
/// assert!(library.descriptor(PartKind::American).is_some());
/// assert!(library.load_part(PartKind::American).is_err()); // no file
/// ```
#[derive(Debug, Clone)]
pub struct PartLibrary<F> {
    fs: F,
    registry: HashMap<PartKind, PartDescriptor>,
}

impl<F: FileSystem> PartLibrary<F> {
    /// Creates a library with the built-in descriptors registered.
    pub fn new(fs: F) -> Self {
        let mut library = Self::empty(fs);
        for kind in PartKind::ALL {
            library.register(PartDescriptor::builtin(kind));
        }
        library
    }

    /// Creates a library with no descriptors.
    pub fn empty(fs: F) -> Self {
        Self {
            fs,
            registry: HashMap::new(),
        }
    }

    /// Adds or replaces the descriptor for its kind, returning the previous one.
    pub fn register(&mut self, descriptor: PartDescriptor) -> Option<PartDescriptor> {
        self.registry.insert(descriptor.kind, descriptor)
    }

    /// Descriptor registered for `kind`.
    pub fn descriptor(&self, kind: PartKind) -> Option<&PartDescriptor> {
        self.registry.get(&kind)
    }

    /// Loads, parses and validates the part registered for `kind`.
    pub fn load_part(&self, kind: PartKind) -> MeshResult<Part> {
        let descriptor = self
            .registry
            .get(&kind)
            .ok_or_else(|| MeshError::UnknownPartKind(kind.to_string()))?;

        let text = self.fs.read_to_string(&descriptor.source)?;
        let mesh = io::parse(&text)?;
        let sockets = descriptor.sockets.resolve(kind, mesh.vertex_count())?;

        debug!(
            "loaded {kind} part from '{}': {} vertices, {} faces",
            descriptor.source,
            mesh.vertex_count(),
            mesh.face_count()
        );

        Ok(Part {
            kind,
            mesh,
            sockets,
            lateral_offset: descriptor.lateral_offset,
        })
    }

    /// Parses `name` as a [`PartKind`] and loads that part.
    pub fn load_part_named(&self, name: &str) -> MeshResult<Part> {
        self.load_part(name.parse()?)
    }
}
