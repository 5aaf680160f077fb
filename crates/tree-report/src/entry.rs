//! Filesystem entries as a report source.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use reportree::Enumerable;
use tracing::{trace, warn};

/// What a filesystem entry is. Symlinks are never followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Dir,
    File,
    Symlink,
    Other,
}

impl Kind {
    fn of(file_type: fs::FileType) -> Kind {
        if file_type.is_symlink() {
            Kind::Symlink
        } else if file_type.is_dir() {
            Kind::Dir
        } else if file_type.is_file() {
            Kind::File
        } else {
            Kind::Other
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Dir => "dir",
            Kind::File => "file",
            Kind::Symlink => "symlink",
            Kind::Other => "other",
        })
    }
}

/// A file or directory, with its distance from the report root.
///
/// Directory children are listed sorted by name. Directories that cannot
/// be read are logged and treated as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    name: String,
    kind: Kind,
    depth: usize,
}

impl Entry {
    /// Opens `path` as a report root, at depth 0.
    pub fn open(path: &Path) -> io::Result<Entry> {
        let metadata = fs::symlink_metadata(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Entry {
            path: path.to_path_buf(),
            name,
            kind: Kind::of(metadata.file_type()),
            depth: 0,
        })
    }

    fn child(&self, entry: fs::DirEntry) -> io::Result<Entry> {
        Ok(Entry {
            name: entry.file_name().to_string_lossy().into_owned(),
            kind: Kind::of(entry.file_type()?),
            path: entry.path(),
            depth: self.depth + 1,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Enumerable for Entry {
    type Children = Vec<Entry>;

    fn children(&self) -> Self::Children {
        if self.kind != Kind::Dir {
            return Vec::new();
        }

        let listing = match fs::read_dir(&self.path) {
            Ok(listing) => listing,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "cannot list directory");
                return Vec::new();
            }
        };

        let mut children: Vec<Entry> = listing
            .filter_map(|entry| match entry.and_then(|entry| self.child(entry)) {
                Ok(child) => Some(child),
                Err(err) => {
                    warn!(path = %self.path.display(), error = %err, "skipping unreadable entry");
                    None
                }
            })
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));

        trace!(path = %self.path.display(), children = children.len(), "listed directory");
        children
    }
}
