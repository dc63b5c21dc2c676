//! Input file sources

use std::path::{Path, PathBuf};

/// One input file for the pipeline: either a path on disk or an in-memory
/// upload that still needs a temporary on-disk home.
#[derive(Debug, Clone)]
pub enum FileSource {
    /// A file already on disk
    Path(PathBuf),

    /// Raw bytes received with a filename (e.g. an upload)
    Bytes {
        /// Original filename, used for extension dispatch and reporting
        name: String,
        /// Raw file contents
        data: Vec<u8>,
    },
}

impl FileSource {
    /// Source from a path on disk.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        FileSource::Path(path.into())
    }

    /// Source from in-memory bytes and their original filename.
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Self {
        FileSource::Bytes {
            name: name.into(),
            data,
        }
    }

    /// Display name for progress output and failure records.
    pub fn name(&self) -> String {
        match self {
            FileSource::Path(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            FileSource::Bytes { name, .. } => name.clone(),
        }
    }

    /// The filename's extension, lowercased, used for temp-file suffixes.
    pub(crate) fn extension(&self) -> Option<String> {
        let name = match self {
            FileSource::Path(path) => return extension_of(path),
            FileSource::Bytes { name, .. } => name,
        };
        extension_of(Path::new(name))
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}
