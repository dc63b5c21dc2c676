//! Input directory scanning

use std::io;
use std::path::{Path, PathBuf};

/// Extensions the pipeline accepts, matched case-insensitively.
const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// True when the path looks like a document the extractor can handle.
pub fn is_supported_document(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lowered = e.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lowered.as_str())
        })
        .unwrap_or(false)
}

/// Scan a directory (non-recursively) for supported documents.
///
/// Returns the matching paths sorted by filename so batch runs process
/// files in a deterministic order.
pub fn scan_input_dir(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_supported_document(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_supported_extensions_are_case_insensitive() {
        assert!(is_supported_document(Path::new("r.pdf")));
        assert!(is_supported_document(Path::new("r.PDF")));
        assert!(is_supported_document(Path::new("r.Docx")));
        assert!(!is_supported_document(Path::new("r.txt")));
        assert!(!is_supported_document(Path::new("report")));
    }

    #[test]
    fn test_scan_is_non_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.pdf"), b"x").unwrap();
        fs::write(dir.path().join("a.docx"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("c.pdf"), b"x").unwrap();

        let paths = scan_input_dir(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.docx", "b.pdf"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        assert!(scan_input_dir(Path::new("/nonexistent/input")).is_err());
    }
}
