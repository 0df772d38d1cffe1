//! Input file loading and filetype/name derivation.

use crate::error::PasteError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{error, info};

/// Filetype used when the input path carries no extension.
pub const DEFAULT_FILETYPE: &str = "txt";

/// Everything the paste needs to know about the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub filetype: String,
    pub filename: String,
    pub contents: Vec<u8>,
}

/// Splits a path into `(filename, filetype)`.
///
/// The filename is the base name with exactly `"." + extension` removed, so
/// `report.md` gives `("report", "md")` and `dd.md` gives `("dd", "md")`.
/// Paths without an extension (including dotfiles like `.bashrc`) keep their
/// full base name and get [`DEFAULT_FILETYPE`].
pub fn derive_name_and_type(path: &Path) -> (String, String) {
    let base = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .filter(|e| !e.is_empty());

    match ext {
        Some(ext) => {
            let suffix = format!(".{ext}");
            let name = base
                .strip_suffix(suffix.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| base.clone());
            (name, ext)
        }
        None => (base, DEFAULT_FILETYPE.to_string()),
    }
}

/// Reads the file at `path` and derives its metadata.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<FileMetadata, PasteError> {
    let path = path.as_ref();
    info!(input_path = ?path, "Loading input file");

    let contents = fs::read(path).map_err(|e| {
        error!(error = ?e, input_path = ?path, "Failed to read input file");
        match e.kind() {
            ErrorKind::NotFound => PasteError::InputFileNotFound {
                path: path.to_path_buf(),
            },
            _ => PasteError::InputFileUnreadable {
                path: path.to_path_buf(),
                source: e,
            },
        }
    })?;

    let (filename, filetype) = derive_name_and_type(path);
    info!(
        filename = %filename,
        filetype = %filetype,
        bytes = contents.len(),
        "Input file loaded"
    );

    Ok(FileMetadata {
        filetype,
        filename,
        contents,
    })
}
