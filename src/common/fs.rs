//! File system helpers with unified error handling

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::SourceId;
use crate::error::Result;
use crate::error::fs::write_failed;
use crate::error::split::unsafe_output_name;

/// Write `contents` to `path` via a temp file in the same directory, so
/// readers never observe a half-written file
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(|e| write_failed(path, e))?;

    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| write_failed(path, e))?;
    tmp.write_all(contents).map_err(|e| write_failed(path, e))?;
    tmp.flush().map_err(|e| write_failed(path, e))?;
    tmp.persist(path).map_err(|e| write_failed(path, e.error))?;
    Ok(())
}

/// File name for the table recovered from `source`: `<prefix><source>`, with
/// `.csv` appended when the source has no extension.
///
/// Sources that would escape the output directory are rejected.
pub fn split_output_name(prefix: &str, source: &SourceId) -> Result<String> {
    let tag = source.as_str();
    let unsafe_name = tag == "."
        || tag == ".."
        || tag.contains(['/', '\\'])
        || tag.chars().any(char::is_control);
    if unsafe_name {
        return Err(unsafe_output_name(tag));
    }

    let has_extension = Path::new(tag)
        .extension()
        .is_some_and(|ext| !ext.is_empty());
    if has_extension {
        Ok(format!("{prefix}{tag}"))
    } else {
        Ok(format!("{prefix}{tag}.csv"))
    }
}
