//! Small formatting helpers shared by the library and the CLI.

use std::path::Path;

/// Format a byte count as a human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}

/// Size of the file at `path` in bytes.
///
/// Reports 0 when the size cannot be read; the lookup error is logged.
pub fn file_size_of(path: &Path) -> u64 {
    match std::fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            log::debug!("could not read size of {}: {e}", path.display());
            0
        }
    }
}

/// The file name of `path` for display, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
