//! Output file naming

use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_SUFFIX: &str = "_processed";

/// `<stem><suffix><.ext>` for the template file name
pub fn output_file_name(template_path: &Path, suffix: Option<&str>) -> String {
    let suffix = suffix.unwrap_or(DEFAULT_SUFFIX);
    let stem = template_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let extension = template_path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    format!("{}{}{}", stem, suffix, extension)
}

/// Downloads folder, else the current directory
pub fn default_output_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

pub fn output_path_in(dir: &Path, template_path: &Path, suffix: Option<&str>) -> PathBuf {
    dir.join(output_file_name(template_path, suffix))
}

/// True when both paths name the same file on disk.
///
/// Falls back to comparing the paths as given when either one does not exist.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Create the directory that will hold `path`
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
