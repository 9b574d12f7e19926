use std::fs;
use std::io;
use std::path::Path;

pub fn exists(path: &Path) -> Option<&Path> {
    if !fs::metadata(path).is_ok() {
        return None;
    }
    Some(path)
}

/// Ensures the directory for `path` exists. A path with an extension is
/// treated as a file, so its parent is created instead.
pub fn with_dir(path: &Path) -> io::Result<()> {
    let dir = if path.extension().is_some() {
        path.parent().unwrap_or_else(|| Path::new("/"))
    } else {
        path
    };

    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
