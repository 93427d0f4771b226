//! File replacement strategies

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{RewriteError, RewriteResult};
use crate::rewrite::config::WriteMode;

/// Replace the contents of `path` with `content` using the given mode
pub fn write_file(path: &Path, content: &str, mode: WriteMode) -> RewriteResult<()> {
    match mode {
        WriteMode::Atomic => write_atomic(path, content),
        WriteMode::Direct => fs::write(path, content).map_err(|e| RewriteError::io(e, path)),
    }
}

/// Write into a temporary file in the target's directory, then rename it over the
/// target. The temporary file is removed when dropped without being persisted.
///
/// Symlinks are resolved first so the link stays in place and the file it points
/// to receives the new content.
pub fn write_atomic(path: &Path, content: &str) -> RewriteResult<()> {
    let resolved = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(RewriteError::io(e, path)),
    };
    let path = resolved.as_path();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| RewriteError::io(e, dir))?;
    temp.write_all(content.as_bytes())
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| RewriteError::io(e, temp.path()))?;

    // Keep the original file mode instead of the temp file's 0600
    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| RewriteError::io(e, path))?;
    }

    temp.persist(path)
        .map_err(|e| RewriteError::io(e.error, path))?;
    Ok(())
}
