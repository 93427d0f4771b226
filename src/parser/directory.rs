use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{RewriteError, RewriteErrorKind, RewriteResult};
use crate::parser::filter::is_json_file;

/// Find JSON files in a directory. If recursive is true, use walkdir; otherwise list
/// immediate entries only. Order is whatever the filesystem returns.
pub fn find_json_files(dir: &Path, recursive: bool) -> RewriteResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(RewriteError::rewrite(RewriteErrorKind::NotADirectory {
            path: dir.to_path_buf(),
        }));
    }

    let mut json_files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir).follow_links(false) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                RewriteError::io(e.into(), &path)
            })?;
            if is_json_file(entry.path()) {
                json_files.push(entry.into_path());
            }
        }
    } else {
        for entry in fs::read_dir(dir).map_err(|e| RewriteError::io(e, dir))? {
            let entry = entry.map_err(|e| RewriteError::io(e, dir))?;
            let path = entry.path();
            if is_json_file(&path) {
                json_files.push(path);
            }
        }
    }

    tracing::debug!(dir = %dir.display(), recursive, count = json_files.len(), "listed json files");
    Ok(json_files)
}
