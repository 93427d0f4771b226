use std::path::Path;

/// Suffix a file name must end with to be selected
pub const JSON_SUFFIX: &str = ".json";

/// Return true if the file name ends with `.json` and the path is a regular file
pub fn is_json_file(path: &Path) -> bool {
    has_json_suffix(path) && path.is_file()
}

/// Literal suffix check on the file name, case-sensitive
pub fn has_json_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(JSON_SUFFIX))
}
