use std::path::{Path, PathBuf};

/// File extension of nokch source files.
pub const SOURCE_EXTENSION: &str = "nkch";

/// Checks that `path` names an existing `.nkch` file.
///
/// Used as the value parser for the command-line `path` argument, so a bad
/// path is rejected before any source is read.
///
/// ## Errors
/// Returns a message if the path does not exist, is not a regular file, or
/// does not end in `.nkch`.
///
/// ## Example
/// ```
/// use nokch::util::source::validate_source_path;
///
/// assert!(validate_source_path("missing/script.nkch").is_err());
/// assert!(validate_source_path("Cargo.toml").is_err());
/// assert!(validate_source_path("src").is_err());
/// ```
pub fn validate_source_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(format!("{} does not exist", path.display()));
    }
    if !path.is_file() {
        return Err(format!("{} is not a file", path.display()));
    }
    if !has_source_extension(&path) {
        return Err(format!("{} must have .{SOURCE_EXTENSION} extension", path.display()));
    }
    Ok(path)
}

/// Returns `true` if `path` ends in `.nkch`.
///
/// ## Example
/// ```
/// use std::path::Path;
///
/// use nokch::util::source::has_source_extension;
///
/// assert!(has_source_extension(Path::new("demo/loop.nkch")));
/// assert!(!has_source_extension(Path::new("demo/loop.nk")));
/// ```
#[must_use]
pub fn has_source_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

/// Name under which a source file is shown in diagnostics.
///
/// The absolute path when it can be resolved, otherwise the path as given.
#[must_use]
pub fn display_name(path: &Path) -> String {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
                             .display()
                             .to_string()
}
