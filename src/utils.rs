use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, config_parsing_error, file_operation_error};

/// Expands `~` and environment variables in a path taken from the control file
pub fn expand_path(value: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(value)
        .map_err(|e| config_parsing_error(e, &format!("Failed to expand path '{value}'")))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Makes a path absolute without touching the filesystem
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "resolve absolute path of"))
}

/// Platform configuration folder of the application, if one can be determined
pub(crate) fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|folder| folder.config_dir().to_path_buf())
}

/// Groups items into lines of `per_line` entries joined by `", "`
///
/// A `per_line` of zero puts everything on a single line. An empty slice
/// produces no lines.
pub fn format_batches<S: AsRef<str>>(items: &[S], per_line: usize) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }

    let chunk_size = if per_line == 0 { items.len() } else { per_line };

    items
        .chunks(chunk_size)
        .map(|chunk| {
            chunk
                .iter()
                .map(|item| item.as_ref())
                .collect::<Vec<&str>>()
                .join(", ")
        })
        .collect()
}
