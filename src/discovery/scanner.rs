//! Directory listing functionality
//!
//! This module lists the immediate children of the source directory.

use std::fs::read_dir;
use std::path::Path;

use log::{debug, warn};

use crate::errors::{Result, file_operation_error};

/// Immediate children of a directory, split by kind
///
/// Both lists keep the enumeration order of the filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    /// Names of the subdirectories
    pub directories: Vec<String>,
    /// Names of the regular files that passed the extension filter
    pub files: Vec<String>,
}

/// Returns true if `file_name` passes the extension filter
///
/// No filter accepts every name. With a filter, the name must end with at
/// least one of the suffixes.
pub fn matches_extension_filter(file_name: &str, extension_filter: Option<&[String]>) -> bool {
    match extension_filter {
        None => true,
        Some(suffixes) => suffixes.iter().any(|suffix| file_name.ends_with(suffix.as_str())),
    }
}

/// Lists a directory
///
/// A path that does not exist or is not a directory yields an empty listing.
/// Names that are not valid Unicode are skipped.
///
/// # Arguments
/// * `directory` - The directory to list
/// * `extension_filter` - Optional list of suffixes a file name must end with
///
/// # Errors
/// Returns an error if an existing directory cannot be read
pub fn list_directory(
    directory: &Path,
    extension_filter: Option<&[String]>,
) -> Result<DirectoryListing> {
    let mut listing = DirectoryListing::default();

    if !directory.is_dir() {
        debug!("{} is not a directory, nothing to list", directory.display());
        return Ok(listing);
    }

    let entries = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "list"))?;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {e}", directory.display());
                continue;
            }
        };
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!("Skipping entry with a non-Unicode name: {}", path.display());
            continue;
        };

        if path.is_dir() {
            listing.directories.push(name);
        } else if path.is_file() && matches_extension_filter(&name, extension_filter) {
            listing.files.push(name);
        }
    }

    debug!(
        "Found {} directories and {} files in {}",
        listing.directories.len(),
        listing.files.len(),
        directory.display()
    );

    Ok(listing)
}
