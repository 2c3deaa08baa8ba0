//! File operation functionality
//!
//! This module performs the copy or move of a single file.

use std::fs::{self, File, FileTimes};
use std::path::Path;

use fs_extra::file::{CopyOptions, copy, move_file};
use log::debug;

use crate::config::Action;
use crate::errors::{Result, file_operation_error};

/// Performs the configured action for one file
///
/// An existing target file is overwritten without being checked.
///
/// # Arguments
/// * `source_path` - The file to copy or move
/// * `target_path` - Where the file ends up
/// * `action` - Copy or rename
///
/// # Errors
/// * Returns an error if the file operation fails
pub fn perform_file_action(source_path: &Path, target_path: &Path, action: Action) -> Result<()> {
    let options = CopyOptions::new().overwrite(true);

    match action {
        Action::Copy => {
            debug!(
                "Copying file: {} -> {}",
                source_path.display(),
                target_path.display()
            );
            copy(source_path, target_path, &options).map_err(|e| {
                file_operation_error(std::io::Error::other(e), source_path.to_path_buf(), "copy")
            })?;
            copy_timestamps(source_path, target_path)?;
        }
        Action::Rename => {
            debug!(
                "Moving file: {} -> {}",
                source_path.display(),
                target_path.display()
            );
            move_file(source_path, target_path, &options).map_err(|e| {
                file_operation_error(std::io::Error::other(e), source_path.to_path_buf(), "move")
            })?;
        }
    }

    Ok(())
}

/// Gives `target_path` the access and modification times of `source_path`
fn copy_timestamps(source_path: &Path, target_path: &Path) -> Result<()> {
    let metadata = fs::metadata(source_path)
        .map_err(|e| file_operation_error(e, source_path.to_path_buf(), "read metadata of"))?;

    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }

    open_for_timestamps(target_path)
        .and_then(|file| file.set_times(times))
        .map_err(|e| file_operation_error(e, target_path.to_path_buf(), "set timestamps of"))
}

/// Opens a file so that its timestamps can be set
///
/// The copy carries the source permissions, so a read-only source gives a
/// read-only target. No write access to the content is requested.
#[cfg(unix)]
fn open_for_timestamps(path: &Path) -> std::io::Result<File> {
    // futimens only needs the caller to own the file
    File::open(path)
}

#[cfg(windows)]
fn open_for_timestamps(path: &Path) -> std::io::Result<File> {
    use std::os::windows::fs::OpenOptionsExt;

    const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
    File::options().access_mode(FILE_WRITE_ATTRIBUTES).open(path)
}

#[cfg(not(any(unix, windows)))]
fn open_for_timestamps(path: &Path) -> std::io::Result<File> {
    File::options().write(true).open(path)
}
