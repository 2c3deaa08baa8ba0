//! Configuration loading functionality
//!
//! This module reads the control file and merges it with the command line into
//! the [`RunSettings`] of a run.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::errors::{
    Result, config_incomplete_error, config_missing_error, config_parsing_error,
    source_directory_missing_error,
};
use crate::utils::{expand_path, project_config_dir};

use super::model::{ControlConfig, RunSettings};

/// Directories given on the command line
///
/// When set they take precedence over the values of the control file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub source_directory: Option<PathBuf>,
    pub target_directory: Option<PathBuf>,
}

/// Locates the control file
///
/// A relative path that does not exist in the working directory is looked up
/// in the platform configuration folder of the application. The given path is
/// returned unchanged when neither exists, so the caller reports it.
pub fn locate_control_file(path: &Path) -> PathBuf {
    if path.is_file() || path.is_absolute() {
        return path.to_path_buf();
    }

    match project_config_dir() {
        Some(folder) if folder.join(path).is_file() => {
            debug!("Using control file from {}", folder.display());
            folder.join(path)
        }
        _ => path.to_path_buf(),
    }
}

/// Loads a control file
///
/// Files ending in `.yaml` or `.yml` are read as YAML, everything else as JSON.
///
/// # Errors
/// * `ConfigMissing` if the file is absent or unreadable
/// * `ConfigParsing` if the content does not describe a control configuration
pub fn load_control(file: &Path) -> Result<ControlConfig> {
    if !file.is_file() {
        return Err(config_missing_error(file.to_path_buf()));
    }

    let content = fs::read_to_string(file).map_err(|_| config_missing_error(file.to_path_buf()))?;

    let is_yaml = file
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| matches!(extension.to_lowercase().as_str(), "yaml" | "yml"));

    let control: ControlConfig = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| {
            config_parsing_error(
                e,
                &format!("Failed to parse control file {}", file.display()),
            )
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| {
            config_parsing_error(
                e,
                &format!("Failed to parse control file {}", file.display()),
            )
        })?
    };

    control.validate()?;

    // Echo the content to the trace the same way it is written on disk
    if let Ok(echo) = serde_json::to_string_pretty(&control) {
        debug!("Content of control file {}:\n{}", file.display(), echo);
    }

    Ok(control)
}

/// Merges a loaded control file with the command-line overrides
///
/// # Errors
/// * `ConfigIncomplete` if a directory or the structure file name is missing
/// * `SourceDirectoryMissing` if the source directory is not a directory
pub fn resolve_settings(
    control_file: &Path,
    control: ControlConfig,
    overrides: CliOverrides,
) -> Result<RunSettings> {
    let source_directory = match overrides.source_directory {
        Some(directory) => directory,
        None => match control.source_directory.as_deref() {
            Some(directory) => expand_path(directory)?,
            None => {
                return Err(config_incomplete_error(
                    "source_directory",
                    "A source directory must be provided either on the command line or in the control file.",
                ));
            }
        },
    };

    let target_directory = match overrides.target_directory {
        Some(directory) => directory,
        None => match control.target_directory.as_deref() {
            Some(directory) => expand_path(directory)?,
            None => {
                return Err(config_incomplete_error(
                    "target_directory",
                    "A target directory must be provided either on the command line or in the control file.",
                ));
            }
        },
    };

    if !source_directory.is_dir() {
        return Err(source_directory_missing_error(source_directory));
    }

    let structure_file = match control.target_file_structure_fname.as_deref() {
        Some(name) if !name.trim().is_empty() => expand_path(name)?,
        _ => {
            return Err(config_incomplete_error(
                "target_file_structure_fname",
                "A file name containing the target file structure must be provided in the control file.",
            ));
        }
    };

    Ok(RunSettings {
        control_file: control_file.to_path_buf(),
        source_directory,
        target_directory,
        structure_file,
        extension_filter: control.extension_filter,
        num_files_line: control.num_files_line,
        target_file_syntax: control.target_file_syntax.unwrap_or_default(),
        component_separator: control.component_separator,
        num_components: control.num_components,
        action: control.action,
        evaluate: control.evaluate,
        copy_rename: control.copy_rename,
        conflict_policy: control.conflict_policy,
        directory_separator: control.directory_separator,
    })
}

/// Reads the control file and resolves the settings of the run
///
/// Every configuration problem surfaces here, before any file is touched.
pub fn initialise(control_file: &Path, overrides: CliOverrides) -> Result<RunSettings> {
    let control_file = locate_control_file(control_file);
    let control = load_control(&control_file)?;
    let settings = resolve_settings(&control_file, control, overrides)?;

    info!(
        "Source directory: {}, target directory: {}",
        settings.source_directory.display(),
        settings.target_directory.display()
    );

    Ok(settings)
}
