//! Configuration data structures
//!
//! This module contains the control file model and the resolved settings of a run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DIRECTORY_SEPARATOR;
use crate::errors::{Result, config_incomplete_error};

/// File operation performed during the copy/rename phase
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Duplicate the file, keeping the source in place
    Copy,
    /// Move the file to its target location
    Rename,
}

/// Policy applied when a resolved path needs a key to be both a directory and a file bucket
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Discard the nested structure and collect every following pair in one flat list
    #[default]
    Flatten,
    /// Stop the evaluation with a structural conflict error
    Fail,
}

/// Content of the control file
///
/// Field names match the keys of the control file exactly.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ControlConfig {
    /// Directory scanned for source files
    #[serde(default)]
    pub source_directory: Option<String>,
    /// Root of the derived target layout
    #[serde(default)]
    pub target_directory: Option<String>,
    /// File the target file structure is saved to and loaded from
    #[serde(default)]
    pub target_file_structure_fname: Option<String>,
    /// Accepted file name suffixes, `null` accepts every file
    #[serde(default)]
    pub extension_filter: Option<Vec<String>>,
    /// Number of file names written per trace line
    #[serde(default = "default_num_files_line")]
    pub num_files_line: usize,
    /// Path template with `$(compN)` and `$(ext)` placeholders
    #[serde(default)]
    pub target_file_syntax: Option<String>,
    /// String file names are split on
    pub component_separator: String,
    /// Number of components a file name must have to be placed
    pub num_components: usize,
    /// Copy or rename
    pub action: Action,
    /// Run the evaluation phase
    pub evaluate: bool,
    /// Run the copy/rename phase
    pub copy_rename: bool,
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
    /// Separator of directory segments inside `target_file_syntax`
    #[serde(default = "default_directory_separator")]
    pub directory_separator: String,
}

fn default_num_files_line() -> usize {
    10
}

fn default_directory_separator() -> String {
    DEFAULT_DIRECTORY_SEPARATOR.to_string()
}

impl ControlConfig {
    /// Validates the fields that do not depend on the command line
    ///
    /// Directory fields are checked when the settings are resolved, since the
    /// command line may provide them instead.
    pub fn validate(&self) -> Result<()> {
        if self.component_separator.is_empty() {
            return Err(config_incomplete_error(
                "component_separator",
                "The component separator must not be empty.",
            ));
        }

        if self.directory_separator.is_empty() {
            return Err(config_incomplete_error(
                "directory_separator",
                "The directory separator must not be empty.",
            ));
        }

        if self.evaluate
            && self
                .target_file_syntax
                .as_deref()
                .is_none_or(|syntax| syntax.trim().is_empty())
        {
            return Err(config_incomplete_error(
                "target_file_syntax",
                "A target file syntax must be provided in the control file to evaluate the target file structure.",
            ));
        }

        Ok(())
    }
}

/// Immutable settings of one run
///
/// Built from the control file merged with the command-line overrides. Every
/// phase reads from it and nothing changes it once initialisation succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub control_file: PathBuf,
    pub source_directory: PathBuf,
    pub target_directory: PathBuf,
    pub structure_file: PathBuf,
    pub extension_filter: Option<Vec<String>>,
    pub num_files_line: usize,
    /// Empty when the evaluation phase is disabled
    pub target_file_syntax: String,
    pub component_separator: String,
    pub num_components: usize,
    pub action: Action,
    pub evaluate: bool,
    pub copy_rename: bool,
    pub conflict_policy: ConflictPolicy,
    pub directory_separator: String,
}
