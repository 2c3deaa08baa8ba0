use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the copy/rename application
#[derive(Debug)]
pub enum Error {
    /// The control file is absent or cannot be read
    ConfigMissing { path: PathBuf },
    /// A required field is missing from both the command line and the control file
    ConfigIncomplete { field: String, detail: String },
    /// The control file exists but cannot be parsed
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// The source directory does not exist or is not a directory
    SourceDirectoryMissing { path: PathBuf },
    /// The target structure artifact written by the evaluation phase is absent
    StructureArtifactMissing { path: PathBuf },
    /// The target structure artifact cannot be written or read back
    ArtifactFormat {
        source: serde_json::Error,
        path: PathBuf,
    },
    /// A resolved path needs a key to be both a directory and a file bucket
    StructuralConflict { resolved_path: String, key: String },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigMissing { path } => {
                write!(f, "{} can not be found or is not a file.", path.display())
            }
            Error::ConfigIncomplete { field, detail } => {
                write!(f, "Missing '{field}': {detail}")
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::SourceDirectoryMissing { path } => {
                write!(f, "Can not find source directory {}.", path.display())
            }
            Error::StructureArtifactMissing { path } => {
                write!(
                    f,
                    "Can't open file containing the target file structure: {} can not be found or is not a file.",
                    path.display()
                )
            }
            Error::ArtifactFormat { path, source } => {
                write!(
                    f,
                    "Invalid target file structure in {}: {source}",
                    path.display()
                )
            }
            Error::StructuralConflict { resolved_path, key } => {
                write!(
                    f,
                    "Structural conflict for '{resolved_path}': '{key}' is needed both as a directory and as a file bucket"
                )
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            Error::ArtifactFormat { source, .. } => Some(source),
            Error::FileOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the copy/rename application
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use copy_rename::prelude::{Result, config_missing_error};
///
/// fn example_function(found: bool) -> Result<String> {
///     if found {
///         Ok("success".to_string())
///     } else {
///         Err(config_missing_error(PathBuf::from("copy_rename_control.json")))
///     }
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a missing control file error
pub fn config_missing_error(path: PathBuf) -> Error {
    Error::ConfigMissing { path }
}

/// Helper function to create an incomplete configuration error
pub fn config_incomplete_error(field: &str, detail: &str) -> Error {
    Error::ConfigIncomplete {
        field: field.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create a missing source directory error
pub fn source_directory_missing_error(path: PathBuf) -> Error {
    Error::SourceDirectoryMissing { path }
}

/// Helper function to create a missing structure artifact error
pub fn structure_artifact_missing_error(path: PathBuf) -> Error {
    Error::StructureArtifactMissing { path }
}

/// Helper function to create an artifact format error
pub fn artifact_format_error(err: serde_json::Error, path: PathBuf) -> Error {
    Error::ArtifactFormat { source: err, path }
}

/// Helper function to create a structural conflict error
pub fn structural_conflict_error(resolved_path: &str, key: &str) -> Error {
    Error::StructuralConflict {
        resolved_path: resolved_path.to_string(),
        key: key.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}
