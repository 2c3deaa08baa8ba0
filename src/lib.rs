//! Derives a target directory layout from file name components and copies or
//! moves the files of a source directory into it.
//!
//! A run has two phases. The evaluation phase splits every file name into
//! components, resolves a path template such as `$(comp0)\$(comp1).$(ext)`
//! and saves the resulting [`structure::TargetNode`] tree. The copy/rename
//! phase loads that tree and materializes it below the target directory.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
pub mod structure;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::config::{Action, CliOverrides, ConflictPolicy, RunSettings};
    pub use crate::errors::{
        config_incomplete_error, config_missing_error, config_parsing_error, file_operation_error,
        source_directory_missing_error, structural_conflict_error,
        structure_artifact_missing_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, TraceBuffer, TraceGuard, format_message, init_logger};
    pub use crate::structure::TargetNode;
    pub use crate::workflow::{RunOptions, run};
}
