//! Target structure materialization
//!
//! This module walks a target tree, creates its directories and copies or
//! moves every file pair into place.

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::Action;
use crate::errors::{Result, file_operation_error};
use crate::structure::TargetNode;
use crate::utils::absolute_path;

use super::actions::perform_file_action;

/// A file operation recorded instead of performed in dry-run mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOperation {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub action: Action,
}

/// Statistics about a materialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeStats {
    /// Number of directories that did not exist before
    pub directories_created: usize,
    pub files_copied: usize,
    pub files_moved: usize,
}

/// Outcome of [`materialize`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub stats: MaterializeStats,
    /// Only filled in dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
}

struct Materializer {
    source_directory: PathBuf,
    action: Action,
    dry_run: bool,
    report: MaterializeReport,
}

impl Materializer {
    fn ensure_directory(&mut self, directory: &Path) -> Result<()> {
        if directory.is_dir() {
            return Ok(());
        }

        self.report.stats.directories_created += 1;
        if self.dry_run {
            debug!("Simulating directory creation: {}", directory.display());
            return Ok(());
        }

        debug!("Creating directory: {}", directory.display());
        create_dir_all(directory)
            .map_err(|e| file_operation_error(e, directory.to_path_buf(), "create directory"))
    }

    fn walk(&mut self, node: &TargetNode, directory: &Path) -> Result<()> {
        self.ensure_directory(directory)?;

        match node {
            TargetNode::Branch(children) => {
                for (name, child) in children {
                    self.walk(child, &directory.join(name))?;
                }
            }
            TargetNode::Leaf(pairs) => {
                for (source_file_name, target_file_name) in pairs {
                    let source = self.source_directory.join(source_file_name);
                    let destination = directory.join(target_file_name);
                    self.apply(source, destination)?;
                }
            }
        }

        Ok(())
    }

    fn apply(&mut self, source: PathBuf, destination: PathBuf) -> Result<()> {
        if self.dry_run {
            self.report.planned_operations.push(PlannedOperation {
                source,
                destination,
                action: self.action,
            });
        } else {
            perform_file_action(&source, &destination, self.action)?;
        }

        match self.action {
            Action::Copy => self.report.stats.files_copied += 1,
            Action::Rename => self.report.stats.files_moved += 1,
        }

        Ok(())
    }
}

/// Materializes a target tree below `target_directory`
///
/// Every node's directory is created if missing; existing directories are
/// fine, so running twice against the same target root succeeds. Source files
/// are resolved against `source_directory` and existing target files are
/// overwritten. With `dry_run` nothing is touched and the operations are
/// returned as planned operations instead.
///
/// # Errors
/// Returns the first failing filesystem operation. Files handled before the
/// failure stay where they are.
pub fn materialize(
    root: &TargetNode,
    source_directory: &Path,
    target_directory: &Path,
    action: Action,
    dry_run: bool,
) -> Result<MaterializeReport> {
    let mut materializer = Materializer {
        source_directory: absolute_path(source_directory)?,
        action,
        dry_run,
        report: MaterializeReport::default(),
    };

    materializer.walk(root, &absolute_path(target_directory)?)?;

    let stats = &materializer.report.stats;
    info!(
        "{} directories created, {} files copied, {} files moved{}",
        stats.directories_created,
        stats.files_copied,
        stats.files_moved,
        if dry_run { " (dry run)" } else { "" }
    );

    Ok(materializer.report)
}
