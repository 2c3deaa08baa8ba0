//! Workflow context
//!
//! This module defines the state passed between the phases of a run.

use crate::config::RunSettings;
use crate::file_ops::MaterializeReport;
use crate::structure::TargetNode;

/// Statistics about the evaluation phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationStats {
    /// Number of files that passed the extension filter
    pub files_listed: usize,
    /// Number of files skipped for having the wrong number of components
    pub files_skipped: usize,
    /// Number of file pairs inserted into the target tree
    pub files_placed: usize,
    /// Whether a structural conflict flattened the target tree
    pub flattened: bool,
}

/// Context of one run
///
/// Settings are fixed after initialisation. The target tree is owned here
/// between the evaluation and the copy/rename phase.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub settings: RunSettings,
    pub dry_run: bool,
    /// Target tree built by the evaluation phase of this run, if it ran
    pub structure: Option<TargetNode>,
    pub evaluation: EvaluationStats,
    /// Outcome of the copy/rename phase, if it ran
    pub materialization: Option<MaterializeReport>,
}

impl RunContext {
    pub fn new(settings: RunSettings, dry_run: bool) -> Self {
        RunContext {
            settings,
            dry_run,
            structure: None,
            evaluation: EvaluationStats::default(),
            materialization: None,
        }
    }
}
