//! Workflow module
//!
//! This module contains components for orchestrating the evaluation and copy/rename phases.

mod context;
mod engine;

pub use context::{EvaluationStats, RunContext};
pub use engine::{RunOptions, copy_rename, evaluate, run};
