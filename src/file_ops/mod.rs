//! File operations module
//!
//! This module contains components for creating the target layout and copying or moving files into it.

mod actions;
mod materializer;

pub use actions::perform_file_action;
pub use materializer::{MaterializeReport, MaterializeStats, PlannedOperation, materialize};
