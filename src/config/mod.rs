//! Configuration module
//!
//! This module contains components for loading and validating the control file.

mod loader;
mod model;

pub use loader::{CliOverrides, initialise, load_control, locate_control_file, resolve_settings};
pub use model::{Action, ConflictPolicy, ControlConfig, RunSettings};
