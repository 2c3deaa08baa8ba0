//! Path generation module
//!
//! This module contains components for decomposing file names and resolving path templates.

mod components;
mod template;

pub use components::{FileComponents, parse_components};
pub use template::{PathTemplate, ResolvedPath, substitute};
