//! Target structure module
//!
//! This module contains the target tree and its persisted form.

mod artifact;
mod tree;

pub use artifact::{load_structure, save_structure, to_json};
pub use tree::{FilePair, Placement, TargetNode};
