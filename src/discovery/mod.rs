//! File discovery module
//!
//! This module contains components for listing the source directory.

mod scanner;

pub use scanner::{DirectoryListing, list_directory, matches_extension_filter};
