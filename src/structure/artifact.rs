//! Target structure persistence
//!
//! The evaluation phase saves the target tree as JSON, the copy/rename phase
//! loads it back. Branch keys are written sorted, indented with four spaces.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::errors::{
    Result, artifact_format_error, file_operation_error, structure_artifact_missing_error,
};

use super::tree::TargetNode;

/// Renders a target tree the way it is saved to disk
pub fn to_json(root: &TargetNode) -> std::result::Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    root.serialize(&mut serializer)?;

    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Saves the target tree, replacing any previous file
pub fn save_structure(root: &TargetNode, path: &Path) -> Result<()> {
    let content = to_json(root).map_err(|e| artifact_format_error(e, path.to_path_buf()))?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;
    }

    fs::write(path, content).map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;
    debug!("Saved target file structure to {}", path.display());

    Ok(())
}

/// Loads a target tree saved by [`save_structure`]
///
/// # Errors
/// * `StructureArtifactMissing` if the file does not exist
/// * `ArtifactFormat` if the content is not a target tree
pub fn load_structure(path: &Path) -> Result<TargetNode> {
    if !path.is_file() {
        return Err(structure_artifact_missing_error(path.to_path_buf()));
    }

    let content =
        fs::read_to_string(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;
    let root: TargetNode =
        serde_json::from_str(&content).map_err(|e| artifact_format_error(e, path.to_path_buf()))?;

    debug!(
        "Loaded target file structure with {} entries from {}",
        root.pair_count(),
        path.display()
    );

    Ok(root)
}
