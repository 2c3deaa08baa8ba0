//! Target tree
//!
//! The target tree describes the destination layout before anything is copied
//! or moved. Branches map directory names to subtrees, leaves hold the
//! `(source file name, target file name)` pairs placed in that directory.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::ConflictPolicy;
use crate::errors::{Result, structural_conflict_error};
use crate::path_gen::ResolvedPath;

/// `(source file name, target file name)`
pub type FilePair = (String, String);

/// A node of the target tree
///
/// Serialized untagged: a branch is an object keyed by directory name, a leaf
/// is an array of two-element arrays.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum TargetNode {
    /// File pairs placed directly in the directory of this node
    Leaf(Vec<FilePair>),
    /// Subdirectories by name
    Branch(BTreeMap<String, TargetNode>),
}

impl Default for TargetNode {
    fn default() -> Self {
        TargetNode::Branch(BTreeMap::new())
    }
}

/// Where [`TargetNode::insert`] put a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// In the leaf at the end of the directory segments
    Nested,
    /// In the leaf at the root of the tree
    Root,
    /// At the root after a structural conflict replaced the whole tree
    Flattened {
        /// Number of pairs that were in the discarded tree
        discarded: usize,
    },
}

impl TargetNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TargetNode::Leaf(_))
    }

    /// Total number of file pairs below this node
    pub fn pair_count(&self) -> usize {
        match self {
            TargetNode::Leaf(pairs) => pairs.len(),
            TargetNode::Branch(children) => children.values().map(TargetNode::pair_count).sum(),
        }
    }

    /// Inserts a file pair at the location described by `resolved`
    ///
    /// Intermediate branches are created for every directory segment but the
    /// last, which holds the leaf the pair is appended to. A path without
    /// directory segments goes to the root, turning an empty root into a leaf.
    ///
    /// A key needed both as a branch and as a leaf is a structural conflict.
    /// With [`ConflictPolicy::Flatten`] the whole tree is replaced by a root
    /// leaf holding only this pair, and every later pair lands in that leaf.
    /// With [`ConflictPolicy::Fail`] an error is returned and the tree is left
    /// as it was.
    pub fn insert(
        &mut self,
        resolved: &ResolvedPath,
        source_file_name: &str,
        policy: ConflictPolicy,
    ) -> Result<Placement> {
        let pair: FilePair = (source_file_name.to_string(), resolved.file_name.clone());

        let conflict_key = match self {
            TargetNode::Leaf(pairs) => {
                if resolved.directories.is_empty() || policy == ConflictPolicy::Flatten {
                    pairs.push(pair);
                    return Ok(Placement::Root);
                }
                resolved.directories[0].clone()
            }
            TargetNode::Branch(children) => match resolved.directories.split_first() {
                None if children.is_empty() => {
                    *self = TargetNode::Leaf(vec![pair]);
                    return Ok(Placement::Root);
                }
                None => resolved.file_name.clone(),
                Some((first, rest)) => match leaf_bucket(children, first, rest) {
                    Ok(bucket) => {
                        bucket.push(pair);
                        return Ok(Placement::Nested);
                    }
                    Err(key) => key,
                },
            },
        };

        match policy {
            ConflictPolicy::Fail => Err(structural_conflict_error(&resolved.raw, &conflict_key)),
            ConflictPolicy::Flatten => {
                let discarded = self.pair_count();
                warn!(
                    "Structural conflict at '{}' for {}; flattening the target file structure, {} entries discarded",
                    conflict_key, resolved.raw, discarded
                );
                *self = TargetNode::Leaf(vec![pair]);
                Ok(Placement::Flattened { discarded })
            }
        }
    }
}

/// Walks down `segment` and `rest`, creating missing nodes, to the leaf of the last segment
///
/// Returns the conflicting key if an existing node has the wrong kind.
fn leaf_bucket<'a>(
    children: &'a mut BTreeMap<String, TargetNode>,
    segment: &str,
    rest: &[String],
) -> std::result::Result<&'a mut Vec<FilePair>, String> {
    match rest.split_first() {
        None => match children
            .entry(segment.to_string())
            .or_insert_with(|| TargetNode::Leaf(Vec::new()))
        {
            TargetNode::Leaf(pairs) => Ok(pairs),
            TargetNode::Branch(_) => Err(segment.to_string()),
        },
        Some((next, remaining)) => match children
            .entry(segment.to_string())
            .or_insert_with(TargetNode::new)
        {
            TargetNode::Branch(grandchildren) => leaf_bucket(grandchildren, next, remaining),
            TargetNode::Leaf(_) => Err(segment.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn resolved(raw: &str) -> ResolvedPath {
        ResolvedPath::split(raw.to_string(), "\\")
    }

    fn pair(source: &str, target: &str) -> FilePair {
        (source.to_string(), target.to_string())
    }

    #[test]
    fn test_insert_nested() {
        let mut root = TargetNode::new();
        let placement = root
            .insert(&resolved(r"A\B.txt"), "A_B.txt", ConflictPolicy::Flatten)
            .unwrap();

        assert_eq!(placement, Placement::Nested);
        let TargetNode::Branch(children) = &root else {
            panic!("Root should stay a branch");
        };
        assert_eq!(
            children.get("A"),
            Some(&TargetNode::Leaf(vec![pair("A_B.txt", "B.txt")]))
        );
    }

    #[test]
    fn test_insert_deep_and_shared_bucket() {
        let mut root = TargetNode::new();
        root.insert(&resolved(r"x\y\1.txt"), "x_y_1.txt", ConflictPolicy::Fail)
            .unwrap();
        root.insert(&resolved(r"x\y\2.txt"), "x_y_2.txt", ConflictPolicy::Fail)
            .unwrap();
        root.insert(&resolved(r"x\z\3.txt"), "x_z_3.txt", ConflictPolicy::Fail)
            .unwrap();

        let expected: TargetNode = serde_json::from_str(
            r#"{"x": {"y": [["x_y_1.txt", "1.txt"], ["x_y_2.txt", "2.txt"]], "z": [["x_z_3.txt", "3.txt"]]}}"#,
        )
        .unwrap();
        assert_eq!(root, expected);
        assert_eq!(root.pair_count(), 3);
    }

    #[test]
    fn test_path_without_directories_makes_root_a_leaf() {
        let mut root = TargetNode::new();
        let first = root
            .insert(&resolved("B-A.txt"), "A_B.txt", ConflictPolicy::Fail)
            .unwrap();
        let second = root
            .insert(&resolved("D-C.txt"), "C_D.txt", ConflictPolicy::Fail)
            .unwrap();

        assert_eq!(first, Placement::Root);
        assert_eq!(second, Placement::Root);
        assert_eq!(
            root,
            TargetNode::Leaf(vec![pair("A_B.txt", "B-A.txt"), pair("C_D.txt", "D-C.txt")])
        );
    }

    #[test]
    fn test_branch_where_leaf_expected_flattens() {
        let mut root = TargetNode::new();
        root.insert(&resolved(r"A\B\1.txt"), "A_B_1.txt", ConflictPolicy::Flatten)
            .unwrap();
        root.insert(&resolved(r"C\2.txt"), "C_2.txt", ConflictPolicy::Flatten)
            .unwrap();

        // "A" is a branch, now needed as a leaf
        let placement = root
            .insert(&resolved(r"A\3.txt"), "A_3.txt", ConflictPolicy::Flatten)
            .unwrap();
        assert_eq!(placement, Placement::Flattened { discarded: 2 });
        assert_eq!(root, TargetNode::Leaf(vec![pair("A_3.txt", "3.txt")]));

        // Later pairs keep going to the flat root list
        let placement = root
            .insert(&resolved(r"D\4.txt"), "D_4.txt", ConflictPolicy::Flatten)
            .unwrap();
        assert_eq!(placement, Placement::Root);
        assert_eq!(
            root,
            TargetNode::Leaf(vec![pair("A_3.txt", "3.txt"), pair("D_4.txt", "4.txt")])
        );
    }

    #[test]
    fn test_leaf_where_branch_expected_flattens() {
        let mut root = TargetNode::new();
        root.insert(&resolved(r"A\1.txt"), "A_1.txt", ConflictPolicy::Flatten)
            .unwrap();

        let placement = root
            .insert(&resolved(r"A\B\2.txt"), "A_B_2.txt", ConflictPolicy::Flatten)
            .unwrap();

        assert_eq!(placement, Placement::Flattened { discarded: 1 });
        assert_eq!(root, TargetNode::Leaf(vec![pair("A_B_2.txt", "2.txt")]));
    }

    #[test]
    fn test_conflict_fails_and_keeps_tree() {
        let mut root = TargetNode::new();
        root.insert(&resolved(r"A\B\1.txt"), "A_B_1.txt", ConflictPolicy::Fail)
            .unwrap();
        let before = root.clone();

        let result = root.insert(&resolved(r"A\2.txt"), "A_2.txt", ConflictPolicy::Fail);

        match result {
            Err(Error::StructuralConflict { key, resolved_path }) => {
                assert_eq!(key, "A");
                assert_eq!(resolved_path, r"A\2.txt");
            }
            other => panic!("Expected StructuralConflict, got {other:?}"),
        }
        assert_eq!(root, before);
    }

    #[test]
    fn test_flat_path_into_nested_root_conflicts() {
        let mut root = TargetNode::new();
        root.insert(&resolved(r"A\1.txt"), "A_1.txt", ConflictPolicy::Fail)
            .unwrap();

        let result = root.insert(&resolved("2.txt"), "x_2.txt", ConflictPolicy::Fail);
        assert!(matches!(result, Err(Error::StructuralConflict { .. })));

        let placement = root
            .insert(&resolved("2.txt"), "x_2.txt", ConflictPolicy::Flatten)
            .unwrap();
        assert_eq!(placement, Placement::Flattened { discarded: 1 });
    }

    #[test]
    fn test_nested_path_into_leaf_root() {
        let mut root = TargetNode::new();
        root.insert(&resolved("1.txt"), "a_1.txt", ConflictPolicy::Fail)
            .unwrap();

        let result = root.insert(&resolved(r"B\2.txt"), "B_2.txt", ConflictPolicy::Fail);
        assert!(matches!(result, Err(Error::StructuralConflict { .. })));

        let placement = root
            .insert(&resolved(r"B\2.txt"), "B_2.txt", ConflictPolicy::Flatten)
            .unwrap();
        assert_eq!(placement, Placement::Root);
        assert_eq!(root.pair_count(), 2);
        assert!(root.is_leaf());
    }
}
