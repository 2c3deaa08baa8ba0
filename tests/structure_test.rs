use std::fs;
use tempfile::tempdir;

use copy_rename::config::ConflictPolicy;
use copy_rename::errors::Error;
use copy_rename::path_gen::{PathTemplate, parse_components};
use copy_rename::structure::{TargetNode, load_structure, save_structure};

fn build_tree(file_names: &[&str], syntax: &str, num_components: usize) -> TargetNode {
    let template = PathTemplate::new(syntax, "\\");
    let mut root = TargetNode::new();

    for file_name in file_names {
        let parsed = parse_components(file_name, "_");
        if !parsed.has_component_count(num_components) {
            continue;
        }
        root.insert(&template.resolve(&parsed), file_name, ConflictPolicy::Flatten)
            .unwrap();
    }

    root
}

#[test]
fn test_example_layout() {
    let root = build_tree(&["A_B.txt"], r"$(comp0)\$(comp1).$(ext)", 2);

    let expected: TargetNode = serde_json::from_str(r#"{"A": [["A_B.txt", "B.txt"]]}"#).unwrap();
    assert_eq!(root, expected);
}

#[test]
fn test_wrong_component_count_never_placed() {
    let root = build_tree(
        &["A_B.txt", "A_B_C.txt", "single.txt", "C_D.txt"],
        r"$(comp0)\$(comp1).$(ext)",
        2,
    );

    let json = serde_json::to_string(&root).unwrap();
    assert!(!json.contains("A_B_C.txt"));
    assert!(!json.contains("single.txt"));
    assert_eq!(root.pair_count(), 2);
}

#[test]
fn test_round_trip_keeps_shape_and_order() {
    let temp_dir = tempdir().unwrap();
    let structure_path = temp_dir.path().join("nested").join("structure.json");

    let root = build_tree(
        &[
            "2024_05_b.pdf",
            "2024_05_a.pdf",
            "2023_12_z.pdf",
            "2024_06_c.pdf",
        ],
        r"$(comp0)\$(comp1)\$(comp2).$(ext)",
        3,
    );

    save_structure(&root, &structure_path).unwrap();
    let loaded = load_structure(&structure_path).unwrap();

    assert_eq!(loaded, root);
    let TargetNode::Branch(years) = &loaded else {
        panic!("Root should be a branch");
    };
    let TargetNode::Branch(months) = &years["2024"] else {
        panic!("Year should be a branch");
    };
    assert_eq!(
        months["05"],
        TargetNode::Leaf(vec![
            ("2024_05_b.pdf".to_string(), "b.pdf".to_string()),
            ("2024_05_a.pdf".to_string(), "a.pdf".to_string()),
        ])
    );
}

#[test]
fn test_saved_file_is_readable_json() {
    let temp_dir = tempdir().unwrap();
    let structure_path = temp_dir.path().join("structure.json");

    let root = build_tree(&["A_B.txt"], r"$(comp0)\$(comp1).$(ext)", 2);
    save_structure(&root, &structure_path).unwrap();

    let content = fs::read_to_string(&structure_path).unwrap();
    assert_eq!(
        content,
        "{\n    \"A\": [\n        [\n            \"A_B.txt\",\n            \"B.txt\"\n        ]\n    ]\n}"
    );
}

#[test]
fn test_conflict_collapses_to_flat_list() {
    let root = build_tree(
        &["A_x.txt", "B_y.txt", "A_z_w.txt"],
        r"$(comp0)\$(comp1).$(ext)",
        2,
    );
    assert!(!root.is_leaf());
    assert_eq!(root.pair_count(), 2);

    let template = PathTemplate::new(r"$(comp0)\$(comp1).$(ext)", "\\");
    let mut root = root;
    let conflicting = PathTemplate::new(r"$(comp0)\$(comp1)\$(comp2).$(ext)", "\\")
        .resolve(&parse_components("A_q_r.txt", "_"));
    root.insert(&conflicting, "A_q_r.txt", ConflictPolicy::Flatten)
        .unwrap();
    root.insert(
        &template.resolve(&parse_components("C_d.txt", "_")),
        "C_d.txt",
        ConflictPolicy::Flatten,
    )
    .unwrap();

    assert_eq!(
        root,
        TargetNode::Leaf(vec![
            ("A_q_r.txt".to_string(), "r.txt".to_string()),
            ("C_d.txt".to_string(), "d.txt".to_string()),
        ])
    );
}

#[test]
fn test_missing_artifact() {
    let temp_dir = tempdir().unwrap();

    let result = load_structure(&temp_dir.path().join("structure.json"));

    assert!(matches!(result, Err(Error::StructureArtifactMissing { .. })));
}

#[test]
fn test_corrupt_artifact() {
    let temp_dir = tempdir().unwrap();
    let structure_path = temp_dir.path().join("structure.json");
    fs::write(&structure_path, "{\"A\": \"not a bucket\"}").unwrap();

    let result = load_structure(&structure_path);

    assert!(matches!(result, Err(Error::ArtifactFormat { .. })));
}
