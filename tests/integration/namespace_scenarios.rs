use proptest::prelude::*;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;
use workpad::tree::{ConflictPolicy, Namespace, Node, NodeKind};
use workpad::NamespaceError;

fn sibling_names_are_unique(folder: &workpad::tree::FolderNode) -> bool {
    let mut seen = HashSet::new();
    folder.children().all(|child| {
        let unique = seen.insert(child.name().to_string());
        let nested = match child {
            Node::Folder(sub) => sibling_names_are_unique(sub),
            Node::File(_) => true,
        };
        unique && nested
    })
}

#[test]
fn toml_seed_builds_tree_in_document_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seed.toml");
    fs::write(
        &path,
        r#"
[src."main.py"]
content = "print('hi')"

[src.lib]

["README.md"]
content = "docs"
"#,
    )
    .unwrap();

    let ns = Namespace::load_seed_file(&path).unwrap();
    let names: Vec<String> = ns.walk().map(|e| e.path()).collect();
    assert_eq!(
        names,
        vec!["root/src", "root/src/main.py", "root/src/lib", "root/README.md"]
    );
    assert_eq!(ns.find_by_name("main.py").unwrap().content, "print('hi')");
    assert!(ns.resolve_path(&["src", "lib"]).unwrap().is_empty());
}

#[test]
fn json_seed_round_trips_through_to_seed() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seed.json");
    let sample = Namespace::sample();
    fs::write(&path, serde_json::to_string(&sample.to_seed()).unwrap()).unwrap();

    let loaded = Namespace::load_seed_file(&path).unwrap();
    assert_eq!(loaded, sample);
}

#[test]
fn unknown_seed_extension_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seed.yaml");
    fs::write(&path, "src: {}").unwrap();
    assert!(Namespace::load_seed_file(&path).is_err());
}

#[test]
fn duplicate_names_in_different_folders_resolve_to_first() {
    let mut ns = Namespace::new();
    for dir in ["a", "b"] {
        ns.insert::<&str>(&[], dir, NodeKind::Folder, ConflictPolicy::Reject)
            .unwrap();
        ns.insert(&[dir], "util.js", NodeKind::File, ConflictPolicy::Reject)
            .unwrap();
    }
    assert_eq!(ns.replace_content("util.js", "shared"), 2);

    ns.insert(&["a"], "util.js", NodeKind::File, ConflictPolicy::Overwrite)
        .unwrap();
    // Pre-order reaches a/util.js first, which is now empty.
    assert_eq!(ns.find_by_name("util.js").unwrap().content, "");
}

#[test]
fn create_under_missing_folder_reports_segment() {
    let mut ns = Namespace::sample();
    let before = ns.clone();
    let err = ns
        .insert(&["src", "nope"], "x.js", NodeKind::File, ConflictPolicy::Reject)
        .unwrap_err();
    assert_eq!(err, NamespaceError::NotFound("nope".to_string()));
    assert_eq!(ns, before);
}

proptest! {
    #[test]
    fn sibling_names_stay_unique_under_any_policy(
        ops in prop::collection::vec((0usize..3, "[a-c]{1,2}(\\.js)?", any::<bool>()), 1..40)
    ) {
        let mut ns = Namespace::new();
        let folders = [vec![], vec!["a"], vec!["b"]];
        for (target, name, overwrite) in ops {
            let policy = if overwrite { ConflictPolicy::Overwrite } else { ConflictPolicy::Reject };
            let kind = NodeKind::classify(&name);
            let _ = ns.insert(&folders[target], &name, kind, policy);
        }
        prop_assert!(sibling_names_are_unique(ns.root()));
    }
}
