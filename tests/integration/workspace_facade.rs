use std::fs;
use std::thread;
use tempfile::TempDir;
use workpad::search::SearchScope;
use workpad::tree::{ConflictPolicy, Namespace};
use workpad::workspace::WorkspaceConfig;
use workpad::{SharedWorkspace, Workspace};

#[test]
fn from_config_loads_seed_and_policies() {
    let temp_dir = TempDir::new().unwrap();
    let seed = temp_dir.path().join("project.toml");
    fs::write(&seed, "[lib.\"x.js\"]\ncontent = \"let y=1;\"\n").unwrap();

    let config = WorkspaceConfig {
        seed: Some(seed),
        search_scope: SearchScope::Snapshot,
        on_conflict: ConflictPolicy::Overwrite,
    };
    let mut ws = Workspace::from_config(&config).unwrap();
    assert_eq!(ws.search_scope(), SearchScope::Snapshot);

    ws.create_node(&["lib"], "x.js").unwrap();
    assert_eq!(ws.namespace().find_by_name("x.js").unwrap().content, "");
    // The snapshot still holds the seeded text.
    assert_eq!(ws.search("y=1").len(), 1);
}

#[test]
fn missing_seed_file_is_an_error() {
    let config = WorkspaceConfig {
        seed: Some("/definitely/not/here.toml".into()),
        ..WorkspaceConfig::default()
    };
    assert!(Workspace::from_config(&config).is_err());
}

#[test]
fn edit_reaches_every_same_named_file() {
    let mut ws = Workspace::new(Namespace::new());
    ws.create_node::<&str>(&[], "a").unwrap();
    ws.create_node::<&str>(&[], "util.js").unwrap();
    ws.create_node(&["a"], "util.js").unwrap();

    ws.select_file("util.js");
    assert_eq!(ws.edit("x"), 2);
    let hits = ws.search("x");
    let paths: Vec<&str> = hits.iter().map(|h| h.path.as_str()).collect();
    assert_eq!(paths, vec!["root/a/util.js", "root/util.js"]);
}

#[test]
fn editor_view_follows_session() {
    let mut ws = Workspace::default();
    ws.select_file("App.ts");
    ws.select_file("index.js");
    let view = ws.editor_view();
    assert_eq!(view.tabs, vec!["App.ts".to_string(), "index.js".to_string()]);
    assert_eq!(view.active.as_deref(), Some("index.js"));
    assert_eq!(view.text, "Index File Content");
    assert_eq!(view.language.id(), "javascript");

    ws.close_active();
    assert_eq!(ws.editor_view().active.as_deref(), Some("App.ts"));
}

#[test]
fn shared_workspace_serializes_writers() {
    let shared = SharedWorkspace::new(Workspace::new(Namespace::new()));
    shared.create_node::<&str>(&[], "notes.md").unwrap();
    shared.select_file("notes.md");

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || shared.edit(&format!("writer {}", i)))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
    assert!(shared.current_text().starts_with("writer "));
}
