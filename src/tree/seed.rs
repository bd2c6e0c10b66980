//! Seed documents: the initial tree a workspace starts from.
//!
//! A seed is a nested map. A table holding exactly one string field `content`
//! is a file; any other table is a folder whose keys are its children.
//!
//! ```toml
//! [src."App.ts"]
//! content = "console.log(1)"
//!
//! [src.components]
//! ```

use super::namespace::{validate_item_name, Namespace, ROOT_NAME};
use super::node::{FileNode, FolderNode, Node};
use crate::error::{ApiError, NamespaceError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File entry in a seed document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    pub content: String,
}

/// One entry of a seed document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedEntry {
    File(SeedFile),
    Folder(IndexMap<String, SeedEntry>),
}

/// Root-level seed: the children of the `root` folder
pub type Seed = IndexMap<String, SeedEntry>;

fn build_folder(name: &str, entries: &Seed) -> Result<FolderNode, NamespaceError> {
    let mut folder = FolderNode::new(name);
    for (child_name, entry) in entries {
        validate_item_name(child_name)?;
        let node = match entry {
            SeedEntry::File(file) => Node::File(FileNode::new(child_name.as_str(), file.content.as_str())),
            SeedEntry::Folder(children) => Node::Folder(build_folder(child_name, children)?),
        };
        folder.put(node);
    }
    Ok(folder)
}

fn export_folder(folder: &FolderNode) -> Seed {
    folder
        .children()
        .map(|node| {
            let entry = match node {
                Node::File(file) => SeedEntry::File(SeedFile {
                    content: file.content.clone(),
                }),
                Node::Folder(sub) => SeedEntry::Folder(export_folder(sub)),
            };
            (node.name().to_string(), entry)
        })
        .collect()
}

impl Namespace {
    /// Build a namespace from a parsed seed. Keys follow the same naming
    /// rules as created items: blank names and names containing `/` are
    /// refused with `InvalidName`.
    pub fn from_seed(seed: &Seed) -> Result<Self, NamespaceError> {
        Ok(Namespace::from_root(build_folder(ROOT_NAME, seed)?))
    }

    /// Export the current tree in seed shape, for writing it back out as a seed file
    pub fn to_seed(&self) -> Seed {
        export_folder(self.root())
    }

    /// Load a seed from a `.toml` or `.json` file.
    pub fn load_seed_file(path: &Path) -> Result<Self, ApiError> {
        let text = std::fs::read_to_string(path)?;
        let seed: Seed = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&text)
                .map_err(|e| ApiError::Seed(format!("{}: {}", path.display(), e)))?,
            Some("toml") => toml::from_str(&text)
                .map_err(|e| ApiError::Seed(format!("{}: {}", path.display(), e)))?,
            _ => {
                return Err(ApiError::Seed(format!(
                    "{}: seed files must be .toml or .json",
                    path.display()
                )))
            }
        };
        Namespace::from_seed(&seed).map_err(|e| ApiError::Seed(format!("{}: {}", path.display(), e)))
    }

    /// The sample project a fresh workspace opens with
    pub fn sample() -> Self {
        let greet_js = "\nfunction greet(name) {\n\tconsole.log(\"Hello, \" + name + \"!\");\n}\n\ngreet(\"Alex\");\n";
        let greet_ts = "\nfunction greet(name : string) {\n\tconsole.log(\"Hello, \" + name + \"!\");\n}\n\ngreet(\"Alex\");\n";

        let mut components = FolderNode::new("components");
        components.put(Node::File(FileNode::new("Header.ts", greet_js)));
        components.put(Node::File(FileNode::new("Footer.js", "Footer Component Content")));

        let mut src = FolderNode::new("src");
        src.put(Node::Folder(components));
        src.put(Node::File(FileNode::new("App.ts", greet_ts)));
        src.put(Node::File(FileNode::new("index.js", "Index File Content")));

        let mut public = FolderNode::new("public");
        public.put(Node::File(FileNode::new("index.html", "<html>...</html>")));
        public.put(Node::File(FileNode::new(
            "favicon.ico",
            "Binary content for favicon.ico",
        )));

        let mut root = FolderNode::new(ROOT_NAME);
        root.put(Node::Folder(src));
        root.put(Node::Folder(public));
        root.put(Node::File(FileNode::new(
            "README.md",
            "This is the README file for the project.",
        )));
        Namespace::from_root(root)
    }
}
