//! The rooted workspace tree and its mutation/lookup operations

use super::node::{FileNode, FolderNode, Node, NodeKind};
use super::walk::Walk;
use crate::error::NamespaceError;
use serde::{Deserialize, Serialize};

/// Name of the folder every namespace is rooted at
pub const ROOT_NAME: &str = "root";

/// What `insert` does when the new item's name is already taken by a sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Refuse with `NamespaceError::NameConflict`
    #[default]
    Reject,
    /// Replace the existing sibling (and its whole subtree) in place
    Overwrite,
}

/// Folder and file counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub folders: usize,
    pub files: usize,
}

/// Hierarchical namespace owning every node below a single root folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    root: FolderNode,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// Empty namespace with a root folder named `root`
    pub fn new() -> Self {
        Self {
            root: FolderNode::new(ROOT_NAME),
        }
    }

    /// Wrap an existing root folder
    pub fn from_root(root: FolderNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &FolderNode {
        &self.root
    }

    /// Walk from the root following `segments`, each of which must name a
    /// folder. Empty segments are skipped, so `["", "src", ""]` resolves `src`.
    pub fn resolve_path<S: AsRef<str>>(&self, segments: &[S]) -> Result<&FolderNode, NamespaceError> {
        let mut current = &self.root;
        for segment in segments.iter().map(|s| s.as_ref()).filter(|s: &&str| !s.is_empty()) {
            current = match current.child(segment) {
                Some(Node::Folder(folder)) => folder,
                Some(Node::File(_)) => return Err(NamespaceError::NotAFolder(segment.to_string())),
                None => return Err(NamespaceError::NotFound(segment.to_string())),
            };
        }
        Ok(current)
    }

    fn resolve_path_mut<S: AsRef<str>>(
        &mut self,
        segments: &[S],
    ) -> Result<&mut FolderNode, NamespaceError> {
        let mut current = &mut self.root;
        for segment in segments.iter().map(|s| s.as_ref()).filter(|s: &&str| !s.is_empty()) {
            current = match current.child_mut(segment) {
                Some(Node::Folder(folder)) => folder,
                Some(Node::File(_)) => return Err(NamespaceError::NotAFolder(segment.to_string())),
                None => return Err(NamespaceError::NotFound(segment.to_string())),
            };
        }
        Ok(current)
    }

    /// Add an empty file or folder named `item_name` to the folder at `segments`.
    ///
    /// Nothing is mutated when the target does not resolve, the name is
    /// invalid, or the name is taken under `ConflictPolicy::Reject`.
    pub fn insert<S: AsRef<str>>(
        &mut self,
        segments: &[S],
        item_name: &str,
        kind: NodeKind,
        policy: ConflictPolicy,
    ) -> Result<(), NamespaceError> {
        validate_item_name(item_name)?;
        let folder = self.resolve_path_mut(segments)?;
        if policy == ConflictPolicy::Reject && folder.contains(item_name) {
            return Err(NamespaceError::NameConflict(item_name.to_string()));
        }
        folder.put(Node::empty(item_name, kind));
        Ok(())
    }

    /// First file named `name` in pre-order (children in insertion order).
    pub fn find_by_name(&self, name: &str) -> Option<&FileNode> {
        self.walk()
            .filter_map(|entry| entry.node.as_file())
            .find(|file| file.name() == name)
    }

    /// Replace the content of every file named `name`, anywhere in the tree.
    ///
    /// Returns how many files were updated.
    pub fn replace_content(&mut self, name: &str, content: &str) -> usize {
        fn replace_in(folder: &mut FolderNode, name: &str, content: &str) -> usize {
            let mut updated = 0;
            for child in folder.children_mut() {
                match child {
                    Node::File(file) if file.name() == name => {
                        file.content = content.to_string();
                        updated += 1;
                    }
                    Node::Folder(sub) => updated += replace_in(sub, name, content),
                    Node::File(_) => {}
                }
            }
            updated
        }
        replace_in(&mut self.root, name, content)
    }

    /// Pre-order traversal of every node below the root
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.root)
    }

    pub fn stats(&self) -> TreeStats {
        self.walk().fold(TreeStats::default(), |mut stats, entry| {
            match entry.node.kind() {
                NodeKind::File => stats.files += 1,
                NodeKind::Folder => stats.folders += 1,
            }
            stats
        })
    }
}

pub(crate) fn validate_item_name(item_name: &str) -> Result<(), NamespaceError> {
    if item_name.trim().is_empty() || item_name.contains('/') {
        return Err(NamespaceError::InvalidName(item_name.to_string()));
    }
    Ok(())
}

/// Split a slash-separated folder path into segments, dropping empties.
///
/// `"/src/components"`, `"src/components/"` and `"src/components"` all give
/// `["src", "components"]`; `"/"` and `""` give the root.
pub fn split_folder_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}
