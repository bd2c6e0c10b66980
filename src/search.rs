//! Search Engine
//!
//! Case-sensitive substring search over file names and contents.

use crate::tree::{Namespace, Node};
use serde::{Deserialize, Serialize};

/// Which tree a workspace searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// The current tree, including edits and created items
    #[default]
    Live,
    /// A frozen copy of the tree taken when the workspace was opened
    Snapshot,
}

/// One matching file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Full path from the root folder, e.g. `root/lib/x.js`
    pub path: String,
    pub content: String,
}

impl SearchHit {
    /// Bare file name used to re-select this hit
    pub fn file_name(&self) -> &str {
        file_name_of(&self.path)
    }
}

/// Last segment of a slash-separated path
pub fn file_name_of(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// All files whose name or content contains `query`, in pre-order.
///
/// An empty query suppresses search and returns nothing.
pub fn search(namespace: &Namespace, query: &str) -> Vec<SearchHit> {
    if query.is_empty() {
        return Vec::new();
    }
    namespace
        .walk()
        .filter_map(|entry| match entry.node {
            Node::File(file) if file.name().contains(query) || file.content.contains(query) => {
                Some(SearchHit {
                    path: entry.path(),
                    content: file.content.clone(),
                })
            }
            _ => None,
        })
        .collect()
}
