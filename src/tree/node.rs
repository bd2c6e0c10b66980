//! Folder and file node types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Whether a node is a file or a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

impl NodeKind {
    /// Creation-time classification: a name containing a dot is a file.
    ///
    /// This only applies to interactively created items. Folders loaded from a
    /// seed may carry dotted names.
    pub fn classify(item_name: &str) -> Self {
        if item_name.contains('.') {
            NodeKind::File
        } else {
            NodeKind::Folder
        }
    }
}

/// File node representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    name: String,
    pub content: String,
}

impl FileNode {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extension after the last dot, if any.
    pub fn extension(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(_, ext)| ext)
    }
}

/// Folder node representation
///
/// Children are keyed by name, so sibling names are unique by construction.
/// Iteration follows insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    name: String,
    children: IndexMap<String, Node>,
}

impl FolderNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub(crate) fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    /// Children in display (insertion) order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Node> + ExactSizeIterator {
        self.children.values()
    }

    pub(crate) fn children_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.children.values_mut()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Put `node` under its own name. An existing sibling with that name is
    /// replaced in place and returned.
    pub(crate) fn put(&mut self, node: Node) -> Option<Node> {
        self.children.insert(node.name().to_string(), node)
    }
}

/// Workspace tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(FileNode),
    Folder(FolderNode),
}

impl Node {
    /// Empty node of the given kind
    pub fn empty(name: impl Into<String>, kind: NodeKind) -> Self {
        match kind {
            NodeKind::File => Node::File(FileNode::new(name, String::new())),
            NodeKind::Folder => Node::Folder(FolderNode::new(name)),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => file.name(),
            Node::Folder(folder) => folder.name(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File(_) => NodeKind::File,
            Node::Folder(_) => NodeKind::Folder,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(file) => Some(file),
            Node::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }
}
