//! Pre-order depth-first traversal

use super::node::{FolderNode, Node};

/// One visited node together with the names of the folders above it.
#[derive(Debug, Clone)]
pub struct WalkEntry<'a> {
    /// Ancestor folder names, outermost first, starting with the root folder.
    pub ancestors: Vec<&'a str>,
    pub node: &'a Node,
}

impl<'a> WalkEntry<'a> {
    /// Slash-joined ancestors plus the node's own name, e.g. `root/lib/x.js`.
    pub fn path(&self) -> String {
        let mut path = self.ancestors.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(self.node.name());
        path
    }

    /// Nesting depth below the root folder (direct children are at depth 0).
    pub fn depth(&self) -> usize {
        self.ancestors.len().saturating_sub(1)
    }
}

/// Iterator visiting a node, then each child's subtree in insertion order,
/// before moving on to siblings.
pub struct Walk<'a> {
    stack: Vec<(Vec<&'a str>, &'a Node)>,
}

impl<'a> Walk<'a> {
    /// Walk the descendants of `folder`. The folder itself is not yielded.
    pub fn new(folder: &'a FolderNode) -> Self {
        let mut walk = Walk { stack: Vec::new() };
        walk.push_children(vec![folder.name()], folder);
        walk
    }

    fn push_children(&mut self, ancestors: Vec<&'a str>, folder: &'a FolderNode) {
        // Reversed so the first child is popped first.
        for child in folder.children().rev() {
            self.stack.push((ancestors.clone(), child));
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (ancestors, node) = self.stack.pop()?;
        if let Node::Folder(folder) = node {
            let mut below = ancestors.clone();
            below.push(folder.name());
            self.push_children(below, folder);
        }
        Some(WalkEntry { ancestors, node })
    }
}
