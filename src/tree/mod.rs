//! Workspace namespace: the folder/file tree and its traversal

pub mod namespace;
pub mod node;
pub mod seed;
pub mod walk;

pub use namespace::{split_folder_path, ConflictPolicy, Namespace, TreeStats, ROOT_NAME};
pub use node::{FileNode, FolderNode, Node, NodeKind};
pub use seed::{Seed, SeedEntry, SeedFile};
pub use walk::{Walk, WalkEntry};
