//! Shared types for workspace configuration and derived views.

use crate::language::Language;
use crate::search::SearchScope;
use crate::tree::{ConflictPolicy, NodeKind};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Workspace section of the configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Seed file (.toml or .json); None starts from the built-in sample project
    #[serde(default)]
    pub seed: Option<PathBuf>,

    /// Search the live tree or a snapshot frozen at startup
    #[serde(default)]
    pub search_scope: SearchScope,

    /// What creating an item over an existing sibling does
    #[serde(default)]
    pub on_conflict: ConflictPolicy,
}

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedItem {
    /// Slash-joined path from the root folder
    pub path: String,
    pub kind: NodeKind,
}

/// One row of the rendered tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLine {
    pub depth: usize,
    pub name: String,
    pub kind: NodeKind,
    /// File is the active tab (by bare name, so duplicates all highlight)
    pub active: bool,
}

/// Everything the editor area needs in one value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub tabs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
    pub text: String,
    pub language: Language,
}
