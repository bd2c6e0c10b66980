//! Workspace facade: the operations the presentation layer calls.

use super::types::{CreatedItem, EditorView, TreeLine, WorkspaceConfig};
use crate::content::{ContentResolver, ContentWriter};
use crate::error::{ApiError, ExecutionError, NamespaceError};
use crate::execution::ExecuteRequest;
use crate::language::Language;
use crate::search::{self, file_name_of, SearchHit, SearchScope};
use crate::session::{CloseOutcome, Session};
use crate::tree::{ConflictPolicy, Namespace, NodeKind, ROOT_NAME};
use tracing::{debug, warn};

/// Namespace plus session, composed for the UI.
#[derive(Debug, Clone)]
pub struct Workspace {
    namespace: Namespace,
    session: Session,
    /// Frozen copy searched instead of the live tree under `SearchScope::Snapshot`
    search_snapshot: Option<Namespace>,
    on_conflict: ConflictPolicy,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(Namespace::sample())
    }
}

impl Workspace {
    /// Workspace over `namespace` that searches the live tree and rejects
    /// name conflicts.
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            session: Session::new(),
            search_snapshot: None,
            on_conflict: ConflictPolicy::Reject,
        }
    }

    pub fn with_search_scope(mut self, scope: SearchScope) -> Self {
        self.search_snapshot = match scope {
            SearchScope::Live => None,
            SearchScope::Snapshot => Some(self.namespace.clone()),
        };
        self
    }

    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.on_conflict = policy;
        self
    }

    /// Build from configuration, loading the seed file when one is set.
    pub fn from_config(config: &WorkspaceConfig) -> Result<Self, ApiError> {
        let namespace = match &config.seed {
            Some(path) => Namespace::load_seed_file(path)?,
            None => Namespace::sample(),
        };
        let stats = namespace.stats();
        debug!(
            folders = stats.folders,
            files = stats.files,
            search_scope = ?config.search_scope,
            "workspace opened"
        );
        Ok(Self::new(namespace)
            .with_search_scope(config.search_scope)
            .with_conflict_policy(config.on_conflict))
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn search_scope(&self) -> SearchScope {
        if self.search_snapshot.is_some() {
            SearchScope::Snapshot
        } else {
            SearchScope::Live
        }
    }

    /// Open (or switch to) the tab for `name`. Returns whether a tab was added.
    pub fn select_file(&mut self, name: &str) -> bool {
        let created = self.session.open(name);
        debug!(file = name, new_tab = created, "file selected");
        created
    }

    /// Open the file a search hit points at. Selection is by bare name, so a
    /// duplicate elsewhere in the tree may be what the editor shows.
    pub fn select_search_hit(&mut self, hit: &SearchHit) -> bool {
        self.select_file(hit.file_name())
    }

    /// Same as [`select_search_hit`](Self::select_search_hit) for a raw path.
    pub fn select_path(&mut self, path: &str) -> Option<bool> {
        let name = file_name_of(path);
        if name.is_empty() {
            return None;
        }
        Some(self.select_file(name))
    }

    /// Create an empty file or folder inside the folder at `at_folder`.
    ///
    /// Names containing a dot become files. On `NotFound`/`NotAFolder` the
    /// tree is left untouched.
    pub fn create_node<S: AsRef<str>>(
        &mut self,
        at_folder: &[S],
        item_name: &str,
    ) -> Result<CreatedItem, NamespaceError> {
        let kind = NodeKind::classify(item_name);
        match self
            .namespace
            .insert(at_folder, item_name, kind, self.on_conflict)
        {
            Ok(()) => {
                let mut path = vec![ROOT_NAME];
                path.extend(at_folder.iter().map(|s| s.as_ref()).filter(|s: &&str| !s.is_empty()));
                path.push(item_name);
                let created = CreatedItem {
                    path: path.join("/"),
                    kind,
                };
                debug!(path = %created.path, kind = ?kind, "item created");
                Ok(created)
            }
            Err(e) => {
                warn!(item = item_name, error = %e, "create rejected");
                Err(e)
            }
        }
    }

    /// Text of the active file, or empty when nothing is open
    pub fn current_text(&self) -> String {
        match self.session.active() {
            Some(active) => ContentResolver::new(&self.namespace).get_content(active),
            None => String::new(),
        }
    }

    /// Route an edit to every file sharing the active file's name.
    /// Returns how many files changed; 0 when nothing is open.
    pub fn edit(&mut self, text: &str) -> usize {
        let Some(active) = self.session.active().map(str::to_string) else {
            return 0;
        };
        let updated = ContentWriter::new(&mut self.namespace).set_content(&active, text);
        debug!(file = %active, updated, bytes = text.len(), "content edited");
        updated
    }

    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let target = self.search_snapshot.as_ref().unwrap_or(&self.namespace);
        search::search(target, query)
    }

    /// Close `name` if it is the active tab
    pub fn close(&mut self, name: &str) -> CloseOutcome {
        let outcome = self.session.close(name);
        debug!(file = name, outcome = ?outcome, "tab close");
        outcome
    }

    /// Close the active tab
    pub fn close_active(&mut self) -> CloseOutcome {
        let outcome = self.session.close_active();
        debug!(outcome = ?outcome, "active tab close");
        outcome
    }

    pub fn tabs(&self) -> &[String] {
        self.session.tabs()
    }

    pub fn active(&self) -> Option<&str> {
        self.session.active()
    }

    /// Language of the active file; None when nothing is open
    pub fn active_language(&self) -> Option<Language> {
        self.session.active().map(Language::for_file_name)
    }

    /// Request for running the active file. Refused when nothing is open or
    /// when the file's language has no runtime.
    pub fn execution_request(&self) -> Result<ExecuteRequest, ExecutionError> {
        let active = self.session.active().ok_or(ExecutionError::NoActiveFile)?;
        let language = Language::for_file_name(active);
        ExecuteRequest::for_source(language, Some(active), &self.current_text()).map_err(|e| {
            warn!(file = active, language = %language, "execution refused");
            e
        })
    }

    pub fn editor_view(&self) -> EditorView {
        EditorView {
            tabs: self.session.tabs().to_vec(),
            active: self.session.active().map(str::to_string),
            text: self.current_text(),
            language: self.active_language().unwrap_or(Language::Plaintext),
        }
    }

    /// Flattened tree for display, pre-order
    pub fn tree_lines(&self) -> Vec<TreeLine> {
        self.namespace
            .walk()
            .map(|entry| TreeLine {
                depth: entry.depth(),
                name: entry.node.name().to_string(),
                kind: entry.node.kind(),
                active: entry.node.kind() == NodeKind::File
                    && self.session.is_active(entry.node.name()),
            })
            .collect()
    }
}
