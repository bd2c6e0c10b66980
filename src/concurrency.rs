//! Shared access to one workspace from several threads
//!
//! Reads (lookups, search, rendering) take a shared lock; anything that
//! touches the tree or the session takes the write lock, so a search never
//! observes a half-applied edit.

use crate::error::{ExecutionError, NamespaceError};
use crate::execution::ExecuteRequest;
use crate::search::SearchHit;
use crate::session::CloseOutcome;
use crate::workspace::{CreatedItem, Workspace};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to a workspace guarded by a read-write lock
#[derive(Clone, Default)]
pub struct SharedWorkspace {
    inner: Arc<RwLock<Workspace>>,
}

impl SharedWorkspace {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            inner: Arc::new(RwLock::new(workspace)),
        }
    }

    /// Run `f` under the shared lock
    pub fn read<T>(&self, f: impl FnOnce(&Workspace) -> T) -> T {
        f(&self.inner.read())
    }

    /// Run `f` under the exclusive lock
    pub fn write<T>(&self, f: impl FnOnce(&mut Workspace) -> T) -> T {
        f(&mut self.inner.write())
    }

    pub fn create_node<S: AsRef<str>>(
        &self,
        at_folder: &[S],
        item_name: &str,
    ) -> Result<CreatedItem, NamespaceError> {
        self.write(|ws| ws.create_node(at_folder, item_name))
    }

    pub fn select_file(&self, name: &str) -> bool {
        self.write(|ws| ws.select_file(name))
    }

    pub fn close(&self, name: &str) -> CloseOutcome {
        self.write(|ws| ws.close(name))
    }

    pub fn edit(&self, text: &str) -> usize {
        self.write(|ws| ws.edit(text))
    }

    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        self.read(|ws| ws.search(query))
    }

    pub fn current_text(&self) -> String {
        self.read(|ws| ws.current_text())
    }

    /// Snapshot the active file into a request; the lock is released before
    /// any network call is made.
    pub fn execution_request(&self) -> Result<ExecuteRequest, ExecutionError> {
        self.read(|ws| ws.execution_request())
    }

    /// Take the workspace back out if this is the last handle
    pub fn into_inner(self) -> Result<Workspace, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}
