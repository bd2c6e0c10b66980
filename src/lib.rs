//! Workpad: In-Memory Coding Workspace
//!
//! A hierarchical file namespace with editor tabs, content search, and
//! remote code execution, exposed through a single `Workspace` facade and a
//! command-line front end.

pub mod concurrency;
pub mod config;
pub mod content;
pub mod error;
pub mod execution;
pub mod language;
pub mod logging;
pub mod search;
pub mod session;
pub mod tooling;
pub mod tree;
pub mod workspace;

pub use concurrency::SharedWorkspace;
pub use error::{ApiError, ExecutionError, NamespaceError};
pub use workspace::Workspace;
