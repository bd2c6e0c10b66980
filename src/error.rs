//! Error types for the workspace model, the execution client, and the ambient stack.

use thiserror::Error;

/// Structural failures raised by the namespace.
///
/// Plain lookups never produce these; a missing file is an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    #[error("No folder named '{0}'")]
    NotFound(String),

    #[error("'{0}' is a file, not a folder")]
    NotAFolder(String),

    #[error("An item named '{0}' already exists in this folder")]
    NameConflict(String),

    #[error("Invalid item name: '{0}'")]
    InvalidName(String),
}

impl NamespaceError {
    /// True for the two failures the creation prompt reports as
    /// "you may only create items inside a folder".
    pub fn is_bad_target(&self) -> bool {
        matches!(self, NamespaceError::NotFound(_) | NamespaceError::NotAFolder(_))
    }
}

/// Failures around the remote execution service.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("No file is open")]
    NoActiveFile,

    #[error("'{0}' cannot be executed: no runtime is mapped for it")]
    UnsupportedLanguage(String),

    #[error("Execution service unreachable: {0}")]
    Transport(String),

    #[error("Execution service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response from execution service: {0}")]
    Decode(String),

    #[error("Failed to start async runtime: {0}")]
    Runtime(String),
}

/// Top-level error returned by the facade, the CLI, and configuration loading.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Namespace(#[from] NamespaceError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// User-facing refusal with its own wording
    #[error("{0}")]
    Rejected(String),

    #[error("Invalid command line: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
