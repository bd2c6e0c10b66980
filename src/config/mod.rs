//! Configuration
//!
//! Layered configuration built with the `config` crate. Precedence, lowest to
//! highest: built-in defaults, global file, workspace file, environment.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::execution::ExecutionConfig;
use crate::logging::LoggingConfig;
use crate::workspace::WorkspaceConfig;
use serde::{Deserialize, Serialize};

/// Environment prefix for configuration overlays (`WORKPAD__SECTION__KEY`)
pub const ENV_PREFIX: &str = "WORKPAD";

/// Workspace-local configuration file name
pub const WORKSPACE_CONFIG_FILE: &str = "workpad.toml";

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkpadConfig {
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    #[serde(default)]
    pub execution: ExecutionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
