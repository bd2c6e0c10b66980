//! Built-in defaults every configuration build starts from.

use crate::execution::config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder pre-populated with defaults so partial files deserialize cleanly.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("workspace.search_scope", "live")?
        .set_default("workspace.on_conflict", "reject")?
        .set_default("execution.endpoint", DEFAULT_ENDPOINT)?
        .set_default("execution.timeout_secs", DEFAULT_TIMEOUT_SECS)
}
