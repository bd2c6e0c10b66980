use serde::{Deserialize, Serialize};

/// Public Piston instance
pub const DEFAULT_ENDPOINT: &str = "https://emkc.org/api/v2/piston";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Execution service configuration owned by the execution domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Base URL; requests go to `{endpoint}/execute`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout. A service that never answers surfaces as a
    /// transport error after this long.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ExecutionConfig {
    /// Full URL of the execute call
    pub fn execute_url(&self) -> String {
        format!("{}/execute", self.endpoint.trim_end_matches('/'))
    }
}
