//! Execution service clients

use super::config::ExecutionConfig;
use super::types::{ExecuteRequest, ExecuteResponse};
use crate::error::ExecutionError;
use async_trait::async_trait;
use std::time::Duration;

/// Anything that can run an [`ExecuteRequest`]
#[async_trait]
pub trait ExecutionClient: Send + Sync {
    async fn execute(&self, request: &ExecuteRequest) -> Result<ExecuteResponse, ExecutionError>;
}

/// HTTP client for a Piston-compatible execution endpoint
#[derive(Clone)]
pub struct PistonClient {
    client: reqwest::Client,
    execute_url: String,
}

impl PistonClient {
    pub fn new(config: &ExecutionConfig) -> Result<Self, ExecutionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ExecutionError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            execute_url: config.execute_url(),
        })
    }

    pub fn execute_url(&self) -> &str {
        &self.execute_url
    }
}

#[async_trait]
impl ExecutionClient for PistonClient {
    async fn execute(&self, request: &ExecuteRequest) -> Result<ExecuteResponse, ExecutionError> {
        let response = self
            .client
            .post(&self.execute_url)
            .json(request)
            .send()
            .await
            .map_err(|e| ExecutionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExecutionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ExecuteResponse>()
            .await
            .map_err(|e| ExecutionError::Decode(e.to_string()))
    }
}
