//! Blocking front door for execution, used by the CLI.

use super::client::ExecutionClient;
use super::output::ExecutionOutput;
use super::types::ExecuteRequest;
use crate::error::ExecutionError;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

pub struct ExecutionService {
    client: Arc<dyn ExecutionClient>,
}

impl ExecutionService {
    pub fn new(client: Arc<dyn ExecutionClient>) -> Self {
        Self { client }
    }

    /// Send `request` and wait for the result on the current async runtime.
    pub async fn run(&self, request: &ExecuteRequest) -> Result<ExecutionOutput, ExecutionError> {
        let started = Instant::now();
        info!(language = %request.language, version = %request.version, "execution started");
        match self.client.execute(request).await {
            Ok(response) => {
                let output = ExecutionOutput::from_response(response);
                info!(
                    language = %request.language,
                    exit_code = ?output.exit_code,
                    is_error = output.is_error,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "execution finished"
                );
                Ok(output)
            }
            Err(e) => {
                warn!(language = %request.language, error = %e, "execution failed");
                Err(e)
            }
        }
    }

    /// Same as [`run`](Self::run) but drives its own runtime, for sync callers.
    pub fn run_blocking(&self, request: &ExecuteRequest) -> Result<ExecutionOutput, ExecutionError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ExecutionError::Runtime(e.to_string()))?;
        rt.block_on(self.run(request))
    }
}
