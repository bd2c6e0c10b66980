//! What the output panel shows after a run

use super::types::{CompileStage, ExecuteResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Rendered result of one execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionOutput {
    /// Combined output split into display lines
    pub lines: Vec<String>,
    /// The program wrote to stderr; the panel is styled as an error
    pub is_error: bool,
    pub exit_code: Option<i32>,
    pub signal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile: Option<CompileStage>,
    pub finished_at: DateTime<Utc>,
}

impl ExecutionOutput {
    pub fn from_response(response: ExecuteResponse) -> Self {
        let ExecuteResponse { run, compile } = response;
        Self {
            lines: run.output.split('\n').map(str::to_string).collect(),
            is_error: !run.stderr.is_empty(),
            exit_code: run.code,
            signal: run.signal,
            compile,
            finished_at: Utc::now(),
        }
    }
}
