//! Wire types for the execution service

use crate::error::ExecutionError;
use crate::language::Language;
use serde::{Deserialize, Serialize};

/// One source file sent for execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: String,
}

/// Body of `POST /execute`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub language: String,
    pub version: String,
    pub files: Vec<SourceFile>,
}

impl ExecuteRequest {
    /// Build a single-file request. Languages without a runtime are refused
    /// here so they never reach the service.
    pub fn for_source(
        language: Language,
        file_name: Option<&str>,
        source: &str,
    ) -> Result<Self, ExecutionError> {
        let version = language
            .runtime_version()
            .ok_or_else(|| ExecutionError::UnsupportedLanguage(language.id().to_string()))?;
        Ok(Self {
            language: language.id().to_string(),
            version: version.to_string(),
            files: vec![SourceFile {
                name: file_name.map(str::to_string),
                content: source.to_string(),
            }],
        })
    }
}

/// Run stage of an execution response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStage {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    /// Interleaved stdout and stderr
    #[serde(default)]
    pub output: String,
    /// Exit code; null when the process was killed by a signal
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub signal: Option<String>,
}

/// Compile stage, present only for compiled languages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileStage {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    #[serde(default)]
    pub code: Option<i32>,
}

/// Body of a successful execute response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteResponse {
    pub run: RunStage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compile: Option<CompileStage>,
}
