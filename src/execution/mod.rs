//! Remote sandboxed execution
//!
//! The workspace hands the active file's text and language to an external
//! execution service and renders whatever comes back. Nothing here touches
//! namespace or session state.

pub mod client;
pub mod config;
pub mod output;
pub mod service;
pub mod types;

pub use client::{ExecutionClient, PistonClient};
pub use config::ExecutionConfig;
pub use output::ExecutionOutput;
pub use service::ExecutionService;
pub use types::{CompileStage, ExecuteRequest, ExecuteResponse, RunStage, SourceFile};
