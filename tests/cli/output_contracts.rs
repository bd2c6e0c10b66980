use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use workpad::config::WorkpadConfig;
use workpad::error::{ApiError, ExecutionError};
use workpad::execution::{ExecuteRequest, ExecuteResponse, ExecutionClient, ExecutionService, RunStage};
use workpad::tooling::cli::{CliContext, Commands, BAD_TARGET_MESSAGE};
use workpad::Workspace;

struct FailingClient;

#[async_trait::async_trait]
impl ExecutionClient for FailingClient {
    async fn execute(&self, _request: &ExecuteRequest) -> Result<ExecuteResponse, ExecutionError> {
        Err(ExecutionError::Transport("connection refused".to_string()))
    }
}

struct StderrClient;

#[async_trait::async_trait]
impl ExecutionClient for StderrClient {
    async fn execute(&self, _request: &ExecuteRequest) -> Result<ExecuteResponse, ExecutionError> {
        Ok(ExecuteResponse {
            run: RunStage {
                stderr: "SyntaxError".to_string(),
                output: "SyntaxError".to_string(),
                code: Some(1),
                ..RunStage::default()
            },
            compile: None,
        })
    }
}

fn context_with(client: impl ExecutionClient + 'static) -> CliContext {
    CliContext::with_parts(
        Workspace::default(),
        WorkpadConfig::default(),
        ExecutionService::new(Arc::new(client)),
    )
}

#[test]
fn tree_json_contract_has_required_fields() {
    let mut cli = context_with(FailingClient);
    let output = cli
        .execute(&Commands::Tree {
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["name"], "src");
    assert_eq!(rows[0]["kind"], "folder");
    assert_eq!(rows[0]["depth"], 0);
    assert!(rows[0]["active"].as_bool().is_some());
}

#[test]
fn search_json_contract_has_path_and_content() {
    let mut cli = context_with(FailingClient);
    let output = cli
        .execute(&Commands::Search {
            query: "greet".to_string(),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let hits = parsed.as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["path"], "root/src/components/Header.ts");
    assert!(hits[0]["content"].as_str().unwrap().contains("greet"));
}

#[test]
fn create_outside_folder_uses_fixed_message() {
    let mut cli = context_with(FailingClient);
    let err = cli
        .execute(&Commands::Create {
            folder: "/src/App.ts".to_string(),
            name: Some("x.js".to_string()),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));
    assert_eq!(err.to_string(), BAD_TARGET_MESSAGE);
}

#[test]
fn run_surfaces_transport_errors() {
    let mut cli = context_with(FailingClient);
    let err = cli
        .execute(&Commands::Run {
            name: Some("App.ts".to_string()),
        })
        .unwrap_err();
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn run_refuses_unsupported_language() {
    let mut cli = context_with(FailingClient);
    let err = cli
        .execute(&Commands::Run {
            name: Some("index.html".to_string()),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Execution(ExecutionError::UnsupportedLanguage(_))
    ));
}

#[test]
fn run_with_stderr_still_succeeds() {
    let mut cli = context_with(StderrClient);
    let output = cli
        .execute(&Commands::Run {
            name: Some("index.js".to_string()),
        })
        .unwrap();
    assert!(output.contains("SyntaxError"));
    assert!(output.contains("exit code 1"));
}

#[test]
fn context_new_loads_seed_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let seed = temp_dir.path().join("seed.json");
    fs::write(&seed, r#"{"main.py": {"content": "print(42)"}}"#).unwrap();

    let mut config = WorkpadConfig::default();
    config.workspace.seed = Some(seed);
    let mut cli = CliContext::new(config).unwrap();

    let output = cli
        .execute(&Commands::Cat {
            name: "main.py".to_string(),
        })
        .unwrap();
    assert_eq!(output, "print(42)");
    let missing = cli
        .execute(&Commands::Cat {
            name: "App.ts".to_string(),
        })
        .unwrap();
    assert_eq!(missing, "No file named 'App.ts'.");
}

#[test]
fn pick_selects_by_bare_name() {
    let mut cli = context_with(FailingClient);
    cli.execute(&Commands::Pick {
        path: "root/src/components/Footer.js".to_string(),
    })
    .unwrap();
    assert_eq!(cli.workspace().active(), Some("Footer.js"));

    let tabs = cli.execute(&Commands::Tabs).unwrap();
    assert!(tabs.contains("Footer.js"));
}
