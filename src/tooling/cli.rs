//! CLI Tooling
//!
//! Command-line interface for the workspace. One-shot commands operate on a
//! freshly seeded workspace; `shell` keeps one workspace alive so tabs and
//! edits carry over between lines.

use crate::config::{ConfigLoader, WorkpadConfig};
use crate::content::ContentResolver;
use crate::error::ApiError;
use crate::execution::{ExecutionService, PistonClient};
use crate::logging::LoggingConfig;
use crate::search::file_name_of;
use crate::session::CloseOutcome;
use crate::tree::{split_folder_path, NodeKind};
use crate::workspace::{
    format_editor_text, format_execution_output, format_languages_text,
    format_search_results_json, format_search_results_text, format_tabs_text, format_tree_text,
    Workspace,
};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Message shown when an item is created somewhere other than inside a folder
pub const BAD_TARGET_MESSAGE: &str = "You can only add a new folder or file to a folder.";

const SHELL_PROMPT: &str = "workpad> ";

/// Workpad CLI - in-memory coding workspace
#[derive(Parser)]
#[command(name = "workpad")]
#[command(about = "In-memory coding workspace: file tree, editor tabs, search, and remote execution")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed file (.toml or .json) replacing the built-in sample project
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Enable verbose logging (same as --log-level debug)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold the logging flags into `logging`; flags win over every other layer.
    pub fn apply_logging_overrides(&self, logging: &mut LoggingConfig) {
        if self.verbose {
            logging.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            logging.file = Some(file.clone());
        }
    }

    /// Load configuration (explicit file or layered discovery) and apply the
    /// `--seed` override.
    pub fn load_config(&self) -> Result<WorkpadConfig, ApiError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&std::env::current_dir()?)?,
        };
        if let Some(seed) = &self.seed {
            config.workspace.seed = Some(seed.clone());
        }
        self.apply_logging_overrides(&mut config.logging);
        Ok(config)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the file tree
    Tree {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the content of the first file with this name
    Cat { name: String },
    /// Find files whose name or content contains the query
    Search {
        query: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Create an empty file (name contains a dot) or folder
    Create {
        /// Folder to create in, slash separated ("/" for the root)
        folder: String,
        /// Name of the new item; prompted for when omitted
        name: Option<String>,
    },
    /// Run a file on the execution service (defaults to the active file)
    Run { name: Option<String> },
    /// List languages and their runtimes
    Languages,
    /// Open a file in a tab and make it active
    Open { name: String },
    /// Close a tab (defaults to the active one)
    Close { name: Option<String> },
    /// Replace the active file's text ("\n" is a newline)
    Edit {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Show open tabs
    Tabs,
    /// Open the file a search result path points at
    Pick { path: String },
    /// Interactive session over a single workspace
    Shell,
}

/// One line typed at the shell prompt
#[derive(Parser, Debug)]
#[command(name = "workpad", no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    #[command(flatten)]
    Workspace(Commands),
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// CLI context owning the workspace and the execution service
pub struct CliContext {
    workspace: Workspace,
    config: WorkpadConfig,
    executor: ExecutionService,
}

impl CliContext {
    /// Create a context from loaded configuration
    pub fn new(config: WorkpadConfig) -> Result<Self, ApiError> {
        let workspace = Workspace::from_config(&config.workspace)?;
        let client = PistonClient::new(&config.execution)?;
        info!(endpoint = %client.execute_url(), "execution client ready");
        Ok(Self {
            workspace,
            config,
            executor: ExecutionService::new(Arc::new(client)),
        })
    }

    /// Assemble a context from prebuilt parts
    pub fn with_parts(workspace: Workspace, config: WorkpadConfig, executor: ExecutionService) -> Self {
        Self {
            workspace,
            config,
            executor,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn config(&self) -> &WorkpadConfig {
        &self.config
    }

    /// Execute a CLI command
    pub fn execute(&mut self, command: &Commands) -> Result<String, ApiError> {
        debug!(command = command_name(command), "executing command");
        match command {
            Commands::Tree { format } => {
                let lines = self.workspace.tree_lines();
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&lines).unwrap_or_else(|_| "[]".to_string()))
                } else {
                    Ok(format_tree_text(&lines))
                }
            }
            Commands::Cat { name } => {
                if self.workspace.namespace().find_by_name(name).is_none() {
                    return Ok(format!("No file named '{}'.", name));
                }
                Ok(ContentResolver::new(self.workspace.namespace()).get_content(name))
            }
            Commands::Search { query, format } => {
                let hits = self.workspace.search(query);
                if format == "json" {
                    Ok(format_search_results_json(&hits))
                } else {
                    Ok(format_search_results_text(query, &hits))
                }
            }
            Commands::Create { folder, name } => self.handle_create(folder, name.as_deref()),
            Commands::Run { name } => {
                if let Some(name) = name {
                    self.open_existing(name)?;
                }
                let request = self.workspace.execution_request()?;
                let output = self.executor.run_blocking(&request)?;
                Ok(format_execution_output(&output))
            }
            Commands::Languages => Ok(format_languages_text()),
            Commands::Open { name } => {
                self.open_existing(name)?;
                Ok(format_editor_text(&self.workspace.editor_view()))
            }
            Commands::Close { name } => {
                let outcome = match name {
                    Some(name) => self.workspace.close(name),
                    None => self.workspace.close_active(),
                };
                Ok(match outcome {
                    CloseOutcome::Reselected(next) => format!("Closed. Now editing {}.", next),
                    CloseOutcome::Emptied => "Closed. No files open.".to_string(),
                    CloseOutcome::NotActive => "Only the active tab can be closed.".to_string(),
                })
            }
            Commands::Edit { text } => {
                let text = unescape_newlines(&text.join(" "));
                match self.workspace.edit(&text) {
                    0 => Ok("No file is open.".to_string()),
                    n => Ok(format!("Updated {} file(s).", n)),
                }
            }
            Commands::Tabs => Ok(format_tabs_text(&self.workspace.editor_view())),
            Commands::Pick { path } => {
                let name = file_name_of(path);
                if name.is_empty() {
                    return Err(ApiError::Rejected(format!("'{}' does not name a file.", path)));
                }
                self.open_existing(name)?;
                Ok(format_editor_text(&self.workspace.editor_view()))
            }
            Commands::Shell => {
                let stdin = std::io::stdin();
                let stdout = std::io::stdout();
                self.run_shell(stdin.lock(), stdout.lock())?;
                Ok(String::new())
            }
        }
    }

    /// Read commands line by line until `exit` or end of input.
    ///
    /// Command errors are printed and the loop continues.
    pub fn run_shell<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), ApiError> {
        write!(out, "{}", SHELL_PROMPT)?;
        out.flush()?;
        for line in input.lines() {
            let line = line?;
            let words = match split_words(&line) {
                Ok(words) => words,
                Err(e) => {
                    writeln!(out, "Error: {}", e)?;
                    write!(out, "{}", SHELL_PROMPT)?;
                    out.flush()?;
                    continue;
                }
            };
            if !words.is_empty() {
                match ShellLine::try_parse_from(&words) {
                    Ok(ShellLine {
                        command: ShellCommand::Exit,
                    }) => break,
                    Ok(ShellLine {
                        command: ShellCommand::Workspace(Commands::Shell),
                    }) => writeln!(out, "Already in a shell.")?,
                    Ok(ShellLine {
                        command: ShellCommand::Workspace(command),
                    }) => match self.execute(&command) {
                        Ok(text) => write_block(&mut out, &text)?,
                        Err(e) => writeln!(out, "Error: {}", e)?,
                    },
                    Err(e) => write_block(&mut out, &e.render().to_string())?,
                }
            }
            write!(out, "{}", SHELL_PROMPT)?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn handle_create(&mut self, folder: &str, name: Option<&str>) -> Result<String, ApiError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => prompt_item_name()?,
        };
        if name.trim().is_empty() {
            return Ok("Cancelled.".to_string());
        }
        let segments = split_folder_path(folder);
        match self.workspace.create_node(&segments, &name) {
            Ok(created) => {
                let kind = match created.kind {
                    NodeKind::File => "file",
                    NodeKind::Folder => "folder",
                };
                Ok(format!("Created {} {}", kind, created.path))
            }
            Err(e) if e.is_bad_target() => {
                debug!(folder, error = %e, "create outside a folder");
                Err(ApiError::Rejected(BAD_TARGET_MESSAGE.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn open_existing(&mut self, name: &str) -> Result<(), ApiError> {
        if self.workspace.namespace().find_by_name(name).is_none() {
            return Err(ApiError::Rejected(format!("No file named '{}'.", name)));
        }
        self.workspace.select_file(name);
        Ok(())
    }
}

fn prompt_item_name() -> Result<String, ApiError> {
    use dialoguer::Input;

    Input::<String>::new()
        .with_prompt("Enter the name for the new file or folder")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ApiError::Prompt(format!("Failed to get user input: {}", e)))
}

fn write_block<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    if text.ends_with('\n') {
        write!(out, "{}", text)
    } else {
        writeln!(out, "{}", text)
    }
}

fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// Split a shell line into words. Single quotes are literal; double quotes
/// allow `\"` and `\\` escapes.
pub fn split_words(line: &str) -> Result<Vec<String>, ApiError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err(ApiError::InvalidInput("unterminated quote".to_string())),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\')) => current.push(c),
                            Some(c) => {
                                current.push('\\');
                                current.push(c);
                            }
                            None => {
                                return Err(ApiError::InvalidInput("unterminated quote".to_string()))
                            }
                        },
                        Some(c) => current.push(c),
                        None => return Err(ApiError::InvalidInput("unterminated quote".to_string())),
                    }
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Command name for logging
fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Tree { .. } => "tree",
        Commands::Cat { .. } => "cat",
        Commands::Search { .. } => "search",
        Commands::Create { .. } => "create",
        Commands::Run { .. } => "run",
        Commands::Languages => "languages",
        Commands::Open { .. } => "open",
        Commands::Close { .. } => "close",
        Commands::Edit { .. } => "edit",
        Commands::Tabs => "tabs",
        Commands::Pick { .. } => "pick",
        Commands::Shell => "shell",
    }
}
