//! Format tree, tabs, search results, and run output as text.

use super::types::{EditorView, TreeLine};
use crate::execution::ExecutionOutput;
use crate::language::Language;
use crate::search::SearchHit;
use crate::tree::{NodeKind, ROOT_NAME};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Indented tree, folders suffixed with `/`, the active file highlighted.
pub fn format_tree_text(lines: &[TreeLine]) -> String {
    let mut out = format!("{}/\n", ROOT_NAME);
    for line in lines {
        let indent = "  ".repeat(line.depth + 1);
        match line.kind {
            NodeKind::Folder => out.push_str(&format!("{}{}/\n", indent, line.name)),
            NodeKind::File if line.active => {
                out.push_str(&format!("{}{} {}\n", indent, line.name.reversed(), "*".green()))
            }
            NodeKind::File => out.push_str(&format!("{}{}\n", indent, line.name)),
        }
    }
    out
}

/// Tab bar: open tabs in order, the active one bracketed.
pub fn format_tabs_text(view: &EditorView) -> String {
    if view.tabs.is_empty() {
        return "No files open.\n".to_string();
    }
    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|tab| {
            if view.active.as_deref() == Some(tab.as_str()) {
                format!("[{}]", tab.bold())
            } else {
                tab.clone()
            }
        })
        .collect();
    format!("{}\n", tabs.join("  "))
}

/// Editor area: tab bar, language, then the active text.
pub fn format_editor_text(view: &EditorView) -> String {
    let mut out = format_tabs_text(view);
    if view.active.is_some() {
        out.push_str(&format!("{} ({})\n", "-".repeat(40).dimmed(), view.language));
        out.push_str(&view.text);
        if !view.text.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

/// Search results as a table of paths.
pub fn format_search_results_text(query: &str, hits: &[SearchHit]) -> String {
    if query.is_empty() {
        return "Empty query.\n".to_string();
    }
    if hits.is_empty() {
        return format!("No files match '{}'.\n", query);
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Language"]);
    for hit in hits {
        table.add_row(vec![
            hit.path.clone(),
            Language::for_file_name(hit.file_name()).to_string(),
        ]);
    }
    format!("{}\n{} match(es)\n", table, hits.len())
}

pub fn format_search_results_json(hits: &[SearchHit]) -> String {
    serde_json::to_string_pretty(hits).unwrap_or_else(|_| "[]".to_string())
}

/// Output panel: lines in red when the program wrote to stderr.
pub fn format_execution_output(output: &ExecutionOutput) -> String {
    let mut out = String::new();
    if let Some(compile) = &output.compile {
        if !compile.stderr.is_empty() {
            out.push_str(&format!("{}\n", format_section_heading("Compile")));
            out.push_str(&format!("{}\n", compile.stderr.red()));
        }
    }
    for line in &output.lines {
        if output.is_error {
            out.push_str(&format!("{}\n", line.red()));
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }
    let status = match (output.exit_code, output.signal.as_deref()) {
        (Some(code), _) => format!("exit code {}", code),
        (None, Some(signal)) => format!("killed by {}", signal),
        (None, None) => "no exit code".to_string(),
    };
    out.push_str(&format!("{}\n", status.dimmed()));
    out
}

/// Extension mapping table for the `languages` command.
pub fn format_languages_text() -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Language", "Runtime version", "Runnable"]);
    for language in Language::ALL {
        table.add_row(vec![
            language.id().to_string(),
            language.runtime_version().unwrap_or("-").to_string(),
            if language.is_executable() { "yes" } else { "no" }.to_string(),
        ]);
    }
    format!("{}\n", table)
}
