//! Extension to language mapping and the runtime versions the execution
//! service is asked for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Editor language of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    CSharp,
    Php,
    Html,
    Plaintext,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::Java,
        Language::CSharp,
        Language::Php,
        Language::Html,
        Language::Plaintext,
    ];

    /// Map a bare extension (no dot). Unknown extensions are plaintext.
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "js" | "jsx" => Language::JavaScript,
            "ts" => Language::TypeScript,
            "py" => Language::Python,
            "java" => Language::Java,
            "cs" | "csharp" => Language::CSharp,
            "php" => Language::Php,
            "html" => Language::Html,
            _ => Language::Plaintext,
        }
    }

    /// Language of a file, from the text after its last dot
    pub fn for_file_name(name: &str) -> Self {
        name.rsplit_once('.')
            .map(|(_, ext)| Language::from_extension(ext))
            .unwrap_or(Language::Plaintext)
    }

    /// Identifier shared by the editor and the execution service
    pub fn id(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Php => "php",
            Language::Html => "html",
            Language::Plaintext => "plaintext",
        }
    }

    /// Runtime version requested from the execution service, `None` when the
    /// language cannot be executed.
    pub fn runtime_version(&self) -> Option<&'static str> {
        match self {
            Language::JavaScript => Some("18.15.0"),
            Language::TypeScript => Some("5.0.3"),
            Language::Python => Some("3.10.0"),
            Language::Java => Some("15.0.2"),
            Language::CSharp => Some("6.12.0"),
            Language::Php => Some("8.2.3"),
            Language::Html | Language::Plaintext => None,
        }
    }

    pub fn is_executable(&self) -> bool {
        self.runtime_version().is_some()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
