//! Content Resolver
//!
//! Bare-name access to file text. Lookups never fail: a missing file reads as
//! an empty string so the editing surface always has something to render.

use crate::tree::Namespace;

pub struct ContentResolver<'a> {
    namespace: &'a Namespace,
}

impl<'a> ContentResolver<'a> {
    pub fn new(namespace: &'a Namespace) -> Self {
        Self { namespace }
    }

    /// Text of the first file named `name` in pre-order, or `""`.
    pub fn get_content(&self, name: &str) -> String {
        self.namespace
            .find_by_name(name)
            .map(|file| file.content.clone())
            .unwrap_or_default()
    }
}

/// Mutable counterpart of [`ContentResolver`]
pub struct ContentWriter<'a> {
    namespace: &'a mut Namespace,
}

impl<'a> ContentWriter<'a> {
    pub fn new(namespace: &'a mut Namespace) -> Self {
        Self { namespace }
    }

    /// Replace the text of every file named `name`; returns the update count.
    pub fn set_content(&mut self, name: &str, text: &str) -> usize {
        self.namespace.replace_content(name, text)
    }
}
