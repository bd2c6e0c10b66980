//! Workspace domain: the facade the presentation layer calls, plus its
//! configuration and text formatting.

mod facade;
mod format;
mod types;

pub use facade::*;
pub use format::*;
pub use types::*;
