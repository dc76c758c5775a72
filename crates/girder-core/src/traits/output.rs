//! Output renderer trait for pluggable CLI output formats.

use serde_json::Value;

use crate::result::FrameworkResult;

/// Trait for output rendering backends.
///
/// The host application hands a renderer the data it wants to display
/// and writes the returned text to stdout. Which renderer is active is
/// decided at runtime from configuration (or a CLI flag contributed by
/// an extension hook).
pub trait OutputRenderer: Send + Sync + std::fmt::Debug {
    /// Render `data` to its textual representation.
    fn render(&self, data: &Value) -> FrameworkResult<String>;
}
