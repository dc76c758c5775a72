//! Config backend trait for pluggable application configuration sources.

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::result::FrameworkResult;

/// Trait for application configuration backends.
///
/// A config backend owns a two-level namespace: named sections, each
/// holding key/value pairs. Values are exposed as [`serde_json::Value`]
/// so that callers do not depend on the backend's on-disk format.
#[async_trait]
pub trait ConfigBackend: Send + Sync + std::fmt::Debug {
    /// Parse the file at `path` and merge its contents over the current
    /// state. Returns `false` (without error) when the file does not
    /// exist, so optional config files are cheap to probe.
    async fn load_file(&self, path: &Path) -> FrameworkResult<bool>;

    /// Return all section names.
    async fn sections(&self) -> Vec<String>;

    /// Return all keys within a section. Empty when the section is
    /// absent.
    async fn keys(&self, section: &str) -> Vec<String>;

    /// Get a single value.
    async fn get(&self, section: &str, key: &str) -> Option<Value>;

    /// Set a single value, creating the section when needed.
    async fn set(&self, section: &str, key: &str, value: Value);

    /// Merge a map of sections over the current state. Later values win
    /// key by key; sections not named in `other` are untouched.
    async fn merge(&self, other: serde_json::Map<String, Value>);
}
