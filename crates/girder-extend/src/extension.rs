//! Extension trait: the loadable unit of the framework.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use girder_core::result::FrameworkResult;

use crate::app::App;

/// Metadata about an extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionInfo {
    /// Unique extension identifier, as named in configuration.
    pub id: String,
    /// Human-readable extension name.
    pub name: String,
    /// Extension version string.
    pub version: String,
    /// Extension description.
    pub description: String,
    /// Author or maintainer.
    pub author: String,
}

/// Trait that all extensions must implement.
///
/// An extension communicates with the framework only through its load
/// side effects: registering handlers and hooks on the [`App`]. It
/// returns nothing useful on success and reports failures through the
/// framework's error kinds, which abort setup.
#[async_trait]
pub trait Extension: Send + Sync + fmt::Debug {
    /// Returns extension metadata.
    fn info(&self) -> ExtensionInfo;

    /// Called once while the application is setting up. Registration
    /// happens here.
    async fn load(&self, app: &App) -> FrameworkResult<()>;
}
