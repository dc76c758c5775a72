//! Extension loading configuration.

use serde::{Deserialize, Serialize};

/// Extension loading configuration.
///
/// The `enable` list is ordered: extensions are loaded in exactly the
/// order given here, so registrations happen deterministically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtensionsConfig {
    /// Extension ids to load on setup, in load order.
    #[serde(default)]
    pub enable: Vec<String>,
}
