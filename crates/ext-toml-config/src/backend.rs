//! TOML-backed implementation of the `config` interface.

use std::any::Any;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::map::Entry;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::debug;

use girder_core::error::{ErrorKind, FrameworkError};
use girder_core::result::FrameworkResult;
use girder_core::traits::ConfigBackend;
use girder_extend::handler::{Handler, HandlerMeta};
use girder_extend::interface::InterfaceDef;

/// Interface members this backend exposes.
const MEMBERS: &[&str] = &["load_file", "sections", "keys", "get", "set", "merge"];

/// Application config backend parsing TOML files into a two-level
/// section/key namespace.
#[derive(Debug)]
pub struct TomlConfigBackend {
    /// Handler metadata.
    meta: HandlerMeta,
    /// Section name → table of values.
    sections: RwLock<Map<String, Value>>,
}

impl TomlConfigBackend {
    /// Creates the backend against the defined `config` interface.
    pub fn new(interface: Arc<InterfaceDef>) -> Self {
        Self {
            meta: HandlerMeta::new(interface, "toml"),
            sections: RwLock::new(Map::new()),
        }
    }

    /// Parses a TOML document and merges it over the current state.
    pub async fn parse_str(&self, text: &str) -> FrameworkResult<()> {
        let table: toml::Table = toml::from_str(text).map_err(|e| {
            FrameworkError::with_source(
                ErrorKind::Serialization,
                format!("TOML parse error: {e}"),
                e,
            )
        })?;

        let value = serde_json::to_value(table)?;
        let Value::Object(map) = value else {
            return Err(FrameworkError::configuration(
                "TOML document did not deserialize to a table",
            ));
        };

        self.merge(map).await;
        Ok(())
    }
}

#[async_trait]
impl ConfigBackend for TomlConfigBackend {
    async fn load_file(&self, path: &Path) -> FrameworkResult<bool> {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file absent, skipping");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        self.parse_str(&text).await?;
        debug!(path = %path.display(), "config file loaded");
        Ok(true)
    }

    async fn sections(&self) -> Vec<String> {
        let sections = self.sections.read().await;
        sections.keys().cloned().collect()
    }

    async fn keys(&self, section: &str) -> Vec<String> {
        let sections = self.sections.read().await;
        sections
            .get(section)
            .and_then(|v| v.as_object())
            .map(|table| table.keys().cloned().collect())
            .unwrap_or_default()
    }

    async fn get(&self, section: &str, key: &str) -> Option<Value> {
        let sections = self.sections.read().await;
        sections
            .get(section)
            .and_then(|v| v.as_object())
            .and_then(|table| table.get(key))
            .cloned()
    }

    async fn set(&self, section: &str, key: &str, value: Value) {
        let mut sections = self.sections.write().await;
        let entry = sections
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(table) = entry {
            table.insert(key.to_string(), value);
        }
    }

    async fn merge(&self, other: Map<String, Value>) {
        let mut sections = self.sections.write().await;
        for (section, incoming) in other {
            match sections.entry(section) {
                Entry::Vacant(slot) => {
                    slot.insert(incoming);
                }
                Entry::Occupied(mut slot) => match (slot.get_mut(), incoming) {
                    (Value::Object(existing), Value::Object(table)) => {
                        for (key, value) in table {
                            existing.insert(key, value);
                        }
                    }
                    (current, incoming) => {
                        *current = incoming;
                    }
                },
            }
        }
    }
}

impl Handler for TomlConfigBackend {
    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn members(&self) -> &[&'static str] {
        MEMBERS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_config(&self) -> Option<&dyn ConfigBackend> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn backend() -> TomlConfigBackend {
        let interface = Arc::new(InterfaceDef::new(
            "config",
            &["load_file", "sections", "keys", "get", "set", "merge"],
        ));
        TomlConfigBackend::new(interface)
    }

    #[tokio::test]
    async fn parses_sections_and_values() {
        let backend = backend();
        backend
            .parse_str("[server]\nhost = \"localhost\"\nport = 8080\n")
            .await
            .unwrap();

        assert_eq!(backend.sections().await, vec!["server".to_string()]);
        assert_eq!(
            backend.get("server", "host").await,
            Some(json!("localhost"))
        );
        assert_eq!(backend.get("server", "port").await, Some(json!(8080)));
        assert!(backend.get("server", "absent").await.is_none());
    }

    #[tokio::test]
    async fn merge_overwrites_key_by_key() {
        let backend = backend();
        backend
            .parse_str("[server]\nhost = \"localhost\"\nport = 8080\n")
            .await
            .unwrap();
        backend
            .parse_str("[server]\nport = 9090\n")
            .await
            .unwrap();

        // Overridden key updated, untouched key kept.
        assert_eq!(backend.get("server", "port").await, Some(json!(9090)));
        assert_eq!(
            backend.get("server", "host").await,
            Some(json!("localhost"))
        );
    }

    #[tokio::test]
    async fn set_creates_sections_on_demand() {
        let backend = backend();
        backend.set("features", "color", json!(true)).await;

        assert_eq!(backend.keys("features").await, vec!["color".to_string()]);
        assert_eq!(backend.get("features", "color").await, Some(json!(true)));
    }

    #[tokio::test]
    async fn missing_file_is_not_an_error() {
        let backend = backend();
        let loaded = backend
            .load_file(Path::new("/nonexistent/girder-test.toml"))
            .await
            .unwrap();
        assert!(!loaded);
    }

    #[tokio::test]
    async fn invalid_toml_is_a_serialization_error() {
        let backend = backend();
        let err = backend.parse_str("not [ valid toml").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }
}
