//! TOML config backend extension.
//!
//! Loading this extension registers the `toml` handler under the
//! built-in `config` interface.

pub mod backend;

use std::sync::Arc;

use girder_extend_sdk::prelude::*;

use crate::backend::TomlConfigBackend;

/// The extension id, as named in the configuration enable list.
pub const EXTENSION_ID: &str = "toml-config";

/// Factory for the extension loader.
pub fn extension() -> Arc<dyn Extension> {
    Arc::new(TomlConfigExtension)
}

/// Registers the TOML config backend when loaded.
#[derive(Debug)]
pub struct TomlConfigExtension;

#[async_trait]
impl Extension for TomlConfigExtension {
    fn info(&self) -> ExtensionInfo {
        extension_info!(
            id: EXTENSION_ID,
            name: "TOML Config",
            version: "1.0.0",
            description: "TOML application config backend",
            author: "Girder"
        )
    }

    async fn load(&self, app: &App) -> FrameworkResult<()> {
        let interface = app
            .handlers()
            .interface(CONFIG_INTERFACE)
            .await
            .ok_or_else(|| {
                FrameworkError::undefined_handler_type(format!(
                    "handler type '{CONFIG_INTERFACE}' does not exist"
                ))
            })?;

        app.handlers()
            .register(Arc::new(TomlConfigBackend::new(interface)))
            .await
    }
}
