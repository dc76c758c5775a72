//! Extension loader: maps configured extension ids to factories.
//!
//! Extensions are compiled in and trusted; the loader's job is turning
//! the ordered id list from configuration into live extension instances,
//! deterministically. There is no dynamic library or network discovery.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use girder_core::error::FrameworkError;
use girder_core::result::FrameworkResult;

use crate::extension::Extension;

/// Factory producing an extension instance.
pub type ExtensionFactory = fn() -> Arc<dyn Extension>;

/// Resolves extension ids to instances.
#[derive(Default)]
pub struct ExtensionLoader {
    /// Extension id → factory.
    factories: HashMap<String, ExtensionFactory>,
}

impl ExtensionLoader {
    /// Creates an empty loader.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a factory under an extension id. A repeated id replaces
    /// the previous factory.
    pub fn register_factory(&mut self, id: &str, factory: ExtensionFactory) {
        debug!(extension = %id, "extension factory registered");
        self.factories.insert(id.to_string(), factory);
    }

    /// Whether a factory exists for `id`.
    pub fn knows(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Instantiates the extension registered under `id`.
    pub fn instantiate(&self, id: &str) -> FrameworkResult<Arc<dyn Extension>> {
        let factory = self.factories.get(id).ok_or_else(|| {
            FrameworkError::configuration(format!("unknown extension '{id}' in enable list"))
        })?;
        Ok(factory())
    }
}

impl std::fmt::Debug for ExtensionLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionLoader")
            .field("known", &self.factories.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::extension::ExtensionInfo;
    use async_trait::async_trait;
    use girder_core::error::ErrorKind;

    #[derive(Debug)]
    struct NullExtension;

    #[async_trait]
    impl Extension for NullExtension {
        fn info(&self) -> ExtensionInfo {
            ExtensionInfo {
                id: "null".to_string(),
                name: "Null".to_string(),
                version: "0.1.0".to_string(),
                description: "registers nothing".to_string(),
                author: "tests".to_string(),
            }
        }

        async fn load(&self, _app: &App) -> girder_core::FrameworkResult<()> {
            Ok(())
        }
    }

    #[test]
    fn instantiates_known_extensions() {
        let mut loader = ExtensionLoader::new();
        loader.register_factory("null", || Arc::new(NullExtension));

        assert!(loader.knows("null"));
        let ext = loader.instantiate("null").unwrap();
        assert_eq!(ext.info().id, "null");
    }

    #[test]
    fn unknown_id_is_a_configuration_error() {
        let loader = ExtensionLoader::new();
        let err = loader.instantiate("ghost").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
