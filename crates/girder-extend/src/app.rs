//! Application bootstrap: wires the handler registry, hook system, and
//! extension loader into one owned instance.
//!
//! There is no ambient global registry. Hosts construct an [`App`], hand
//! it to extensions during setup, and query it afterwards; tests build
//! fresh isolated instances the same way.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use girder_core::config::FrameworkConfig;
use girder_core::error::FrameworkError;
use girder_core::result::FrameworkResult;

use crate::extension::ExtensionInfo;
use crate::handler::Handler;
use crate::hooks::context::{ArgSpec, HookContext};
use crate::hooks::dispatcher::HookDispatcher;
use crate::hooks::points;
use crate::hooks::registry::HookRegistry;
use crate::interface::{self, InterfaceDef};
use crate::loader::{ExtensionFactory, ExtensionLoader};
use crate::registry::HandlerRegistry;

/// Label of the built-in config handler interface.
pub const CONFIG_INTERFACE: &str = "config";

/// Label of the built-in output handler interface.
pub const OUTPUT_INTERFACE: &str = "output";

/// Mutable bootstrap state, populated by [`App::setup`].
#[derive(Debug, Default)]
struct AppState {
    set_up: bool,
    args: Vec<ArgSpec>,
    loaded: Vec<ExtensionInfo>,
}

/// The running application from the framework's point of view.
///
/// Owns the process-wide registries. Registration happens while
/// extensions load during [`setup`](App::setup); afterwards the tables
/// are effectively read-only and queried through the blessed lookup
/// paths.
#[derive(Debug)]
pub struct App {
    /// Framework configuration.
    config: FrameworkConfig,
    /// Handler registry (interface catalog included).
    handlers: Arc<HandlerRegistry>,
    /// Hook registry.
    hooks: Arc<HookRegistry>,
    /// Hook dispatcher.
    dispatcher: HookDispatcher,
    /// Extension loader.
    loader: RwLock<ExtensionLoader>,
    /// Bootstrap state.
    state: RwLock<AppState>,
}

impl App {
    /// Creates an application from configuration. Nothing is defined or
    /// loaded until [`setup`](App::setup).
    pub fn new(config: FrameworkConfig) -> Self {
        let hooks = Arc::new(HookRegistry::new());
        let dispatcher = HookDispatcher::new(hooks.clone());

        Self {
            config,
            handlers: Arc::new(HandlerRegistry::new()),
            hooks,
            dispatcher,
            loader: RwLock::new(ExtensionLoader::new()),
            state: RwLock::new(AppState::default()),
        }
    }

    /// The framework configuration.
    pub fn config(&self) -> &FrameworkConfig {
        &self.config
    }

    /// The handler registry.
    pub fn handlers(&self) -> &Arc<HandlerRegistry> {
        &self.handlers
    }

    /// The hook registry.
    pub fn hooks(&self) -> &Arc<HookRegistry> {
        &self.hooks
    }

    /// Registers an extension factory so the id can appear in the
    /// configuration's enable list.
    pub async fn register_extension(&self, id: &str, factory: ExtensionFactory) {
        self.loader.write().await.register_factory(id, factory);
    }

    /// Runs the bootstrap sequence.
    ///
    /// Defines the built-in interfaces, loads every configured extension
    /// in configuration order, then fires `post_setup` with the shared
    /// argument-configuration object. Any registration or hook error
    /// aborts setup; the host is expected to abort startup rather than
    /// continue with a partially populated registry.
    pub async fn setup(&self) -> FrameworkResult<()> {
        if self.state.read().await.set_up {
            return Err(FrameworkError::internal("application already set up"));
        }

        self.define_core_interfaces().await?;

        let enabled = self.config.extensions.enable.clone();
        let mut loaded = Vec::with_capacity(enabled.len());
        for id in &enabled {
            let ext = self.loader.read().await.instantiate(id)?;
            let ext_info = ext.info();
            debug!(extension = %id, version = %ext_info.version, "loading extension");
            ext.load(self).await?;
            loaded.push(ext_info);
        }

        let mut ctx = HookContext::new(points::POST_SETUP);
        ctx.add_arg(ArgSpec::value(
            "output_handler",
            "--output",
            "select the output handler by label",
        ));
        self.dispatcher.run(points::POST_SETUP, &mut ctx).await?;

        let mut state = self.state.write().await;
        state.set_up = true;
        state.args = ctx.args;
        state.loaded = loaded;

        info!(
            app = %self.config.core.label,
            extensions = state.loaded.len(),
            args = state.args.len(),
            "application setup complete"
        );
        Ok(())
    }

    /// Defines the framework's built-in handler interfaces.
    async fn define_core_interfaces(&self) -> FrameworkResult<()> {
        self.handlers
            .define(InterfaceDef::new(
                CONFIG_INTERFACE,
                &["load_file", "sections", "keys", "get", "set", "merge"],
            ))
            .await?;

        // Output handlers get a custom validator: beyond the structural
        // member check, the object must actually expose a renderer.
        self.handlers
            .define(
                InterfaceDef::new(OUTPUT_INTERFACE, &["render"]).with_validator(
                    |def, handler| {
                        interface::validate_members(def, handler)?;
                        if handler.as_output().is_none() {
                            return Err(FrameworkError::malformed_handler(format!(
                                "handler '{}' does not expose an output renderer",
                                handler.meta().label
                            )));
                        }
                        Ok(())
                    },
                ),
            )
            .await?;

        Ok(())
    }

    /// Fires a lifecycle point. Hosts use this for their own points
    /// (`pre_run`, `post_run`, ...) beyond the ones the framework fires.
    pub async fn run_hooks(&self, point: &str, ctx: &mut HookContext) -> FrameworkResult<usize> {
        self.dispatcher.run(point, ctx).await
    }

    /// Resolves the active config handler named by configuration.
    pub async fn active_config(&self) -> FrameworkResult<Arc<dyn Handler>> {
        self.handlers
            .get(CONFIG_INTERFACE, &self.config.handlers.config)
            .await
    }

    /// Resolves the active output handler named by configuration.
    pub async fn active_output(&self) -> FrameworkResult<Arc<dyn Handler>> {
        self.handlers
            .get(OUTPUT_INTERFACE, &self.config.handlers.output)
            .await
    }

    /// Whether setup has completed.
    pub async fn is_set_up(&self) -> bool {
        self.state.read().await.set_up
    }

    /// The argument specs accumulated during `post_setup`.
    pub async fn args(&self) -> Vec<ArgSpec> {
        self.state.read().await.args.clone()
    }

    /// Metadata of every loaded extension, in load order.
    pub async fn extensions(&self) -> Vec<ExtensionInfo> {
        self.state.read().await.loaded.clone()
    }

    /// Fires `pre_close`. Nothing is unregistered; registry state lives
    /// for the process lifetime.
    pub async fn close(&self) -> FrameworkResult<()> {
        let mut ctx = HookContext::new(points::PRE_CLOSE);
        self.run_hooks(points::PRE_CLOSE, &mut ctx).await?;
        info!(app = %self.config.core.label, "application closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::Extension;
    use crate::hooks::registry::ClosureHook;
    use async_trait::async_trait;
    use girder_core::error::ErrorKind;

    #[derive(Debug)]
    struct FlagExtension;

    #[async_trait]
    impl Extension for FlagExtension {
        fn info(&self) -> ExtensionInfo {
            ExtensionInfo {
                id: "flag".to_string(),
                name: "Flag".to_string(),
                version: "0.1.0".to_string(),
                description: "adds a parser flag during post_setup".to_string(),
                author: "tests".to_string(),
            }
        }

        async fn load(&self, app: &App) -> FrameworkResult<()> {
            app.hooks()
                .register(
                    points::POST_SETUP,
                    ClosureHook::arc("flag_arg", 0, |ctx| {
                        ctx.add_arg(ArgSpec::flag(
                            "output_handler",
                            "--flag",
                            "toggle the flag output handler",
                            "flag",
                        ));
                        Ok(())
                    }),
                )
                .await;
            Ok(())
        }
    }

    #[derive(Debug)]
    struct BrokenExtension;

    #[async_trait]
    impl Extension for BrokenExtension {
        fn info(&self) -> ExtensionInfo {
            ExtensionInfo {
                id: "broken".to_string(),
                name: "Broken".to_string(),
                version: "0.1.0".to_string(),
                description: "fails to load".to_string(),
                author: "tests".to_string(),
            }
        }

        async fn load(&self, _app: &App) -> FrameworkResult<()> {
            Err(FrameworkError::configuration("missing required setting"))
        }
    }

    fn config_enabling(ids: &[&str]) -> FrameworkConfig {
        let mut config = FrameworkConfig::default();
        config.extensions.enable = ids.iter().map(|s| s.to_string()).collect();
        config
    }

    #[tokio::test]
    async fn setup_defines_builtins_and_fires_post_setup() {
        let app = App::new(config_enabling(&["flag"]));
        app.register_extension("flag", || Arc::new(FlagExtension))
            .await;

        app.setup().await.unwrap();

        assert!(app.is_set_up().await);
        assert!(app.handlers().is_defined(CONFIG_INTERFACE).await);
        assert!(app.handlers().is_defined(OUTPUT_INTERFACE).await);

        // Core contributed --output; the extension hook contributed --flag.
        let args = app.args().await;
        assert!(args.iter().any(|a| a.long == "--output"));
        assert!(args.iter().any(|a| a.long == "--flag"));

        let loaded = app.extensions().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "flag");
    }

    #[tokio::test]
    async fn setup_twice_is_an_error() {
        let app = App::new(FrameworkConfig::default());
        app.setup().await.unwrap();

        let err = app.setup().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
    }

    #[tokio::test]
    async fn broken_extension_aborts_setup() {
        let app = App::new(config_enabling(&["broken"]));
        app.register_extension("broken", || Arc::new(BrokenExtension))
            .await;

        let err = app.setup().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(!app.is_set_up().await);
    }

    #[tokio::test]
    async fn unconfigured_extension_id_aborts_setup() {
        let app = App::new(config_enabling(&["ghost"]));
        let err = app.setup().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[tokio::test]
    async fn close_runs_pre_close_hooks() {
        let app = App::new(FrameworkConfig::default());
        app.hooks()
            .register(
                points::PRE_CLOSE,
                ClosureHook::arc("observer", 0, |ctx| {
                    ctx.set("closed", serde_json::json!(true));
                    Ok(())
                }),
            )
            .await;

        app.setup().await.unwrap();
        app.close().await.unwrap();
    }
}
