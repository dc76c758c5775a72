//! JSON output renderer extension.
//!
//! Loading this extension registers the `json` handler under the
//! built-in `output` interface and adds a `--json` flag to the host's
//! argument-configuration object during `post_setup`.

pub mod renderer;

use std::sync::Arc;

use girder_extend_sdk::prelude::*;

use crate::renderer::JsonOutputRenderer;

/// The extension id, as named in the configuration enable list.
pub const EXTENSION_ID: &str = "json-output";

/// Factory for the extension loader.
pub fn extension() -> Arc<dyn Extension> {
    Arc::new(JsonOutputExtension)
}

/// Registers the JSON renderer and its CLI flag when loaded.
#[derive(Debug)]
pub struct JsonOutputExtension;

#[async_trait]
impl Extension for JsonOutputExtension {
    fn info(&self) -> ExtensionInfo {
        extension_info!(
            id: EXTENSION_ID,
            name: "JSON Output",
            version: "1.0.0",
            description: "JSON output renderer",
            author: "Girder"
        )
    }

    async fn load(&self, app: &App) -> FrameworkResult<()> {
        let interface = app
            .handlers()
            .interface(OUTPUT_INTERFACE)
            .await
            .ok_or_else(|| {
                FrameworkError::undefined_handler_type(format!(
                    "handler type '{OUTPUT_INTERFACE}' does not exist"
                ))
            })?;

        app.handlers()
            .register(Arc::new(JsonOutputRenderer::new(interface)))
            .await?;

        app.hooks()
            .register(
                points::POST_SETUP,
                ClosureHook::arc("json_output_flag", 0, |ctx| {
                    ctx.add_arg(ArgSpec::flag(
                        "output_handler",
                        "--json",
                        "toggle json output handler",
                        "json",
                    ));
                    Ok(())
                }),
            )
            .await;

        Ok(())
    }
}
