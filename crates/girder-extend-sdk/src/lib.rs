//! # girder-extend-sdk
//!
//! SDK for developing Girder extensions.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use girder_extend_sdk::prelude::*;
//!
//! #[derive(Debug)]
//! struct MyExtension;
//!
//! #[async_trait]
//! impl Extension for MyExtension {
//!     fn info(&self) -> ExtensionInfo {
//!         extension_info!(
//!             id: "my-extension",
//!             name: "My Extension",
//!             version: "1.0.0",
//!             description: "Registers a handler",
//!             author: "Developer"
//!         )
//!     }
//!
//!     async fn load(&self, app: &App) -> FrameworkResult<()> {
//!         app.hooks()
//!             .register(
//!                 points::POST_SETUP,
//!                 ClosureHook::arc("my_flag", 0, |ctx| {
//!                     ctx.add_arg(ArgSpec::flag(
//!                         "output_handler",
//!                         "--mine",
//!                         "toggle my output handler",
//!                         "mine",
//!                     ));
//!                     Ok(())
//!                 }),
//!             )
//!             .await;
//!         Ok(())
//!     }
//! }
//! ```

pub mod macros;

/// Prelude for convenient imports.
pub mod prelude {
    pub use async_trait::async_trait;

    pub use girder_core::error::{ErrorKind, FrameworkError};
    pub use girder_core::result::FrameworkResult;
    pub use girder_core::traits::{ConfigBackend, OutputRenderer};

    pub use girder_extend::app::{App, CONFIG_INTERFACE, OUTPUT_INTERFACE};
    pub use girder_extend::extension::{Extension, ExtensionInfo};
    pub use girder_extend::handler::{Handler, HandlerMeta};
    pub use girder_extend::hooks::context::{ArgSpec, HookContext};
    pub use girder_extend::hooks::points;
    pub use girder_extend::hooks::registry::{ClosureHook, HookFn};
    pub use girder_extend::interface::InterfaceDef;

    pub use crate::extension_info;
    pub use crate::hook_ctx;
}
