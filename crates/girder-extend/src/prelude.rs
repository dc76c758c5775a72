//! Prelude for convenient imports.

pub use async_trait::async_trait;

pub use girder_core::config::FrameworkConfig;
pub use girder_core::error::{ErrorKind, FrameworkError};
pub use girder_core::result::FrameworkResult;
pub use girder_core::traits::{ConfigBackend, OutputRenderer};

pub use crate::app::{App, CONFIG_INTERFACE, OUTPUT_INTERFACE};
pub use crate::extension::{Extension, ExtensionInfo};
pub use crate::handler::{Handler, HandlerMeta};
pub use crate::hooks::context::{ArgSpec, HookContext};
pub use crate::hooks::points;
pub use crate::hooks::registry::{ClosureHook, HookFn, HookRegistry};
pub use crate::interface::InterfaceDef;
pub use crate::registry::HandlerRegistry;
