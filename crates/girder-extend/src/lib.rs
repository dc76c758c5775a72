//! # girder-extend
//!
//! Extensibility core for the Girder CLI framework. Provides:
//!
//! - Interface catalog: named capability contracts handlers register against
//! - Handler registry with uniqueness, idempotence, and conflict detection
//! - Structural and custom handler validation
//! - Hook registry with priority-ordered registration and a dispatcher that
//!   fires hooks sequentially against a shared mutable context
//! - Extension trait and loader driving load-time registration
//! - The [`App`] bootstrap type that wires all of the above for a host

pub mod app;
pub mod extension;
pub mod handler;
pub mod hooks;
pub mod interface;
pub mod loader;
pub mod prelude;
pub mod registry;

pub use app::{App, CONFIG_INTERFACE, OUTPUT_INTERFACE};
pub use extension::{Extension, ExtensionInfo};
pub use handler::{Handler, HandlerMeta};
pub use hooks::context::{ArgSpec, HookContext};
pub use hooks::dispatcher::HookDispatcher;
pub use hooks::registry::{ClosureHook, HookFn, HookRegistry};
pub use interface::{InterfaceDef, ValidatorFn};
pub use loader::ExtensionLoader;
pub use registry::HandlerRegistry;
