//! Lifecycle hook system: named points, priority-ordered registration,
//! sequential dispatch against a shared mutable context.

pub mod context;
pub mod dispatcher;
pub mod registry;

pub use context::{ArgSpec, HookContext};
pub use dispatcher::HookDispatcher;
pub use registry::{ClosureHook, HookFn, HookRegistry};

/// Well-known lifecycle point names fired by the framework and its hosts.
///
/// These names are part of the stable contract extensions rely on.
/// Additional points may be fired by hosts; points come into existence
/// on first registration, so no central enumeration is required.
pub mod points {
    /// Fired by hosts before [`App::setup`](crate::app::App::setup).
    pub const PRE_SETUP: &str = "pre_setup";
    /// Fired once after core setup completes, before command dispatch.
    /// Hooks here typically add flags to the shared argument list.
    pub const POST_SETUP: &str = "post_setup";
    /// Fired by hosts immediately before dispatching a command.
    pub const PRE_RUN: &str = "pre_run";
    /// Fired by hosts after a command completes.
    pub const POST_RUN: &str = "post_run";
    /// Fired once when the application is closing.
    pub const PRE_CLOSE: &str = "pre_close";
}
