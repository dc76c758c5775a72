//! Hook dispatcher: fires lifecycle points and propagates failures.
//!
//! Hooks run sequentially in priority order, each receiving the same
//! mutable context. The first error stops dispatch and propagates
//! unchanged to the caller; the framework never swallows hook errors,
//! so a bug in one extension's hook is visible at the exact call site
//! that fired the point.

use std::sync::Arc;

use tracing::{debug, error};

use girder_core::result::FrameworkResult;

use super::context::HookContext;
use super::registry::HookRegistry;

/// Dispatches lifecycle points to their registered hook functions.
#[derive(Debug)]
pub struct HookDispatcher {
    /// Hook registry.
    registry: Arc<HookRegistry>,
}

impl HookDispatcher {
    /// Creates a new hook dispatcher.
    pub fn new(registry: Arc<HookRegistry>) -> Self {
        Self { registry }
    }

    /// Runs every hook registered for `point`, in order, passing `ctx`
    /// to each. Returns the number of hooks invoked. A point with no
    /// registrations is a legal no-op. Hook return values beyond
    /// success are discarded; mutations of `ctx` are the channel.
    pub async fn run(&self, point: &str, ctx: &mut HookContext) -> FrameworkResult<usize> {
        let hooks = self.registry.hooks_for(point).await;

        if hooks.is_empty() {
            debug!(point = %point, "no hooks registered, skipping");
            return Ok(0);
        }

        debug!(point = %point, count = hooks.len(), "running hooks");

        let mut invoked = 0;
        for hook in &hooks {
            debug!(point = %point, hook = %hook.name(), "invoking hook");
            if let Err(e) = hook.call(ctx).await {
                error!(point = %point, hook = %hook.name(), error = %e, "hook failed");
                return Err(e);
            }
            invoked += 1;
        }

        Ok(invoked)
    }

    /// Returns a reference to the hook registry.
    pub fn registry(&self) -> &Arc<HookRegistry> {
        &self.registry
    }
}
