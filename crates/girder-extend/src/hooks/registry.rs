//! Hook registry: extensions register hook functions by point name with
//! priority ordering.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use girder_core::result::FrameworkResult;

use super::context::HookContext;

/// Trait for hook function implementations.
#[async_trait]
pub trait HookFn: Send + Sync + fmt::Debug {
    /// A name identifying this hook in logs and diagnostics.
    fn name(&self) -> &str;

    /// Execution priority. Lower runs first; ties run in registration
    /// order.
    fn priority(&self) -> i32 {
        0
    }

    /// Invoked when the point fires. The context is shared across all
    /// hooks at the point; mutate it to communicate. Any returned error
    /// propagates unchanged to whoever fired the point.
    async fn call(&self, ctx: &mut HookContext) -> FrameworkResult<()>;
}

/// Entry in the hook registry.
#[derive(Debug)]
struct HookSlot {
    /// Priority (lower = earlier execution).
    priority: i32,
    /// The hook function.
    hook: Arc<dyn HookFn>,
}

/// Registry of hook functions organized by point name.
///
/// A point comes into existence on first registration; there is no
/// separate definition step.
#[derive(Debug)]
pub struct HookRegistry {
    /// Point name → sorted list of hooks.
    points: RwLock<HashMap<String, Vec<HookSlot>>>,
}

impl HookRegistry {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self {
            points: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a hook function for a lifecycle point.
    pub async fn register(&self, point: &str, hook: Arc<dyn HookFn>) {
        let priority = hook.priority();

        let mut points = self.points.write().await;
        let slots = points.entry(point.to_string()).or_default();

        debug!(
            point = %point,
            hook = %hook.name(),
            priority = priority,
            "hook registered"
        );

        slots.push(HookSlot { priority, hook });
        // Stable sort: equal priorities keep registration order.
        slots.sort_by_key(|s| s.priority);
    }

    /// Returns all hooks for a point, in execution order.
    pub async fn hooks_for(&self, point: &str) -> Vec<Arc<dyn HookFn>> {
        let points = self.points.read().await;
        points
            .get(point)
            .map(|slots| slots.iter().map(|s| s.hook.clone()).collect())
            .unwrap_or_default()
    }

    /// Returns whether any hooks are registered for a point.
    pub async fn has_hooks(&self, point: &str) -> bool {
        let points = self.points.read().await;
        points.get(point).is_some_and(|slots| !slots.is_empty())
    }

    /// Returns the number of hooks registered for a point.
    pub async fn hook_count(&self, point: &str) -> usize {
        let points = self.points.read().await;
        points.get(point).map(|slots| slots.len()).unwrap_or(0)
    }

    /// Returns all point names with at least one registration.
    pub async fn points(&self) -> Vec<String> {
        let points = self.points.read().await;
        points.keys().cloned().collect()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A hook function backed by a synchronous closure.
///
/// Most hooks only mutate the context (add an argument, set a value),
/// which needs no await; this adapter spares them a trait impl.
/// Implement [`HookFn`] directly when the hook has to do async work.
pub struct ClosureHook {
    /// Hook name for logs.
    name: String,
    /// Priority.
    priority: i32,
    /// The wrapped closure.
    func: Box<dyn Fn(&mut HookContext) -> FrameworkResult<()> + Send + Sync>,
}

impl ClosureHook {
    /// Creates a closure-backed hook.
    pub fn new(
        name: impl Into<String>,
        priority: i32,
        func: impl Fn(&mut HookContext) -> FrameworkResult<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            func: Box::new(func),
        }
    }

    /// Creates the hook already wrapped for registration.
    pub fn arc(
        name: impl Into<String>,
        priority: i32,
        func: impl Fn(&mut HookContext) -> FrameworkResult<()> + Send + Sync + 'static,
    ) -> Arc<dyn HookFn> {
        Arc::new(Self::new(name, priority, func))
    }
}

impl fmt::Debug for ClosureHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureHook")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("func", &"<closure>")
            .finish()
    }
}

#[async_trait]
impl HookFn for ClosureHook {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    async fn call(&self, ctx: &mut HookContext) -> FrameworkResult<()> {
        (self.func)(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn points_are_created_on_first_registration() {
        let registry = HookRegistry::new();
        assert!(!registry.has_hooks("post_setup").await);

        registry
            .register("post_setup", ClosureHook::arc("noop", 0, |_| Ok(())))
            .await;

        assert!(registry.has_hooks("post_setup").await);
        assert_eq!(registry.hook_count("post_setup").await, 1);
        assert_eq!(registry.points().await, vec!["post_setup".to_string()]);
    }

    #[tokio::test]
    async fn hooks_order_by_priority_then_registration() {
        let registry = HookRegistry::new();
        registry
            .register("post_setup", ClosureHook::arc("late", 10, |_| Ok(())))
            .await;
        registry
            .register("post_setup", ClosureHook::arc("first", -5, |_| Ok(())))
            .await;
        registry
            .register("post_setup", ClosureHook::arc("tie_a", 0, |_| Ok(())))
            .await;
        registry
            .register("post_setup", ClosureHook::arc("tie_b", 0, |_| Ok(())))
            .await;

        let order: Vec<String> = registry
            .hooks_for("post_setup")
            .await
            .iter()
            .map(|h| h.name().to_string())
            .collect();
        assert_eq!(order, vec!["first", "tie_a", "tie_b", "late"]);
    }
}
