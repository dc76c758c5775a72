//! Handler registry, storing defined interfaces and their registered
//! implementations.
//!
//! The registry is the only mutation path for handler state. It is
//! guarded by a `tokio::sync::RwLock`: registration is expected during
//! single-threaded startup, but deferred loading stays safe.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use girder_core::error::FrameworkError;
use girder_core::result::FrameworkResult;

use crate::handler::{normalize_label, Handler};
use crate::interface::{self, InterfaceDef};

/// One registered handler under its normalized label.
#[derive(Debug)]
struct HandlerEntry {
    /// Normalized label (dashes already replaced).
    label: String,
    /// The handler object. Shared, not owned.
    handler: Arc<dyn Handler>,
}

/// The bucket for one defined handler type.
///
/// The interface definition lives in its own field rather than as a
/// reserved entry, so listing handlers can never leak it.
#[derive(Debug)]
struct HandlerSlot {
    /// The defining interface.
    interface: Arc<InterfaceDef>,
    /// Registered handlers in insertion order.
    entries: Vec<HandlerEntry>,
}

/// Registry of all defined handler types and their registered handlers.
#[derive(Debug)]
pub struct HandlerRegistry {
    /// Handler type label → bucket.
    slots: RwLock<HashMap<String, HandlerSlot>>,
}

impl HandlerRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Defines a handler type from an interface definition and creates
    /// its empty bucket.
    ///
    /// Returns the shared definition; handlers must reference this exact
    /// instance in their metadata.
    pub async fn define(&self, def: InterfaceDef) -> FrameworkResult<Arc<InterfaceDef>> {
        if def.label().is_empty() {
            return Err(FrameworkError::malformed_interface(
                "interface definition is missing a label",
            ));
        }

        let mut slots = self.slots.write().await;
        if slots.contains_key(def.label()) {
            return Err(FrameworkError::duplicate_interface(format!(
                "handler type '{}' already defined",
                def.label()
            )));
        }

        debug!(handler_type = %def.label(), "defining handler type");

        let def = Arc::new(def);
        slots.insert(
            def.label().to_string(),
            HandlerSlot {
                interface: def.clone(),
                entries: Vec::new(),
            },
        );

        Ok(def)
    }

    /// Tests whether a handler type is defined.
    pub async fn is_defined(&self, handler_type: &str) -> bool {
        let slots = self.slots.read().await;
        slots.contains_key(handler_type)
    }

    /// Returns the interface definition for a handler type.
    ///
    /// Extensions use this to reference the exact defined interface when
    /// building their handlers' metadata.
    pub async fn interface(&self, handler_type: &str) -> Option<Arc<InterfaceDef>> {
        let slots = self.slots.read().await;
        slots.get(handler_type).map(|slot| slot.interface.clone())
    }

    /// Registers a handler object into its declared handler type.
    ///
    /// Re-registering the identical object under the same label is a
    /// no-op; a different object under an occupied label is a conflict.
    /// Validation runs before any mutation, so a failed registration
    /// leaves the registry unchanged.
    pub async fn register(&self, handler: Arc<dyn Handler>) -> FrameworkResult<()> {
        let label = normalize_label(&handler.meta().label);
        if label.is_empty() {
            return Err(FrameworkError::malformed_handler(format!(
                "invalid handler {handler:?}, missing 'meta.label'"
            )));
        }

        let handler_type = handler.meta().interface.label().to_string();
        debug!(handler_type = %handler_type, label = %label, "registering handler");

        let mut slots = self.slots.write().await;
        let slot = slots.get_mut(&handler_type).ok_or_else(|| {
            FrameworkError::undefined_handler_type(format!(
                "handler type '{handler_type}' does not exist"
            ))
        })?;

        interface::validate(&slot.interface, handler.as_ref())?;

        if let Some(existing) = slot.entries.iter().find(|e| e.label == label) {
            if Arc::ptr_eq(&existing.handler, &handler) {
                debug!(
                    handler_type = %handler_type,
                    label = %label,
                    "handler already registered, skipping"
                );
                return Ok(());
            }
            return Err(FrameworkError::handler_conflict(format!(
                "handlers['{handler_type}']['{label}'] already exists"
            )));
        }

        slot.entries.push(HandlerEntry {
            label: label.clone(),
            handler,
        });

        info!(handler_type = %handler_type, label = %label, "handler registered");
        Ok(())
    }

    /// Gets a handler object by type and label.
    pub async fn get(&self, handler_type: &str, label: &str) -> FrameworkResult<Arc<dyn Handler>> {
        let slots = self.slots.read().await;
        let slot = slots.get(handler_type).ok_or_else(|| {
            FrameworkError::undefined_handler_type(format!(
                "handler type '{handler_type}' does not exist"
            ))
        })?;

        slot.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.handler.clone())
            .ok_or_else(|| {
                FrameworkError::unknown_handler(format!(
                    "handlers['{handler_type}']['{label}'] does not exist"
                ))
            })
    }

    /// Gets a handler object by type and label, returning `fallback` when
    /// the label is absent. An undefined handler type is still an error.
    pub async fn get_or(
        &self,
        handler_type: &str,
        label: &str,
        fallback: Arc<dyn Handler>,
    ) -> FrameworkResult<Arc<dyn Handler>> {
        let slots = self.slots.read().await;
        let slot = slots.get(handler_type).ok_or_else(|| {
            FrameworkError::undefined_handler_type(format!(
                "handler type '{handler_type}' does not exist"
            ))
        })?;

        Ok(slot
            .entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.handler.clone())
            .unwrap_or(fallback))
    }

    /// Returns all handlers registered for a type, in registration order.
    pub async fn list(&self, handler_type: &str) -> FrameworkResult<Vec<Arc<dyn Handler>>> {
        let slots = self.slots.read().await;
        let slot = slots.get(handler_type).ok_or_else(|| {
            FrameworkError::undefined_handler_type(format!(
                "handler type '{handler_type}' does not exist"
            ))
        })?;

        Ok(slot.entries.iter().map(|e| e.handler.clone()).collect())
    }

    /// Returns the registered labels for a type, in registration order.
    pub async fn labels(&self, handler_type: &str) -> FrameworkResult<Vec<String>> {
        let slots = self.slots.read().await;
        let slot = slots.get(handler_type).ok_or_else(|| {
            FrameworkError::undefined_handler_type(format!(
                "handler type '{handler_type}' does not exist"
            ))
        })?;

        Ok(slot.entries.iter().map(|e| e.label.clone()).collect())
    }

    /// Checks whether a handler is registered: true only when both the
    /// type and the label exist.
    pub async fn enabled(&self, handler_type: &str, label: &str) -> bool {
        let slots = self.slots.read().await;
        slots
            .get(handler_type)
            .map(|slot| slot.entries.iter().any(|e| e.label == label))
            .unwrap_or(false)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
