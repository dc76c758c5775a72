//! Handler trait and metadata carried by every registered implementation.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use girder_core::traits::{ConfigBackend, OutputRenderer};

use crate::interface::InterfaceDef;

/// Metadata every handler must populate.
///
/// The `interface` field references the exact [`InterfaceDef`] the handler
/// implements. Identity matters: registration compares this `Arc` against
/// the catalog's definition, so a handler built against a look-alike
/// definition with the same label is rejected rather than silently
/// accepted.
#[derive(Debug, Clone)]
pub struct HandlerMeta {
    /// The interface this handler implements.
    pub interface: Arc<InterfaceDef>,
    /// Unique label within the handler type, normalized on construction
    /// (dashes become underscores).
    pub label: String,
}

impl HandlerMeta {
    /// Create handler metadata with a normalized label.
    pub fn new(interface: Arc<InterfaceDef>, label: impl Into<String>) -> Self {
        Self {
            interface,
            label: normalize_label(&label.into()),
        }
    }
}

/// Normalize a handler label: dashes become underscores.
pub fn normalize_label(label: &str) -> String {
    label.replace('-', "_")
}

/// Trait implemented by every registrable handler object.
///
/// Handlers are registered as `Arc<dyn Handler>`; the registry keeps a
/// shared reference and never owns the handler's lifetime. The
/// `as_config` / `as_output` accessors recover the built-in capability
/// traits from a type-erased handler; extensions defining their own
/// interfaces downcast through [`Handler::as_any`] instead.
pub trait Handler: Send + Sync + fmt::Debug {
    /// The handler's metadata.
    fn meta(&self) -> &HandlerMeta;

    /// Names of the interface members this object exposes. Checked by the
    /// structural validator against the interface's required members.
    fn members(&self) -> &[&'static str];

    /// Downcasting support for extension-defined interfaces.
    fn as_any(&self) -> &dyn Any;

    /// The handler viewed as a config backend, when it implements the
    /// built-in `config` interface.
    fn as_config(&self) -> Option<&dyn ConfigBackend> {
        None
    }

    /// The handler viewed as an output renderer, when it implements the
    /// built-in `output` interface.
    fn as_output(&self) -> Option<&dyn OutputRenderer> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_normalized_on_construction() {
        let def = Arc::new(InterfaceDef::new("output", &["render"]));
        let meta = HandlerMeta::new(def, "pretty-json-v2");
        assert_eq!(meta.label, "pretty_json_v2");
    }

    #[test]
    fn normalize_leaves_clean_labels_alone() {
        assert_eq!(normalize_label("json"), "json");
        assert_eq!(normalize_label("my-handler"), "my_handler");
    }
}
