//! JSON implementation of the `output` interface.

use std::any::Any;
use std::sync::Arc;

use serde_json::Value;

use girder_core::result::FrameworkResult;
use girder_core::traits::OutputRenderer;
use girder_extend::handler::{Handler, HandlerMeta};
use girder_extend::interface::InterfaceDef;

/// Interface members this renderer exposes.
const MEMBERS: &[&str] = &["render"];

/// Renders output data as pretty-printed JSON.
#[derive(Debug)]
pub struct JsonOutputRenderer {
    /// Handler metadata.
    meta: HandlerMeta,
}

impl JsonOutputRenderer {
    /// Creates the renderer against the defined `output` interface.
    pub fn new(interface: Arc<InterfaceDef>) -> Self {
        Self {
            meta: HandlerMeta::new(interface, "json"),
        }
    }
}

impl OutputRenderer for JsonOutputRenderer {
    fn render(&self, data: &Value) -> FrameworkResult<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

impl Handler for JsonOutputRenderer {
    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn members(&self) -> &[&'static str] {
        MEMBERS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_output(&self) -> Option<&dyn OutputRenderer> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_pretty_json() {
        let interface = Arc::new(InterfaceDef::new("output", &["render"]));
        let renderer = JsonOutputRenderer::new(interface);

        let text = renderer.render(&json!({"greeting": "hello"})).unwrap();
        assert!(text.contains("\"greeting\": \"hello\""));

        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["greeting"], "hello");
    }

    #[test]
    fn exposes_the_output_capability() {
        let interface = Arc::new(InterfaceDef::new("output", &["render"]));
        let renderer = JsonOutputRenderer::new(interface);

        assert_eq!(renderer.meta().label, "json");
        assert!(renderer.as_output().is_some());
        assert!(renderer.as_config().is_none());
    }
}
