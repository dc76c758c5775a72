//! Interface definitions and handler validation.
//!
//! An interface is a named capability contract. Handlers declare which
//! interface they implement and are validated against it at registration
//! time: either by the interface's custom validator, or by the structural
//! fallback that checks every required member in one pass and reports all
//! missing names in a single error.

use std::fmt;
use std::sync::Arc;

use girder_core::error::FrameworkError;
use girder_core::result::FrameworkResult;

use crate::handler::Handler;

/// Custom validation capability an interface may carry.
///
/// Receives the interface definition and the candidate handler. An error
/// returned here propagates to the `register` caller unchanged.
pub type ValidatorFn = Arc<dyn Fn(&InterfaceDef, &dyn Handler) -> FrameworkResult<()> + Send + Sync>;

/// A named capability contract handlers register against.
///
/// Created once via [`HandlerRegistry::define`](crate::registry::HandlerRegistry::define)
/// and immutable afterwards.
pub struct InterfaceDef {
    label: String,
    required_members: Vec<String>,
    required_meta: Vec<String>,
    validator: Option<ValidatorFn>,
}

impl InterfaceDef {
    /// Create an interface definition with the default required metadata
    /// fields (`interface`, `label`) and no custom validator.
    pub fn new(label: impl Into<String>, required_members: &[&str]) -> Self {
        Self {
            label: label.into(),
            required_members: required_members.iter().map(|m| m.to_string()).collect(),
            required_meta: default_required_meta(),
            validator: None,
        }
    }

    /// Replace the required metadata field names.
    pub fn with_required_meta(mut self, fields: &[&str]) -> Self {
        self.required_meta = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Attach a custom validator, replacing the structural fallback.
    pub fn with_validator(
        mut self,
        validator: impl Fn(&InterfaceDef, &dyn Handler) -> FrameworkResult<()> + Send + Sync + 'static,
    ) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// The interface label, also the handler type name in the registry.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Member names a conforming handler must expose.
    pub fn required_members(&self) -> &[String] {
        &self.required_members
    }

    /// Metadata field names a conforming handler must satisfy.
    pub fn required_meta(&self) -> &[String] {
        &self.required_meta
    }

    /// Whether this interface carries a custom validator.
    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }
}

impl fmt::Debug for InterfaceDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceDef")
            .field("label", &self.label)
            .field("required_members", &self.required_members)
            .field("required_meta", &self.required_meta)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// The default metadata fields every handler must populate.
pub fn default_required_meta() -> Vec<String> {
    vec!["interface".to_string(), "label".to_string()]
}

/// Validate a handler against the interface it claims to implement.
///
/// The identity check runs first: the handler's declared interface must be
/// the exact defined instance, not merely one with an equal label. Then
/// the interface's custom validator runs when present; otherwise the
/// structural check in [`validate_members`].
pub fn validate(def: &Arc<InterfaceDef>, handler: &dyn Handler) -> FrameworkResult<()> {
    let meta = handler.meta();
    if !Arc::ptr_eq(def, &meta.interface) {
        return Err(FrameworkError::interface_mismatch(format!(
            "handler '{}' does not implement interface '{}'",
            meta.label,
            def.label()
        )));
    }

    match &def.validator {
        Some(validator) => validator(def, handler),
        None => validate_members(def, handler),
    }
}

/// Structural validation fallback.
///
/// Every required member must appear in `handler.members()`, and every
/// required metadata field must be satisfied by [`HandlerMeta`]: `label`
/// must be non-empty, `interface` is present by construction, and any
/// other name can never be satisfied by the typed metadata struct. All
/// missing names are collected and reported in one error so a broken
/// handler is diagnosed in a single round trip.
///
/// [`HandlerMeta`]: crate::handler::HandlerMeta
pub fn validate_members(def: &InterfaceDef, handler: &dyn Handler) -> FrameworkResult<()> {
    let mut missing: Vec<String> = Vec::new();
    let members = handler.members();

    for required in def.required_members() {
        if !members.contains(&required.as_str()) {
            missing.push(required.clone());
        }
    }

    let meta = handler.meta();
    for field in def.required_meta() {
        let present = match field.as_str() {
            "interface" => true,
            "label" => !meta.label.is_empty(),
            _ => false,
        };
        if !present {
            missing.push(format!("meta.{field}"));
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FrameworkError::malformed_handler(format!(
            "invalid or missing members in handler '{}': {}",
            meta.label,
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::HandlerMeta;
    use girder_core::error::ErrorKind;

    #[derive(Debug)]
    struct StubHandler {
        meta: HandlerMeta,
        members: &'static [&'static str],
    }

    impl Handler for StubHandler {
        fn meta(&self) -> &HandlerMeta {
            &self.meta
        }

        fn members(&self) -> &[&'static str] {
            self.members
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    fn stub(def: &Arc<InterfaceDef>, label: &str, members: &'static [&'static str]) -> StubHandler {
        StubHandler {
            meta: HandlerMeta::new(def.clone(), label),
            members,
        }
    }

    #[test]
    fn structural_check_passes_conforming_handler() {
        let def = Arc::new(InterfaceDef::new("config", &["get", "set"]));
        let handler = stub(&def, "toml", &["get", "set", "merge"]);
        assert!(validate(&def, &handler).is_ok());
    }

    #[test]
    fn all_missing_members_reported_in_one_error() {
        let def = Arc::new(InterfaceDef::new("output", &["setup", "render"]));
        let handler = stub(&def, "broken", &[]);

        let err = validate(&def, &handler).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedHandler);
        assert!(err.message.contains("setup"));
        assert!(err.message.contains("render"));
    }

    #[test]
    fn empty_label_is_reported_as_missing_meta() {
        let def = Arc::new(InterfaceDef::new("output", &[]));
        let handler = stub(&def, "", &[]);

        let err = validate(&def, &handler).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedHandler);
        assert!(err.message.contains("meta.label"));
    }

    #[test]
    fn mismatched_interface_identity_fails_before_member_scan() {
        let defined = Arc::new(InterfaceDef::new("output", &["render"]));
        let lookalike = Arc::new(InterfaceDef::new("output", &["render"]));
        // Handler is missing members too, but identity is checked first.
        let handler = stub(&lookalike, "json", &[]);

        let err = validate(&defined, &handler).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InterfaceMismatch);
    }

    #[test]
    fn custom_validator_error_propagates_unchanged() {
        let def = Arc::new(
            InterfaceDef::new("output", &["render"]).with_validator(|_, _| {
                Err(FrameworkError::configuration("renderer rejected by policy"))
            }),
        );
        let handler = stub(&def, "json", &["render"]);

        let err = validate(&def, &handler).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert_eq!(err.message, "renderer rejected by policy");
    }

    #[test]
    fn unknown_required_meta_field_is_never_satisfied() {
        let def = Arc::new(
            InterfaceDef::new("config", &[]).with_required_meta(&["label", "flavor"]),
        );
        let handler = stub(&def, "toml", &[]);

        let err = validate(&def, &handler).unwrap_err();
        assert!(err.message.contains("meta.flavor"));
    }
}
