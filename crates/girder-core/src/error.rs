//! Unified framework error types for Girder.
//!
//! All crates map their internal errors into [`FrameworkError`] for
//! consistent propagation through the ? operator. Registry-state violations
//! carry distinct [`ErrorKind`]s so callers can branch on them.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// An interface definition is structurally invalid (e.g. empty label).
    MalformedInterface,
    /// An interface label was defined more than once.
    DuplicateInterface,
    /// A handler is missing required metadata or interface members.
    MalformedHandler,
    /// A handler targets an interface that was never defined.
    UndefinedHandlerType,
    /// A different handler object already occupies the target label.
    HandlerConflict,
    /// No handler is registered under the requested label.
    UnknownHandler,
    /// A handler declares an interface other than the one it was
    /// validated against.
    InterfaceMismatch,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An I/O error occurred.
    Io,
    /// An internal framework error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInterface => write!(f, "MALFORMED_INTERFACE"),
            Self::DuplicateInterface => write!(f, "DUPLICATE_INTERFACE"),
            Self::MalformedHandler => write!(f, "MALFORMED_HANDLER"),
            Self::UndefinedHandlerType => write!(f, "UNDEFINED_HANDLER_TYPE"),
            Self::HandlerConflict => write!(f, "HANDLER_CONFLICT"),
            Self::UnknownHandler => write!(f, "UNKNOWN_HANDLER"),
            Self::InterfaceMismatch => write!(f, "INTERFACE_MISMATCH"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Io => write!(f, "IO"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified framework error used throughout Girder.
///
/// Crate-specific errors are mapped into `FrameworkError` using `From`
/// impls or explicit `.map_err()` calls. Hook functions return this type
/// directly and the dispatcher propagates it unchanged, so a failure in
/// one extension's hook is visible with its original kind at the call
/// site that fired the hook.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct FrameworkError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl FrameworkError {
    /// Create a new framework error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new framework error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a malformed-interface error.
    pub fn malformed_interface(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedInterface, message)
    }

    /// Create a duplicate-interface error.
    pub fn duplicate_interface(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateInterface, message)
    }

    /// Create a malformed-handler error.
    pub fn malformed_handler(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedHandler, message)
    }

    /// Create an undefined-handler-type error.
    pub fn undefined_handler_type(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedHandlerType, message)
    }

    /// Create a handler-conflict error.
    pub fn handler_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::HandlerConflict, message)
    }

    /// Create an unknown-handler error.
    pub fn unknown_handler(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownHandler, message)
    }

    /// Create an interface-mismatch error.
    pub fn interface_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InterfaceMismatch, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for FrameworkError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for FrameworkError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for FrameworkError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for FrameworkError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = FrameworkError::handler_conflict("handlers['output']['json'] already exists");
        assert_eq!(
            err.to_string(),
            "HANDLER_CONFLICT: handlers['output']['json'] already exists"
        );
    }

    #[test]
    fn kinds_are_matchable() {
        let err = FrameworkError::unknown_handler("no such handler");
        match err.kind {
            ErrorKind::UnknownHandler => {}
            other => panic!("unexpected kind: {other}"),
        }
    }

    #[test]
    fn clone_drops_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = FrameworkError::with_source(ErrorKind::Io, "read failed", io);
        let cloned = err.clone();
        assert!(err.source.is_some());
        assert!(cloned.source.is_none());
        assert_eq!(cloned.kind, ErrorKind::Io);
    }
}
