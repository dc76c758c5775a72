//! Convenience result type alias for Girder.

use crate::error::FrameworkError;

/// A specialized `Result` type for Girder operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, FrameworkError>` explicitly.
pub type FrameworkResult<T> = Result<T, FrameworkError>;
