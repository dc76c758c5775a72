//! Capability traits defined in `girder-core` and implemented by
//! extension crates.
//!
//! Each trait corresponds to one of the framework's built-in handler
//! interfaces. The registry stores handlers type-erased; these traits are
//! how the host application talks to a resolved handler.

pub mod config;
pub mod output;

pub use config::ConfigBackend;
pub use output::OutputRenderer;
