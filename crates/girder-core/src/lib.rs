//! # girder-core
//!
//! Core crate for the Girder CLI application framework. Contains the
//! capability traits implemented by handler objects, configuration schemas,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Girder crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::FrameworkError;
pub use result::FrameworkResult;
