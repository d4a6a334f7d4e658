//! pathrex - compile path templates into anchored regular expressions
//!
//! This library turns Express-style path templates (`/user/:id?`, `/files/*`),
//! already compiled patterns, or lists of either into a single
//! [`PathPattern`] plus an ordered [`KeyList`] describing every capturing
//! group of that pattern.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod compiler;
pub mod config;
pub mod error;
pub mod key;
pub mod output;
pub mod pattern;
pub mod scanner;
mod template;

pub use compiler::{PathSpec, compile, compile_template};
pub use config::{ConfigError, Options};
pub use error::{Error, Result};
pub use key::{Key, KeyList, KeyName};
pub use pattern::PathPattern;
