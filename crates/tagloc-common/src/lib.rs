//! # Tagloc Common
//!
//! Shared error type, error macros and logging setup for the tagloc workspace.
//!
//! Every other crate in the workspace converts its domain errors into
//! [`TaglocError`] at its outer boundary and initializes tracing through
//! [`logging`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod macros;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{Result, TaglocError};
pub use logging::{init_logging, LoggingConfig};
