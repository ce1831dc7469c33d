//! # Tagloc Config
//!
//! YAML configuration for tagloc: the source locale, the catalog format,
//! where per-locale output goes and which translation catalogs to load.
//!
//! [`ConfigLoader`] reads and validates the file, applying `TAGLOC_*`
//! environment overrides. [`CatalogLoader`] turns the result into
//! translation stores and localizers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalogs;
pub mod loader;
pub mod settings;
pub mod validation;

pub use catalogs::*;
pub use loader::*;
pub use settings::*;
pub use validation::*;
