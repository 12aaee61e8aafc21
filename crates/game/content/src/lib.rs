//! Data-driven protocol content and loaders.
//!
//! This crate houses the static tables the circuits were compiled against and
//! provides loaders for RON/TOML data files:
//! - Species and zone catalog (data-driven via RON)
//! - Protocol configuration (data-driven via TOML)
//!
//! Content is read once at startup and never appears in committed state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CATALOG_VERSION, CatalogFile, CatalogLoader, ConfigLoader, ContentFactory};
