//! Data-driven reference content and loaders.
//!
//! This crate loads the reference tables the numeric core reads through its
//! oracle traits:
//! - Game configuration (TOML)
//! - Stat table with classifications (RON)
//! - Ordered nature table (RON)
//! - Type match-up lists (RON)
//! - Species rows with base stats and growth rates (RON)
//!
//! Tables are loaded once, validated against each other, and then served
//! read-only through an [`OracleManager`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub mod oracle;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, NatureLoader, SpeciesLoader, StatLoader, TypeLoader,
    validate_content,
};

#[cfg(feature = "loaders")]
pub use oracle::OracleManager;
