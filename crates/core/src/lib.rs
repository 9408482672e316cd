#![warn(clippy::all, missing_docs)]

//! Data layer of the Abyss Lab site generator.
//!
//! This crate hosts the configuration, the on-disk dataset layout, the typed
//! entity records and the repositories that resolve them by id, plus the
//! dataset checker and build manifest used by the `abysslab` binary.

pub mod check;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod repository;
pub mod scaffold;
pub mod store;

pub use config::SiteConfig;
pub use error::{DataError, DataResult};
pub use manifest::BuildManifest;
pub use repository::{Dataset, Repository};
pub use store::{EntityKind, FileStore};
