//! Storage abstraction for MD Homecare site data.
//!
//! The site is driven entirely by static JSON fixtures: the suburb table, the
//! service-mapping table, one document per service and tool, and the blog
//! index. This crate provides a [`Storage`] trait so the content logic can read
//! those fixtures without caring where they live:
//!
//! - [`FsStorage`] reads from a data directory on disk
//! - [`MockStorage`] keeps files in memory for tests (behind the `mock` feature)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use mdh_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("public/data"));
//! let suburbs = storage.read("australian-suburbs.json")?;
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind};
