//! Page content for the MD Homecare site.
//!
//! This crate provides:
//! - [`ServiceCatalog`]: service documents localized per suburb
//! - [`Blog`]: the blog index and posts
//! - [`ToolLibrary`]: the tool index and tool documents
//! - [`page_title`]: document titles with the site name suffix
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use mdh_locale::LookupTables;
//! use mdh_site::ServiceCatalog;
//! use mdh_storage::{FsStorage, Storage};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let storage: Arc<dyn Storage> = Arc::new(FsStorage::new(PathBuf::from("public/data")));
//! let tables = Arc::new(LookupTables::new(Arc::clone(&storage)));
//! let catalog = ServiceCatalog::new(storage, tables);
//!
//! let page = catalog.load("home-care-bondi")?;
//! assert_eq!(page.resolved.base_slug, "home-care");
//! # Ok(())
//! # }
//! ```

mod blog;
mod error;
mod service;
mod title;
mod tools;

pub use blog::{Blog, BlogPost, POSTS_PATH, blog_slug};
pub use error::SiteError;
pub use service::{Service, ServiceCatalog, ServicePage};
pub use title::{SITE_NAME, page_title};
pub use tools::{TOOLS_INDEX_PATH, ToolLibrary};
