//! Job board catalog: keyword/location search, faceted filtering and
//! pagination over an in-memory list of postings.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod pagination;
pub mod render;
pub mod shared;
pub mod sources;

pub use catalog::{Catalog, CatalogSettings};
pub use error::CatalogError;
pub use models::{FilterCriteria, JobPosting, RemoteOption};
pub use shared::SharedCatalog;
