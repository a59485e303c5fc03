// Job sources feed the catalog its full posting list in one shot.

pub mod json;
pub mod seed;

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::models::job::JobPosting;

pub use json::JsonFileSource;
pub use seed::SeedSource;

/// Trait that every catalog data source implements.
/// A source returns the complete ordered posting list or fails as a whole.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Human-readable name used in logs.
    fn name(&self) -> &str;

    /// Fetch every posting the catalog should hold.
    async fn fetch(&self) -> Result<Vec<JobPosting>, CatalogError>;
}
