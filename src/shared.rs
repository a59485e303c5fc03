use std::sync::Arc;

use tokio::sync::Mutex;

use crate::catalog::{Catalog, CatalogSettings};
use crate::error::CatalogError;
use crate::models::filter::FilterCriteria;
use crate::models::job::JobPosting;
use crate::pagination::PageInfo;
use crate::sources::JobSource;

/// Cloneable handle for callers that may run concurrently. Every operation
/// holds the one catalog lock, so a filter, search or page move is never
/// interleaved with another. Results are returned as owned postings.
#[derive(Clone)]
pub struct SharedCatalog {
    inner: Arc<Mutex<Catalog>>,
}

fn owned(jobs: Vec<&JobPosting>) -> Vec<JobPosting> {
    jobs.into_iter().cloned().collect()
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    pub async fn load(
        source: &dyn JobSource,
        settings: &CatalogSettings,
    ) -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::load(source, settings).await?))
    }

    pub async fn get_page(&self, page: Option<usize>) -> Vec<JobPosting> {
        owned(self.inner.lock().await.get_page(page))
    }

    pub async fn next_page(&self) -> Vec<JobPosting> {
        owned(self.inner.lock().await.next_page())
    }

    pub async fn previous_page(&self) -> Vec<JobPosting> {
        owned(self.inner.lock().await.previous_page())
    }

    pub async fn go_to_page(&self, page: usize) -> Vec<JobPosting> {
        owned(self.inner.lock().await.go_to_page(page))
    }

    pub async fn apply_filters(&self, criteria: &FilterCriteria) -> Vec<JobPosting> {
        owned(self.inner.lock().await.apply_filters(criteria))
    }

    pub async fn search(&self, keyword: &str, location: &str) -> Vec<JobPosting> {
        owned(self.inner.lock().await.search(keyword, location))
    }

    pub async fn reset(&self) -> Vec<JobPosting> {
        owned(self.inner.lock().await.reset())
    }

    pub async fn set_page_size(&self, page_size: usize) -> Result<(), CatalogError> {
        self.inner.lock().await.set_page_size(page_size)
    }

    pub async fn total_count(&self) -> usize {
        self.inner.lock().await.total_count()
    }

    pub async fn total_pages(&self) -> usize {
        self.inner.lock().await.total_pages()
    }

    pub async fn page_info(&self) -> PageInfo {
        self.inner.lock().await.page_info()
    }
}
