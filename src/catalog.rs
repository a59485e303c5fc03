use std::collections::HashSet;

use crate::error::CatalogError;
use crate::models::filter::FilterCriteria;
use crate::models::job::JobPosting;
use crate::models::search::SearchQuery;
use crate::pagination::{self, PageInfo};
use crate::sources::JobSource;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Engine settings. Fetch behavior such as simulated latency belongs to the
/// `JobSource`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub page_size: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The job catalog and its current result set.
///
/// The result set is kept as ascending indices into the full list, so it is
/// always an order-preserving subsequence of it. Every filter, search and
/// reset reevaluates the full list and moves back to page 1.
#[derive(Debug, Clone)]
pub struct Catalog {
    jobs: Vec<JobPosting>,
    results: Vec<usize>,
    current_page: usize,
    page_size: usize,
}

impl Catalog {
    pub fn new(jobs: Vec<JobPosting>, settings: &CatalogSettings) -> Result<Self, CatalogError> {
        if settings.page_size == 0 {
            return Err(CatalogError::InvalidPageSize);
        }
        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if !seen.insert(job.id) {
                tracing::warn!("Rejecting catalog: job id {} appears twice", job.id);
                return Err(CatalogError::DuplicateId(job.id));
            }
        }

        Ok(Self {
            results: (0..jobs.len()).collect(),
            jobs,
            current_page: 1,
            page_size: settings.page_size,
        })
    }

    /// Load the whole catalog from `source`. Nothing is observable until the
    /// fetch has completed and validated.
    pub async fn load(
        source: &dyn JobSource,
        settings: &CatalogSettings,
    ) -> Result<Self, CatalogError> {
        tracing::info!("Loading catalog from '{}' source...", source.name());
        let jobs = source.fetch().await.inspect_err(|e| {
            tracing::error!("Catalog source '{}' failed: {e}", source.name());
        })?;
        let catalog = Self::new(jobs, settings)?;
        tracing::info!(
            "Catalog loaded: {} jobs, {} per page",
            catalog.jobs.len(),
            catalog.page_size
        );
        Ok(catalog)
    }

    pub fn all_jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    /// Every posting in the current result set, in catalog order.
    pub fn results(&self) -> Vec<&JobPosting> {
        self.results.iter().map(|&i| &self.jobs[i]).collect()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), CatalogError> {
        if page_size == 0 {
            return Err(CatalogError::InvalidPageSize);
        }
        self.page_size = page_size;
        self.current_page = self.current_page.clamp(1, self.total_pages().max(1));
        Ok(())
    }

    pub fn total_count(&self) -> usize {
        self.results.len()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.results.len(), self.page_size)
    }

    /// Jobs on `page` (defaults to the current page). Page 0 and pages past
    /// the end are empty.
    pub fn get_page(&self, page: Option<usize>) -> Vec<&JobPosting> {
        let page = page.unwrap_or(self.current_page);
        match pagination::page_bounds(page, self.page_size, self.results.len()) {
            Some(range) => self.results[range].iter().map(|&i| &self.jobs[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Advance one page. At the last page nothing moves and nothing is returned.
    pub fn next_page(&mut self) -> Vec<&JobPosting> {
        if self.current_page >= self.total_pages() {
            return Vec::new();
        }
        self.current_page += 1;
        tracing::debug!("Advanced to page {}", self.current_page);
        self.get_page(None)
    }

    /// Go back one page. At the first page nothing moves and nothing is returned.
    pub fn previous_page(&mut self) -> Vec<&JobPosting> {
        if self.current_page <= 1 {
            return Vec::new();
        }
        self.current_page -= 1;
        tracing::debug!("Went back to page {}", self.current_page);
        self.get_page(None)
    }

    /// Jump to `page` if it exists; otherwise leave the state alone and return
    /// nothing.
    pub fn go_to_page(&mut self, page: usize) -> Vec<&JobPosting> {
        if page == 0 || page > self.total_pages() {
            tracing::debug!("Ignoring jump to page {page} of {}", self.total_pages());
            return Vec::new();
        }
        self.current_page = page;
        self.get_page(None)
    }

    pub fn apply_filters(&mut self, criteria: &FilterCriteria) -> Vec<&JobPosting> {
        self.select(|job| criteria.matches(job));
        tracing::debug!(
            "Filters matched {} of {} jobs",
            self.results.len(),
            self.jobs.len()
        );
        self.get_page(None)
    }

    /// Keyword/location search over the full catalog. Blank terms on both
    /// sides reset to every job.
    pub fn search(&mut self, keyword: &str, location: &str) -> Vec<&JobPosting> {
        let query = SearchQuery::new(keyword, location);
        if query.is_empty() {
            return self.reset();
        }
        self.select(|job| query.matches(job));
        tracing::debug!(
            "Search '{keyword}' in '{location}' matched {} jobs",
            self.results.len()
        );
        self.get_page(None)
    }

    /// Drop any filter or search and show the full catalog from page 1.
    pub fn reset(&mut self) -> Vec<&JobPosting> {
        self.results = (0..self.jobs.len()).collect();
        self.current_page = 1;
        self.get_page(None)
    }

    pub fn page_info(&self) -> PageInfo {
        let total_pages = self.total_pages();
        PageInfo {
            current_page: self.current_page,
            total_pages,
            total_count: self.results.len(),
            page_size: self.page_size,
            has_previous: self.current_page > 1,
            has_next: self.current_page < total_pages,
        }
    }

    fn select(&mut self, predicate: impl Fn(&JobPosting) -> bool) {
        self.results = self
            .jobs
            .iter()
            .enumerate()
            .filter(|(_, job)| predicate(job))
            .map(|(i, _)| i)
            .collect();
        self.current_page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SeedSource;

    fn seed(page_size: usize) -> Catalog {
        let settings = CatalogSettings { page_size };
        Catalog::new(SeedSource::jobs().unwrap(), &settings).unwrap()
    }

    fn ids(jobs: &[&JobPosting]) -> Vec<u32> {
        jobs.iter().map(|j| j.id).collect()
    }

    #[test]
    fn starts_with_every_job_on_page_one() {
        let catalog = seed(DEFAULT_PAGE_SIZE);
        assert_eq!(catalog.total_count(), 7);
        assert_eq!(catalog.total_pages(), 2);
        assert_eq!(catalog.current_page(), 1);
        assert_eq!(ids(&catalog.get_page(None)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn rejects_zero_page_size_and_duplicate_ids() {
        let settings = CatalogSettings { page_size: 0 };
        assert!(matches!(
            Catalog::new(Vec::new(), &settings),
            Err(CatalogError::InvalidPageSize)
        ));

        let mut jobs = SeedSource::jobs().unwrap();
        jobs.push(jobs[0].clone());
        assert!(matches!(
            Catalog::new(jobs, &CatalogSettings::default()),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn next_page_stops_at_the_end() {
        let mut catalog = seed(5);
        assert_eq!(ids(&catalog.next_page()), vec![6, 7]);
        assert_eq!(catalog.current_page(), 2);
        assert!(catalog.next_page().is_empty());
        assert_eq!(catalog.current_page(), 2);
    }

    #[test]
    fn previous_page_stops_at_the_start() {
        let mut catalog = seed(5);
        assert!(catalog.previous_page().is_empty());
        assert_eq!(catalog.current_page(), 1);

        catalog.next_page();
        assert_eq!(ids(&catalog.previous_page()), vec![1, 2, 3, 4, 5]);
        assert_eq!(catalog.current_page(), 1);
    }

    #[test]
    fn go_to_page_ignores_missing_pages() {
        let mut catalog = seed(3);
        assert_eq!(ids(&catalog.go_to_page(3)), vec![7]);
        assert!(catalog.go_to_page(4).is_empty());
        assert!(catalog.go_to_page(0).is_empty());
        assert_eq!(catalog.current_page(), 3);
    }

    #[test]
    fn get_page_does_not_move_current_page() {
        let catalog = seed(2);
        assert_eq!(ids(&catalog.get_page(Some(4))), vec![7]);
        assert_eq!(catalog.current_page(), 1);
    }

    #[test]
    fn filtering_resets_to_first_page() {
        let mut catalog = seed(2);
        catalog.go_to_page(3);
        let page = catalog.apply_filters(&FilterCriteria {
            category: vec!["ai-engineer".into()],
            ..Default::default()
        });
        assert_eq!(ids(&page), vec![1, 2]);
        assert_eq!(catalog.current_page(), 1);
        assert_eq!(catalog.total_count(), 3);
    }

    #[test]
    fn search_resets_to_first_page() {
        let mut catalog = seed(2);
        catalog.next_page();
        let page = catalog.search("data", "");
        assert_eq!(ids(&page), vec![3, 4]);
        assert_eq!(catalog.current_page(), 1);
        assert_eq!(catalog.total_count(), 3);
    }

    #[test]
    fn shrinking_results_then_resizing_keeps_page_in_range() {
        let mut catalog = seed(1);
        catalog.go_to_page(7);
        catalog.set_page_size(5).unwrap();
        assert_eq!(catalog.current_page(), 2);
        catalog.set_page_size(10).unwrap();
        assert_eq!(catalog.current_page(), 1);
        assert!(matches!(
            catalog.set_page_size(0),
            Err(CatalogError::InvalidPageSize)
        ));
    }

    #[test]
    fn page_info_reports_navigation() {
        let mut catalog = seed(5);
        let info = catalog.page_info();
        assert_eq!(info.total_pages, 2);
        assert!(!info.has_previous);
        assert!(info.has_next);

        catalog.next_page();
        let info = catalog.page_info();
        assert_eq!(info.current_page, 2);
        assert!(info.has_previous);
        assert!(!info.has_next);
    }

    #[test]
    fn empty_result_set_stays_on_page_one() {
        let mut catalog = seed(6);
        assert!(catalog.search("cobol", "").is_empty());
        assert_eq!(catalog.total_pages(), 0);
        assert_eq!(catalog.current_page(), 1);
        assert!(catalog.next_page().is_empty());
        assert!(catalog.previous_page().is_empty());
        assert_eq!(catalog.current_page(), 1);
    }
}
