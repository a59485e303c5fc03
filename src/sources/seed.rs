use std::time::Duration;

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::models::job::JobPosting;
use crate::sources::JobSource;

const SEED_JOBS: &str = include_str!("../../data/seed_jobs.json");

/// Built-in demo catalog. `latency` simulates a remote fetch.
#[derive(Debug, Clone, Default)]
pub struct SeedSource {
    latency: Duration,
}

impl SeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn jobs() -> Result<Vec<JobPosting>, CatalogError> {
        Ok(serde_json::from_str(SEED_JOBS)?)
    }
}

#[async_trait]
impl JobSource for SeedSource {
    fn name(&self) -> &str {
        "seed"
    }

    async fn fetch(&self) -> Result<Vec<JobPosting>, CatalogError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Self::jobs()
    }
}
