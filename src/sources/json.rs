use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::models::job::JobPosting;
use crate::sources::JobSource;

/// Reads a JSON array of postings (same field names as the seed data).
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl JobSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn fetch(&self) -> Result<Vec<JobPosting>, CatalogError> {
        let raw = tokio::fs::read(&self.path).await?;
        let jobs: Vec<JobPosting> = serde_json::from_slice(&raw)?;
        tracing::debug!("Read {} postings from {}", jobs.len(), self.path.display());
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("jobboard-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn reads_postings_from_file() {
        let path = temp_path("ok.json");
        tokio::fs::write(
            &path,
            r#"[{"id":9,"title":"Rust Engineer","company":"Ferris Co","location":"Remote",
                 "type":"Full-time","category":"software-dev","experienceLevel":"senior-level",
                 "salary":"$160,000 - $190,000","description":"Systems work",
                 "postedDate":"2024-04-01","tags":["Rust"]}]"#,
        )
        .await
        .unwrap();

        let jobs = JsonFileSource::new(&path).fetch().await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, 9);
        assert_eq!(jobs[0].job_type, "Full-time");
        assert_eq!(jobs[0].min_salary(), Some(160_000));
    }

    #[tokio::test]
    async fn missing_file_is_source_unavailable() {
        let err = JsonFileSource::new(temp_path("missing.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn malformed_json_is_invalid_data() {
        let path = temp_path("bad.json");
        tokio::fs::write(&path, b"{\"not\": \"a list\"}").await.unwrap();

        let err = JsonFileSource::new(&path).fetch().await.unwrap_err();
        let _ = tokio::fs::remove_file(&path).await;

        assert!(matches!(err, CatalogError::InvalidData(_)));
    }
}
