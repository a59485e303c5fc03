#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Job source unavailable: {0}")]
    SourceUnavailable(#[from] std::io::Error),

    #[error("Invalid job data: {0}")]
    InvalidData(#[from] serde_json::Error),

    #[error("Duplicate job id: {0}")]
    DuplicateId(u32),

    #[error("Page size must be at least 1")]
    InvalidPageSize,

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}
