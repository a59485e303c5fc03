pub mod filter;
pub mod job;
pub mod search;

pub use filter::{FilterCriteria, RemoteOption};
pub use job::JobPosting;
pub use search::SearchQuery;
