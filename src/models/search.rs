use crate::models::job::JobPosting;

/// Keyword/location search terms, stored lowercased. A blank term is stored
/// empty; any other term is kept as typed, surrounding spaces included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    keyword: String,
    location: String,
}

impl SearchQuery {
    pub fn new(keyword: &str, location: &str) -> Self {
        Self {
            keyword: normalize_term(keyword),
            location: normalize_term(location),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty() && self.location.is_empty()
    }

    pub fn matches(&self, job: &JobPosting) -> bool {
        self.matches_keyword(job) && self.matches_location(job)
    }

    fn matches_keyword(&self, job: &JobPosting) -> bool {
        if self.keyword.is_empty() {
            return true;
        }
        let needle = self.keyword.as_str();
        job.title.to_lowercase().contains(needle)
            || job.company.to_lowercase().contains(needle)
            || job.description.to_lowercase().contains(needle)
            || job.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }

    fn matches_location(&self, job: &JobPosting) -> bool {
        self.location.is_empty() || job.location.to_lowercase().contains(&self.location)
    }
}

fn normalize_term(term: &str) -> String {
    if term.trim().is_empty() {
        String::new()
    } else {
        term.to_lowercase()
    }
}
