use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemoteOption {
    Remote,
    Hybrid,
    OnSite,
}

impl RemoteOption {
    /// Token looked up in a posting's location.
    pub fn token(self) -> &'static str {
        match self {
            RemoteOption::Remote => "remote",
            RemoteOption::Hybrid => "hybrid",
            RemoteOption::OnSite => "on-site",
        }
    }
}

impl std::str::FromStr for RemoteOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(RemoteOption::Remote),
            "hybrid" => Ok(RemoteOption::Hybrid),
            "on-site" | "onsite" => Ok(RemoteOption::OnSite),
            other => Err(format!("unknown remote option '{other}'")),
        }
    }
}

/// Facet selections. An empty field imposes no constraint; present fields are
/// AND-ed together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub job_type: Vec<String>,
    pub experience_level: Vec<String>,
    pub category: Vec<String>,
    pub remote: Vec<RemoteOption>,
    pub min_salary: Option<u64>,
    pub skills: Vec<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.job_type.is_empty()
            && self.experience_level.is_empty()
            && self.category.is_empty()
            && self.remote.is_empty()
            && self.min_salary.unwrap_or(0) == 0
            && self.skills.is_empty()
    }

    pub fn matches(&self, job: &JobPosting) -> bool {
        self.matches_job_type(job)
            && self.matches_experience(job)
            && self.matches_category(job)
            && self.matches_remote(job)
            && self.matches_salary(job)
            && self.matches_skills(job)
    }

    fn matches_job_type(&self, job: &JobPosting) -> bool {
        if self.job_type.is_empty() {
            return true;
        }
        let posting = normalize_job_type(&job.job_type);
        self.job_type
            .iter()
            .any(|key| normalize_job_type(key) == posting)
    }

    fn matches_experience(&self, job: &JobPosting) -> bool {
        self.experience_level.is_empty() || self.experience_level.contains(&job.experience_level)
    }

    fn matches_category(&self, job: &JobPosting) -> bool {
        self.category.is_empty() || self.category.contains(&job.category)
    }

    // Every selected option must appear in the location.
    fn matches_remote(&self, job: &JobPosting) -> bool {
        if self.remote.is_empty() {
            return true;
        }
        let location = job.location.to_lowercase();
        self.remote.iter().all(|opt| location.contains(opt.token()))
    }

    fn matches_salary(&self, job: &JobPosting) -> bool {
        match (self.min_salary, job.min_salary()) {
            (Some(min), Some(floor)) if min > 0 => floor >= min,
            _ => true,
        }
    }

    fn matches_skills(&self, job: &JobPosting) -> bool {
        self.skills.is_empty() || self.skills.iter().any(|skill| job.has_tag(skill))
    }
}

/// `"full-time"`, `"Full-time"` and `"Full Time"` all normalize to `"full time"`.
pub fn normalize_job_type(value: &str) -> String {
    value
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
