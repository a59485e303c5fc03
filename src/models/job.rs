use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_LOGO: &str = "https://via.placeholder.com/50";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub category: String,
    pub experience_level: String,
    #[serde(default)]
    pub salary: Option<String>,
    pub description: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub posted_date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl JobPosting {
    pub fn logo_url(&self) -> &str {
        self.logo
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(PLACEHOLDER_LOGO)
    }

    /// Lower bound of the advertised salary range, e.g. `"$80,000 - $95,000"` -> 80000.
    /// `None` when the salary is absent or carries no `$<digits>` token.
    pub fn min_salary(&self) -> Option<u64> {
        self.salary.as_deref().and_then(parse_salary_floor)
    }

    pub fn has_tag(&self, skill: &str) -> bool {
        let skill = skill.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == skill)
    }
}

/// Finds the first `$` followed by a run of digits and commas and parses it
/// with the commas removed.
pub fn parse_salary_floor(salary: &str) -> Option<u64> {
    for (pos, _) in salary.match_indices('$') {
        let rest = &salary[pos + 1..];
        let token: &str = rest
            .split(|c: char| !(c.is_ascii_digit() || c == ','))
            .next()
            .unwrap_or("");
        if token.is_empty() {
            continue;
        }
        let digits: String = token.chars().filter(|c| *c != ',').collect();
        return digits.parse().ok();
    }
    None
}
