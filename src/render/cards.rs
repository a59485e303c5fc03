use askama::Template;
use chrono::{DateTime, Utc};

use crate::error::CatalogError;
use crate::format::{facet_label, posted_label};
use crate::models::job::JobPosting;
use crate::render::CardRenderer;

#[derive(Template)]
#[template(path = "cards/listing.html")]
struct ListingCardTemplate<'a> {
    job: &'a JobPosting,
    logo: &'a str,
    salary: &'a str,
    level: String,
    posted: String,
}

#[derive(Template)]
#[template(path = "cards/homepage.html")]
struct HomepageCardTemplate<'a> {
    job: &'a JobPosting,
    logo: &'a str,
    salary: &'a str,
    level: String,
    posted: String,
}

/// Card used on the job listings page.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingCard;

/// Homepage card: company section on top, save and apply buttons in the footer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomepageCard;

impl CardRenderer for ListingCard {
    fn render_card(&self, job: &JobPosting, now: DateTime<Utc>) -> Result<String, CatalogError> {
        let tmpl = ListingCardTemplate {
            job,
            logo: job.logo_url(),
            salary: job.salary.as_deref().unwrap_or_default(),
            level: facet_label(&job.experience_level),
            posted: posted_label(job.posted_date, now),
        };
        Ok(tmpl.render()?)
    }
}

impl CardRenderer for HomepageCard {
    fn render_card(&self, job: &JobPosting, now: DateTime<Utc>) -> Result<String, CatalogError> {
        let tmpl = HomepageCardTemplate {
            job,
            logo: job.logo_url(),
            salary: job.salary.as_deref().unwrap_or_default(),
            level: facet_label(&job.experience_level),
            posted: posted_label(job.posted_date, now),
        };
        Ok(tmpl.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn posting() -> JobPosting {
        JobPosting {
            id: 42,
            title: "Backend <Rust> Engineer".into(),
            company: "Crab & Co".into(),
            location: "Remote".into(),
            job_type: "Contract".into(),
            category: "software-dev".into(),
            experience_level: "mid-level".into(),
            salary: None,
            description: "Async services".into(),
            logo: None,
            posted_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            tags: vec!["Rust".into(), "Tokio".into()],
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 12, 8, 0, 0).unwrap()
    }

    #[test]
    fn listing_card_fills_fields() {
        let html = ListingCard.render_card(&posting(), now()).unwrap();
        assert!(html.contains("Posted 2 days ago"));
        assert!(html.contains(r#"<span class="level-text">Mid Level</span>"#));
        assert!(html.contains("https://via.placeholder.com/50"));
        assert!(html.contains(r#"<span class="tag">Tokio</span>"#));
        assert!(!html.contains("save-job-btn"));
    }

    #[test]
    fn cards_escape_text() {
        let html = ListingCard.render_card(&posting(), now()).unwrap();
        assert!(
            html.contains("Backend &#60;Rust&#62; Engineer")
                || html.contains("Backend &lt;Rust&gt; Engineer")
        );
        assert!(!html.contains("<Rust>"));
    }

    #[test]
    fn homepage_card_has_save_button() {
        let html = HomepageCard.render_card(&posting(), now()).unwrap();
        assert!(html.contains("company-section"));
        assert!(html.contains("save-job-btn"));
        assert!(html.contains("Posted 2 days ago"));
    }
}
