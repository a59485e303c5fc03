use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::catalog::{CatalogSettings, DEFAULT_PAGE_SIZE};
use crate::models::filter::{FilterCriteria, RemoteOption};

#[derive(Parser, Debug, Clone)]
#[command(name = "jobboard", about = "Browse, search and filter the job board catalog")]
pub struct Config {
    /// JSON file with job postings (built-in seed data when omitted)
    #[arg(long, env = "JOBBOARD_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Jobs per page
    #[arg(long, env = "JOBBOARD_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Simulated catalog fetch delay in milliseconds
    #[arg(long, env = "JOBBOARD_LATENCY_MS", default_value = "0")]
    pub latency_ms: u64,

    /// Keyword matched against title, company, description and tags
    #[arg(long, default_value = "")]
    pub keyword: String,

    /// Text matched against the job location
    #[arg(long, default_value = "")]
    pub location: String,

    /// Job type facet, e.g. full-time (repeatable)
    #[arg(long = "job-type")]
    pub job_type: Vec<String>,

    /// Experience level facet, e.g. mid-level (repeatable)
    #[arg(long = "experience")]
    pub experience_level: Vec<String>,

    /// Category facet, e.g. ai-engineer (repeatable)
    #[arg(long)]
    pub category: Vec<String>,

    /// Remote facet: remote, hybrid or on-site (repeatable)
    #[arg(long)]
    pub remote: Vec<RemoteOption>,

    /// Minimum salary
    #[arg(long)]
    pub min_salary: Option<u64>,

    /// Skill tag (repeatable)
    #[arg(long = "skill")]
    pub skills: Vec<String>,

    /// Page to show
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Card layout
    #[arg(long, value_enum, default_value_t = Layout::Listing)]
    pub layout: Layout,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Listing,
    Homepage,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

impl Config {
    pub fn settings(&self) -> CatalogSettings {
        CatalogSettings {
            page_size: self.page_size,
        }
    }

    /// Simulated fetch delay for the built-in seed source.
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Facet selections from the command line.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            job_type: self.job_type.clone(),
            experience_level: self.experience_level.clone(),
            category: self.category.clone(),
            remote: self.remote.clone(),
            min_salary: self.min_salary,
            skills: self.skills.clone(),
        }
    }

    pub fn has_search(&self) -> bool {
        !self.keyword.trim().is_empty() || !self.location.trim().is_empty()
    }
}
