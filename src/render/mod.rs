// HTML rendering for the job board. The card layout is a strategy picked
// when the board renderer is built.

pub mod cards;

use askama::Template;
use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::models::job::JobPosting;
use crate::pagination::{self, PageLink};

pub use cards::{HomepageCard, ListingCard};

/// Turns one posting into an HTML card.
pub trait CardRenderer: Send + Sync {
    fn render_card(&self, job: &JobPosting, now: DateTime<Utc>) -> Result<String, CatalogError>;
}

struct PageButton {
    number: usize,
    active: bool,
    ellipsis: bool,
}

impl From<PageLink> for PageButton {
    fn from(link: PageLink) -> Self {
        match link {
            PageLink::Page { number, active } => PageButton {
                number,
                active,
                ellipsis: false,
            },
            PageLink::Ellipsis => PageButton {
                number: 0,
                active: false,
                ellipsis: true,
            },
        }
    }
}

#[derive(Template)]
#[template(path = "board.html")]
struct BoardTemplate {
    total_count: usize,
    cards: Vec<String>,
    buttons: Vec<PageButton>,
    has_previous: bool,
    has_next: bool,
}

/// Renders the catalog's current page with the chosen card strategy.
pub struct BoardRenderer<R> {
    cards: R,
}

impl<R: CardRenderer> BoardRenderer<R> {
    pub fn new(cards: R) -> Self {
        Self { cards }
    }

    pub fn render(&self, catalog: &Catalog, now: DateTime<Utc>) -> Result<String, CatalogError> {
        let info = catalog.page_info();
        let cards = catalog
            .get_page(None)
            .into_iter()
            .map(|job| self.cards.render_card(job, now))
            .collect::<Result<Vec<_>, _>>()?;

        let tmpl = BoardTemplate {
            total_count: info.total_count,
            cards,
            buttons: pagination::page_window(info.current_page, info.total_pages)
                .into_iter()
                .map(PageButton::from)
                .collect(),
            has_previous: info.has_previous,
            has_next: info.has_next,
        };
        Ok(tmpl.render()?)
    }
}
