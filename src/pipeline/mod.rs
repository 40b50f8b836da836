//! Dataset pipeline: fetch the sheet export, clean the fields we care about,
//! and derive the story list or the contact pool.
//!
//! Both the web server and the static build go through [`DatasetPipeline`];
//! fetch failures stop here and turn into fallback content.

pub mod contacts;
pub mod fetch;
pub mod mailto;
pub mod testimonials;

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::app::ports::TableSource;
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::schema::ColumnMap;
use crate::types::{Contact, StoryPolicy, Testimonial};

pub use contacts::{extract_contacts, sample_contacts};
pub use fetch::{fetch_table, parse_table};
pub use mailto::{build_mailto, recipient_emails};
pub use testimonials::{extract_testimonials, select_random_testimonial};

/// Both story lists, derived from one snapshot of the sheet.
#[derive(Debug, Clone)]
pub struct StoryViews {
    pub highlight: Vec<Testimonial>,
    pub full_list: Vec<Testimonial>,
}

#[derive(Clone)]
pub struct DatasetPipeline {
    source: Arc<dyn TableSource>,
    columns: ColumnMap,
    testimonials_url: String,
    contacts_url: String,
}

impl DatasetPipeline {
    pub fn new(source: Arc<dyn TableSource>, config: &SiteConfig) -> Self {
        Self {
            source,
            columns: config.columns.clone(),
            testimonials_url: config.sheet.testimonials_csv_url.clone(),
            contacts_url: config.sheet.contacts_csv_url.clone(),
        }
    }

    /// Stories for one view. Never empty when the sheet is unreachable: a
    /// single "unable to load" entry stands in for the list.
    pub async fn stories(&self, policy: StoryPolicy) -> Vec<Testimonial> {
        match self.try_stories(policy).await {
            Ok(stories) => {
                info!(count = stories.len(), ?policy, "fetched testimonials");
                stories
            }
            Err(e) => {
                error!(error = %e, ?policy, "failed to load testimonials");
                vec![Testimonial::unavailable()]
            }
        }
    }

    pub async fn try_stories(&self, policy: StoryPolicy) -> Result<Vec<Testimonial>> {
        let table = fetch_table(self.source.as_ref(), &self.testimonials_url).await?;
        Ok(extract_testimonials(&table.rows, &self.columns, policy))
    }

    /// Highlight and full-list stories from a single fetch. On failure both
    /// views hold the single "unable to load" entry.
    pub async fn story_views(&self) -> StoryViews {
        match fetch_table(self.source.as_ref(), &self.testimonials_url).await {
            Ok(table) => {
                let highlight = extract_testimonials(&table.rows, &self.columns, StoryPolicy::Highlight);
                let full_list = extract_testimonials(&table.rows, &self.columns, StoryPolicy::FullList);
                info!(highlight = highlight.len(), full_list = full_list.len(), "fetched testimonials");
                StoryViews { highlight, full_list }
            }
            Err(e) => {
                error!(error = %e, "failed to load testimonials");
                StoryViews {
                    highlight: vec![Testimonial::unavailable()],
                    full_list: vec![Testimonial::unavailable()],
                }
            }
        }
    }

    /// Every senior with a usable email; empty when the sheet is unreachable
    /// or has no email column.
    pub async fn contacts(&self) -> Vec<Contact> {
        match self.try_contacts().await {
            Ok(contacts) => {
                info!(count = contacts.len(), "fetched senior contacts");
                contacts
            }
            Err(e @ SiteError::MissingColumn(_)) => {
                warn!(error = %e, "seniors sheet has no email column");
                Vec::new()
            }
            Err(e) => {
                error!(error = %e, "failed to load senior contacts");
                Vec::new()
            }
        }
    }

    pub async fn try_contacts(&self) -> Result<Vec<Contact>> {
        let table = fetch_table(self.source.as_ref(), &self.contacts_url).await?;
        extract_contacts(&table, &self.columns)
    }
}
