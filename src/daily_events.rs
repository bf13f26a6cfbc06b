//! "On this day" historical-events client
//!
//! Scrapes a fixed reference page for its on-this-day list and keeps the
//! first five entries. There is no per-request parameterization; the page is
//! a single global source, and failures here are surfaced to the caller
//! rather than folded into the briefing.

use reqwest::blocking::Client;
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::config::EventsConfig;
use crate::error::{DayBriefError, Result};

/// Fixed header line for the formatted events list
pub const EVENTS_HEADER: &str = "On This Day:";

/// Entries kept from the on-this-day list
const EVENT_LIMIT: usize = 5;

/// List container holding the on-this-day items on the reference page
const EVENTS_SELECTOR: &str = "#mp-otd ul li";

/// Up to five historical-event snippets, in page order
#[derive(Debug, Clone)]
pub struct DailyEvents {
    pub entries: Vec<String>,
}

impl DailyEvents {
    /// Fixed header plus one entry per line
    #[must_use]
    pub fn format(&self) -> String {
        let mut lines = vec![EVENTS_HEADER.to_string()];
        lines.extend(self.entries.iter().cloned());
        lines.join("\n")
    }
}

/// Historical-events page client
pub struct DailyEventsClient {
    client: Client,
    page_url: String,
}

impl DailyEventsClient {
    /// Create a new client for the configured reference page
    pub fn new(config: &EventsConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("daybrief/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            page_url: config.page_url.clone(),
        })
    }

    /// Fetch and extract the on-this-day snippet. One blocking call,
    /// no retries.
    pub fn fetch_daily_events(&self) -> Result<DailyEvents> {
        info!("Fetching daily events from {}", self.page_url);

        let response = self.client.get(&self.page_url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DayBriefError::service(format!(
                "Events page returned status {status}"
            )));
        }

        let html = response.text()?;
        let events = extract_events(&html)?;
        debug!("Extracted {} event entries", events.entries.len());
        Ok(events)
    }
}

/// Pull the first few list-item texts out of the page markup
fn extract_events(html: &str) -> Result<DailyEvents> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(EVENTS_SELECTOR)
        .map_err(|e| DayBriefError::parse(format!("Invalid events selector: {e}")))?;

    let entries = document
        .select(&selector)
        .take(EVENT_LIMIT)
        .map(|element| {
            let raw = element.text().collect::<Vec<_>>().join(" ");
            raw.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .filter(|text| !text.is_empty())
        .collect();

    Ok(DailyEvents { entries })
}
