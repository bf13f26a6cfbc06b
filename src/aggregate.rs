//! Briefing aggregation
//!
//! Composes the three source clients into one briefing record. Each source is
//! fetched independently and strictly in sequence: weather, then news, then
//! daily events. Weather and news failures are folded into their section text
//! so the rest of the briefing still populates; a daily-events failure aborts
//! the whole request and surfaces to the caller.

use tracing::{info, warn};

use crate::config::DayBriefConfig;
use crate::daily_events::DailyEventsClient;
use crate::error::Result;
use crate::news::{NewsBundle, NewsClient};
use crate::weather::{WeatherClient, WeatherReport};

/// Merged, partially-fault-tolerant record of one full fetch cycle
#[derive(Debug, Clone)]
pub struct AggregateResult {
    /// Weather summary, or an error-prefixed message
    pub weather_text: String,
    /// Icon identifier for the presentation layer; absent on weather failure
    pub weather_icon: Option<String>,
    /// Formatted headline list, or an error-prefixed message
    pub news_text: String,
    /// The fetched bundle for further derivation; absent on news failure
    pub news_bundle: Option<NewsBundle>,
    /// Formatted on-this-day snippet
    pub events_text: String,
}

/// Composes the three source clients
pub struct Aggregator {
    weather: WeatherClient,
    news: NewsClient,
    events: DailyEventsClient,
}

impl Aggregator {
    /// Build all three clients from configuration
    pub fn new(config: &DayBriefConfig) -> Result<Self> {
        Ok(Self {
            weather: WeatherClient::new(&config.weather)?,
            news: NewsClient::new(&config.news)?,
            events: DailyEventsClient::new(&config.events)?,
        })
    }

    /// Run one full fetch cycle. Stateless: nothing is retained between
    /// calls, and the three fetches never overlap.
    pub fn aggregate(&self, city: &str, country: &str, category: &str) -> Result<AggregateResult> {
        info!("Aggregating briefing for {city} ({country}/{category})");

        let (weather_text, weather_icon) = weather_section(self.weather.fetch_weather(city));
        let (news_text, news_bundle) =
            news_section(self.news.fetch_top_headlines(country, category));
        let events_text = self.events.fetch_daily_events()?.format();

        Ok(AggregateResult {
            weather_text,
            weather_icon,
            news_text,
            news_bundle,
            events_text,
        })
    }
}

/// Fold a weather fetch into its section: summary plus icon on success,
/// an error-prefixed message otherwise
fn weather_section(fetched: Result<WeatherReport>) -> (String, Option<String>) {
    match fetched {
        Ok(report) => {
            let icon = report.icon_code.clone();
            (report.summary(), Some(icon))
        }
        Err(e) => {
            warn!("Weather fetch failed: {e}");
            (format!("Weather Error: {e}"), None)
        }
    }
}

/// Fold a news fetch into its section: formatted headlines plus the bundle
/// on success, an error-prefixed message otherwise
fn news_section(fetched: Result<NewsBundle>) -> (String, Option<NewsBundle>) {
    match fetched {
        Ok(bundle) => (bundle.format_headlines(), Some(bundle)),
        Err(e) => {
            warn!("News fetch failed: {e}");
            (format!("News Error: {e}"), None)
        }
    }
}
