//! Top-headlines client
//!
//! Fetches top headlines for a country/category pair from a NewsAPI-compatible
//! endpoint. A fetched bundle is an immutable snapshot: formatting shows at
//! most the first five headlines, while the source distribution counts every
//! article in the bundle.

use std::collections::HashMap;

use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::config::NewsConfig;
use crate::error::{DayBriefError, Result};

/// Fixed header line for the formatted headline list
pub const HEADLINES_HEADER: &str = "Top News Headlines:";

/// Headlines shown in the formatted list
const HEADLINE_LIMIT: usize = 5;

/// One headline with its originating publication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub source_name: String,
}

/// Immutable snapshot of one headlines fetch, in response order
#[derive(Debug, Clone)]
pub struct NewsBundle {
    pub articles: Vec<Article>,
}

impl NewsBundle {
    /// Fixed header plus at most the first five headlines, numbered from 1
    #[must_use]
    pub fn format_headlines(&self) -> String {
        let mut lines = vec![HEADLINES_HEADER.to_string()];
        for (idx, article) in self.articles.iter().take(HEADLINE_LIMIT).enumerate() {
            lines.push(format!("{}. {}", idx + 1, article.title));
        }
        lines.join("\n")
    }

    /// Article count per source name, over ALL articles in the bundle
    #[must_use]
    pub fn source_distribution(&self) -> HashMap<String, usize> {
        let mut sources = HashMap::new();
        for article in &self.articles {
            *sources.entry(article.source_name.clone()).or_insert(0) += 1;
        }
        sources
    }
}

/// News service client
pub struct NewsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    /// Create a new client; fails if no access key is configured
    pub fn new(config: &NewsConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            DayBriefError::config(
                "News access key is not configured (set [news] api_key or DAYBRIEF_NEWS__API_KEY)",
            )
        })?;

        let client = Client::builder()
            .user_agent(concat!("daybrief/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
        })
    }

    /// Fetch top headlines for a country/category pair. One blocking call,
    /// no retries.
    pub fn fetch_top_headlines(&self, country: &str, category: &str) -> Result<NewsBundle> {
        info!("Fetching top headlines for {country}/{category}");

        let url = format!(
            "{}/top-headlines?country={}&category={}&apiKey={}",
            self.base_url,
            urlencoding::encode(country),
            urlencoding::encode(category),
            self.api_key
        );

        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("News service returned {status} for {country}/{category}");
            return Err(status_to_error(status.as_u16()));
        }

        let payload: newsapi::HeadlinesResponse = response
            .json()
            .map_err(|e| DayBriefError::parse(format!("Failed to parse news response: {e}")))?;

        let bundle = payload.into_bundle();
        info!("Fetched {} headlines", bundle.articles.len());
        Ok(bundle)
    }
}

/// Map a non-success news status code onto a domain error
fn status_to_error(status: u16) -> DayBriefError {
    match status {
        401 => DayBriefError::invalid_credentials("News service rejected the access key"),
        _ => DayBriefError::service(format!("News service returned status {status}")),
    }
}

/// NewsAPI response structures
mod newsapi {
    use serde::Deserialize;

    use super::{Article, NewsBundle};

    #[derive(Debug, Deserialize)]
    pub(super) struct HeadlinesResponse {
        #[serde(default)]
        pub articles: Vec<RawArticle>,
    }

    #[derive(Debug, Deserialize)]
    pub(super) struct RawArticle {
        pub title: Option<String>,
        #[serde(default)]
        pub source: RawSource,
    }

    #[derive(Debug, Default, Deserialize)]
    pub(super) struct RawSource {
        pub name: Option<String>,
    }

    impl HeadlinesResponse {
        /// Reduce the raw response to the bundle shape, preserving order
        pub(super) fn into_bundle(self) -> NewsBundle {
            let articles = self
                .articles
                .into_iter()
                .map(|raw| Article {
                    title: raw.title.unwrap_or_else(|| "(untitled)".to_string()),
                    source_name: raw.source.name.unwrap_or_else(|| "Unknown".to_string()),
                })
                .collect();

            NewsBundle { articles }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle_of(titles_and_sources: &[(&str, &str)]) -> NewsBundle {
        NewsBundle {
            articles: titles_and_sources
                .iter()
                .map(|(title, source)| Article {
                    title: (*title).to_string(),
                    source_name: (*source).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_format_headlines_caps_at_five() {
        let bundle = bundle_of(&[
            ("First", "A"),
            ("Second", "A"),
            ("Third", "B"),
            ("Fourth", "C"),
            ("Fifth", "B"),
            ("Sixth", "A"),
            ("Seventh", "D"),
        ]);
        let formatted = bundle.format_headlines();
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines[0], HEADLINES_HEADER);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "1. First");
        assert_eq!(lines[5], "5. Fifth");
        assert!(!formatted.contains("Sixth"));
    }

    #[test]
    fn test_format_headlines_fewer_than_five() {
        let bundle = bundle_of(&[("Only one", "A"), ("And two", "B")]);
        let formatted = bundle.format_headlines();
        assert_eq!(formatted, "Top News Headlines:\n1. Only one\n2. And two");
    }

    #[test]
    fn test_format_headlines_empty_bundle_is_just_the_header() {
        let bundle = bundle_of(&[]);
        assert_eq!(bundle.format_headlines(), HEADLINES_HEADER);
    }

    #[test]
    fn test_source_distribution_counts_all_articles() {
        let bundle = bundle_of(&[
            ("a", "Reuters"),
            ("b", "BBC News"),
            ("c", "Reuters"),
            ("d", "AP"),
            ("e", "Reuters"),
            ("f", "BBC News"),
            ("g", "AP"),
        ]);
        let distribution = bundle.source_distribution();
        assert_eq!(distribution.len(), 3);
        assert_eq!(distribution["Reuters"], 3);
        assert_eq!(distribution["BBC News"], 2);
        assert_eq!(distribution["AP"], 2);
        assert_eq!(
            distribution.values().sum::<usize>(),
            bundle.articles.len()
        );
    }

    #[test]
    fn test_parse_sample_response() {
        let sample = r#"{
            "status": "ok",
            "totalResults": 3,
            "articles": [
                {"source": {"id": "reuters", "name": "Reuters"}, "title": "Markets climb"},
                {"source": {"id": null, "name": "BBC News"}, "title": "Storm warning issued"},
                {"source": {"name": null}, "title": null}
            ]
        }"#;
        let payload: newsapi::HeadlinesResponse = serde_json::from_str(sample).unwrap();
        let bundle = payload.into_bundle();
        assert_eq!(bundle.articles.len(), 3);
        assert_eq!(bundle.articles[0].title, "Markets climb");
        assert_eq!(bundle.articles[0].source_name, "Reuters");
        assert_eq!(bundle.articles[2].title, "(untitled)");
        assert_eq!(bundle.articles[2].source_name, "Unknown");
    }

    #[test]
    fn test_status_to_error_mapping() {
        assert!(matches!(
            status_to_error(401),
            DayBriefError::InvalidCredentials(_)
        ));
        assert!(matches!(status_to_error(429), DayBriefError::Service(_)));
        assert!(matches!(status_to_error(500), DayBriefError::Service(_)));
    }
}
