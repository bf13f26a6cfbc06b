//! `DayBrief` CLI
//!
//! Thin presentation layer over the aggregation library: validates the
//! requested country/city/category against the catalog, runs one fetch
//! cycle, and prints the briefing sections together with a textual
//! source-distribution histogram.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use daybrief::{Aggregator, DayBriefConfig, DayBriefError, catalog, weather};

#[derive(Parser, Debug)]
#[command(name = "daybrief", version, about = "Daily briefing: weather, headlines, and on-this-day history")]
struct Cli {
    /// City for the weather report (defaults to the country's first city)
    #[arg(long)]
    city: Option<String>,

    /// Country code for the headlines (e.g. us, gb, de)
    #[arg(long)]
    country: Option<String>,

    /// News category (e.g. general, business, technology)
    #[arg(long)]
    category: Option<String>,

    /// Path to a configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Cli::parse();

    if let Err(e) = run(args) {
        match e.downcast_ref::<DayBriefError>() {
            Some(domain) => eprintln!("Error: {domain}\n{}", domain.user_message()),
            None => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<()> {
    let config = DayBriefConfig::load_from_path(args.config.clone())
        .with_context(|| "Failed to load configuration")?;

    init_tracing(&config, args.verbose);

    let country = args
        .country
        .unwrap_or_else(|| config.defaults.country.clone());
    let category = args
        .category
        .unwrap_or_else(|| config.defaults.category.clone());

    let cities = catalog::cities_for(&country).ok_or_else(|| {
        DayBriefError::invalid_input(format!(
            "Unknown country code '{}'. Known codes: {}",
            country,
            catalog::country_codes().join(", ")
        ))
    })?;

    if !catalog::is_known_category(&category) {
        return Err(DayBriefError::invalid_input(format!(
            "Unknown news category '{}'. Known categories: {}",
            category,
            catalog::NEWS_CATEGORIES.join(", ")
        ))
        .into());
    }

    let city = args.city.unwrap_or_else(|| cities[0].to_string());
    if city.trim().is_empty() {
        return Err(DayBriefError::invalid_input("City cannot be empty").into());
    }

    let aggregator = Aggregator::new(&config)?;
    let result = aggregator.aggregate(&city, &country, &category)?;

    println!("Daily briefing — {}", Local::now().format("%A, %B %-d, %Y"));
    println!();
    println!("{}", result.weather_text);
    if let Some(icon_code) = &result.weather_icon {
        println!("Weather icon: {}", weather::icon_url(icon_code));
    }
    println!();
    println!("{}", result.news_text);
    println!();
    println!("{}", result.events_text);

    if let Some(bundle) = &result.news_bundle {
        println!();
        println!("Articles per source:");
        print_distribution(&bundle.source_distribution());
    }

    Ok(())
}

fn init_tracing(config: &DayBriefConfig, verbose: bool) {
    let default_level = if verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tfmt().with_env_filter(filter).with_target(false).init();
}

/// Render the source distribution as a count-sorted horizontal bar chart
fn print_distribution(distribution: &std::collections::HashMap<String, usize>) {
    let mut rows: Vec<(&str, usize)> = distribution
        .iter()
        .map(|(source, count)| (source.as_str(), *count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    for (source, count) in rows {
        println!("  {source:<28} {} {count}", "#".repeat(count));
    }
}
