//! Static catalog of selectable countries, their cities, and news categories
//!
//! This is the fixed choice set offered by the presentation layer. Country
//! codes are unique; lookups are linear over a ten-entry table.

/// Country code → selectable cities, in presentation order
pub const COUNTRY_CITIES: &[(&str, &[&str])] = &[
    ("us", &["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"]),
    ("gb", &["London", "Birmingham", "Manchester", "Liverpool", "Leeds"]),
    ("ca", &["Toronto", "Vancouver", "Montreal", "Calgary", "Ottawa"]),
    ("au", &["Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide"]),
    ("in", &["Mumbai", "Delhi", "Bangalore", "Hyderabad", "Chennai"]),
    ("de", &["Berlin", "Munich", "Hamburg", "Cologne", "Frankfurt"]),
    ("fr", &["Paris", "Marseille", "Lyon", "Toulouse", "Nice"]),
    ("jp", &["Tokyo", "Osaka", "Nagoya", "Sapporo", "Fukuoka"]),
    ("cn", &["Beijing", "Shanghai", "Guangzhou", "Shenzhen", "Chengdu"]),
    ("ke", &["Nairobi", "Mombasa", "Kisumu", "Nakuru", "Eldoret"]),
];

/// News categories accepted by the headlines service
pub const NEWS_CATEGORIES: &[&str] = &[
    "general",
    "business",
    "entertainment",
    "health",
    "science",
    "sports",
    "technology",
];

/// Cities selectable for a country code, if the code is known
#[must_use]
pub fn cities_for(country: &str) -> Option<&'static [&'static str]> {
    COUNTRY_CITIES
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, cities)| *cities)
}

/// Whether a country code is in the catalog
#[must_use]
pub fn is_known_country(country: &str) -> bool {
    cities_for(country).is_some()
}

/// Whether a news category is accepted
#[must_use]
pub fn is_known_category(category: &str) -> bool {
    NEWS_CATEGORIES.contains(&category)
}

/// All catalogued country codes, in presentation order
#[must_use]
pub fn country_codes() -> Vec<&'static str> {
    COUNTRY_CITIES.iter().map(|(code, _)| *code).collect()
}
