// src/domain/estate.rs

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

// estate
//  ├── immowebCode, price, isAuction
//  ├── zipCode, locality, street, streetNumber, geolocation
//  ├── images, agencyLogo, agencyName, description
//  ├── livingArea, hasGarden, gardenArea, bedroomCount
//  ├── isSold, isUnderOption, isLiked, isVisited
//  ├── modificationDate
//  └── priceHistory[]
//       ├── price
//       └── date

/// One listing as returned by the backend. Never mutated after decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estate {
    pub immoweb_code: i64,
    pub price: i64,
    #[serde(default)]
    pub is_auction: bool,

    pub zip_code: i32,
    pub locality: String,
    pub street: Option<String>,
    pub street_number: Option<String>,
    pub geolocation: Option<Vec<f64>>,

    #[serde(default)]
    pub images: Vec<String>,
    pub agency_logo: Option<String>,
    pub agency_name: Option<String>,
    pub description: Option<String>,

    pub living_area: Option<i64>,
    pub has_garden: Option<bool>,
    pub garden_area: Option<i64>,
    pub bedroom_count: Option<i64>,

    #[serde(default)]
    pub is_sold: bool,
    #[serde(default)]
    pub is_under_option: bool,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_visited: bool,

    #[serde(deserialize_with = "timestamp")]
    pub modification_date: DateTime<Utc>,
    pub price_history: Option<Vec<PricePoint>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricePoint {
    pub price: i64,
    #[serde(deserialize_with = "timestamp")]
    pub date: DateTime<Utc>,
}

impl Estate {
    /// `(lat, lng)` when the backend sent a usable pair.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match self.geolocation.as_deref() {
            Some([lat, lng, ..]) => Some((*lat, *lng)),
            _ => None,
        }
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn listing_url(&self) -> String {
        format!("https://www.immoweb.be/en/classified/{}", self.immoweb_code)
    }
}

/// Date scalars come back either as RFC 3339 text or as epoch milliseconds
/// (number or numeric string).
fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    let millis_to_utc = |ms: i64| -> Result<DateTime<Utc>, D::Error> {
        Utc.timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {ms}")))
    };

    match Raw::deserialize(deserializer)? {
        Raw::Millis(ms) => millis_to_utc(ms),
        Raw::Text(text) => {
            if let Ok(ms) = text.parse::<i64>() {
                return millis_to_utc(ms);
            }
            DateTime::parse_from_rfc3339(&text)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| serde::de::Error::custom(format!("invalid date '{text}': {e}")))
        }
    }
}
