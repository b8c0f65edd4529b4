// src/domain/decorate.rs

use crate::domain::estate::{Estate, PricePoint};
use crate::domain::format::DisplayFormat;
use chrono::{DateTime, Utc};
use std::ops::Deref;

/// A listing plus the strings the views print. Borrows the source record, so
/// decorating can never touch it; every original field stays reachable
/// through `Deref`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoratedEstate<'a> {
    pub estate: &'a Estate,
    pub display_price: String,
    /// Same length and dates as the source history, prices formatted.
    pub price_history: Option<Vec<DisplayPricePoint>>,
    pub display_street_and_number: String,
    pub display_zip_code: String,
    pub display_modification_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPricePoint {
    pub price: String,
    pub date: DateTime<Utc>,
}

impl Deref for DecoratedEstate<'_> {
    type Target = Estate;

    fn deref(&self) -> &Estate {
        self.estate
    }
}

pub fn decorate<'a>(
    estate: &'a Estate,
    fmt: &dyn DisplayFormat,
    now: DateTime<Utc>,
) -> DecoratedEstate<'a> {
    let auction_prefix = if estate.is_auction { "from " } else { "" };

    let price_history = estate.price_history.as_ref().map(|points| {
        points
            .iter()
            .map(|PricePoint { price, date }| DisplayPricePoint {
                price: fmt.price(*price),
                date: *date,
            })
            .collect()
    });

    DecoratedEstate {
        estate,
        display_price: format!("{auction_prefix}{}", fmt.price(estate.price)),
        price_history,
        display_street_and_number: street_line(estate),
        display_zip_code: format!("{} {}", estate.zip_code, estate.locality),
        display_modification_date: format!(
            "{} ({})",
            fmt.absolute_date(estate.modification_date),
            fmt.relative_time(estate.modification_date, now)
        ),
    }
}

pub fn decorate_all<'a>(
    estates: &'a [Estate],
    fmt: &dyn DisplayFormat,
    now: DateTime<Utc>,
) -> Vec<DecoratedEstate<'a>> {
    estates.iter().map(|e| decorate(e, fmt, now)).collect()
}

// An empty street means "address hidden by the agency". A missing or empty
// number leaves the street alone, without a trailing space.
fn street_line(estate: &Estate) -> String {
    match (estate.street.as_deref(), estate.street_number.as_deref()) {
        (Some(street), Some(number)) if !street.is_empty() && !number.is_empty() => {
            format!("{street} {number}")
        }
        (Some(street), _) if !street.is_empty() => street.to_string(),
        _ => String::new(),
    }
}
