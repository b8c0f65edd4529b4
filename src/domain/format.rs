// src/domain/format.rs

use chrono::{DateTime, FixedOffset, Offset, Utc};
use thousands::{digits, SeparatorPolicy, Separable};

/// Locale-dependent rendering used by the decorator. Swapping the locale means
/// swapping the implementation, nothing else.
pub trait DisplayFormat {
    /// Amount with thousands grouping and the currency symbol.
    fn price(&self, amount: i64) -> String;

    /// Day, abbreviated month and 4-digit year.
    fn absolute_date(&self, at: DateTime<Utc>) -> String;

    /// "3 days ago", "in an hour", ...
    fn relative_time(&self, at: DateTime<Utc>, now: DateTime<Utc>) -> String;
}

// fr-BE groups digits with a narrow no-break space.
const FR_BE_GROUPING: SeparatorPolicy<'static> = SeparatorPolicy {
    separator: "\u{202f}",
    groups: &[3],
    digits: digits::ASCII_DECIMAL,
};

/// fr-BE prices, English dates, rendered in a fixed timezone.
#[derive(Debug, Clone)]
pub struct BelgianFormat {
    offset: FixedOffset,
}

impl BelgianFormat {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }
}

impl DisplayFormat for BelgianFormat {
    fn price(&self, amount: i64) -> String {
        format!("{} €", amount.separate_by_policy(FR_BE_GROUPING))
    }

    fn absolute_date(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.offset).format("%d %b %Y").to_string()
    }

    fn relative_time(&self, at: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(at);
        let phrase = humanize(elapsed.num_seconds().unsigned_abs());

        if elapsed.num_seconds() < 0 {
            format!("in {phrase}")
        } else {
            format!("{phrase} ago")
        }
    }
}

/// Collapse a duration into the coarse phrase people expect to read.
fn humanize(seconds: u64) -> String {
    let secs = seconds as f64;
    let minutes = (secs / 60.0).round();
    let hours = (secs / 3600.0).round();
    let days = (secs / 86_400.0).round();

    if secs < 45.0 {
        "a few seconds".to_string()
    } else if secs < 90.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if minutes < 90.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{hours} hours")
    } else if hours < 36.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{days} days")
    } else if days < 45.0 {
        "a month".to_string()
    } else if days < 320.0 {
        let months = (days / 30.4).round().max(2.0);
        format!("{months} months")
    } else if days < 548.0 {
        "a year".to_string()
    } else {
        let years = (days / 365.0).round().max(2.0);
        format!("{years} years")
    }
}
