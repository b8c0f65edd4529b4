// config.rs
use crate::graphql::LikedQuery;
use chrono::{FixedOffset, Offset, Utc};
use std::env;
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Everything the server reads from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub graphql_url: String,
    pub api_token: Option<String>,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub timeout_secs: u64,
    pub page_size: u64,
    pub export_limit: u64,
    pub utc_offset: FixedOffset,
    pub liked_query: LikedQuery,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Invalid { var: &'static str, value: String },
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { var, value } => write!(f, "{var} has an invalid value: '{value}'"),
            ConfigError::Missing(var) => write!(f, "{var} environment variable not set"),
        }
    }
}

impl Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql_url: "http://localhost:4000/graphql".to_string(),
            api_token: None,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            timeout_secs: 30,
            page_size: 30,
            export_limit: 1000,
            // Brussels, winter time
            utc_offset: FixedOffset::east_opt(3600).unwrap_or_else(|| Utc.fix()),
            liked_query: LikedQuery::OnlyLikedFlag,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let utc_offset = match get("ESTATES_UTC_OFFSET_MINUTES") {
            Some(raw) => {
                let minutes: i32 = parse("ESTATES_UTC_OFFSET_MINUTES", &raw)?;
                minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .ok_or(ConfigError::Invalid {
                        var: "ESTATES_UTC_OFFSET_MINUTES",
                        value: raw,
                    })?
            }
            None => defaults.utc_offset,
        };

        let liked_query = match get("ESTATES_LIKED_QUERY").as_deref() {
            None | Some("flag") => LikedQuery::OnlyLikedFlag,
            Some("user") => LikedQuery::UserScoped {
                user: get("ESTATES_LIKED_USER").ok_or(ConfigError::Missing("ESTATES_LIKED_USER"))?,
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "ESTATES_LIKED_QUERY",
                    value: other.to_string(),
                })
            }
        };

        let page_size = parse_or("ESTATES_PAGE_SIZE", get("ESTATES_PAGE_SIZE"), defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::Invalid {
                var: "ESTATES_PAGE_SIZE",
                value: "0".into(),
            });
        }

        Ok(Self {
            graphql_url: get("ESTATES_GRAPHQL_URL").unwrap_or(defaults.graphql_url),
            api_token: get("ESTATES_API_TOKEN"),
            bind_addr: parse_or("ESTATES_BIND_ADDR", get("ESTATES_BIND_ADDR"), defaults.bind_addr)?,
            max_workers: parse_or("ESTATES_MAX_WORKERS", get("ESTATES_MAX_WORKERS"), defaults.max_workers)?,
            timeout_secs: parse_or("ESTATES_TIMEOUT_SECS", get("ESTATES_TIMEOUT_SECS"), defaults.timeout_secs)?,
            page_size,
            export_limit: parse_or("ESTATES_EXPORT_LIMIT", get("ESTATES_EXPORT_LIMIT"), defaults.export_limit)?,
            utc_offset,
            liked_query,
        })
    }
}

fn parse<T: FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
    })
}

fn parse_or<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(raw) => parse(var, &raw),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.graphql_url, "http://localhost:4000/graphql");
        assert_eq!(config.page_size, 30);
        assert_eq!(config.utc_offset.local_minus_utc(), 3600);
        assert_eq!(config.liked_query, LikedQuery::OnlyLikedFlag);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("ESTATES_GRAPHQL_URL", "https://api.example/graphql"),
            ("ESTATES_BIND_ADDR", "0.0.0.0:8080"),
            ("ESTATES_PAGE_SIZE", "12"),
            ("ESTATES_UTC_OFFSET_MINUTES", "120"),
            ("ESTATES_LIKED_QUERY", "user"),
            ("ESTATES_LIKED_USER", "lawrensylvan"),
        ]))
        .unwrap();

        assert_eq!(config.graphql_url, "https://api.example/graphql");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.page_size, 12);
        assert_eq!(config.utc_offset.local_minus_utc(), 7200);
        assert_eq!(
            config.liked_query,
            LikedQuery::UserScoped {
                user: "lawrensylvan".into()
            }
        );
    }

    #[test]
    fn user_mode_needs_a_user() {
        let err = Config::from_lookup(lookup(&[("ESTATES_LIKED_QUERY", "user")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("ESTATES_LIKED_USER"));
    }

    #[test]
    fn rejects_bad_values() {
        let err = Config::from_lookup(lookup(&[("ESTATES_MAX_WORKERS", "lots")])).unwrap_err();
        assert_eq!(err.to_string(), "ESTATES_MAX_WORKERS has an invalid value: 'lots'");

        assert!(Config::from_lookup(lookup(&[("ESTATES_PAGE_SIZE", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("ESTATES_LIKED_QUERY", "both")])).is_err());
    }

    #[test]
    fn rejects_offsets_out_of_range() {
        for minutes in ["2147483647", "-2147483648", "1440"] {
            let err = Config::from_lookup(lookup(&[("ESTATES_UTC_OFFSET_MINUTES", minutes)]))
                .unwrap_err();
            assert_eq!(
                err,
                ConfigError::Invalid {
                    var: "ESTATES_UTC_OFFSET_MINUTES",
                    value: minutes.to_string(),
                }
            );
        }

        let ok = Config::from_lookup(lookup(&[("ESTATES_UTC_OFFSET_MINUTES", "-300")])).unwrap();
        assert_eq!(ok.utc_offset.local_minus_utc(), -300 * 60);
    }
}
