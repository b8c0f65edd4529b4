// src/domain/fetch.rs

use std::error::Error;
use std::fmt;

/// Where a single backend fetch stands for the view that issued it.
#[derive(Debug)]
pub enum FetchState<T> {
    Loading,
    Failed(FetchError),
    Loaded(T),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(data) => FetchState::Loaded(data),
            Err(err) => FetchState::Failed(err),
        }
    }
}

/// The one way a fetch fails. `status_code` is only set when the backend
/// answered with a non-success HTTP status.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchError {
    pub message: String,
    pub status_code: Option<u16>,
    /// `errors[].message` reported by the backend, in order.
    pub server_messages: Vec<String>,
    /// Raw failure text: transport error, response body, decode error.
    pub detail: String,
}

impl FetchError {
    pub fn network(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self {
            message: format!("Network error: {detail}"),
            status_code: None,
            server_messages: Vec::new(),
            detail,
        }
    }

    pub fn http_status(status: u16, server_messages: Vec<String>, body: impl Into<String>) -> Self {
        Self {
            message: format!("Response not successful: Received status code {status}"),
            status_code: Some(status),
            server_messages,
            detail: body.into(),
        }
    }

    /// GraphQL-level errors delivered with a successful HTTP status.
    pub fn graphql(server_messages: Vec<String>) -> Self {
        let message = server_messages
            .first()
            .cloned()
            .unwrap_or_else(|| "Unknown GraphQL error".to_string());
        Self {
            detail: server_messages.join("\n"),
            message,
            status_code: None,
            server_messages,
        }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self {
            message: format!("Unexpected response shape: {detail}"),
            status_code: None,
            server_messages: Vec::new(),
            detail,
        }
    }

    /// Most specific text available: what the server said, else the raw detail.
    pub fn most_specific_message(&self) -> &str {
        self.server_messages
            .first()
            .map(String::as_str)
            .unwrap_or(&self.detail)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(status) => write!(f, "{} [{status}]", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl Error for FetchError {}
