// errors.rs
use crate::domain::FetchError;
use std::fmt;

/// Errors that end a request with an error page instead of a view: routing,
/// bad parameters, spreadsheet generation, or a backend failure on a route
/// that has no inline error surface (exports).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Upstream(FetchError),
    XlsxError(String),
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Upstream(_) => 502,
            ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Upstream(err) => write!(f, "Listings backend error: {err}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Upstream(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FetchError> for ServerError {
    fn from(err: FetchError) -> Self {
        ServerError::Upstream(err)
    }
}
