use crate::domain::FetchError;
use crate::errors::ServerError;
use maud::{html, Markup, DOCTYPE};

/// Statuses with their own presentation; everything else is generic.
const MAPPED_STATUSES: [u16; 3] = [500, 404, 403];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    Code(u16),
    Generic,
}

impl ErrorStatus {
    pub fn from_code(code: Option<u16>) -> Self {
        match code {
            Some(code) if MAPPED_STATUSES.contains(&code) => ErrorStatus::Code(code),
            _ => ErrorStatus::Generic,
        }
    }

    /// Value of the `data-status` attribute: the code, or `error`.
    pub fn as_attr(&self) -> String {
        match self {
            ErrorStatus::Code(code) => code.to_string(),
            ErrorStatus::Generic => "error".to_string(),
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ErrorStatus::Code(403) => "🔒",
            ErrorStatus::Code(404) => "🔍",
            ErrorStatus::Code(_) => "🛠",
            ErrorStatus::Generic => "⚠️",
        }
    }
}

/// What the user sees when a fetch fails: replaces the whole results view.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSurface {
    pub title: String,
    pub subtitle: String,
    pub status: ErrorStatus,
}

impl From<&FetchError> for ErrorSurface {
    fn from(err: &FetchError) -> Self {
        Self {
            title: err.message.clone(),
            subtitle: err.most_specific_message().to_string(),
            status: ErrorStatus::from_code(err.status_code),
        }
    }
}

impl ErrorSurface {
    pub fn from_server_error(err: &ServerError) -> Self {
        match err {
            ServerError::Upstream(fetch) => Self::from(fetch),
            ServerError::NotFound => Self {
                title: "Not Found".into(),
                subtitle: "There is nothing at this address.".into(),
                status: ErrorStatus::Code(404),
            },
            ServerError::BadRequest(msg) => Self {
                title: "Bad Request".into(),
                subtitle: msg.clone(),
                status: ErrorStatus::Generic,
            },
            other => Self {
                title: other.to_string(),
                subtitle: String::new(),
                status: ErrorStatus::from_code(Some(other.status())),
            },
        }
    }
}

pub fn error_surface(surface: &ErrorSurface) -> Markup {
    html! {
        div class="result-panel" data-status=(surface.status.as_attr()) role="alert" {
            div class="result-icon" { (surface.status.icon()) }
            @if let ErrorStatus::Code(code) = surface.status {
                div class="result-code" { (code) }
            }
            h2 class="result-title" { (surface.title) }
            @if !surface.subtitle.is_empty() {
                p class="result-subtitle" { (surface.subtitle) }
            }
        }
    }
}

/// Standalone page for errors that end the request.
pub fn error_document(surface: &ErrorSurface) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error – " (surface.title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                main class="container" {
                    (error_surface(surface))
                    p { a href="/" { "← Back to home" } }
                }
            }
        }
    }
}
