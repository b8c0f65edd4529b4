use crate::errors::ServerError;
use crate::templates::components::error::{error_document, ErrorSurface};
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a full HTML error page with the matching status.
pub fn error_response(err: ServerError) -> Response {
    let status = err.status();
    let surface = ErrorSurface::from_server_error(&err);
    let html = error_document(&surface).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
