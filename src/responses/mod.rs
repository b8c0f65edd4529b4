pub mod download;
pub mod errors;
pub mod html;

pub use download::{download_response, XLSX_CONTENT_TYPE};
pub use errors::{error_response, ResultResp};
pub use html::{asset_response, html_response};
