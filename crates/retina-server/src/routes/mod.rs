use axum::http::header;
use axum::response::{IntoResponse, Response};

pub mod export;
pub mod generate;
pub mod health;
pub mod options;
pub mod records;
pub mod sessions;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// A downloadable body with a suggested file name.
pub(crate) fn attachment(filename: &str, content_type: &str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}
