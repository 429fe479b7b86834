use axum::http::header;
use axum::response::IntoResponse;
use chrono::Utc;

pub mod assist;
pub mod finance;
pub mod pages;
pub mod posts;
pub mod tracker;

/// CSV download with a date-stamped filename.
pub(crate) fn csv_response(stem: &str, body: String) -> impl IntoResponse {
    let filename = crate::csv::export_filename(stem, Utc::now().date_naive());
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
}
