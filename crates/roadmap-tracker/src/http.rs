//! Status and header handling common to every Tracker endpoint.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};

use crate::error::TrackerError;
use crate::pagination::Pagination;

pub const HEADER_TOTAL: &str = "X-Tracker-Pagination-Total";
pub const HEADER_LIMIT: &str = "X-Tracker-Pagination-Limit";
pub const HEADER_OFFSET: &str = "X-Tracker-Pagination-Offset";
pub const HEADER_RETURNED: &str = "X-Tracker-Pagination-Returned";

/// Wait used when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Pass a successful response through; turn anything else into an error.
///
/// 429 becomes [`TrackerError::RateLimited`]. Other failures become
/// [`TrackerError::Api`] carrying the Tracker's `error` text when the body
/// is a Tracker error document, else the raw body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TrackerError> {
    let status = resp.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(TrackerError::RateLimited {
            retry_after_secs: retry_after_secs(resp.headers()),
        });
    }
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), %body, "tracker request failed");
    Err(TrackerError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// `{"kind": "error", "error": "..."}` → the `error` text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|doc| doc.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Read the `X-Tracker-Pagination-*` headers of a paged response.
///
/// `returned` falls back to `page_len` when the header is absent; the other
/// three headers are required.
pub fn parse_pagination(headers: &HeaderMap, page_len: usize) -> Result<Pagination, TrackerError> {
    let returned = match header_u32(headers, HEADER_RETURNED)? {
        Some(returned) => returned,
        None => u32::try_from(page_len)
            .map_err(|_| TrackerError::Pagination(format!("page of {page_len} items")))?,
    };

    Ok(Pagination {
        total: required_u32(headers, HEADER_TOTAL)?,
        limit: required_u32(headers, HEADER_LIMIT)?,
        offset: required_u32(headers, HEADER_OFFSET)?,
        returned,
    })
}

fn required_u32(headers: &HeaderMap, name: &str) -> Result<u32, TrackerError> {
    header_u32(headers, name)?
        .ok_or_else(|| TrackerError::Pagination(format!("missing {name} header")))
}

fn header_u32(headers: &HeaderMap, name: &str) -> Result<Option<u32>, TrackerError> {
    let Some(value) = headers.get(name) else {
        return Ok(None);
    };
    value
        .to_str()
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .map(Some)
        .ok_or_else(|| TrackerError::Pagination(format!("{name} header is not a number")))
}
