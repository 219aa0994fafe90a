/// Page Status - Existence Check Rules
///
/// Turns the result of a `prop=info` query for a WikiProject page into one
/// outcome. Rules are applied in order, the first match wins:
///
/// 1. the request failed, or the response has no `query` / no pages: `Error`
/// 2. the page is flagged `missing`: `Missing`
/// 3. a redirect was followed to reach the page: `Redirect`
/// 4. the content is shorter than the threshold: `TooShort`
/// 5. otherwise: `Ok`

use std::fmt;

use crate::shared::error::ApiError;
use crate::shared::protocol::{InfoPage, QueryResponse};

/// Outcome of checking one WikiProject page
#[derive(Debug)]
pub enum PageStatus {
    Ok { length: u64 },
    Missing,
    Redirect { target: String },
    TooShort { length: u64 },
    Error(ApiError),
}

impl PageStatus {
    /// Everything except `Ok` counts as an issue
    pub fn is_issue(&self) -> bool {
        !matches!(self, PageStatus::Ok { .. })
    }

    /// Short label for summaries
    pub fn label(&self) -> &'static str {
        match self {
            PageStatus::Ok { .. } => "ok",
            PageStatus::Missing => "missing",
            PageStatus::Redirect { .. } => "redirect",
            PageStatus::TooShort { .. } => "too-short",
            PageStatus::Error(_) => "error",
        }
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageStatus::Ok { length } => write!(f, "ok ({} chars)", length),
            PageStatus::Missing => f.write_str("missing"),
            PageStatus::Redirect { target } => write!(f, "redirect to {}", target),
            PageStatus::TooShort { length } => write!(f, "too short ({} chars)", length),
            PageStatus::Error(e) => write!(f, "error: {}", e),
        }
    }
}

/// Classifies a page info lookup
pub fn classify(
    response: Result<QueryResponse<InfoPage>, ApiError>,
    min_length: u64,
) -> PageStatus {
    let response = match response {
        Ok(response) => response,
        Err(e) => return PageStatus::Error(e),
    };

    let Some(page) = response.first_page() else {
        let reason = if response.query.is_none() {
            "no query in response"
        } else {
            "no pages in response"
        };
        return PageStatus::Error(ApiError::Malformed(reason.to_string()));
    };

    if page.missing {
        return PageStatus::Missing;
    }

    if let Some(target) = response.redirect_target() {
        return PageStatus::Redirect {
            target: target.to_string(),
        };
    }

    match page.length {
        Some(length) if length < min_length => PageStatus::TooShort { length },
        Some(length) => PageStatus::Ok { length },
        None => PageStatus::Error(ApiError::Malformed(format!(
            "no length for {}",
            page.title
        ))),
    }
}
