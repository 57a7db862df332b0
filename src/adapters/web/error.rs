//! HTTP error responses for the web adapter.

use askama::Template;
use axum::{
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::domain::error::HindsightError;

use super::is_htmx_request;

/// An error response that knows whether it was triggered by an HTMX request,
/// so it can render either a fragment or a full page.
#[derive(Debug)]
pub struct WebError {
    pub status: StatusCode,
    pub message: String,
    htmx: bool,
}

impl WebError {
    pub fn new(headers: &HeaderMap, status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            htmx: is_htmx_request(headers),
        }
    }

    pub fn bad_request(headers: &HeaderMap, message: impl Into<String>) -> Self {
        Self::new(headers, StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(headers: &HeaderMap, message: impl Into<String>) -> Self {
        Self::new(headers, StatusCode::NOT_FOUND, message)
    }

    pub fn internal(headers: &HeaderMap, message: impl Into<String>) -> Self {
        Self::new(headers, StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn from_domain(headers: &HeaderMap, err: HindsightError) -> Self {
        Self::new(headers, status_from_error(&err), err.to_string())
    }
}

pub fn status_from_error(err: &HindsightError) -> StatusCode {
    match err {
        HindsightError::MissingSelection { .. }
        | HindsightError::InvalidAmount { .. }
        | HindsightError::YearOutOfRange { .. } => StatusCode::BAD_REQUEST,
        HindsightError::UnknownCategory { .. }
        | HindsightError::UnknownItem { .. }
        | HindsightError::MissingYearData { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        HindsightError::CatalogParse { .. }
        | HindsightError::CatalogInvalid { .. }
        | HindsightError::ConfigParse { .. }
        | HindsightError::ConfigMissing { .. }
        | HindsightError::ConfigInvalid { .. }
        | HindsightError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let template = super::templates::ErrorTemplate {
            message: &self.message,
            status: self.status.as_u16(),
        };
        let content = match template.render() {
            Ok(html) => html,
            Err(_) => return (self.status, self.message).into_response(),
        };

        if self.htmx {
            return (self.status, Html(content)).into_response();
        }

        let page = super::templates::BasePage {
            title: "Error",
            content: &content,
        };
        match page.render() {
            Ok(html) => (self.status, Html(html)).into_response(),
            Err(_) => (self.status, Html(content)).into_response(),
        }
    }
}
