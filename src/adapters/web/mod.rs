//! Web server adapter.
//!
//! Axum web server with an HTMX frontend: the investment form, the dependent
//! item option list, and the valuation result with its chart.

mod error;
mod handlers;
mod templates;

pub use error::WebError;
pub use handlers::*;
pub use templates::*;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::ports::catalog_port::CatalogPort;

pub struct AppState {
    pub catalog_port: Arc<dyn CatalogPort + Send + Sync>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/items", get(handlers::item_options))
        .route("/valuate", post(handlers::valuate))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(handlers::not_found)
        .with_state(Arc::new(state))
}

fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("HX-Request").is_some()
}
