//! Embedded static frontend assets.
//!
//! The HTML, CSS, and JS files from `frontend/` are compiled into the binary
//! using `include_str!`, enabling single-binary deployment. The overlay
//! keyframes are rendered into the page once, on first request.

use axum::{
    Router,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use scrollfolio_sequence::OVERLAY_SECTIONS;
use std::sync::LazyLock;
use tracing::warn;

/// The embedded frontend files.
const INDEX_HTML: &str = include_str!("../../../frontend/index.html");
const STYLE_CSS: &str = include_str!("../../../frontend/style.css");
const APP_JS: &str = include_str!("../../../frontend/app.js");

const OVERLAY_PLACEHOLDER: &str = "__OVERLAY_SECTIONS__";

static INDEX: LazyLock<String> = LazyLock::new(|| {
    let sections = serde_json::to_string(&OVERLAY_SECTIONS).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to encode overlay sections");
        "[]".into()
    });
    INDEX_HTML.replace(OVERLAY_PLACEHOLDER, &sections)
});

/// Build a router that serves the embedded frontend.
pub fn frontend_router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/static/style.css", get(css_handler))
        .route("/static/app.js", get(js_handler))
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX.as_str())
}

async fn css_handler() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLE_CSS,
    )
        .into_response()
}

async fn js_handler() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
        .into_response()
}
