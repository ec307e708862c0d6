//! HTML pages and static assets.

pub mod login;
pub mod recipes;

use axum::response::IntoResponse;

/// Client script forwarding DOM events to the [`live`] controller.
///
/// [`live`]: crate::live
const SCRIPT: &str = include_str!("../../assets/app.js");

/// Stylesheet of all the pages.
const STYLE: &str = include_str!("../../assets/style.css");

/// Serves the client script.
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
pub async fn script() -> impl IntoResponse {
    (
        [(http::header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT,
    )
}

/// Serves the stylesheet.
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
pub async fn style() -> impl IntoResponse {
    (
        [(http::header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLE,
    )
}
