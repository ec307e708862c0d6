//! Application serves the recipe browser pages on top of the [`Service`].

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod args;
pub mod config;
pub mod error;
pub mod live;
pub mod page;
pub mod render;
pub mod session;

use std::time::Duration;

use axum::{
    routing::{get, post},
    Extension, Router,
};
// Used in binary.
use axum_client_ip as _;
use tower_http as _;
use tracing_subscriber as _;

use self::page::login::RedirectDelay;

pub use self::{
    args::Args,
    config::Config,
    error::{AsError, Error},
    session::CurrentSession,
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<service::infra::DummyJson>;

/// Creates a [`Router`] serving the login and the recipes pages on top of
/// the provided [`Service`].
///
/// A successful login redirects to the recipes after the `redirect_delay`.
#[must_use]
pub fn app(service: Service, redirect_delay: Duration) -> Router {
    Router::new()
        .route("/", get(page::recipes::index))
        .route("/login", get(page::login::form).post(page::login::submit))
        .route("/logout", post(page::login::logout))
        .route("/live", get(live::connect))
        .route("/assets/app.js", get(page::script))
        .route("/assets/style.css", get(page::style))
        .layer(Extension(service))
        .layer(Extension(RedirectDelay(redirect_delay)))
}
