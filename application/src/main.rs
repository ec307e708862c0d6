use std::{io, sync::OnceLock, time::Duration};

use application::{Args, Config, Service};
use axum::{body::Body, extract::MatchedPath};
use axum_client_ip::InsecureClientIp;
use service::infra::DummyJson;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{self as log, Subscriber};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::MakeWriter,
    layer::{Layer, SubscriberExt as _},
    registry::LookupSpan,
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(log_layer(io::stdout, false))
        .with(log_layer(io::stderr, true))
        .init();

    _ = start().await;
}

/// Compact log layer writing events of the configured level into `writer`.
///
/// Only [`STDERR_LEVELS`] pass when `errors` is set, and only the others
/// pass otherwise.
fn log_layer<S, W>(writer: W, errors: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    tracing_subscriber::fmt::layer()
        .compact()
        .with_ansi(true)
        .with_thread_names(true)
        .with_writer(writer)
        .with_filter(filter_fn(move |meta| {
            let level = LOG_LEVEL.get().copied().unwrap_or(log::Level::INFO);
            meta.is_span()
                || (STDERR_LEVELS.contains(meta.level()) == errors
                    && level >= *meta.level())
        }))
}

async fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        server,
        service,
        source,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let source = DummyJson::new(&source.into()).map_err(|e| {
        log::error!("failed to initialize `DummyJson` client: {e}");
    })?;
    let service = Service::new(service.into(), source);

    let app = application::app(service, server.redirect_delay).layer(
        TraceLayer::new_for_http()
            .make_span_with(request_span)
            .on_response(record_response),
    );

    let listener = TcpListener::bind((server.host.clone(), server.port))
        .await
        .map_err(|e| {
            log::error!(
                "failed to listen on `{}:{}`: {e}",
                server.host,
                server.port,
            );
        })?;

    log::info!("listening on `{}:{}`", server.host, server.port);

    axum::serve(listener, app)
        .await
        .map_err(|e| log::error!("webserver failed: {e}"))
}

/// Creates a [`log::Span`] of the provided HTTP request.
fn request_span(req: &http::Request<Body>) -> log::Span {
    log::info_span!(
        "HTTP request",
        http.client_ip = InsecureClientIp::from(req.headers(), req.extensions())
            .map(|ip| ip.0.to_string())
            .ok(),
        http.flavor = ?req.version(),
        http.method = req.method().as_str(),
        http.route = req
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str),
        http.target = req
            .uri()
            .path_and_query()
            .map(http::uri::PathAndQuery::as_str),
        http.user_agent = req
            .headers()
            .get(http::header::USER_AGENT)
            .and_then(|h| h.to_str().ok()),
        http.status_code = log::field::Empty,
    )
}

/// Records the status and the duration of the provided HTTP response.
fn record_response(
    resp: &http::Response<Body>,
    dur: Duration,
    span: &log::Span,
) {
    let status = resp.status();
    _ = span.record("http.status_code", status.as_u16());

    let duration = format!("{}ms", dur.as_millis());
    if status.is_server_error() {
        log::error!(%duration);
    } else if status.is_client_error() {
        log::warn!(%duration);
    } else {
        log::info!(%duration);
    }
}
