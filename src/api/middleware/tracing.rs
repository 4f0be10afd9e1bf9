//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Trace layer type produced by [`layer`].
pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// - span at `INFO` with method, URI and version
/// - response at `INFO` with status and latency in milliseconds
/// - 5xx responses (e.g. `502 UPSTREAM_ERROR`) additionally at `ERROR`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/beneficial-owners/1234563218 version=HTTP/1.1}: finished processing request latency=412 ms status=200
/// ERROR request{method=GET uri=/beneficial-owners/1234563218 version=HTTP/1.1}: response failed classification=Status code: 502 Bad Gateway latency=30001 ms
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
