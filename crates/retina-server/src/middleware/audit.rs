use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// One structured event per request.
///
/// Logs the route template rather than the raw path, with the session id
/// pulled out as its own field. Bodies are never logged: they carry patient
/// details and reviewer feedback. Server errors are raised to `warn`.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| "<unmatched>".to_string());
    let session_id = session_id(req.uri().path());
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let session_id = session_id.map(|id| id.to_string());
    if status.is_server_error() {
        tracing::warn!(
            method = %method,
            route = %route,
            session_id = session_id.as_deref(),
            status = status.as_u16(),
            elapsed_ms,
            "request failed"
        );
    } else {
        tracing::info!(
            method = %method,
            route = %route,
            session_id = session_id.as_deref(),
            status = status.as_u16(),
            elapsed_ms,
            "request"
        );
    }

    response
}

/// The id segment of a `/sessions/{id}/...` path, when it parses.
fn session_id(path: &str) -> Option<Uuid> {
    let mut segments = path.trim_start_matches('/').split('/');
    match (segments.next(), segments.next()) {
        (Some("sessions"), Some(id)) => Uuid::parse_str(id).ok(),
        _ => None,
    }
}

