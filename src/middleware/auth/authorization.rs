use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::api::extractors::SecurityContext;
use crate::services::messages::Locale;
use crate::state::AppState;

use super::entry_point;

/// Enforce the access rules after the JWT filter has run.
///
/// Protected path + no SecurityContext → entry point (401). Everything else continues.
pub async fn authorize(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path();

    if state.access_rules.requires_authentication(path)
        && req.extensions().get::<SecurityContext>().is_none()
    {
        debug!(path = %path, method = %req.method(), "unauthenticated access to protected path");
        return entry_point::commence(Locale::from_headers(req.headers()));
    }

    next.run(req).await
}
