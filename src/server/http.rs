use anyhow::{Context, Result};
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::http::Uri;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;

use crate::api::handlers::handle_conversion;
use crate::api::protocol::ConversionResponse;

/// Query string as raw pairs, so repeated keys never reject the request.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// `GET /<text>?toCase=<CASE>`. The bare root is routed separately so that a
/// missing text still reaches the validator.
pub fn router() -> Router {
    Router::new()
        .route("/", get(convert_root))
        .route("/*text", get(convert_text))
}

/// Serve the conversion endpoint until Ctrl-C.
pub async fn run(addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn convert_root(query: QueryPairs) -> ConversionResponse {
    let to_case = first_to_case(query);
    tracing::debug!("← GET / toCase={:?}", to_case);
    handle_conversion("", to_case.as_deref())
}

async fn convert_text(
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
    query: QueryPairs,
) -> ConversionResponse {
    // Paths that do not decode to UTF-8 are converted as written.
    let text = match path {
        Ok(Path(text)) => text,
        Err(e) => {
            tracing::debug!("Using raw path: {e}");
            let raw = uri.path();
            raw.strip_prefix('/').unwrap_or(raw).to_string()
        }
    };
    let to_case = first_to_case(query);
    tracing::debug!("← GET /{} toCase={:?}", text, to_case);
    handle_conversion(&text, to_case.as_deref())
}

/// The first `toCase` value wins when the key is repeated.
fn first_to_case(query: QueryPairs) -> Option<String> {
    match query {
        Ok(Query(pairs)) => pairs
            .into_iter()
            .find(|(key, _)| key == "toCase")
            .map(|(_, value)| value),
        Err(e) => {
            tracing::debug!("Ignoring unreadable query string: {e}");
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
