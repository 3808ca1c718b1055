//! `fetch`-backed [`Transport`] via `gloo-net`.
//!
//! Client-side (csr): real HTTP calls. Native builds (tests, tooling) have no
//! `fetch` and answer every request with [`TransportError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use cybernet::net::transport::{ApiRequest, ApiResponse, Transport, TransportError};

/// Stateless `fetch` transport. Cookies follow the browser's same-origin
/// default, which is what keeps the session alive.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use cybernet::net::transport::Method;
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            let builder = request.headers.iter().fold(builder, |b, (name, value)| b.header(name, value));
            let built = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(network_error)?;

            let resp = built.send().await.map_err(network_error)?;
            let status = resp.status();
            // A body that cannot be read is treated like an empty one; the
            // status still decides success.
            let body = resp.text().await.unwrap_or_default();
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            tracing::debug!(method = %request.method, url = %request.url, "no fetch outside the browser");
            Err(TransportError::Unavailable)
        }
    }
}

/// `gloo-net` errors carry the browser's message ("Failed to fetch", ...).
#[cfg(any(test, feature = "csr"))]
fn network_error(err: impl std::fmt::Display) -> TransportError {
    TransportError::Network(err.to_string())
}
