//! The HTTP transport the client dispatches through.
//!
//! Connection pooling, TLS, redirects, timeouts and cancellation all live
//! behind this trait. The client sends exactly one request per operation and
//! never retries.

use crate::error::{Result, SirenError};
use crate::types::SirenResponse;
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::BTreeMap;

/// Sends a single HTTP request and returns the full response.
///
/// Implementations report connection-level failures as
/// [`SirenError::Transport`]. Non-2xx statuses are responses, not errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: http::Request<Bytes>) -> Result<SirenResponse>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn send(&self, request: http::Request<Bytes>) -> Result<SirenResponse> {
        let request = reqwest::Request::try_from(request).map_err(SirenError::transport)?;
        let response = self.execute(request).await.map_err(SirenError::transport)?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.bytes().await.map_err(SirenError::transport)?;

        Ok(SirenResponse {
            status,
            headers,
            body,
        })
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: http::Request<Bytes>) -> Result<SirenResponse> {
        (**self).send(request).await
    }
}

/// Flatten a header map into lowercase names; non-UTF-8 values are dropped.
///
/// For repeated headers the first value is kept, matching
/// [`http::HeaderMap::get`].
pub(crate) fn collect_headers(map: &http::HeaderMap) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    for (k, v) in map {
        if let Ok(val) = v.to_str() {
            headers
                .entry(k.as_str().to_string())
                .or_insert_with(|| val.to_string());
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_headers() {
        let mut map = http::HeaderMap::new();
        map.insert(http::header::CONTENT_TYPE, "text/plain".parse().unwrap());
        let headers = collect_headers(&map);
        assert_eq!(headers.get("content-type").map(String::as_str), Some("text/plain"));
    }

    #[test]
    fn test_collect_headers_keeps_first_duplicate() {
        let mut map = http::HeaderMap::new();
        map.append(http::header::CONTENT_TYPE, "application/vnd.siren+json".parse().unwrap());
        map.append(http::header::CONTENT_TYPE, "text/html".parse().unwrap());
        map.append(http::header::LOCATION, "/orders/99".parse().unwrap());
        let headers = collect_headers(&map);
        assert_eq!(
            headers.get("content-type").map(String::as_str),
            Some("application/vnd.siren+json")
        );
        assert_eq!(headers.get("location").map(String::as_str), Some("/orders/99"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = reqwest::Client::new();
        let request = http::Request::get("http://127.0.0.1:1/").body(Bytes::new()).unwrap();
        let err = client.send(request).await.unwrap_err();
        assert!(err.is_transport());
    }
}
