//! Main Siren HTTP client implementation.
//!
//! # Examples
//!
//! ## Entry point and navigation
//!
//! ```ignore
//! use siren_http::SirenClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SirenClient::new();
//!     let order = client.get("http://api.x.io/orders/42").await?;
//!
//!     if let Some(next) = order.link("next") {
//!         let next_order = client.follow(next).await?;
//!         println!("{:?}", next_order.properties);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Submitting an action
//!
//! ```ignore
//! use siren_http::{Properties, SirenClient};
//!
//! let action = order.action("add-item").unwrap();
//! let mut data = Properties::new();
//! data.insert("productCode".into(), "abc".into());
//! data.insert("quantity".into(), 2.into());
//!
//! let created = client.submit(action, &data).await?;
//! println!("{} {:?}", created.status(), created.location());
//! ```

use super::config::ClientConfig;
use super::request::{build_get, build_submit, parse_url};
use super::transport::Transport;
use super::utils::{decode_entity, origin_href};
use crate::error::Result;
use crate::protocol::MEDIA_TYPE;
use crate::types::{Action, Fetched, Link, Properties};
use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;

/// The Siren HTTP client.
///
/// Every operation performs exactly one round trip through the transport.
/// There is no retry, cache or internal mutable state, so a client can be
/// cloned and used from concurrent tasks freely.
///
/// Every operation returns a [`Fetched`]: the decoded entity plus the
/// response it came in, so status and headers such as `location` stay
/// reachable. Decoded entities are validated and, unless
/// [`ClientConfig::resolve_hrefs`] is off, resolved against
/// [`ClientConfig::base_href`] or the origin of the request URL.
#[derive(Clone)]
pub struct SirenClient<T = reqwest::Client> {
    transport: T,
    config: Arc<ClientConfig>,
}

impl SirenClient {
    /// Create a new client with default configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client backed by reqwest, configured from `config`.
    pub fn with_config(config: ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_default();

        SirenClient::with_transport(client, config)
    }
}

impl Default for SirenClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> SirenClient<T> {
    /// Create a client that dispatches through `transport`.
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        SirenClient {
            transport,
            config: Arc::new(config),
        }
    }

    /// Fetch the entity at `href`.
    ///
    /// Typically used for the API entry point; prefer [`follow`](Self::follow)
    /// when navigating from there.
    pub async fn get(&self, href: &str) -> Result<Fetched> {
        let request = build_get(href, MEDIA_TYPE)?;
        self.dispatch(request).await
    }

    /// Fetch the entity behind `link`.
    ///
    /// The link's declared media type, if any, is sent as `accept`; the
    /// response must still be a Siren entity.
    pub async fn follow(&self, link: &Link) -> Result<Fetched> {
        let accept = link.media_type.as_deref().unwrap_or(MEDIA_TYPE);
        let request = build_get(link.href.as_str(), accept)?;
        self.dispatch(request).await
    }

    /// Submit `action` with `overrides` layered over the field defaults.
    ///
    /// Any status carrying a Siren body is returned as `Ok`; check
    /// [`Fetched::status`] to tell `201 Created` from a `422` error entity.
    pub async fn submit(&self, action: &Action, overrides: &Properties) -> Result<Fetched> {
        let request = self.prepare_submit(action, overrides)?;
        self.dispatch(request).await
    }

    /// Build the request [`submit`](Self::submit) would send, without sending it.
    pub fn prepare_submit(
        &self,
        action: &Action,
        overrides: &Properties,
    ) -> Result<http::Request<Bytes>> {
        build_submit(action, overrides)
    }

    async fn dispatch(&self, request: http::Request<Bytes>) -> Result<Fetched> {
        let url = parse_url(&request.uri().to_string())?;
        if self.config.enable_logging {
            tracing::debug!(method = %request.method(), url = %url, "sending siren request");
        }

        let response = self.transport.send(request).await?;
        if self.config.enable_logging {
            tracing::debug!(status = response.status, url = %url, "received response");
        }

        let fetched = decode_entity(response, self.config.strict_media_type).map_err(|e| {
            if self.config.enable_logging {
                tracing::warn!(url = %url, "rejected response: {}", e);
            }
            e
        })?;

        if !self.config.resolve_hrefs {
            return Ok(fetched);
        }
        let base = self.config.base_href.clone().or_else(|| origin_href(&url));
        Ok(match base {
            Some(base) => Fetched {
                entity: fetched.entity.with_base_href(&base),
                response: fetched.response,
            },
            None => fetched,
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SirenError;
    use crate::types::{ActionField, Href, Rels, SirenResponse};
    use async_trait::async_trait;
    use http::header::{ACCEPT, CONTENT_TYPE};
    use parking_lot::Mutex;
    use serde_json::json;

    /// Records requests and answers each with a canned response.
    struct Recorder {
        requests: Mutex<Vec<http::Request<Bytes>>>,
        response: SirenResponse,
    }

    impl Recorder {
        fn new(response: SirenResponse) -> Self {
            Recorder {
                requests: Mutex::new(Vec::new()),
                response,
            }
        }

        fn last(&self) -> http::Request<Bytes> {
            let requests = self.requests.lock();
            let req = requests.last().expect("no request sent");
            let mut copy = http::Request::new(req.body().clone());
            *copy.method_mut() = req.method().clone();
            *copy.uri_mut() = req.uri().clone();
            *copy.headers_mut() = req.headers().clone();
            copy
        }
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn send(&self, request: http::Request<Bytes>) -> Result<SirenResponse> {
            self.requests.lock().push(request);
            Ok(self.response.clone())
        }
    }

    struct Refused;

    #[async_trait]
    impl Transport for Refused {
        async fn send(&self, _request: http::Request<Bytes>) -> Result<SirenResponse> {
            Err(SirenError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    fn order_response() -> SirenResponse {
        let body = json!({
            "class": ["order"],
            "properties": {"orderNumber": 42},
            "links": [{"rel": ["self"], "href": "/orders/42"}],
            "actions": [{"name": "add-item", "method": "POST", "href": "/orders/42/items"}]
        });
        SirenResponse::new(200, body.to_string()).with_header("content-type", MEDIA_TYPE)
    }

    fn client(response: SirenResponse) -> SirenClient<Arc<Recorder>> {
        SirenClient::with_transport(Arc::new(Recorder::new(response)), ClientConfig::default())
    }

    fn data(value: serde_json::Value) -> Properties {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_client_creation() {
        let client = SirenClient::new();
        assert!(client.config().strict_media_type);
    }

    #[tokio::test]
    async fn test_get_sends_accept_and_resolves_against_origin() {
        let client = client(order_response());
        let entity = client.get("http://api.x.io/orders/42").await.unwrap();

        let req = client.transport().last();
        assert_eq!(req.method(), http::Method::GET);
        assert_eq!(req.headers()[ACCEPT], MEDIA_TYPE);
        assert!(req.body().is_empty());

        assert_eq!(entity.class, vec!["order"]);
        assert_eq!(entity.link("self").unwrap().href, "http://api.x.io/orders/42");
        assert_eq!(entity.action("add-item").unwrap().href, "http://api.x.io/orders/42/items");
    }

    #[tokio::test]
    async fn test_configured_base_href() {
        let config = ClientConfig {
            base_href: Some(Href::from("https://public.example.com/api")),
            ..Default::default()
        };
        let client = SirenClient::with_transport(Arc::new(Recorder::new(order_response())), config);
        let entity = client.get("http://10.0.0.1/orders/42").await.unwrap();
        assert_eq!(entity.link("self").unwrap().href, "https://public.example.com/api/orders/42");
    }

    #[tokio::test]
    async fn test_resolution_disabled() {
        let config = ClientConfig {
            resolve_hrefs: false,
            ..Default::default()
        };
        let client = SirenClient::with_transport(Arc::new(Recorder::new(order_response())), config);
        let entity = client.get("http://api.x.io/orders/42").await.unwrap();
        assert_eq!(entity.link("self").unwrap().href, "/orders/42");
    }

    #[tokio::test]
    async fn test_follow_uses_link_href_and_type() {
        let client = client(order_response());
        let link = Link::new(Rels::from(["next"]), "http://api.x.io/orders/43");
        client.follow(&link).await.unwrap();
        let req = client.transport().last();
        assert_eq!(req.uri(), "http://api.x.io/orders/43");
        assert_eq!(req.headers()[ACCEPT], MEDIA_TYPE);

        let typed = link.with_type("application/vnd.siren+json; profile=order");
        client.follow(&typed).await.unwrap();
        assert_eq!(
            client.transport().last().headers()[ACCEPT],
            "application/vnd.siren+json; profile=order"
        );
    }

    #[tokio::test]
    async fn test_submit_get_uses_query() {
        let client = client(order_response());
        let action = Action::new("search", "GET", "http://api.x.io/entity");
        client.submit(&action, &data(json!({"foo": "bar"}))).await.unwrap();

        let req = client.transport().last();
        assert_eq!(req.method(), http::Method::GET);
        assert_eq!(req.uri(), "http://api.x.io/entity?foo=bar");
        assert!(req.body().is_empty());
    }

    #[tokio::test]
    async fn test_submit_post_form() {
        let client = client(order_response());
        let action = Action::new("create", "POST", "http://api.x.io/entity");
        client.submit(&action, &data(json!({"foo": "bar"}))).await.unwrap();

        let req = client.transport().last();
        assert_eq!(req.method(), http::Method::POST);
        assert_eq!(req.body(), &Bytes::from("foo=bar"));
        assert_eq!(req.headers()[CONTENT_TYPE], "application/x-www-form-urlencoded");
        assert_eq!(req.headers()[ACCEPT], MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_submit_patch_json() {
        let client = client(order_response());
        let action = Action::new("update", "PATCH", "http://api.x.io/entity").with_type("application/json");
        client.submit(&action, &data(json!({"foo": "bar"}))).await.unwrap();

        let req = client.transport().last();
        assert_eq!(req.method(), http::Method::PATCH);
        let body: serde_json::Value = serde_json::from_slice(req.body()).unwrap();
        assert_eq!(body, json!({"foo": "bar"}));
    }

    #[tokio::test]
    async fn test_submit_merges_defaults() {
        let client = client(order_response());
        let action = Action::new("create", "POST", "http://api.x.io/entity")
            .with_field(ActionField::new("foo", "text").with_value("bar"));
        client.submit(&action, &data(json!({"foo": "baz"}))).await.unwrap();
        assert_eq!(client.transport().last().body(), &Bytes::from("foo=baz"));
    }

    #[tokio::test]
    async fn test_submit_unsupported_encoding_sends_nothing() {
        let client = client(order_response());
        let action = Action::new("upload", "POST", "http://api.x.io/entity").with_type("text/csv");
        let err = client.submit(&action, &Properties::new()).await.unwrap_err();
        assert!(matches!(err, SirenError::UnsupportedEncoding(_)));
        assert!(client.transport().requests.lock().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_media_type() {
        let response = SirenResponse::new(200, "not json").with_header("content-type", "text/plain");
        let client = client(response);
        let err = client.get("http://api.x.io/not-json").await.unwrap_err();
        assert!(err.is_invalid_media_type());
        assert_eq!(err.into_response().unwrap().body, Bytes::from("not json"));
    }

    #[tokio::test]
    async fn test_invalid_entity() {
        let response = SirenResponse::new(200, r#"{"class":1}"#).with_header("content-type", MEDIA_TYPE);
        let client = client(response);
        let err = client.get("http://api.x.io/not-valid-siren").await.unwrap_err();
        assert!(err.is_invalid_entity());
        assert!(!err.is_invalid_media_type());
    }

    #[tokio::test]
    async fn test_transport_error_is_surfaced() {
        let client = SirenClient::with_transport(Refused, ClientConfig::default());
        let err = client.get("http://api.x.io/").await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[tokio::test]
    async fn test_submit_keeps_status_and_headers() {
        let body = json!({"class": ["error"], "properties": {"reason": "out of stock"}});
        let response = SirenResponse::new(422, body.to_string())
            .with_header("content-type", MEDIA_TYPE)
            .with_header("location", "/orders/99");
        let client = client(response);
        let action = Action::new("add-item", "POST", "http://api.x.io/orders/42/items");
        let fetched = client.submit(&action, &data(json!({"productCode": "abc"}))).await.unwrap();

        assert_eq!(fetched.status(), 422);
        assert!(!fetched.is_success());
        assert_eq!(fetched.location(), Some("/orders/99"));
        assert_eq!(fetched.response.header("Location"), Some("/orders/99"));
        assert_eq!(fetched.class, vec!["error"]);
        assert_eq!(fetched.properties["reason"], "out of stock");
    }

    #[tokio::test]
    async fn test_get_returns_response_with_resolved_entity() {
        let client = client(order_response().with_header("etag", "\"v1\""));
        let (entity, response) = client.get("http://api.x.io/orders/42").await.unwrap().into_parts();
        assert_eq!(response.status, 200);
        assert_eq!(response.header("etag"), Some("\"v1\""));
        assert_eq!(entity.link("self").unwrap().href, "http://api.x.io/orders/42");
    }

    /// Collects formatted log output for the current thread.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    async fn rejected_get_output(enable_logging: bool) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let config = ClientConfig {
            enable_logging,
            ..Default::default()
        };
        let response = SirenResponse::new(404, "404 page not found").with_header("content-type", "text/plain");
        let client = SirenClient::with_transport(Recorder::new(response), config);
        assert!(client.get("http://api.x.io/missing").await.is_err());

        let out = captured.0.lock().clone();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_logging_disabled_emits_nothing() {
        assert_eq!(rejected_get_output(false).await, "");
    }

    #[tokio::test]
    async fn test_logging_enabled_reports_rejection() {
        let out = rejected_get_output(true).await;
        assert!(out.contains("sending siren request"));
        assert!(out.contains("rejected response"));
    }
}
