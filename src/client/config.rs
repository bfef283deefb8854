//! Configuration for the Siren HTTP client.
//!
//! # Configuration Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `request_timeout_ms` | 30000 | Request timeout of the default transport |
//! | `pool_idle_timeout_secs` | 90 | Idle connection lifetime of the default transport |
//! | `user_agent` | `siren_http/<version>` | `user-agent` of the default transport |
//! | `base_href` | `None` | Base applied to decoded entities (request origin when unset) |
//! | `resolve_hrefs` | `true` | Resolve root-relative hrefs in decoded entities |
//! | `strict_media_type` | `true` | Require the exact Siren `content-type` |
//! | `enable_logging` | `false` | Emit per-request `tracing` events |
//!
//! # Examples
//!
//! ```
//! use siren_http::client::ClientConfig;
//!
//! let config = ClientConfig {
//!     strict_media_type: false,
//!     ..Default::default()
//! };
//! assert!(config.resolve_hrefs);
//! ```

use crate::types::Href;

/// Configuration for [`SirenClient`](super::SirenClient).
///
/// Timeouts and pooling only affect the reqwest transport built by
/// [`SirenClient::with_config`](super::SirenClient::with_config). A custom
/// transport is configured by whoever builds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u64,

    /// How long idle pooled connections are kept, in seconds.
    pub pool_idle_timeout_secs: u64,

    pub user_agent: String,

    /// Base href applied to every decoded entity.
    ///
    /// When `None`, the origin of the request URL (`scheme://host[:port]`) is used.
    pub base_href: Option<Href>,

    /// Resolve root-relative hrefs in decoded entities.
    pub resolve_hrefs: bool,

    /// Require the response `content-type` to equal the Siren media type exactly.
    ///
    /// When `false`, media-type parameters such as `charset` and letter case
    /// are ignored.
    pub strict_media_type: bool,

    /// Enable request logging.
    ///
    /// When enabled, logs request/response details using the `tracing` crate.
    pub enable_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 30_000,
            pool_idle_timeout_secs: 90,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            base_href: None,
            resolve_hrefs: true,
            strict_media_type: true,
            enable_logging: false,
        }
    }
}
