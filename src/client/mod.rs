//! Siren HTTP client implementation.
//!
//! This module provides the client that consumes Siren APIs, enabling callers to:
//!
//! - **Fetch** an entry-point entity
//! - **Follow** links to related resources
//! - **Submit** actions, encoding data as a query string, form body or JSON body
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch     - SirenClient and its operations
//! ├── request   - Outgoing request construction
//! ├── transport - Transport trait and the reqwest implementation
//! ├── config    - Client configuration
//! └── utils     - Data merging, negotiation and decoding
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SirenClient`] | Main client |
//! | [`ClientConfig`] | Client configuration options |
//! | [`Transport`] | Pluggable HTTP transport |
//!
//! # Examples
//!
//! ## Creating a Client
//!
//! ```
//! use siren_http::client::{ClientConfig, SirenClient};
//!
//! // Default configuration
//! let client = SirenClient::new();
//!
//! // Custom configuration
//! let config = ClientConfig {
//!     request_timeout_ms: 5_000,
//!     strict_media_type: false,
//!     ..Default::default()
//! };
//! let client = SirenClient::with_config(config);
//! ```
//!
//! ## Inspecting a submission
//!
//! ```
//! use siren_http::{Action, Properties, SirenClient};
//!
//! let client = SirenClient::new();
//! let action = Action::new("search", "GET", "https://api.example.com/entity");
//!
//! let mut data = Properties::new();
//! data.insert("foo".into(), "bar".into());
//!
//! let request = client.prepare_submit(&action, &data).unwrap();
//! assert_eq!(request.uri(), "https://api.example.com/entity?foo=bar");
//! assert!(request.body().is_empty());
//! ```

mod config;
mod fetch;
mod request;
mod transport;
mod utils;

pub use config::ClientConfig;
pub use fetch::SirenClient;
pub use request::{build_get, build_submit, parse_method, parse_url};
pub use transport::Transport;
pub use utils::{decode_entity, effective_data, origin_href};
