#![doc = include_str!("../README.md")]

//! # Siren: hypermedia entities over HTTP
//!
//! This crate implements a client-side model and execution engine for
//! [Siren](https://github.com/kevinswiber/siren), a JSON convention for
//! representing REST resources as self-describing entities with embedded
//! sub-resources, links and executable actions.
//!
//! ## Overview
//!
//! 1. **Href resolution** - Root-relative references are prefixed with a base
//!    href; absolute URLs and IANA relation names are left alone
//! 2. **Validation** - Depth-first structural checks across nested entities,
//!    links, actions and fields, failing on the first violation
//! 3. **Action submission** - The action's method and type decide whether data
//!    goes in the query string, a form body or a JSON body
//!
//! ## Building documents
//!
//! ```
//! use siren_http::{Action, ActionField, EmbeddedEntity, Entity, Href, Link, Rels, Validate};
//!
//! let order = Entity::new()
//!     .with_classes(["order"])
//!     .with_property("orderNumber", 42)
//!     .with_property("status", "pending")
//!     .embed(
//!         EmbeddedEntity::resource(Rels::from(["http://x.io/rels/customer"]))
//!             .with_classes(["info", "customer"])
//!             .with_property("customerId", "pj123")
//!             .with_link(Link::new(Rels::from(["self"]), "/customers/pj123")),
//!     )
//!     .with_action(
//!         Action::new("add-item", "POST", "/orders/42/items")
//!             .with_title("Add Item")
//!             .with_field(ActionField::new("orderNumber", "hidden").with_value(42))
//!             .with_field(ActionField::new("productCode", "text")),
//!     )
//!     .with_link(Link::new(Rels::from(["self"]), "/orders/42"));
//!
//! order.validate().unwrap();
//!
//! let resolved = order.with_base_href(&Href::from("http://api.x.io"));
//! assert_eq!(resolved.entities[0].links[0].href, "http://api.x.io/customers/pj123");
//! ```
//!
//! ## Client Usage
//!
//! ```ignore
//! use siren_http::{Properties, SirenClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SirenClient::new();
//!     let order = client.get("http://api.x.io/orders/42").await?;
//!
//!     let mut data = Properties::new();
//!     data.insert("productCode".into(), "abc".into());
//!     let items = client.submit(order.action("add-item").unwrap(), &data).await?;
//!
//!     println!("{} {:?}", items.status(), items.class);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[types]** - Siren document types (Entity, Link, Action, Href, ...)
//! - **[validate]** - Structural validation
//! - **[error]** - Error types and result handling
//! - **[client]** - HTTP client and transport
//! - **[protocol]** - Media type, defaults and request encodings

pub mod client;
pub mod error;
pub mod protocol;
pub mod types;
pub mod validate;

pub use client::{ClientConfig, SirenClient, Transport};
pub use error::{Result, SirenError, ValidationError};
pub use protocol::MEDIA_TYPE;
pub use types::{
    Action, ActionField, Classes, EmbeddedEntity, Entity, Fetched, Href, Link, Properties, Rels,
    SirenResponse,
};
pub use validate::Validate;
