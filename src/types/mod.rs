//! Core Siren document types.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Href`] | Resource reference, resolvable against a base href |
//! | [`Rels`] | Ordered link-relation identifiers |
//! | [`Link`] | Pointer to a related resource |
//! | [`Action`] / [`ActionField`] | Executable operation and its inputs |
//! | [`Entity`] / [`EmbeddedEntity`] | The document and its sub-resources |
//! | [`SirenResponse`] | Raw HTTP response as returned by a transport |
//! | [`Fetched`] | Decoded entity plus the response that carried it |
//!
//! Resolution never mutates: every `with_base_href` returns a new value, so a
//! resolved tree and its source stay independently usable.

mod action;
mod entity;
mod href;
mod link;
mod rels;
mod response;

pub use action::{Action, ActionField};
pub use entity::{EmbeddedEntity, Entity};
pub use href::Href;
pub use link::Link;
pub use rels::Rels;
pub use response::{Fetched, SirenResponse};

/// Class names describing the nature of an entity, link, action or field.
pub type Classes = Vec<String>;

/// Custom attributes of an entity.
pub type Properties = serde_json::Map<String, serde_json::Value>;
