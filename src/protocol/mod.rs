//! Protocol constants, media-type negotiation and request body encodings.
//!
//! # Module Organization
//!
//! ```text
//! protocol/
//! ├── constants - Media types, default method and encoding
//! ├── headers   - Media-type parsing and matching
//! └── encoding  - Form and JSON request bodies, query strings
//! ```

pub mod constants;
pub mod encoding;
pub mod headers;

pub use constants::*;
pub use encoding::{append_query, Encoding};
pub use headers::{is_siren_media_type, media_type_essence};
