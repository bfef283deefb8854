//! Error types for Siren operations.
//!
//! This module defines every error a caller can observe when validating Siren
//! documents or talking to a Siren API. The [`Result`] type alias provides a
//! convenient shorthand for operations that may fail.
//!
//! # Error Categories
//!
//! | Category | Variants | Carries response |
//! |----------|----------|------------------|
//! | Structure | `Validation` | No |
//! | Network | `Transport` | No |
//! | Negotiation | `InvalidMediaType`, `InvalidEntity` | Yes |
//! | Submission | `UnsupportedEncoding`, `InvalidHref`, `InvalidMethod`, `Request`, `Json` | No |
//!
//! Nothing in this crate retries. Transport failures are surfaced as they came
//! out of the transport.
//!
//! # Examples
//!
//! ```
//! use siren_http::{Link, Rels, Validate};
//!
//! let link = Link::new(Rels::from(["self"]), "");
//! let err = link.validate().unwrap_err();
//! assert_eq!(err.to_string(), "Href: zero value");
//! ```

use crate::types::SirenResponse;
use std::fmt;
use thiserror::Error;

/// Result type for Siren operations.
pub type Result<T> = std::result::Result<T, SirenError>;

/// Boxed error produced by a [`Transport`](crate::client::Transport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Constraint that a field failed during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The field is required but empty.
    ZeroValue,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::ZeroValue => f.write_str("zero value"),
        }
    }
}

/// A required field is missing from a link, action, field or embedded entity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    /// Name of the offending field (`Rel`, `Href`, `Name`).
    pub field: &'static str,
    /// The constraint it violated.
    pub constraint: Constraint,
}

impl ValidationError {
    /// A required field was left empty.
    pub fn zero_value(field: &'static str) -> Self {
        ValidationError {
            field,
            constraint: Constraint::ZeroValue,
        }
    }
}

/// Errors that can occur while working with Siren documents and APIs.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SirenError {
    /// A document is structurally invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport failed before a response was received (DNS, connect, timeout).
    #[error(transparent)]
    Transport(BoxError),

    /// The response `content-type` is not the Siren media type.
    ///
    /// The body was not parsed; it is still available through [`SirenError::response`].
    #[error("invalid media type: {}", content_type.as_deref().unwrap_or("<none>"))]
    InvalidMediaType {
        /// The `content-type` the server sent, if any.
        content_type: Option<String>,
        /// The raw response.
        response: Box<SirenResponse>,
    },

    /// The response declared the Siren media type but is not a well-formed entity.
    #[error("invalid siren entity: {source}")]
    InvalidEntity {
        /// Decoding or validation failure.
        source: BoxError,
        /// The raw response.
        response: Box<SirenResponse>,
    },

    /// An action declares a request encoding this client cannot produce.
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// An href could not be parsed as an absolute URL.
    #[error("invalid href {href:?}: {source}")]
    InvalidHref {
        /// The href as declared.
        href: String,
        /// Parse failure.
        source: url::ParseError,
    },

    /// An action declares a method that is not a valid HTTP token.
    #[error("invalid method: {0}")]
    InvalidMethod(String),

    /// The outgoing request could not be assembled.
    #[error("request error: {0}")]
    Request(String),

    /// JSON serialization of a request body failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SirenError {
    /// Wrap a transport failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        SirenError::Transport(err.into())
    }

    /// The raw response attached to a negotiation failure.
    ///
    /// Only `InvalidMediaType` and `InvalidEntity` carry one.
    #[must_use]
    pub fn response(&self) -> Option<&SirenResponse> {
        match self {
            SirenError::InvalidMediaType { response, .. }
            | SirenError::InvalidEntity { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Consume the error, returning the attached response if there is one.
    #[must_use]
    pub fn into_response(self) -> Option<SirenResponse> {
        match self {
            SirenError::InvalidMediaType { response, .. }
            | SirenError::InvalidEntity { response, .. } => Some(*response),
            _ => None,
        }
    }

    /// Check if the transport failed.
    #[inline]
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, SirenError::Transport(_))
    }

    /// Check if the response had the wrong media type.
    #[inline]
    #[must_use]
    pub fn is_invalid_media_type(&self) -> bool {
        matches!(self, SirenError::InvalidMediaType { .. })
    }

    /// Check if the response body was not a valid entity.
    #[inline]
    #[must_use]
    pub fn is_invalid_entity(&self) -> bool {
        matches!(self, SirenError::InvalidEntity { .. })
    }
}
