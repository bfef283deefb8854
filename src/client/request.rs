//! Outgoing request construction.
//!
//! # Submission Flow
//!
//! 1. Seed the data with each field's default `value`, then overlay the
//!    caller's overrides (extra keys are kept)
//! 2. `GET`: append the data to the href's query string, no body
//! 3. Otherwise: encode the data per the action's type (form or JSON)
//! 4. Send `accept: application/vnd.siren+json` and `content-type: <type>`

use super::utils::effective_data;
use crate::error::{Result, SirenError};
use crate::protocol::{append_query, Encoding, MEDIA_TYPE};
use crate::types::{Action, Properties};
use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::Method;
use url::Url;

/// Parse an href into an absolute URL.
pub fn parse_url(href: &str) -> Result<Url> {
    Url::parse(href).map_err(|source| SirenError::InvalidHref {
        href: href.to_string(),
        source,
    })
}

/// Parse a declared method, normalizing its case.
pub fn parse_method(method: &str) -> Result<Method> {
    Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|_| SirenError::InvalidMethod(method.to_string()))
}

/// Build a bodiless `GET` for `href`.
pub fn build_get(href: &str, accept: &str) -> Result<http::Request<Bytes>> {
    let url = parse_url(href)?;
    http::Request::builder()
        .method(Method::GET)
        .uri(url.as_str())
        .header(ACCEPT, accept)
        .body(Bytes::new())
        .map_err(|e| SirenError::Request(e.to_string()))
}

/// Build the request that submits `action` with the caller's `overrides`.
///
/// Fails with [`SirenError::UnsupportedEncoding`] when a non-`GET` action
/// declares a type other than form-urlencoded or JSON.
pub fn build_submit(action: &Action, overrides: &Properties) -> Result<http::Request<Bytes>> {
    let mut url = parse_url(action.href.as_str())?;
    let method = parse_method(action.method())?;
    let media_type = action.media_type();
    let data = effective_data(action, overrides);

    let body = if method == Method::GET {
        append_query(&mut url, &data);
        Bytes::new()
    } else {
        Encoding::from_media_type(media_type)?.encode(&data)?
    };

    http::Request::builder()
        .method(method)
        .uri(url.as_str())
        .header(ACCEPT, MEDIA_TYPE)
        .header(CONTENT_TYPE, media_type)
        .body(body)
        .map_err(|e| SirenError::Request(e.to_string()))
}
