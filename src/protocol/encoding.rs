//! Request encodings for action submission.
//!
//! | Encoding | Content type | Body |
//! |----------|--------------|------|
//! | [`Encoding::Form`] | `application/x-www-form-urlencoded` | `a=1&b=two` |
//! | [`Encoding::Json`] | `application/json` | `{"a":1,"b":"two"}` |
//!
//! `GET` submissions never use a body; their data goes through [`append_query`].

use super::constants::{FORM_URLENCODED, JSON};
use super::headers::media_type_essence;
use crate::error::{Result, SirenError};
use crate::types::Properties;
use bytes::Bytes;
use serde_json::Value;
use url::{form_urlencoded, Url};

/// A request body encoding the client knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Form,
    Json,
}

impl Encoding {
    /// Select the encoding for a declared content type.
    ///
    /// Parameters and letter case are ignored. Anything other than form or
    /// JSON is an [`SirenError::UnsupportedEncoding`].
    pub fn from_media_type(media_type: &str) -> Result<Self> {
        match media_type_essence(media_type).as_str() {
            FORM_URLENCODED => Ok(Encoding::Form),
            JSON => Ok(Encoding::Json),
            _ => Err(SirenError::UnsupportedEncoding(media_type.to_string())),
        }
    }

    /// Encode `data` as a request body.
    pub fn encode(self, data: &Properties) -> Result<Bytes> {
        match self {
            Encoding::Form => Ok(Bytes::from(encode_form(data))),
            Encoding::Json => Ok(Bytes::from(serde_json::to_vec(data)?)),
        }
    }
}

/// Format a value as a query or form parameter.
///
/// Strings are used as-is, `null` becomes empty, and everything else is
/// written as compact JSON.
pub fn param_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Percent-encode `data` as `application/x-www-form-urlencoded`.
pub fn encode_form(data: &Properties) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in data {
        serializer.append_pair(key, &param_value(value));
    }
    serializer.finish()
}

/// Add `data` to the query string of `url`.
///
/// Existing parameters are kept unless `data` has the same key, in which case
/// the value from `data` replaces them.
pub fn append_query(url: &mut Url, data: &Properties) {
    if data.is_empty() {
        return;
    }
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !data.contains_key(k.as_ref()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (key, value) in &kept {
        pairs.append_pair(key, value);
    }
    for (key, value) in data {
        pairs.append_pair(key, &param_value(value));
    }
}
