//! Media-type header parsing and matching.
//!
//! # Matching Modes
//!
//! | Mode | `application/vnd.siren+json` | `application/vnd.siren+json; charset=utf-8` | `Application/Vnd.Siren+JSON` |
//! |------|:---:|:---:|:---:|
//! | strict | yes | no | no |
//! | lenient | yes | yes | yes |
//!
//! Strict matching is plain string equality and is what the client uses by
//! default. Servers that append parameters will be rejected in strict mode.
//!
//! # Examples
//!
//! ```
//! use siren_http::protocol::{is_siren_media_type, media_type_essence};
//!
//! assert!(is_siren_media_type("application/vnd.siren+json", true));
//! assert!(!is_siren_media_type("application/vnd.siren+json; charset=utf-8", true));
//! assert!(is_siren_media_type("application/vnd.siren+json; charset=utf-8", false));
//!
//! assert_eq!(media_type_essence(" Application/JSON ; charset=utf-8"), "application/json");
//! ```

use super::constants::MEDIA_TYPE;

/// Strip parameters and whitespace from a media type and lowercase it.
///
/// `text/html; charset=utf-8` becomes `text/html`.
pub fn media_type_essence(value: &str) -> String {
    value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Check whether a `content-type` header value denotes the Siren media type.
///
/// With `strict` the value must equal [`MEDIA_TYPE`] exactly; otherwise
/// parameters and letter case are ignored.
pub fn is_siren_media_type(value: &str, strict: bool) -> bool {
    if strict {
        value == MEDIA_TYPE
    } else {
        media_type_essence(value) == MEDIA_TYPE
    }
}
