//! Siren protocol constants.

/// The Siren media type, sent in `accept` and required in the response `content-type`.
pub const MEDIA_TYPE: &str = "application/vnd.siren+json";

/// Method used when an action does not declare one.
pub const DEFAULT_METHOD: &str = "GET";

/// `application/x-www-form-urlencoded`.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// `application/json`.
pub const JSON: &str = "application/json";

/// Encoding used when an action does not declare one.
pub const DEFAULT_TYPE: &str = FORM_URLENCODED;
