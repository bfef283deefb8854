//! Resource references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource reference that can be prefixed with a base href.
///
/// Only root-relative references (those starting with `/`) are rewritten.
/// Absolute URLs and IANA short relation names such as `self` or `next` pass
/// through resolution untouched.
///
/// # Examples
///
/// ```
/// use siren_http::Href;
///
/// let base = Href::from("https://api.example.com");
/// assert_eq!(Href::from("/search").with_base_href(&base), "https://api.example.com/search");
/// assert_eq!(Href::from("next").with_base_href(&base), "next");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Href(String);

impl Href {
    /// Create a new href.
    pub fn new(href: impl Into<String>) -> Self {
        Href(href.into())
    }

    /// Apply `base` to this href.
    ///
    /// The base is prepended verbatim when this href begins with `/`; no
    /// slash normalization takes place.
    #[must_use]
    pub fn with_base_href(&self, base: &Href) -> Href {
        if self.0.starts_with('/') {
            Href(format!("{}{}", base.0, self.0))
        } else {
            self.clone()
        }
    }

    /// Whether resolution would leave this href unchanged.
    #[inline]
    pub fn is_absolute(&self) -> bool {
        !self.0.starts_with('/')
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Href {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Href {
    fn from(s: &str) -> Self {
        Href(s.to_string())
    }
}

impl From<String> for Href {
    fn from(s: String) -> Self {
        Href(s)
    }
}

impl From<&String> for Href {
    fn from(s: &String) -> Self {
        Href(s.clone())
    }
}

impl PartialEq<str> for Href {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Href {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
