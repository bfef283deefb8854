//! Links to related resources.

use super::{Classes, Href, Rels};
use serde::{Deserialize, Serialize};

/// A pointer to a related resource.
///
/// `rel` and `href` are required; [`Validate`](crate::Validate) reports an
/// empty value for either.
///
/// # Examples
///
/// ```
/// use siren_http::{Link, Rels};
///
/// let link = Link::new(Rels::from(["next"]), "/orders/43")
///     .with_title("Next order")
///     .with_classes(["order"]);
/// assert_eq!(link.title.as_deref(), Some("Next order"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub rel: Rels,

    #[serde(default)]
    pub href: Href,

    /// Media type of the linked resource.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class: Classes,
}

impl Link {
    pub fn new(rel: Rels, href: impl Into<Href>) -> Self {
        Link {
            rel,
            href: href.into(),
            ..Default::default()
        }
    }

    /// Set the media type, replacing any previous value.
    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Set the title, replacing any previous value.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append class names.
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Resolve `href` and every relation against `base`.
    #[must_use]
    pub fn with_base_href(&self, base: &Href) -> Link {
        Link {
            rel: self.rel.with_base_href(base),
            href: self.href.with_base_href(base),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let link = Link::new(Rels::from(["self"]), "/")
            .with_type("a")
            .with_type("text/plain")
            .with_title("a")
            .with_title("b")
            .with_classes(["a", "b"])
            .with_classes(["c"]);
        assert_eq!(link.media_type.as_deref(), Some("text/plain"));
        assert_eq!(link.title.as_deref(), Some("b"));
        assert_eq!(link.class, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_with_base_href() {
        let link = Link::new(Rels::from(["self", "/rels/order"]), "/orders/42");
        let resolved = link.with_base_href(&Href::from("https://api.example.com"));
        assert_eq!(resolved.href, "https://api.example.com/orders/42");
        assert_eq!(resolved.rel, Rels::from(["self", "https://api.example.com/rels/order"]));
        assert_eq!(link.href, "/orders/42");
    }

    #[test]
    fn test_optional_fields_omitted() {
        let link = Link::new(Rels::from(["self"]), "/");
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json, serde_json::json!({"rel": ["self"], "href": "/"}));
    }

    #[test]
    fn test_deserialize_type_field() {
        let link: Link =
            serde_json::from_str(r#"{"rel":["next"],"href":"/x","type":"text/html"}"#).unwrap();
        assert_eq!(link.media_type.as_deref(), Some("text/html"));
    }
}
