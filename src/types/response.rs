//! Raw HTTP response as seen by the client.

use super::Entity;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::ops::Deref;

/// HTTP response handed back by a [`Transport`](crate::client::Transport).
///
/// Header names are stored lowercase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SirenResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Bytes,
}

impl SirenResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        SirenResponse {
            status,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(http::header::CONTENT_TYPE.as_str())
    }

    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A decoded entity together with the response it arrived in.
///
/// A server may answer with a Siren body under any status (`201 Created` with a
/// `location`, `422` with an error entity), so the status and headers travel
/// with the entity. Dereferences to the [`Entity`].
#[derive(Clone, Debug, PartialEq)]
pub struct Fetched {
    pub entity: Entity,
    pub response: SirenResponse,
}

impl Fetched {
    #[inline]
    pub fn status(&self) -> u16 {
        self.response.status
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.response.is_success()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.response.header(name)
    }

    /// The `location` header, as sent by `201 Created` replies.
    pub fn location(&self) -> Option<&str> {
        self.header(http::header::LOCATION.as_str())
    }

    pub fn into_entity(self) -> Entity {
        self.entity
    }

    pub fn into_parts(self) -> (Entity, SirenResponse) {
        (self.entity, self.response)
    }
}

impl Deref for Fetched {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let res = SirenResponse::new(200, "{}").with_header("Content-Type", "application/vnd.siren+json");
        assert_eq!(res.content_type(), Some("application/vnd.siren+json"));
        assert_eq!(res.header("CONTENT-TYPE"), Some("application/vnd.siren+json"));
        assert!(res.is_success());
        assert_eq!(res.body_str(), Some("{}"));
    }

    #[test]
    fn test_fetched_exposes_status_and_location() {
        let fetched = Fetched {
            entity: Entity::new().with_classes(["error"]),
            response: SirenResponse::new(422, "{}").with_header("Location", "/orders/99"),
        };
        assert_eq!(fetched.status(), 422);
        assert!(!fetched.is_success());
        assert_eq!(fetched.location(), Some("/orders/99"));
        assert_eq!(fetched.class, vec!["error"]);
        let (entity, response) = fetched.into_parts();
        assert_eq!(entity.class, vec!["error"]);
        assert_eq!(response.status, 422);
    }
}
