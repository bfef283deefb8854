//! Link relations.

use super::Href;
use serde::{Deserialize, Serialize};

/// An ordered collection of link relations.
///
/// Members are either short names registered with IANA (`self`, `next`, ...)
/// or application-specific URLs. Resolution only rewrites the root-relative
/// ones, so short names survive untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rels(Vec<Href>);

impl Rels {
    pub fn new() -> Self {
        Rels(Vec::new())
    }

    /// Apply `base` to every root-relative member.
    #[must_use]
    pub fn with_base_href(&self, base: &Href) -> Rels {
        Rels(self.0.iter().map(|rel| rel.with_base_href(base)).collect())
    }

    /// Check whether `rel` is one of the relations.
    pub fn contains(&self, rel: &str) -> bool {
        self.0.iter().any(|r| r.as_str() == rel)
    }

    pub fn push(&mut self, rel: impl Into<Href>) {
        self.0.push(rel.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Href> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Href>> for Rels {
    fn from(rels: Vec<Href>) -> Self {
        Rels(rels)
    }
}

impl<const N: usize> From<[&str; N]> for Rels {
    fn from(rels: [&str; N]) -> Self {
        Rels(rels.into_iter().map(Href::from).collect())
    }
}

impl<H: Into<Href>> FromIterator<H> for Rels {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Rels(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Rels {
    type Item = &'a Href;
    type IntoIter = std::slice::Iter<'a, Href>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
