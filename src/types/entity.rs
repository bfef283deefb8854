//! Entities and embedded sub-entities.

use super::{Action, Classes, Href, Link, Properties, Rels};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::{Deref, DerefMut};

/// A Siren document: properties, embedded entities, links and actions.
///
/// Entities form an owned tree. [`Entity::with_base_href`] walks the whole tree
/// and returns a resolved copy.
///
/// # Examples
///
/// ```
/// use siren_http::{Action, EmbeddedEntity, Entity, Href, Link, Rels};
///
/// let order = Entity::new()
///     .with_classes(["order"])
///     .with_property("orderNumber", 42)
///     .embed(EmbeddedEntity::link(Rels::from(["http://x.io/rels/order-items"]), "/orders/42/items"))
///     .with_link(Link::new(Rels::from(["self"]), "/orders/42"))
///     .with_action(Action::new("add-item", "POST", "/orders/42/items"));
///
/// let resolved = order.with_base_href(&Href::from("http://api.x.io"));
/// assert_eq!(resolved.link("self").unwrap().href, "http://api.x.io/orders/42");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class: Classes,

    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<EmbeddedEntity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
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

    /// Merge `props` into the existing properties, overwriting conflicting keys.
    pub fn with_properties(mut self, props: Properties) -> Self {
        self.properties.extend(props);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Append an embedded resource or link.
    pub fn embed(mut self, entity: EmbeddedEntity) -> Self {
        self.entities.push(entity);
        self
    }

    /// First link carrying `rel`.
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.rel.contains(rel))
    }

    /// All links carrying `rel`, in document order.
    pub fn links_by_rel<'a>(&'a self, rel: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |l| l.rel.contains(rel))
    }

    /// Action with the given name.
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name == name)
    }

    /// All embedded entities carrying `rel`, in document order.
    pub fn entities_by_rel<'a>(
        &'a self,
        rel: &'a str,
    ) -> impl Iterator<Item = &'a EmbeddedEntity> + 'a {
        self.entities.iter().filter(move |e| e.rel.contains(rel))
    }

    /// Resolve every href in the tree against `base`.
    ///
    /// Covers embedded entities (recursively), links, actions and all
    /// relations. The receiver is left untouched.
    #[must_use]
    pub fn with_base_href(&self, base: &Href) -> Entity {
        Entity {
            class: self.class.clone(),
            properties: self.properties.clone(),
            entities: self.entities.iter().map(|e| e.with_base_href(base)).collect(),
            links: self.links.iter().map(|l| l.with_base_href(base)).collect(),
            actions: self.actions.iter().map(|a| a.with_base_href(base)).collect(),
            title: self.title.clone(),
        }
    }
}

/// A resource or link embedded in a parent entity.
///
/// An embedded resource carries a full entity; an embedded link only carries
/// the link attributes (`href`, `rel`, `class`, `title`). Both require `rel`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedEntity {
    #[serde(default)]
    pub rel: Rels,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<Href>,

    #[serde(flatten)]
    pub entity: Entity,
}

impl EmbeddedEntity {
    /// An embedded resource.
    pub fn resource(rel: Rels) -> Self {
        EmbeddedEntity {
            rel,
            ..Default::default()
        }
    }

    /// An embedded link.
    pub fn link(rel: Rels, href: impl Into<Href>) -> Self {
        EmbeddedEntity {
            rel,
            href: Some(href.into()),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.entity = self.entity.with_title(title);
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entity = self.entity.with_classes(classes);
        self
    }

    pub fn with_properties(mut self, props: Properties) -> Self {
        self.entity = self.entity.with_properties(props);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entity = self.entity.with_property(key, value);
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.entity = self.entity.with_link(link);
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.entity = self.entity.with_action(action);
        self
    }

    pub fn embed(mut self, entity: EmbeddedEntity) -> Self {
        self.entity = self.entity.embed(entity);
        self
    }

    /// Resolve `href`, relations and the embedded subtree against `base`.
    #[must_use]
    pub fn with_base_href(&self, base: &Href) -> EmbeddedEntity {
        EmbeddedEntity {
            rel: self.rel.with_base_href(base),
            href: self.href.as_ref().map(|h| h.with_base_href(base)),
            entity: self.entity.with_base_href(base),
        }
    }
}

impl Deref for EmbeddedEntity {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.entity
    }
}

impl DerefMut for EmbeddedEntity {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}
