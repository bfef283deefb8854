//! Actions and their input fields.

use super::{Classes, Href};
use crate::protocol::{DEFAULT_METHOD, DEFAULT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A description of an operation the client may execute.
///
/// `method` and `type` are optional on the wire. [`Action::method`] and
/// [`Action::media_type`] compute the protocol defaults (`GET` and
/// `application/x-www-form-urlencoded`) at read time without storing them.
///
/// # Examples
///
/// ```
/// use siren_http::{Action, ActionField};
///
/// let action = Action::new("add-item", "POST", "/orders/42/items")
///     .with_field(ActionField::new("orderNumber", "hidden").with_value(42))
///     .with_field(ActionField::new("productCode", "text"));
///
/// assert_eq!(action.method(), "POST");
/// assert_eq!(action.media_type(), "application/x-www-form-urlencoded");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub href: Href,

    /// Declared HTTP method, if any.
    #[serde(rename = "method", default, skip_serializing_if = "Option::is_none")]
    pub declared_method: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ActionField>,

    /// Declared request encoding, if any.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class: Classes,
}

impl Action {
    pub fn new(name: impl Into<String>, method: impl Into<String>, href: impl Into<Href>) -> Self {
        let method = method.into();
        Action {
            name: name.into(),
            href: href.into(),
            declared_method: (!method.is_empty()).then_some(method),
            ..Default::default()
        }
    }

    /// The method to submit with, falling back to `GET`.
    pub fn method(&self) -> &str {
        match self.declared_method.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => DEFAULT_METHOD,
        }
    }

    /// The request encoding, falling back to form-urlencoded.
    pub fn media_type(&self) -> &str {
        match self.declared_type.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => DEFAULT_TYPE,
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&ActionField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Set the request encoding, replacing any previous value.
    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.declared_type = Some(media_type.into());
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

    /// Append a field.
    pub fn with_field(mut self, field: ActionField) -> Self {
        self.fields.push(field);
        self
    }

    /// Resolve `href` against `base`.
    #[must_use]
    pub fn with_base_href(&self, base: &Href) -> Action {
        Action {
            href: self.href.with_base_href(base),
            ..self.clone()
        }
    }
}

/// A single input of an [`Action`].
///
/// `value` is the default submitted when the caller does not override it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionField {
    #[serde(default)]
    pub name: String,

    /// Input type hint (`text`, `hidden`, `number`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class: Classes,
}

impl ActionField {
    pub fn new(name: impl Into<String>, input_type: impl Into<String>) -> Self {
        let input_type = input_type.into();
        ActionField {
            name: name.into(),
            input_type: (!input_type.is_empty()).then_some(input_type),
            ..Default::default()
        }
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

    /// Set the default value. `Value::Null` clears it.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.value = (!value.is_null()).then_some(value);
        self
    }
}
