//! Helpers shared by the client operations.
//!
//! - Merging action field defaults with caller data
//! - Media-type negotiation and entity decoding
//! - Deriving a base href from a request URL

use crate::error::{Result, SirenError};
use crate::protocol::is_siren_media_type;
use crate::types::{Action, Entity, Fetched, Href, Properties, SirenResponse};
use crate::validate::Validate;

/// Compute the data submitted for `action`.
///
/// Field defaults come first (fields without a value are skipped), then
/// `overrides` replace same-named entries and add undeclared ones.
///
/// # Examples
///
/// ```
/// use siren_http::{Action, ActionField, Properties};
/// use siren_http::client::effective_data;
///
/// let action = Action::new("add-item", "POST", "/orders/42/items")
///     .with_field(ActionField::new("orderNumber", "hidden").with_value(42))
///     .with_field(ActionField::new("quantity", "number"));
///
/// let mut overrides = Properties::new();
/// overrides.insert("quantity".into(), 3.into());
///
/// let data = effective_data(&action, &overrides);
/// assert_eq!(data["orderNumber"], 42);
/// assert_eq!(data["quantity"], 3);
/// ```
pub fn effective_data(action: &Action, overrides: &Properties) -> Properties {
    let mut data = Properties::new();
    for field in &action.fields {
        if let Some(value) = &field.value {
            data.insert(field.name.clone(), value.clone());
        }
    }
    for (key, value) in overrides {
        data.insert(key.clone(), value.clone());
    }
    data
}

/// Negotiate and decode a response into a validated entity.
///
/// The media type is checked first; a mismatch returns
/// [`SirenError::InvalidMediaType`] without touching the body. A body that
/// does not decode, or decodes into an invalid tree, returns
/// [`SirenError::InvalidEntity`]. Both keep the response; on success it is
/// returned alongside the entity whatever its status.
pub fn decode_entity(response: SirenResponse, strict_media_type: bool) -> Result<Fetched> {
    let content_type = response.content_type();
    if !content_type.is_some_and(|ct| is_siren_media_type(ct, strict_media_type)) {
        return Err(SirenError::InvalidMediaType {
            content_type: content_type.map(str::to_string),
            response: Box::new(response),
        });
    }

    let entity = match serde_json::from_slice::<Entity>(&response.body) {
        Ok(entity) => entity,
        Err(e) => {
            return Err(SirenError::InvalidEntity {
                source: Box::new(e),
                response: Box::new(response),
            })
        }
    };

    if let Err(e) = entity.validate() {
        return Err(SirenError::InvalidEntity {
            source: Box::new(e),
            response: Box::new(response),
        });
    }

    Ok(Fetched { entity, response })
}

/// Origin of `url` as a base href (`scheme://host[:port]`).
///
/// Returns `None` for URLs without a tuple origin such as `data:`.
pub fn origin_href(url: &url::Url) -> Option<Href> {
    let origin = url.origin();
    origin
        .is_tuple()
        .then(|| Href::from(origin.ascii_serialization()))
}
