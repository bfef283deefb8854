//! Structural validation of Siren documents.
//!
//! Validation is a depth-first walk over the owned tree. Embedded entities are
//! checked before the links and actions of their parent, and the first
//! violation aborts the walk. Nothing is mutated.
//!
//! | Node | Required |
//! |------|----------|
//! | [`Link`] | `rel`, `href` |
//! | [`Action`] | `name`, `href` (and every field) |
//! | [`ActionField`] | `name` |
//! | [`EmbeddedEntity`] | `rel` (and its subtree) |
//! | [`Entity`] | its subtree |

use crate::error::ValidationError;
use crate::types::{Action, ActionField, EmbeddedEntity, Entity, Link};

/// Types that can check their own structure.
pub trait Validate {
    /// Returns the first violated constraint, if any.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for Link {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.rel.is_empty() {
            return Err(ValidationError::zero_value("Rel"));
        }
        if self.href.is_empty() {
            return Err(ValidationError::zero_value("Href"));
        }
        Ok(())
    }
}

impl Validate for ActionField {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::zero_value("Name"));
        }
        Ok(())
    }
}

impl Validate for Action {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::zero_value("Name"));
        }
        if self.href.is_empty() {
            return Err(ValidationError::zero_value("Href"));
        }
        self.fields.iter().try_for_each(Validate::validate)
    }
}

impl Validate for EmbeddedEntity {
    fn validate(&self) -> Result<(), ValidationError> {
        self.entity.validate()?;
        if self.rel.is_empty() {
            return Err(ValidationError::zero_value("Rel"));
        }
        Ok(())
    }
}

impl Validate for Entity {
    fn validate(&self) -> Result<(), ValidationError> {
        self.entities.iter().try_for_each(Validate::validate)?;
        self.links.iter().try_for_each(Validate::validate)?;
        self.actions.iter().try_for_each(Validate::validate)
    }
}
