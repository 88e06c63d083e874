//! Category domain models.

use serde::{Deserialize, Serialize};
use shared::validation::MAX_CATEGORIA_NAME_LENGTH;
use uuid::Uuid;
use validator::Validate;

use super::{double_option, merge};

/// A category that owns zero or more tasks.
///
/// The owned tasks are not carried on the record; they are fetched with an
/// explicit lookup by `categoria_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Categoria {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Only stored with schema version `v2`.
    pub weight: Option<i32>,
}

/// Request payload for creating a category.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct NewCategoria {
    #[validate(
        length(min = 1, max = MAX_CATEGORIA_NAME_LENGTH, message = "Name must be between 1 and 150 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: String,

    pub description: Option<String>,

    pub weight: Option<i32>,
}

impl NewCategoria {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Builds the record that will be stored under `id`.
    pub fn into_categoria(self, id: Uuid) -> Categoria {
        Categoria {
            id,
            name: self.name,
            description: self.description,
            weight: self.weight,
        }
    }
}

/// Request payload for updating a category.
///
/// Absent fields keep their value. An explicit `null` clears `description`
/// or `weight`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateCategoria {
    #[validate(
        length(min = 1, max = MAX_CATEGORIA_NAME_LENGTH, message = "Name must be between 1 and 150 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub weight: Option<Option<i32>>,
}

impl UpdateCategoria {
    /// Applies the update on top of an existing record. The id never changes.
    pub fn apply_to(self, current: Categoria) -> Categoria {
        Categoria {
            id: current.id,
            name: self.name.unwrap_or(current.name),
            description: merge(self.description, current.description),
            weight: merge(self.weight, current.weight),
        }
    }
}
