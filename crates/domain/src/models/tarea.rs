//! Task domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use shared::validation::MAX_TAREA_TITLE_LENGTH;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use super::{double_option, merge};

/// Number of description characters kept in a task summary.
pub const SUMMARY_DESCRIPTION_CHARS: usize = 60;

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Baja,
    Media,
    Alta,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Baja => "baja",
            Priority::Media => "media",
            Priority::Alta => "alta",
        }
    }

    /// Numeric code stored in the `PrioridadTareas` column.
    pub fn as_i16(&self) -> i16 {
        match self {
            Priority::Baja => 0,
            Priority::Media => 1,
            Priority::Alta => 2,
        }
    }

    pub fn from_i16(code: i16) -> Option<Self> {
        match code {
            0 => Some(Priority::Baja),
            1 => Some(Priority::Media),
            2 => Some(Priority::Alta),
            _ => None,
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "baja" => Ok(Priority::Baja),
            "media" => Ok(Priority::Media),
            "alta" => Ok(Priority::Alta),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds the derived summary of a task from its title and description.
pub fn summarize(title: &str, description: Option<&str>) -> String {
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(desc) => format!(
            "{}: {}",
            title,
            shared::text::truncate_chars(desc, SUMMARY_DESCRIPTION_CHARS)
        ),
        None => title.to_string(),
    }
}

/// A task, optionally owned by a category.
///
/// `summary` is derived from the other fields whenever a `Tarea` is built
/// and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Tarea {
    pub id: Uuid,
    pub categoria_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub creation_date: Option<DateTime<Utc>>,
    summary: String,
}

impl Tarea {
    pub fn new(
        id: Uuid,
        categoria_id: Option<Uuid>,
        title: String,
        description: Option<String>,
        priority: Option<Priority>,
        creation_date: Option<DateTime<Utc>>,
    ) -> Self {
        let summary = summarize(&title, description.as_deref());
        Self {
            id,
            categoria_id,
            title,
            description,
            priority,
            creation_date,
            summary,
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

/// Request payload for creating a task.
///
/// There is no `summary` field; a `summary` key in the JSON body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct NewTarea {
    pub categoria_id: Option<Uuid>,

    #[validate(
        length(min = 1, max = MAX_TAREA_TITLE_LENGTH, message = "Title must be between 1 and 200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: String,

    pub description: Option<String>,

    pub priority: Option<Priority>,

    pub creation_date: Option<DateTime<Utc>>,
}

impl NewTarea {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn in_categoria(mut self, categoria_id: Uuid) -> Self {
        self.categoria_id = Some(categoria_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_creation_date(mut self, creation_date: DateTime<Utc>) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    pub fn into_tarea(self, id: Uuid) -> Tarea {
        Tarea::new(
            id,
            self.categoria_id,
            self.title,
            self.description,
            self.priority,
            self.creation_date,
        )
    }
}

/// Request payload for updating a task.
///
/// Absent fields keep their value. An explicit `null` clears a nullable
/// field; `"categoria_id": null` detaches the task from its category.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateTarea {
    #[serde(default, deserialize_with = "double_option")]
    pub categoria_id: Option<Option<Uuid>>,

    #[validate(
        length(min = 1, max = MAX_TAREA_TITLE_LENGTH, message = "Title must be between 1 and 200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub priority: Option<Option<Priority>>,

    #[serde(default, deserialize_with = "double_option")]
    pub creation_date: Option<Option<DateTime<Utc>>>,
}

impl UpdateTarea {
    /// Applies the update on top of an existing record, recomputing the summary.
    pub fn apply_to(self, current: Tarea) -> Tarea {
        Tarea::new(
            current.id,
            merge(self.categoria_id, current.categoria_id),
            self.title.unwrap_or(current.title),
            merge(self.description, current.description),
            merge(self.priority, current.priority),
            merge(self.creation_date, current.creation_date),
        )
    }
}
