use serde::{Deserialize, Serialize};
use std::fmt;

use super::id::record_id;

record_id! {
    /// Unique identifier for to-do items
    TodoId
}

/// An action item with an optional reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub task: String,
    /// The REST backend calls this `is_completed`
    #[serde(default, alias = "is_completed")]
    pub completed: bool,
    /// Days until due; negative means overdue
    #[serde(default)]
    pub reminder_days: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Todo {
    pub fn new(id: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            id: TodoId(id.into()),
            task: task.into(),
            completed: false,
            reminder_days: None,
            created_at: None,
        }
    }

    pub fn with_reminder(mut self, days: i64) -> Self {
        self.reminder_days = Some(days);
        self
    }

    pub fn done(mut self) -> Self {
        self.completed = true;
        self
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.task)
    }
}

/// Payload for creating a to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub task: String,
}

/// Partial update of a to-do item
///
/// `reminder_days: Some(None)` clears the reminder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub completed: Option<bool>,
    pub reminder_days: Option<Option<i64>>,
}

impl TodoPatch {
    pub fn completion(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    pub fn reminder(days: Option<i64>) -> Self {
        Self {
            reminder_days: Some(days),
            ..Self::default()
        }
    }

    /// Builds the JSON body, naming the completion column as the backend expects.
    pub fn to_json(&self, completed_field: &str) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        if let Some(completed) = self.completed {
            body.insert(completed_field.to_string(), completed.into());
        }
        if let Some(days) = self.reminder_days {
            body.insert("reminder_days".to_string(), days.into());
        }
        serde_json::Value::Object(body)
    }
}
