use std::sync::Arc;

use log::{debug, info};

use crate::base::repository::TodoRepository;
use crate::error::{Result, ValidationError};
use crate::models::{NewTodo, Todo, TodoId, TodoPatch};

/// Which reminder distances count as "soon"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStyle {
    /// Only 1 day out is soon
    Simple,
    /// 1 and 2 days out are soon
    Extended,
}

/// How loudly a due status should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Critical,
    Warning,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    DueToday,
    DueIn(i64),
}

impl DueStatus {
    pub fn label(&self) -> String {
        match self {
            DueStatus::Overdue => "Overdue".to_string(),
            DueStatus::DueToday => "Due Today".to_string(),
            DueStatus::DueIn(1) => "Due in 1 day".to_string(),
            DueStatus::DueIn(days) => format!("Due in {days} days"),
        }
    }

    pub fn urgency(&self, style: DueStyle) -> Urgency {
        match (self, style) {
            (DueStatus::Overdue | DueStatus::DueToday, _) => Urgency::Critical,
            (DueStatus::DueIn(1), _) => Urgency::Warning,
            (DueStatus::DueIn(2), DueStyle::Extended) => Urgency::Warning,
            (DueStatus::DueIn(_), _) => Urgency::Normal,
        }
    }
}

/// Due status of an open item with a reminder; `None` otherwise.
pub fn due_status(todo: &Todo) -> Option<DueStatus> {
    if todo.completed {
        return None;
    }
    todo.reminder_days.map(|days| match days {
        d if d < 0 => DueStatus::Overdue,
        0 => DueStatus::DueToday,
        d => DueStatus::DueIn(d),
    })
}

/// Open items first; among those, items with a reminder first, soonest
/// first. The sort is stable, so equal keys keep their input order.
pub fn prioritize_todos(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by_key(|todo| match (todo.completed, todo.reminder_days) {
        (true, _) => (2, 0),
        (false, Some(days)) => (0, days),
        (false, None) => (1, 0),
    });
    sorted
}

/// Parses the reminder field: blank clears it, otherwise a whole number.
pub fn parse_reminder(input: &str) -> std::result::Result<Option<i64>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidReminder(trimmed.to_string()))
}

/// Manages action items; every write is followed by a full refetch
#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// All items in priority order.
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let todos = self.repository.list_todos().await?;
        debug!("Fetched {} todos", todos.len());
        Ok(prioritize_todos(&todos))
    }

    pub async fn add_todo(&self, input: &str) -> Result<Vec<Todo>> {
        let task = input.trim();
        if task.is_empty() {
            return Err(ValidationError::Empty("task").into());
        }
        info!("Adding todo {:?}", task);
        self.repository
            .create_todo(&NewTodo { task: task.to_string() })
            .await?;
        self.list_todos().await
    }

    pub async fn toggle_todo(&self, todo: &Todo) -> Result<Vec<Todo>> {
        info!("Marking todo {} completed={}", todo.id, !todo.completed);
        self.repository
            .update_todo(&todo.id, &TodoPatch::completion(!todo.completed))
            .await?;
        self.list_todos().await
    }

    pub async fn set_reminder(&self, id: &TodoId, input: &str) -> Result<Vec<Todo>> {
        let days = parse_reminder(input)?;
        info!("Setting reminder of todo {} to {:?}", id, days);
        self.repository
            .update_todo(id, &TodoPatch::reminder(days))
            .await?;
        self.list_todos().await
    }

    pub async fn delete_todo(&self, id: &TodoId) -> Result<Vec<Todo>> {
        info!("Deleting todo {}", id);
        self.repository.delete_todo(id).await?;
        self.list_todos().await
    }
}
