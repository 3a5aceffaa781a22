//! Task model and the authoritative task store.
//!
//! `TaskStore` is the sole mutator of the task collection. Every successful
//! mutation writes through to [`Storage`](crate::storage::Storage) before
//! returning; persistence failures are logged and never fail the in-memory
//! operation.

use serde::{Deserialize, Deserializer, Serialize};
use ulid::Ulid;

use crate::error::{Error, Result};
use crate::storage::Storage;

/// Task status column.
///
/// Unrecognized inbound values (foreign or corrupt data) are retained
/// verbatim in `Other` so persistence round-trips losslessly; such tasks
/// render in no column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Todo,
    Doing,
    Done,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Todo => "todo",
            Status::Doing => "doing",
            Status::Done => "done",
            Status::Other(value) => value,
        }
    }

    /// Whether this is one of the three board columns
    pub fn is_known(&self) -> bool {
        !matches!(self, Status::Other(_))
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "todo" => Status::Todo,
            "doing" => Status::Doing,
            "done" => Status::Done,
            _ => Status::Other(value),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = Error;

    /// Strict parse for user input; unknown statuses are never assigned
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" => Ok(Status::Todo),
            "doing" => Ok(Status::Doing),
            "done" => Ok(Status::Done),
            _ => Err(Error::InvalidArgument(format!(
                "invalid status '{}': must be todo, doing, or done",
                s
            ))),
        }
    }
}

/// Task priority.
///
/// Records missing the field decode as `Medium`; present-but-unrecognized
/// values are retained verbatim and sort after all recognized priorities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    Other(String),
}

impl Priority {
    /// Display ordering rank: High=1, Medium=2, Low=3, unrecognized last
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
            Priority::Other(_) => 4,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Other(value) => value,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Other(value),
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = Error;

    /// Strict parse for user input
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(Error::InvalidArgument(format!(
                "invalid priority '{}': must be high, medium, or low",
                s
            ))),
        }
    }
}

/// A single unit of work on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, immutable after creation
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
}

/// The remote endpoint's seed data uses numeric ids; fold them to strings.
fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Number(i64),
    }

    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(value) => value,
        IdRepr::Number(value) => value.to_string(),
    })
}

/// Partial update for a task; only present fields change
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

/// Generate a fresh task id: ULID time component plus random suffix,
/// rendered lowercase
pub fn generate_task_id() -> String {
    Ulid::new().to_string().to_lowercase()
}

/// Authoritative owner of the in-memory task collection
#[derive(Debug)]
pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            tasks: Vec::new(),
        }
    }

    /// Read-only view of the collection in insertion order
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Seed the collection wholesale from an external source.
    ///
    /// Entries are stored as decoded; serde-level defaults on `Task` are the
    /// only normalization applied.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.persist();
    }

    /// Create a task with a fresh id and normalized fields
    pub fn create(
        &mut self,
        title: &str,
        description: &str,
        status: Status,
        priority: Priority,
    ) -> Result<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::Validation("task title must not be empty".to_string()));
        }

        let mut id = generate_task_id();
        while self.tasks.iter().any(|task| task.id == id) {
            id = generate_task_id();
        }

        let index = self.tasks.len();
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            status,
            priority,
        });
        self.persist();

        Ok(&self.tasks[index])
    }

    /// Merge the provided fields into an existing task.
    ///
    /// On any error the collection is left untouched.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> Result<&Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;

        let title = match &patch.title {
            Some(title) => {
                let trimmed = title.trim();
                if trimmed.is_empty() {
                    return Err(Error::Validation("task title must not be empty".to_string()));
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        let task = &mut self.tasks[index];
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        self.persist();

        Ok(&self.tasks[index])
    }

    /// Remove a task by id
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
        self.tasks.remove(index);
        self.persist();
        Ok(())
    }

    /// Write-through to durable storage; failures are logged there and
    /// never surface here
    fn persist(&self) {
        self.storage.save_tasks(&self.tasks);
    }
}
