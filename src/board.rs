//! Projection of the task collection into ordered status columns.
//!
//! `project` is a pure function of the collection: it partitions by status,
//! orders each column by priority, and carries per-column counts for the
//! rendering layer. Tasks with an unrecognized status land in no column;
//! they stay in the store untouched.

use serde::Serialize;

use crate::task::{Status, Task};

/// Per-column task counts, consumed by column headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnCounts {
    pub todo: usize,
    pub doing: usize,
    pub done: usize,
}

impl ColumnCounts {
    pub fn total(&self) -> usize {
        self.todo + self.doing + self.done
    }
}

/// The derived, ordered, partitioned view of the task collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub todo: Vec<Task>,
    pub doing: Vec<Task>,
    pub done: Vec<Task>,
}

impl Projection {
    pub fn counts(&self) -> ColumnCounts {
        ColumnCounts {
            todo: self.todo.len(),
            doing: self.doing.len(),
            done: self.done.len(),
        }
    }
}

/// Partition tasks into status columns, each ordered by priority rank
/// (High, Medium, Low, then unrecognized). The sort is stable, so tasks of
/// equal priority keep their insertion order.
pub fn project(tasks: &[Task]) -> Projection {
    let mut projection = Projection::default();

    for task in tasks {
        match task.status {
            Status::Todo => projection.todo.push(task.clone()),
            Status::Doing => projection.doing.push(task.clone()),
            Status::Done => projection.done.push(task.clone()),
            Status::Other(_) => {
                tracing::debug!(id = %task.id, status = %task.status.as_str(),
                    "task has unrecognized status; excluded from board");
            }
        }
    }

    for column in [
        &mut projection.todo,
        &mut projection.doing,
        &mut projection.done,
    ] {
        column.sort_by_key(|task| task.priority.rank());
    }

    projection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    fn task(id: &str, status: Status, priority: Priority) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {id}"),
            description: String::new(),
            status,
            priority,
        }
    }

    #[test]
    fn partitions_by_status() {
        let tasks = vec![
            task("1", Status::Todo, Priority::Medium),
            task("2", Status::Done, Priority::Medium),
            task("3", Status::Doing, Priority::Medium),
            task("4", Status::Todo, Priority::Medium),
        ];

        let projection = project(&tasks);
        let counts = projection.counts();
        assert_eq!(counts.todo, 2);
        assert_eq!(counts.doing, 1);
        assert_eq!(counts.done, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn orders_columns_by_priority() {
        let tasks = vec![
            task("1", Status::Todo, Priority::Low),
            task("2", Status::Todo, Priority::High),
            task("3", Status::Todo, Priority::Medium),
        ];

        let projection = project(&tasks);
        let order: Vec<&str> = projection.todo.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec!["2", "3", "1"]);
    }

    #[test]
    fn equal_priorities_keep_insertion_order() {
        let tasks = vec![
            task("a", Status::Doing, Priority::Medium),
            task("b", Status::Doing, Priority::High),
            task("c", Status::Doing, Priority::Medium),
            task("d", Status::Doing, Priority::Medium),
        ];

        let projection = project(&tasks);
        let order: Vec<&str> = projection.doing.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn unrecognized_priority_sorts_last() {
        let tasks = vec![
            task("1", Status::Todo, Priority::Other("urgent".to_string())),
            task("2", Status::Todo, Priority::Low),
        ];

        let projection = project(&tasks);
        let order: Vec<&str> = projection.todo.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec!["2", "1"]);
    }

    #[test]
    fn unknown_status_lands_in_no_column() {
        let tasks = vec![
            task("1", Status::Other("blocked".to_string()), Priority::High),
            task("2", Status::Todo, Priority::Medium),
        ];

        let projection = project(&tasks);
        assert_eq!(projection.counts().total(), 1);
        assert_eq!(projection.todo[0].id, "2");
    }

    #[test]
    fn projection_is_idempotent() {
        let tasks = vec![
            task("1", Status::Todo, Priority::Low),
            task("2", Status::Doing, Priority::High),
            task("3", Status::Other("archived".to_string()), Priority::Medium),
        ];

        assert_eq!(project(&tasks), project(&tasks));
    }
}
