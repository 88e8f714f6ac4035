use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Represents a task as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier for the task (UUID v4, assigned at creation).
    pub id: Uuid,
    /// The title of the task. Immutable after creation.
    pub title: String,
    /// The description of the task.
    pub description: String,
    /// Whether the task is done.
    pub completion: bool,
    /// Identifier of the owning user. `None` means the task is unassigned.
    /// A weak reference: the id may point at a user that no longer exists.
    pub user_id: Option<i64>,
}

/// Input structure for creating a task. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
}

/// Input structure for the partial task update. Absent fields keep their
/// current value; the title cannot be changed.
#[derive(Debug, Deserialize)]
pub struct TaskUpdate {
    pub description: Option<String>,
    pub completion: Option<bool>,
}

impl Task {
    /// Creates a new `Task` from `TaskInput`, owned by `user_id`.
    /// Assigns a fresh UUID and starts with `completion` false.
    pub fn new(input: TaskInput, user_id: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            completion: false,
            user_id: Some(user_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let input = TaskInput {
            title: "Test Task".to_string(),
            description: "Test Description".to_string(),
        };

        let task = Task::new(input, 1);
        assert_eq!(task.title, "Test Task");
        assert_eq!(task.description, "Test Description");
        assert_eq!(task.user_id, Some(1));
        assert!(!task.completion);
    }

    #[test]
    fn test_each_task_gets_its_own_id() {
        let a = Task::new(
            TaskInput {
                title: "a".to_string(),
                description: "".to_string(),
            },
            1,
        );
        let b = Task::new(
            TaskInput {
                title: "b".to_string(),
                description: "".to_string(),
            },
            1,
        );
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_task_update_fields_are_optional() {
        let update: TaskUpdate = serde_json::from_str(r#"{"completion": true}"#).unwrap();
        assert_eq!(update.completion, Some(true));
        assert!(update.description.is_none());

        let empty: TaskUpdate = serde_json::from_str("{}").unwrap();
        assert!(empty.description.is_none());
        assert!(empty.completion.is_none());
    }
}
