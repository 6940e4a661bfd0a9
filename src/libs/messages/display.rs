//! Display implementation for tasklite application messages.
//!
//! All user-facing text lives here, so every message the application can
//! emit is defined in one place and parameter interpolation stays type-safe.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task '{}' added", id),
            Message::TaskDeleted(id) => format!("Task '{}' deleted", id),
            Message::TaskStatusChanged(id, status) => format!("Task '{}' status set to '{}'", id, status),
            Message::TaskEdited(id) => format!("Task '{}' updated", id),
            Message::TasksNotFoundForUser(user_id) => format!("No tasks found for user {}", user_id),
            Message::ConfirmDeleteTask(id) => format!("Delete task '{}'?", id),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
        };

        write!(f, "{}", text)
    }
}
