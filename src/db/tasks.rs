use crate::db::db::Db;
use crate::libs::error::StoreError;
use crate::libs::task::Task;
use rusqlite::{params, ErrorCode, OptionalExtension};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id TEXT NOT NULL PRIMARY KEY,
    task TEXT NOT NULL,
    user_id INTEGER NOT NULL,
    status TEXT NOT NULL
)";
const INSERT_TASK: &str = "INSERT INTO tasks (id, task, user_id, status) VALUES (?1, ?2, ?3, ?4)";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?2 WHERE id = ?1";
const UPDATE_DESCRIPTION: &str = "UPDATE tasks SET task = ?2 WHERE id = ?1";
const SELECT_STATUS: &str = "SELECT status FROM tasks WHERE id = ?1";
const SELECT_DESCRIPTION: &str = "SELECT task FROM tasks WHERE id = ?1";
const SELECT_USER_ID: &str = "SELECT user_id FROM tasks WHERE id = ?1";
const SELECT_BY_USER: &str = "SELECT id, task, user_id, status FROM tasks WHERE user_id = ?1 ORDER BY rowid";

/// Store for task rows.
///
/// Every operation is a single parameterized statement executed while
/// holding the shared connection guard. The store performs no validation
/// of descriptions or status values; whatever the caller supplies is
/// persisted verbatim.
pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub fn new(db: &Db) -> Result<Self, StoreError> {
        // Migration v1 creates the table, but we ensure it here too
        db.conn().execute(SCHEMA_TASKS, [])?;
        Ok(Tasks { db: db.clone() })
    }

    /// Inserts one task row.
    ///
    /// The id column carries a primary key constraint, so inserting an id
    /// that already exists fails with [`StoreError::Duplicate`] and leaves
    /// the stored row untouched.
    pub fn insert(&mut self, task: &Task) -> Result<(), StoreError> {
        let conn = self.db.conn();
        match conn.execute(INSERT_TASK, params![task.id, task.description, task.user_id, task.status]) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                Err(StoreError::Duplicate(task.id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes the task with the given id.
    ///
    /// Deleting an id that does not exist is a silent success.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.db.conn().execute(DELETE_TASK, params![id])?;
        Ok(())
    }

    /// Sets the status column verbatim; any string is accepted.
    ///
    /// Updating an id that does not exist affects zero rows and is not an
    /// error; no row is created.
    pub fn set_status(&mut self, id: &str, status: &str) -> Result<(), StoreError> {
        self.db.conn().execute(UPDATE_STATUS, params![id, status])?;
        Ok(())
    }

    /// Sets the description column verbatim, including empty strings.
    ///
    /// Same missing-id semantics as [`Tasks::set_status`].
    pub fn set_description(&mut self, id: &str, description: &str) -> Result<(), StoreError> {
        self.db.conn().execute(UPDATE_DESCRIPTION, params![id, description])?;
        Ok(())
    }

    /// Returns the status of the task with the given id.
    pub fn get_status(&self, id: &str) -> Result<String, StoreError> {
        self.db
            .conn()
            .query_row(SELECT_STATUS, params![id], |row| row.get(0))
            .optional()?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Returns the description of the task with the given id.
    pub fn get_description(&self, id: &str) -> Result<String, StoreError> {
        self.db
            .conn()
            .query_row(SELECT_DESCRIPTION, params![id], |row| row.get(0))
            .optional()?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Returns the owning user id of the task with the given id.
    pub fn get_user_id(&self, id: &str) -> Result<i64, StoreError> {
        self.db
            .conn()
            .query_row(SELECT_USER_ID, params![id], |row| row.get(0))
            .optional()?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Returns all tasks owned by the given user in insertion order.
    ///
    /// A user with no tasks yields an empty vector, not an error.
    pub fn fetch_for_user(&self, user_id: i64) -> Result<Vec<Task>, StoreError> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(SELECT_BY_USER)?;

        let task_iter = stmt.query_map(params![user_id], |row| {
            Ok(Task {
                id: row.get(0)?,
                description: row.get(1)?,
                user_id: row.get(2)?,
                status: row.get(3)?,
            })
        })?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }
}
