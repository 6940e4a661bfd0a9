use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use parking_lot::{Mutex, MutexGuard};
use rusqlite::Connection;
use std::sync::Arc;

pub const DB_FILE_NAME: &str = "tasklite.db";

/// Process-owned handle to the SQLite database.
///
/// The connection is opened once and shared behind a mutex; clones share
/// the same underlying connection. Operations acquire it through
/// [`Db::conn`] for the duration of a single statement, and the guard
/// releases the lock on every exit path.
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    /// Opens the database file and applies any pending migrations.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Opens the database without applying migrations. Used by migration
    /// tooling and tests that drive the manager directly.
    pub fn new_without_migrations() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;

        Ok(Db {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Scoped acquisition of the shared connection.
    pub fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }
}
