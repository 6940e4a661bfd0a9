//! Data persistence layer built on SQLite.
//!
//! All durable state lives in a single database file. The [`db::Db`] handle
//! owns the connection for the lifetime of the process and hands it out as a
//! scoped guard; [`migrations`] evolves the schema; [`tasks`] is the only
//! module that touches the `tasks` table.

/// Process-owned database connection handle.
pub mod db;

/// Versioned schema migration system.
pub mod migrations;

/// CRUD and list operations over stored tasks.
pub mod tasks;
