//! # Tasklite
//!
//! A command-line utility for tracking to-do items per user, backed by
//! a local SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Add, edit, delete, and change the status of tasks
//! - **Per-User Lists**: Every task belongs to a user id; listing is per user
//! - **Durable Storage**: All state lives in a single SQLite file with
//!   versioned schema migrations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklite::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
