//! Core library modules for the tasklite application.
//!
//! - **Domain Types**: The [`task::Task`] record
//! - **Error Taxonomy**: Typed storage failures in [`error`]
//! - **Messaging**: Centralized user-facing output in [`messages`]
//! - **Infrastructure**: Platform data paths and console rendering

pub mod data_storage;
pub mod error;
pub mod messages;
pub mod task;
pub mod view;
