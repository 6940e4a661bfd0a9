use serde::{Deserialize, Serialize};

/// A single to-do item owned by a user.
///
/// The id is supplied by the caller and is the primary lookup key; the
/// status is a free-form string ("Active" and "Completed" by convention,
/// but the store persists whatever it is given).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub user_id: i64,
    pub status: String,
}

impl Task {
    pub fn new(id: &str, description: &str, user_id: i64, status: &str) -> Self {
        Task {
            id: id.to_string(),
            description: description.to_string(),
            user_id,
            status: status.to_string(),
        }
    }
}
