use serde::{Deserialize, Serialize};

/// A user as reported by the external user directory. Never stored locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
}
