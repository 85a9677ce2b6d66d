use serde::{Deserialize, Serialize};

/// Catalog entry for a tracked behavior. Habits are effectively immutable
/// once created; daily logs reference them by id only, and a dangling id
/// in a log is tolerated rather than treated as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl Habit {
    pub fn new(id: &str, name: &str, icon: &str, color: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}
