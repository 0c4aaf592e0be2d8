use serde::{Deserialize, Serialize};

use super::habit::Habit;

/// Per-user record as persisted in the store document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for UserRecord {
    fn default() -> Self {
        Self {
            habits: Vec::new(),
            timezone: default_timezone(),
        }
    }
}

impl UserRecord {
    pub fn with_timezone(timezone: &str) -> Self {
        Self {
            habits: Vec::new(),
            timezone: timezone.to_string(),
        }
    }

    /// Next habit id. Uses `max + 1` rather than `len + 1` so ids stay
    /// unique after deletions.
    pub fn next_habit_id(&self) -> u32 {
        self.habits.iter().map(|h| h.id).max().unwrap_or(0) + 1
    }

    pub fn find_habit(&self, habit_id: u32) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == habit_id)
    }

    pub fn find_habit_mut(&mut self, habit_id: u32) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == habit_id)
    }
}
