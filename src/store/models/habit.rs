use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::utils::datetime::{format_date, parse_date};

/// A single tracked habit, scoped to one user.
///
/// `history` holds ISO calendar dates (`YYYY-MM-DD`), each at most once.
/// `streak` is a derived cache recomputed from `history` whenever a
/// completion is recorded; `history` remains the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: u32,
    pub name: String,
    pub created: String,
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default)]
    pub streak: u32,
}

impl Habit {
    pub fn new(id: u32, name: String, created: NaiveDate) -> Self {
        Self {
            id,
            name,
            created: format_date(created),
            history: Vec::new(),
            streak: 0,
        }
    }

    /// Parsed view of the completion history. Entries that fail to parse
    /// (hand-edited documents) are skipped rather than failing the whole
    /// habit.
    pub fn history_dates(&self) -> HashSet<NaiveDate> {
        self.history.iter().filter_map(|d| parse_date(d)).collect()
    }

    pub fn has_completion(&self, date: NaiveDate) -> bool {
        let date_str = format_date(date);
        self.history.iter().any(|d| *d == date_str)
    }

    /// Total number of recorded completion days.
    pub fn total_days(&self) -> usize {
        self.history.len()
    }
}
