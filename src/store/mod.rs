pub mod document;
pub mod error;
pub mod models;

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::streak;
use crate::utils::datetime::format_date;
use crate::utils::logging::{log_store_error, log_store_operation};
use crate::utils::validation::validate_habit_name;

pub use document::{StoreData, StoreDocument};
pub use error::HabitError;
pub use models::{Habit, UserRecord};

/// Outcome of [`HabitStore::record_completion`].
///
/// `AlreadyCompleted` is a no-op signal, not an error: the habit existed
/// but the date was already in its history, so nothing was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    Recorded { new_streak: u32, total_days: usize },
    AlreadyCompleted,
}

struct CacheEntry {
    record: UserRecord,
    fetched_at: Instant,
}

/// Interior state guarded by the store's single lock.
#[derive(Default)]
struct StoreState {
    cache: HashMap<String, CacheEntry>,
}

/// Durable mapping from user id to habit records, backed by one shared
/// JSON document.
///
/// Every operation runs under a single process-wide lock around the
/// read-modify-write cycle, serializing writers across all users. Reads
/// are served from a short-lived per-user cache that is refreshed
/// synchronously by the owning write, and only after the write succeeds.
/// The lock is never held across anything but one document read and
/// write.
///
/// Construct one store per process and pass it by reference to all
/// callers; there is intentionally no global instance.
pub struct HabitStore {
    document: StoreDocument,
    state: Mutex<StoreState>,
    cache_ttl: Duration,
}

impl HabitStore {
    pub fn new(path: impl Into<PathBuf>, cache_ttl: Duration) -> Self {
        Self {
            document: StoreDocument::new(path),
            state: Mutex::new(StoreState::default()),
            cache_ttl,
        }
    }

    /// Creates an empty record for the user if none exists. Existing
    /// records are left untouched, including their timezone.
    pub async fn init_user(
        &self,
        user_id: &str,
        timezone: Option<&str>,
    ) -> Result<(), HabitError> {
        let mut state = self.state.lock().await;
        let mut data = self.document.load().await?;

        if data.contains_key(user_id) {
            log_store_operation("init_user", user_id, Some("already present"));
            return Ok(());
        }

        let record = match timezone {
            Some(tz) => UserRecord::with_timezone(tz),
            None => UserRecord::default(),
        };
        data.insert(user_id.to_string(), record);
        self.persist(&mut state, &data, user_id, "init_user").await
    }

    /// Adds a habit and returns its id. The user record is created
    /// implicitly if this is the user's first interaction.
    pub async fn add_habit(
        &self,
        user_id: &str,
        name: &str,
        created_on: NaiveDate,
    ) -> Result<u32, HabitError> {
        let name = validate_habit_name(name)?;

        let mut state = self.state.lock().await;
        let mut data = self.document.load().await?;

        let record = data.entry(user_id.to_string()).or_default();
        let habit_id = record.next_habit_id();
        record.habits.push(Habit::new(habit_id, name, created_on));

        self.persist(&mut state, &data, user_id, "add_habit").await?;
        Ok(habit_id)
    }

    /// Returns the user's habits; an unknown user yields an empty list.
    pub async fn get_habits(&self, user_id: &str) -> Result<Vec<Habit>, HabitError> {
        Ok(self
            .get_user(user_id)
            .await?
            .map(|record| record.habits)
            .unwrap_or_default())
    }

    /// Returns the full user record, serving from cache when fresh.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<UserRecord>, HabitError> {
        let mut state = self.state.lock().await;

        if let Some(entry) = state.cache.get(user_id) {
            if entry.fetched_at.elapsed() < self.cache_ttl {
                log_store_operation("get_user", user_id, Some("cache hit"));
                return Ok(Some(entry.record.clone()));
            }
        }

        let data = self.document.load().await?;
        let record = data.get(user_id).cloned();
        if let Some(record) = &record {
            state.cache.insert(
                user_id.to_string(),
                CacheEntry { record: record.clone(), fetched_at: Instant::now() },
            );
        } else {
            state.cache.remove(user_id);
        }
        Ok(record)
    }

    /// Marks `on_date` complete for one habit.
    ///
    /// Idempotent per date: a date already in the history returns
    /// [`CompletionResult::AlreadyCompleted`] without touching the
    /// document. Otherwise the date is appended, the streak is recomputed
    /// from the full history with `on_date` as the reference day, and the
    /// document is persisted.
    pub async fn record_completion(
        &self,
        user_id: &str,
        habit_id: u32,
        on_date: NaiveDate,
    ) -> Result<CompletionResult, HabitError> {
        let mut state = self.state.lock().await;
        let mut data = self.document.load().await?;

        let record = data
            .get_mut(user_id)
            .ok_or_else(|| HabitError::NotFound {
                user_id: user_id.to_string(),
                habit_id,
            })?;
        let habit = record
            .find_habit_mut(habit_id)
            .ok_or_else(|| HabitError::NotFound {
                user_id: user_id.to_string(),
                habit_id,
            })?;

        if habit.has_completion(on_date) {
            log_store_operation("record_completion", user_id, Some("already completed"));
            return Ok(CompletionResult::AlreadyCompleted);
        }

        habit.history.push(format_date(on_date));
        habit.streak = streak::compute_streak(&habit.history_dates(), on_date);

        let new_streak = habit.streak;
        let total_days = habit.total_days();

        self.persist(&mut state, &data, user_id, "record_completion").await?;
        Ok(CompletionResult::Recorded { new_streak, total_days })
    }

    /// Renames a habit in place; the id and history are untouched.
    pub async fn rename_habit(
        &self,
        user_id: &str,
        habit_id: u32,
        new_name: &str,
    ) -> Result<(), HabitError> {
        let new_name = validate_habit_name(new_name)?;

        let mut state = self.state.lock().await;
        let mut data = self.document.load().await?;

        let habit = data
            .get_mut(user_id)
            .and_then(|record| record.find_habit_mut(habit_id))
            .ok_or_else(|| HabitError::NotFound {
                user_id: user_id.to_string(),
                habit_id,
            })?;
        habit.name = new_name;

        self.persist(&mut state, &data, user_id, "rename_habit").await
    }

    /// Deletes one habit. Remaining ids are not renumbered, and the
    /// freed id is never handed out again while a higher one exists.
    pub async fn delete_habit(&self, user_id: &str, habit_id: u32) -> Result<(), HabitError> {
        let mut state = self.state.lock().await;
        let mut data = self.document.load().await?;

        let record = data
            .get_mut(user_id)
            .ok_or_else(|| HabitError::NotFound {
                user_id: user_id.to_string(),
                habit_id,
            })?;
        let before = record.habits.len();
        record.habits.retain(|h| h.id != habit_id);
        if record.habits.len() == before {
            return Err(HabitError::NotFound {
                user_id: user_id.to_string(),
                habit_id,
            });
        }

        self.persist(&mut state, &data, user_id, "delete_habit").await
    }

    /// Clears the user's habit list but keeps the record (and its
    /// timezone). Idempotent; unknown users are a no-op.
    pub async fn reset_user(&self, user_id: &str) -> Result<(), HabitError> {
        let mut state = self.state.lock().await;
        let mut data = self.document.load().await?;

        match data.get_mut(user_id) {
            Some(record) if !record.habits.is_empty() => {
                record.habits.clear();
                self.persist(&mut state, &data, user_id, "reset_user").await
            }
            _ => {
                log_store_operation("reset_user", user_id, Some("nothing to clear"));
                Ok(())
            }
        }
    }

    /// Removes the user's entry entirely. Idempotent.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), HabitError> {
        let mut state = self.state.lock().await;
        let mut data = self.document.load().await?;

        if data.remove(user_id).is_none() {
            log_store_operation("delete_user", user_id, Some("not present"));
            return Ok(());
        }

        match self.document.save(&data).await {
            Ok(()) => {
                state.cache.remove(user_id);
                log_store_operation("delete_user", user_id, None);
                Ok(())
            }
            Err(e) => {
                log_store_error("delete_user", user_id, &e.to_string());
                Err(e)
            }
        }
    }

    /// All known user ids, in no particular order. Used by the reminder
    /// service to enumerate who to notify.
    pub async fn all_users(&self) -> Result<Vec<String>, HabitError> {
        let data = self.document.load().await?;
        Ok(data.keys().cloned().collect())
    }

    /// Saves the document and refreshes the touched user's cache entry.
    /// The cache is only updated after a confirmed successful write, so
    /// a failed write leaves no inconsistent in-memory state.
    async fn persist(
        &self,
        state: &mut StoreState,
        data: &StoreData,
        user_id: &str,
        operation: &str,
    ) -> Result<(), HabitError> {
        match self.document.save(data).await {
            Ok(()) => {
                match data.get(user_id) {
                    Some(record) => {
                        state.cache.insert(
                            user_id.to_string(),
                            CacheEntry { record: record.clone(), fetched_at: Instant::now() },
                        );
                    }
                    None => {
                        state.cache.remove(user_id);
                    }
                }
                log_store_operation(operation, user_id, None);
                Ok(())
            }
            Err(e) => {
                state.cache.remove(user_id);
                log_store_error(operation, user_id, &e.to_string());
                Err(e)
            }
        }
    }
}
