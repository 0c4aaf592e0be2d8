use thiserror::Error;

/// Typed failures surfaced by [`crate::store::HabitStore`].
///
/// `AlreadyCompleted` is deliberately not here: marking the same day twice
/// is a no-op signal, not an error, and is reported through
/// [`crate::store::CompletionResult`] instead.
#[derive(Debug, Error)]
pub enum HabitError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("no habit with id {habit_id} for user {user_id}")]
    NotFound { user_id: String, habit_id: u32 },

    #[error("storage failure: {0}")]
    Storage(#[from] std::io::Error),

    #[error("storage encoding failure: {0}")]
    Encoding(#[from] serde_json::Error),
}
