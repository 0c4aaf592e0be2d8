use crate::store::error::HabitError;

/// Validates a habit name and returns the trimmed form to persist.
pub fn validate_habit_name(name: &str) -> Result<String, HabitError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(HabitError::Validation(
            "Habit name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(HabitError::Validation(
            "Habit name cannot be longer than 100 characters".to_string(),
        ));
    }

    if name.contains('\n') || name.contains('\r') {
        return Err(HabitError::Validation(
            "Habit name cannot contain line breaks".to_string(),
        ));
    }

    Ok(name.to_string())
}

/// Parses a user-supplied habit id. Non-numeric input is a validation
/// error, not a lookup failure.
pub fn parse_habit_id(input: &str) -> Result<u32, HabitError> {
    let input = input.trim();
    input.parse::<u32>().map_err(|_| {
        HabitError::Validation(format!("'{}' is not a valid habit id", input))
    })
}
