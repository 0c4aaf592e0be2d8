use chrono::NaiveDate;
use habit_tracker::cli::format::*;
use habit_tracker::store::{CompletionResult, Habit};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn habit_with_history(id: u32, name: &str, dates: &[&str], streak: u32) -> Habit {
    let mut habit = Habit::new(id, name.to_string(), date("2024-01-01"));
    habit.history = dates.iter().map(|d| d.to_string()).collect();
    habit.streak = streak;
    habit
}

#[test]
fn test_habit_list_empty() {
    let output = format_habit_list(&[], date("2024-03-14"));
    assert!(output.contains("no habits yet"));
}

#[test]
fn test_habit_list_shows_streak_week_and_calendar() {
    let habit = habit_with_history(
        1,
        "Read",
        &["2024-03-12", "2024-03-13", "2024-03-14"],
        3,
    );
    let output = format_habit_list(&[habit], date("2024-03-14"));

    assert!(output.contains("1. Read"));
    assert!(output.contains("🔥 Streak: 3 day(s)"));
    assert!(output.contains("📅 Total: 3 day(s)"));
    assert!(output.contains("📊 Week: 3/7"));
    assert!(output.contains("43%"));
    assert!(output.contains("Th:✅"));
}

#[test]
fn test_stats_lists_each_habit_with_percentage() {
    let read = habit_with_history(1, "Read", &["2024-03-14"], 1);
    let run = habit_with_history(2, "Run", &[], 0);
    let output = format_stats(&[read, run], date("2024-03-14"), 7);

    assert!(output.contains("Last 7 day(s)"));
    assert!(output.contains("1. Read: 1/7 (14%)"));
    assert!(output.contains("2. Run: 0/7 (0%)"));
}

#[test]
fn test_stats_empty() {
    let output = format_stats(&[], date("2024-03-14"), 7);
    assert!(output.contains("No habits"));
}

#[test]
fn test_completion_messages() {
    let recorded = format_completion(
        "Read",
        &CompletionResult::Recorded { new_streak: 4, total_days: 10 },
    );
    assert!(recorded.contains("Read marked complete"));
    assert!(recorded.contains("Streak: 4 day(s)"));
    assert!(recorded.contains("Total: 10 day(s)"));

    let duplicate = format_completion("Read", &CompletionResult::AlreadyCompleted);
    assert!(duplicate.contains("already marked complete"));
}

#[test]
fn test_reminder_marks_todays_completions() {
    let done = habit_with_history(1, "Read", &["2024-03-14"], 1);
    let pending = habit_with_history(2, "Run", &["2024-03-13"], 0);
    let output = format_reminder("alice", &[done, pending], date("2024-03-14"));

    assert!(output.contains("Reminder for alice"));
    assert!(output.contains("✅ Read"));
    assert!(output.contains("▫️ Run"));
}
