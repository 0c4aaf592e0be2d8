//! Human-readable output for the CLI transport. All emoji and layout
//! choices live here; the store and streak modules only return data.

use chrono::NaiveDate;

use crate::store::{CompletionResult, Habit};
use crate::streak;

/// Week window used by list and reminder output.
pub const WEEK_DAYS: u32 = 7;

const BAR_WIDTH: usize = 5;

pub fn format_habit_list(habits: &[Habit], today: NaiveDate) -> String {
    if habits.is_empty() {
        return "📭 You have no habits yet. Add your first one with `add`".to_string();
    }

    let mut lines = vec!["📋 Your habits:".to_string(), String::new()];

    for habit in habits {
        let history = habit.history_dates();
        let week = streak::weekly_completion(&history, today, WEEK_DAYS);
        let bar = streak::render_progress_bar(week.completed, week.total, BAR_WIDTH);
        let calendar = streak::render_week_calendar(&history, today, WEEK_DAYS);

        lines.push(format!(
            "{}. {}\n   🔥 Streak: {} day(s) | 📅 Total: {} day(s)\n   📊 Week: {}/{} | {}\n   {}",
            habit.id,
            habit.name,
            habit.streak,
            habit.total_days(),
            week.completed,
            week.total,
            bar,
            calendar
        ));
    }

    lines.join("\n")
}

pub fn format_stats(habits: &[Habit], today: NaiveDate, days: u32) -> String {
    if habits.is_empty() {
        return "📭 No habits to report on yet".to_string();
    }

    let mut lines = vec![format!("📊 Last {} day(s):", days), String::new()];

    for habit in habits {
        let history = habit.history_dates();
        let window = streak::weekly_completion(&history, today, days);
        let bar = streak::render_progress_bar(window.completed, window.total, BAR_WIDTH);
        lines.push(format!(
            "{}. {}: {}/{} ({}%) {}",
            habit.id, habit.name, window.completed, window.total, window.percentage, bar
        ));
    }

    lines.join("\n")
}

pub fn format_completion(habit_name: &str, result: &CompletionResult) -> String {
    match result {
        CompletionResult::Recorded { new_streak, total_days } => format!(
            "✅ {} marked complete!\n🔥 Streak: {} day(s) | 📅 Total: {} day(s)",
            habit_name, new_streak, total_days
        ),
        CompletionResult::AlreadyCompleted => {
            format!("✔️ {} is already marked complete for that day", habit_name)
        }
    }
}

pub fn format_reminder(user_id: &str, habits: &[Habit], today: NaiveDate) -> String {
    let mut lines = vec![format!("⏰ Reminder for {}: don't break the chain!", user_id)];

    for habit in habits {
        let done_today = habit.has_completion(today);
        let marker = if done_today { "✅" } else { "▫️" };
        lines.push(format!(
            "{} {} (streak: {} day(s))",
            marker, habit.name, habit.streak
        ));
    }

    lines.join("\n")
}
