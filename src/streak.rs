//! Pure statistics over a habit's completion history.
//!
//! Every function takes the reference date ("today") explicitly and never
//! reads a live clock, so results are reproducible in tests. None of them
//! touch the store; they operate on the parsed history a caller already
//! holds.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashSet;

const FILLED_GLYPH: &str = "▰";
const EMPTY_GLYPH: &str = "▱";

const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Completion summary for a trailing window of days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyCompletion {
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
}

/// Counts consecutive completed days ending at `reference` (inclusive),
/// walking backward one day at a time until the first gap. Returns 0 when
/// `reference` itself is not in the history.
pub fn compute_streak(history: &HashSet<NaiveDate>, reference: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut current = reference;
    while history.contains(&current) {
        streak += 1;
        match current.pred_opt() {
            Some(prev) => current = prev,
            None => break,
        }
    }
    streak
}

/// Counts completions in the window `[reference - window_days + 1,
/// reference]`. `window_days` is clamped to at least 1 so the percentage
/// never divides by zero.
pub fn weekly_completion(
    history: &HashSet<NaiveDate>,
    reference: NaiveDate,
    window_days: u32,
) -> WeeklyCompletion {
    let total = window_days.max(1);
    let window_start = reference - Duration::days(i64::from(total) - 1);

    let completed = history
        .iter()
        .filter(|d| **d >= window_start && **d <= reference)
        .count() as u32;

    let percentage = (f64::from(completed) / f64::from(total) * 100.0).round() as u32;

    WeeklyCompletion { completed, total, percentage }
}

/// Fixed-width progress bar with a trailing percentage, e.g. `▰▰▰▱▱ 60%`.
/// A zero total renders an all-empty bar labeled 0%.
pub fn render_progress_bar(completed: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return format!("{} 0%", EMPTY_GLYPH.repeat(width));
    }

    let ratio = f64::from(completed) / f64::from(total);
    let filled = ((ratio * width as f64) as usize).min(width);
    let percentage = ((ratio * 100.0).round() as u32).min(100);

    format!(
        "{}{} {}%",
        FILLED_GLYPH.repeat(filled),
        EMPTY_GLYPH.repeat(width - filled),
        percentage
    )
}

/// One labeled glyph per day for the trailing `days` window, oldest to
/// newest: completed days get a check, missed weekends a neutral marker,
/// missed weekdays a cross.
///
/// Example: `Mo:✅ Tu:❌ We:✅ Th:✅ Fr:❌ Sa:🔘 Su:🔘`
pub fn render_week_calendar(
    history: &HashSet<NaiveDate>,
    reference: NaiveDate,
    days: u32,
) -> String {
    let days = days.max(1);
    let mut cells = Vec::with_capacity(days as usize);

    for offset in (0..days).rev() {
        let date = reference - Duration::days(i64::from(offset));
        let label = WEEKDAY_LABELS[date.weekday().num_days_from_monday() as usize];
        let glyph = if history.contains(&date) {
            "✅"
        } else if date.weekday().num_days_from_monday() >= 5 {
            "🔘"
        } else {
            "❌"
        };
        cells.push(format!("{}:{}", label, glyph));
    }

    cells.join(" ")
}
