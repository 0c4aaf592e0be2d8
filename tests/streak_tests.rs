use chrono::NaiveDate;
use habit_tracker::streak::*;
use std::collections::HashSet;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn history(dates: &[&str]) -> HashSet<NaiveDate> {
    dates.iter().map(|d| date(d)).collect()
}

#[cfg(test)]
mod streak_tests {
    use super::*;

    #[test]
    fn test_streak_counts_back_from_reference() {
        let h = history(&[
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04",
            "2024-01-05",
        ]);
        assert_eq!(compute_streak(&h, date("2024-01-05")), 5);
    }

    #[test]
    fn test_streak_stops_at_first_gap() {
        // 2024-01-03 missing: counting back from 01-05 gives 01-05, 01-04, stop.
        let h = history(&["2024-01-01", "2024-01-02", "2024-01-04", "2024-01-05"]);
        assert_eq!(compute_streak(&h, date("2024-01-05")), 2);
    }

    #[test]
    fn test_streak_zero_when_reference_missing() {
        let h = history(&["2024-01-01", "2024-01-02"]);
        assert_eq!(compute_streak(&h, date("2024-01-05")), 0);
        assert_eq!(compute_streak(&HashSet::new(), date("2024-01-05")), 0);
    }

    #[test]
    fn test_streak_single_day() {
        let h = history(&["2024-01-05"]);
        assert_eq!(compute_streak(&h, date("2024-01-05")), 1);
    }

    #[test]
    fn test_streak_ignores_future_dates() {
        let h = history(&["2024-01-04", "2024-01-05", "2024-01-06"]);
        assert_eq!(compute_streak(&h, date("2024-01-05")), 2);
    }
}

#[cfg(test)]
mod weekly_completion_tests {
    use super::*;

    #[test]
    fn test_three_of_seven_days_rounds_to_43() {
        let h = history(&["2024-03-10", "2024-03-12", "2024-03-14"]);
        let week = weekly_completion(&h, date("2024-03-14"), 7);
        assert_eq!(week.completed, 3);
        assert_eq!(week.total, 7);
        assert_eq!(week.percentage, 43);
    }

    #[test]
    fn test_dates_outside_window_excluded() {
        // 2024-03-01 is before the window, 2024-03-20 after it.
        let h = history(&["2024-03-01", "2024-03-14", "2024-03-20"]);
        let week = weekly_completion(&h, date("2024-03-14"), 7);
        assert_eq!(week.completed, 1);
        assert_eq!(week.percentage, 14);
    }

    #[test]
    fn test_full_week_is_100_percent() {
        let h = history(&[
            "2024-03-08",
            "2024-03-09",
            "2024-03-10",
            "2024-03-11",
            "2024-03-12",
            "2024-03-13",
            "2024-03-14",
        ]);
        let week = weekly_completion(&h, date("2024-03-14"), 7);
        assert_eq!(week.completed, 7);
        assert_eq!(week.percentage, 100);
    }

    #[test]
    fn test_window_clamped_to_one_day() {
        let h = history(&["2024-03-14"]);
        let week = weekly_completion(&h, date("2024-03-14"), 0);
        assert_eq!(week.total, 1);
        assert_eq!(week.percentage, 100);
    }

    #[test]
    fn test_empty_history() {
        let week = weekly_completion(&HashSet::new(), date("2024-03-14"), 7);
        assert_eq!(week.completed, 0);
        assert_eq!(week.percentage, 0);
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn test_progress_bar_zero_total_does_not_divide() {
        assert_eq!(render_progress_bar(0, 0, 10), "▱▱▱▱▱▱▱▱▱▱ 0%");
    }

    #[test]
    fn test_progress_bar_proportional_fill() {
        assert_eq!(render_progress_bar(3, 5, 5), "▰▰▰▱▱ 60%");
        assert_eq!(render_progress_bar(7, 7, 7), "▰▰▰▰▰▰▰ 100%");
        assert_eq!(render_progress_bar(0, 7, 7), "▱▱▱▱▱▱▱ 0%");
    }

    #[test]
    fn test_progress_bar_clamps_overfull_input() {
        assert_eq!(render_progress_bar(9, 5, 5), "▰▰▰▰▰ 100%");
    }

    #[test]
    fn test_calendar_runs_oldest_to_newest() {
        // 2024-03-14 is a Thursday; window starts the previous Friday.
        let h = history(&["2024-03-14", "2024-03-11"]);
        let calendar = render_week_calendar(&h, date("2024-03-14"), 7);
        assert_eq!(calendar, "Fr:❌ Sa:🔘 Su:🔘 Mo:✅ Tu:❌ We:❌ Th:✅");
    }

    #[test]
    fn test_calendar_marks_missed_weekend_as_neutral() {
        // 2024-03-10 is a Sunday.
        let calendar = render_week_calendar(&HashSet::new(), date("2024-03-10"), 2);
        assert_eq!(calendar, "Sa:🔘 Su:🔘");
    }

    #[test]
    fn test_calendar_completed_weekend_gets_check() {
        let h = history(&["2024-03-09", "2024-03-10"]);
        let calendar = render_week_calendar(&h, date("2024-03-10"), 2);
        assert_eq!(calendar, "Sa:✅ Su:✅");
    }
}
