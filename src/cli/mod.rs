pub mod format;

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Parser;

use crate::config::Config;
use crate::services::reminder::ReminderService;
use crate::store::{HabitError, HabitStore};
use crate::utils::datetime::{parse_date, today_in_timezone};
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};
use crate::utils::validation::parse_habit_id;

/// Habit tracker commands. One subcommand per user action; the `daemon`
/// subcommand runs the reminder scheduler in the foreground.
#[derive(Parser)]
#[command(name = "habit-tracker", about = "Track daily habits with streaks and reminders", version)]
pub enum Cli {
    /// Register a user, optionally with a timezone like UTC+3
    Init {
        /// User id
        user: String,
        /// Timezone as a UTC offset (e.g. UTC+3, -05:00)
        #[arg(long)]
        timezone: Option<String>,
    },
    /// Add a new habit
    Add {
        /// User id
        user: String,
        /// Habit name
        name: String,
    },
    /// List habits with streaks and a week calendar
    List {
        /// User id
        user: String,
    },
    /// Mark a habit complete for today (or an explicit date)
    Check {
        /// User id
        user: String,
        /// Habit id as shown by `list`
        id: String,
        /// Date to mark instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show completion statistics for a trailing window of days
    Stats {
        /// User id
        user: String,
        /// Window length in days
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Rename a habit
    Rename {
        /// User id
        user: String,
        /// Habit id as shown by `list`
        id: String,
        /// New habit name
        name: String,
    },
    /// Delete a habit
    Remove {
        /// User id
        user: String,
        /// Habit id as shown by `list`
        id: String,
    },
    /// Clear all habits; keeps the user record unless --purge is given
    Reset {
        /// User id
        user: String,
        /// Remove the user record entirely
        #[arg(long)]
        purge: bool,
    },
    /// Run the daily reminder scheduler in the foreground
    Daemon,
}

pub async fn run(cli: Cli, store: Arc<HabitStore>, config: &Config) -> Result<()> {
    match cli {
        Cli::Init { user, timezone } => {
            log_command_start("init", &user, timezone.as_deref());
            let tz = timezone.as_deref().unwrap_or(&config.default_timezone);
            store.init_user(&user, Some(tz)).await?;
            log_command_success("init", &user, None);
            println!("👋 Welcome, {}! Add your first habit with `add`", user);
            Ok(())
        }
        Cli::Add { user, name } => {
            log_command_start("add", &user, Some(&name));
            let today = user_today(&store, &user, config).await?;
            match store.add_habit(&user, &name, today).await {
                Ok(id) => {
                    log_command_success("add", &user, Some(&format!("id {}", id)));
                    println!(
                        "✅ Habit '{}' added!\nId: {} - use `check {} {}` to mark it done",
                        name.trim(),
                        id,
                        user,
                        id
                    );
                    Ok(())
                }
                Err(e) => report_failure("add", &user, e),
            }
        }
        Cli::List { user } => {
            log_command_start("list", &user, None);
            let today = user_today(&store, &user, config).await?;
            let habits = store.get_habits(&user).await?;
            println!("{}", format::format_habit_list(&habits, today));
            Ok(())
        }
        Cli::Check { user, id, date } => {
            log_command_start("check", &user, Some(&id));
            let habit_id = match parse_habit_id(&id) {
                Ok(habit_id) => habit_id,
                Err(e) => return report_failure("check", &user, e),
            };
            let on_date = match date {
                Some(raw) => parse_date(&raw)
                    .ok_or_else(|| anyhow!("'{}' is not a valid date (expected YYYY-MM-DD)", raw))?,
                None => user_today(&store, &user, config).await?,
            };
            match store.record_completion(&user, habit_id, on_date).await {
                Ok(result) => {
                    let name = habit_name(&store, &user, habit_id).await?;
                    log_command_success("check", &user, Some(&format!("habit {}", habit_id)));
                    println!("{}", format::format_completion(&name, &result));
                    Ok(())
                }
                Err(e) => report_failure("check", &user, e),
            }
        }
        Cli::Stats { user, days } => {
            log_command_start("stats", &user, Some(&days.to_string()));
            if days == 0 {
                return report_failure(
                    "stats",
                    &user,
                    HabitError::Validation("Stats window must be at least 1 day".to_string()),
                );
            }
            let today = user_today(&store, &user, config).await?;
            let habits = store.get_habits(&user).await?;
            println!("{}", format::format_stats(&habits, today, days));
            Ok(())
        }
        Cli::Rename { user, id, name } => {
            log_command_start("rename", &user, Some(&id));
            let habit_id = match parse_habit_id(&id) {
                Ok(habit_id) => habit_id,
                Err(e) => return report_failure("rename", &user, e),
            };
            match store.rename_habit(&user, habit_id, &name).await {
                Ok(()) => {
                    log_command_success("rename", &user, Some(&format!("habit {}", habit_id)));
                    println!("✏️ Habit {} renamed to '{}'", habit_id, name.trim());
                    Ok(())
                }
                Err(e) => report_failure("rename", &user, e),
            }
        }
        Cli::Remove { user, id } => {
            log_command_start("remove", &user, Some(&id));
            let habit_id = match parse_habit_id(&id) {
                Ok(habit_id) => habit_id,
                Err(e) => return report_failure("remove", &user, e),
            };
            match store.delete_habit(&user, habit_id).await {
                Ok(()) => {
                    log_command_success("remove", &user, Some(&format!("habit {}", habit_id)));
                    println!("🗑 Habit {} deleted", habit_id);
                    Ok(())
                }
                Err(e) => report_failure("remove", &user, e),
            }
        }
        Cli::Reset { user, purge } => {
            log_command_start("reset", &user, Some(if purge { "purge" } else { "clear" }));
            if purge {
                store.delete_user(&user).await?;
                println!("🗑 All data for {} removed", user);
            } else {
                store.reset_user(&user).await?;
                println!("🧹 All habits for {} cleared", user);
            }
            log_command_success("reset", &user, None);
            Ok(())
        }
        Cli::Daemon => run_daemon(store, config).await,
    }
}

/// Today's date in the user's stored timezone, falling back to the
/// configured default for unknown users.
async fn user_today(store: &HabitStore, user_id: &str, config: &Config) -> Result<NaiveDate> {
    let timezone = store
        .get_user(user_id)
        .await?
        .map(|record| record.timezone)
        .unwrap_or_else(|| config.default_timezone.clone());
    Ok(today_in_timezone(&timezone))
}

async fn habit_name(store: &HabitStore, user_id: &str, habit_id: u32) -> Result<String> {
    let habits = store.get_habits(user_id).await?;
    Ok(habits
        .iter()
        .find(|h| h.id == habit_id)
        .map(|h| h.name.clone())
        .unwrap_or_else(|| format!("habit {}", habit_id)))
}

/// User-facing failures (bad input, unknown habit) print a message and
/// exit cleanly; storage failures propagate to the caller.
fn report_failure(command: &str, user: &str, e: HabitError) -> Result<()> {
    match e {
        HabitError::Validation(_) | HabitError::NotFound { .. } => {
            log_command_error(command, user, &e.to_string());
            println!("❌ {}", e);
            Ok(())
        }
        other => Err(other.into()),
    }
}

async fn run_daemon(store: Arc<HabitStore>, config: &Config) -> Result<()> {
    let default_timezone = config.default_timezone.clone();
    let notify: crate::services::reminder::NotifyFn = Arc::new(move |user_id, habits| {
        let today = today_in_timezone(&default_timezone);
        Box::pin(async move {
            println!("{}", format::format_reminder(&user_id, &habits, today));
        })
    });

    let mut service = ReminderService::new(store, config.reminder_hour, notify)
        .await
        .map_err(|e| anyhow!("Failed to create reminder service: {}", e))?;
    service
        .start()
        .await
        .map_err(|e| anyhow!("Failed to start reminder service: {}", e))?;

    println!(
        "⏰ Reminder daemon running (daily at {}:00). Press Ctrl-C to stop.",
        config.reminder_hour
    );
    tokio::signal::ctrl_c().await?;

    if let Err(e) = service.stop().await {
        tracing::warn!("Error stopping reminder service: {}", e);
    }
    Ok(())
}
