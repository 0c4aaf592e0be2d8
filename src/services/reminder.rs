use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::store::{Habit, HabitStore};

/// Boxed future returned by a notification callback.
pub type NotifyFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Callback invoked once per user on each reminder run, with that user's
/// id and current habits. The transport (console, bot, mail) is the
/// caller's concern; this service only schedules and enumerates.
pub type NotifyFn = Arc<dyn Fn(String, Vec<Habit>) -> NotifyFuture + Send + Sync>;

/// Daily reminder scheduler.
///
/// Runs a single cron job once per day at the configured hour, walks all
/// known users, and invokes the notification callback for each user that
/// has at least one habit.
pub struct ReminderService {
    store: Arc<HabitStore>,
    scheduler: JobScheduler,
    hour: u8,
    notify: NotifyFn,
}

impl ReminderService {
    pub async fn new(
        store: Arc<HabitStore>,
        hour: u8,
        notify: NotifyFn,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            store,
            scheduler,
            hour,
            notify,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = self.store.clone();
        let notify = self.notify.clone();

        let reminder_job = Job::new_async(
            format!("0 0 {} * * *", self.hour).as_str(),
            move |_uuid, _l| {
                let store = store.clone();
                let notify = notify.clone();
                Box::pin(async move {
                    if let Err(e) = run_daily_check(store, notify).await {
                        tracing::error!("Failed to send reminders: {}", e);
                    }
                })
            },
        )?;

        self.scheduler.add(reminder_job).await?;
        self.scheduler.start().await?;

        tracing::info!("Reminder service started - running daily at {}:00 UTC", self.hour);
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn check_now(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        run_daily_check(self.store.clone(), self.notify.clone()).await
    }
}

async fn run_daily_check(
    store: Arc<HabitStore>,
    notify: NotifyFn,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let users = store.all_users().await?;
    let mut notified = 0usize;

    for user_id in users {
        let habits = store.get_habits(&user_id).await?;
        if habits.is_empty() {
            continue;
        }
        notify(user_id, habits).await;
        notified += 1;
    }

    tracing::info!("Reminder run complete - notified {} user(s)", notified);
    Ok(())
}
