use anyhow::{anyhow, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: String,
    pub default_timezone: String,
    pub cache_ttl_secs: u64,
    pub reminder_hour: u8,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let data_file = env::var("HABIT_DATA_FILE")
            .unwrap_or_else(|_| "./data/habits.json".to_string());
        let data_file = if data_file.trim().is_empty() {
            "./data/habits.json".to_string()
        } else {
            data_file
        };

        let default_timezone = env::var("DEFAULT_TIMEZONE")
            .unwrap_or_else(|_| "UTC".to_string());
        let default_timezone = if default_timezone.trim().is_empty() {
            "UTC".to_string()
        } else {
            default_timezone
        };

        let ttl_str = env::var("CACHE_TTL_SECS")
            .unwrap_or_else(|_| "30".to_string());
        let cache_ttl_secs = ttl_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid CACHE_TTL_SECS"))?;

        let hour_str = env::var("REMINDER_HOUR")
            .unwrap_or_else(|_| "9".to_string());
        let reminder_hour: u8 = hour_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid REMINDER_HOUR"))?;
        if reminder_hour > 23 {
            return Err(anyhow!("REMINDER_HOUR must be between 0 and 23"));
        }

        Ok(Config {
            data_file,
            default_timezone,
            cache_ttl_secs,
            reminder_hour,
        })
    }
}
